use strum::{EnumIs, EnumTryAs};
use thiserror::Error;

use crate::instr::InstrId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumIs, EnumTryAs, Error)]
pub enum Error {
    /// The instruction is not part of the computation.
    #[error(
        "The instruction `{id}` is not defined within the computation. It was either never added or has already been removed."
    )]
    UnknownInstruction { id: InstrId },

    /// An operand refers to an instruction that does not exist (yet).
    #[error(
        "An operand refers to the undefined instruction `{operand}`. Operands must be added to the computation before their users."
    )]
    UndefinedOperand { operand: InstrId },

    /// Removing the instruction would leave dangling operands behind.
    #[error(
        "The instruction `{id}` cannot be removed while it is still used by {} other instruction(s): {users:?}.",
        .users.len()
    )]
    InstructionHasUsers { id: InstrId, users: Vec<InstrId> },

    /// Every instruction id of the computation has been handed out.
    #[error(
        "The computation ran out of instruction ids. Ids are never reused, so at most {} instructions can ever be added.",
        u32::MAX
    )]
    InstructionIdsExhausted,

    /// The textual form of a frontend attribute map could not be parsed.
    #[error("Failed to parse frontend attributes: {}", .errors.join("; "))]
    Parse { errors: Vec<String> },

    /// Keys are unique within a single frontend attribute map.
    #[error(
        "The frontend attribute `{key}` appears more than once in the same attribute map. Keys must be unique within a map."
    )]
    DuplicateAttribute { key: String },
}

pub type Result<T> = std::result::Result<T, Error>;
