//! Instructions of the dataflow graph
//!
//! An [`Instruction`] is a node of a [`Computation`](crate::graph::Computation):
//! an opcode, the ids of the instructions it consumes, and the frontend
//! attribute maps passes attached to it. Instructions are plain data; the
//! owning computation is responsible for keeping operand ids valid.
use log::trace;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};

use crate::attributes::{FrontendAttributed, FrontendAttributes};

/// Identifier of an instruction within its computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InstrId(pub u32);

impl std::fmt::Display for InstrId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// Dataflow operations.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, EnumIter)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Opcode {
    /// Computation input
    Parameter,
    Constant,
    Add,
    Multiply,
    /// Copy of its single operand into a fresh buffer
    Copy,
    /// Overwrite a slice of the first operand with the second one, starting
    /// at the offsets given by the remaining operands
    DynamicUpdateSlice,
    Scatter,
    Gather,
    /// Opaque call into a backend-provided kernel
    CustomCall,
}

impl Opcode {
    /// Creates an [`Opcode`] from its string representation.
    pub fn from_str(s: &str) -> Option<Self> {
        Opcode::iter().find(|op| op.to_str() == s)
    }

    /// Returns the string representation of the [`Opcode`].
    pub fn to_str(&self) -> &'static str {
        match self {
            Opcode::Parameter => "parameter",
            Opcode::Constant => "constant",
            Opcode::Add => "add",
            Opcode::Multiply => "multiply",
            Opcode::Copy => "copy",
            Opcode::DynamicUpdateSlice => "dynamic-update-slice",
            Opcode::Scatter => "scatter",
            Opcode::Gather => "gather",
            Opcode::CustomCall => "custom-call",
        }
    }

    /// Returns true if the operation writes to memory it may also read from.
    ///
    /// These are the instructions for which a disjoint read/write regions hint
    /// is worth attaching.
    pub fn may_update_in_place(&self) -> bool {
        matches!(
            self,
            Opcode::DynamicUpdateSlice | Opcode::Scatter | Opcode::CustomCall
        )
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A node of the dataflow graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instruction {
    pub id: InstrId,
    pub opcode: Opcode,
    pub operands: Vec<InstrId>,
    frontend_attributes: Vec<FrontendAttributes>,
}

impl Instruction {
    /// Creates an instruction with no frontend attributes attached.
    pub fn new(id: InstrId, opcode: Opcode, operands: impl IntoIterator<Item = InstrId>) -> Self {
        Self {
            id,
            opcode,
            operands: operands.into_iter().collect(),
            frontend_attributes: Vec::new(),
        }
    }

    /// Append a copy of every attribute map of `other`, preserving their order.
    ///
    /// Maps already attached to `self` are kept in front, so on key collisions
    /// `self`'s own values still win.
    pub fn copy_frontend_attributes_from(&mut self, other: &Instruction) {
        for attrs in other.frontend_attribute_sets() {
            self.add_frontend_attributes(attrs.clone());
        }
    }
}

impl FrontendAttributed for Instruction {
    fn frontend_attribute_sets(&self) -> &[FrontendAttributes] {
        &self.frontend_attributes
    }

    fn add_frontend_attributes(&mut self, attrs: FrontendAttributes) {
        trace!("{}: appending frontend attributes {}", self.id, attrs);
        self.frontend_attributes.push(attrs);
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.id, self.opcode)?;
        for (i, operand) in self.operands.iter().enumerate() {
            if i == 0 {
                write!(f, " {}", operand)?;
            } else {
                write!(f, ", {}", operand)?;
            }
        }
        for attrs in &self.frontend_attributes {
            write!(f, ", frontend_attributes={}", attrs)?;
        }
        Ok(())
    }
}
