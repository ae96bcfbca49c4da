//! Computations: the owners of instructions.
//!
//! A [`Computation`] exclusively owns its instructions and, through them, all
//! attached frontend attribute maps. Removing an instruction hands it back by
//! value, so its attributes leave the graph together with it.
use std::collections::BTreeMap;

use log::debug;
use smallvec::SmallVec;
use uuid::Uuid;

use crate::{
    instr::{InstrId, Instruction, Opcode},
    utils::{Error, Result},
};

#[derive(Debug, Clone)]
pub struct Computation {
    pub uuid: Uuid,
    pub name: Option<String>,
    instructions: BTreeMap<InstrId, Instruction>,
    next_id: u32,
}

impl Default for Computation {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Computation {
    pub fn new(name: Option<String>) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            name,
            instructions: BTreeMap::new(),
            next_id: 0,
        }
    }

    /// Hand out the next id. `u32::MAX` itself is never allocated: once the
    /// counter reaches it the computation refuses further instructions.
    fn allocate_id(&mut self) -> Result<InstrId> {
        let next = self
            .next_id
            .checked_add(1)
            .ok_or(Error::InstructionIdsExhausted)?;
        let id = InstrId(self.next_id);
        self.next_id = next;
        Ok(id)
    }

    /// Add a new instruction. Every operand must already be part of the
    /// computation. Ids are never reused, even after removal.
    pub fn add_instruction(
        &mut self,
        opcode: Opcode,
        operands: impl IntoIterator<Item = InstrId>,
    ) -> Result<InstrId> {
        let operands: Vec<InstrId> = operands.into_iter().collect();
        if let Some(operand) = operands
            .iter()
            .find(|operand| !self.instructions.contains_key(operand))
        {
            return Err(Error::UndefinedOperand { operand: *operand });
        }

        let id = self.allocate_id()?;
        debug!("adding {} {} with {} operand(s)", opcode, id, operands.len());
        self.instructions
            .insert(id, Instruction::new(id, opcode, operands));
        Ok(id)
    }

    pub fn get(&self, id: InstrId) -> Option<&Instruction> {
        self.instructions.get(&id)
    }

    pub fn get_mut(&mut self, id: InstrId) -> Option<&mut Instruction> {
        self.instructions.get_mut(&id)
    }

    pub fn contains(&self, id: InstrId) -> bool {
        self.instructions.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Iterate over instructions in id (hence creation) order.
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.values()
    }

    /// Instructions consuming the result of `id`, each listed once.
    pub fn users(&self, id: InstrId) -> SmallVec<InstrId, 4> {
        self.instructions
            .values()
            .filter(|instr| instr.operands.contains(&id))
            .map(|instr| instr.id)
            .collect()
    }

    /// Remove an unused instruction and return it with its attributes.
    pub fn remove_instruction(&mut self, id: InstrId) -> Result<Instruction> {
        if !self.instructions.contains_key(&id) {
            return Err(Error::UnknownInstruction { id });
        }

        let users = self.users(id);
        if !users.is_empty() {
            return Err(Error::InstructionHasUsers {
                id,
                users: users.into_iter().collect(),
            });
        }

        debug!("removing {}", id);
        self.instructions
            .remove(&id)
            .ok_or(Error::UnknownInstruction { id })
    }

    /// Duplicate `id` under a fresh id. The clone has the same opcode and
    /// operands and carries copies of all frontend attribute maps.
    pub fn clone_instruction(&mut self, id: InstrId) -> Result<InstrId> {
        if !self.instructions.contains_key(&id) {
            return Err(Error::UnknownInstruction { id });
        }

        let clone_id = self.allocate_id()?;
        let original = self
            .instructions
            .get(&id)
            .ok_or(Error::UnknownInstruction { id })?;

        let mut clone = Instruction::new(
            clone_id,
            original.opcode,
            original.operands.iter().copied(),
        );
        clone.copy_frontend_attributes_from(original);

        debug!("cloned {} into {}", id, clone_id);
        self.instructions.insert(clone_id, clone);
        Ok(clone_id)
    }
}

impl std::fmt::Display for Computation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => writeln!(f, "computation {} {{", name)?,
            None => writeln!(f, "computation {{")?,
        }
        for instr in self.instructions.values() {
            writeln!(f, "    {}", instr)?;
        }
        write!(f, "}}")
    }
}
