//! Dataflow-graph instructions with frontend attribute tagging.
//!
//! Frontend attributes are string-keyed, string-valued hints attached to
//! instructions. They let early stages tell later passes things the graph
//! cannot express, such as an instruction whose reads and writes never
//! alias:
//!
//! ```
//! use dfinstr::{
//!     accessors::{has_disjoint_read_write_regions, mark_disjoint_read_write_regions},
//!     graph::Computation,
//!     instr::Opcode,
//! };
//!
//! let mut computation = Computation::default();
//! let buffer = computation.add_instruction(Opcode::Parameter, []).unwrap();
//! let update = computation.add_instruction(Opcode::Parameter, []).unwrap();
//! let dus = computation
//!     .add_instruction(Opcode::DynamicUpdateSlice, [buffer, update])
//!     .unwrap();
//!
//! assert!(!has_disjoint_read_write_regions(computation.get(dus).unwrap()));
//! mark_disjoint_read_write_regions(computation.get_mut(dus).unwrap());
//! assert!(has_disjoint_read_write_regions(computation.get(dus).unwrap()));
//! ```
pub mod accessors;
pub mod attributes;
pub mod constants;
pub mod graph;
pub mod instr;
#[cfg(feature = "chumsky")]
pub mod parser;
pub mod utils;
