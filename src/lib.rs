//! A descriptor-driven decoder for binary game replay headers.
//!
//! Rather than hand-writing a parser per field, a record is described by an
//! ordered list of [`FieldDescriptor`](sans::descriptor::FieldDescriptor)s, each
//! naming a semantic type, a byte width, and whether the field runs until a
//! double-zero terminator. A small interpreter walks the list against a byte
//! stream and produces the typed record.
//!
//! Most users should begin with the functions and derive macro in the [`avec`]
//! module, and the ready-made [`header::ReplayHeader`]. If these prove
//! insufficient (for example, when a schema is only known at runtime), drive
//! the engine directly as described in the [`sans`] module.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `derive`: enable the `FromRecord` derive macro (default).
//! - `cli`: build the `replay-header` binary (default).

// Lets the derive macro name this crate by path from inside it.
extern crate self as replay_header;

pub mod avec;
#[cfg(feature = "derive")]
pub mod header;
pub mod sans;
