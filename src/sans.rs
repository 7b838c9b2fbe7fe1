//! Descriptor-driven decoding engine.
//!
//! This module is intended for applications that build schemas at runtime or
//! need to observe decoding in detail. See [`crate::avec`] for interfaces
//! covering common decoding patterns.
//!
//! # Architecture
//!
//! A decode pass pulls bytes from a [`Source`](source::Source) according to a
//! list of [`FieldDescriptor`](descriptor::FieldDescriptor)s, strictly in
//! order: the offset of each field depends on the length of every variable
//! length field before it. Each field is read with one of two strategies:
//!
//! - Fixed-width fields take exactly `unit_size` bytes in a single read.
//!
//! - Delimited fields take `unit_size` bytes at a time until a unit whose
//! first two bytes are zero. The terminating unit is consumed but not kept.
//! Narrow fields keep only the first byte of each unit, recovering single-byte
//! characters from a wide encoding.
//!
//! The bytes read are turned into a [`Value`](value::Value) and collected into
//! a [`Record`](record::Record).
//!
//! Problems are never fatal. A short read degrades its field (and ends a
//! delimited field early), while a malformed descriptor leaves its field
//! unset. Both are published to a [`Reporter`](report::Reporter) and decoding
//! moves on to the next field.

pub mod descriptor;
pub mod engine;
pub mod record;
pub mod report;
pub mod source;
pub mod value;

pub use engine::decode;
