//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode a typed record from files, readers and
//! data slices, publishing to the [`FromRecord`] trait.
//!
//! In most cases the trait can be derived. See the
//! [`FromRecord`](macro@FromRecord) macro for details.

pub mod reader;
pub mod slice;

pub use reader::{Error, decode as decode_reader, decode_file, open};
pub use slice::decode as decode_slice;

use crate::sans::{descriptor::FieldDescriptor, record::Record};

/// Derive [`FromRecord`] for a struct representing a single record.
///
/// _Requires Cargo feature `derive`._
///
/// # Example
///
/// Add the `field` attribute to each `Option<T>` struct field, where `T` is
/// one of `Vec<u8>`, [`Text`](crate::sans::value::Text), `i16` or `i32`. Fields
/// are decoded in declaration order.
///
/// - `size = N` sets the field width, or the unit width of a delimited field.
/// - `delimited` reads units until one starting with two zero bytes.
/// - `narrow` keeps only the first byte of each unit of a delimited field.
///
/// ```
/// #[derive(Debug, Default, FromRecord)]
/// struct Lobby {
///     #[field(size = 4)]
///     seed: Option<i32>,
///     #[field(size = 2, delimited, narrow)]
///     host: Option<Text>,
///     #[field(size = 8)]
///     reserved: Option<Vec<u8>>,
/// }
/// ```
///
/// A field is `None` only if its descriptor was malformed. Rather than
/// decoding directly into domain types, it's recommended to store the received
/// values and process them afterward in an accessor.
///
/// ```
/// impl Lobby {
///     fn host(&self) -> Option<String> {
///         self.host.as_ref().map(Text::to_string_lossy)
///     }
/// }
/// ```
#[cfg(feature = "derive")]
pub use replay_header_derive::FromRecord;

/// Build a typed record from a decoded [`Record`].
///
/// See the [`FromRecord`](macro@FromRecord) derive macro for an automatic
/// implementation of this trait.
pub trait FromRecord: Sized {
    /// The fields of this record, in stream order.
    const SCHEMA: &'static [FieldDescriptor];

    /// Build from a record decoded against [`FromRecord::SCHEMA`].
    fn from_record(record: Record) -> Self;
}
