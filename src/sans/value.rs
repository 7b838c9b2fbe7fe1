//! Decoded scalar values.

use std::fmt;

use zerocopy::byteorder::{I16, I32, LittleEndian};

use super::descriptor::Kind;

/// A decoded field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Raw(Vec<u8>),
    Text(Text),
    I16(i16),
    I32(i32),
}

impl Value {
    /// Interpret bytes as a value of a kind.
    ///
    /// Raw and text bytes are kept verbatim. Integers are little-endian; bytes
    /// beyond the width are ignored, and missing high-order bytes (left by a
    /// short read) are taken to be zero.
    pub fn absorb(kind: Kind, bytes: Vec<u8>) -> Self {
        match kind {
            Kind::Raw => Value::Raw(bytes),
            Kind::Text => Value::Text(Text(bytes)),
            Kind::I16 => {
                let value: I16<LittleEndian> = zerocopy::transmute!(widen::<2>(&bytes));
                Value::I16(value.get())
            }
            Kind::I32 => {
                let value: I32<LittleEndian> = zerocopy::transmute!(widen::<4>(&bytes));
                Value::I32(value.get())
            }
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Value::Raw(_) => Kind::Raw,
            Value::Text(_) => Kind::Text,
            Value::I16(_) => Kind::I16,
            Value::I32(_) => Kind::I32,
        }
    }

    /// Number of bytes held by a raw or text value.
    pub fn byte_len(&self) -> Option<usize> {
        match self {
            Value::Raw(b) => Some(b.len()),
            Value::Text(t) => Some(t.len()),
            Value::I16(_) | Value::I32(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Raw(bytes) => {
                for b in bytes {
                    write!(f, "{b:02x}")?;
                }
                Ok(())
            }
            Value::Text(text) => write!(f, "{text:?}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
        }
    }
}

fn widen<const N: usize>(bytes: &[u8]) -> [u8; N] {
    let mut buf = [0; N];
    let n = bytes.len().min(N);
    buf[..n].copy_from_slice(&bytes[..n]);
    buf
}

/// Bytes interpreted as text.
///
/// No encoding is enforced: embedded zeros and invalid sequences are kept as
/// read. Convert on access with [`Text::to_string_lossy`] or, for wide strings
/// that were not narrowed, [`Text::to_string_utf16_lossy`].
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Text(pub Vec<u8>);

impl Text {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_string_lossy(&self) -> String {
        String::from_utf8_lossy(&self.0).into_owned()
    }

    /// Decode little-endian UTF-16, replacing invalid code units.
    ///
    /// A trailing odd byte is dropped.
    pub fn to_string_utf16_lossy(&self) -> String {
        let units = self
            .0
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]));

        char::decode_utf16(units)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.to_string_lossy(), f)
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Self(s.as_bytes().to_vec())
    }
}

/// Conversion from a decoded [`Value`] into a field type.
///
/// Implemented for the field types of the [`FromRecord`] derive macro.
///
/// [`FromRecord`]: crate::avec::FromRecord
pub trait FromValue: Sized {
    /// The kind of value this type is decoded from.
    const KIND: Kind;

    /// Convert a value, if it is of the matching kind.
    fn from_value(value: Value) -> Option<Self>;
}

macro_rules! from_value {
    ($t:ty, $variant:ident) => {
        impl FromValue for $t {
            const KIND: Kind = Kind::$variant;

            fn from_value(value: Value) -> Option<Self> {
                match value {
                    Value::$variant(v) => Some(v),
                    _ => None,
                }
            }
        }
    };
}

from_value!(Vec<u8>, Raw);
from_value!(Text, Text);
from_value!(i16, I16);
from_value!(i32, I32);
