//! Declarative field metadata.

use std::borrow::Cow;

use thiserror::Error;

/// The semantic type of a field, selecting the [`Value`](super::value::Value)
/// variant its bytes are decoded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Arbitrary bytes, stored verbatim.
    Raw,
    /// Bytes interpreted as text, without validation.
    Text,
    /// A little-endian `i16`.
    I16,
    /// A little-endian `i32`.
    I32,
}

impl Kind {
    /// The exact byte width of this kind, if it has one.
    pub const fn width(self) -> Option<usize> {
        match self {
            Kind::Raw | Kind::Text => None,
            Kind::I16 => Some(size_of::<i16>()),
            Kind::I32 => Some(size_of::<i32>()),
        }
    }
}

/// Static metadata describing how to decode one field.
///
/// Descriptors are ordinary data and can be built in constant expressions:
///
/// ```
/// const FILE_NAME: FieldDescriptor = FieldDescriptor::new("file_name", Kind::Text, 2)
///     .delimited()
///     .narrow();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name the decoded value is published under.
    pub name: Cow<'static, str>,
    pub kind: Kind,
    /// Width of a fixed field, or of each unit of a delimited field.
    pub unit_size: usize,
    /// Read units until a double-zero terminator.
    pub delimited: bool,
    /// Keep only the first byte of each unit of a delimited field.
    pub narrow: bool,
}

impl FieldDescriptor {
    /// Describe a fixed-width field.
    pub const fn new(name: &'static str, kind: Kind, unit_size: usize) -> Self {
        Self {
            name: Cow::Borrowed(name),
            kind,
            unit_size,
            delimited: false,
            narrow: false,
        }
    }

    /// Make this a terminator-delimited field, read in units of `unit_size`.
    pub const fn delimited(mut self) -> Self {
        self.delimited = true;
        self
    }

    /// Keep only the first byte of each unit.
    pub const fn narrow(mut self) -> Self {
        self.narrow = true;
        self
    }

    /// Check this descriptor, reporting the first problem found.
    ///
    /// Problems that leave the field unreadable are checked first.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.unit_size == 0 {
            Err(DescriptorError::MissingSize)?;
        }

        // The terminator is the first two bytes of a unit.
        if self.delimited && self.unit_size < 2 {
            Err(DescriptorError::UnitTooNarrow(self.unit_size))?;
        }

        if self.narrow && !self.delimited {
            Err(DescriptorError::NarrowWithoutDelimiter)?;
        }

        if let Some(width) = self.kind.width() {
            if self.delimited || self.unit_size != width {
                Err(DescriptorError::WidthMismatch {
                    kind: self.kind,
                    width,
                    unit_size: self.unit_size,
                })?;
            }
        }

        Ok(())
    }

    /// Build a descriptor from a compact tag such as `size=2,nullterm,smallchar`.
    ///
    /// Pairs are separated by commas. `size=N` sets the unit size, `nullterm`
    /// makes the field delimited and `smallchar` makes it narrow. Unrecognised
    /// keys are logged and ignored.
    ///
    /// The result is not validated; see [`FieldDescriptor::validate`].
    pub fn from_tag(
        name: impl Into<Cow<'static, str>>,
        kind: Kind,
        tag: &str,
    ) -> Result<Self, TagError> {
        let name = name.into();

        let mut unit_size = None;
        let mut delimited = false;
        let mut narrow = false;

        for pair in tag.split(',').map(str::trim) {
            let mut parts = pair.split('=');
            let key = parts.next().unwrap_or_default();
            let value = parts.next();

            if parts.next().is_some() {
                Err(TagError::MalformedPair(pair.to_owned()))?;
            }

            match (key, value) {
                ("size", Some(value)) => {
                    let size = value
                        .parse()
                        .map_err(|_| TagError::InvalidSize(value.to_owned()))?;
                    unit_size = Some(size);
                }
                ("size", None) => Err(TagError::InvalidSize(String::new()))?,
                ("nullterm", None) => delimited = true,
                ("smallchar", None) => narrow = true,
                _ => tracing::warn!(field = %name, pair, "ignoring unrecognised tag pair"),
            }
        }

        Ok(Self {
            unit_size: unit_size.ok_or(TagError::MissingSize)?,
            name,
            kind,
            delimited,
            narrow,
        })
    }
}

/// A problem with a descriptor.
///
/// Only errors for which [`DescriptorError::skips_field`] holds prevent a
/// field from being read. The others are irregular but still have a usable
/// size, so the field is read as if the offending setting were absent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DescriptorError {
    /// Unit size is zero.
    #[error("Unit size is missing.")]
    MissingSize,
    /// Delimited units are too narrow to hold a terminator.
    #[error("Delimited units must be at least two bytes wide (found {0}).")]
    UnitTooNarrow(usize),
    /// Narrowing requested for a fixed-width field.
    #[error("Only delimited fields can be narrowed.")]
    NarrowWithoutDelimiter,
    /// Integer field with the wrong width, or delimited.
    #[error("{kind:?} fields must be fixed at {width} bytes (found {unit_size}).")]
    WidthMismatch {
        kind: Kind,
        width: usize,
        unit_size: usize,
    },
}

impl DescriptorError {
    /// Whether the field has no usable size and cannot be read at all.
    pub fn skips_field(&self) -> bool {
        matches!(self, Self::MissingSize | Self::UnitTooNarrow(_))
    }
}

/// An error parsing a descriptor tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    /// No `size` pair.
    #[error("Tag has no size.")]
    MissingSize,
    /// A `size` pair without a valid unsigned integer.
    #[error("Invalid size ({0:?}).")]
    InvalidSize(String),
    /// A pair with more than one `=`.
    #[error("Malformed tag pair ({0:?}).")]
    MalformedPair(String),
}
