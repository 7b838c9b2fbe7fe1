//! Decoded records.

use std::borrow::Cow;

use super::value::Value;

/// The fields of a decoded record, in descriptor order.
///
/// A field is `None` if its descriptor was malformed. Every other field holds
/// a value, possibly degraded by a short read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub(super) fields: Vec<(Cow<'static, str>, Option<Value>)>,
    pub(super) position: u64,
}

impl Record {
    /// Look up a field by name.
    ///
    /// Returns the first field with the name, if it was decoded.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .and_then(|(_, v)| v.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Value>)> {
        self.fields.iter().map(|(n, v)| (n.as_ref(), v.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Stream position after the last field was decoded.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Take the values, in descriptor order.
    pub fn into_values(self) -> impl Iterator<Item = Option<Value>> {
        self.fields.into_iter().map(|(_, v)| v)
    }
}
