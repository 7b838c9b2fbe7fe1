//! Publishing non-fatal decode problems.

use std::{borrow::Cow, io};

use thiserror::Error;

use super::descriptor::DescriptorError;

/// A problem encountered while decoding a field.
///
/// Warnings never stop a decode pass.
#[derive(Debug, Error)]
pub enum Warning {
    /// A read returned fewer bytes than requested.
    #[error("Short read in field `{field}`: expected {expected} bytes, got {got}.")]
    ShortRead {
        field: Cow<'static, str>,
        expected: usize,
        got: usize,
        /// Set if the source failed rather than ran out.
        #[source]
        error: Option<io::Error>,
    },
    /// A descriptor had no usable size, so its field was skipped.
    #[error("Skipped field `{field}`: {error}")]
    MalformedDescriptor {
        field: Cow<'static, str>,
        #[source]
        error: DescriptorError,
    },
    /// A descriptor had an ignored or mismatched setting. Its field was still
    /// read by unit size.
    #[error("Irregular field `{field}`: {error}")]
    IrregularDescriptor {
        field: Cow<'static, str>,
        #[source]
        error: DescriptorError,
    },
}

impl Warning {
    /// Name of the field the warning concerns.
    pub fn field(&self) -> &str {
        match self {
            Warning::ShortRead { field, .. }
            | Warning::MalformedDescriptor { field, .. }
            | Warning::IrregularDescriptor { field, .. } => field,
        }
    }
}

/// Receive warnings from a decode pass.
pub trait Reporter {
    fn report(&mut self, warning: Warning);
}

/// Log warnings with [`tracing`].
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&mut self, warning: Warning) {
        match &warning {
            Warning::ShortRead {
                field,
                expected,
                got,
                error,
            } => tracing::warn!(
                field = %field,
                expected,
                got,
                error = error.as_ref().map(tracing::field::display),
                "short read"
            ),
            Warning::MalformedDescriptor { field, error } => {
                tracing::warn!(field = %field, %error, "skipping malformed field")
            }
            Warning::IrregularDescriptor { field, error } => {
                tracing::warn!(field = %field, %error, "reading irregular field")
            }
        }
    }
}

/// Collect warnings for later inspection.
impl Reporter for Vec<Warning> {
    fn report(&mut self, warning: Warning) {
        self.push(warning);
    }
}

/// Discard warnings.
#[derive(Debug, Default, Clone, Copy)]
pub struct Ignore;

impl Reporter for Ignore {
    fn report(&mut self, _: Warning) {}
}

impl<T: Reporter + ?Sized> Reporter for &mut T {
    fn report(&mut self, warning: Warning) {
        (**self).report(warning);
    }
}
