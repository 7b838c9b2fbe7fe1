//! Slice-based decoder implementation.

use crate::sans::{self, report::Reporter, source::SliceSource};

use super::FromRecord;

/// Decode a record from the start of a slice, publishing warnings to a
/// reporter.
///
/// Returns the record and the number of bytes it occupied.
///
/// This method is also re-exported as `replay_header::avec::decode_slice`.
pub fn decode<T: FromRecord>(r: &[u8], o: &mut impl Reporter) -> (T, usize) {
    let mut source = SliceSource::new(r);
    let record = sans::decode(T::SCHEMA, &mut source, o);
    let consumed = r.len() - source.remaining().len();

    (T::from_record(record), consumed)
}
