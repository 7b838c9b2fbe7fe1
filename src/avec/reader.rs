//! Reader-based decoder implementation.

use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use thiserror::Error;

use crate::sans::{self, report::Reporter, source::ReaderSource};

use super::FromRecord;

/// Errors occurring before decoding can begin.
///
/// Once a source is available, decoding itself never fails; problems are
/// published as [`Warning`](crate::sans::report::Warning)s instead.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("Could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Decode a record from a reader, publishing warnings to a reporter.
///
/// The reader is left positioned after the record.
///
/// This method is also re-exported as `replay_header::avec::decode_reader`.
pub fn decode<T: FromRecord>(r: &mut impl Read, o: &mut impl Reporter) -> T {
    let mut source = ReaderSource::new(r);
    T::from_record(sans::decode(T::SCHEMA, &mut source, o))
}

/// Open a file for decoding.
pub fn open(path: impl AsRef<Path>) -> Result<BufReader<File>, Error> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "opened");

    Ok(BufReader::new(file))
}

/// Open a file and decode a record from its start.
pub fn decode_file<T: FromRecord>(
    path: impl AsRef<Path>,
    o: &mut impl Reporter,
) -> Result<T, Error> {
    Ok(decode(&mut open(path)?, o))
}
