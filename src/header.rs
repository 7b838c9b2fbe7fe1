//! The replay file header.
//!
//! ```text
//! size  | type                    | field
//! ------+-------------------------+-----------------
//!     6 | text                    | game_type
//!     4 | i32                     | begin_timestamp
//!     4 | i32                     | end_timestamp
//!     2 | i16                     | timestamp_count
//!    12 | raw                     | reserved_a
//!   2/u | narrow text, terminated | file_name
//!    16 | raw                     | reserved_b
//!   2/u | narrow text, terminated | version
//!   2/u | narrow text, terminated | date_time
//!    12 | raw                     | reserved_c
//!   2/u | UTF-16 text, terminated | map
//!     2 | i16                     | extra_a
//!     4 | i32                     | extra_b ..= extra_e
//! ```
//!
//! Multi-byte integers are little-endian. Terminated strings are read in
//! two-byte units up to a `00 00` unit.

use crate::{avec::FromRecord, sans::value::Text};

/// The fixed preamble of a replay file.
#[derive(Debug, Default, Clone, PartialEq, Eq, FromRecord)]
pub struct ReplayHeader {
    #[field(size = 6)]
    pub game_type: Option<Text>,
    #[field(size = 4)]
    pub begin_timestamp: Option<i32>,
    #[field(size = 4)]
    pub end_timestamp: Option<i32>,
    #[field(size = 2)]
    pub timestamp_count: Option<i16>,
    #[field(size = 12)]
    pub reserved_a: Option<Vec<u8>>,
    #[field(size = 2, delimited, narrow)]
    pub file_name: Option<Text>,
    #[field(size = 16)]
    pub reserved_b: Option<Vec<u8>>,
    #[field(size = 2, delimited, narrow)]
    pub version: Option<Text>,
    #[field(size = 2, delimited, narrow)]
    pub date_time: Option<Text>,
    #[field(size = 12)]
    pub reserved_c: Option<Vec<u8>>,
    #[field(size = 2, delimited)]
    pub map: Option<Text>,
    #[field(size = 2)]
    pub extra_a: Option<i16>,
    #[field(size = 4)]
    pub extra_b: Option<i32>,
    #[field(size = 4)]
    pub extra_c: Option<i32>,
    #[field(size = 4)]
    pub extra_d: Option<i32>,
    #[field(size = 4)]
    pub extra_e: Option<i32>,
}

impl ReplayHeader {
    pub fn game_type(&self) -> Option<String> {
        self.game_type.as_ref().map(Text::to_string_lossy)
    }

    pub fn file_name(&self) -> Option<String> {
        self.file_name.as_ref().map(Text::to_string_lossy)
    }

    pub fn version(&self) -> Option<String> {
        self.version.as_ref().map(Text::to_string_lossy)
    }

    pub fn date_time(&self) -> Option<String> {
        self.date_time.as_ref().map(Text::to_string_lossy)
    }

    /// The map name. Unlike the other strings it is stored as UTF-16.
    pub fn map_name(&self) -> Option<String> {
        self.map.as_ref().map(Text::to_string_utf16_lossy)
    }
}
