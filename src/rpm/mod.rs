//! RPM header blob decoding.
//!
//! Each value pulled out of the Packages database is a flat header blob:
//! an index-length/data-length preamble, a table of 16-byte entry
//! descriptors, then the data segment the descriptors point into.

pub mod fields;
pub mod header;

// Package metadata tags.
pub const TAG_NAME: i32 = 1000;
pub const TAG_VERSION: i32 = 1001;
pub const TAG_RELEASE: i32 = 1002;
pub const TAG_EPOCH: i32 = 1003;
pub const TAG_SIZE: i32 = 1009;
pub const TAG_ARCH: i32 = 1022;

/// Tags RPM reserves for its own bookkeeping (header regions, signature
/// plumbing); never package metadata, always skipped.
pub const PRIVATE_TAGS: [i32; 6] = [61, 62, 63, 64, 100, 256];

/// Bound on the declared descriptor count, to keep a corrupt preamble from
/// driving a huge allocation.
pub const MAX_INDEX_LENGTH: i32 = 50_000;

/// Size of one entry descriptor: tag(4) + type(4) + offset(4) + count(4).
pub const ENTRY_INFO_SIZE: usize = 16;

/// On-disk data types an entry descriptor may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpmType {
    Null = 0,
    Char = 1,
    Int8 = 2,
    Int16 = 3,
    Int32 = 4,
    Int64 = 5,
    String = 6,
    Bin = 7,
    StringArray = 8,
    I18nString = 9,
}

impl RpmType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(RpmType::Null),
            1 => Some(RpmType::Char),
            2 => Some(RpmType::Int8),
            3 => Some(RpmType::Int16),
            4 => Some(RpmType::Int32),
            5 => Some(RpmType::Int64),
            6 => Some(RpmType::String),
            7 => Some(RpmType::Bin),
            8 => Some(RpmType::StringArray),
            9 => Some(RpmType::I18nString),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> u32 {
        *self as u32
    }
}
