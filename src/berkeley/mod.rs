//! BerkeleyDB Hash database page traversal.
//!
//! Legacy RPM package managers store the installed-package database as a
//! BerkeleyDB Hash file (`/var/lib/rpm/Packages`). This module reads such a
//! file in memory and extracts every value blob, each of which is one
//! serialized RPM package header.

pub mod hash_index;
pub mod metadata;
pub mod overflow;
pub mod walker;

use crate::types::error::ParseError;

/// Hash database magic number, little-endian u32 at byte 12 of page 0.
pub const MAGIC_NUMBER: u32 = 0x0006_1561;

/// Every page starts with a 26-byte header.
pub const PAGE_HEADER_SIZE: usize = 26;

/// Hash index entries are 2-byte offsets.
pub const HASH_INDEX_ENTRY_SIZE: usize = 2;

/// Upper bound on the metadata entries count; anything larger is treated as
/// corruption rather than allocated for.
pub const MAX_ENTRIES: u32 = 50_000;

/*
 * Common page header layout (all page types):
 *   lsn(8) | page_no(4) | prev_page_no(4) | next_page_no(4) |
 *   entries(2) | free_area_offset(2) | level(1) | page_type(1)
 */
pub const PAGE_NO_OFFSET: usize = 8;
pub const NEXT_PAGE_NO_OFFSET: usize = 16;
pub const ENTRIES_OFFSET: usize = 20;
pub const FREE_AREA_OFFSET: usize = 22;
pub const PAGE_TYPE_OFFSET: usize = 25;

// Metadata (page 0) field offsets.
pub const MAGIC_OFFSET: usize = 12;
pub const PAGE_SIZE_OFFSET: usize = 20;
pub const ENCRYPTION_OFFSET: usize = 24;
pub const LAST_PAGE_NO_OFFSET: usize = 32;
pub const METADATA_ENTRIES_OFFSET: usize = 88;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageType {
    Overflow = 7,
    HashMetadata = 8,
    Hash = 13,
}

impl PageType {
    /// Unknown tags yield `None`; the walker skips such pages rather than
    /// failing the scan.
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            7 => Some(PageType::Overflow),
            8 => Some(PageType::HashMetadata),
            13 => Some(PageType::Hash),
            _ => None,
        }
    }

    pub fn as_u8(&self) -> u8 {
        *self as u8
    }

    pub fn expect_overflow(value: u8) -> Result<(), ParseError> {
        match PageType::from_u8(value) {
            Some(PageType::Overflow) => Ok(()),
            _ => Err(ParseError::UnexpectedPageType { actual: value }),
        }
    }
}
