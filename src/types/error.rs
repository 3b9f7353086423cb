use thiserror::Error;

use crate::types::PageNumber;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Odd hash table entry count {entries} on page {page_no}")]
    OddEntryCount { entries: u16, page_no: PageNumber },

    #[error("Expected overflow page, found page type {actual}")]
    UnexpectedPageType { actual: u8 },

    #[error("Invalid magic number: {0:#010x}")]
    InvalidMagic(u32),

    #[error("Page 0 is not a hash metadata page (page type {0})")]
    NotHashMetadata(u8),

    #[error("Database is encrypted (algorithm {0})")]
    Encrypted(u8),

    #[error("Hash table entry count {0} out of range")]
    EntryCountOutOfRange(u32),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(u32),

    #[error("Header index length {0} out of range")]
    IndexLengthOutOfRange(i32),

    #[error("Descriptor offset {offset} (length {length}) outside data segment")]
    InvalidDescriptorOffset { offset: i32, length: i64 },

    #[error("Tag {tag}: expected type {expected}, got {actual}")]
    FieldTypeMismatch { tag: i32, expected: u32, actual: u32 },

    #[error("Truncated input: need {needed} bytes at offset {offset}, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
}

pub type Result<T> = std::result::Result<T, ParseError>;
