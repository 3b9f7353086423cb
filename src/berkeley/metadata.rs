use crate::{
    berkeley::{
        ENCRYPTION_OFFSET, LAST_PAGE_NO_OFFSET, MAGIC_NUMBER, MAGIC_OFFSET, MAX_ENTRIES,
        METADATA_ENTRIES_OFFSET, PAGE_SIZE_OFFSET, PAGE_TYPE_OFFSET, PageType,
    },
    bytes::{byte_at, read_u32_le},
    types::{
        PageNumber,
        error::{ParseError, Result},
    },
};

/// Page sizes a Hash database may legally declare.
pub const VALID_PAGE_SIZES: [u32; 8] = [512, 1024, 2048, 4096, 8192, 16384, 32768, 65536];

/// Validated fields of the Hash metadata page (page 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashMetadata {
    pub magic: u32,
    pub page_size: u32,
    pub encryption_alg: u8,
    pub last_page_no: PageNumber,
    pub entries: u32,
}

impl HashMetadata {
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        validate_metadata(data)?;
        let page_size = read_u32_le(data, PAGE_SIZE_OFFSET)?;
        validate_page_size(page_size)?;
        Ok(Self {
            magic: read_u32_le(data, MAGIC_OFFSET)?,
            page_size,
            encryption_alg: byte_at(data, ENCRYPTION_OFFSET)?,
            last_page_no: read_u32_le(data, LAST_PAGE_NO_OFFSET)?,
            entries: read_u32_le(data, METADATA_ENTRIES_OFFSET)?,
        })
    }
}

/// Checks that the buffer starts with a plausible, unencrypted Hash metadata
/// page: magic number, page-type tag, encryption byte, entries bound.
pub fn validate_metadata(data: &[u8]) -> Result<()> {
    let magic = read_u32_le(data, MAGIC_OFFSET)?;
    if magic != MAGIC_NUMBER {
        return Err(ParseError::InvalidMagic(magic));
    }

    let page_type = byte_at(data, PAGE_TYPE_OFFSET)?;
    if PageType::from_u8(page_type) != Some(PageType::HashMetadata) {
        return Err(ParseError::NotHashMetadata(page_type));
    }

    let encryption_alg = byte_at(data, ENCRYPTION_OFFSET)?;
    if encryption_alg != 0 {
        return Err(ParseError::Encrypted(encryption_alg));
    }

    let entries = read_u32_le(data, METADATA_ENTRIES_OFFSET)?;
    if entries > MAX_ENTRIES {
        return Err(ParseError::EntryCountOutOfRange(entries));
    }

    Ok(())
}

/// Page size must be one of the eight power-of-two sizes the format allows.
pub fn validate_page_size(page_size: u32) -> Result<()> {
    if VALID_PAGE_SIZES.contains(&page_size) {
        Ok(())
    } else {
        Err(ParseError::InvalidPageSize(page_size))
    }
}
