use crate::{
    berkeley::{HASH_INDEX_ENTRY_SIZE, PAGE_HEADER_SIZE, PAGE_NO_OFFSET},
    bytes::{read_i16_le, read_u32_le},
    types::error::{ParseError, Result},
};

/*
 * Hash page layout:
 * ┌────────────────────────────────────────────────────────────┐
 * │                 PAGE HEADER (26 bytes)                     │
 * ├────────────────────────────────────────────────────────────┤
 * │  HASH INDEX: [key0(2)] [val0(2)] [key1(2)] [val1(2)] ...   │
 * ├────────────────────────────────────────────────────────────┤
 * │  key/value data, addressed by the offsets above            │
 * └────────────────────────────────────────────────────────────┘
 */

/// Extracts the value offsets from a Hash page's index region.
///
/// The index holds `entries` 2-byte offsets, alternating key/value starting
/// with a key; only the values are returned, in on-disk order. Keys are
/// opaque to this reader. An odd entry count means the page cannot consist
/// of key/value pairs and fails the parse.
pub fn hash_index_values(page: &[u8], entries: u16) -> Result<Vec<i16>> {
    if entries % 2 != 0 {
        let page_no = read_u32_le(page, PAGE_NO_OFFSET)?;
        return Err(ParseError::OddEntryCount { entries, page_no });
    }

    let mut values = Vec::with_capacity(entries as usize / 2);
    for slot in 0..entries as usize {
        // Values occupy every second slot, starting at the second.
        if slot % 2 == 0 {
            continue;
        }
        let offset = PAGE_HEADER_SIZE + slot * HASH_INDEX_ENTRY_SIZE;
        values.push(read_i16_le(page, offset)?);
    }
    Ok(values)
}
