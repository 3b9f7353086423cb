use tracing::debug;

use crate::{
    berkeley::{
        ENTRIES_OFFSET, PAGE_TYPE_OFFSET, PageType, hash_index::hash_index_values,
        metadata::HashMetadata, overflow::overflow_value_content,
    },
    bytes::read_u16_le,
    checkpoint::{Checkpoint, NoYield},
    types::{AbsoluteOffset, LocalOffset, error::Result},
};

/// Scans a whole Hash database and returns every overflow-stored value,
/// in ascending page order then hash-index order. For an RPM Packages
/// database each value is one serialized package header.
pub fn hash_db_values(data: &[u8]) -> Result<Vec<Vec<u8>>> {
    hash_db_values_with(data, &mut NoYield)
}

/// Same as [`hash_db_values`], ticking `checkpoint` after every page scanned.
pub fn hash_db_values_with(data: &[u8], checkpoint: &mut impl Checkpoint) -> Result<Vec<Vec<u8>>> {
    let metadata = HashMetadata::from_bytes(data)?;
    let page_size = metadata.page_size as usize;

    let mut blobs = Vec::new();

    // Page 0 is the metadata page itself.
    for page_no in 1..metadata.last_page_no {
        let page_start = AbsoluteOffset::of_page(page_no, page_size);
        let Some(page) = data.get(page_start.0..page_start.0 + page_size) else {
            break;
        };

        // Anything that is not a Hash page holds no value offsets.
        if PageType::from_u8(page[PAGE_TYPE_OFFSET]) != Some(PageType::Hash) {
            checkpoint.tick();
            continue;
        }

        let entries = read_u16_le(page, ENTRIES_OFFSET)?;
        for value in hash_index_values(page, entries)? {
            // Negative or out-of-page offsets cannot locate an inline
            // record; skip them like any other non-overflow value.
            let Ok(offset) = usize::try_from(value) else {
                continue;
            };
            let Some(&value_type) = page.get(offset) else {
                continue;
            };
            // Values stored inline in the Hash page are not package
            // headers; only overflow references are followed.
            if PageType::from_u8(value_type) != Some(PageType::Overflow) {
                continue;
            }
            blobs.push(overflow_value_content(
                data,
                page,
                LocalOffset(offset),
                page_size,
            )?);
        }

        checkpoint.tick();
    }

    debug!(
        pages = metadata.last_page_no,
        values = blobs.len(),
        "hash database scan complete"
    );
    Ok(blobs)
}
