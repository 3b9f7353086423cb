use tracing::warn;

use crate::{
    berkeley::{FREE_AREA_OFFSET, NEXT_PAGE_NO_OFFSET, PAGE_HEADER_SIZE, PageType},
    bytes::{byte_at, read_u16_le, read_u32_le},
    types::{AbsoluteOffset, LocalOffset, PageNumber, error::Result},
};

/*
 * A value too large to live inline in a Hash page is stored as a chain of
 * Overflow pages. The Hash page keeps a small reference record instead:
 *   page_type(1) | pad(3) | first_page_no(4 LE) | total_length(4 LE)
 * Each Overflow page in the chain links to the next through the page
 * header's next_page_no field; 0 terminates the chain. The terminal page's
 * free_area_offset marks where real data stops and padding starts.
 */

/// Follows an overflow chain and reassembles the stored value.
///
/// `value_offset` locates the overflow reference record inside `page`
/// (as produced by [`hash_index_values`](super::hash_index::hash_index_values));
/// `data` is the whole database file, needed to reach the chain's pages.
///
/// A chain that terminates before the declared total length yields a
/// zero-padded buffer, matching what legacy readers do; the shortfall is
/// logged rather than raised.
pub fn overflow_value_content(
    data: &[u8],
    page: &[u8],
    value_offset: LocalOffset,
    page_size: usize,
) -> Result<Vec<u8>> {
    PageType::expect_overflow(byte_at(page, value_offset.0)?)?;

    let first_page_no = read_u32_le(page, value_offset.plus(4).0)?;
    let total_length = read_u32_le(page, value_offset.plus(8).0)? as usize;

    let mut result = vec![0u8; total_length];
    let mut written = 0usize;
    let mut page_no: PageNumber = first_page_no;

    // A well-formed chain never revisits a page; cap the walk at the number
    // of pages the file can hold so a corrupt cyclic chain terminates.
    let max_pages = data.len() / page_size + 1;
    let mut followed = 0usize;

    while page_no != 0 {
        followed += 1;
        if followed > max_pages {
            warn!(first_page_no, "overflow chain longer than the file, breaking");
            break;
        }
        let page_start = AbsoluteOffset::of_page(page_no, page_size);
        let next_page_no = read_u32_le(data, page_start.plus(NEXT_PAGE_NO_OFFSET).0)?;

        // Full pages carry payload to the page end; the terminal page only
        // up to its free area offset.
        let payload_end = if next_page_no == 0 {
            let free_area = read_u16_le(data, page_start.plus(FREE_AREA_OFFSET).0)? as usize;
            page_start.plus(free_area)
        } else {
            page_start.plus(page_size)
        };

        let payload_start = page_start.plus(PAGE_HEADER_SIZE);
        let end = payload_end.0.min(data.len());
        let start = payload_start.0.min(end);
        let payload = &data[start..end];
        let take = payload.len().min(total_length - written);
        result[written..written + take].copy_from_slice(&payload[..take]);
        written += take;

        page_no = next_page_no;
    }

    if written < total_length {
        warn!(
            declared = total_length,
            written, first_page_no, "overflow chain shorter than declared length"
        );
    }

    Ok(result)
}
