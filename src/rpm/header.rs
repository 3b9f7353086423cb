use crate::{
    bytes::{read_i32_be, read_u32_be},
    checkpoint::{Checkpoint, NoYield},
    rpm::{ENTRY_INFO_SIZE, MAX_INDEX_LENGTH, PRIVATE_TAGS},
    types::{
        error::{ParseError, Result},
        package::{EntryInfo, IndexEntry},
    },
};

/// Parses a header blob's descriptor table and slices the data segment into
/// one [`IndexEntry`] per retained descriptor ("region swab").
///
/// Descriptors carrying private tags are dropped before lengths are
/// computed, so a retained entry's data runs up to the next *retained*
/// descriptor's offset (or the end of the data segment for the last one).
pub fn import_header(blob: &[u8]) -> Result<Vec<IndexEntry<'_>>> {
    import_header_with(blob, &mut NoYield)
}

/// Same as [`import_header`], ticking `checkpoint` per descriptor processed.
pub fn import_header_with<'a>(
    blob: &'a [u8],
    checkpoint: &mut impl Checkpoint,
) -> Result<Vec<IndexEntry<'a>>> {
    let index_length = read_i32_be(blob, 0)?;
    let data_length = read_i32_be(blob, 4)?;
    if index_length <= 0 || index_length > MAX_INDEX_LENGTH {
        return Err(ParseError::IndexLengthOutOfRange(index_length));
    }

    let mut infos = Vec::with_capacity(index_length as usize);
    for i in 0..index_length as usize {
        let descriptor = 8 + i * ENTRY_INFO_SIZE;
        let info = EntryInfo {
            tag: read_i32_be(blob, descriptor)?,
            ty: read_u32_be(blob, descriptor + 4)?,
            offset: read_i32_be(blob, descriptor + 8)?,
            count: read_u32_be(blob, descriptor + 12)?,
        };
        if !PRIVATE_TAGS.contains(&info.tag) {
            infos.push(info);
        }
        checkpoint.tick();
    }

    let data_start = 8 + index_length as usize * ENTRY_INFO_SIZE;
    let mut entries = Vec::with_capacity(infos.len());
    for (i, info) in infos.iter().enumerate() {
        let length = match infos.get(i + 1) {
            Some(next) => next.offset as i64 - info.offset as i64,
            None => data_length as i64 - info.offset as i64,
        };
        if length < 0 || info.offset < 0 {
            return Err(ParseError::InvalidDescriptorOffset {
                offset: info.offset,
                length,
            });
        }
        let length = length as usize;

        let start = data_start + info.offset as usize;
        let data = blob
            .get(start..start + length)
            .ok_or(ParseError::Truncated {
                offset: start,
                needed: length,
                available: blob.len(),
            })?;
        entries.push(IndexEntry {
            info: *info,
            data,
            length,
        });
    }
    Ok(entries)
}
