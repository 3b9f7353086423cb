#![allow(dead_code)]

//! Byte-level fixture builders: synthetic BerkeleyDB Hash database images
//! and RPM header blobs, laid out exactly as the reader expects them.

pub const PAGE_SIZE: usize = 512;
pub const PAGE_HEADER_SIZE: usize = 26;

/// Where a hash page's builder places the inline dummy key record.
pub const KEY_RECORD_OFFSET: usize = 80;
/// Where a hash page's builder places the overflow reference record.
pub const VALUE_RECORD_OFFSET: usize = 100;

const MAGIC_NUMBER: u32 = 0x0006_1561;

/// Builds a Hash database image page by page. Page 0 is reserved for the
/// metadata page and filled in by [`DbBuilder::build`].
pub struct DbBuilder {
    page_size: usize,
    pages: Vec<Vec<u8>>,
}

impl DbBuilder {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            pages: vec![vec![0u8; page_size]],
        }
    }

    /// Appends one Hash page whose single value is `blob`, stored as an
    /// overflow chain of as many pages as the payload needs. Returns the
    /// hash page's number.
    pub fn push_package(&mut self, blob: &[u8]) -> u32 {
        let hash_page_no = self.pages.len() as u32;
        let first_chain_page = hash_page_no + 1;

        // Hash page: 2 index slots (one key/value pair).
        let mut page = vec![0u8; self.page_size];
        page[8..12].copy_from_slice(&hash_page_no.to_le_bytes());
        page[20..22].copy_from_slice(&2u16.to_le_bytes());
        page[25] = 13;
        page[PAGE_HEADER_SIZE..PAGE_HEADER_SIZE + 2]
            .copy_from_slice(&(KEY_RECORD_OFFSET as i16).to_le_bytes());
        page[PAGE_HEADER_SIZE + 2..PAGE_HEADER_SIZE + 4]
            .copy_from_slice(&(VALUE_RECORD_OFFSET as i16).to_le_bytes());

        // Inline key record; any non-overflow type byte.
        page[KEY_RECORD_OFFSET] = 1;

        // Overflow reference: type(1) | pad(3) | first_page(4 LE) | length(4 LE).
        page[VALUE_RECORD_OFFSET] = 7;
        page[VALUE_RECORD_OFFSET + 4..VALUE_RECORD_OFFSET + 8]
            .copy_from_slice(&first_chain_page.to_le_bytes());
        page[VALUE_RECORD_OFFSET + 8..VALUE_RECORD_OFFSET + 12]
            .copy_from_slice(&(blob.len() as u32).to_le_bytes());
        self.pages.push(page);

        self.push_chain(first_chain_page, blob);
        hash_page_no
    }

    /// Appends the overflow pages holding `blob`, linked from `first_page_no`.
    fn push_chain(&mut self, first_page_no: u32, blob: &[u8]) {
        let payload_per_page = self.page_size - PAGE_HEADER_SIZE;
        let chunks: Vec<&[u8]> = if blob.is_empty() {
            vec![&[]]
        } else {
            blob.chunks(payload_per_page).collect()
        };

        for (i, chunk) in chunks.iter().enumerate() {
            let page_no = first_page_no + i as u32;
            let is_last = i == chunks.len() - 1;
            let mut page = vec![0u8; self.page_size];
            page[8..12].copy_from_slice(&page_no.to_le_bytes());
            if !is_last {
                page[16..20].copy_from_slice(&(page_no + 1).to_le_bytes());
            }
            page[22..24]
                .copy_from_slice(&((PAGE_HEADER_SIZE + chunk.len()) as u16).to_le_bytes());
            page[25] = 7;
            page[PAGE_HEADER_SIZE..PAGE_HEADER_SIZE + chunk.len()].copy_from_slice(chunk);
            self.pages.push(page);
        }
    }

    /// Appends a raw page verbatim (padded or cut to the page size).
    pub fn push_raw_page(&mut self, page: &[u8]) -> u32 {
        let page_no = self.pages.len() as u32;
        let mut padded = page.to_vec();
        padded.resize(self.page_size, 0);
        self.pages.push(padded);
        page_no
    }

    pub fn build(self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pages.len() * self.page_size);
        let last_page_no = self.pages.len() as u32;
        for page in self.pages {
            data.extend_from_slice(&page);
        }
        write_metadata(&mut data, self.page_size as u32, last_page_no);
        data
    }
}

/// Fills in the metadata fields on page 0 of an image.
pub fn write_metadata(data: &mut [u8], page_size: u32, last_page_no: u32) {
    data[12..16].copy_from_slice(&MAGIC_NUMBER.to_le_bytes());
    data[20..24].copy_from_slice(&page_size.to_le_bytes());
    data[24] = 0; // unencrypted
    data[25] = 8; // hash metadata page
    data[32..36].copy_from_slice(&last_page_no.to_le_bytes());
    data[88..92].copy_from_slice(&16u32.to_le_bytes());
}

/// A minimal valid metadata page on its own.
pub fn metadata_page() -> Vec<u8> {
    let mut page = vec![0u8; PAGE_SIZE];
    write_metadata(&mut page, PAGE_SIZE as u32, 1);
    page
}

/// Builds a Hash page holding `pairs.len()` key/value index slot pairs,
/// with the given page number stamped into the header.
pub fn hash_page_with_pairs(page_no: u32, pairs: &[(i16, i16)]) -> Vec<u8> {
    let mut page = vec![0u8; PAGE_SIZE];
    page[8..12].copy_from_slice(&page_no.to_le_bytes());
    page[20..22].copy_from_slice(&((pairs.len() * 2) as u16).to_le_bytes());
    page[25] = 13;
    let mut offset = PAGE_HEADER_SIZE;
    for &(key, value) in pairs {
        page[offset..offset + 2].copy_from_slice(&key.to_le_bytes());
        page[offset + 2..offset + 4].copy_from_slice(&value.to_le_bytes());
        offset += 4;
    }
    page
}

/// Serializes an RPM header blob from raw descriptors and a data segment.
/// Descriptors are `(tag, type, offset, count)`.
pub fn header_blob(descriptors: &[(i32, u32, i32, u32)], data_segment: &[u8]) -> Vec<u8> {
    let mut blob = Vec::new();
    blob.extend_from_slice(&(descriptors.len() as i32).to_be_bytes());
    blob.extend_from_slice(&(data_segment.len() as i32).to_be_bytes());
    for &(tag, ty, offset, count) in descriptors {
        blob.extend_from_slice(&tag.to_be_bytes());
        blob.extend_from_slice(&ty.to_be_bytes());
        blob.extend_from_slice(&offset.to_be_bytes());
        blob.extend_from_slice(&count.to_be_bytes());
    }
    blob.extend_from_slice(data_segment);
    blob
}

/// Builds a header blob field by field, computing offsets the way rpm lays
/// out its data segment (int32 fields aligned to 4 bytes).
#[derive(Default)]
pub struct HeaderBuilder {
    descriptors: Vec<(i32, u32, i32, u32)>,
    data: Vec<u8>,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn string_field(mut self, tag: i32, value: &str) -> Self {
        let offset = self.data.len() as i32;
        self.data.extend_from_slice(value.as_bytes());
        self.data.push(0);
        self.descriptors.push((tag, 6, offset, 1));
        self
    }

    pub fn int32_field(mut self, tag: i32, value: i32) -> Self {
        while self.data.len() % 4 != 0 {
            self.data.push(0);
        }
        let offset = self.data.len() as i32;
        self.data.extend_from_slice(&value.to_be_bytes());
        self.descriptors.push((tag, 4, offset, 1));
        self
    }

    pub fn raw_field(mut self, tag: i32, ty: u32, bytes: &[u8]) -> Self {
        let offset = self.data.len() as i32;
        self.data.extend_from_slice(bytes);
        self.descriptors.push((tag, ty, offset, 1));
        self
    }

    pub fn build(self) -> Vec<u8> {
        header_blob(&self.descriptors, &self.data)
    }
}
