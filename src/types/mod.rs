pub mod error;
pub mod package;

// Common type aliases
pub type PageNumber = u32;

/// Byte offset relative to a single page (or any sub-slice of the file).
///
/// The on-disk format stores some fields relative to a page and some relative
/// to the whole file; keeping the two as distinct types makes mixing them a
/// compile error instead of an off-by-one-page bug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalOffset(pub usize);

/// Byte offset relative to the whole database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteOffset(pub usize);

impl AbsoluteOffset {
    /// Start of a page within the file.
    pub fn of_page(page_no: PageNumber, page_size: usize) -> Self {
        Self(page_no as usize * page_size)
    }

    pub fn plus(self, bytes: usize) -> Self {
        Self(self.0 + bytes)
    }
}

impl LocalOffset {
    pub fn plus(self, bytes: usize) -> Self {
        Self(self.0 + bytes)
    }
}
