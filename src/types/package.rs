use serde::{Deserialize, Serialize};

/// One 16-byte entry descriptor from an RPM header's index table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryInfo {
    pub tag: i32,
    pub ty: u32,
    pub offset: i32,
    pub count: u32,
}

/// A descriptor together with the byte range it addresses in the header's
/// data segment. Borrowed from the package blob; consumed immediately by the
/// field extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry<'a> {
    pub info: EntryInfo,
    pub data: &'a [u8],
    pub length: usize,
}

/// Decoded metadata for one RPM package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageInfo {
    pub name: String,
    pub version: String,
    pub release: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub epoch: Option<i32>,
    pub size: i32,
}
