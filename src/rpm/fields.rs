use crate::{
    bytes::read_i32_be,
    checkpoint::{Checkpoint, NoYield},
    rpm::{RpmType, TAG_ARCH, TAG_EPOCH, TAG_NAME, TAG_RELEASE, TAG_SIZE, TAG_VERSION},
    types::{
        error::{ParseError, Result},
        package::{IndexEntry, PackageInfo},
    },
};

/// Interprets the typed entries of one header into a [`PackageInfo`].
///
/// A blob that decodes cleanly but lacks any of the four required fields
/// (name, version, release, size) is not a reportable package; the result
/// is `Ok(None)` and the caller is expected to drop it silently. Tags this
/// decoder does not know are ignored.
pub fn package_info(entries: &[IndexEntry<'_>]) -> Result<Option<PackageInfo>> {
    package_info_with(entries, &mut NoYield)
}

/// Same as [`package_info`], ticking `checkpoint` per entry processed.
pub fn package_info_with(
    entries: &[IndexEntry<'_>],
    checkpoint: &mut impl Checkpoint,
) -> Result<Option<PackageInfo>> {
    let mut name = None;
    let mut version = None;
    let mut release = None;
    let mut arch = None;
    let mut epoch = None;
    let mut size = None;

    for entry in entries {
        match entry.info.tag {
            TAG_NAME => name = Some(string_field(entry)?),
            TAG_VERSION => version = Some(string_field(entry)?),
            TAG_RELEASE => release = Some(string_field(entry)?),
            TAG_ARCH => arch = Some(string_field(entry)?),
            TAG_EPOCH => epoch = Some(int32_field(entry)?),
            TAG_SIZE => size = Some(int32_field(entry)?),
            _ => {}
        }
        checkpoint.tick();
    }

    let (Some(name), Some(version), Some(release), Some(size)) = (name, version, release, size)
    else {
        return Ok(None);
    };
    Ok(Some(PackageInfo {
        name,
        version,
        release,
        arch,
        epoch,
        size,
    }))
}

/// String fields are zero-padded; the value runs up to the first null byte.
fn string_field(entry: &IndexEntry<'_>) -> Result<String> {
    expect_type(entry, RpmType::String)?;
    let end = entry
        .data
        .iter()
        .position(|&b| b == 0)
        .unwrap_or(entry.data.len());
    Ok(String::from_utf8_lossy(&entry.data[..end]).into_owned())
}

fn int32_field(entry: &IndexEntry<'_>) -> Result<i32> {
    expect_type(entry, RpmType::Int32)?;
    read_i32_be(entry.data, 0)
}

fn expect_type(entry: &IndexEntry<'_>, expected: RpmType) -> Result<()> {
    if entry.info.ty != expected.as_u32() {
        return Err(ParseError::FieldTypeMismatch {
            tag: entry.info.tag,
            expected: expected.as_u32(),
            actual: entry.info.ty,
        });
    }
    Ok(())
}
