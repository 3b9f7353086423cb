//! Read-only decoder for the legacy RPM package database.
//!
//! Older RPM package managers keep the installed-package list in a
//! BerkeleyDB Hash file (typically `/var/lib/rpm/Packages`). This crate
//! walks such a file in memory, reassembles each overflow-stored value into
//! a package header blob, and decodes the blob's typed fields into
//! [`PackageInfo`] records.
//!
//! ```no_run
//! let packages = rpmdb::get_packages_from_file("/var/lib/rpm/Packages").unwrap();
//! for pkg in packages {
//!     println!("{} {}-{}", pkg.name, pkg.version, pkg.release);
//! }
//! ```

pub mod berkeley;
mod bytes;
pub mod checkpoint;
pub mod rpm;
pub mod types;

use std::path::Path;

use tracing::debug;

pub use crate::{
    checkpoint::{Checkpoint, NoYield, ThreadYield, YieldFn},
    types::{
        error::{ParseError, Result},
        package::{EntryInfo, IndexEntry, PackageInfo},
    },
};

/// Decodes every complete package record from an in-memory Packages
/// database. Packages with incomplete metadata are dropped; any structural
/// violation aborts the whole scan.
pub fn get_packages(data: &[u8]) -> Result<Vec<PackageInfo>> {
    get_packages_with(data, &mut NoYield)
}

/// Same as [`get_packages`], with a cooperative [`Checkpoint`] ticked at
/// every page, descriptor, and entry boundary.
pub fn get_packages_with(data: &[u8], checkpoint: &mut impl Checkpoint) -> Result<Vec<PackageInfo>> {
    let blobs = berkeley::walker::hash_db_values_with(data, checkpoint)?;
    let mut packages = Vec::with_capacity(blobs.len());
    for blob in &blobs {
        let entries = rpm::header::import_header_with(blob, checkpoint)?;
        if let Some(package) = rpm::fields::package_info_with(&entries, checkpoint)? {
            packages.push(package);
        }
    }
    debug!(
        blobs = blobs.len(),
        packages = packages.len(),
        "package decode complete"
    );
    Ok(packages)
}

/// Loads a Packages database from disk and decodes it.
pub fn get_packages_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<PackageInfo>> {
    let data = std::fs::read(path)?;
    get_packages(&data)
}
