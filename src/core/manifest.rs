use std::path::Path;

use serde_json::Value;

use super::data::PackageManifest;
use crate::{config::MANIFEST_FILE_NAME, utils::read_file_content};

/// Read and parse `package.json` from the project root.
///
/// Never fails: a missing file yields [`PackageManifest::NotFound`], and an
/// unreadable or malformed one yields [`PackageManifest::Invalid`].
pub fn read_manifest(root: &Path) -> PackageManifest {
    let path = root.join(MANIFEST_FILE_NAME);
    if !path.exists() {
        return PackageManifest::NotFound;
    }

    let content = read_file_content(&path);
    if content.is_error {
        return PackageManifest::Invalid;
    }

    match serde_json::from_str::<Value>(&content.text) {
        Ok(value) => PackageManifest::Parsed(value),
        Err(_) => PackageManifest::Invalid,
    }
}
