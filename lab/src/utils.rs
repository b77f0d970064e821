// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Miscellaneous utilities.

use std::path::Path;

use crate::errors::ConfigCheckError;

/// Verifies that the path exists and is a file.
///
/// # Errors
///
/// Returns an error if the path does not exist or is not a file.
pub fn file_exists(path: &Path) -> Result<(), ConfigCheckError> {
    if !path.exists() {
        return Err(ConfigCheckError::DoesNotExist(path.to_owned()));
    }
    if !path.is_file() {
        return Err(ConfigCheckError::NotAFile(path.to_owned()));
    }
    Ok(())
}

/// Verifies that the path exists and is a file or its parent exists and is a directory.
///
/// # Errors
///
/// Returns an error if the path exists is not a file or the parent is not a directory.
pub fn file_exists_or_creatable(path: &Path) -> Result<(), ConfigCheckError> {
    if path.exists() {
        if !path.is_file() {
            return Err(ConfigCheckError::NotAFile(path.to_owned()));
        }
        return Ok(());
    }

    let Some(base) = path.parent() else {
        return Err(ConfigCheckError::NoParent(path.to_owned()));
    };
    // A bare file name has an empty parent meaning the current directory.
    if base.as_os_str().is_empty() {
        return Ok(());
    }
    if !base.exists() {
        return Err(ConfigCheckError::DoesNotExist(base.to_owned()));
    }
    if !base.is_dir() {
        return Err(ConfigCheckError::NotADir(base.to_owned()));
    }
    Ok(())
}
