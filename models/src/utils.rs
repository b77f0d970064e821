// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Serde helpers shared by the input formats.

use serde::{Deserialize, Deserializer};

/// Deserializes a value treating `null` the same as a missing value.
///
/// Combined with `#[serde(default)]` on the struct this lets every optional field be either
/// absent or `null`.
///
/// # Errors
///
/// Returns an error if the value is present but has an unexpected type.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
