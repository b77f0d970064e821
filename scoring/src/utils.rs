// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Sanitization of numeric passport fields.
//!
//! Passports are not validated, so every number read by the engine goes through one of these
//! functions first. Non-finite values count as missing (zero).

/// Brings a percentage into the range 0-100.
#[must_use]
pub fn percentage(value: f64) -> f64 {
    if value.is_finite() { value.clamp(0.0, 100.0) } else { 0.0 }
}

/// Brings a physical quantity (mass, volume, energy, cycles) to a non-negative value.
#[must_use]
pub fn quantity(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Rounds a non-negative value to the nearest integer.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn round_to_u32(value: f64) -> u32 {
    quantity(value).round().min(f64::from(u32::MAX)) as u32
}

/// Rounds to the nearest integer and clamps the result into the given range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
#[must_use]
pub fn round_clamped(value: f64, min: u8, max: u8) -> u8 {
    let value = if value.is_finite() { value.round() } else { f64::from(min) };
    value.clamp(f64::from(min), f64::from(max)) as u8
}

/// Percentage of `count` in `total`, rounded. Zero for an empty total.
#[must_use]
pub fn share(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = count as f64 / total as f64;
    round_to_u32(ratio * 100.0)
}
