//! Utility functions for formatting and path handling.
//!
//! This module provides the helpers used to derive the path-based fields of a
//! media record (title, identifier, extension, site-relative path) and the
//! human-readable size string shown on the pages.

use std::path::{Component, Path};

/// Decimal size units, as shown on the site.
const SIZE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

/// Formats bytes with decimal units and three significant digits
/// (e.g., 1048576 -> "1.05 MB", 500 -> "500 B").
#[must_use]
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return format!("0 {}", SIZE_UNITS[0]);
    }

    let bytes_f64 = bytes as f64;
    let exponent = ((bytes_f64.log10() / 3.0).floor() as usize).min(SIZE_UNITS.len() - 1);
    let scaled = bytes_f64 / 1000f64.powi(exponent as i32);
    let value = round_significant(scaled, 3);

    format!("{value} {}", SIZE_UNITS[exponent])
}

/// Rounds to the given number of significant digits.
fn round_significant(value: f64, digits: i32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor() as i32;
    let shift = digits - 1 - magnitude;
    if shift >= 0 {
        let factor = 10f64.powi(shift);
        (value * factor).round() / factor
    } else {
        let factor = 10f64.powi(-shift);
        (value / factor).round() * factor
    }
}

/// Display title: the file name without its final extension.
#[must_use]
pub fn title_for(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Stable identifier: the file name with a trailing `.<alphanumerics>` removed.
///
/// Names without such a suffix, and dot-files, are returned unchanged.
#[must_use]
pub fn identifier_for(path: &Path) -> String {
    let name = file_name_lossy(path);
    match name.rfind('.') {
        Some(idx)
            if idx > 0
                && idx + 1 < name.len()
                && name[idx + 1..].chars().all(|c| c.is_ascii_alphanumeric()) =>
        {
            name[..idx].to_string()
        }
        _ => name,
    }
}

/// Uppercased extension without the leading dot, or an empty string.
#[must_use]
pub fn extension_for(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_uppercase())
        .unwrap_or_default()
}

/// Path of `path` relative to `site_root`, joined with forward slashes.
///
/// Files outside the site root keep their full path, still `/`-separated.
#[must_use]
pub fn site_relative_path(path: &Path, site_root: &Path) -> String {
    match path.strip_prefix(site_root) {
        Ok(relative) => relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path.to_string_lossy().replace('\\', "/"),
    }
}

/// Safely extracts the file name from a path as an owned string.
#[must_use]
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
