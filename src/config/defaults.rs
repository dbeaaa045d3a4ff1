// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

/// Locale every installation can rely on; also the reference bundle for
/// cross-locale diffs.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Whether lookups fall back to the default locale when the active locale
/// lacks a key.
pub const DEFAULT_FALLBACK_TO_DEFAULT: bool = true;
