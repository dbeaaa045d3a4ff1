// SPDX-License-Identifier: MPL-2.0
//! `actionlog_i18n` holds the locale bundles for the action log feature:
//! the label trees themselves (embedded TOML locale files), a typed
//! read-only representation, path-based lookup with explicit missing-key
//! and shape-mismatch errors, and a locale registry with default-locale
//! fallback and preference resolution.
//!
//! Strings are plain static text. Formatting, interpolation, and
//! pluralization belong to the rendering layer, not here.

#![doc(html_root_url = "https://docs.rs/actionlog-i18n/0.1.0")]

pub mod bundle;
pub mod config;
pub mod error;
pub mod registry;
pub mod tree;

pub use bundle::LocaleBundle;
pub use error::{Error, Result};
pub use registry::LocaleRegistry;
pub use tree::{LabelNode, LabelTree};
