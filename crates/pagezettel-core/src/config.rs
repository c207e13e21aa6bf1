//! User-level configuration for pagezettel
//!
//! Vault-specific settings live in `.pagezettel/settings.json` (see
//! [`crate::settings`]). This module holds the per-user defaults stored in
//! `~/.config/pagezettel/config.toml`.

pub mod global;

pub use global::GlobalConfig;
