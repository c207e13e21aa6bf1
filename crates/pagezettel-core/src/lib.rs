//! Pagezettel Core Library
//!
//! Template expansion and note assembly for extracting text selections
//! into standalone Zettelkasten notes.

pub mod assembler;
pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod frontmatter;
pub mod i18n;
pub mod logging;
pub mod metadata;
pub mod resolve;
pub mod settings;
pub mod store;
pub mod template;
pub mod text;
pub mod vault;
