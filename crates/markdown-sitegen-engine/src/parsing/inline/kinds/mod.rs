//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! ## Types
//!
//! - **`Bold`**: `DELIMITER = "**"`
//! - **`Italic`**: `DELIMITER = "_"`
//! - **`CodeSpan`**: `DELIMITER = "`"`
//! - **`Image`**: `![alt](url)` pattern
//! - **`Link`**: `[text](url)` pattern, never preceded by `!`
//!
//! ## Design Principle
//!
//! All delimiter constants and patterns live here, not scattered in the
//! tokenizer. The tokenizer calls these constants; it never hardcodes `**` or
//! `` ` ``.

pub mod code_span;
pub mod emphasis;
pub mod link;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic};
pub use link::{Image, Link, LinkMatch};
