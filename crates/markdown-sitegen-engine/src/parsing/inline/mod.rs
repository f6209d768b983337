//! # Inline Parsing
//!
//! Pass-based tokenization of inline markdown into typed [`TextSpan`]s.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing and runs over the folded
//! text of inline-eligible blocks (paragraphs, headings, quotes, list items).
//! Code blocks never reach the tokenizer.
//!
//! Tokenization starts from a single plain span and applies one pass per
//! syntax. Each pass only splits spans that are still plain, so whatever an
//! earlier pass claimed is opaque to the later ones.
//!
//! ## Modules
//!
//! - **`types`**: `TextSpan`, `SpanKind` and `InlineError`
//! - **`kinds`**: Inline-specific types with owned delimiters and patterns
//! - **`tokenizer`**: `tokenize()` main entry point and the generic split passes

pub mod kinds;
pub mod tokenizer;
pub mod types;

pub use tokenizer::tokenize;
pub use types::{InlineError, SpanKind, TextSpan};
