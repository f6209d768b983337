//! # Block Parsing
//!
//! Two-phase block segmentation.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is trimmed and marked
//!    blank or not, without looking at its neighbours
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` groups consecutive
//!    non-blank lines and classifies each finished group into a `BlockKind`
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned delimiters (Heading,
//!   CodeFence, BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`classify`**: `MarkdownLineClassifier` and block `classify()`
//! - **`builder`**: `BlockBuilder` for block construction
//!
//! ## Key Invariants
//!
//! - Blocks never contain blank lines, so a fenced code block cannot span
//!   one either
//! - Classification precedence is fixed: heading, code, quote, unordered
//!   list, ordered list, paragraph

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, MarkdownLineClassifier, classify};
pub use types::{Block, BlockKind};
