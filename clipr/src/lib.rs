//! # clipr - Text Clipboard for Prompt Browsers
//!
//! Small clipboard layer used by PromptDeck to copy prompt bodies to the
//! system clipboard and to drive the transient "Copied!" affordance on the
//! control that triggered the copy.
//!
//! ## Key Features
//! - Pluggable backends (system clipboard, in-memory for tests/headless)
//! - Per-control copy feedback with a fixed revert duration
//! - Compact error type shared by all backends

pub mod clipboard;
pub mod config;
pub mod error;
pub mod feedback;

// Re-export main types for easy use
pub use clipboard::{Clipboard, ClipboardStats, MemoryClipboard, TextClipboard};
#[cfg(feature = "system")]
pub use clipboard::SystemClipboard;
pub use config::ClipboardConfig;
pub use error::{ClipError, ClipResult};
pub use feedback::{COPIED_LABEL, COPY_LABEL, CopyFeedback};
