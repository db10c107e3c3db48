//! Text editing primitives for the freewrite core.
//!
//! # Architecture
//!
//! - [`TextBuffer`] / [`TextBufferMut`]: traits abstracting over buffer implementations
//! - [`RopeBuffer`]: buffer for the open document (backed by `ropey::Rope`)
//! - [`StringBuffer`]: buffer for short inputs (backed by `String`)
//! - [`Selection`]: caret or character range, clamped before every use
//! - [`CursorPosition`] / [`resolve_position`]: 1-based line/column readout
//! - [`EditHistory`] / [`EditOperation`]: undo/redo with atomic batches
//!
//! # Example
//!
//! ```
//! use freewrite::editable::{resolve_position, RopeBuffer, TextBufferMut};
//!
//! let mut buffer = RopeBuffer::from_text("line1\nline2");
//! buffer.replace(6..11, "second").unwrap();
//!
//! let pos = resolve_position(&buffer, 6);
//! assert_eq!(pos.to_string(), "Line: 2, Col: 1");
//! ```

mod buffer;
mod cursor;
mod error;
mod history;
mod selection;

// Re-export main types
pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use cursor::{resolve_position, CursorPosition};
pub use error::EditError;
pub use history::{Edit, EditHistory, EditOperation};
pub use selection::Selection;
