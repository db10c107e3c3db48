//! Runtime module - drives the update loop and performs side effects
//!
//! - `app` - message queue, command execution, and the [`Host`] seam for
//!   dialogs and feedback the embedding shell provides

pub mod app;

pub use app::{App, HeadlessHost, Host};
