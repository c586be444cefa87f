//! User-facing messages and the macros that print them.
//!
//! All text shown to the user lives in the [`Message`] enum and its `Display`
//! implementation. The `msg_*` macros route those messages either to plain
//! console output or, in debug mode, to `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
