#![cfg_attr(test, allow(unused_crate_dependencies))]
//! Selectable action menu session core.
//!
//! Presents an ordered item list as a transient editor overlay, lets the
//! user confirm the highlighted row, jump directly via a shortcut key, or
//! cancel, and reports the outcome to a named host callback exactly once per
//! session.
//!
//! # Main Types
//!
//! - [`MenuController`] - the open → interact → close → callback state machine
//! - [`MenuConfig`] / [`RawItem`] - caller input for one open call
//! - [`MenuHost`] - the editor primitives the core drives
//! - [`MenuOutcome`] - what the callback receives
//!
//! # Architecture
//!
//! The crate owns session state and key-to-action mapping; everything
//! visual or input-source-shaped (popup drawing, keystroke polling, focus
//! switching) lives behind [`MenuHost`]. Highlight navigation is the host
//! popup's native behavior; the core reads the highlighted index only at
//! confirm time and never tracks it itself.
//!
//! ```text
//! open(config) ──► normalize ──► ShortcutIndex ──► KeyBindings
//!                      │
//!                      └──► capture focus, create overlay ──► MenuSession
//!
//! handle_key(key) ──► dispatch ──► Confirm / Jump / Cancel
//!                                        │
//!                                        └──► close session ──► CallbackGate
//! ```

pub mod config;
pub mod controller;
pub mod dispatch;
pub mod error;
pub mod gate;
pub mod host;
pub mod item;
pub mod key;
pub mod session;
pub mod shortcut;


pub use config::{IconSpec, MenuConfig};
pub use controller::MenuController;
pub use dispatch::{KeyBindings, MenuAction};
pub use error::{ItemDefect, MenuError};
pub use gate::{CallbackGate, MenuOutcome};
pub use host::{FocusId, MenuHost, OverlayId, TeardownError};
pub use item::{MenuItem, RawItem, normalize};
pub use key::{Key, KeyCode, Modifiers};
pub use session::MenuSession;
pub use shortcut::ShortcutIndex;
