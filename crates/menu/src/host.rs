//! Host editor surface consumed by the menu core.

use thiserror::Error;

use crate::gate::MenuOutcome;

/// Opaque reference to an editor focus location.
///
/// Minted by the host in [`MenuHost::capture_focus`]; the core only stores
/// it and hands it back on restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(pub u64);

/// Opaque reference to a created overlay surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OverlayId(pub u64);

/// Overlay teardown failure reported by the host.
///
/// Teardown problems never block outcome delivery; the session logs them
/// and the close continues.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("overlay teardown failed: {0}")]
pub struct TeardownError(pub String);

/// Editor primitives the menu core drives.
///
/// The core decides what to show, how keys map to actions, and when the
/// callback fires; everything visual or input-source-shaped lives behind
/// this trait. Highlight navigation inside the popup is host-native; the
/// core reads [`highlighted_index`](Self::highlighted_index) only at confirm
/// time and treats the answer as an opaque query.
pub trait MenuHost {
	/// Returns the currently focused editor location.
	fn capture_focus(&mut self) -> FocusId;

	/// Makes `focus` the active editor location again.
	fn restore_focus(&mut self, focus: FocusId);

	/// Creates the popup overlay seeded with `lines`.
	///
	/// Returns `None` when the host cannot allocate the surface; the open
	/// aborts cleanly in that case.
	fn create_overlay(&mut self, lines: &[String]) -> Option<OverlayId>;

	/// Destroys a previously created overlay.
	fn destroy_overlay(&mut self, overlay: OverlayId) -> Result<(), TeardownError>;

	/// Index of the row the native popup currently highlights.
	fn highlighted_index(&self) -> usize;

	/// Invokes the named host-side callback with the session outcome.
	fn invoke_callback(&mut self, name: &str, outcome: MenuOutcome);
}
