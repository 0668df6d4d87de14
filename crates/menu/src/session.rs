//! Active menu session resources.

use tracing::warn;

use crate::config::IconSpec;
use crate::dispatch::KeyBindings;
use crate::gate::CallbackGate;
use crate::host::{FocusId, MenuHost, OverlayId};
use crate::item::MenuItem;

/// Resources and state for one open menu.
///
/// A `MenuSession` is created by [`MenuController::open`] and torn down
/// before the outcome callback fires, so the callback always observes the
/// editor in its pre-menu state.
///
/// [`MenuController::open`]: crate::MenuController::open
pub struct MenuSession {
	/// Focus to restore after the session ends. Taken on first close.
	origin_focus: Option<FocusId>,
	/// Overlay surface allocated for this session. Taken on first close.
	overlay: Option<OverlayId>,
	items: Vec<MenuItem>,
	bindings: KeyBindings,
	gate: CallbackGate,
}

impl MenuSession {
	pub(crate) fn new(
		origin_focus: FocusId,
		overlay: OverlayId,
		items: Vec<MenuItem>,
		bindings: KeyBindings,
		gate: CallbackGate,
	) -> Self {
		Self {
			origin_focus: Some(origin_focus),
			overlay: Some(overlay),
			items,
			bindings,
			gate,
		}
	}

	/// Popup lines seeded into the overlay: item abbreviations, with the
	/// icon character appended to the first line when one is configured.
	pub fn display_lines(items: &[MenuItem], icon: Option<&IconSpec>) -> Vec<String> {
		let mut lines: Vec<String> = items.iter().map(MenuItem::abbr).collect();
		if let Some(icon) = icon
			&& let Some(first) = lines.first_mut()
		{
			first.push(icon.character);
		}
		lines
	}

	/// The session's normalized items. Never empty.
	pub fn items(&self) -> &[MenuItem] {
		&self.items
	}

	/// The session's transient binding table.
	pub fn bindings(&self) -> &KeyBindings {
		&self.bindings
	}

	pub(crate) fn gate_mut(&mut self) -> &mut CallbackGate {
		&mut self.gate
	}

	/// Restores origin focus, then destroys the overlay.
	///
	/// Idempotent: both resources are taken on first close. A teardown
	/// failure from the host is logged and does not interrupt the close, so
	/// the outcome can still be delivered afterwards.
	pub(crate) fn close(&mut self, host: &mut dyn MenuHost) {
		if let Some(focus) = self.origin_focus.take() {
			host.restore_focus(focus);
		}
		if let Some(overlay) = self.overlay.take()
			&& let Err(err) = host.destroy_overlay(overlay)
		{
			warn!(%err, "overlay teardown failed");
		}
	}
}
