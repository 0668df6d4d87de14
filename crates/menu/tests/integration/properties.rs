//! Property tests: exactly-once delivery under arbitrary key sequences.

use actionmenu::{Key, KeyCode, MenuConfig, MenuController, Modifiers, RawItem};
use proptest::prelude::*;

use crate::common::ScriptHost;

fn arb_keycode() -> impl Strategy<Value = KeyCode> {
	prop_oneof![
		Just(KeyCode::Enter),
		Just(KeyCode::Escape),
		Just(KeyCode::Up),
		Just(KeyCode::Down),
		Just(KeyCode::PageUp),
		Just(KeyCode::PageDown),
		proptest::char::range('a', 'z').prop_map(KeyCode::Char),
	]
}

fn arb_key() -> impl Strategy<Value = Key> {
	(arb_keycode(), any::<bool>(), any::<bool>()).prop_map(|(code, ctrl, alt)| {
		Key::new(
			code,
			Modifiers {
				ctrl,
				alt,
				shift: false,
			},
		)
	})
}

/// True when `key` ends the session for the fixed three-item menu below
/// (shortcuts `f` and `s`).
fn is_terminal(key: Key) -> bool {
	if key.modifiers.ctrl || key.modifiers.alt {
		return false;
	}
	matches!(
		key.code,
		KeyCode::Enter | KeyCode::Escape | KeyCode::Char('f') | KeyCode::Char('s')
	)
}

fn menu_items() -> Vec<RawItem> {
	vec![
		RawItem::entry("First").with_shortcut('f'),
		RawItem::entry("Second").with_shortcut('s'),
		RawItem::entry("Third"),
	]
}

proptest! {
	/// The callback fires at most once per session, and exactly once when a
	/// terminal key occurs; everything after the first terminal key is
	/// ignored by the closed controller.
	#[test]
	fn prop_exactly_once_under_any_key_sequence(
		keys in proptest::collection::vec(arb_key(), 0..32),
		highlight in 0usize..8,
	) {
		let mut host = ScriptHost::new();
		host.highlight = highlight;
		let mut ctl = MenuController::new();
		ctl.open(&mut host, MenuConfig::new(menu_items(), "Cb")).unwrap();

		let expect_fired = keys.iter().any(|key| is_terminal(*key));
		for key in keys {
			ctl.handle_key(&mut host, key);
		}

		let callbacks = host.callbacks();
		prop_assert!(callbacks.len() <= 1);
		prop_assert_eq!(callbacks.len(), usize::from(expect_fired));
		prop_assert_eq!(ctl.is_open(), !expect_fired);

		// Whatever happened, a delivered outcome is well-formed.
		if let Some((_, index, item)) = callbacks.first() {
			match item {
				Some(_) => prop_assert!((0..3i64).contains(index)),
				None => prop_assert_eq!(*index, -1),
			}
		}
	}

	/// A session that ends always leaves the editor restored: origin focus
	/// active and no overlay alive.
	#[test]
	fn prop_closed_session_restores_editor(
		keys in proptest::collection::vec(arb_key(), 1..16),
	) {
		let mut host = ScriptHost::new();
		let mut ctl = MenuController::new();
		ctl.open(&mut host, MenuConfig::new(menu_items(), "Cb")).unwrap();

		for key in keys {
			ctl.handle_key(&mut host, key);
		}
		ctl.cancel(&mut host);

		prop_assert!(!ctl.is_open());
		prop_assert_eq!(host.current_focus, ScriptHost::ORIGIN_FOCUS);
		prop_assert!(host.open_overlays.is_empty());
		prop_assert_eq!(host.callbacks().len(), 1);
	}
}
