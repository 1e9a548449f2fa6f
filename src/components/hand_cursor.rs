use crate::overlay::Overlay;
use glam::Vec2;
use leptos::prelude::*;

/// `Overlay` state held in signals so the hand image follows it reactively.
#[derive(Copy, Clone, Debug)]
pub struct SignalOverlay {
	visible: RwSignal<bool>,
	position: RwSignal<Vec2>,
}

impl SignalOverlay {
	pub fn new() -> Self {
		Self {
			visible: RwSignal::new(false),
			position: RwSignal::new(Vec2::ZERO),
		}
	}

	pub fn visible(&self) -> Signal<bool> {
		self.visible.into()
	}

	pub fn position(&self) -> Signal<Vec2> {
		self.position.into()
	}
}

impl Default for SignalOverlay {
	fn default() -> Self {
		Self::new()
	}
}

impl Overlay for SignalOverlay {
	fn show(&mut self) {
		self.visible.set(true);
	}

	fn hide(&mut self) {
		self.visible.set(false);
	}

	fn move_to(&mut self, position: Vec2) {
		self.position.set(position);
	}
}

#[component]
pub fn HandCursor(overlay: SignalOverlay, #[prop(into)] src: String) -> impl IntoView {
	let visible = overlay.visible();
	let position = overlay.position();
	view! {
		<img
			class="HandCursor"
			src=src
			alt=""
			style:display=move || if visible.get() { "block" } else { "none" }
			style:left=move || format!("{}px", position.get().x)
			style:top=move || format!("{}px", position.get().y)
		/>
	}
}
