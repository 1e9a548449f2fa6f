use crate::overlay::Controls;
use leptos::prelude::*;

#[derive(Copy, Clone, Debug)]
pub struct SignalControls {
	enabled: RwSignal<bool>,
}

impl SignalControls {
	pub fn new() -> Self {
		Self {
			enabled: RwSignal::new(true),
		}
	}

	pub fn enabled(&self) -> Signal<bool> {
		self.enabled.into()
	}
}

impl Default for SignalControls {
	fn default() -> Self {
		Self::new()
	}
}

impl Controls for SignalControls {
	fn set_enabled(&mut self, enabled: bool) {
		self.enabled.set(enabled);
	}
}

#[component]
pub fn Toolbar(
	controls: SignalControls,
	on_animate: Callback<()>,
	on_clear: Callback<()>,
) -> impl IntoView {
	let enabled = controls.enabled();
	let disabled = move || !enabled.get();
	view! {
		<div class="Toolbar">
			<button class="AnimateButton" disabled=disabled on:click=move |_| on_animate.run(())>
				"Animate"
			</button>
			<button class="ClearButton" disabled=disabled on:click=move |_| on_clear.run(())>
				"Clear"
			</button>
		</div>
	}
}
