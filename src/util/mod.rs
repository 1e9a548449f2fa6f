use crate::player::Timer;
use futures::future::{FutureExt, LocalBoxFuture};
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

mod callback_future;
pub use callback_future::*;

#[derive(Clone, thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

/// Sleeps on the browser event loop with `setTimeout`.
#[derive(Copy, Clone, Debug, Default)]
pub struct TimeoutTimer;

impl Timer for TimeoutTimer {
	fn sleep(&self, duration: std::time::Duration) -> LocalBoxFuture<'static, ()> {
		let (future, callback) = CallbackFuture::new();
		leptos::prelude::set_timeout(move || callback(()), duration);
		future.boxed_local()
	}
}

pub trait PointerCapture {
	fn set_pointer_capture(&self) -> bool;
	fn release_pointer_capture(&self) -> bool;
}

impl PointerCapture for web_sys::PointerEvent {
	fn set_pointer_capture(&self) -> bool {
		self
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
			.and_then(|target| {
				target
					.set_pointer_capture(self.pointer_id())
					.map_err(JsError::from)
					.ok_or_log()
			})
			.is_some()
	}

	fn release_pointer_capture(&self) -> bool {
		self
			.current_target()
			.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
			.and_then(|target| {
				target
					.release_pointer_capture(self.pointer_id())
					.map_err(JsError::from)
					.ok_or_log()
			})
			.is_some()
	}
}
