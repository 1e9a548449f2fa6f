use super::Surface;
use crate::config::StrokeStyle;
use crate::document::Point;
use crate::util::JsError;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

#[derive(Clone, Debug, thiserror::Error)]
pub enum SurfaceError {
	#[error("canvas has no 2d context")]
	ContextUnavailable,

	#[error("failed to get 2d context")]
	GetContextError(#[from] JsError),
}

static_assertions::assert_impl_all!(SurfaceError: std::error::Error, Send, Sync);

/// A `Surface` backed by the 2D context of an HTML canvas.
#[derive(Debug)]
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	context: CanvasRenderingContext2d,
	style: StrokeStyle,
}

impl CanvasSurface {
	#[tracing::instrument(err)]
	pub fn new(canvas: HtmlCanvasElement, style: StrokeStyle) -> Result<Self, SurfaceError> {
		use SurfaceError::*;

		let context = canvas
			.get_context("2d")
			.map_err(JsError::from)?
			.ok_or(ContextUnavailable)?
			.dyn_into::<CanvasRenderingContext2d>()
			.map_err(|_| ContextUnavailable)?;

		let surface = Self {
			canvas,
			context,
			style,
		};
		surface.apply_style();
		Ok(surface)
	}

	pub fn canvas(&self) -> &HtmlCanvasElement {
		&self.canvas
	}

	pub fn context(&self) -> &CanvasRenderingContext2d {
		&self.context
	}

	// Setting either dimension of a canvas resets its context state, so this has to follow
	// every resize.
	fn apply_style(&self) {
		self.context.set_line_width(self.style.width);
		self.context.set_line_cap(&self.style.cap.to_string());
		self.context.set_line_join(&self.style.join.to_string());
		self.context.set_stroke_style_str(&self.style.css_color());
	}
}

impl Surface for CanvasSurface {
	fn resize(&mut self, width: u32, height: u32) {
		tracing::debug!(width, height, "resizing canvas");
		self.canvas.set_width(width);
		self.canvas.set_height(height);
		self.apply_style();
	}

	fn clear(&mut self) {
		self.context.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	fn begin_path(&mut self) {
		self.context.begin_path();
	}

	fn move_to(&mut self, point: Point) {
		self.context.move_to(point.x as f64, point.y as f64);
	}

	fn line_to(&mut self, point: Point) {
		self.context.line_to(point.x as f64, point.y as f64);
	}

	fn stroke(&mut self) {
		self.context.stroke();
	}
}
