use std::time::Duration;

use derive_more::Display;
use glam::Vec2;

/// How the ends of an open stroke are drawn. Displays as the canvas `lineCap` keyword.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display)]
pub enum LineCap {
	#[display("butt")]
	Butt,
	#[default]
	#[display("round")]
	Round,
	#[display("square")]
	Square,
}

/// How consecutive segments of a stroke are joined. Displays as the canvas `lineJoin` keyword.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Display)]
pub enum LineJoin {
	#[default]
	#[display("round")]
	Round,
	#[display("bevel")]
	Bevel,
	#[display("miter")]
	Miter,
}

#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct StrokeStyle {
	#[builder(default = 3.0)]
	pub width: f64,

	#[builder(default)]
	pub cap: LineCap,

	#[builder(default)]
	pub join: LineJoin,

	#[builder(default = csscolorparser::Color::from_rgba8(0, 0, 0, 255))]
	pub color: csscolorparser::Color,
}

impl Default for StrokeStyle {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl StrokeStyle {
	/// The color as a CSS string suitable for `strokeStyle`.
	pub fn css_color(&self) -> String {
		match self.color.to_rgba8() {
			[r, g, b, 255] => format!("#{r:02x}{g:02x}{b:02x}"),
			[r, g, b, a] => format!("#{r:02x}{g:02x}{b:02x}{a:02x}"),
		}
	}
}

/// Tunables for recording and replay.
#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct Config {
	#[builder(default)]
	pub stroke: StrokeStyle,

	/// Pause before each point after the first of every stroke during replay.
	#[builder(default = Duration::from_millis(10))]
	pub replay_delay: Duration,

	/// Added to a point to get the position of the hand image, so the pen tip in the image
	/// lands on the point. Depends on the image.
	#[builder(default = Vec2::new(-20.0, -20.0))]
	pub cursor_offset: Vec2,

	/// Whether the hand disappears once a replay is done. It stays put by default.
	#[builder(default = false)]
	pub hide_cursor_when_finished: bool,

	#[builder(into, default = String::from("hand.svg"))]
	pub hand_image: String,
}

impl Default for Config {
	fn default() -> Self {
		Self::builder().build()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::default();
		assert_eq!(config.stroke.width, 3.0);
		assert_eq!(config.stroke.cap.to_string(), "round");
		assert_eq!(config.stroke.join.to_string(), "round");
		assert_eq!(config.stroke.css_color(), "#000000");
		assert_eq!(config.replay_delay, Duration::from_millis(10));
		assert_eq!(config.cursor_offset, Vec2::new(-20.0, -20.0));
		assert!(!config.hide_cursor_when_finished);
	}

	#[test]
	fn builder_overrides() {
		let config = Config::builder()
			.stroke(
				StrokeStyle::builder()
					.width(5.0)
					.cap(LineCap::Square)
					.join(LineJoin::Bevel)
					.color(csscolorparser::parse("red").unwrap())
					.build(),
			)
			.replay_delay(Duration::from_millis(25))
			.hide_cursor_when_finished(true)
			.hand_image("pen.png")
			.build();
		assert_eq!(config.stroke.cap.to_string(), "square");
		assert_eq!(config.stroke.join.to_string(), "bevel");
		assert_eq!(config.stroke.css_color(), "#ff0000");
		assert_eq!(config.replay_delay, Duration::from_millis(25));
		assert_eq!(config.hand_image, "pen.png");

		let translucent = StrokeStyle::builder()
			.color(csscolorparser::Color::from_rgba8(0, 128, 255, 128))
			.build();
		assert_eq!(translucent.css_color(), "#0080ff80");
	}
}
