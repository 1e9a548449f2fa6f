use crate::document::Point;
use crate::geom::Origin;
use glam::Vec2;

/// Receives gestures, already translated into surface coordinates.
pub trait StrokeInput {
	fn begin(&mut self, point: Point);
	fn extend(&mut self, point: Point);
	fn end(&mut self);
}

/// An input event that carries a position in client (viewport) coordinates.
pub trait CoordinateSource {
	fn client_position(&self) -> Option<Vec2>;

	/// The position relative to the top-left corner of `element`.
	fn position_in(&self, element: &web_sys::Element) -> Option<Point> {
		let client = self.client_position()?;
		Origin::from(&element.get_bounding_client_rect()).to_local(client)
	}
}

impl CoordinateSource for web_sys::MouseEvent {
	fn client_position(&self) -> Option<Vec2> {
		Some(Vec2::new(self.client_x() as f32, self.client_y() as f32))
	}
}

impl CoordinateSource for web_sys::PointerEvent {
	fn client_position(&self) -> Option<Vec2> {
		let event: &web_sys::MouseEvent = self;
		event.client_position()
	}
}

/// Only the first touch counts; the rest of a multi-touch gesture is ignored.
impl CoordinateSource for web_sys::TouchEvent {
	fn client_position(&self) -> Option<Vec2> {
		let touch = self.touches().get(0)?;
		Some(Vec2::new(touch.client_x() as f32, touch.client_y() as f32))
	}
}

/// Pointer events for touch contacts are left to the touch handlers so a single touch is not
/// recorded twice.
pub fn is_touch_pointer(event: &web_sys::PointerEvent) -> bool {
	event.pointer_type() == "touch"
}

/// What a raw input event means for the stroke being recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Gesture {
	Begin,
	Extend,
	End,
}

/// Forwards a gesture to `sink`. Positional gestures whose position could not be determined
/// are dropped.
pub fn dispatch(sink: &mut impl StrokeInput, gesture: Gesture, position: Option<Point>) {
	match (gesture, position) {
		(Gesture::Begin, Some(point)) => sink.begin(point),
		(Gesture::Extend, Some(point)) => sink.extend(point),
		(Gesture::End, _) => sink.end(),
		(gesture, None) => tracing::trace!(?gesture, "dropping input without a position"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Log(Vec<String>);

	impl StrokeInput for Log {
		fn begin(&mut self, point: Point) {
			self.0.push(format!("begin {} {}", point.x, point.y));
		}

		fn extend(&mut self, point: Point) {
			self.0.push(format!("extend {} {}", point.x, point.y));
		}

		fn end(&mut self) {
			self.0.push("end".to_owned());
		}
	}

	#[test]
	fn dispatch_routes_gestures() {
		let mut log = Log::default();
		dispatch(&mut log, Gesture::Begin, Some(Point::new(1.0, 2.0)));
		dispatch(&mut log, Gesture::Extend, Some(Point::new(3.0, 4.0)));
		dispatch(&mut log, Gesture::End, None);
		assert_eq!(log.0, vec!["begin 1 2", "extend 3 4", "end"]);
	}

	#[test]
	fn dispatch_drops_missing_positions() {
		let mut log = Log::default();
		dispatch(&mut log, Gesture::Begin, None);
		dispatch(&mut log, Gesture::Extend, None);
		assert!(log.0.is_empty());
	}
}
