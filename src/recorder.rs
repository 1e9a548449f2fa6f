use crate::document::{Document, Point, Stroke};
use crate::surface::{self, Surface};

/// Turns gestures into strokes, drawing them as they come in.
#[derive(Debug, Default)]
pub struct StrokeRecorder {
	active: bool,
}

impl StrokeRecorder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn is_active(&self) -> bool {
		self.active
	}

	/// Starts a new stroke at `point`. A gesture that never ended is simply superseded.
	pub fn begin(&mut self, document: &mut Document, surface: &mut impl Surface, point: Point) {
		tracing::trace!(?point, strokes = document.len(), "begin stroke");
		document.push(Stroke::new(point));
		self.active = true;

		surface.begin_path();
		surface.move_to(point);
	}

	/// Appends `point` to the stroke in progress. Returns whether anything was recorded.
	pub fn extend(
		&mut self,
		document: &mut Document,
		surface: &mut impl Surface,
		point: Point,
	) -> bool {
		if !self.active {
			return false;
		}
		let Some(stroke) = document.last_mut() else {
			tracing::warn!("active gesture without a stroke");
			self.active = false;
			return false;
		};
		stroke.push(point);

		surface.line_to(point);
		surface.stroke();
		true
	}

	/// Finishes the stroke in progress. Returns whether a gesture was active.
	pub fn end(&mut self) -> bool {
		std::mem::replace(&mut self.active, false)
	}

	pub fn clear_all(&mut self, document: &mut Document, surface: &mut impl Surface) {
		tracing::debug!(strokes = document.len(), "clearing document");
		self.active = false;
		document.clear();
		surface.clear();
	}

	pub fn redraw_all(&self, document: &Document, surface: &mut impl Surface) {
		surface::paint_document(surface, document);
		if self.active {
			// Keep extending the interrupted stroke from where it left off.
			if let Some(point) = document.last_point() {
				surface.begin_path();
				surface.move_to(point);
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test::*;

	fn p(x: f32, y: f32) -> Point {
		Point::new(x, y)
	}

	#[test]
	fn records_gesture() {
		let mut recorder = StrokeRecorder::new();
		let mut document = Document::new();
		let mut surface = RecordingSurface::default();

		recorder.begin(&mut document, &mut surface, p(10.0, 10.0));
		assert!(recorder.extend(&mut document, &mut surface, p(20.0, 10.0)));
		assert!(recorder.extend(&mut document, &mut surface, p(20.0, 20.0)));
		assert!(recorder.end());

		assert_eq!(document.len(), 1);
		assert_eq!(
			document.strokes()[0].points(),
			&[p(10.0, 10.0), p(20.0, 10.0), p(20.0, 20.0)]
		);
		assert_eq!(
			surface.painted_segments(),
			segments(&[((10.0, 10.0), (20.0, 10.0)), ((20.0, 10.0), (20.0, 20.0))])
		);
	}

	#[test]
	fn point_count_is_one_plus_active_extends() {
		let mut recorder = StrokeRecorder::new();
		let mut document = Document::new();
		let mut surface = RecordingSurface::default();

		for extends in 0..5 {
			// Stray input before and after the gesture.
			recorder.extend(&mut document, &mut surface, p(-1.0, -1.0));
			recorder.begin(&mut document, &mut surface, p(0.0, 0.0));
			for i in 0..extends {
				recorder.extend(&mut document, &mut surface, p(i as f32, 1.0));
			}
			recorder.end();
			recorder.extend(&mut document, &mut surface, p(-1.0, -1.0));
			recorder.end();

			assert_eq!(document.strokes().last().unwrap().len(), 1 + extends);
		}
		assert_eq!(document.len(), 5);
	}

	#[test]
	fn input_without_gesture_is_ignored() {
		let mut recorder = StrokeRecorder::new();
		let mut document = Document::new();
		let mut surface = RecordingSurface::default();

		assert!(!recorder.extend(&mut document, &mut surface, p(1.0, 1.0)));
		assert!(!recorder.end());
		assert!(document.is_empty());
		assert!(surface.painted_segments().is_empty());
	}

	#[test]
	fn clear_all_ends_gesture() {
		let mut recorder = StrokeRecorder::new();
		let mut document = Document::new();
		let mut surface = RecordingSurface::default();

		recorder.begin(&mut document, &mut surface, p(0.0, 0.0));
		recorder.extend(&mut document, &mut surface, p(1.0, 0.0));
		recorder.clear_all(&mut document, &mut surface);

		assert!(document.is_empty());
		assert!(!recorder.is_active());
		assert!(surface.painted_segments().is_empty());
		assert!(!recorder.extend(&mut document, &mut surface, p(2.0, 0.0)));
		assert!(document.is_empty());
	}

	#[test]
	fn redraw_matches_live_recording() {
		let mut recorder = StrokeRecorder::new();
		let mut document = Document::new();
		let mut live = RecordingSurface::default();

		for stroke in [
			&[(0.0, 0.0), (5.0, 5.0), (10.0, 0.0)][..],
			&[(20.0, 20.0)][..],
			&[(30.0, 30.0), (40.0, 30.0)][..],
		] {
			recorder.begin(&mut document, &mut live, p(stroke[0].0, stroke[0].1));
			for &(x, y) in &stroke[1..] {
				recorder.extend(&mut document, &mut live, p(x, y));
			}
			recorder.end();
		}

		let mut redrawn = RecordingSurface::default();
		redrawn.begin_path();
		redrawn.move_to(p(90.0, 90.0));
		redrawn.line_to(p(99.0, 99.0));
		redrawn.stroke();
		recorder.redraw_all(&document, &mut redrawn);

		assert_eq!(redrawn.painted_segments(), live.painted_segments());
		assert_eq!(redrawn.painted_segments().len(), 3);
	}

	#[test]
	fn redraw_mid_gesture_continues_stroke() {
		let mut recorder = StrokeRecorder::new();
		let mut document = Document::new();
		let mut surface = RecordingSurface::default();

		recorder.begin(&mut document, &mut surface, p(0.0, 0.0));
		recorder.extend(&mut document, &mut surface, p(1.0, 0.0));
		surface.resize(100, 100);
		recorder.redraw_all(&document, &mut surface);
		recorder.extend(&mut document, &mut surface, p(2.0, 0.0));

		assert_eq!(
			surface.painted_segments(),
			segments(&[((0.0, 0.0), (1.0, 0.0)), ((1.0, 0.0), (2.0, 0.0))])
		);
	}
}
