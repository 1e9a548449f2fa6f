use crate::document::{Document, Point};

mod canvas;
pub use canvas::*;

/// The 2D drawing API strokes are rendered through. Paths follow the canvas model: a path is
/// started, built from moves and lines, and then stroked with the current style.
pub trait Surface {
	/// Resizes the pixel buffer. This discards everything drawn so far.
	fn resize(&mut self, width: u32, height: u32);

	/// Erases every pixel.
	fn clear(&mut self);

	fn begin_path(&mut self);

	fn move_to(&mut self, point: Point);

	fn line_to(&mut self, point: Point);

	/// Paints the current path.
	fn stroke(&mut self);
}

/// Erases the surface and paints the whole document as a single path.
pub fn paint_document(surface: &mut impl Surface, document: &Document) {
	surface.clear();
	surface.begin_path();
	for stroke in document.strokes() {
		surface.move_to(stroke.first());
		for &point in &stroke.points()[1..] {
			surface.line_to(point);
		}
	}
	surface.stroke();
}
