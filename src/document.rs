use itertools::Itertools;

/// A position in surface-local coordinates, with the origin at the top-left of the drawing
/// surface.
pub type Point = glam::Vec2;

/// One continuous gesture, from press to release.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
	points: Vec<Point>,
}

impl Stroke {
	/// A stroke always starts from a point, so it is never empty.
	pub fn new(first: Point) -> Self {
		Self {
			points: vec![first],
		}
	}

	/// Returns `None` for an empty sequence.
	pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
		let mut points = points.into_iter();
		let mut stroke = Self::new(points.next()?);
		points.for_each(|p| stroke.push(p));
		Some(stroke)
	}

	pub fn points(&self) -> &[Point] {
		&self.points
	}

	pub fn first(&self) -> Point {
		self.points[0]
	}

	pub fn last(&self) -> Point {
		self.points[self.points.len() - 1]
	}

	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// Consecutive point pairs, in recorded order.
	pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
		self.points.iter().copied().tuple_windows()
	}

	pub(crate) fn push(&mut self, point: Point) {
		self.points.push(point);
	}
}

/// Every stroke currently held in memory, in the order they were drawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
	strokes: Vec<Stroke>,
}

impl Document {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	pub fn len(&self) -> usize {
		self.strokes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.strokes.is_empty()
	}

	pub fn point_count(&self) -> usize {
		self.strokes.iter().map(Stroke::len).sum()
	}

	#[cfg(test)]
	pub fn segment_count(&self) -> usize {
		self.strokes.iter().map(|s| s.len() - 1).sum()
	}

	pub fn last_point(&self) -> Option<Point> {
		self.strokes.last().map(Stroke::last)
	}

	pub(crate) fn push(&mut self, stroke: Stroke) {
		self.strokes.push(stroke);
	}

	pub(crate) fn last_mut(&mut self) -> Option<&mut Stroke> {
		self.strokes.last_mut()
	}

	pub(crate) fn clear(&mut self) {
		self.strokes.clear();
	}
}

impl FromIterator<Stroke> for Document {
	fn from_iter<I: IntoIterator<Item = Stroke>>(iter: I) -> Self {
		Self {
			strokes: iter.into_iter().collect(),
		}
	}
}
