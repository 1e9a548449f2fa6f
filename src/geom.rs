use glam::Vec2;

/// The top-left corner of an element, in client (viewport) coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Origin {
	min: Vec2,
}

impl Origin {
	pub fn new(min: Vec2) -> Self {
		Self { min }
	}

	/// Translates a client position into coordinates relative to the top-left corner. Yields
	/// `None` rather than a meaningless position if anything involved is not finite.
	pub fn to_local(&self, client: Vec2) -> Option<Vec2> {
		let local = client - self.min;
		local.is_finite().then_some(local)
	}
}

impl From<&web_sys::DomRect> for Origin {
	fn from(rect: &web_sys::DomRect) -> Self {
		Self::new(Vec2::new(rect.left() as f32, rect.top() as f32))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_relative_eq;

	#[test]
	fn to_local_subtracts_origin() {
		let origin = Origin::new(Vec2::new(100.0, 50.5));
		let local = origin.to_local(Vec2::new(110.0, 60.0)).unwrap();
		assert_relative_eq!(local.x, 10.0);
		assert_relative_eq!(local.y, 9.5);
	}

	#[test]
	fn to_local_allows_points_outside_element() {
		let origin = Origin::new(Vec2::new(100.0, 100.0));
		assert_eq!(origin.to_local(Vec2::new(90.0, 200.0)), Some(Vec2::new(-10.0, 100.0)));
	}

	#[test]
	fn to_local_rejects_non_finite() {
		let origin = Origin::new(Vec2::ZERO);
		assert_eq!(origin.to_local(Vec2::new(f32::NAN, 1.0)), None);
		assert_eq!(origin.to_local(Vec2::new(1.0, f32::INFINITY)), None);

		let broken = Origin::new(Vec2::new(f32::NAN, 0.0));
		assert_eq!(broken.to_local(Vec2::new(1.0, 1.0)), None);
	}
}
