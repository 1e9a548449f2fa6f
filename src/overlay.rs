use glam::Vec2;

/// The hand image that follows the pen tip during replay.
pub trait Overlay {
	fn show(&mut self);

	fn hide(&mut self);

	/// Places the image's anchor at `position`, in surface coordinates.
	fn move_to(&mut self, position: Vec2);
}

/// Everything a user can use to change the board: the recording surface and the
/// animate/clear buttons. Disabled for the whole of a replay.
pub trait Controls {
	fn set_enabled(&mut self, enabled: bool);
}
