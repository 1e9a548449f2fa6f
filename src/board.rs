use crate::config::Config;
use crate::document::{Document, Point};
use crate::input::StrokeInput;
use crate::overlay::{Controls, Overlay};
use crate::player::{AnimationPlayer, PlaybackState, Replay, ReplayStep};
use crate::recorder::StrokeRecorder;
use crate::surface::Surface;
use std::cell::RefCell;
use std::rc::Rc;

/// Owns all of a whiteboard's state: the document, where it is drawn, and the recorder and
/// player that work on it.
#[derive(Debug)]
pub struct Board<S, O, C> {
	config: Config,
	document: Document,
	surface: S,
	overlay: O,
	controls: C,
	recorder: StrokeRecorder,
	player: AnimationPlayer,
}

pub type SharedBoard<S, O, C> = Rc<RefCell<Board<S, O, C>>>;

impl<S: Surface, O: Overlay, C: Controls> Board<S, O, C> {
	pub fn new(config: Config, surface: S, mut overlay: O, mut controls: C) -> Self {
		overlay.hide();
		controls.set_enabled(true);
		let player = AnimationPlayer::new(
			config.replay_delay,
			config.cursor_offset,
			config.hide_cursor_when_finished,
		);
		Self {
			config,
			document: Document::new(),
			surface,
			overlay,
			controls,
			recorder: StrokeRecorder::new(),
			player,
		}
	}

	pub fn shared(self) -> SharedBoard<S, O, C> {
		Rc::new(RefCell::new(self))
	}

	pub fn config(&self) -> &Config {
		&self.config
	}

	pub fn document(&self) -> &Document {
		&self.document
	}

	pub fn surface(&self) -> &S {
		&self.surface
	}

	pub fn overlay(&self) -> &O {
		&self.overlay
	}

	pub fn controls(&self) -> &C {
		&self.controls
	}

	pub fn playback_state(&self) -> PlaybackState {
		self.player.state()
	}

	pub fn is_recording(&self) -> bool {
		self.recorder.is_active()
	}

	pub fn begin(&mut self, point: Point) {
		if self.player.is_running() {
			tracing::trace!("ignoring input during replay");
			return;
		}
		self
			.recorder
			.begin(&mut self.document, &mut self.surface, point);
	}

	pub fn extend(&mut self, point: Point) {
		if self.player.is_running() {
			return;
		}
		self
			.recorder
			.extend(&mut self.document, &mut self.surface, point);
	}

	pub fn end(&mut self) {
		self.recorder.end();
	}

	/// Empties the document and hides the hand. Not available during a replay.
	pub fn clear_all(&mut self) {
		if self.player.is_running() {
			tracing::warn!("ignoring clear during replay");
			return;
		}
		self
			.recorder
			.clear_all(&mut self.document, &mut self.surface);
		self.overlay.hide();
	}

	pub fn redraw_all(&mut self) {
		self.recorder.redraw_all(&self.document, &mut self.surface);
	}

	/// Matches the pixel buffer to the displayed size. Resizing wipes the buffer, so whatever
	/// was visible is drawn again: the part replayed so far during a replay, otherwise the
	/// whole document.
	pub fn resize(&mut self, width: u32, height: u32) {
		self.surface.resize(width, height);
		if self.player.is_running() {
			self.player.repaint(&mut self.surface);
		} else {
			self.redraw_all();
		}
	}

	pub fn start_replay(&mut self) -> Option<Replay> {
		self.recorder.end();
		self.player.start(
			&self.document,
			&mut self.surface,
			&mut self.overlay,
			&mut self.controls,
		)
	}

	pub fn render_replay_step(&mut self, step: ReplayStep) {
		self
			.player
			.render_step(step, &mut self.surface, &mut self.overlay);
	}

	pub fn finish_replay(&mut self) {
		self.player.finish(&mut self.overlay, &mut self.controls);
	}
}

impl<S: Surface, O: Overlay, C: Controls> StrokeInput for Board<S, O, C> {
	fn begin(&mut self, point: Point) {
		Board::begin(self, point)
	}

	fn extend(&mut self, point: Point) {
		Board::extend(self, point)
	}

	fn end(&mut self) {
		Board::end(self)
	}
}
