use crate::board::Board;
use crate::document::{Document, Point};
use crate::overlay::{Controls, Overlay};
use crate::surface::Surface;
use futures::future::LocalBoxFuture;
use glam::Vec2;
use std::cell::RefCell;
use std::time::Duration;

/// Source of the pauses between replayed points.
pub trait Timer {
	fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, derive_more::Display)]
pub enum PlaybackState {
	#[default]
	Idle,
	Running,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ReplayStep {
	/// The first point of a stroke. Drawn without any pause.
	Start(Point),
	/// Any later point of a stroke, drawn after a pause.
	Segment(Point),
}

impl ReplayStep {
	pub fn point(&self) -> Point {
		match *self {
			ReplayStep::Start(point) | ReplayStep::Segment(point) => point,
		}
	}

	pub fn is_delayed(&self) -> bool {
		matches!(self, ReplayStep::Segment(_))
	}
}

/// Everything a single run needs, captured when the run starts.
#[derive(Clone, Debug, PartialEq)]
pub struct Replay {
	steps: Vec<ReplayStep>,
	delay: Duration,
}

impl Replay {
	pub fn new(document: &Document, delay: Duration) -> Self {
		let steps = document
			.strokes()
			.iter()
			.flat_map(|stroke| {
				std::iter::once(ReplayStep::Start(stroke.first()))
					.chain(stroke.points()[1..].iter().copied().map(ReplayStep::Segment))
			})
			.collect();
		Self { steps, delay }
	}

	pub fn steps(&self) -> &[ReplayStep] {
		&self.steps
	}

	pub fn delay(&self) -> Duration {
		self.delay
	}

	pub fn delayed_steps(&self) -> usize {
		self.steps.iter().filter(|s| s.is_delayed()).count()
	}
}

/// Idle/Running state machine that re-draws the document point by point while moving the
/// cursor overlay along.
#[derive(Debug)]
pub struct AnimationPlayer {
	state: PlaybackState,
	delay: Duration,
	cursor_offset: Vec2,
	hide_cursor_when_finished: bool,
	/// Steps of the current run drawn so far.
	rendered: Vec<ReplayStep>,
}

impl AnimationPlayer {
	pub fn new(delay: Duration, cursor_offset: Vec2, hide_cursor_when_finished: bool) -> Self {
		Self {
			state: PlaybackState::Idle,
			delay,
			cursor_offset,
			hide_cursor_when_finished,
			rendered: Vec::new(),
		}
	}

	fn set_state(&mut self, state: PlaybackState) {
		tracing::debug!(from = %self.state, to = %state, "playback state");
		self.state = state;
	}

	pub fn state(&self) -> PlaybackState {
		self.state
	}

	pub fn is_running(&self) -> bool {
		self.state == PlaybackState::Running
	}

	/// Moves to `Running` and prepares the surface, unless the document is empty or a run is
	/// already in progress.
	pub fn start(
		&mut self,
		document: &Document,
		surface: &mut impl Surface,
		overlay: &mut impl Overlay,
		controls: &mut impl Controls,
	) -> Option<Replay> {
		if self.is_running() {
			tracing::warn!("replay already running");
			return None;
		}
		if document.is_empty() {
			tracing::debug!("nothing to replay");
			return None;
		}

		let replay = Replay::new(document, self.delay);
		tracing::info!(
			strokes = document.len(),
			points = document.point_count(),
			delayed_steps = replay.delayed_steps(),
			"starting replay"
		);

		self.set_state(PlaybackState::Running);
		self.rendered.clear();
		controls.set_enabled(false);
		overlay.show();
		surface.clear();
		Some(replay)
	}

	pub fn render_step(
		&mut self,
		step: ReplayStep,
		surface: &mut impl Surface,
		overlay: &mut impl Overlay,
	) {
		debug_assert!(self.is_running());
		draw_step(step, surface);
		self.rendered.push(step);
		overlay.move_to(step.point() + self.cursor_offset);
	}

	/// Draws again everything this run has drawn so far, onto a surface that lost it. The
	/// current path ends where the run left off, so the next step continues the right stroke.
	pub fn repaint(&self, surface: &mut impl Surface) {
		surface.clear();
		for &step in &self.rendered {
			draw_step(step, surface);
		}
	}

	pub fn finish(&mut self, overlay: &mut impl Overlay, controls: &mut impl Controls) {
		if !self.is_running() {
			return;
		}
		tracing::info!("replay finished");
		self.set_state(PlaybackState::Idle);
		self.rendered.clear();
		if self.hide_cursor_when_finished {
			overlay.hide();
		}
		controls.set_enabled(true);
	}
}

fn draw_step(step: ReplayStep, surface: &mut impl Surface) {
	match step {
		ReplayStep::Start(point) => {
			surface.begin_path();
			surface.move_to(point);
		}
		ReplayStep::Segment(point) => {
			surface.line_to(point);
			surface.stroke();
		}
	}
}

/// Renders every step of `replay`, pausing before each delayed one. The board is only
/// borrowed between pauses.
pub async fn run<S, O, C>(board: &RefCell<Board<S, O, C>>, replay: Replay, timer: &impl Timer)
where
	S: Surface,
	O: Overlay,
	C: Controls,
{
	for &step in replay.steps() {
		if step.is_delayed() {
			timer.sleep(replay.delay()).await;
		}
		board.borrow_mut().render_replay_step(step);
	}
	board.borrow_mut().finish_replay();
}

/// Starts a replay and runs it to completion. Returns `false` if there was nothing to play.
pub async fn play<S, O, C>(board: &RefCell<Board<S, O, C>>, timer: &impl Timer) -> bool
where
	S: Surface,
	O: Overlay,
	C: Controls,
{
	let Some(replay) = board.borrow_mut().start_replay() else {
		return false;
	};
	run(board, replay, timer).await;
	true
}
