use super::{HandCursor, SignalControls, SignalOverlay, Toolbar};
use crate::board::{Board, SharedBoard};
use crate::config::Config;
use crate::document::Point;
use crate::input::{self, CoordinateSource, Gesture};
use crate::player;
use crate::surface::CanvasSurface;
use crate::util::*;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos::{ev, html};
use leptos_use::{use_element_size, UseElementSizeReturn};

type CanvasBoard = SharedBoard<CanvasSurface, SignalOverlay, SignalControls>;

/// Holds the board once the canvas exists.
type BoardSlot = StoredValue<Option<CanvasBoard>, LocalStorage>;

fn dispatch(slot: BoardSlot, gesture: Gesture, position: Option<Point>) {
	if let Some(board) = slot.get_value() {
		input::dispatch(&mut *board.borrow_mut(), gesture, position);
	}
}

fn position(canvas_ref: NodeRef<html::Canvas>, source: &impl CoordinateSource) -> Option<Point> {
	let canvas = canvas_ref.get_untracked()?;
	source.position_in(&canvas)
}

#[component]
pub fn Whiteboard(#[prop(optional)] config: Option<Config>) -> impl IntoView {
	let config = config.unwrap_or_default();
	let canvas_ref = NodeRef::<html::Canvas>::new();
	let overlay = SignalOverlay::new();
	let controls = SignalControls::new();
	let slot: BoardSlot = StoredValue::new_local(None);

	// The observed size changes on mount and whenever the layout does. Either way the pixel
	// buffer has to follow it.
	let UseElementSizeReturn { width, height } = use_element_size(canvas_ref);
	{
		let config = config.clone();
		Effect::new(move |_| {
			let (width, height) = (width.get(), height.get());
			let Some(canvas) = canvas_ref.get() else {
				return;
			};
			if slot.with_value(Option::is_none) {
				let Some(surface) = CanvasSurface::new(canvas, config.stroke.clone()).ok_or_log()
				else {
					return;
				};
				tracing::info!("whiteboard ready");
				slot.set_value(Some(
					Board::new(config.clone(), surface, overlay, controls).shared(),
				));
			}
			if let Some(board) = slot.get_value() {
				board
					.borrow_mut()
					.resize(width.round() as u32, height.round() as u32);
			}
		});
	}

	let pointerdown = move |e: ev::PointerEvent| {
		if input::is_touch_pointer(&e) {
			return;
		}
		e.set_pointer_capture();
		dispatch(slot, Gesture::Begin, position(canvas_ref, &e));
	};
	let pointermove = move |e: ev::PointerEvent| {
		if input::is_touch_pointer(&e) {
			return;
		}
		dispatch(slot, Gesture::Extend, position(canvas_ref, &e));
	};
	let pointerup = move |e: ev::PointerEvent| {
		if input::is_touch_pointer(&e) {
			return;
		}
		e.release_pointer_capture();
		dispatch(slot, Gesture::End, None);
	};

	let touchstart = move |e: ev::TouchEvent| {
		e.prevent_default();
		dispatch(slot, Gesture::Begin, position(canvas_ref, &e));
	};
	let touchmove = move |e: ev::TouchEvent| {
		e.prevent_default();
		dispatch(slot, Gesture::Extend, position(canvas_ref, &e));
	};
	let touchend = move |_: ev::TouchEvent| {
		dispatch(slot, Gesture::End, None);
	};

	let on_animate = Callback::new(move |_: ()| {
		let Some(board) = slot.get_value() else {
			return;
		};
		let Some(replay) = board.borrow_mut().start_replay() else {
			return;
		};
		spawn_local(async move {
			player::run(&board, replay, &TimeoutTimer).await;
		});
	});

	let on_clear = Callback::new(move |_: ()| {
		if let Some(board) = slot.get_value() {
			board.borrow_mut().clear_all();
		}
	});

	let input_enabled = controls.enabled();
	let pointer_events = move || if input_enabled.get() { "auto" } else { "none" };

	view! {
		<div class="Whiteboard">
			<canvas
				class="WhiteboardCanvas"
				node_ref=canvas_ref
				style:pointer-events=pointer_events
				style:touch-action="none"
				on:pointerdown=pointerdown
				on:pointermove=pointermove
				on:pointerup=pointerup
				on:pointerleave=pointerup
				on:touchstart=touchstart
				on:touchmove=touchmove
				on:touchend=touchend
				on:touchcancel=touchend
			></canvas>
			<HandCursor overlay src=config.hand_image.clone()/>
			<Toolbar controls on_animate on_clear/>
		</div>
	}
}
