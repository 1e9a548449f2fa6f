use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

struct CallbackFutureState<Output> {
	result: Option<Output>,
	waker: Option<Waker>,
}

/// A future completed by calling a plain callback, for bridging callback-style browser APIs
/// such as `setTimeout`. Single-threaded: both halves stay on the thread that made them.
pub struct CallbackFuture<Output> {
	state: Rc<RefCell<CallbackFutureState<Output>>>,
}

impl<Output> CallbackFuture<Output> {
	pub fn new() -> (Self, impl FnOnce(Output)) {
		let state = Rc::new(RefCell::new(CallbackFutureState {
			result: None,
			waker: None,
		}));
		let callback = {
			let state = state.clone();
			move |result| {
				let waker = {
					let mut state = state.borrow_mut();
					state.result = Some(result);
					state.waker.take()
				};
				if let Some(waker) = waker {
					waker.wake();
				}
			}
		};
		(CallbackFuture { state }, callback)
	}
}

impl<Output> Future for CallbackFuture<Output> {
	type Output = Output;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Output> {
		let mut state = self.state.borrow_mut();
		match state.result.take() {
			Some(result) => Poll::Ready(result),
			None => {
				state.waker = Some(cx.waker().clone());
				Poll::Pending
			}
		}
	}
}
