//! Tagged view state
//!
//! Every console screen renders one of four shapes: nothing requested yet,
//! request in flight, request failed, data on hand. Collapsing the four
//! into one union keeps the render paths uniform instead of repeating
//! loading/error/empty branches per view.

use crate::error::Error;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ViewState<T> {
	#[default]
	Idle,
	Loading,
	Error(String),
	Loaded(T),
}

impl<T> ViewState<T> {
	/// Fold a request outcome into the displayed state
	pub fn from_result(result: Result<T, Error>) -> Self {
		match result {
			Ok(data) => Self::Loaded(data),
			Err(err) => Self::Error(err.to_string()),
		}
	}

	#[must_use]
	pub const fn is_loading(&self) -> bool { matches!(self, Self::Loading) }

	/// The loaded data, if any
	pub const fn loaded(&self) -> Option<&T> {
		match self {
			Self::Loaded(data) => Some(data),
			_ => None,
		}
	}

	/// The failure reason, if any
	pub fn error(&self) -> Option<&str> {
		match self {
			Self::Error(reason) => Some(reason),
			_ => None,
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ViewState<U> {
		match self {
			Self::Idle => ViewState::Idle,
			Self::Loading => ViewState::Loading,
			Self::Error(reason) => ViewState::Error(reason),
			Self::Loaded(data) => ViewState::Loaded(f(data)),
		}
	}
}
