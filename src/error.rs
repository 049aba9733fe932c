//! Library-wide error types and [`From`] impls

use reqwest::StatusCode;
use thiserror::Error;

/// Top level application error
///
/// Everything the consoles surface folds into two categories: a failed
/// request ([`Error::Api`] / [`Error::Network`]) or a client-side
/// validation failure (everything else)
#[derive(Debug, Error)]
pub enum Error {
	/// The backend answered with a non-2xx status
	#[error(transparent)]
	Api(#[from] ApiError),
	/// The request never completed
	#[error("network error -- {0}")]
	Network(#[from] reqwest::Error),
	/// Client-side validation rejected the input before any request was
	/// issued
	#[error("{0}")]
	Validation(String),
	/// Any error related to the on-disk session blob
	#[error(transparent)]
	Session(#[from] SessionError),
	/// Any error related to composing a booking
	#[error(transparent)]
	Booking(#[from] BookingError),
}

/// An error response from the backend
///
/// The backend wraps every failure in an `{"error": "<message>"}` envelope;
/// the message is surfaced verbatim
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
	pub status:  StatusCode,
	pub message: String,
}

/// Any error related to the persisted session
#[derive(Debug, Error)]
pub enum SessionError {
	#[error("not signed in")]
	NotSignedIn,
	#[error("session store I/O error -- {0}")]
	Io(std::io::Error),
	#[error("corrupt session data -- {0}")]
	Corrupt(serde_json::Error),
}

/// Any error related to composing a booking
#[derive(Debug, Error)]
pub enum BookingError {
	#[error("select at least one court")]
	NoCourtsSelected,
	#[error("select a booking date")]
	MissingDate,
	#[error("select a start time")]
	MissingStartTime,
}

/// A wall-clock string that matched neither display convention
#[derive(Debug, Error)]
#[error("invalid wall-clock time '{0}'")]
pub struct InvalidSlotTime(pub String);

impl From<InvalidSlotTime> for Error {
	fn from(err: InvalidSlotTime) -> Self { Self::Validation(err.to_string()) }
}

/// Map validation errors to application errors
impl From<validator::ValidationErrors> for Error {
	fn from(err: validator::ValidationErrors) -> Self {
		let errs = err.field_errors();
		let repr = errs
			.values()
			.map(|v| {
				v.iter()
					.map(ToString::to_string)
					.collect::<Vec<String>>()
					.join("\n")
			})
			.collect::<Vec<String>>()
			.join("\n");

		Self::Validation(repr)
	}
}
