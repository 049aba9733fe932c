//! Request and response payloads for the backend surface
//!
//! Requests that carry user input derive [`Validate`](validator::Validate)
//! and are checked before a byte leaves the process; validation failures
//! surface as [`Error::Validation`](crate::error::Error) without a request
//! being issued.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod court;
pub mod facility;
pub mod review;
pub mod time_slot;

use serde::{Deserialize, Serialize};

/// The backend's generic acknowledgement body
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MessageResponse {
	pub message: String,
}

/// Service health probe body
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct HealthResponse {
	pub status:    String,
	pub timestamp: String,
	pub service:   String,
}
