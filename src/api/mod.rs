//! The backend's REST surface, one module per entity
//!
//! Every operation is a method on [`ApiClient`]; paths and payload shapes
//! follow the backend exactly. Validated request types are checked before
//! the request is issued.

mod admin;
mod auth;
mod booking;
mod court;
mod facility;
mod review;
mod time_slot;

use crate::client::ApiClient;
use crate::error::Error;
use crate::schemas::HealthResponse;

impl ApiClient {
	/// Check if the backend is reachable and healthy
	#[instrument(skip(self))]
	pub async fn health(&self) -> Result<HealthResponse, Error> {
		self.get("/health").await
	}
}
