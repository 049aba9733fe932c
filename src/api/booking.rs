use reqwest::{Method, StatusCode};

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::Booking;
use crate::schemas::booking::{
	BookingActionResponse,
	BookingStats,
	BookingStatsQuery,
	BookingUpdate,
	BookingsQuery,
	BookingsResponse,
	CancelBookingRequest,
	ConflictCheckRequest,
	ConflictCheckResponse,
	CreateBookingRequest,
	CreateBookingResponse,
};
use crate::session::Session;

impl ApiClient {
	/// List the signed-in user's bookings, newest date first
	#[instrument(skip(self, session))]
	pub async fn bookings(
		&self,
		session: &Session,
	) -> Result<Vec<Booking>, Error> {
		let query = BookingsQuery { user_id: session.user_id() };
		let response: BookingsResponse =
			self.get_with("/bookings", &query).await?;

		Ok(response.bookings)
	}

	/// Submit one booking row
	///
	/// Conflict rejection is backend-owned; an already-taken slot comes
	/// back as a 400 with the backend's message
	#[instrument(
		skip(self, request),
		fields(court_id = request.court_id, date = %request.booking_date)
	)]
	pub async fn create_booking(
		&self,
		request: &CreateBookingRequest,
	) -> Result<CreateBookingResponse, Error> {
		self.post("/bookings", request).await
	}

	/// Mutate a booking's status or payment status
	#[instrument(skip(self, update))]
	pub async fn update_booking(
		&self,
		id: i64,
		update: &BookingUpdate,
	) -> Result<BookingActionResponse, Error> {
		self.put(&format!("/bookings/{id}"), update).await
	}

	/// Cancel one of the signed-in user's bookings
	#[instrument(skip(self, session))]
	pub async fn cancel_booking(
		&self,
		session: &Session,
		id: i64,
	) -> Result<BookingActionResponse, Error> {
		let request = CancelBookingRequest { user_id: session.user_id() };

		self.post(&format!("/bookings/{id}/cancel"), &request).await
	}

	/// Facility-level booking counters
	#[instrument(skip(self))]
	pub async fn booking_stats(
		&self,
		facility_id: i64,
	) -> Result<BookingStats, Error> {
		let query = BookingStatsQuery { facility_id };

		self.get_with("/bookings/stats", &query).await
	}

	/// Advisory conflict probe
	///
	/// The backend answers 409 when the range collides with an existing
	/// booking; both outcomes decode into the same body, so a conflict is
	/// a result here, not an error
	#[instrument(skip(self, request), fields(court_id = request.court_id))]
	pub async fn check_booking_conflict(
		&self,
		request: &ConflictCheckRequest,
	) -> Result<ConflictCheckResponse, Error> {
		let response = self
			.request(Method::POST, "/bookings/check-conflict")
			.json(request)
			.send()
			.await?;

		if response.status() == StatusCode::CONFLICT {
			return Ok(response.json::<ConflictCheckResponse>().await?);
		}

		Self::decode(response).await
	}
}
