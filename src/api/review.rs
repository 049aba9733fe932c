use validator::Validate;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::Review;
use crate::schemas::MessageResponse;
use crate::schemas::review::{
	CanReviewQuery,
	CanReviewResponse,
	CreateReviewRequest,
	ReviewStatsResponse,
	ReviewsResponse,
};
use crate::session::Session;

impl ApiClient {
	/// Publish a review
	#[instrument(
		skip(self, request),
		fields(facility_id = request.facility_id, rating = request.rating)
	)]
	pub async fn create_review(
		&self,
		request: &CreateReviewRequest,
	) -> Result<MessageResponse, Error> {
		request.validate()?;

		self.post("/reviews", request).await
	}

	/// List a facility's reviews, newest first
	#[instrument(skip(self))]
	pub async fn facility_reviews(
		&self,
		facility_id: i64,
	) -> Result<Vec<Review>, Error> {
		let response: ReviewsResponse = self
			.get(&format!("/reviews/facility/{facility_id}"))
			.await?;

		Ok(response.reviews)
	}

	/// Backend-computed rating aggregate for a facility
	#[instrument(skip(self))]
	pub async fn facility_review_stats(
		&self,
		facility_id: i64,
	) -> Result<ReviewStatsResponse, Error> {
		self.get(&format!("/reviews/facility/{facility_id}/stats")).await
	}

	/// Whether the signed-in user may review the facility (requires a
	/// completed booking there)
	#[instrument(skip(self, session))]
	pub async fn can_review(
		&self,
		session: &Session,
		facility_id: i64,
	) -> Result<CanReviewResponse, Error> {
		let query = CanReviewQuery { user_id: session.user_id() };

		self.get_with(&format!("/reviews/can-review/{facility_id}"), &query)
			.await
	}
}
