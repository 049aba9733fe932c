use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::models::Review;

/// Maximum review length; input is clamped here before validation ever
/// sees longer text
pub const REVIEW_TEXT_MAX: usize = 500;
/// Minimum review length on submission
pub const REVIEW_TEXT_MIN: usize = 10;

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateReviewRequest {
	pub user_id:     i64,
	pub facility_id: i64,
	#[validate(range(
		min = 1,
		max = 5,
		message = "rating must be between 1 and 5",
		code = "rating-range"
	))]
	pub rating:      i32,
	#[validate(length(
		min = 10,
		max = 500,
		message = "review text must be between 10 and 500 characters long",
		code = "review-text-length"
	))]
	pub review_text: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ReviewsResponse {
	pub reviews: Vec<Review>,
}

/// Backend-computed aggregate, displayed verbatim
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct ReviewStatsResponse {
	pub average_rating: f64,
	pub total_reviews:  i64,
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct CanReviewQuery {
	pub user_id: i64,
}

/// Whether the user holds a completed booking at the facility; the gate is
/// backend-owned, the client only consults it
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct CanReviewResponse {
	pub can_review:         bool,
	pub completed_bookings: i64,
}
