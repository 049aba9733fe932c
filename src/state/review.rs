//! The review draft
//!
//! Text is clamped to the maximum while typing; the minimum and the rating
//! range are checked on submission, before any request is issued.

use crate::client::ApiClient;
use crate::error::Error;
use crate::schemas::MessageResponse;
use crate::schemas::review::{CreateReviewRequest, REVIEW_TEXT_MAX};
use crate::session::Session;

#[derive(Clone, Debug, Default)]
pub struct ReviewDraft {
	/// Zero until a star is picked
	rating: i32,
	text:   String,
}

impl ReviewDraft {
	#[must_use]
	pub fn new() -> Self { Self::default() }

	pub fn set_rating(&mut self, rating: i32) { self.rating = rating; }

	#[must_use]
	pub const fn rating(&self) -> i32 { self.rating }

	/// Replace the text, dropping anything past the input maximum
	pub fn set_text(&mut self, text: &str) {
		self.text = text.chars().take(REVIEW_TEXT_MAX).collect();
	}

	#[must_use]
	pub fn text(&self) -> &str { &self.text }

	#[must_use]
	pub fn remaining_chars(&self) -> usize {
		REVIEW_TEXT_MAX - self.text.chars().count()
	}

	/// Whether the draft carries anything worth bundling with a booking
	/// submission
	#[must_use]
	pub fn has_content(&self) -> bool {
		self.rating > 0 && !self.text.trim().is_empty()
	}

	/// Build the request, running the submission rules
	pub fn to_request(
		&self,
		session: &Session,
		facility_id: i64,
	) -> Result<CreateReviewRequest, Error> {
		Ok(CreateReviewRequest {
			user_id: session.user_id(),
			facility_id,
			rating: self.rating,
			review_text: self.text.trim().to_string(),
		})
	}

	/// Publish the draft
	///
	/// Validation runs first; a draft under the minimum length or without
	/// a rating never reaches the network
	pub async fn submit(
		&self,
		client: &ApiClient,
		session: &Session,
		facility_id: i64,
	) -> Result<MessageResponse, Error> {
		let request = self.to_request(session, facility_id)?;

		client.create_review(&request).await
	}
}
