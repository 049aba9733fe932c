use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::models::{Court, CourtStatus};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CourtsResponse {
	pub courts: Vec<Court>,
	pub count:  i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct CourtsQuery {
	pub facility_id: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct CreateCourtRequest {
	pub facility_id:  i64,
	#[validate(length(
		min = 1,
		message = "court name must not be empty",
		code = "name-length"
	))]
	pub name:         String,
	#[validate(length(
		min = 1,
		message = "sport type must not be empty",
		code = "sport-length"
	))]
	pub sport_type:   String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub surface_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub court_number: Option<i32>,
	#[validate(range(
		min = 0.0,
		message = "hourly rate must not be negative",
		code = "hourly-rate-range"
	))]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hourly_rate:  Option<f64>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CourtActionResponse {
	pub message:  String,
	pub court_id: i64,
}

/// Partial court edit, including the status toggle
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CourtUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name:         Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub sport_type:   Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub surface_type: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub court_number: Option<i32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub hourly_rate:  Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub status:       Option<CourtStatus>,
}
