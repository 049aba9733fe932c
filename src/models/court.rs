use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtStatus {
	Active,
	Inactive,
	Maintenance,
}

/// A bookable court inside a facility
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Court {
	pub id:           i64,
	pub facility_id:  i64,
	pub name:         String,
	pub sport_type:   String,
	pub surface_type: Option<String>,
	pub court_number: Option<i32>,
	pub hourly_rate:  f64,
	pub status:       CourtStatus,
	pub created_at:   Option<String>,
}

impl Court {
	/// Only active courts may be booked
	#[must_use]
	pub fn is_bookable(&self) -> bool { self.status == CourtStatus::Active }
}
