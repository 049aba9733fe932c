use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FacilityStatus {
	Active,
	Pending,
	Approved,
	Rejected,
	/// Soft-deleted; the backend never physically removes a facility
	Inactive,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilityPhoto {
	pub url:        String,
	#[serde(default)]
	pub caption:    Option<String>,
	#[serde(default)]
	pub is_primary: bool,
}

/// Backend-computed review aggregate, displayed verbatim
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
pub struct ReviewAggregate {
	pub average_rating: f64,
	pub total_reviews:  i64,
}

/// Per-sport court inventory of a facility
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SportCourts {
	pub sport_type:  String,
	pub court_count: i64,
}

/// A venue as returned by the facility listings
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Facility {
	pub id:          i64,
	pub name:        String,
	pub description: Option<String>,
	pub location:    String,
	#[serde(default)]
	pub city:        Option<String>,
	pub phone:       Option<String>,
	pub email:       Option<String>,
	pub website:     Option<String>,

	pub operating_hours_weekdays: Option<String>,
	pub operating_hours_weekends: Option<String>,

	pub status: FacilityStatus,

	#[serde(default)]
	pub sports:    Vec<String>,
	#[serde(default)]
	pub amenities: Vec<String>,
	#[serde(default)]
	pub photos:    Vec<FacilityPhoto>,
	#[serde(default)]
	pub reviews:   Option<ReviewAggregate>,

	#[serde(default)]
	pub owner_name:  Option<String>,
	#[serde(default)]
	pub owner_email: Option<String>,
	#[serde(default)]
	pub court_count: Option<i64>,

	pub created_at: Option<String>,
	#[serde(default)]
	pub updated_at: Option<String>,
}

/// The denormalized venue-detail shape of `GET /facilities/{id}`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilityDetail {
	pub id:              i64,
	pub name:            String,
	pub description:     Option<String>,
	pub city:            Option<String>,
	pub state:           Option<String>,
	pub address:         Option<String>,
	pub operating_hours: Option<String>,
	#[serde(default)]
	pub photos:          Vec<FacilityPhoto>,
	#[serde(default)]
	pub facility_courts: Vec<SportCourts>,
	#[serde(default)]
	pub amenities:       Vec<String>,
	pub owner_name:      Option<String>,
	pub created_at:      Option<String>,
}
