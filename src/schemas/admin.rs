use serde::{Deserialize, Serialize};

/// Platform-wide counters for the admin dashboard
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct KpiData {
	pub total_users:           i64,
	pub total_facility_owners: i64,
	pub total_facilities:      i64,
	pub total_bookings:        i64,
	pub total_courts:          i64,
	pub pending_approvals:     i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MonthlyCount {
	pub month: String,
	pub count: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SportBookings {
	pub sport:    String,
	pub bookings: i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminStats {
	pub kpi_data:              KpiData,
	pub monthly_registrations: Vec<MonthlyCount>,
	pub monthly_bookings:      Vec<MonthlyCount>,
	pub most_active_sports:    Vec<SportBookings>,
}

/// The flattened moderation shape of `GET /admin/facilities`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminFacility {
	pub id:              i64,
	pub name:            String,
	pub owner:           String,
	pub email:           String,
	pub location:        String,
	pub submission_date: Option<String>,
	pub status:          String,
	pub description:     String,
	#[serde(default)]
	pub sports:          Vec<String>,
	#[serde(default)]
	pub amenities:       Vec<String>,
	#[serde(default)]
	pub photos:          Vec<String>,
	#[serde(default)]
	pub documents:       Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AdminFacilitiesResponse {
	pub facilities: Vec<AdminFacility>,
	pub count:      i64,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalAction {
	Approve,
	Reject,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApproveFacilityRequest {
	pub action:   ApprovalAction,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub comments: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApproveFacilityResponse {
	pub message:     String,
	pub facility_id: i64,
	pub status:      String,
}
