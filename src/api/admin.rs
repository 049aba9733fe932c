use crate::client::ApiClient;
use crate::error::Error;
use crate::schemas::admin::{
	AdminFacilitiesResponse,
	AdminFacility,
	AdminStats,
	ApprovalAction,
	ApproveFacilityRequest,
	ApproveFacilityResponse,
};

impl ApiClient {
	/// Platform-wide dashboard statistics
	#[instrument(skip(self))]
	pub async fn admin_stats(&self) -> Result<AdminStats, Error> {
		self.get("/admin/stats").await
	}

	/// Every facility in the moderation view, pending ones included
	#[instrument(skip(self))]
	pub async fn admin_facilities(&self) -> Result<Vec<AdminFacility>, Error> {
		let response: AdminFacilitiesResponse =
			self.get("/admin/facilities").await?;

		Ok(response.facilities)
	}

	/// Approve or reject a pending facility
	#[instrument(skip(self))]
	pub async fn approve_facility(
		&self,
		facility_id: i64,
		action: ApprovalAction,
		comments: Option<String>,
	) -> Result<ApproveFacilityResponse, Error> {
		let request = ApproveFacilityRequest { action, comments };

		self.post(&format!("/admin/facilities/{facility_id}/approve"), &request)
			.await
	}
}
