use validator::Validate;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Court, CourtStatus};
use crate::schemas::court::{
	CourtActionResponse,
	CourtUpdate,
	CourtsQuery,
	CourtsResponse,
	CreateCourtRequest,
};

impl ApiClient {
	/// List a facility's courts
	#[instrument(skip(self))]
	pub async fn courts(&self, facility_id: i64) -> Result<Vec<Court>, Error> {
		let query = CourtsQuery { facility_id };
		let response: CourtsResponse = self.get_with("/courts", &query).await?;

		Ok(response.courts)
	}

	#[instrument(skip(self, request), fields(name = %request.name))]
	pub async fn create_court(
		&self,
		request: &CreateCourtRequest,
	) -> Result<CourtActionResponse, Error> {
		request.validate()?;

		self.post("/courts", request).await
	}

	#[instrument(skip(self, update))]
	pub async fn update_court(
		&self,
		id: i64,
		update: &CourtUpdate,
	) -> Result<CourtActionResponse, Error> {
		self.put(&format!("/courts/{id}"), update).await
	}

	/// Flip a court between active and inactive
	#[instrument(skip(self))]
	pub async fn set_court_status(
		&self,
		id: i64,
		status: CourtStatus,
	) -> Result<CourtActionResponse, Error> {
		let update = CourtUpdate { status: Some(status), ..Default::default() };

		self.update_court(id, &update).await
	}

	#[instrument(skip(self))]
	pub async fn delete_court(
		&self,
		id: i64,
	) -> Result<CourtActionResponse, Error> {
		self.delete(&format!("/courts/{id}")).await
	}
}
