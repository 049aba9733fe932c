use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{Facility, FacilityDetail};
use crate::schemas::facility::{
	CreateFacilityResponse,
	FacilitiesResponse,
	FacilityActionResponse,
	FacilityResponse,
	FacilityUpdate,
	MyFacilitiesQuery,
	NewFacility,
};
use crate::session::Session;

impl ApiClient {
	/// List all active facilities
	#[instrument(skip(self))]
	pub async fn facilities(&self) -> Result<Vec<Facility>, Error> {
		let response: FacilitiesResponse = self.get("/facilities").await?;

		Ok(response.facilities)
	}

	/// Fetch the venue-detail view of one facility
	#[instrument(skip(self))]
	pub async fn facility(&self, id: i64) -> Result<FacilityDetail, Error> {
		let response: FacilityResponse =
			self.get(&format!("/facilities/{id}")).await?;

		Ok(response.facility)
	}

	/// List the facilities the signed-in owner manages
	#[instrument(skip(self, session))]
	pub async fn my_facilities(
		&self,
		session: &Session,
	) -> Result<Vec<Facility>, Error> {
		let query = MyFacilitiesQuery { user_id: session.user_id() };
		let response: FacilitiesResponse =
			self.get_with("/facilities/my", &query).await?;

		Ok(response.facilities)
	}

	/// Create a facility, uploading its photos in the same multipart
	/// request
	#[instrument(skip(self, facility), fields(name = %facility.name))]
	pub async fn create_facility(
		&self,
		facility: NewFacility,
	) -> Result<CreateFacilityResponse, Error> {
		let form = facility.into_form()?;

		self.post_form("/facilities", form).await
	}

	/// Edit a facility wholesale
	#[instrument(skip(self, update))]
	pub async fn update_facility(
		&self,
		id: i64,
		update: &FacilityUpdate,
	) -> Result<FacilityActionResponse, Error> {
		self.put(&format!("/facilities/{id}"), update).await
	}

	/// Delete a facility (the backend soft-deletes by flagging it
	/// inactive)
	#[instrument(skip(self))]
	pub async fn delete_facility(
		&self,
		id: i64,
	) -> Result<FacilityActionResponse, Error> {
		self.delete(&format!("/facilities/{id}")).await
	}
}
