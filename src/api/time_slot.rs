use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::TimeSlot;
use crate::schemas::time_slot::{
	BulkSlotUpdate,
	BulkUpdateResponse,
	TimeSlotQuery,
	TimeSlotsResponse,
};

impl ApiClient {
	/// List a court's slots for a concrete date
	///
	/// The backend folds active bookings into `is_available`, so this is
	/// the date's effective availability, not the bare weekly template
	#[instrument(skip(self))]
	pub async fn time_slots(
		&self,
		court_id: i64,
		date: NaiveDate,
	) -> Result<Vec<TimeSlot>, Error> {
		let query =
			TimeSlotQuery { court_id, date: Some(date), day_of_week: None };
		let response: TimeSlotsResponse =
			self.get_with("/time-slots", &query).await?;

		Ok(response.time_slots)
	}

	/// List a court's weekly slot template for one day of week
	#[instrument(skip(self))]
	pub async fn time_slot_template(
		&self,
		court_id: i64,
		day_of_week: u8,
	) -> Result<Vec<TimeSlot>, Error> {
		let query = TimeSlotQuery {
			court_id,
			date: None,
			day_of_week: Some(day_of_week),
		};
		let response: TimeSlotsResponse =
			self.get_with("/time-slots", &query).await?;

		Ok(response.time_slots)
	}

	/// Update every slot of a court/day whose boundaries fall inside the
	/// given range
	#[instrument(
		skip(self, update),
		fields(court_id = update.court_id, available = update.is_available)
	)]
	pub async fn bulk_update_time_slots(
		&self,
		update: &BulkSlotUpdate,
	) -> Result<BulkUpdateResponse, Error> {
		self.post("/time-slots/bulk-update", update).await
	}
}
