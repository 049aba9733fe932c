use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock::SlotTime;

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
	Confirmed,
	Completed,
	Cancelled,
	Pending,
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
	Pending,
	Paid,
	Refunded,
}

/// A court booking with the denormalized display fields the listing
/// endpoint joins in
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Booking {
	pub id:           i64,
	pub booking_date: NaiveDate,
	pub start_time:   SlotTime,
	pub end_time:     SlotTime,
	/// Whole hours
	pub duration:     u32,
	pub total_amount: f64,

	pub payment_method: Option<String>,
	pub status:         BookingStatus,
	pub created_at:     Option<String>,

	#[serde(default)]
	pub court_name:        Option<String>,
	#[serde(default)]
	pub sport_type:        Option<String>,
	#[serde(default)]
	pub facility_name:     Option<String>,
	#[serde(default)]
	pub facility_location: Option<String>,
	#[serde(default)]
	pub user_name:         Option<String>,
}

impl Booking {
	/// Cancelled is the only terminal status a user can reach from the
	/// client; everything else still renders as actionable
	#[must_use]
	pub fn is_cancellable(&self) -> bool {
		matches!(self.status, BookingStatus::Confirmed | BookingStatus::Pending)
	}
}
