//! The booking composer
//!
//! Sport, court set, date, start time, and duration combine into a derived
//! end time and price. Derivations never touch the network; submission
//! validates the draft first and issues one booking per selected court.

use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::clock::SlotTime;
use crate::error::{BookingError, Error};
use crate::models::{BookingStatus, Court};
use crate::schemas::booking::CreateBookingRequest;
use crate::session::Session;

#[derive(Clone, Debug)]
pub struct BookingComposer {
	courts: Vec<Court>,

	sport:      Option<String>,
	date:       Option<NaiveDate>,
	start_time: Option<SlotTime>,
	/// Whole hours, clamped to at least one
	duration:   u32,

	/// Selected court ids, in selection order
	selected: Vec<i64>,
}

impl BookingComposer {
	/// Start a draft over the given court list (usually one facility's
	/// courts)
	#[must_use]
	pub fn new(courts: Vec<Court>) -> Self {
		Self {
			courts,
			sport: None,
			date: None,
			start_time: None,
			duration: 1,
			selected: Vec::new(),
		}
	}

	/// Narrow the court choices to one sport
	///
	/// Courts already selected that do not play the sport drop out of the
	/// selection
	pub fn select_sport(&mut self, sport: &str) {
		self.sport = Some(sport.to_string());

		let courts = &self.courts;
		let sport = self.sport.as_deref();
		self.selected.retain(|id| {
			courts
				.iter()
				.any(|c| c.id == *id && Some(c.sport_type.as_str()) == sport)
		});
	}

	/// The courts currently offered: bookable and matching the selected
	/// sport, if any
	pub fn available_courts(&self) -> impl Iterator<Item = &Court> {
		self.courts.iter().filter(move |c| {
			c.is_bookable()
				&& self
					.sport
					.as_deref()
					.is_none_or(|sport| c.sport_type == sport)
		})
	}

	/// The distinct sports offered by the court list
	#[must_use]
	pub fn sports(&self) -> Vec<&str> {
		let mut sports: Vec<&str> =
			self.courts.iter().map(|c| c.sport_type.as_str()).collect();
		sports.sort_unstable();
		sports.dedup();

		sports
	}

	/// Add or remove a court from the selection; unknown or unbookable
	/// courts are ignored
	pub fn toggle_court(&mut self, court_id: i64) {
		if let Some(index) = self.selected.iter().position(|id| *id == court_id)
		{
			self.selected.remove(index);
			return;
		}

		if self.available_courts().any(|c| c.id == court_id) {
			self.selected.push(court_id);
		}
	}

	pub fn remove_court(&mut self, court_id: i64) {
		self.selected.retain(|id| *id != court_id);
	}

	#[must_use]
	pub fn selected_courts(&self) -> Vec<&Court> {
		self.selected
			.iter()
			.filter_map(|id| self.courts.iter().find(|c| c.id == *id))
			.collect()
	}

	pub fn set_date(&mut self, date: NaiveDate) { self.date = Some(date); }

	pub fn set_start_time(&mut self, start: SlotTime) {
		self.start_time = Some(start);
	}

	/// Set the duration in whole hours, clamped to at least one
	pub fn set_duration(&mut self, hours: u32) {
		self.duration = hours.max(1);
	}

	pub fn increment_duration(&mut self) {
		self.duration = self.duration.saturating_add(1);
	}

	pub fn decrement_duration(&mut self) {
		self.duration = self.duration.saturating_sub(1).max(1);
	}

	#[must_use]
	pub const fn duration(&self) -> u32 { self.duration }

	/// Derived end time: start plus duration, wrapping at midnight in the
	/// start time's display convention
	#[must_use]
	pub fn end_time(&self) -> Option<SlotTime> {
		self.start_time.map(|start| start.add_hours(self.duration))
	}

	/// Derived price: each selected court's hourly rate times the
	/// duration; monotone in both duration and selection size
	#[must_use]
	pub fn total(&self) -> f64 {
		self.selected_courts()
			.iter()
			.map(|c| c.hourly_rate * f64::from(self.duration))
			.sum()
	}

	/// The price as displayed, two decimals
	#[must_use]
	pub fn formatted_total(&self) -> String { format!("{:.2}", self.total()) }

	/// Validate the draft and build one booking request per selected court
	///
	/// Fails before any request exists: an empty selection, a missing
	/// date, or a missing start time never reach the network
	pub fn requests(
		&self,
		session: &Session,
		payment_method: &str,
	) -> Result<Vec<CreateBookingRequest>, Error> {
		if self.selected.is_empty() {
			return Err(BookingError::NoCourtsSelected.into());
		}

		let date = self.date.ok_or(BookingError::MissingDate)?;
		let start = self.start_time.ok_or(BookingError::MissingStartTime)?;
		let end = start.add_hours(self.duration);

		let requests = self
			.selected_courts()
			.into_iter()
			.map(|court| CreateBookingRequest {
				user_id: session.user_id(),
				court_id: court.id,
				booking_date: date,
				// The wire always carries the canonical notation so the
				// backend's string comparisons against stored slot times
				// line up
				start_time: start.canonical(),
				end_time: end.canonical(),
				duration: self.duration,
				total_amount: court.hourly_rate * f64::from(self.duration),
				payment_method: payment_method.to_string(),
				status: BookingStatus::Confirmed,
			})
			.collect();

		Ok(requests)
	}

	/// Submit the draft, one booking per selected court
	///
	/// The backend owns conflict rejection; the first failure aborts the
	/// remaining submissions and is surfaced as-is
	pub async fn submit(
		&self,
		client: &ApiClient,
		session: &Session,
		payment_method: &str,
	) -> Result<Vec<i64>, Error> {
		let requests = self.requests(session, payment_method)?;

		let mut booking_ids = Vec::with_capacity(requests.len());

		for request in &requests {
			let response = client.create_booking(request).await?;
			booking_ids.push(response.booking_id);
		}

		Ok(booking_ids)
	}
}
