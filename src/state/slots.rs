//! The facilitator's availability grid
//!
//! Cells key on `(court, start time)` for one calendar date. A toggle is
//! an optimistic command: the flip is applied locally first, confirmed
//! against the backend, and compensated if the confirmation fails, so the
//! displayed state never drifts from what the user last saw acknowledged.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::client::ApiClient;
use crate::clock::{SlotTime, day_of_week};
use crate::error::Error;
use crate::schemas::time_slot::BulkSlotUpdate;

/// Displayed slot state
///
/// `available ↔ blocked` is user-togglable; `booked` is set system-side
/// only and is terminal here — clicking a booked cell is a no-op
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SlotStatus {
	Available,
	Booked,
	Blocked,
}

#[derive(Clone, Copy, Debug)]
struct SlotCell {
	end_time: SlotTime,
	status:   SlotStatus,
}

/// Grid-wide counters for the stats panel
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SlotStats {
	pub available: usize,
	pub booked:    usize,
	pub blocked:   usize,
}

/// One toggle, expressed as an apply/compensate pair
///
/// The remote confirmation runs between the two; on failure the
/// compensation restores the exact pre-toggle state.
#[derive(Clone, Copy, Debug)]
struct ToggleCommand {
	key:      (i64, SlotTime),
	previous: SlotStatus,
	next:     SlotStatus,
}

impl ToggleCommand {
	fn apply(&self, cells: &mut HashMap<(i64, SlotTime), SlotCell>) {
		if let Some(cell) = cells.get_mut(&self.key) {
			cell.status = self.next;
		}
	}

	fn compensate(&self, cells: &mut HashMap<(i64, SlotTime), SlotCell>) {
		if let Some(cell) = cells.get_mut(&self.key) {
			cell.status = self.previous;
		}
	}
}

#[derive(Clone, Debug)]
pub struct SlotGrid {
	date:  NaiveDate,
	cells: HashMap<(i64, SlotTime), SlotCell>,
}

impl SlotGrid {
	#[must_use]
	pub fn new(date: NaiveDate) -> Self {
		Self { date, cells: HashMap::new() }
	}

	#[must_use]
	pub const fn date(&self) -> NaiveDate { self.date }

	/// Load one court's slots for the grid's date
	///
	/// The listing already folds bookings into the availability flag, so
	/// unavailable cells land as blocked; callers that know which slots a
	/// booking covers refine them with [`mark_booked`](Self::mark_booked)
	pub async fn load_court(
		&mut self,
		client: &ApiClient,
		court_id: i64,
	) -> Result<(), Error> {
		let slots = client.time_slots(court_id, self.date).await?;

		for slot in slots {
			let status = if slot.is_available {
				SlotStatus::Available
			} else {
				SlotStatus::Blocked
			};

			self.cells.insert(
				(court_id, slot.start_time),
				SlotCell { end_time: slot.end_time, status },
			);
		}

		Ok(())
	}

	/// Refine a cell to booked (reachable system-side only)
	pub fn mark_booked(&mut self, court_id: i64, start: SlotTime) {
		if let Some(cell) = self.cells.get_mut(&(court_id, start)) {
			cell.status = SlotStatus::Booked;
		}
	}

	#[must_use]
	pub fn status(&self, court_id: i64, start: SlotTime) -> Option<SlotStatus> {
		self.cells.get(&(court_id, start)).map(|cell| cell.status)
	}

	/// The grid's cells for one court, ordered by start time
	#[must_use]
	pub fn court_row(&self, court_id: i64) -> Vec<(SlotTime, SlotStatus)> {
		let mut row: Vec<(SlotTime, SlotStatus)> = self
			.cells
			.iter()
			.filter(|((id, _), _)| *id == court_id)
			.map(|((_, start), cell)| (*start, cell.status))
			.collect();
		row.sort_unstable_by_key(|(start, _)| *start);

		row
	}

	#[must_use]
	pub fn stats(&self) -> SlotStats {
		let mut stats = SlotStats::default();

		for cell in self.cells.values() {
			match cell.status {
				SlotStatus::Available => stats.available += 1,
				SlotStatus::Booked => stats.booked += 1,
				SlotStatus::Blocked => stats.blocked += 1,
			}
		}

		stats
	}

	/// Flip one cell between available and blocked
	///
	/// The flip lands locally before the backend confirms; a failed
	/// confirmation compensates back to the pre-toggle state and returns
	/// the failure. Toggling a booked cell does nothing and issues no
	/// request.
	pub async fn toggle(
		&mut self,
		client: &ApiClient,
		court_id: i64,
		start: SlotTime,
	) -> Result<SlotStatus, Error> {
		let cell = self
			.cells
			.get(&(court_id, start))
			.copied()
			.ok_or_else(|| {
				Error::Validation(format!("no slot at {start} for this court"))
			})?;

		let next = match cell.status {
			SlotStatus::Booked => return Ok(SlotStatus::Booked),
			SlotStatus::Available => SlotStatus::Blocked,
			SlotStatus::Blocked => SlotStatus::Available,
		};

		let command = ToggleCommand {
			key: (court_id, start),
			previous: cell.status,
			next,
		};

		command.apply(&mut self.cells);

		// The wire always carries canonical spellings; the backend matches
		// the range against stored slot times lexically
		let update = BulkSlotUpdate {
			court_id,
			day_of_week: day_of_week(self.date),
			start_time: start.canonical(),
			end_time: cell.end_time.canonical(),
			is_available: next == SlotStatus::Available,
			reason: None,
			is_maintenance: None,
		};

		match client.bulk_update_time_slots(&update).await {
			Ok(_) => Ok(next),
			Err(err) => {
				warn!("slot toggle failed, reverting -- {err}");
				command.compensate(&mut self.cells);

				Err(err)
			},
		}
	}

	/// Block every slot of a court inside a time range, with a reason
	///
	/// One bulk request covers the whole range; there is no client-side
	/// conflict check against bookings inside it, and the backend reports
	/// only an affected-row count. Local cells flip on success.
	pub async fn block_range(
		&mut self,
		client: &ApiClient,
		court_id: i64,
		start: SlotTime,
		end: SlotTime,
		reason: &str,
		maintenance: bool,
	) -> Result<u64, Error> {
		let update = BulkSlotUpdate {
			court_id,
			day_of_week: day_of_week(self.date),
			start_time: start.canonical(),
			end_time: end.canonical(),
			is_available: false,
			reason: Some(reason.to_string()),
			is_maintenance: maintenance.then_some(true),
		};

		let response = client.bulk_update_time_slots(&update).await?;

		for ((id, slot_start), cell) in &mut self.cells {
			if *id == court_id
				&& *slot_start >= start
				&& cell.end_time <= end
				&& cell.status == SlotStatus::Available
			{
				cell.status = SlotStatus::Blocked;
			}
		}

		Ok(response.affected_rows)
	}
}
