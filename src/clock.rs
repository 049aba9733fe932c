//! Wall-clock slot times
//!
//! The backend stores slot boundaries as bare clock strings, in whichever
//! display convention the view that created them used. [`SlotTime`] keeps
//! the convention it was parsed with so a derived time formats back the
//! same way. There is no attached calendar date; arithmetic wraps at
//! midnight.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidSlotTime;

/// The display convention a [`SlotTime`] was written in
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Notation {
	/// `"01:00 PM"`
	TwelveHour,
	/// `"13:00"`
	#[default]
	TwentyFourHour,
}

/// A wall-clock time as displayed on a slot grid or booking form
#[derive(Clone, Copy, Debug)]
pub struct SlotTime {
	hour:     u8,
	minute:   u8,
	notation: Notation,
}

impl SlotTime {
	/// Create a 24-hour-notation time
	///
	/// # Panics
	/// Panics if `hour` or `minute` is out of range
	#[must_use]
	pub fn new(hour: u8, minute: u8) -> Self {
		assert!(hour < 24 && minute < 60, "invalid wall-clock time");

		Self { hour, minute, notation: Notation::TwentyFourHour }
	}

	#[must_use]
	pub const fn hour(&self) -> u8 { self.hour }

	#[must_use]
	pub const fn minute(&self) -> u8 { self.minute }

	#[must_use]
	pub const fn notation(&self) -> Notation { self.notation }

	/// Minutes since midnight, the convention-independent value
	#[must_use]
	pub fn minutes_of_day(&self) -> u16 {
		u16::from(self.hour) * 60 + u16::from(self.minute)
	}

	/// Add a whole number of hours, wrapping at midnight
	///
	/// The result keeps the display convention of `self`. The wrap discards
	/// the day boundary entirely; callers reconcile against a calendar date
	/// themselves if they care (the booking views do not).
	#[must_use]
	pub fn add_hours(self, hours: u32) -> Self {
		#[allow(clippy::cast_possible_truncation)]
		let hour = ((u32::from(self.hour) + hours) % 24) as u8;

		Self { hour, ..self }
	}

	/// The same wall-clock value in 24-hour notation
	///
	/// Everything sent over the wire is canonicalized with this so string
	/// comparisons against the stored slot times line up; the display
	/// convention only matters on screen.
	#[must_use]
	pub const fn canonical(self) -> Self {
		Self {
			hour:     self.hour,
			minute:   self.minute,
			notation: Notation::TwentyFourHour,
		}
	}

	fn parse_meridiem(
		raw: &str,
		clock: &str,
		offset: u8,
	) -> Result<Self, InvalidSlotTime> {
		let (hour, minute) = split_clock(raw, clock)?;

		// The booking form writes times past midnight as "00:30 AM", so a
		// zero hour is accepted alongside the usual 1-12 range
		if hour > 12 {
			return Err(InvalidSlotTime(raw.to_string()));
		}

		// 12 AM is midnight, 12 PM is noon
		let hour = if hour == 12 { 0 } else { hour };

		Ok(Self {
			hour: hour + offset,
			minute,
			notation: Notation::TwelveHour,
		})
	}
}

impl FromStr for SlotTime {
	type Err = InvalidSlotTime;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		let trimmed = raw.trim();

		if let Some(clock) = strip_suffix_ignore_case(trimmed, "AM") {
			return Self::parse_meridiem(raw, clock, 0);
		}

		if let Some(clock) = strip_suffix_ignore_case(trimmed, "PM") {
			return Self::parse_meridiem(raw, clock, 12);
		}

		let (hour, minute) = split_clock(raw, trimmed)?;

		if hour > 23 {
			return Err(InvalidSlotTime(raw.to_string()));
		}

		Ok(Self { hour, minute, notation: Notation::TwentyFourHour })
	}
}

impl fmt::Display for SlotTime {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.notation {
			Notation::TwentyFourHour => {
				write!(f, "{:02}:{:02}", self.hour, self.minute)
			},
			Notation::TwelveHour => {
				// Matches the original form conversion: hours above twelve
				// drop back by twelve, everything else (including a zero
				// hour) is written as-is
				let clock_hour =
					if self.hour > 12 { self.hour - 12 } else { self.hour };
				let meridiem = if self.hour >= 12 { "PM" } else { "AM" };

				write!(f, "{:02}:{:02} {}", clock_hour, self.minute, meridiem)
			},
		}
	}
}

// Equality, ordering, and hashing compare the wall-clock value only; the
// display convention is presentation state
impl PartialEq for SlotTime {
	fn eq(&self, other: &Self) -> bool {
		self.minutes_of_day() == other.minutes_of_day()
	}
}

impl Eq for SlotTime {}

impl PartialOrd for SlotTime {
	fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for SlotTime {
	fn cmp(&self, other: &Self) -> std::cmp::Ordering {
		self.minutes_of_day().cmp(&other.minutes_of_day())
	}
}

impl Hash for SlotTime {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.minutes_of_day().hash(state);
	}
}

impl Serialize for SlotTime {
	fn serialize<S: Serializer>(&self, ser: S) -> Result<S::Ok, S::Error> {
		ser.collect_str(self)
	}
}

impl<'de> Deserialize<'de> for SlotTime {
	fn deserialize<D: Deserializer<'de>>(de: D) -> Result<Self, D::Error> {
		let raw = String::deserialize(de)?;

		raw.parse().map_err(serde::de::Error::custom)
	}
}

/// Day of week as the backend indexes it (0 = Sunday, matching JS
/// `Date.getDay()`)
#[must_use]
pub fn day_of_week(date: NaiveDate) -> u8 {
	#[allow(clippy::cast_possible_truncation)]
	let day = date.weekday().num_days_from_sunday() as u8;

	day
}

fn strip_suffix_ignore_case<'a>(raw: &'a str, suffix: &str) -> Option<&'a str> {
	let stripped = raw.get(..raw.len().checked_sub(suffix.len())?)?;

	raw[raw.len() - suffix.len()..]
		.eq_ignore_ascii_case(suffix)
		.then(|| stripped.trim_end())
}

fn split_clock(raw: &str, clock: &str) -> Result<(u8, u8), InvalidSlotTime> {
	let mut parts = clock.split(':');

	let hour = parts
		.next()
		.and_then(|h| h.trim().parse::<u8>().ok())
		.ok_or_else(|| InvalidSlotTime(raw.to_string()))?;
	let minute = parts
		.next()
		.and_then(|m| m.trim().parse::<u8>().ok())
		.ok_or_else(|| InvalidSlotTime(raw.to_string()))?;

	// A trailing seconds field is tolerated and dropped
	if parts.next().is_some() && parts.next().is_some() {
		return Err(InvalidSlotTime(raw.to_string()));
	}

	if minute > 59 {
		return Err(InvalidSlotTime(raw.to_string()));
	}

	Ok((hour, minute))
}
