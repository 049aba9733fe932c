use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Subcommand;

use super::render;
use crate::client::ApiClient;
use crate::clock::SlotTime;
use crate::error::Error;
use crate::models::{BookingStatus, CourtStatus, SportCourts};
use crate::schemas::booking::BookingUpdate;
use crate::schemas::court::CreateCourtRequest;
use crate::schemas::facility::{FacilityUpdate, NewFacility};
use crate::session::SessionStore;
use crate::state::{SlotGrid, SlotStatus};
use crate::view::ViewState;

#[derive(Debug, Subcommand)]
pub enum FacilityCommand {
	/// List the facilities you own
	List,
	/// Register a new facility
	Create {
		#[arg(long)]
		name:      String,
		/// Street address
		#[arg(long)]
		location:  String,
		#[arg(long)]
		city:      String,
		#[arg(long, default_value = "")]
		description: String,
		#[arg(long, default_value = "")]
		phone:     String,
		#[arg(long, default_value = "")]
		email:     String,
		#[arg(long, default_value = "")]
		website:   String,
		#[arg(long, default_value = "")]
		weekday_hours: String,
		#[arg(long, default_value = "")]
		weekend_hours: String,
		/// Sport offered; repeatable
		#[arg(long = "sport")]
		sports:    Vec<String>,
		/// Amenity; repeatable
		#[arg(long = "amenity")]
		amenities: Vec<String>,
		/// Court inventory as "Sport:count"; repeatable
		#[arg(long = "courts", value_parser = parse_sport_courts)]
		sport_courts: Vec<SportCourts>,
		/// Photo file; repeatable, the first becomes primary
		#[arg(long = "photo")]
		photos:    Vec<PathBuf>,
	},
	/// Edit a facility's descriptive fields
	Update {
		id:          i64,
		#[arg(long)]
		name:        Option<String>,
		#[arg(long)]
		description: Option<String>,
		#[arg(long)]
		location:    Option<String>,
		#[arg(long)]
		phone:       Option<String>,
		#[arg(long)]
		email:       Option<String>,
		#[arg(long)]
		website:     Option<String>,
	},
	/// Delete a facility (soft delete backend-side)
	Delete { id: i64 },
	/// List a facility's courts
	Courts { facility_id: i64 },
	/// Add a court to a facility
	CreateCourt {
		#[arg(long)]
		facility:     i64,
		#[arg(long)]
		name:         String,
		#[arg(long)]
		sport:        String,
		#[arg(long)]
		surface:      Option<String>,
		#[arg(long)]
		number:       Option<i32>,
		#[arg(long)]
		hourly_rate:  Option<f64>,
	},
	/// Flip a court's status
	SetCourtStatus {
		id:     i64,
		/// "active", "inactive", or "maintenance"
		#[arg(value_parser = parse_court_status)]
		status: CourtStatus,
	},
	/// Remove a court
	DeleteCourt { id: i64 },
	/// Show a court's availability grid for a date
	Slots {
		court_id: i64,
		date:     NaiveDate,
	},
	/// Toggle one slot between available and blocked
	ToggleSlot {
		court_id: i64,
		date:     NaiveDate,
		/// Wall-clock start, "13:00" or "01:00 PM"
		time:     SlotTime,
	},
	/// Block a time range with a reason
	Block {
		court_id: i64,
		date:     NaiveDate,
		start:    SlotTime,
		end:      SlotTime,
		#[arg(long, default_value = "Blocked")]
		reason:   String,
	},
	/// Block a time range for maintenance
	Maintenance {
		court_id: i64,
		date:     NaiveDate,
		start:    SlotTime,
		end:      SlotTime,
		#[arg(long, default_value = "Maintenance")]
		reason:   String,
	},
	/// Mark a booking completed (or another status)
	SetBookingStatus {
		id:     i64,
		/// "confirmed", "completed", "cancelled", or "pending"
		#[arg(value_parser = parse_booking_status)]
		status: BookingStatus,
	},
	/// Booking counters for a facility
	Stats { facility_id: i64 },
}

pub async fn run(
	command: FacilityCommand,
	client: &ApiClient,
	store: &SessionStore,
) -> Result<(), Error> {
	match command {
		FacilityCommand::List => {
			let session = store.require()?;
			let state =
				ViewState::from_result(client.my_facilities(&session).await);

			render(&state, |facilities| {
				for facility in facilities {
					println!(
						"#{:<4} {:<28} {:<10?} {} court(s)",
						facility.id,
						facility.name,
						facility.status,
						facility.court_count.unwrap_or(0),
					);
				}
			});
		},
		FacilityCommand::Create {
			name,
			location,
			city,
			description,
			phone,
			email,
			website,
			weekday_hours,
			weekend_hours,
			sports,
			amenities,
			sport_courts,
			photos,
		} => {
			let session = store.require()?;
			let facility = NewFacility {
				owner_id: session.user_id(),
				name,
				location,
				city,
				description,
				phone,
				email,
				website,
				operating_hours_weekdays: weekday_hours,
				operating_hours_weekends: weekend_hours,
				sports,
				amenities,
				sport_courts,
				photos,
			};

			let response = client.create_facility(facility).await?;
			println!("{} (#{})", response.message, response.facility_id);
		},
		FacilityCommand::Update {
			id,
			name,
			description,
			location,
			phone,
			email,
			website,
		} => {
			let update = FacilityUpdate {
				name,
				description,
				location,
				phone,
				email,
				website,
				..Default::default()
			};
			let response = client.update_facility(id, &update).await?;
			println!("{}", response.message);
		},
		FacilityCommand::Delete { id } => {
			let response = client.delete_facility(id).await?;
			println!("{}", response.message);
		},
		FacilityCommand::Courts { facility_id } => {
			let state = ViewState::from_result(client.courts(facility_id).await);

			render(&state, |courts| {
				for court in courts {
					println!(
						"#{:<4} {:<20} {:<16} {:>8.2}/hr  {:?}",
						court.id,
						court.name,
						court.sport_type,
						court.hourly_rate,
						court.status,
					);
				}
			});
		},
		FacilityCommand::CreateCourt {
			facility,
			name,
			sport,
			surface,
			number,
			hourly_rate,
		} => {
			let request = CreateCourtRequest {
				facility_id: facility,
				name,
				sport_type: sport,
				surface_type: surface,
				court_number: number,
				hourly_rate,
			};
			let response = client.create_court(&request).await?;
			println!("{} (#{})", response.message, response.court_id);
		},
		FacilityCommand::SetCourtStatus { id, status } => {
			let response = client.set_court_status(id, status).await?;
			println!("{}", response.message);
		},
		FacilityCommand::DeleteCourt { id } => {
			let response = client.delete_court(id).await?;
			println!("{}", response.message);
		},
		FacilityCommand::Slots { court_id, date } => {
			store.require()?;

			let mut grid = SlotGrid::new(date);
			let state = ViewState::from_result(
				grid.load_court(client, court_id).await.map(|()| grid),
			);

			render(&state, |grid| {
				for (start, status) in grid.court_row(court_id) {
					println!("{start}  {}", status_glyph(status));
				}

				let stats = grid.stats();
				println!(
					"available {}  booked {}  blocked {}",
					stats.available, stats.booked, stats.blocked,
				);
			});
		},
		FacilityCommand::ToggleSlot { court_id, date, time } => {
			store.require()?;

			let mut grid = SlotGrid::new(date);
			grid.load_court(client, court_id).await?;

			let status = grid.toggle(client, court_id, time).await?;
			println!("{time} is now {}", status_glyph(status));
		},
		FacilityCommand::Block { court_id, date, start, end, reason } => {
			store.require()?;

			let mut grid = SlotGrid::new(date);
			grid.load_court(client, court_id).await?;

			let affected = grid
				.block_range(client, court_id, start, end, &reason, false)
				.await?;
			println!("blocked {affected} slot(s)");
		},
		FacilityCommand::Maintenance {
			court_id,
			date,
			start,
			end,
			reason,
		} => {
			store.require()?;

			let mut grid = SlotGrid::new(date);
			grid.load_court(client, court_id).await?;

			let affected = grid
				.block_range(client, court_id, start, end, &reason, true)
				.await?;
			println!("scheduled maintenance on {affected} slot(s)");
		},
		FacilityCommand::SetBookingStatus { id, status } => {
			let update =
				BookingUpdate { status: Some(status), ..Default::default() };
			let response = client.update_booking(id, &update).await?;
			println!("{}", response.message);
		},
		FacilityCommand::Stats { facility_id } => {
			let state =
				ViewState::from_result(client.booking_stats(facility_id).await);

			render(&state, |stats| {
				println!("total     {}", stats.total);
				println!("upcoming  {}", stats.upcoming);
				println!("completed {}", stats.completed);
				println!("cancelled {}", stats.cancelled);
				println!("revenue   {:.2}", stats.revenue);
			});
		},
	}

	Ok(())
}

const fn status_glyph(status: SlotStatus) -> &'static str {
	match status {
		SlotStatus::Available => "available",
		SlotStatus::Booked => "booked",
		SlotStatus::Blocked => "blocked",
	}
}

fn parse_booking_status(raw: &str) -> Result<BookingStatus, String> {
	match raw {
		"confirmed" => Ok(BookingStatus::Confirmed),
		"completed" => Ok(BookingStatus::Completed),
		"cancelled" => Ok(BookingStatus::Cancelled),
		"pending" => Ok(BookingStatus::Pending),
		_ => Err(format!("unknown booking status '{raw}'")),
	}
}

fn parse_court_status(raw: &str) -> Result<CourtStatus, String> {
	match raw {
		"active" => Ok(CourtStatus::Active),
		"inactive" => Ok(CourtStatus::Inactive),
		"maintenance" => Ok(CourtStatus::Maintenance),
		_ => Err(format!("unknown court status '{raw}'")),
	}
}

fn parse_sport_courts(raw: &str) -> Result<SportCourts, String> {
	let (sport, count) = raw
		.split_once(':')
		.ok_or_else(|| format!("expected \"Sport:count\", got '{raw}'"))?;

	let court_count = count
		.trim()
		.parse::<i64>()
		.map_err(|_| format!("invalid court count '{count}'"))?;

	Ok(SportCourts { sport_type: sport.trim().to_string(), court_count })
}
