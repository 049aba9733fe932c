use chrono::NaiveDate;
use clap::Subcommand;

use super::render;
use crate::client::ApiClient;
use crate::clock::SlotTime;
use crate::error::Error;
use crate::session::SessionStore;
use crate::state::{BookingComposer, ReviewDraft};
use crate::view::ViewState;

#[derive(Debug, Subcommand)]
pub enum BookingCommand {
	/// Book one or more courts at a venue
	Book {
		/// Facility whose courts to book
		#[arg(long)]
		facility:       i64,
		/// Narrow the court choices to one sport
		#[arg(long)]
		sport:          Option<String>,
		#[arg(long)]
		date:           NaiveDate,
		/// Wall-clock start, "13:00" or "01:00 PM"
		#[arg(long)]
		start:          SlotTime,
		/// Whole hours, at least one
		#[arg(long, default_value_t = 1)]
		duration:       u32,
		/// Court ids to book; repeatable
		#[arg(long = "court", required = true)]
		courts:         Vec<i64>,
		#[arg(long, default_value = "card")]
		payment_method: String,
		/// Optional review rating to bundle with the submission
		#[arg(long)]
		rating:         Option<i32>,
		/// Optional review text to bundle with the submission
		#[arg(long)]
		review:         Option<String>,
	},
	/// List your bookings
	List,
	/// Cancel one of your bookings
	Cancel { id: i64 },
}

pub async fn run(
	command: BookingCommand,
	client: &ApiClient,
	store: &SessionStore,
) -> Result<(), Error> {
	match command {
		BookingCommand::Book {
			facility,
			sport,
			date,
			start,
			duration,
			courts,
			payment_method,
			rating,
			review,
		} => {
			let session = store.require()?;

			let mut composer =
				BookingComposer::new(client.courts(facility).await?);
			if let Some(sport) = &sport {
				composer.select_sport(sport);
			}
			composer.set_date(date);
			composer.set_start_time(start);
			composer.set_duration(duration);
			for court_id in courts {
				composer.toggle_court(court_id);
			}

			let booking_ids =
				composer.submit(client, &session, &payment_method).await?;

			let end = composer
				.end_time()
				.map(|t| t.to_string())
				.unwrap_or_default();
			println!(
				"booked {} court(s), {start} - {end}, total {}",
				booking_ids.len(),
				composer.formatted_total(),
			);

			// A bundled review rides along on a best-effort basis; the
			// booking already went through
			if let (Some(rating), Some(text)) = (rating, review) {
				let mut draft = ReviewDraft::new();
				draft.set_rating(rating);
				draft.set_text(&text);

				if draft.has_content() {
					match draft.submit(client, &session, facility).await {
						Ok(_) => println!("review submitted"),
						Err(err) => warn!("review not submitted -- {err}"),
					}
				}
			}
		},
		BookingCommand::List => {
			let session = store.require()?;
			let state =
				ViewState::from_result(client.bookings(&session).await);

			render(&state, |bookings| {
				for booking in bookings {
					println!(
						"#{:<4} {} {} - {}  {:<24} {:<12} {:>8.2}  {:?}",
						booking.id,
						booking.booking_date,
						booking.start_time,
						booking.end_time,
						booking.facility_name.as_deref().unwrap_or("-"),
						booking.court_name.as_deref().unwrap_or("-"),
						booking.total_amount,
						booking.status,
					);
				}
			});
		},
		BookingCommand::Cancel { id } => {
			let session = store.require()?;
			let response = client.cancel_booking(&session, id).await?;
			println!("{}", response.message);
		},
	}

	Ok(())
}
