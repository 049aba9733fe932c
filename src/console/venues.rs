use clap::Subcommand;

use super::render;
use crate::client::ApiClient;
use crate::error::Error;
use crate::session::SessionStore;
use crate::state::ReviewDraft;
use crate::view::ViewState;

#[derive(Debug, Subcommand)]
pub enum VenueCommand {
	/// List all active venues
	List {
		/// Keep only venues offering this sport
		#[arg(long)]
		sport: Option<String>,
		/// Keep only venues in this city
		#[arg(long)]
		city:  Option<String>,
	},
	/// Show one venue in detail
	Detail { id: i64 },
	/// List a venue's reviews
	Reviews { id: i64 },
	/// Write a standalone review for a venue
	Review {
		id:     i64,
		#[arg(long)]
		rating: i32,
		#[arg(long)]
		text:   String,
	},
}

pub async fn run(
	command: VenueCommand,
	client: &ApiClient,
	store: &SessionStore,
) -> Result<(), Error> {
	match command {
		VenueCommand::List { sport, city } => {
			let state = ViewState::from_result(client.facilities().await)
				.map(|facilities| {
					// Narrowing is display-side filtering only
					facilities
						.into_iter()
						.filter(|f| {
							sport.as_deref().is_none_or(|s| {
								f.sports.iter().any(|fs| fs == s)
							}) && city.as_deref().is_none_or(|c| {
								f.city.as_deref() == Some(c)
							})
						})
						.collect::<Vec<_>>()
				});

			render(&state, |facilities| {
				for facility in facilities {
					let rating = facility
						.reviews
						.map(|r| {
							format!(
								"{:.1} ({})",
								r.average_rating, r.total_reviews
							)
						})
						.unwrap_or_else(|| "unrated".to_string());

					println!(
						"#{:<4} {:<28} {:<16} {:<20} {}",
						facility.id,
						facility.name,
						facility.city.as_deref().unwrap_or("-"),
						facility.sports.join("/"),
						rating,
					);
				}
			});
		},
		VenueCommand::Detail { id } => {
			let state = ViewState::from_result(client.facility(id).await);
			render(&state, |facility| {
				println!("{}", facility.name);
				if let Some(address) = &facility.address {
					println!("  {address}");
				}
				if let Some(hours) = &facility.operating_hours {
					println!("  open {hours}");
				}
				for courts in &facility.facility_courts {
					println!(
						"  {} x{}",
						courts.sport_type, courts.court_count
					);
				}
				if !facility.amenities.is_empty() {
					println!("  amenities: {}", facility.amenities.join(", "));
				}
				for photo in &facility.photos {
					println!("  photo: {}", photo.url);
				}
			});
		},
		VenueCommand::Reviews { id } => {
			let state =
				ViewState::from_result(client.facility_reviews(id).await);
			render(&state, |reviews| {
				for review in reviews {
					println!(
						"{}/5  {}  -- {}",
						review.rating,
						review.review_text,
						review.user_name.as_deref().unwrap_or("anonymous"),
					);
				}
			});
		},
		VenueCommand::Review { id, rating, text } => {
			let session = store.require()?;

			let gate = client.can_review(&session, id).await?;
			if !gate.can_review {
				return Err(Error::Validation(
					"only guests with a completed booking can review this \
					 venue"
						.to_string(),
				));
			}

			let mut draft = ReviewDraft::new();
			draft.set_rating(rating);
			draft.set_text(&text);

			let response = draft.submit(client, &session, id).await?;
			println!("{}", response.message);
		},
	}

	Ok(())
}
