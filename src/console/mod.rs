//! Terminal front ends for the player, facilitator, and admin workflows
//!
//! Presentation only: every command wires arguments into the client or a
//! state store and prints the outcome. Query screens render through
//! [`ViewState`] so the loading/error/loaded branches stay uniform;
//! failed queries display inline and leave the process exit clean, failed
//! actions propagate.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod facilitator;
pub mod venues;

use clap::{Parser, Subcommand};

use crate::client::ApiClient;
use crate::error::Error;
use crate::session::SessionStore;
use crate::view::ViewState;

#[derive(Debug, Parser)]
#[command(name = "quickcourt", about = "QuickCourt booking console", version)]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Account and profile commands
	#[command(subcommand)]
	Auth(auth::AuthCommand),
	/// Browse venues and their reviews
	#[command(subcommand)]
	Venues(venues::VenueCommand),
	/// Compose and manage bookings
	#[command(subcommand)]
	Bookings(booking::BookingCommand),
	/// Facility-owner console
	#[command(subcommand)]
	Facility(facilitator::FacilityCommand),
	/// Admin console
	#[command(subcommand)]
	Admin(admin::AdminCommand),
	/// Check whether the backend is reachable
	Health,
}

pub async fn run(
	cli: Cli,
	client: &ApiClient,
	store: &SessionStore,
) -> Result<(), Error> {
	match cli.command {
		Command::Auth(command) => auth::run(command, client, store).await,
		Command::Venues(command) => venues::run(command, client, store).await,
		Command::Bookings(command) => {
			booking::run(command, client, store).await
		},
		Command::Facility(command) => {
			facilitator::run(command, client, store).await
		},
		Command::Admin(command) => admin::run(command, client).await,
		Command::Health => {
			let health = client.health().await?;
			println!("{} -- {}", health.service, health.status);

			Ok(())
		},
	}
}

/// Render a query outcome uniformly
pub(crate) fn render<T>(state: &ViewState<T>, on_loaded: impl FnOnce(&T)) {
	match state {
		ViewState::Idle => {},
		ViewState::Loading => println!("loading..."),
		ViewState::Error(reason) => println!("error: {reason}"),
		ViewState::Loaded(data) => on_loaded(data),
	}
}
