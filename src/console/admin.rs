use clap::Subcommand;

use super::render;
use crate::client::ApiClient;
use crate::error::Error;
use crate::schemas::admin::ApprovalAction;
use crate::view::ViewState;

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
	/// Platform-wide dashboard statistics
	Stats,
	/// The facility moderation queue
	Facilities {
		/// Keep only facilities awaiting approval
		#[arg(long)]
		pending: bool,
	},
	/// Approve a pending facility
	Approve { id: i64 },
	/// Reject a pending facility
	Reject {
		id:       i64,
		#[arg(long)]
		comments: Option<String>,
	},
}

pub async fn run(command: AdminCommand, client: &ApiClient) -> Result<(), Error> {
	match command {
		AdminCommand::Stats => {
			let state = ViewState::from_result(client.admin_stats().await);

			render(&state, |stats| {
				let kpi = &stats.kpi_data;
				println!("users            {}", kpi.total_users);
				println!("facility owners  {}", kpi.total_facility_owners);
				println!("facilities       {}", kpi.total_facilities);
				println!("courts           {}", kpi.total_courts);
				println!("bookings         {}", kpi.total_bookings);
				println!("pending approval {}", kpi.pending_approvals);

				if !stats.most_active_sports.is_empty() {
					println!("most active sports:");
					for sport in &stats.most_active_sports {
						println!(
							"  {:<20} {} booking(s)",
							sport.sport, sport.bookings
						);
					}
				}
			});
		},
		AdminCommand::Facilities { pending } => {
			let state = ViewState::from_result(client.admin_facilities().await)
				.map(|facilities| {
					facilities
						.into_iter()
						.filter(|f| !pending || f.status == "pending")
						.collect::<Vec<_>>()
				});

			render(&state, |facilities| {
				for facility in facilities {
					println!(
						"#{:<4} {:<28} {:<24} {:<10} {}",
						facility.id,
						facility.name,
						facility.owner,
						facility.status,
						facility.location,
					);
				}
			});
		},
		AdminCommand::Approve { id } => {
			let response = client
				.approve_facility(id, ApprovalAction::Approve, None)
				.await?;
			println!("{}", response.message);
		},
		AdminCommand::Reject { id, comments } => {
			let response = client
				.approve_facility(id, ApprovalAction::Reject, comments)
				.await?;
			println!("{}", response.message);
		},
	}

	Ok(())
}
