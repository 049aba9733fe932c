use clap::Subcommand;

use super::render;
use crate::client::ApiClient;
use crate::error::Error;
use crate::models::UserRole;
use crate::schemas::auth::{
	ChangePasswordRequest,
	LoginRequest,
	SignupRequest,
	UpdateProfileRequest,
	VerifyOtpRequest,
};
use crate::session::SessionStore;
use crate::view::ViewState;

#[derive(Debug, Subcommand)]
pub enum AuthCommand {
	/// Request a signup OTP email
	Signup {
		#[arg(long)]
		full_name: String,
		#[arg(long)]
		email:     String,
		#[arg(long)]
		password:  String,
		/// "user" or "facility-owner"
		#[arg(long, default_value = "user", value_parser = parse_role)]
		role:      UserRole,
	},
	/// Confirm a signup OTP code and create the account
	VerifyOtp {
		#[arg(long)]
		email: String,
		#[arg(long)]
		code:  String,
	},
	/// Sign in and persist the session
	Login {
		#[arg(long)]
		email:    String,
		#[arg(long)]
		password: String,
	},
	/// Drop the persisted session
	Logout,
	/// Show the signed-in user
	Whoami,
	/// Update name/email, optionally rotating the password
	UpdateProfile {
		#[arg(long)]
		full_name:        String,
		#[arg(long)]
		email:            String,
		#[arg(long)]
		current_password: Option<String>,
		#[arg(long)]
		new_password:     Option<String>,
	},
	/// Change the account password
	ChangePassword {
		#[arg(long)]
		current_password: String,
		#[arg(long)]
		new_password:     String,
	},
}

pub async fn run(
	command: AuthCommand,
	client: &ApiClient,
	store: &SessionStore,
) -> Result<(), Error> {
	match command {
		AuthCommand::Signup { full_name, email, password, role } => {
			let request = SignupRequest {
				full_name,
				email,
				password,
				role,
				avatar_url: None,
			};
			let response = client.signup(&request).await?;
			println!("{}", response.message);
		},
		AuthCommand::VerifyOtp { email, code } => {
			let request = VerifyOtpRequest { email, otp_code: code };
			let response = client.verify_otp(&request).await?;
			println!("{}", response.message);
		},
		AuthCommand::Login { email, password } => {
			let request = LoginRequest { email, password };
			let session = client.login(&request).await?;

			store.save(&session)?;
			println!(
				"signed in as {} <{}>",
				session.user.full_name, session.user.email
			);
		},
		AuthCommand::Logout => {
			store.clear()?;
			println!("signed out");
		},
		AuthCommand::Whoami => {
			let state = ViewState::from_result(store.require());
			render(&state, |session| {
				println!(
					"{} <{}> ({:?})",
					session.user.full_name, session.user.email,
					session.user.role
				);
			});
		},
		AuthCommand::UpdateProfile {
			full_name,
			email,
			current_password,
			new_password,
		} => {
			let session = store.require()?;
			let request = UpdateProfileRequest {
				user_id: session.user_id(),
				full_name,
				email,
				current_password,
				new_password,
			};
			let response = client.update_profile(&request).await?;

			// The stored blob keeps the pre-edit record otherwise
			let mut updated = session;
			updated.user.full_name = response.full_name.clone();
			updated.user.email = response.email.clone();
			store.save(&updated)?;

			println!("{}", response.message);
		},
		AuthCommand::ChangePassword { current_password, new_password } => {
			let session = store.require()?;
			let request = ChangePasswordRequest {
				user_id: session.user_id(),
				current_password,
				new_password,
			};
			let response = client.change_password(&request).await?;
			println!("{}", response.message);
		},
	}

	Ok(())
}

fn parse_role(raw: &str) -> Result<UserRole, String> {
	match raw {
		"user" => Ok(UserRole::User),
		"facility-owner" | "facility_owner" => Ok(UserRole::FacilityOwner),
		_ => Err(format!("unknown role '{raw}'")),
	}
}
