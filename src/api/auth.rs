use validator::Validate;

use crate::client::ApiClient;
use crate::error::Error;
use crate::schemas::MessageResponse;
use crate::schemas::auth::{
	ChangePasswordRequest,
	LoginRequest,
	LoginResponse,
	SignupRequest,
	SignupResponse,
	UpdateProfileRequest,
	UpdateProfileResponse,
	VerifyOtpRequest,
	VerifyOtpResponse,
};
use crate::session::Session;

impl ApiClient {
	/// Request an OTP email for a new account
	///
	/// The account itself is only created once the code is confirmed with
	/// [`verify_otp`](Self::verify_otp)
	#[instrument(skip(self, request), fields(email = %request.email))]
	pub async fn signup(
		&self,
		request: &SignupRequest,
	) -> Result<SignupResponse, Error> {
		request.validate()?;

		self.post("/signup", request).await
	}

	/// Confirm a signup OTP code and create the account
	#[instrument(skip(self, request), fields(email = %request.email))]
	pub async fn verify_otp(
		&self,
		request: &VerifyOtpRequest,
	) -> Result<VerifyOtpResponse, Error> {
		self.post("/verify-otp", request).await
	}

	/// Exchange credentials for the stored user record
	///
	/// The caller persists the returned [`Session`] through a
	/// [`SessionStore`](crate::session::SessionStore) if it should outlive
	/// the process
	#[instrument(skip(self, request), fields(email = %request.email))]
	pub async fn login(&self, request: &LoginRequest) -> Result<Session, Error> {
		let response: LoginResponse = self.post("/login", request).await?;

		debug!("signed in as user {}", response.user.id);

		Ok(Session::new(response.user))
	}

	#[instrument(skip(self, request))]
	pub async fn update_profile(
		&self,
		request: &UpdateProfileRequest,
	) -> Result<UpdateProfileResponse, Error> {
		request.validate()?;

		self.post("/update-profile", request).await
	}

	#[instrument(skip(self, request))]
	pub async fn change_password(
		&self,
		request: &ChangePasswordRequest,
	) -> Result<MessageResponse, Error> {
		request.validate()?;

		self.post("/change-password", request).await
	}
}
