use serde::{Deserialize, Serialize};
use validator_derive::Validate;

use crate::models::{User, UserRole};

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct SignupRequest {
	#[validate(length(
		min = 1,
		message = "full name must not be empty",
		code = "full-name-length"
	))]
	pub full_name:  String,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email:      String,
	#[validate(length(
		min = 6,
		message = "password must be at least 6 characters long",
		code = "password-length"
	))]
	pub password:   String,
	pub role:       UserRole,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub avatar_url: Option<String>,
}

/// `/signup` only queues the OTP email; the account is created by
/// `/verify-otp`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SignupResponse {
	pub message:    String,
	pub email:      String,
	pub email_sent: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VerifyOtpRequest {
	pub email:    String,
	pub otp_code: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct VerifyOtpResponse {
	pub message: String,
	pub user_id: i64,
	pub email:   String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginRequest {
	pub email:    String,
	pub password: String,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LoginResponse {
	pub message:      String,
	pub user:         User,
	pub otp_verified: bool,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct UpdateProfileRequest {
	pub user_id:   i64,
	#[validate(length(
		min = 1,
		message = "full name must not be empty",
		code = "full-name-length"
	))]
	pub full_name: String,
	#[validate(email(message = "invalid email", code = "email"))]
	pub email:     String,

	/// Required by the backend when `new_password` is set
	#[serde(skip_serializing_if = "Option::is_none")]
	pub current_password: Option<String>,
	#[validate(length(
		min = 6,
		message = "password must be at least 6 characters long",
		code = "password-length"
	))]
	#[serde(skip_serializing_if = "Option::is_none")]
	pub new_password:     Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct UpdateProfileResponse {
	pub message:   String,
	pub user_id:   i64,
	pub full_name: String,
	pub email:     String,
}

#[derive(Clone, Debug, Deserialize, Serialize, Validate)]
pub struct ChangePasswordRequest {
	pub user_id:          i64,
	pub current_password: String,
	#[validate(length(
		min = 6,
		message = "password must be at least 6 characters long",
		code = "password-length"
	))]
	pub new_password:     String,
}
