use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
	User,
	FacilityOwner,
	Admin,
}

/// A platform account as returned by `/login`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct User {
	pub id:         i64,
	pub full_name:  String,
	pub email:      String,
	pub avatar_url: Option<String>,
	pub role:       UserRole,
	pub created_at: Option<String>,
}
