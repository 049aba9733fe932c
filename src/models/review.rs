use serde::{Deserialize, Serialize};

/// A published facility review
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Review {
	pub id:          i64,
	pub rating:      i32,
	pub review_text: String,
	pub created_at:  Option<String>,
	#[serde(default)]
	pub user_name:   Option<String>,
	#[serde(default)]
	pub user_avatar: Option<String>,
}
