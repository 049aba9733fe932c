use std::path::PathBuf;
use std::time::Duration;

/// The default backend origin, matching the development deployment.
const DEFAULT_API_URL: &str = "http://localhost:5001";

const DEFAULT_SESSION_FILE: &str = ".quickcourt/session.json";

const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Config {
	pub api_base_url: String,

	pub session_file:    PathBuf,
	pub request_timeout: Duration,
}

impl Config {
	fn get_env_var_or(var: &str, default: &str) -> String {
		std::env::var(var).unwrap_or_else(|_| default.to_string())
	}

	/// Create a new [`Config`] from environment variables
	///
	/// # Panics
	/// Panics if an environment variable holds a malformed value
	#[must_use]
	pub fn from_env() -> Self {
		let api_base_url =
			Self::get_env_var_or("QUICKCOURT_API_URL", DEFAULT_API_URL);

		let session_file = std::env::var("QUICKCOURT_SESSION_FILE")
			.map(PathBuf::from)
			.unwrap_or_else(|_| {
				let home = Self::get_env_var_or("HOME", ".");
				PathBuf::from(home).join(DEFAULT_SESSION_FILE)
			});

		let request_timeout = Duration::from_secs(
			Self::get_env_var_or(
				"QUICKCOURT_REQUEST_TIMEOUT_SECONDS",
				&DEFAULT_REQUEST_TIMEOUT_SECONDS.to_string(),
			)
			.parse::<u64>()
			.unwrap(),
		);

		Self { api_base_url, session_file, request_timeout }
	}
}
