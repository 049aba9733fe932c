//! The signed-in user and its on-disk persistence
//!
//! The original client kept its identity as a JSON blob in browser local
//! storage under two fixed keys. The same contract is kept here, file
//! backed, but the ambient global becomes an explicit [`Session`] object
//! that every operation needing identity receives as an argument. There is
//! no token, no refresh, and no expiry; the stored user record is the
//! identity.

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::error::{Error, SessionError};
use crate::models::{User, UserRole};

/// Storage key holding the signed-in marker (the literal string `"true"`)
pub const SIGNED_IN_KEY: &str = "userSignedIn";
/// Storage key holding the stringified user record
pub const USER_DATA_KEY: &str = "userData";

/// The identity of the signed-in user
#[derive(Clone, Debug)]
pub struct Session {
	pub user: User,
}

impl Session {
	#[must_use]
	pub fn new(user: User) -> Self { Self { user } }

	#[must_use]
	pub fn user_id(&self) -> i64 { self.user.id }

	#[must_use]
	pub fn is_admin(&self) -> bool { self.user.role == UserRole::Admin }

	#[must_use]
	pub fn is_facility_owner(&self) -> bool {
		self.user.role == UserRole::FacilityOwner
	}
}

/// File-backed session storage
///
/// The file holds a flat string-to-string map, mirroring the local-storage
/// contract: the user record is a JSON document stored *stringified* under
/// [`USER_DATA_KEY`]
#[derive(Clone, Debug)]
pub struct SessionStore {
	path: PathBuf,
}

impl SessionStore {
	#[must_use]
	pub fn new(path: PathBuf) -> Self { Self { path } }

	/// Load the stored session, if any
	///
	/// A missing file or an unset signed-in marker reads as signed out; a
	/// present but unparseable blob is an error
	pub fn load(&self) -> Result<Option<Session>, Error> {
		let raw = match std::fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
				return Ok(None);
			},
			Err(err) => return Err(SessionError::Io(err).into()),
		};

		let entries: BTreeMap<String, String> =
			serde_json::from_str(&raw).map_err(SessionError::Corrupt)?;

		if entries.get(SIGNED_IN_KEY).map(String::as_str) != Some("true") {
			return Ok(None);
		}

		let Some(data) = entries.get(USER_DATA_KEY) else {
			return Ok(None);
		};

		let user: User =
			serde_json::from_str(data).map_err(SessionError::Corrupt)?;

		Ok(Some(Session::new(user)))
	}

	/// Load the stored session or fail if signed out
	pub fn require(&self) -> Result<Session, Error> {
		self.load()?.ok_or_else(|| SessionError::NotSignedIn.into())
	}

	/// Persist a session under the fixed storage keys
	pub fn save(&self, session: &Session) -> Result<(), Error> {
		let data = serde_json::to_string(&session.user)
			.map_err(SessionError::Corrupt)?;

		let entries = BTreeMap::from([
			(SIGNED_IN_KEY.to_string(), "true".to_string()),
			(USER_DATA_KEY.to_string(), data),
		]);

		if let Some(parent) = self.path.parent() {
			std::fs::create_dir_all(parent).map_err(SessionError::Io)?;
		}

		let blob = serde_json::to_string_pretty(&entries)
			.map_err(SessionError::Corrupt)?;
		std::fs::write(&self.path, blob).map_err(SessionError::Io)?;

		debug!("stored session for user {}", session.user.id);

		Ok(())
	}

	/// Drop the stored session
	pub fn clear(&self) -> Result<(), Error> {
		match std::fs::remove_file(&self.path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(err) => Err(SessionError::Io(err).into()),
		}
	}
}
