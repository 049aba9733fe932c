use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use validator::Validate;
use validator_derive::Validate;

use crate::error::Error;
use crate::models::{Facility, FacilityDetail, SportCourts};

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilitiesResponse {
	pub facilities: Vec<Facility>,
	pub count:      i64,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilityResponse {
	pub facility: FacilityDetail,
}

/// A new venue, submitted as multipart form data so photos upload in the
/// same request
#[derive(Clone, Debug, Validate)]
pub struct NewFacility {
	pub owner_id: i64,

	#[validate(length(
		min = 1,
		message = "facility name must not be empty",
		code = "name-length"
	))]
	pub name:     String,
	#[validate(length(
		min = 1,
		message = "facility address must not be empty",
		code = "location-length"
	))]
	pub location: String,
	#[validate(length(
		min = 1,
		message = "facility city must not be empty",
		code = "city-length"
	))]
	pub city:     String,

	pub description: String,
	pub phone:       String,
	pub email:       String,
	pub website:     String,

	pub operating_hours_weekdays: String,
	pub operating_hours_weekends: String,

	pub sports:       Vec<String>,
	pub amenities:    Vec<String>,
	/// Court inventory per sport; the backend creates the individual court
	/// rows from these counts
	pub sport_courts: Vec<SportCourts>,

	/// Local photo files to upload; the first becomes the primary photo
	pub photos: Vec<PathBuf>,
}

impl NewFacility {
	/// Validate and convert into the multipart form the backend expects
	///
	/// List fields travel comma-joined, court inventory as
	/// `Sport:count` pairs, photos as file parts under the `photos` field
	pub fn into_form(self) -> Result<reqwest::multipart::Form, Error> {
		self.validate()?;

		let sport_courts = self
			.sport_courts
			.iter()
			.map(|sc| format!("{}:{}", sc.sport_type, sc.court_count))
			.collect::<Vec<String>>()
			.join(",");

		let mut form = reqwest::multipart::Form::new()
			.text("owner_id", self.owner_id.to_string())
			.text("name", self.name)
			.text("description", self.description)
			.text("location", self.location)
			.text("city", self.city)
			.text("phone", self.phone)
			.text("email", self.email)
			.text("website", self.website)
			.text(
				"operating_hours_weekdays",
				self.operating_hours_weekdays,
			)
			.text(
				"operating_hours_weekends",
				self.operating_hours_weekends,
			)
			.text("sports", self.sports.join(","))
			.text("amenities", self.amenities.join(","))
			.text("sportCourts", sport_courts);

		for path in self.photos {
			let bytes = std::fs::read(&path).map_err(|err| {
				Error::Validation(format!(
					"could not read photo {}: {err}",
					path.display()
				))
			})?;

			let file_name = path
				.file_name()
				.map(|n| n.to_string_lossy().into_owned())
				.unwrap_or_else(|| "photo".to_string());

			let part = reqwest::multipart::Part::bytes(bytes)
				.file_name(file_name)
				.mime_str(photo_mime(&path))
				.map_err(|err| {
					Error::Validation(format!(
						"could not attach photo {}: {err}",
						path.display()
					))
				})?;

			form = form.part("photos", part);
		}

		Ok(form)
	}
}

fn photo_mime(path: &std::path::Path) -> &'static str {
	match path.extension().and_then(|e| e.to_str()) {
		Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
		Some(ext) if ext.eq_ignore_ascii_case("webp") => "image/webp",
		Some(ext) if ext.eq_ignore_ascii_case("gif") => "image/gif",
		_ => "image/jpeg",
	}
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct CreateFacilityResponse {
	pub message:     String,
	pub facility_id: i64,
	#[serde(default)]
	pub photos:      Vec<String>,
}

/// Wholesale facility edit; absent fields keep their stored values
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FacilityUpdate {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub name:        Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub location:    Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone:       Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub email:       Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub website:     Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub operating_hours_weekdays: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub operating_hours_weekends: Option<String>,

	#[serde(skip_serializing_if = "Option::is_none")]
	pub sports:    Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub amenities: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub photos:    Option<Vec<String>>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FacilityActionResponse {
	pub message:     String,
	pub facility_id: i64,
}

#[derive(Clone, Debug, Serialize)]
pub struct MyFacilitiesQuery {
	pub user_id: i64,
}
