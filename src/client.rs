//! HTTP plumbing for the backend boundary
//!
//! One [`ApiClient`] per process, cheap to clone. Requests go to the fixed
//! origin from [`Config`]; failures are never retried here, callers decide
//! whether to re-trigger.

use reqwest::multipart::Form;
use reqwest::{Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{ApiError, Error};

/// The backend's error envelope
#[derive(Debug, serde::Deserialize)]
struct ErrorEnvelope {
	error: String,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
	http: reqwest::Client,
	base: Url,
}

impl ApiClient {
	/// Create a client for the configured backend origin
	///
	/// # Panics
	/// Panics if the configured origin is not a valid URL or the HTTP
	/// client cannot be constructed
	#[must_use]
	pub fn new(config: &Config) -> Self {
		let http = reqwest::Client::builder()
			.timeout(config.request_timeout)
			.build()
			.expect("COULD NOT BUILD HTTP CLIENT");

		let base = Url::parse(&config.api_base_url)
			.expect("QUICKCOURT_API_URL IS NOT A VALID URL");

		Self { http, base }
	}

	fn url(&self, path: &str) -> Url {
		// Paths are compile-time constants relative to the origin; join
		// only fails on malformed input
		self.base.join(path).expect("COULD NOT BUILD REQUEST URL")
	}

	pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
		self.http.request(method, self.url(path))
	}

	pub(crate) async fn get<T: DeserializeOwned>(
		&self,
		path: &str,
	) -> Result<T, Error> {
		Self::decode(self.request(Method::GET, path).send().await?).await
	}

	pub(crate) async fn get_with<T, Q>(
		&self,
		path: &str,
		query: &Q,
	) -> Result<T, Error>
	where
		T: DeserializeOwned,
		Q: Serialize + ?Sized,
	{
		let response =
			self.request(Method::GET, path).query(query).send().await?;

		Self::decode(response).await
	}

	pub(crate) async fn post<T, B>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T, Error>
	where
		T: DeserializeOwned,
		B: Serialize + ?Sized,
	{
		let response =
			self.request(Method::POST, path).json(body).send().await?;

		Self::decode(response).await
	}

	pub(crate) async fn post_form<T: DeserializeOwned>(
		&self,
		path: &str,
		form: Form,
	) -> Result<T, Error> {
		let response =
			self.request(Method::POST, path).multipart(form).send().await?;

		Self::decode(response).await
	}

	pub(crate) async fn put<T, B>(
		&self,
		path: &str,
		body: &B,
	) -> Result<T, Error>
	where
		T: DeserializeOwned,
		B: Serialize + ?Sized,
	{
		let response =
			self.request(Method::PUT, path).json(body).send().await?;

		Self::decode(response).await
	}

	pub(crate) async fn delete<T: DeserializeOwned>(
		&self,
		path: &str,
	) -> Result<T, Error> {
		Self::decode(self.request(Method::DELETE, path).send().await?).await
	}

	/// Decode a 2xx body, or fold the error envelope into [`ApiError`]
	pub(crate) async fn decode<T: DeserializeOwned>(
		response: Response,
	) -> Result<T, Error> {
		let status = response.status();

		if status.is_success() {
			return Ok(response.json::<T>().await?);
		}

		let message = match response.json::<ErrorEnvelope>().await {
			Ok(envelope) => envelope.error,
			// Not every proxy in front of the backend speaks the envelope
			Err(_) => {
				status.canonical_reason().unwrap_or("request failed").to_string()
			},
		};

		warn!("backend rejected request -- {status}: {message}");

		Err(ApiError { status, message }.into())
	}
}
