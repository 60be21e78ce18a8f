//! Also inspired by https://github.com/XAMPPRocky/octocrab, which does not support WASM.

mod error;
pub use error::*;
mod requests;
pub use requests::*;
mod repository;
pub use repository::*;

pub(crate) static GITHUB_API: &'static str = "https://api.github.com";

#[derive(Clone)]
pub struct GithubClient {
	pub(crate) client: reqwest::Client,
	pub(crate) auth_header: Option<String>,
}

impl GithubClient {
	/// Creates a client for the public REST api.
	/// Anonymous requests are rate limited by GitHub, so a token can be provided when one is available.
	pub fn new(token: Option<&str>, user_agent: &'static str) -> Result<Self, Error> {
		let mut client = reqwest::Client::builder();
		let auth_header = token.map(|token| format!("Bearer {token}"));
		// Browsers own the user-agent header, it can only be set for native requests.
		#[cfg(not(target_family = "wasm"))]
		{
			client = client.user_agent(user_agent);
		}
		#[cfg(target_family = "wasm")]
		let _ = user_agent;
		let client = client.build()?;
		Ok(Self { client, auth_header })
	}

	pub(crate) fn insert_rest_headers(
		&self,
		builder: reqwest::RequestBuilder,
		media_type: Option<&'static str>,
	) -> reqwest::RequestBuilder {
		use reqwest::header::*;
		let accept = match media_type {
			None => format!("application/vnd.github+json"),
			Some(media) => format!("application/vnd.github.{media}+json"),
		};
		let mut builder = builder.header(ACCEPT, accept);
		if let Some(auth_header) = &self.auth_header {
			builder = builder.header(AUTHORIZATION, auth_header.clone());
		}
		builder.header("X-Github-Api-Version", "2022-11-28")
	}
}
