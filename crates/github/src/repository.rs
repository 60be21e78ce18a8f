use serde::Deserialize;
use time::OffsetDateTime;

/// A public repository as listed by `GET /users/{handle}/repos`.
/// Only the fields the portfolio displays or filters on are kept.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Repository {
	pub id: u64,
	pub name: String,
	pub description: Option<String>,
	#[serde(default)]
	pub fork: bool,
	pub language: Option<String>,
	#[serde(default)]
	pub stargazers_count: u32,
	#[serde(with = "time::serde::rfc3339")]
	pub updated_at: OffsetDateTime,
	pub html_url: String,
	#[serde(default)]
	pub topics: Vec<String>,
}

/// Parses the body of a repository listing response.
pub fn parse_repository_list(body: &str) -> Result<Vec<Repository>, crate::Error> {
	Ok(serde_json::from_str::<Vec<Repository>>(body)?)
}
