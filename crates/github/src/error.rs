use std::sync::Arc;

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
	#[error(transparent)]
	Request(Arc<reqwest::Error>),
	#[error(transparent)]
	Deserialization(Arc<serde_json::Error>),
	#[error("GitHub responded with status {status}: {body}")]
	Status { status: u16, body: Arc<String> },
}
impl From<reqwest::Error> for Error {
	fn from(value: reqwest::Error) -> Self {
		Self::Request(Arc::new(value))
	}
}
impl From<serde_json::Error> for Error {
	fn from(value: serde_json::Error) -> Self {
		Self::Deserialization(Arc::new(value))
	}
}
