use crate::{parse_repository_list, Error, Repository, GITHUB_API};
use futures_util::future::LocalBoxFuture;

/// The largest page size the listing endpoint accepts.
pub static MAX_PAGE_SIZE: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListSort {
	Created,
	Updated,
	Pushed,
	FullName,
}

impl ListSort {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Created => "created",
			Self::Updated => "updated",
			Self::Pushed => "pushed",
			Self::FullName => "full_name",
		}
	}
}

pub struct ListUserRepositoriesParams<'a> {
	pub handle: &'a str,
	pub page_size: usize,
	pub sort: ListSort,
}

impl<'a> ListUserRepositoriesParams<'a> {
	/// The first page of the most recently updated repositories for the account.
	pub fn recent(handle: &'a str) -> Self {
		Self {
			handle,
			page_size: MAX_PAGE_SIZE,
			sort: ListSort::Updated,
		}
	}

	pub fn url(&self) -> String {
		format!(
			"{GITHUB_API}/users/{}/repos?per_page={}&sort={}",
			urlencoding::encode(self.handle),
			self.page_size.min(MAX_PAGE_SIZE),
			self.sort.as_str()
		)
	}
}

impl crate::GithubClient {
	/// Lists the public repositories of a user account.
	pub fn list_user_repositories(
		&self,
		params: ListUserRepositoriesParams<'_>,
	) -> LocalBoxFuture<'static, Result<Vec<Repository>, Error>> {
		// https://docs.github.com/en/rest/repos/repos?apiVersion=2022-11-28#list-repositories-for-a-user
		let url = params.url();
		log::debug!(target: "github", "listing repositories {url:?}");
		let builder = self.client.get(url);
		let builder = self.insert_rest_headers(builder, None);
		Box::pin(async move {
			let response = builder.send().await?;
			let status = response.status();
			let body = response.text().await?;
			if !status.is_success() {
				return Err(Error::Status {
					status: status.as_u16(),
					body: body.into(),
				});
			}
			let repositories = parse_repository_list(&body)?;
			log::debug!(target: "github", "received {} repositories", repositories.len());
			Ok(repositories)
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn recent_url() {
		let params = ListUserRepositoriesParams::recent("shahabibrahim1");
		assert_eq!(
			params.url(),
			"https://api.github.com/users/shahabibrahim1/repos?per_page=100&sort=updated"
		);
	}

	#[test]
	fn handle_is_encoded() {
		let params = ListUserRepositoriesParams {
			handle: "a b/c",
			page_size: 500,
			sort: ListSort::FullName,
		};
		assert_eq!(
			params.url(),
			"https://api.github.com/users/a%20b%2Fc/repos?per_page=100&sort=full_name"
		);
	}
}
