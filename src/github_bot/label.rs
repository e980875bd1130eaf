use crate::{github, Result};

use super::GithubBot;

impl GithubBot {
	/// Fetches a label by its exact name.
	pub async fn label(
		&self,
		owner: &str,
		repo: &str,
		name: &str,
	) -> Result<github::Label> {
		let url = format!(
			"{}/repos/{}/{}/labels/{}",
			self.github_api_url,
			owner,
			repo,
			urlencoding::encode(name)
		);
		self.client.get(url).await
	}

	pub async fn create_label(
		&self,
		owner: &str,
		repo: &str,
		name: &str,
	) -> Result<github::Label> {
		let url = format!(
			"{}/repos/{}/{}/labels",
			self.github_api_url, owner, repo
		);
		self.client
			.post(url, &serde_json::json!({ "name": name }))
			.await
	}
}
