use crate::{github, Result};

use super::GithubBot;

impl GithubBot {
	/// Returns the most recently created open issue carrying `label`, if
	/// any. Only the first result of the first page is ever requested.
	pub async fn latest_issue_with_label(
		&self,
		owner: &str,
		repo: &str,
		label: &str,
	) -> Result<Option<github::Issue>> {
		let url = format!(
			"{}/repos/{}/{}/issues?labels={}&state=open&sort=created&direction=desc&per_page=1&page=1",
			self.github_api_url,
			owner,
			repo,
			urlencoding::encode(label)
		);
		let issues: Vec<github::Issue> = self.client.get(url).await?;
		Ok(issues.into_iter().next())
	}

	pub async fn create_issue(
		&self,
		owner: &str,
		repo: &str,
		title: &str,
		body: &str,
		labels: &[&str],
	) -> Result<github::Issue> {
		let url = format!(
			"{}/repos/{}/{}/issues",
			self.github_api_url, owner, repo
		);
		self.client
			.post(
				url,
				&serde_json::json!({
					"title": title,
					"body": body,
					"labels": labels,
				}),
			)
			.await
	}

	pub async fn create_issue_comment(
		&self,
		owner: &str,
		repo: &str,
		issue_number: i64,
		comment: &str,
	) -> Result<github::Comment> {
		let url = format!(
			"{}/repos/{}/{}/issues/{}/comments",
			self.github_api_url, owner, repo, issue_number
		);
		self.client
			.post(url, &serde_json::json!({ "body": comment }))
			.await
	}
}
