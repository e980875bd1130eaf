use crate::constants::DEFAULT_GITHUB_API_URL;

#[derive(Debug, Clone)]
pub struct MainConfig {
	pub github_api_url: String,
	pub github_token: String,
	pub label_name: String,
	pub title_template: String,
	pub body_template: String,
	pub create_label: bool,
	pub always_create_new_issue: bool,
	pub owner: String,
	pub repo: String,
	pub ref_field: String,
	pub sha: String,
	pub workflow: String,
	pub run_number: i64,
	pub event_name: String,
}

impl MainConfig {
	pub fn from_env() -> Self {
		dotenv::dotenv().ok();

		let github_api_url = dotenv::var("GITHUB_API_URL")
			.unwrap_or_else(|_| DEFAULT_GITHUB_API_URL.to_owned());
		let github_token =
			dotenv::var("GITHUB_TOKEN").expect("GITHUB_TOKEN");
		let label_name = dotenv::var("LABEL_NAME").expect("LABEL_NAME");
		let title_template =
			dotenv::var("TITLE_TEMPLATE").expect("TITLE_TEMPLATE");
		let body_template =
			dotenv::var("BODY_TEMPLATE").expect("BODY_TEMPLATE");
		let create_label = dotenv::var("CREATE_LABEL")
			.map(|v| {
				v.parse::<bool>().expect("failed parsing CREATE_LABEL")
			})
			.unwrap_or(false);
		let always_create_new_issue = dotenv::var("ALWAYS_CREATE_NEW_ISSUE")
			.map(|v| {
				v.parse::<bool>()
					.expect("failed parsing ALWAYS_CREATE_NEW_ISSUE")
			})
			.unwrap_or(false);

		let repository =
			dotenv::var("GITHUB_REPOSITORY").expect("GITHUB_REPOSITORY");
		let (owner, repo) = parse_repository(&repository)
			.expect("GITHUB_REPOSITORY should be owner/repo");
		let ref_field = dotenv::var("GITHUB_REF").expect("GITHUB_REF");
		let sha = dotenv::var("GITHUB_SHA").expect("GITHUB_SHA");
		let workflow =
			dotenv::var("GITHUB_WORKFLOW").expect("GITHUB_WORKFLOW");
		let run_number = dotenv::var("GITHUB_RUN_NUMBER")
			.expect("GITHUB_RUN_NUMBER")
			.parse::<i64>()
			.expect("failed parsing GITHUB_RUN_NUMBER");
		let event_name =
			dotenv::var("GITHUB_EVENT_NAME").expect("GITHUB_EVENT_NAME");

		Self {
			github_api_url,
			github_token,
			label_name,
			title_template,
			body_template,
			create_label,
			always_create_new_issue,
			owner,
			repo,
			ref_field,
			sha,
			workflow,
			run_number,
			event_name,
		}
	}
}

/// Splits a `owner/repo` full name into its coordinates.
pub fn parse_repository(full_name: &str) -> Option<(String, String)> {
	let mut parts = full_name.splitn(2, '/');
	match (parts.next(), parts.next()) {
		(Some(owner), Some(repo)) if !owner.is_empty() && !repo.is_empty() => {
			Some((owner.to_owned(), repo.to_owned()))
		}
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_repository_coordinates() {
		assert_eq!(
			parse_repository("acme/widgets"),
			Some(("acme".to_owned(), "widgets".to_owned()))
		);
	}

	#[test]
	fn rejects_malformed_repository_names() {
		assert_eq!(parse_repository("acme"), None);
		assert_eq!(parse_repository("acme/"), None);
		assert_eq!(parse_repository("/widgets"), None);
	}
}
