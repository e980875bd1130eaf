use snafu::ResultExt;

use crate::{
	config::MainConfig,
	context::RunContext,
	error::{self, Error},
	github,
	github_bot::GithubBot,
	template, Result,
};

/// What the publish step created on the tracker. Only the issue number and
/// the public URL are contractual; the rest of the payload is kept as-is.
#[derive(Debug, Clone)]
pub enum Created {
	Issue(github::Issue),
	Comment(github::Comment),
}

impl Created {
	pub fn html_url(&self) -> &str {
		match self {
			Created::Issue(issue) => &issue.html_url,
			Created::Comment(comment) => &comment.html_url,
		}
	}
}

#[derive(Debug, Clone)]
pub struct Report {
	pub issue_number: i64,
	pub created: Created,
}

/// Ensures the label exists, finds the latest open issue carrying it and
/// either opens a new issue or comments on the found one. Exactly one
/// tracker-mutating call is made (label creation excepted); every failure
/// aborts the run unchanged.
pub async fn new_issue_or_comment_for_label(
	github_bot: &GithubBot,
	config: &MainConfig,
	context: &RunContext,
) -> Result<Report> {
	log::debug!("label name: {}", config.label_name);
	log::debug!("title template: {}", config.title_template);
	log::debug!("body template: {}", config.body_template);
	log::debug!("create label: {}", config.create_label);
	log::debug!(
		"always create new issue: {}",
		config.always_create_new_issue
	);

	ensure_label(github_bot, context, &config.label_name, config.create_label)
		.await?;

	log::info!(
		"Finding latest open issue with label {:?}",
		config.label_name
	);
	let located = github_bot
		.latest_issue_with_label(
			&context.repo.owner,
			&context.repo.repo,
			&config.label_name,
		)
		.await
		.context(error::IssueSearchFailed {
			label: config.label_name.as_str(),
		})?;

	publish(github_bot, config, context, located).await
}

/// Checks that the label exists, creating it when allowed. Not-found is
/// told apart from other failures by the response status, not by the
/// response message.
async fn ensure_label(
	github_bot: &GithubBot,
	context: &RunContext,
	label: &str,
	create_if_missing: bool,
) -> Result<()> {
	log::info!("Checking if label {:?} exists", label);
	match github_bot
		.label(&context.repo.owner, &context.repo.repo, label)
		.await
	{
		Ok(_) => Ok(()),
		Err(Error::Response { status, .. })
			if status == reqwest::StatusCode::NOT_FOUND =>
		{
			if create_if_missing {
				log::info!("Creating label {:?}", label);
				github_bot
					.create_label(
						&context.repo.owner,
						&context.repo.repo,
						label,
					)
					.await
					.map(|_| ())
					.context(error::LabelCreateFailed { label })
			} else {
				error::LabelNotFound { label }.fail()
			}
		}
		Err(other) => {
			Err(other).context(error::LabelLookupFailed { label })
		}
	}
}

/// Creates a new issue, or comments on `located` when one was found and
/// creating anew was not forced. Templates are rendered before the mutating
/// call so a render failure never leaves a half-written issue behind.
async fn publish(
	github_bot: &GithubBot,
	config: &MainConfig,
	context: &RunContext,
	located: Option<github::Issue>,
) -> Result<Report> {
	let owner = &context.repo.owner;
	let repo = &context.repo.repo;

	match located {
		Some(issue) if !config.always_create_new_issue => {
			let issue_number = issue.number;
			let body = template::render(&config.body_template, context)?;
			log::info!(
				"Found issue #{}. Creating new comment",
				issue_number
			);
			let comment = github_bot
				.create_issue_comment(owner, repo, issue_number, &body)
				.await
				.context(error::PublishFailed)?;
			Ok(Report {
				issue_number,
				created: Created::Comment(comment),
			})
		}
		_ => {
			if config.always_create_new_issue {
				log::info!("ALWAYS_CREATE_NEW_ISSUE is enabled");
			} else {
				log::info!("No open issue found");
			}
			let title = template::render(&config.title_template, context)?;
			let body = template::render(&config.body_template, context)?;
			log::info!("Creating new issue");
			let issue = github_bot
				.create_issue(
					owner,
					repo,
					&title,
					&body,
					&[config.label_name.as_str()],
				)
				.await
				.context(error::PublishFailed)?;
			let issue_number = issue.number;
			Ok(Report {
				issue_number,
				created: Created::Issue(issue),
			})
		}
	}
}
