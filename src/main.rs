use std::{env, fs::OpenOptions, io::Write, process};

use snafu::ResultExt;

use issuebot::{
	config::MainConfig, context::RunContext, error, github_bot::GithubBot,
	report, Result,
};

#[tokio::main]
async fn main() {
	if let Err(error) = run().await {
		log::error!("{}", error);
		process::exit(1);
	}
}

async fn run() -> Result<()> {
	let config = MainConfig::from_env();
	env_logger::from_env(env_logger::Env::default().default_filter_or("info"))
		.init();

	let context = RunContext::new(
		&config.owner,
		&config.repo,
		&config.ref_field,
		&config.sha,
		&config.workflow,
		config.run_number,
		&config.event_name,
	);
	log::debug!("run context: {:?}", context);

	let github_bot = GithubBot::new(&config);
	let report =
		report::new_issue_or_comment_for_label(&github_bot, &config, &context)
			.await?;

	log::info!(
		"Done: issue #{} ({})",
		report.issue_number,
		report.created.html_url()
	);
	set_output("issue-number", &report.issue_number.to_string())?;
	set_output("issue-url", report.created.html_url())?;

	Ok(())
}

/// Appends a workflow output entry when GITHUB_OUTPUT is set.
fn set_output(name: &str, value: &str) -> Result<()> {
	if let Ok(path) = env::var("GITHUB_OUTPUT") {
		let mut file = OpenOptions::new()
			.create(true)
			.append(true)
			.open(path)
			.context(error::Io)?;
		writeln!(file, "{}={}", name, value).context(error::Io)?;
	}
	Ok(())
}
