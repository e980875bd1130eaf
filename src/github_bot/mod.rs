use crate::{config::MainConfig, http};

pub mod issue;
pub mod label;

pub struct GithubBot {
	pub client: http::Client,
	github_api_url: String,
}

impl GithubBot {
	pub fn new(config: &MainConfig) -> Self {
		let client = http::Client::new(config.github_token.as_str());

		Self {
			client,
			github_api_url: config.github_api_url.clone(),
		}
	}
}
