pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod github;
pub mod github_bot;
pub mod http;
pub mod report;
pub mod template;

pub type Result<T, E = error::Error> = std::result::Result<T, E>;
