pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

pub const USER_AGENT: &str = "issuebot/0.1.0";
