use serde::{Deserialize, Serialize};

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
	pub id: Option<i64>,
	pub name: String,
	pub color: Option<String>,
	pub description: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
	pub number: i64,
	pub html_url: String,
	pub title: Option<String>,
	pub body: Option<String>,
	pub state: Option<String>,
	#[serde(default)]
	pub labels: Vec<Label>,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
	pub id: i64,
	pub html_url: String,
	pub body: Option<String>,
	pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}
