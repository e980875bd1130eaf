use snafu::{Backtrace, Snafu};

#[derive(Debug, Snafu)]
#[snafu(visibility = "pub")]
pub enum Error {
	/// An error occurred while sending or receiving a HTTP request or
	/// response respectively.
	#[snafu(display("Source: {}\nBacktrace:\n{}", source, backtrace))]
	Http {
		source: reqwest::Error,
		backtrace: Backtrace,
	},

	/// An error occurred while parsing or serializing JSON.
	#[snafu(display("Source: {}\nBacktrace:\n{}", source, backtrace))]
	Json {
		source: serde_json::Error,
		backtrace: Backtrace,
	},

	/// The tracker answered with a non-success status code.
	#[snafu(display("Status code: {}\nBody:\n{:#?}", status, body))]
	Response {
		status: reqwest::StatusCode,
		body: serde_json::Value,
	},

	/// The label is absent and creating it was disabled.
	#[snafu(display(
		"Label {:?} not found and CREATE_LABEL is disabled",
		label
	))]
	LabelNotFound { label: String, backtrace: Backtrace },

	/// The label check failed with something other than not-found.
	#[snafu(display("Failed to check label {:?}: {}", label, source))]
	LabelLookupFailed {
		label: String,
		#[snafu(source(from(Error, Box::new)))]
		source: Box<Error>,
	},

	/// The tracker rejected the create-label call.
	#[snafu(display("Failed to create label {:?}: {}", label, source))]
	LabelCreateFailed {
		label: String,
		#[snafu(source(from(Error, Box::new)))]
		source: Box<Error>,
	},

	/// The tracker failed while listing issues carrying the label.
	#[snafu(display(
		"Failed to search issues with label {:?}: {}",
		label,
		source
	))]
	IssueSearchFailed {
		label: String,
		#[snafu(source(from(Error, Box::new)))]
		source: Box<Error>,
	},

	/// A template could not be rendered against the run context. Raised
	/// before any tracker-mutating call.
	#[snafu(display("Failed to render template: {}", source))]
	TemplateRender {
		source: handlebars::RenderError,
		backtrace: Backtrace,
	},

	/// The tracker failed while creating the issue or the comment.
	#[snafu(display("Failed to publish issue or comment: {}", source))]
	PublishFailed {
		#[snafu(source(from(Error, Box::new)))]
		source: Box<Error>,
	},

	/// An error occurred while writing workflow outputs.
	#[snafu(display("Source: {}\nBacktrace:\n{}", source, backtrace))]
	Io {
		source: std::io::Error,
		backtrace: Backtrace,
	},
}
