use handlebars::Handlebars;
use snafu::ResultExt;

use crate::{context::RunContext, error, Result};

/// Renders a mustache-style template (`{{workflow}}`, `{{repo.owner}}`)
/// against the run context. Unresolved placeholders render as empty
/// strings.
pub fn render(template: &str, context: &RunContext) -> Result<String> {
	Handlebars::new()
		.render_template(template, context)
		.context(error::TemplateRender)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn context() -> RunContext {
		RunContext::new(
			"acme",
			"widgets",
			"refs/heads/some-ref",
			"deadbeef",
			"CI",
			42,
			"push",
		)
	}

	#[test]
	fn renders_context_fields() {
		assert_eq!(
			render("{{workflow}} #{{runNumber}}", &context()).unwrap(),
			"CI #42"
		);
	}

	#[test]
	fn renders_dotted_repo_paths() {
		assert_eq!(
			render(
				"https://github.com/{{repo.owner}}/{{repo.repo}}/tree/{{refname}}",
				&context()
			)
			.unwrap(),
			"https://github.com/acme/widgets/tree/some-ref"
		);
	}

	#[test]
	fn unresolved_placeholders_render_empty() {
		assert_eq!(render("[{{missing}}]", &context()).unwrap(), "[]");
	}

	#[test]
	fn malformed_template_fails_to_render() {
		assert!(render("{{workflow", &context()).is_err());
	}
}
