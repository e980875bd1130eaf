use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Repo {
	pub owner: String,
	pub repo: String,
}

/// Run metadata available to template rendering. Built once per invocation
/// and passed around by reference, never mutated.
///
/// Serialized field names are the ones templates see: `repo.owner`,
/// `repo.repo`, `refname`, `sha`, `workflow`, `runNumber`, `eventName`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunContext {
	pub repo: Repo,
	pub refname: String,
	pub sha: String,
	pub workflow: String,
	#[serde(rename = "runNumber")]
	pub run_number: i64,
	#[serde(rename = "eventName")]
	pub event_name: String,
}

impl RunContext {
	/// `ref_field` is the full ref, e.g. `refs/heads/main`; only the part
	/// after the last `/` (just the branch or tag name) is kept.
	pub fn new(
		owner: &str,
		repo: &str,
		ref_field: &str,
		sha: &str,
		workflow: &str,
		run_number: i64,
		event_name: &str,
	) -> Self {
		let refname = ref_field
			.rsplit('/')
			.next()
			.unwrap_or(ref_field)
			.to_owned();

		Self {
			repo: Repo {
				owner: owner.to_owned(),
				repo: repo.to_owned(),
			},
			refname,
			sha: sha.to_owned(),
			workflow: workflow.to_owned(),
			run_number,
			event_name: event_name.to_owned(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn context_with_ref(ref_field: &str) -> RunContext {
		RunContext::new(
			"acme",
			"widgets",
			ref_field,
			"deadbeef",
			"CI",
			1,
			"push",
		)
	}

	#[test]
	fn refname_is_the_last_segment_of_a_branch_ref() {
		assert_eq!(context_with_ref("refs/heads/main").refname, "main");
	}

	#[test]
	fn refname_is_the_last_segment_of_a_tag_ref() {
		assert_eq!(context_with_ref("refs/tags/v1").refname, "v1");
	}

	#[test]
	fn refname_of_a_bare_ref_is_the_ref_itself() {
		assert_eq!(context_with_ref("main").refname, "main");
	}
}
