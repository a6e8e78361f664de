//! Sentence generation for connector labels and tooltips.

use std::collections::HashMap;

use super::types::DependencyKind;

/// Resolves display titles, falling back to identifiers when the chart has
/// not registered a title for an endpoint.
pub struct TitleResolver<'a> {
	work_items: &'a HashMap<String, String>,
	milestones: &'a HashMap<u32, String>,
}

impl<'a> TitleResolver<'a> {
	pub fn new(
		work_items: &'a HashMap<String, String>,
		milestones: &'a HashMap<u32, String>,
	) -> Self {
		Self {
			work_items,
			milestones,
		}
	}

	/// Title of a work item, or the raw id when untitled.
	pub fn work_item<'b>(&'b self, id: &'b str) -> &'b str {
		self.work_items.get(id).map(String::as_str).unwrap_or(id)
	}

	/// Title of a milestone, or `"Milestone {id}"` when untitled.
	pub fn milestone(&self, id: u32) -> String {
		self.milestones
			.get(&id)
			.cloned()
			.unwrap_or_else(|| format!("Milestone {id}"))
	}
}

/// Sentence for an explicit dependency of the given kind.
pub fn dependency_sentence(
	kind: DependencyKind,
	predecessor: &str,
	successor: &str,
	titles: &TitleResolver,
) -> String {
	let pred = titles.work_item(predecessor);
	let succ = titles.work_item(successor);
	match kind {
		DependencyKind::FinishToStart => {
			format!("{pred} must finish before {succ} can start")
		}
		DependencyKind::StartToStart => format!("{pred} and {succ} must start together"),
		DependencyKind::FinishToFinish => format!("{pred} and {succ} must finish together"),
		DependencyKind::StartToFinish => {
			format!("{succ} cannot finish until {pred} starts")
		}
	}
}

/// Sentence for a link synthesized from critical-path adjacency.
pub fn critical_link_sentence(first: &str, second: &str, titles: &TitleResolver) -> String {
	format!(
		"{} and {} are consecutive on the critical path",
		titles.work_item(first),
		titles.work_item(second)
	)
}

/// Sentence for a work item feeding a milestone.
pub fn contribution_sentence(work_item: &str, milestone: u32, titles: &TitleResolver) -> String {
	format!(
		"{} contributes to milestone {}",
		titles.work_item(work_item),
		titles.milestone(milestone)
	)
}

/// Sentence for a milestone gating a work item.
pub fn requirement_sentence(milestone: u32, work_item: &str, titles: &TitleResolver) -> String {
	format!(
		"{} is a required milestone for {}",
		titles.milestone(milestone),
		titles.work_item(work_item)
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn titles() -> (HashMap<String, String>, HashMap<u32, String>) {
		let mut work_items = HashMap::new();
		work_items.insert("pour".to_owned(), "Foundation pour".to_owned());
		work_items.insert("frame".to_owned(), "Framing".to_owned());
		let mut milestones = HashMap::new();
		milestones.insert(3, "Dry-in".to_owned());
		(work_items, milestones)
	}

	#[test]
	fn dependency_sentences_match_templates() {
		let (work_items, milestones) = titles();
		let resolver = TitleResolver::new(&work_items, &milestones);
		let cases = [
			(
				DependencyKind::FinishToStart,
				"Foundation pour must finish before Framing can start",
			),
			(
				DependencyKind::StartToStart,
				"Foundation pour and Framing must start together",
			),
			(
				DependencyKind::FinishToFinish,
				"Foundation pour and Framing must finish together",
			),
			(
				DependencyKind::StartToFinish,
				"Framing cannot finish until Foundation pour starts",
			),
		];
		for (kind, expected) in cases {
			assert_eq!(dependency_sentence(kind, "pour", "frame", &resolver), expected);
		}
	}

	#[test]
	fn untitled_work_item_falls_back_to_raw_id() {
		let (work_items, milestones) = titles();
		let resolver = TitleResolver::new(&work_items, &milestones);
		assert_eq!(
			dependency_sentence(DependencyKind::FinishToStart, "pour", "wi-99", &resolver),
			"Foundation pour must finish before wi-99 can start"
		);
	}

	#[test]
	fn critical_link_sentence_uses_titles() {
		let (work_items, milestones) = titles();
		let resolver = TitleResolver::new(&work_items, &milestones);
		assert_eq!(
			critical_link_sentence("pour", "frame", &resolver),
			"Foundation pour and Framing are consecutive on the critical path"
		);
	}

	#[test]
	fn milestone_sentences() {
		let (work_items, milestones) = titles();
		let resolver = TitleResolver::new(&work_items, &milestones);
		assert_eq!(
			contribution_sentence("frame", 3, &resolver),
			"Framing contributes to milestone Dry-in"
		);
		assert_eq!(
			requirement_sentence(3, "frame", &resolver),
			"Dry-in is a required milestone for Framing"
		);
	}

	#[test]
	fn untitled_milestone_falls_back_to_numbered_label() {
		let (work_items, milestones) = titles();
		let resolver = TitleResolver::new(&work_items, &milestones);
		assert_eq!(
			requirement_sentence(41, "frame", &resolver),
			"Milestone 41 is a required milestone for Framing"
		);
	}
}
