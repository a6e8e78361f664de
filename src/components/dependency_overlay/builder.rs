//! Derives the renderable connector list from the chart's schedule data.

use std::collections::HashSet;

use log::debug;

use super::describe::{
	TitleResolver, contribution_sentence, critical_link_sentence, dependency_sentence,
	requirement_sentence,
};
use super::types::{
	BarRect, Connector, ConnectorRole, DependencyKind, LinkEndpoint, MilestonePoint, OverlayInput,
	OverlayPoint,
};

/// Which horizontal edge of a bar an endpoint anchors to.
#[derive(Clone, Copy)]
enum BarEdge {
	Left,
	Right,
}

fn bar_anchor(bar: &BarRect, edge: BarEdge, row_height: f64) -> OverlayPoint {
	let x = match edge {
		BarEdge::Left => bar.x,
		BarEdge::Right => bar.x + bar.width,
	};
	OverlayPoint {
		x,
		y: bar.row_index as f64 * row_height + row_height / 2.0,
	}
}

/// Edge pair (predecessor, successor) for each dependency kind.
fn edges_for(kind: DependencyKind) -> (BarEdge, BarEdge) {
	match kind {
		DependencyKind::FinishToStart => (BarEdge::Right, BarEdge::Left),
		DependencyKind::StartToStart => (BarEdge::Left, BarEdge::Left),
		DependencyKind::FinishToFinish => (BarEdge::Right, BarEdge::Right),
		DependencyKind::StartToFinish => (BarEdge::Left, BarEdge::Right),
	}
}

/// Normalized unordered pair, so coverage checks ignore direction.
fn pair_key(a: &str, b: &str) -> (String, String) {
	if a <= b {
		(a.to_owned(), b.to_owned())
	} else {
		(b.to_owned(), a.to_owned())
	}
}

fn milestone_anchor(point: &MilestonePoint) -> OverlayPoint {
	OverlayPoint {
		x: point.x,
		y: point.y,
	}
}

/// Build the connector list for one overlay pass.
///
/// Output ordering is the paint order: every non-critical connector precedes
/// every critical one so the critical chain overlays the rest, and within
/// each bucket the generation order (explicit dependencies, implicit links,
/// milestone contributions, milestone requirements) is preserved.
///
/// Connectors with an unresolvable endpoint are dropped one at a time; a
/// missing bar never suppresses anything but its own arrows.
pub fn build_connectors(input: &OverlayInput) -> Vec<Connector> {
	let titles = TitleResolver::new(&input.work_item_titles, &input.milestone_titles);
	let mut normal = Vec::new();
	let mut critical = Vec::new();
	let mut covered: HashSet<(String, String)> = HashSet::new();

	// Explicit dependencies.
	for dep in &input.dependencies {
		let (Some(pred), Some(succ)) = (
			input.bars.get(&dep.predecessor_id),
			input.bars.get(&dep.successor_id),
		) else {
			debug!(
				"dropping dependency {} -> {}: endpoint bar missing",
				dep.predecessor_id, dep.successor_id
			);
			continue;
		};
		covered.insert(pair_key(&dep.predecessor_id, &dep.successor_id));

		let (from_edge, to_edge) = edges_for(dep.kind);
		let is_critical = input.critical_path.contains(&dep.predecessor_id)
			&& input.critical_path.contains(&dep.successor_id);
		let connector = Connector {
			key: format!("dep:{}->{}", dep.predecessor_id, dep.successor_id),
			role: ConnectorRole::ExplicitDependency(dep.kind),
			is_critical,
			from: bar_anchor(pred, from_edge, input.row_height),
			to: bar_anchor(succ, to_edge, input.row_height),
			endpoints: [
				LinkEndpoint::WorkItem(dep.predecessor_id.clone()),
				LinkEndpoint::WorkItem(dep.successor_id.clone()),
			],
			description: dependency_sentence(
				dep.kind,
				&dep.predecessor_id,
				&dep.successor_id,
				&titles,
			),
		};
		if is_critical {
			critical.push(connector);
		} else {
			normal.push(connector);
		}
	}

	// Implicit links along the critical-path order. An explicit dependency
	// between the pair, in either direction, takes precedence.
	for pair in input.critical_path.order.windows(2) {
		let [first, second] = pair else {
			continue;
		};
		if covered.contains(&pair_key(first, second)) {
			continue;
		}
		let (Some(from_bar), Some(to_bar)) = (input.bars.get(first), input.bars.get(second))
		else {
			continue;
		};
		critical.push(Connector {
			key: format!("cpl:{first}->{second}"),
			role: ConnectorRole::ImplicitCriticalLink,
			is_critical: true,
			from: bar_anchor(from_bar, BarEdge::Right, input.row_height),
			to: bar_anchor(to_bar, BarEdge::Left, input.row_height),
			endpoints: [
				LinkEndpoint::WorkItem(first.clone()),
				LinkEndpoint::WorkItem(second.clone()),
			],
			description: critical_link_sentence(first, second, &titles),
		});
	}

	// Milestone contributions: work item bar -> milestone point.
	for (&milestone_id, contributors) in &input.milestone_contributors {
		let Some(point) = input.milestone_points.get(&milestone_id) else {
			debug!("dropping contributions to milestone {milestone_id}: point missing");
			continue;
		};
		for work_item in contributors {
			let Some(bar) = input.bars.get(work_item) else {
				continue;
			};
			normal.push(Connector {
				key: format!("msc:{work_item}->{milestone_id}"),
				role: ConnectorRole::MilestoneContribution,
				is_critical: false,
				from: bar_anchor(bar, BarEdge::Right, input.row_height),
				to: milestone_anchor(point),
				endpoints: [
					LinkEndpoint::WorkItem(work_item.clone()),
					LinkEndpoint::Milestone(milestone_id),
				],
				description: contribution_sentence(work_item, milestone_id, &titles),
			});
		}
	}

	// Milestone requirements: milestone point -> work item bar.
	for (work_item, milestones) in &input.required_milestones {
		let Some(bar) = input.bars.get(work_item) else {
			continue;
		};
		for &milestone_id in milestones {
			let Some(point) = input.milestone_points.get(&milestone_id) else {
				continue;
			};
			normal.push(Connector {
				key: format!("msr:{milestone_id}->{work_item}"),
				role: ConnectorRole::MilestoneRequirement,
				is_critical: false,
				from: milestone_anchor(point),
				to: bar_anchor(bar, BarEdge::Left, input.row_height),
				endpoints: [
					LinkEndpoint::Milestone(milestone_id),
					LinkEndpoint::WorkItem(work_item.clone()),
				],
				description: requirement_sentence(milestone_id, work_item, &titles),
			});
		}
	}

	normal.append(&mut critical);
	normal
}
