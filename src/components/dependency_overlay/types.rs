use std::collections::{BTreeMap, HashMap, HashSet};

/// Horizontal span and grid row of a work item's bar, in chart pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
	pub x: f64,
	pub width: f64,
	pub row_index: usize,
}

/// Resolved pixel position of a milestone marker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MilestonePoint {
	pub x: f64,
	pub y: f64,
}

/// A point in overlay coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OverlayPoint {
	pub x: f64,
	pub y: f64,
}

/// Constraint type of an explicit dependency.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DependencyKind {
	FinishToStart,
	StartToStart,
	FinishToFinish,
	StartToFinish,
}

/// A schedule-declared predecessor/successor relationship.
#[derive(Clone, Debug, PartialEq)]
pub struct Dependency {
	pub predecessor_id: String,
	pub successor_id: String,
	pub kind: DependencyKind,
	pub lead_lag_days: i32,
}

/// Critical-path data computed by the external scheduler: membership for
/// criticality checks plus the order that defines adjacency.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CriticalPath {
	pub members: HashSet<String>,
	pub order: Vec<String>,
}

impl CriticalPath {
	pub fn from_order(order: Vec<String>) -> Self {
		let members = order.iter().cloned().collect();
		Self { members, order }
	}

	pub fn contains(&self, id: &str) -> bool {
		self.members.contains(id)
	}
}

/// Everything the surrounding chart supplies for one overlay pass.
///
/// Bar and title maps are only ever looked up by key; the milestone maps are
/// `BTreeMap` because they are walked when emitting connectors and the output
/// order must be stable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverlayInput {
	pub dependencies: Vec<Dependency>,
	pub bars: HashMap<String, BarRect>,
	pub row_height: f64,
	pub milestone_points: HashMap<u32, MilestonePoint>,
	pub milestone_contributors: BTreeMap<u32, Vec<String>>,
	pub required_milestones: BTreeMap<String, Vec<u32>>,
	pub work_item_titles: HashMap<String, String>,
	pub milestone_titles: HashMap<u32, String>,
	pub critical_path: CriticalPath,
}

/// One logical endpoint of a connector.
///
/// Work items and milestones live in separate id spaces; keeping them as a
/// sum type means they cannot collide internally, while [`encode`] preserves
/// the prefixed string form the highlighting consumers expect.
///
/// [`encode`]: LinkEndpoint::encode
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LinkEndpoint {
	WorkItem(String),
	Milestone(u32),
}

impl LinkEndpoint {
	/// String form shared with external highlighting consumers.
	pub fn encode(&self) -> String {
		match self {
			LinkEndpoint::WorkItem(id) => id.clone(),
			LinkEndpoint::Milestone(id) => format!("milestone:{id}"),
		}
	}
}

/// Visual/semantic role of a connector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectorRole {
	ExplicitDependency(DependencyKind),
	ImplicitCriticalLink,
	MilestoneContribution,
	MilestoneRequirement,
}

/// One renderable arrow between two endpoints, fully resolved.
///
/// Connectors are derived data: the builder recomputes the whole list
/// whenever any input changes, and `key` is stable across recomputations so
/// hover state and DOM reconciliation survive a rebuild.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
	pub key: String,
	pub role: ConnectorRole,
	pub is_critical: bool,
	pub from: OverlayPoint,
	pub to: OverlayPoint,
	/// Endpoints in `from`/`to` order.
	pub endpoints: [LinkEndpoint; 2],
	pub description: String,
}

impl Connector {
	/// Encoded identifiers of everything this connector touches.
	pub fn connected_ids(&self) -> HashSet<String> {
		self.endpoints.iter().map(LinkEndpoint::encode).collect()
	}
}

/// The three named stroke colors of the overlay.
#[derive(Clone, Debug, PartialEq)]
pub struct OverlayColors {
	pub default: String,
	pub critical: String,
	pub milestone: String,
}

impl Default for OverlayColors {
	fn default() -> Self {
		Self {
			default: "#64b4ff".into(),
			critical: "#ff5a5a".into(),
			milestone: "#b48cff".into(),
		}
	}
}
