//! Hover/focus state shared by the pointer and keyboard adapters.

use std::collections::HashSet;
use std::sync::Arc;

use super::types::{Connector, OverlayPoint};

/// Reaction to a connector becoming hovered: the encoded ids it touches, its
/// description, and where the tooltip should appear.
pub type HoverHandler = Arc<dyn Fn(&HashSet<String>, &str, OverlayPoint) + Send + Sync>;
/// Reaction to pointer tracking while a connector stays hovered.
pub type MoveHandler = Arc<dyn Fn(OverlayPoint) + Send + Sync>;
/// Reaction to the hover ending.
pub type LeaveHandler = Arc<dyn Fn() + Send + Sync>;

/// External consumers of hover transitions. Every handler is optional; an
/// absent handler turns the corresponding notification into a no-op.
#[derive(Clone, Default)]
pub struct OverlayCallbacks {
	pub hover: Option<HoverHandler>,
	pub moved: Option<MoveHandler>,
	pub leave: Option<LeaveHandler>,
}

/// Visual treatment of one connector under the current hover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualClass {
	Hovered,
	Dimmed,
	Neutral,
}

impl VisualClass {
	pub fn as_class(self) -> &'static str {
		match self {
			VisualClass::Hovered => "hovered",
			VisualClass::Dimmed => "dimmed",
			VisualClass::Neutral => "neutral",
		}
	}
}

/// Two-state machine (idle, hovered) remembering which connector, if any,
/// currently holds the hover. Pointer enter/leave and keyboard focus/blur
/// drive the same transitions, so there is a single source of truth for
/// "what is hovered" no matter which input produced it.
#[derive(Clone, Default)]
pub struct InteractionState {
	hovered: Option<String>,
	callbacks: OverlayCallbacks,
}

impl InteractionState {
	pub fn new(callbacks: OverlayCallbacks) -> Self {
		Self {
			hovered: None,
			callbacks,
		}
	}

	pub fn hovered_key(&self) -> Option<&str> {
		self.hovered.as_deref()
	}

	/// The pointer entered `connector`, or keyboard focus landed on it. A new
	/// enter simply supersedes any previous hover.
	pub fn enter(&mut self, connector: &Connector, position: OverlayPoint) {
		self.hovered = Some(connector.key.clone());
		if let Some(hover) = &self.callbacks.hover {
			hover(
				&connector.connected_ids(),
				&connector.description,
				position,
			);
		}
	}

	/// Pointer tracking. Forwarded only while a connector is hovered; O(1),
	/// no connector lookup.
	pub fn pointer_move(&self, position: OverlayPoint) {
		if self.hovered.is_none() {
			return;
		}
		if let Some(moved) = &self.callbacks.moved {
			moved(position);
		}
	}

	/// The pointer left, or focus blurred.
	pub fn leave(&mut self) {
		self.hovered = None;
		if let Some(leave) = &self.callbacks.leave {
			leave();
		}
	}

	/// Visual class of the connector with `key` under the current state.
	pub fn class_for(&self, key: &str) -> VisualClass {
		match self.hovered.as_deref() {
			Some(hovered) if hovered == key => VisualClass::Hovered,
			Some(_) => VisualClass::Dimmed,
			None => VisualClass::Neutral,
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::components::dependency_overlay::builder::build_connectors;
	use crate::components::dependency_overlay::types::{
		BarRect, Dependency, DependencyKind, OverlayInput,
	};

	fn connector(key: &str) -> Connector {
		use crate::components::dependency_overlay::types::{ConnectorRole, LinkEndpoint};
		Connector {
			key: key.to_owned(),
			role: ConnectorRole::ImplicitCriticalLink,
			is_critical: true,
			from: OverlayPoint::default(),
			to: OverlayPoint::default(),
			endpoints: [
				LinkEndpoint::WorkItem("a".to_owned()),
				LinkEndpoint::WorkItem("b".to_owned()),
			],
			description: "a and b are consecutive on the critical path".to_owned(),
		}
	}

	#[test]
	fn enter_marks_hovered_and_dims_the_rest() {
		let mut state = InteractionState::default();
		state.enter(&connector("one"), OverlayPoint::default());
		assert_eq!(state.class_for("one"), VisualClass::Hovered);
		assert_eq!(state.class_for("two"), VisualClass::Dimmed);
	}

	#[test]
	fn leave_returns_every_connector_to_neutral() {
		let mut state = InteractionState::default();
		state.enter(&connector("one"), OverlayPoint::default());
		state.leave();
		assert_eq!(state.class_for("one"), VisualClass::Neutral);
		assert_eq!(state.class_for("two"), VisualClass::Neutral);
		assert!(state.hovered_key().is_none());
	}

	#[test]
	fn new_enter_supersedes_previous_hover() {
		let mut state = InteractionState::default();
		state.enter(&connector("one"), OverlayPoint::default());
		state.enter(&connector("two"), OverlayPoint::default());
		assert_eq!(state.class_for("one"), VisualClass::Dimmed);
		assert_eq!(state.class_for("two"), VisualClass::Hovered);
	}

	#[test]
	fn transitions_without_callbacks_are_no_ops() {
		let mut state = InteractionState::default();
		state.enter(&connector("one"), OverlayPoint { x: 1.0, y: 2.0 });
		state.pointer_move(OverlayPoint { x: 3.0, y: 4.0 });
		state.leave();
	}

	#[test]
	fn hovering_a_built_connector_reports_both_endpoint_ids() {
		let mut input = OverlayInput {
			row_height: 40.0,
			..Default::default()
		};
		input.bars.insert(
			"a".to_owned(),
			BarRect {
				x: 0.0,
				width: 100.0,
				row_index: 0,
			},
		);
		input.bars.insert(
			"b".to_owned(),
			BarRect {
				x: 120.0,
				width: 80.0,
				row_index: 1,
			},
		);
		input.dependencies = vec![Dependency {
			predecessor_id: "a".to_owned(),
			successor_id: "b".to_owned(),
			kind: DependencyKind::FinishToStart,
			lead_lag_days: 0,
		}];
		let connectors = build_connectors(&input);
		assert_eq!(connectors.len(), 1);

		let seen: Arc<Mutex<Option<HashSet<String>>>> = Arc::new(Mutex::new(None));
		let sink = seen.clone();
		let mut state = InteractionState::new(OverlayCallbacks {
			hover: Some(Arc::new(move |ids, _, _| {
				*sink.lock().unwrap() = Some(ids.clone());
			})),
			..Default::default()
		});
		state.enter(&connectors[0], OverlayPoint::default());

		let ids = seen.lock().unwrap().clone().unwrap();
		let expected: HashSet<String> = ["a".to_owned(), "b".to_owned()].into();
		assert_eq!(ids, expected);
	}

	#[test]
	fn move_is_forwarded_only_while_hovered() {
		let positions: Arc<Mutex<Vec<OverlayPoint>>> = Arc::new(Mutex::new(Vec::new()));
		let sink = positions.clone();
		let mut state = InteractionState::new(OverlayCallbacks {
			moved: Some(Arc::new(move |position| {
				sink.lock().unwrap().push(position);
			})),
			..Default::default()
		});

		state.pointer_move(OverlayPoint { x: 1.0, y: 1.0 });
		assert!(positions.lock().unwrap().is_empty());

		state.enter(&connector("one"), OverlayPoint::default());
		state.pointer_move(OverlayPoint { x: 5.0, y: 6.0 });
		assert_eq!(
			*positions.lock().unwrap(),
			vec![OverlayPoint { x: 5.0, y: 6.0 }]
		);

		state.leave();
		state.pointer_move(OverlayPoint { x: 9.0, y: 9.0 });
		assert_eq!(positions.lock().unwrap().len(), 1);
	}

	#[test]
	fn leave_notifies_external_consumer() {
		let left = Arc::new(Mutex::new(0u32));
		let sink = left.clone();
		let mut state = InteractionState::new(OverlayCallbacks {
			leave: Some(Arc::new(move || {
				*sink.lock().unwrap() += 1;
			})),
			..Default::default()
		});
		state.enter(&connector("one"), OverlayPoint::default());
		state.leave();
		assert_eq!(*left.lock().unwrap(), 1);
	}
}
