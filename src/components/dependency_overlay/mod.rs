mod builder;
mod component;
mod describe;
mod render;
mod state;
mod types;

pub use builder::build_connectors;
pub use component::DependencyOverlay;
pub use state::{HoverHandler, InteractionState, LeaveHandler, MoveHandler, OverlayCallbacks, VisualClass};
pub use types::{
	BarRect, Connector, ConnectorRole, CriticalPath, Dependency, DependencyKind, LinkEndpoint,
	MilestonePoint, OverlayColors, OverlayInput, OverlayPoint,
};
