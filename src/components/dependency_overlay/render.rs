//! Pure helpers turning connectors into SVG-ready attribute values.

use super::types::{Connector, ConnectorRole, OverlayColors, OverlayPoint};

/// Minimum horizontal pull of the curve control points, in pixels.
const CURVE_REACH: f64 = 24.0;

/// Cubic Bezier between two anchors with horizontal tangents, so a connector
/// leaves and enters bar edges flat regardless of how many rows it crosses.
pub fn connector_path(from: OverlayPoint, to: OverlayPoint) -> String {
	let reach = ((to.x - from.x).abs() / 2.0).max(CURVE_REACH);
	format!(
		"M {} {} C {} {}, {} {}, {} {}",
		from.x,
		from.y,
		from.x + reach,
		from.y,
		to.x - reach,
		to.y,
		to.x,
		to.y
	)
}

/// Stroke color under the three-color config. Criticality wins over the
/// milestone tint.
pub fn stroke_color<'a>(connector: &Connector, colors: &'a OverlayColors) -> &'a str {
	if connector.is_critical {
		return &colors.critical;
	}
	match connector.role {
		ConnectorRole::MilestoneContribution | ConnectorRole::MilestoneRequirement => {
			&colors.milestone
		}
		_ => &colors.default,
	}
}

pub fn stroke_width(connector: &Connector) -> f64 {
	if connector.is_critical { 2.5 } else { 1.5 }
}

/// Arrowhead marker reference matching the stroke color.
pub fn marker_url(connector: &Connector) -> &'static str {
	if connector.is_critical {
		return "url(#arrow-critical)";
	}
	match connector.role {
		ConnectorRole::MilestoneContribution | ConnectorRole::MilestoneRequirement => {
			"url(#arrow-milestone)"
		}
		_ => "url(#arrow-default)",
	}
}

/// Glow filter reference; only critical connectors carry it.
pub fn glow_filter(connector: &Connector) -> Option<&'static str> {
	connector.is_critical.then_some("url(#connector-glow)")
}

/// Sequential-focus participation of the overlay's connectors.
pub fn tab_index(visible: bool) -> i32 {
	if visible { 0 } else { -1 }
}

/// Value of the container's `aria-hidden` attribute; absent while visible.
pub fn aria_hidden(visible: bool) -> Option<&'static str> {
	(!visible).then_some("true")
}

/// Synthesized hover position for the keyboard path: the center of the
/// focused element's bounding box.
pub fn focus_center(left: f64, top: f64, width: f64, height: f64) -> OverlayPoint {
	OverlayPoint {
		x: left + width / 2.0,
		y: top + height / 2.0,
	}
}

/// Static `<defs>` content for one overlay: an arrowhead per configured
/// color plus the glow filter used by critical connectors.
pub fn overlay_defs(colors: &OverlayColors) -> String {
	let arrow = |id: &str, color: &str| {
		format!(
			concat!(
				"<marker id=\"{id}\" viewBox=\"0 0 8 8\" refX=\"7\" refY=\"4\" ",
				"markerWidth=\"8\" markerHeight=\"8\" orient=\"auto-start-reverse\">",
				"<path d=\"M 0 0 L 8 4 L 0 8 z\" fill=\"{color}\"/></marker>"
			),
			id = id,
			color = color,
		)
	};
	format!(
		concat!(
			"{}{}{}",
			"<filter id=\"connector-glow\" x=\"-50%\" y=\"-50%\" width=\"200%\" height=\"200%\">",
			"<feGaussianBlur in=\"SourceGraphic\" stdDeviation=\"2.5\" result=\"blur\"/>",
			"<feMerge><feMergeNode in=\"blur\"/><feMergeNode in=\"SourceGraphic\"/></feMerge>",
			"</filter>"
		),
		arrow("arrow-default", &colors.default),
		arrow("arrow-critical", &colors.critical),
		arrow("arrow-milestone", &colors.milestone),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::dependency_overlay::types::{DependencyKind, LinkEndpoint};

	fn connector(role: ConnectorRole, is_critical: bool) -> Connector {
		Connector {
			key: "k".to_owned(),
			role,
			is_critical,
			from: OverlayPoint { x: 0.0, y: 10.0 },
			to: OverlayPoint { x: 100.0, y: 50.0 },
			endpoints: [
				LinkEndpoint::WorkItem("a".to_owned()),
				LinkEndpoint::WorkItem("b".to_owned()),
			],
			description: String::new(),
		}
	}

	#[test]
	fn path_runs_edge_to_edge_with_horizontal_tangents() {
		let path = connector_path(
			OverlayPoint { x: 0.0, y: 10.0 },
			OverlayPoint { x: 100.0, y: 50.0 },
		);
		assert_eq!(path, "M 0 10 C 50 10, 50 50, 100 50");
	}

	#[test]
	fn short_hops_keep_a_minimum_reach() {
		let path = connector_path(
			OverlayPoint { x: 0.0, y: 0.0 },
			OverlayPoint { x: 10.0, y: 30.0 },
		);
		assert_eq!(path, "M 0 0 C 24 0, -14 30, 10 30");
	}

	#[test]
	fn focus_center_is_the_middle_of_the_bounding_box() {
		let center = focus_center(100.0, 40.0, 200.0, 20.0);
		assert_eq!(center, OverlayPoint { x: 200.0, y: 50.0 });
	}

	#[test]
	fn visibility_drives_tab_order_and_aria_hidden() {
		assert_eq!(tab_index(true), 0);
		assert_eq!(tab_index(false), -1);
		assert_eq!(aria_hidden(true), None);
		assert_eq!(aria_hidden(false), Some("true"));
	}

	#[test]
	fn criticality_wins_color_and_glow() {
		let colors = OverlayColors::default();
		let critical = connector(ConnectorRole::ImplicitCriticalLink, true);
		assert_eq!(stroke_color(&critical, &colors), colors.critical);
		assert_eq!(glow_filter(&critical), Some("url(#connector-glow)"));
		assert_eq!(marker_url(&critical), "url(#arrow-critical)");

		let milestone = connector(ConnectorRole::MilestoneContribution, false);
		assert_eq!(stroke_color(&milestone, &colors), colors.milestone);
		assert_eq!(glow_filter(&milestone), None);

		let plain = connector(
			ConnectorRole::ExplicitDependency(DependencyKind::FinishToStart),
			false,
		);
		assert_eq!(stroke_color(&plain, &colors), colors.default);
		assert_eq!(marker_url(&plain), "url(#arrow-default)");
	}

	#[test]
	fn defs_carry_every_marker_and_the_glow_filter() {
		let defs = overlay_defs(&OverlayColors::default());
		for id in ["arrow-default", "arrow-critical", "arrow-milestone", "connector-glow"] {
			assert!(defs.contains(id), "{id}");
		}
	}
}
