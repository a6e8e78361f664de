use std::collections::HashSet;
use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::Style;

use crate::components::dependency_overlay::{
	BarRect, CriticalPath, Dependency, DependencyKind, DependencyOverlay, LinkEndpoint,
	MilestonePoint, OverlayCallbacks, OverlayInput, OverlayPoint,
};

const ROW_HEIGHT: f64 = 36.0;
const BAR_HEIGHT: f64 = 22.0;
const CHART_WIDTH: f64 = 680.0;

const MILESTONE_DRY_IN: u32 = 1;

const CHART_CSS: &str = r#"
.schedule-page { font-family: sans-serif; padding: 1.5rem; }
.schedule-page .subtitle { color: #666; }
.gantt-chart { background: #1a1a2e; border-radius: 6px; margin-top: 1rem; }
.gantt-bar {
	position: absolute;
	background: #2ca02c;
	color: white;
	font-size: 11px;
	line-height: 22px;
	padding: 0 6px;
	border-radius: 3px;
	overflow: hidden;
	white-space: nowrap;
	box-sizing: border-box;
	transition: opacity 120ms ease, box-shadow 120ms ease;
}
.gantt-bar.dimmed, .gantt-milestone.dimmed { opacity: 0.25; }
.gantt-bar.highlighted { box-shadow: 0 0 0 2px rgba(255, 255, 255, 0.7); }
.gantt-milestone { position: absolute; color: #b48cff; font-size: 14px; transition: opacity 120ms ease; }
.dependency-overlay { transition: opacity 120ms ease; }
.dependency-overlay.hidden { opacity: 0; }
.dependency-connector { transition: opacity 120ms ease; outline: none; }
.dependency-connector.dimmed { opacity: 0.15; }
.connector-tooltip {
	background: rgba(20, 20, 40, 0.92);
	color: white;
	font-size: 12px;
	padding: 4px 8px;
	border-radius: 4px;
	pointer-events: none;
	max-width: 260px;
}
"#;

/// The static sample project: a small residential build.
fn work_items() -> Vec<(&'static str, &'static str, BarRect)> {
	vec![
		("site-prep", "Site preparation", BarRect { x: 10.0, width: 90.0, row_index: 0 }),
		("foundation", "Foundation pour", BarRect { x: 110.0, width: 120.0, row_index: 1 }),
		("framing", "Framing", BarRect { x: 240.0, width: 140.0, row_index: 2 }),
		("roofing", "Roofing", BarRect { x: 390.0, width: 100.0, row_index: 3 }),
		("electrical", "Electrical rough-in", BarRect { x: 400.0, width: 130.0, row_index: 4 }),
		("plumbing", "Plumbing rough-in", BarRect { x: 400.0, width: 110.0, row_index: 5 }),
		("inspection", "Final inspection", BarRect { x: 550.0, width: 90.0, row_index: 6 }),
	]
}

fn dep(pred: &str, succ: &str, kind: DependencyKind, lead_lag_days: i32) -> Dependency {
	Dependency {
		predecessor_id: pred.to_owned(),
		successor_id: succ.to_owned(),
		kind,
		lead_lag_days,
	}
}

/// Overlay input for the sample project. The roofing -> inspection hop has
/// no explicit dependency, so the overlay synthesizes an implicit link for
/// it from critical-path adjacency.
fn sample_schedule() -> OverlayInput {
	let mut input = OverlayInput {
		row_height: ROW_HEIGHT,
		..Default::default()
	};
	for (id, title, rect) in work_items() {
		input.bars.insert(id.to_owned(), rect);
		input.work_item_titles.insert(id.to_owned(), title.to_owned());
	}
	input.dependencies = vec![
		dep("site-prep", "foundation", DependencyKind::FinishToStart, 0),
		dep("foundation", "framing", DependencyKind::FinishToStart, 2),
		dep("framing", "roofing", DependencyKind::FinishToStart, 0),
		dep("electrical", "plumbing", DependencyKind::StartToStart, 0),
		dep("electrical", "inspection", DependencyKind::FinishToFinish, 0),
		dep("framing", "plumbing", DependencyKind::StartToFinish, 0),
	];
	input
		.milestone_points
		.insert(MILESTONE_DRY_IN, MilestonePoint { x: 520.0, y: 12.0 });
	input
		.milestone_titles
		.insert(MILESTONE_DRY_IN, "Dry-in".to_owned());
	input.milestone_contributors.insert(
		MILESTONE_DRY_IN,
		vec!["framing".to_owned(), "roofing".to_owned()],
	);
	input
		.required_milestones
		.insert("electrical".to_owned(), vec![MILESTONE_DRY_IN]);
	input
		.required_milestones
		.insert("plumbing".to_owned(), vec![MILESTONE_DRY_IN]);
	input.critical_path = CriticalPath::from_order(
		["site-prep", "foundation", "framing", "roofing", "inspection"]
			.into_iter()
			.map(str::to_owned)
			.collect(),
	);
	input
}

/// Sample schedule page wiring the overlay to a tooltip and bar dimming.
#[component]
pub fn Home() -> impl IntoView {
	let input = Signal::derive(sample_schedule);
	let visible = RwSignal::new(true);
	let tooltip: RwSignal<Option<(String, OverlayPoint)>> = RwSignal::new(None);
	let connected: RwSignal<HashSet<String>> = RwSignal::new(HashSet::new());

	let callbacks = OverlayCallbacks {
		hover: Some(Arc::new(
			move |ids: &HashSet<String>, description: &str, position: OverlayPoint| {
				connected.set(ids.clone());
				tooltip.set(Some((description.to_owned(), position)));
			},
		)),
		moved: Some(Arc::new(move |position: OverlayPoint| {
			tooltip.update(|tip| {
				if let Some((_, at)) = tip {
					*at = position;
				}
			});
		})),
		leave: Some(Arc::new(move || {
			connected.update(HashSet::clear);
			tooltip.set(None);
		})),
	};

	let items = work_items();
	let chart_height = items.len() as f64 * ROW_HEIGHT;
	let milestone_key = LinkEndpoint::Milestone(MILESTONE_DRY_IN).encode();

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>
			<Style>{CHART_CSS}</Style>
			<div class="schedule-page">
				<h1>"Construction Schedule"</h1>
				<p class="subtitle">
					"Hover an arrow, or tab through them, to see what links the schedule together."
				</p>
				<button on:click=move |_| visible.update(|v| *v = !*v)>
					{move || if visible.get() { "Hide dependency arrows" } else { "Show dependency arrows" }}
				</button>
				<div
					class="gantt-chart"
					style=format!("position: relative; width: {CHART_WIDTH}px; height: {chart_height}px;")
				>
					{items
						.iter()
						.map(|(id, title, rect)| {
							let top = rect.row_index as f64 * ROW_HEIGHT + (ROW_HEIGHT - BAR_HEIGHT) / 2.0;
							let style = format!(
								"left: {}px; top: {}px; width: {}px; height: {}px;",
								rect.x, top, rect.width, BAR_HEIGHT
							);
							let highlight_id = (*id).to_owned();
							let dim_id = (*id).to_owned();
							view! {
								<div
									class="gantt-bar"
									class:highlighted=move || connected.with(|ids| ids.contains(&highlight_id))
									class:dimmed=move || {
										connected.with(|ids| !ids.is_empty() && !ids.contains(&dim_id))
									}
									style=style
								>
									{*title}
								</div>
							}
						})
						.collect_view()}
					<div
						class="gantt-milestone"
						class:dimmed=move || {
							connected.with(|ids| !ids.is_empty() && !ids.contains(&milestone_key))
						}
						style="left: 513px; top: 3px;"
						title="Dry-in"
					>
						"\u{25c6}"
					</div>
					<DependencyOverlay input=input visible=visible callbacks=callbacks />
				</div>
				{move || {
					tooltip
						.get()
						.map(|(text, at)| {
							let style = format!(
								"position: fixed; left: {}px; top: {}px;",
								at.x + 14.0,
								at.y + 14.0
							);
							view! { <div class="connector-tooltip" style=style>{text}</div> }
						})
				}}
			</div>
		</ErrorBoundary>
	}
}
