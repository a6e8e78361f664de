use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, FocusEvent, MouseEvent};

use super::builder::build_connectors;
use super::render;
use super::state::{InteractionState, OverlayCallbacks};
use super::types::{Connector, OverlayColors, OverlayInput, OverlayPoint};

fn pointer_position(ev: &MouseEvent) -> OverlayPoint {
	OverlayPoint {
		x: ev.client_x() as f64,
		y: ev.client_y() as f64,
	}
}

/// Keyboard path: synthesize the hover position from the focused element's
/// bounding box. Bails quietly when the event carries no element target.
fn focus_position(ev: &FocusEvent) -> Option<OverlayPoint> {
	let element: Element = ev.target()?.dyn_into().ok()?;
	let rect = element.get_bounding_client_rect();
	Some(render::focus_center(
		rect.left(),
		rect.top(),
		rect.width(),
		rect.height(),
	))
}

/// Dependency-arrow overlay for a Gantt chart.
///
/// Recomputes its connector list whenever `input` changes and renders one
/// focusable, labeled `<path>` per connector. When nothing is drawable the
/// component renders no container at all, which is the "no data" signal to
/// the surrounding chart. Pointer and keyboard events funnel into a single
/// hover state machine whose transitions are reported through `callbacks`.
#[component]
pub fn DependencyOverlay(
	#[prop(into)] input: Signal<OverlayInput>,
	#[prop(into, default = Signal::stored(true))] visible: Signal<bool>,
	#[prop(optional)] colors: OverlayColors,
	#[prop(optional)] callbacks: OverlayCallbacks,
) -> impl IntoView {
	let connectors = Memo::new(move |_| input.with(|i| build_connectors(i)));
	let interaction = RwSignal::new(InteractionState::new(callbacks));
	let defs = render::overlay_defs(&colors);

	move || {
		let list = connectors.get();
		if list.is_empty() {
			return None;
		}
		let defs = defs.clone();
		Some(view! {
			<svg
				class="dependency-overlay"
				class:hidden=move || !visible.get()
				aria-hidden=move || render::aria_hidden(visible.get())
				style="position: absolute; inset: 0; width: 100%; height: 100%; overflow: visible; pointer-events: none;"
			>
				<defs inner_html=defs></defs>
				{list
					.into_iter()
					.map(|connector| connector_view(connector, &colors, interaction, visible))
					.collect_view()}
			</svg>
		})
	}
}

/// One focusable, labeled connector graphic wired into the hover machine.
fn connector_view(
	connector: Connector,
	colors: &OverlayColors,
	interaction: RwSignal<InteractionState>,
	visible: Signal<bool>,
) -> impl IntoView + use<> {
	let path = render::connector_path(connector.from, connector.to);
	let stroke = render::stroke_color(&connector, colors).to_owned();
	let width = render::stroke_width(&connector);
	let marker = render::marker_url(&connector);
	let glow = render::glow_filter(&connector);
	let label = connector.description.clone();
	let key = connector.key.clone();

	let enter_connector = connector.clone();
	let on_mouseenter = move |ev: MouseEvent| {
		interaction.update(|state| state.enter(&enter_connector, pointer_position(&ev)));
	};
	let on_mousemove = move |ev: MouseEvent| {
		interaction.with_untracked(|state| state.pointer_move(pointer_position(&ev)));
	};
	let on_mouseleave = move |_: MouseEvent| {
		interaction.update(InteractionState::leave);
	};
	let focus_connector = connector;
	let on_focus = move |ev: FocusEvent| {
		let Some(position) = focus_position(&ev) else {
			return;
		};
		interaction.update(|state| state.enter(&focus_connector, position));
	};
	let on_blur = move |_: FocusEvent| {
		interaction.update(InteractionState::leave);
	};

	let class = move || {
		interaction.with(|state| format!("dependency-connector {}", state.class_for(&key).as_class()))
	};

	view! {
		<path
			d=path
			class=class
			fill="none"
			stroke=stroke
			stroke-width=width
			stroke-linecap="round"
			marker-end=marker
			filter=glow
			role="graphics-symbol"
			aria-label=label
			tabindex=move || render::tab_index(visible.get())
			style="pointer-events: visibleStroke;"
			on:mouseenter=on_mouseenter
			on:mousemove=on_mousemove
			on:mouseleave=on_mouseleave
			on:focus=on_focus
			on:blur=on_blur
		/>
	}
}
