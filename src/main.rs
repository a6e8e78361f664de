//! Binary entry point for the WASM bundle.

use gantt_overlay_canvas::App;

fn main() {
	// set up logging
	gantt_overlay_canvas::init_logging();

	leptos::mount::mount_to_body(App)
}
