mod components;
mod leaflet;

use cosmoscope::ViewerConfig;
use tracing::{info, warn};

use components::{App, AppProps};

// Reads the optional `<script id="viewer-config" type="application/json">` block.
fn load_config() -> ViewerConfig {
    let text = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("viewer-config"))
        .and_then(|el| el.text_content());
    let Some(text) = text.filter(|t| !t.trim().is_empty()) else {
        return ViewerConfig::default();
    };
    match ViewerConfig::from_json(&text) {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!(%err, "ignoring inline viewer config");
            ViewerConfig::default()
        }
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }
    let config = load_config();
    info!(date = %config.initial_date, "starting cosmoscope");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
