use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header style="display:flex; align-items:center; gap:8px; padding:16px; box-shadow:0 2px 6px rgba(0,0,0,0.4); position:relative; z-index:20;">
            <span style="width:24px; color:#d1d5db;">{"☰"}</span>
            <h1 style="margin:0; font-size:20px; font-weight:700;">{"COSMOSCOPE"}</h1>
        </header>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer style="display:flex; justify-content:space-between; padding:12px; font-size:13px; color:#9ca3af; background:#212936;">
            <span>{"Data from NASA Missions"}</span>
            <span>{"© 2025 COSMO SCOPE"}</span>
        </footer>
    }
}
