use cosmoscope::zoom::ZoomIntent;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ZoomControlsProps {
    pub on_zoom: Callback<ZoomIntent>,
    /// Reset is only offered for the elevation image.
    pub show_reset: bool,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let zi = {
        let cb = props.on_zoom.clone();
        Callback::from(move |_| cb.emit(ZoomIntent::In))
    };
    let zo = {
        let cb = props.on_zoom.clone();
        Callback::from(move |_| cb.emit(ZoomIntent::Out))
    };
    let zr = {
        let cb = props.on_zoom.clone();
        Callback::from(move |_| cb.emit(ZoomIntent::Reset))
    };
    let button_style = "width:44px; height:44px; border-radius:50%; background:#374151; border:none; color:#fff; font-size:18px; box-shadow:0 4px 10px rgba(0,0,0,0.4); cursor:pointer;";
    html! {<div style="position:absolute; top:16px; right:16px; z-index:5; display:flex; flex-direction:column; gap:8px;">
        <button aria-label="Zoom in" onclick={zi} style={button_style}>{"➕"}</button>
        <button aria-label="Zoom out" onclick={zo} style={button_style}>{"➖"}</button>
        { if props.show_reset {
            html! { <button aria-label="Reset Zoom" onclick={zr} style={format!("{} margin-top:8px;", button_style)}>{"⟲"}</button> }
        } else { html! {} } }
    </div>}
}
