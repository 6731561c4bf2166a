use cosmoscope::ViewSnapshot;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct InfoPanelProps {
    pub snapshot: ViewSnapshot,
}

#[function_component(InfoPanel)]
pub fn info_panel(props: &InfoPanelProps) -> Html {
    let s = &props.snapshot;
    let body = s.descriptor();
    html! {
        <div style="position:absolute; bottom:16px; left:16px; z-index:5; background:rgba(31,41,55,0.9); border-radius:8px; padding:10px 14px; font-size:14px; display:flex; flex-direction:column; gap:4px;">
            <div>{ format!("{} {}", body.icon, body.name) }</div>
            <div>{ format!("🛰️ {}", body.tile_label) }</div>
            <div>{ format!("📅 {}", s.date_info) }</div>
            <div style="font-variant-numeric:tabular-nums;">{ format!("🔎 {}", s.zoom_text) }</div>
        </div>
    }
}
