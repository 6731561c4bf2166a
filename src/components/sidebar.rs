use cosmoscope::catalog::{self, BodyId};
use cosmoscope::{ViewMode, ViewSnapshot};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SidebarProps {
    pub snapshot: ViewSnapshot,
    pub on_select_body: Callback<BodyId>,
    pub on_select_mode: Callback<ViewMode>,
    pub on_select_date: Callback<String>,
    /// Returns `true` when the coordinates were accepted.
    pub on_fly_to: Callback<(String, String), bool>,
    pub on_open_chat: Callback<()>,
}

const ACTIVE: &str = "background:#573482; color:#fff; transform:scale(1.05);";
const IDLE: &str = "background:#374151; color:#d1d5db;";
const BUTTON: &str = "padding:8px; border:none; border-radius:4px; font-weight:500; cursor:pointer; transition:transform 0.2s ease-in-out;";

fn choice_style(active: bool) -> String {
    format!("{} {}", BUTTON, if active { ACTIVE } else { IDLE })
}

#[function_component(Sidebar)]
pub fn sidebar(props: &SidebarProps) -> Html {
    let lat = use_state(String::new);
    let lng = use_state(String::new);
    let s = &props.snapshot;

    let body_buttons = catalog::bodies().iter().map(|b| {
        let cb = props.on_select_body.clone();
        let id = b.id;
        let onclick = Callback::from(move |_| cb.emit(id));
        html! { <button key={b.id.as_str()} {onclick} style={choice_style(s.body == b.id)}>{ b.name }</button> }
    });

    let mode_buttons = [(ViewMode::Satellite, "Satellite View"), (ViewMode::Elevation, "Topography")]
        .into_iter()
        .map(|(mode, label)| {
            let cb = props.on_select_mode.clone();
            let onclick = Callback::from(move |_| cb.emit(mode));
            html! { <button {onclick} style={choice_style(s.mode == mode)}>{ label }</button> }
        });

    let earth_tools = if s.earth_tools_enabled() {
        let on_date = {
            let cb = props.on_select_date.clone();
            Callback::from(move |e: Event| {
                let select: HtmlSelectElement = e.target_unchecked_into();
                cb.emit(select.value());
            })
        };
        let on_lat = {
            let lat = lat.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                lat.set(input.value());
            })
        };
        let on_lng = {
            let lng = lng.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                lng.set(input.value());
            })
        };
        let on_go = {
            let cb = props.on_fly_to.clone();
            let lat = lat.clone();
            let lng = lng.clone();
            Callback::from(move |_| {
                if cb.emit(((*lat).clone(), (*lng).clone())) {
                    lat.set(String::new());
                    lng.set(String::new());
                }
            })
        };
        let field = "width:50%; padding:8px; background:#374151; color:#fff; border:1px solid #573482; border-radius:6px;";
        html! {
            <div style="padding:12px; border-radius:8px; background:#573482; display:flex; flex-direction:column; gap:16px;">
                <div>
                    <label for="quickDate" style="display:block; font-size:13px; font-weight:600;">{"Select Date (Earth)"}</label>
                    <select id="quickDate" onchange={on_date} style="width:100%; padding:8px; background:#374151; color:#fff; border:1px solid #573482; border-radius:6px;">
                        <option value="" selected={s.date.is_empty()}>{"-- Choose Date --"}</option>
                        { for catalog::earth_dates().iter().map(|d| html! {
                            <option key={d.value} value={d.value} selected={s.date == d.value}>{ d.label }</option>
                        }) }
                    </select>
                </div>
                <div>
                    <label style="display:block; font-size:13px; font-weight:600;">{"Go to Coordinates"}</label>
                    <div style="display:flex; gap:8px;">
                        <input type="text" aria-label="Latitude" placeholder="Lat (41.15)" value={(*lat).clone()} oninput={on_lat} style={field} />
                        <input type="text" aria-label="Longitude" placeholder="Lng (20.16)" value={(*lng).clone()} oninput={on_lng} style={field} />
                    </div>
                    <button onclick={on_go} style="width:100%; margin-top:8px; padding:8px; background:#8663B0; color:#fff; border:none; border-radius:6px; font-weight:600; cursor:pointer;">{"Go to Location"}</button>
                </div>
            </div>
        }
    } else {
        html! {}
    };

    let open_chat = {
        let cb = props.on_open_chat.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <aside style="display:flex; flex-direction:column; width:256px; padding:16px; gap:24px; background:#1f2937; color:#fff;">
            <div>
                <h2 style="font-size:18px; margin:0 0 8px 0;">{"Celestial Bodies"}</h2>
                <div style="display:flex; flex-direction:column; gap:8px;">{ for body_buttons }</div>
            </div>
            <div>
                <h2 style="font-size:18px; margin:0 0 8px 0;">{"View Mode"}</h2>
                <div style="display:flex; flex-direction:column; gap:8px;">{ for mode_buttons }</div>
            </div>
            { earth_tools }
            <div style="margin-top:auto;">
                <h2 style="font-size:18px; margin:0 0 8px 0;">{"Assistant"}</h2>
                <button onclick={open_chat} style={format!("{} width:100%; {}", BUTTON, ACTIVE)}>{"Open AI Chatbot"}</button>
            </div>
        </aside>
    }
}
