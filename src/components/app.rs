use std::cell::RefCell;
use std::rc::Rc;

use cosmoscope::catalog::BodyId;
use cosmoscope::surface::{SurfaceEvent, ViewOptions};
use cosmoscope::view::ViewState;
use cosmoscope::zoom::ZoomIntent;
use cosmoscope::{Coordinator, ViewError, ViewMode, ViewSnapshot, ViewerConfig};
use tracing::{error, warn};
use web_sys::HtmlElement;
use yew::prelude::*;

use super::{
    chat_panel::ChatPanel,
    chrome::{Footer, Header},
    elevation_view::ElevationView,
    info_panel::InfoPanel,
    sidebar::Sidebar,
    zoom_controls::ZoomControls,
};
use crate::leaflet::LeafletSurface;

type SharedCoordinator = Rc<RefCell<Option<Coordinator<LeafletSurface>>>>;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: ViewerConfig,
}

// Runs `op` against the mounted coordinator. Before mount (or after a failed
// mount) controls are inert.
fn with_coordinator<T: Default>(
    cell: &SharedCoordinator,
    op: impl FnOnce(&mut Coordinator<LeafletSurface>) -> Result<T, ViewError>,
) -> Result<T, ViewError> {
    match cell.borrow_mut().as_mut() {
        Some(c) => op(c),
        None => Ok(T::default()),
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let map_ref = use_node_ref();
    let coordinator: SharedCoordinator = use_mut_ref(|| None);
    let snapshot = use_state(|| {
        let cfg = &props.config;
        ViewSnapshot::of(&ViewState::initial(cfg.initial_date.clone(), cfg.default_zoom), cfg.max_zoom)
    });
    // Validation and mount failures; layer failures arrive through the snapshot.
    let alert = use_state(|| None::<String>);

    // Mount: create the map, hand it to the coordinator, mirror its snapshots.
    {
        let map_ref = map_ref.clone();
        let coordinator = coordinator.clone();
        let snapshot = snapshot.clone();
        let alert = alert.clone();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let events = {
                let coordinator = coordinator.clone();
                Callback::from(move |event: SurfaceEvent| {
                    if let Ok(mut slot) = coordinator.try_borrow_mut() {
                        if let Some(c) = slot.as_mut() {
                            c.on_surface_event(event);
                        }
                    }
                })
            };
            let options = ViewOptions {
                center: config.default_center,
                zoom: config.default_zoom,
                min_zoom: config.min_zoom,
                max_zoom: config.max_zoom,
            };
            let mounted = map_ref
                .cast::<HtmlElement>()
                .ok_or_else(|| ViewError::LayerLoadFailure("map container missing".to_string()))
                .and_then(|el| LeafletSurface::create(el, options, events).map_err(ViewError::from))
                .and_then(|surface| Coordinator::new(config, surface));
            match mounted {
                Ok(mut c) => {
                    let sink = snapshot.clone();
                    c.subscribe(move |s| sink.set(s.clone()));
                    snapshot.set(c.snapshot());
                    *coordinator.borrow_mut() = Some(c);
                }
                Err(err) => {
                    error!(%err, "could not mount map view");
                    alert.set(Some(err.to_string()));
                }
            }
            move || {
                if let Some(c) = coordinator.borrow_mut().take() {
                    c.unmount();
                }
            }
        });
    }

    let report = {
        let alert = alert.clone();
        move |result: Result<(), ViewError>| match result {
            Ok(()) => alert.set(None),
            Err(err) => {
                warn!(%err, "control action rejected");
                alert.set(Some(err.to_string()));
            }
        }
    };

    let on_select_body = {
        let coordinator = coordinator.clone();
        let report = report.clone();
        Callback::from(move |id: BodyId| report(with_coordinator(&coordinator, |c| c.select_body_id(id))))
    };
    let on_select_mode = {
        let coordinator = coordinator.clone();
        let report = report.clone();
        Callback::from(move |mode: ViewMode| report(with_coordinator(&coordinator, |c| c.select_mode(mode))))
    };
    let on_select_date = {
        let coordinator = coordinator.clone();
        let report = report.clone();
        Callback::from(move |date: String| report(with_coordinator(&coordinator, |c| c.select_date(&date))))
    };
    let on_fly_to = {
        let coordinator = coordinator.clone();
        let report = report.clone();
        Callback::from(move |(lat, lng): (String, String)| {
            let result = with_coordinator(&coordinator, |c| c.fly_to(&lat, &lng).map(|_| ()));
            let ok = result.is_ok();
            report(result);
            ok
        })
    };
    let on_zoom = {
        let coordinator = coordinator.clone();
        Callback::from(move |intent: ZoomIntent| {
            let _ = with_coordinator(&coordinator, |c| {
                match intent {
                    ZoomIntent::In => c.zoom_in(),
                    ZoomIntent::Out => c.zoom_out(),
                    ZoomIntent::Reset => c.reset_zoom(),
                }
                Ok(())
            });
        })
    };
    let on_open_chat = {
        let coordinator = coordinator.clone();
        Callback::from(move |_| {
            let _ = with_coordinator(&coordinator, |c| {
                c.open_chat();
                Ok(())
            });
        })
    };
    let on_close_chat = {
        let coordinator = coordinator.clone();
        Callback::from(move |_| {
            let _ = with_coordinator(&coordinator, |c| {
                c.close_chat();
                Ok(())
            });
        })
    };
    let dismiss = {
        let coordinator = coordinator.clone();
        let alert = alert.clone();
        Callback::from(move |_| {
            alert.set(None);
            let _ = with_coordinator(&coordinator, |c| {
                c.dismiss_notice();
                Ok(())
            });
        })
    };

    let s = (*snapshot).clone();
    let message = (*alert)
        .clone()
        .or_else(|| s.notice.as_ref().map(|n| n.message().to_string()));

    html! {
        <div style="display:flex; flex-direction:column; height:100vh; width:100%; background:#111827; color:#fff;">
            <Header />
            <div style="display:flex; flex:1; min-height:0;">
                <Sidebar
                    snapshot={s.clone()}
                    on_select_body={on_select_body}
                    on_select_mode={on_select_mode}
                    on_select_date={on_select_date}
                    on_fly_to={on_fly_to}
                    on_open_chat={on_open_chat}
                />
                <main style="flex:1; position:relative; background:#000;">
                    <div ref={map_ref} id="map-surface" style="position:absolute; inset:0; z-index:0;"></div>
                    { if s.is_satellite() { html! {} } else { html! { <ElevationView snapshot={s.clone()} /> } } }
                    <ZoomControls on_zoom={on_zoom} show_reset={!s.is_satellite()} />
                    <InfoPanel snapshot={s.clone()} />
                    { if let Some(text) = message {
                        html! {
                            <div role="alert" style="position:absolute; top:16px; left:50%; transform:translateX(-50%); z-index:8; display:flex; gap:10px; align-items:center; background:#7f1d1d; border:1px solid #f85149; border-radius:8px; padding:8px 12px; font-size:13px;">
                                <span>{ format!("⚠️ {text}") }</span>
                                <button onclick={dismiss} style="background:none; border:none; color:#fff; cursor:pointer;">{"✖"}</button>
                            </div>
                        }
                    } else { html! {} } }
                    { if s.chat_open {
                        html! { <ChatPanel config={props.config.chat.clone()} on_close={on_close_chat} /> }
                    } else { html! {} } }
                </main>
            </div>
            <Footer />
        </div>
    }
}
