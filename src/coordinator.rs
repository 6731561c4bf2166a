//! The single owner of view state.
//!
//! Every control in the UI talks to [`Coordinator`]; it decides which tile
//! layer is attached, which zoom model is live, and where the fly-to marker
//! sits. Each operation applies all of its side effects to the surface before
//! returning and then notifies observers once, so no caller ever sees a
//! half-applied transition.

use tracing::{debug, info, warn};

use crate::catalog::{self, BodyId};
use crate::config::ViewerConfig;
use crate::coords::{self, LatLng};
use crate::error::ViewError;
use crate::layer::{LayerGeneration, LayerManager, Viewport};
use crate::marker::MarkerManager;
use crate::surface::{RenderSurface, SurfaceEvent};
use crate::view::{Notice, ViewMode, ViewSnapshot, ViewState, ZoomState};
use crate::zoom::{SurfaceZoom, ZoomIntent, ZoomModel};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&ViewSnapshot)>;

pub struct Coordinator<S: RenderSurface> {
    config: ViewerConfig,
    zoom_model: ZoomModel,
    surface: S,
    state: ViewState,
    layers: LayerManager<S::Layer>,
    markers: MarkerManager<S::Marker>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    published: Option<ViewSnapshot>,
}

impl<S: RenderSurface> Coordinator<S> {
    /// Mounts the view: Earth, satellite imagery for the configured date, global view.
    pub fn new(config: ViewerConfig, surface: S) -> Result<Self, ViewError> {
        let state = ViewState::initial(config.initial_date.clone(), config.default_zoom);
        let mut coordinator = Self {
            zoom_model: ZoomModel::from_config(&config),
            config,
            surface,
            state,
            layers: LayerManager::new(),
            markers: MarkerManager::new(),
            observers: Vec::new(),
            next_subscription: 0,
            published: None,
        };
        let home = coordinator.home();
        let date = coordinator.state.date.clone();
        coordinator
            .layers
            .swap_to(&mut coordinator.surface, BodyId::Earth, &date, home)?;
        info!(date = %date, "view mounted");
        Ok(coordinator)
    }

    fn home(&self) -> Viewport {
        Viewport::Recenter {
            center: self.config.default_center,
            zoom: self.config.default_zoom,
        }
    }

    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn live_layer(&self) -> Option<LayerGeneration> {
        self.layers.live()
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::of(&self.state, self.config.max_zoom)
    }

    pub fn zoom_readout_text(&self) -> String {
        self.state.zoom.readout(self.config.max_zoom)
    }

    pub fn date_info_text(&self) -> String {
        self.state.date_info()
    }

    pub fn subscribe(&mut self, observer: impl Fn(&ViewSnapshot) + 'static) -> SubscriptionId {
        self.next_subscription += 1;
        let id = SubscriptionId(self.next_subscription);
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sid, _)| *sid != id);
        self.observers.len() != before
    }

    fn publish(&mut self) {
        let snapshot = self.snapshot();
        if self.published.as_ref() == Some(&snapshot) {
            return;
        }
        for (_, observer) in &self.observers {
            observer(&snapshot);
        }
        self.published = Some(snapshot);
    }

    /// Selects a body by its catalog id, e.g. `"mars"`.
    pub fn select_body(&mut self, id: &str) -> Result<(), ViewError> {
        let id: BodyId = id.parse().inspect_err(|err| warn!(%err, "rejected body selection"))?;
        self.select_body_id(id)
    }

    pub fn select_body_id(&mut self, id: BodyId) -> Result<(), ViewError> {
        if id == self.state.body {
            return Ok(());
        }
        match self.state.mode() {
            ViewMode::Satellite => {
                let home = self.home();
                self.layers
                    .swap_to(&mut self.surface, id, &self.state.date, home)?;
                self.state.zoom = ZoomState::Tile(self.config.default_zoom);
            }
            ViewMode::Elevation => self.state.zoom = ZoomState::Scale(1.0),
        }
        self.markers.clear(&mut self.surface);
        self.state.marker = None;
        self.state.notice = None;
        self.state.body = id;
        debug!(body = %id, mode = %self.state.mode(), "body selected");
        self.publish();
        Ok(())
    }

    pub fn select_mode(&mut self, mode: ViewMode) -> Result<(), ViewError> {
        if mode == self.state.mode() {
            return Ok(());
        }
        match mode {
            ViewMode::Elevation => {
                self.layers.release(&mut self.surface);
                self.surface.set_visible(false);
                self.state.zoom = ZoomState::Scale(1.0);
            }
            ViewMode::Satellite => {
                self.surface.set_visible(true);
                let home = self.home();
                if let Err(err) =
                    self.layers
                        .swap_to(&mut self.surface, self.state.body, &self.state.date, home)
                {
                    self.surface.set_visible(false);
                    return Err(err.into());
                }
                self.state.zoom = ZoomState::Tile(self.config.default_zoom);
            }
        }
        self.state.notice = None;
        debug!(%mode, body = %self.state.body, "mode selected");
        self.publish();
        Ok(())
    }

    /// Changes the Earth imagery date, keeping the current pan and zoom.
    ///
    /// For other bodies the date is stored but has no visible effect. The
    /// empty placeholder value is ignored.
    pub fn select_date(&mut self, date: &str) -> Result<(), ViewError> {
        let date = date.trim();
        if date.is_empty() || date == self.state.date {
            return Ok(());
        }
        if self.state.body == BodyId::Earth && self.state.mode() == ViewMode::Satellite {
            self.layers
                .swap_to(&mut self.surface, BodyId::Earth, date, Viewport::Preserve)?;
            self.state.notice = None;
        }
        self.state.date = date.to_string();
        debug!(date, body = %self.state.body, "date selected");
        self.publish();
        Ok(())
    }

    pub fn zoom_in(&mut self) {
        self.zoom(ZoomIntent::In);
    }

    pub fn zoom_out(&mut self) {
        self.zoom(ZoomIntent::Out);
    }

    pub fn reset_zoom(&mut self) {
        self.zoom(ZoomIntent::Reset);
    }

    fn zoom(&mut self, intent: ZoomIntent) {
        let (next, effect) = self.zoom_model.apply(self.state.zoom, intent);
        match effect {
            SurfaceZoom::None => {}
            SurfaceZoom::SetLevel(level) => self.surface.set_zoom(level),
            SurfaceZoom::Recenter => self
                .surface
                .set_viewport(self.config.default_center, self.config.default_zoom),
        }
        self.state.zoom = next;
        self.publish();
    }

    /// Flies to typed-in coordinates and drops the marker there.
    pub fn fly_to(&mut self, lat_text: &str, lng_text: &str) -> Result<LatLng, ViewError> {
        if self.state.body != BodyId::Earth || self.state.mode() != ViewMode::Satellite {
            return Err(ViewError::FlyToUnavailable {
                body: self.state.body,
                mode: self.state.mode(),
            });
        }
        let at = coords::validate(lat_text, lng_text).inspect_err(|err| debug!(%err, "fly-to rejected"))?;
        self.surface
            .animate_to(at, self.config.fly_to_zoom, self.config.fly_to_duration_secs);
        self.markers.place(&mut self.surface, at);
        self.state.marker = self.markers.position();
        self.state.zoom = ZoomState::Tile(self.config.fly_to_zoom);
        info!(lat = at.lat, lng = at.lng, "flying to location");
        self.publish();
        Ok(at)
    }

    /// Feeds back a notification raised by the rendering surface.
    ///
    /// Returns `false` when the event was ignored (wrong mode or stale layer).
    pub fn on_surface_event(&mut self, event: SurfaceEvent) -> bool {
        match event {
            SurfaceEvent::ZoomChanged(level) => {
                if self.state.mode() != ViewMode::Satellite {
                    return false;
                }
                self.state.zoom = ZoomState::Tile(self.zoom_model.clamp_level(level));
            }
            SurfaceEvent::TileError { generation, url } => {
                if self.layers.live() != Some(generation) {
                    debug!(%generation, "ignoring tile error from superseded layer");
                    return false;
                }
                if matches!(&self.state.notice, Some(Notice::LayerLoadFailure { generation: g, .. }) if *g == generation)
                {
                    return true;
                }
                let name = catalog::body(self.state.body).name;
                warn!(%generation, %url, "tile load failed");
                self.state.notice = Some(Notice::LayerLoadFailure {
                    generation,
                    message: format!("Some {name} imagery tiles could not be loaded. Re-select the view to retry."),
                });
            }
        }
        self.publish();
        true
    }

    pub fn dismiss_notice(&mut self) {
        self.state.notice = None;
        self.publish();
    }

    pub fn open_chat(&mut self) {
        self.state.chat_open = true;
        self.publish();
    }

    pub fn close_chat(&mut self) {
        self.state.chat_open = false;
        self.publish();
    }

    pub fn toggle_chat(&mut self) {
        self.state.chat_open = !self.state.chat_open;
        self.publish();
    }

    /// Releases the layer and marker, destroys the surface and hands it back.
    pub fn unmount(mut self) -> S {
        self.markers.clear(&mut self.surface);
        self.layers.release(&mut self.surface);
        self.surface.destroy();
        self.observers.clear();
        info!("view unmounted");
        self.surface
    }
}
