// Leaflet-backed rendering surface. Leaflet itself is loaded by index.html.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::Callback;

use cosmoscope::surface::{MarkerStyle, RenderSurface, SurfaceEvent, TileLayerSpec, ViewOptions};
use cosmoscope::{LatLng, SurfaceError};

#[wasm_bindgen]
extern "C" {
    #[derive(Clone)]
    pub type LeafletMap;

    #[wasm_bindgen(catch, js_namespace = L, js_name = map)]
    fn leaflet_map(container: &HtmlElement, options: &Object) -> Result<LeafletMap, JsValue>;

    #[wasm_bindgen(method, js_name = setView)]
    fn set_view(this: &LeafletMap, center: &Array, zoom: f64);

    #[wasm_bindgen(method, js_name = setZoom)]
    fn set_zoom(this: &LeafletMap, zoom: f64);

    #[wasm_bindgen(method, js_name = flyTo)]
    fn fly_to(this: &LeafletMap, center: &Array, zoom: f64, options: &Object);

    #[wasm_bindgen(method, js_name = getZoom)]
    fn get_zoom(this: &LeafletMap) -> f64;

    #[wasm_bindgen(method, js_name = invalidateSize)]
    fn invalidate_size(this: &LeafletMap);

    #[wasm_bindgen(method, js_name = on)]
    fn on(this: &LeafletMap, event: &str, handler: &Function);

    #[wasm_bindgen(method, js_name = remove)]
    fn remove(this: &LeafletMap);
}

#[wasm_bindgen]
extern "C" {
    pub type LeafletTileLayer;

    #[wasm_bindgen(catch, js_namespace = L, js_name = tileLayer)]
    fn leaflet_tile_layer(url: &str, options: &Object) -> Result<LeafletTileLayer, JsValue>;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LeafletTileLayer, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = on)]
    fn on(this: &LeafletTileLayer, event: &str, handler: &Function);

    #[wasm_bindgen(method, js_name = remove)]
    fn remove(this: &LeafletTileLayer);
}

#[wasm_bindgen]
extern "C" {
    pub type LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    fn leaflet_marker(at: &Array, options: &Object) -> LeafletMarker;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    fn leaflet_div_icon(options: &Object) -> JsValue;

    #[wasm_bindgen(method, js_name = addTo)]
    fn add_to(this: &LeafletMarker, map: &LeafletMap);

    #[wasm_bindgen(method, js_name = remove)]
    fn remove(this: &LeafletMarker);
}

fn set(obj: &Object, key: &str, value: impl Into<JsValue>) {
    let _ = Reflect::set(obj, &JsValue::from_str(key), &value.into());
}

fn lat_lng(at: LatLng) -> Array {
    Array::of2(&JsValue::from_f64(at.lat), &JsValue::from_f64(at.lng))
}

fn js_error(err: JsValue) -> SurfaceError {
    SurfaceError(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

// Surface callbacks fire inside Leaflet calls made by the coordinator, so
// they are delivered on the next microtask instead of synchronously.
fn deliver(sink: &Callback<SurfaceEvent>, event: SurfaceEvent) {
    let sink = sink.clone();
    spawn_local(async move { sink.emit(event) });
}

pub struct TileLayerHandle {
    layer: LeafletTileLayer,
    _on_error: Closure<dyn FnMut(JsValue)>,
}

pub struct LeafletSurface {
    map: LeafletMap,
    container: HtmlElement,
    events: Callback<SurfaceEvent>,
    _on_zoom: Closure<dyn FnMut()>,
}

impl LeafletSurface {
    pub fn create(
        container: HtmlElement,
        options: ViewOptions,
        events: Callback<SurfaceEvent>,
    ) -> Result<Self, SurfaceError> {
        let opts = Object::new();
        set(&opts, "center", lat_lng(options.center));
        set(&opts, "zoom", options.zoom);
        set(&opts, "minZoom", options.min_zoom);
        set(&opts, "maxZoom", options.max_zoom);
        set(&opts, "worldCopyJump", true);
        set(&opts, "zoomControl", false);
        let map = leaflet_map(&container, &opts).map_err(js_error)?;

        let on_zoom = {
            let map = map.clone();
            let events = events.clone();
            Closure::wrap(Box::new(move || {
                let level = map.get_zoom().round().clamp(0.0, u8::MAX as f64) as u8;
                deliver(&events, SurfaceEvent::ZoomChanged(level));
            }) as Box<dyn FnMut()>)
        };
        map.on("zoomend", on_zoom.as_ref().unchecked_ref());

        Ok(Self { map, container, events, _on_zoom: on_zoom })
    }
}

impl RenderSurface for LeafletSurface {
    type Layer = TileLayerHandle;
    type Marker = LeafletMarker;

    fn create_layer(&mut self, spec: &TileLayerSpec) -> Result<Self::Layer, SurfaceError> {
        let opts = Object::new();
        set(&opts, "attribution", spec.attribution);
        set(&opts, "tileSize", spec.tile_size);
        let [[south, west], [north, east]] = spec.bounds;
        set(
            &opts,
            "bounds",
            Array::of2(&lat_lng(LatLng::new(south, west)), &lat_lng(LatLng::new(north, east))),
        );
        let layer = leaflet_tile_layer(&spec.url, &opts).map_err(js_error)?;

        let on_error = {
            let events = self.events.clone();
            let generation = spec.generation;
            Closure::wrap(Box::new(move |ev: JsValue| {
                let url = Reflect::get(&ev, &JsValue::from_str("tile"))
                    .and_then(|tile| Reflect::get(&tile, &JsValue::from_str("src")))
                    .ok()
                    .and_then(|src| src.as_string())
                    .unwrap_or_default();
                deliver(&events, SurfaceEvent::TileError { generation, url });
            }) as Box<dyn FnMut(JsValue)>)
        };
        layer.on("tileerror", on_error.as_ref().unchecked_ref());
        Ok(TileLayerHandle { layer, _on_error: on_error })
    }

    fn attach_layer(&mut self, layer: &Self::Layer) {
        layer.layer.add_to(&self.map);
    }

    fn detach_layer(&mut self, layer: Self::Layer) {
        layer.layer.remove();
    }

    fn set_viewport(&mut self, center: LatLng, zoom: u8) {
        self.map.set_view(&lat_lng(center), zoom as f64);
    }

    fn set_zoom(&mut self, zoom: u8) {
        self.map.set_zoom(zoom as f64);
    }

    fn animate_to(&mut self, center: LatLng, zoom: u8, duration_secs: f64) {
        let opts = Object::new();
        set(&opts, "animate", true);
        set(&opts, "duration", duration_secs);
        self.map.fly_to(&lat_lng(center), zoom as f64, &opts);
    }

    fn place_marker(&mut self, at: LatLng, style: &MarkerStyle) -> Self::Marker {
        let half = style.size_px / 2;
        let icon_opts = Object::new();
        set(&icon_opts, "className", "custom-marker");
        set(
            &icon_opts,
            "html",
            format!(
                "<div style=\"background:{};width:{}px;height:{}px;border-radius:50%;border:2px solid white;box-shadow:0 0 8px rgba(0,0,0,0.5);\"></div>",
                style.color, style.size_px, style.size_px
            ),
        );
        set(&icon_opts, "iconSize", Array::of2(&style.size_px.into(), &style.size_px.into()));
        set(&icon_opts, "iconAnchor", Array::of2(&half.into(), &half.into()));

        let opts = Object::new();
        set(&opts, "icon", leaflet_div_icon(&icon_opts));
        let marker = leaflet_marker(&lat_lng(at), &opts);
        marker.add_to(&self.map);
        marker
    }

    fn remove_marker(&mut self, marker: Self::Marker) {
        marker.remove();
    }

    fn set_visible(&mut self, visible: bool) {
        let _ = self
            .container
            .style()
            .set_property("display", if visible { "block" } else { "none" });
        if visible {
            self.map.invalidate_size();
        }
    }

    fn destroy(&mut self) {
        self.map.remove();
    }
}
