//! The seam between the coordinator and whatever actually draws the map.

use crate::coords::LatLng;
use crate::error::SurfaceError;
use crate::layer::LayerGeneration;

/// Options used when the map view is first created.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewOptions {
    pub center: LatLng,
    pub zoom: u8,
    pub min_zoom: u8,
    pub max_zoom: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TileLayerSpec {
    pub generation: LayerGeneration,
    /// Resolved template with `{z}/{y}/{x}` placeholders.
    pub url: String,
    pub attribution: &'static str,
    pub tile_size: u32,
    pub bounds: [[f64; 2]; 2],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub size_px: u32,
}

impl MarkerStyle {
    /// Red dot used for fly-to targets.
    pub const FLY_TO: MarkerStyle = MarkerStyle { color: "#FF4444", size_px: 18 };
}

/// Notifications raised by the surface itself.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceEvent {
    ZoomChanged(u8),
    TileError { generation: LayerGeneration, url: String },
}

pub trait RenderSurface {
    type Layer;
    type Marker;

    /// Builds a layer without attaching it.
    fn create_layer(&mut self, spec: &TileLayerSpec) -> Result<Self::Layer, SurfaceError>;
    fn attach_layer(&mut self, layer: &Self::Layer);
    /// Detaches and releases the layer.
    fn detach_layer(&mut self, layer: Self::Layer);

    fn set_viewport(&mut self, center: LatLng, zoom: u8);
    fn set_zoom(&mut self, zoom: u8);
    fn animate_to(&mut self, center: LatLng, zoom: u8, duration_secs: f64);

    fn place_marker(&mut self, at: LatLng, style: &MarkerStyle) -> Self::Marker;
    fn remove_marker(&mut self, marker: Self::Marker);

    /// Shows or hides the map region; hidden while the elevation image covers it.
    fn set_visible(&mut self, visible: bool);
    fn destroy(&mut self);
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    pub enum Call {
        Create(LayerGeneration),
        Attach(LayerGeneration),
        Detach(LayerGeneration),
        Viewport(LatLng, u8),
        Zoom(u8),
        Animate(LatLng, u8, f64),
        PlaceMarker(u32, LatLng),
        RemoveMarker(u32),
        Visible(bool),
        Destroy,
    }

    /// Records every call and tracks what is currently attached.
    #[derive(Debug, Default)]
    pub struct FakeSurface {
        pub calls: Vec<Call>,
        pub attached: Vec<(LayerGeneration, String)>,
        pub markers: Vec<(u32, LatLng)>,
        pub visible: bool,
        pub fail_next_create: bool,
        next_marker: u32,
    }

    impl FakeSurface {
        pub fn new() -> Self {
            Self { visible: true, ..Default::default() }
        }
    }

    impl RenderSurface for FakeSurface {
        type Layer = (LayerGeneration, String);
        type Marker = u32;

        fn create_layer(&mut self, spec: &TileLayerSpec) -> Result<Self::Layer, SurfaceError> {
            if std::mem::take(&mut self.fail_next_create) {
                return Err(SurfaceError("boom".to_string()));
            }
            self.calls.push(Call::Create(spec.generation));
            Ok((spec.generation, spec.url.clone()))
        }

        fn attach_layer(&mut self, layer: &Self::Layer) {
            self.calls.push(Call::Attach(layer.0));
            self.attached.push(layer.clone());
        }

        fn detach_layer(&mut self, layer: Self::Layer) {
            self.calls.push(Call::Detach(layer.0));
            self.attached.retain(|(g, _)| *g != layer.0);
        }

        fn set_viewport(&mut self, center: LatLng, zoom: u8) {
            self.calls.push(Call::Viewport(center, zoom));
        }

        fn set_zoom(&mut self, zoom: u8) {
            self.calls.push(Call::Zoom(zoom));
        }

        fn animate_to(&mut self, center: LatLng, zoom: u8, duration_secs: f64) {
            self.calls.push(Call::Animate(center, zoom, duration_secs));
        }

        fn place_marker(&mut self, at: LatLng, _style: &MarkerStyle) -> u32 {
            self.next_marker += 1;
            self.calls.push(Call::PlaceMarker(self.next_marker, at));
            self.markers.push((self.next_marker, at));
            self.next_marker
        }

        fn remove_marker(&mut self, marker: u32) {
            self.calls.push(Call::RemoveMarker(marker));
            self.markers.retain(|(id, _)| *id != marker);
        }

        fn set_visible(&mut self, visible: bool) {
            self.calls.push(Call::Visible(visible));
            self.visible = visible;
        }

        fn destroy(&mut self) {
            self.calls.push(Call::Destroy);
        }
    }
}
