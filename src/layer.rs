//! Ownership of the single tile layer bound to the rendering surface.

use std::fmt;

use tracing::debug;

use crate::catalog::{self, BodyId, TILE_BOUNDS};
use crate::coords::LatLng;
use crate::error::SurfaceError;
use crate::surface::{RenderSurface, TileLayerSpec};

/// Monotonic tag stamped on every layer; callbacks carrying an older tag are stale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerGeneration(pub u64);

impl fmt::Display for LayerGeneration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What happens to the viewport after a swap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Viewport {
    Recenter { center: LatLng, zoom: u8 },
    Preserve,
}

pub fn layer_spec(generation: LayerGeneration, body: BodyId, date: &str) -> TileLayerSpec {
    TileLayerSpec {
        generation,
        url: catalog::body(body).tiles.resolve(date),
        attribution: "NASA",
        tile_size: 256,
        bounds: TILE_BOUNDS,
    }
}

#[derive(Debug)]
pub struct LayerManager<L> {
    active: Option<(LayerGeneration, L)>,
    last: LayerGeneration,
}

impl<L> Default for LayerManager<L> {
    fn default() -> Self {
        Self { active: None, last: LayerGeneration(0) }
    }
}

impl<L> LayerManager<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation of the attached layer, if any.
    pub fn live(&self) -> Option<LayerGeneration> {
        self.active.as_ref().map(|(g, _)| *g)
    }

    pub fn is_attached(&self) -> bool {
        self.active.is_some()
    }

    /// Replaces the attached layer with one for `(body, date)`.
    ///
    /// The new layer is built before anything is detached, so a construction
    /// failure leaves the current layer untouched.
    pub fn swap_to<S>(
        &mut self,
        surface: &mut S,
        body: BodyId,
        date: &str,
        viewport: Viewport,
    ) -> Result<LayerGeneration, SurfaceError>
    where
        S: RenderSurface<Layer = L>,
    {
        let generation = LayerGeneration(self.last.0 + 1);
        let spec = layer_spec(generation, body, date);
        let layer = surface.create_layer(&spec)?;
        self.last = generation;

        if let Some((old, prev)) = self.active.take() {
            debug!(%old, "detaching tile layer");
            surface.detach_layer(prev);
        }
        surface.attach_layer(&layer);
        self.active = Some((generation, layer));
        debug!(%generation, %body, url = %spec.url, "attached tile layer");

        if let Viewport::Recenter { center, zoom } = viewport {
            surface.set_viewport(center, zoom);
        }
        Ok(generation)
    }

    /// Detaches and releases the attached layer. No-op when none is attached.
    pub fn release<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface<Layer = L>,
    {
        if let Some((generation, layer)) = self.active.take() {
            debug!(%generation, "releasing tile layer");
            surface.detach_layer(layer);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::fake::{Call, FakeSurface};

    const HOME: Viewport = Viewport::Recenter { center: LatLng::new(20.0, 0.0), zoom: 2 };

    #[test]
    fn swap_replaces_previous_layer() {
        let mut surface = FakeSurface::new();
        let mut layers = LayerManager::new();
        let g1 = layers.swap_to(&mut surface, BodyId::Earth, "2024-08-15", HOME).unwrap();
        let g2 = layers.swap_to(&mut surface, BodyId::Mars, "2024-08-15", HOME).unwrap();
        assert!(g2 > g1);
        assert_eq!(layers.live(), Some(g2));
        assert_eq!(surface.attached.len(), 1);
        assert!(surface.attached[0].1.contains("/Mars/"));
    }

    #[test]
    fn new_layer_is_built_before_old_is_detached() {
        let mut surface = FakeSurface::new();
        let mut layers = LayerManager::new();
        let g1 = layers.swap_to(&mut surface, BodyId::Moon, "", HOME).unwrap();
        surface.calls.clear();
        let g2 = layers.swap_to(&mut surface, BodyId::Mars, "", Viewport::Preserve).unwrap();
        assert_eq!(surface.calls, vec![Call::Create(g2), Call::Detach(g1), Call::Attach(g2)]);
    }

    #[test]
    fn failed_construction_keeps_current_layer() {
        let mut surface = FakeSurface::new();
        let mut layers = LayerManager::new();
        let g1 = layers.swap_to(&mut surface, BodyId::Moon, "", HOME).unwrap();
        surface.fail_next_create = true;
        assert!(layers.swap_to(&mut surface, BodyId::Mars, "", HOME).is_err());
        assert_eq!(layers.live(), Some(g1));
        assert_eq!(surface.attached.len(), 1);
        assert!(surface.attached[0].1.contains("/Moon/"));
    }

    #[test]
    fn recenter_is_optional() {
        let mut surface = FakeSurface::new();
        let mut layers = LayerManager::new();
        layers.swap_to(&mut surface, BodyId::Earth, "2024-08-15", HOME).unwrap();
        assert_eq!(surface.calls.last(), Some(&Call::Viewport(LatLng::new(20.0, 0.0), 2)));
        layers.swap_to(&mut surface, BodyId::Earth, "2024-07-01", Viewport::Preserve).unwrap();
        assert!(matches!(surface.calls.last(), Some(Call::Attach(_))));
    }

    #[test]
    fn release_is_idempotent() {
        let mut surface = FakeSurface::new();
        let mut layers = LayerManager::new();
        layers.swap_to(&mut surface, BodyId::Earth, "2024-08-15", HOME).unwrap();
        layers.release(&mut surface);
        layers.release(&mut surface);
        assert!(surface.attached.is_empty());
        assert!(!layers.is_attached());
    }
}
