use tracing::debug;

use crate::coords::LatLng;
use crate::surface::{MarkerStyle, RenderSurface};

/// Holds at most one fly-to marker.
#[derive(Debug)]
pub struct MarkerManager<M> {
    current: Option<(LatLng, M)>,
}

impl<M> Default for MarkerManager<M> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<M> MarkerManager<M> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(&self) -> Option<LatLng> {
        self.current.as_ref().map(|(at, _)| *at)
    }

    /// Removes the held marker (if any), then places a new one at `at`.
    pub fn place<S>(&mut self, surface: &mut S, at: LatLng)
    where
        S: RenderSurface<Marker = M>,
    {
        self.clear(surface);
        let handle = surface.place_marker(at, &MarkerStyle::FLY_TO);
        debug!(lat = at.lat, lng = at.lng, "placed marker");
        self.current = Some((at, handle));
    }

    pub fn clear<S>(&mut self, surface: &mut S)
    where
        S: RenderSurface<Marker = M>,
    {
        if let Some((_, handle)) = self.current.take() {
            surface.remove_marker(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::fake::FakeSurface;

    #[test]
    fn place_keeps_a_single_marker() {
        let mut surface = FakeSurface::new();
        let mut markers = MarkerManager::new();
        for i in 0..5 {
            markers.place(&mut surface, LatLng::new(i as f64, -(i as f64)));
            assert_eq!(surface.markers.len(), 1);
        }
        assert_eq!(markers.position(), Some(LatLng::new(4.0, -4.0)));
        assert_eq!(surface.markers[0].1, LatLng::new(4.0, -4.0));
    }

    #[test]
    fn clear_removes_marker() {
        let mut surface = FakeSurface::new();
        let mut markers = MarkerManager::new();
        markers.clear(&mut surface);
        markers.place(&mut surface, LatLng::new(1.0, 2.0));
        markers.clear(&mut surface);
        assert!(surface.markers.is_empty());
        assert_eq!(markers.position(), None);
    }
}
