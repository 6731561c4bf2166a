//! Maps generic zoom intents onto whichever zoom model is live.

use crate::config::ViewerConfig;
use crate::view::ZoomState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomIntent {
    In,
    Out,
    Reset,
}

/// What the rendering surface has to do for a zoom step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceZoom {
    /// Nothing to render on the map (elevation image, or already at a limit).
    None,
    SetLevel(u8),
    /// Back to the default global view.
    Recenter,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomModel {
    pub min_level: u8,
    pub max_level: u8,
    pub default_level: u8,
    pub step: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl ZoomModel {
    pub fn from_config(cfg: &ViewerConfig) -> Self {
        Self {
            min_level: cfg.min_zoom,
            max_level: cfg.max_zoom,
            default_level: cfg.default_zoom,
            step: cfg.scale_step,
            min_scale: cfg.min_scale,
            max_scale: cfg.max_scale,
        }
    }

    pub fn clamp_level(&self, level: u8) -> u8 {
        level.clamp(self.min_level, self.max_level)
    }

    pub fn apply(&self, zoom: ZoomState, intent: ZoomIntent) -> (ZoomState, SurfaceZoom) {
        match zoom {
            ZoomState::Tile(level) => {
                let next = match intent {
                    ZoomIntent::In => self.clamp_level(level.saturating_add(1)),
                    ZoomIntent::Out => self.clamp_level(level.saturating_sub(1)),
                    ZoomIntent::Reset => {
                        return (ZoomState::Tile(self.default_level), SurfaceZoom::Recenter);
                    }
                };
                let effect = if next == level { SurfaceZoom::None } else { SurfaceZoom::SetLevel(next) };
                (ZoomState::Tile(next), effect)
            }
            ZoomState::Scale(scale) => {
                let next = match intent {
                    ZoomIntent::In => (scale * self.step).min(self.max_scale),
                    ZoomIntent::Out => (scale / self.step).max(self.min_scale),
                    ZoomIntent::Reset => 1.0,
                };
                (ZoomState::Scale(next), SurfaceZoom::None)
            }
        }
    }
}

impl Default for ZoomModel {
    fn default() -> Self {
        Self::from_config(&ViewerConfig::default())
    }
}
