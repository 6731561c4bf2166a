//! View state owned by the coordinator and the snapshot handed to observers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::{self, BodyId};
use crate::coords::LatLng;
use crate::layer::LayerGeneration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Satellite,
    Elevation,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ViewMode::Satellite => "satellite",
            ViewMode::Elevation => "elevation",
        })
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "satellite" => Ok(ViewMode::Satellite),
            "elevation" | "topography" => Ok(ViewMode::Elevation),
            other => Err(format!("unknown view mode: {other}")),
        }
    }
}

/// The live zoom; the variant also decides the active mode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ZoomState {
    /// Discrete tile-pyramid level.
    Tile(u8),
    /// Continuous scale factor of the elevation image.
    Scale(f64),
}

impl ZoomState {
    pub fn mode(&self) -> ViewMode {
        match self {
            ZoomState::Tile(_) => ViewMode::Satellite,
            ZoomState::Scale(_) => ViewMode::Elevation,
        }
    }

    pub fn readout(&self, max_zoom: u8) -> String {
        match self {
            ZoomState::Tile(level) => format!("Zoom: {level}/{max_zoom}"),
            ZoomState::Scale(scale) => format!("Zoom: {scale:.1}x"),
        }
    }
}

/// Non-fatal message surfaced to the user.
#[derive(Clone, Debug, PartialEq)]
pub enum Notice {
    LayerLoadFailure { generation: LayerGeneration, message: String },
}

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::LayerLoadFailure { message, .. } => message,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub body: BodyId,
    pub date: String,
    pub zoom: ZoomState,
    pub marker: Option<LatLng>,
    pub chat_open: bool,
    pub notice: Option<Notice>,
}

impl ViewState {
    pub fn initial(date: impl Into<String>, zoom: u8) -> Self {
        Self {
            body: BodyId::Earth,
            date: date.into(),
            zoom: ZoomState::Tile(zoom),
            marker: None,
            chat_open: false,
            notice: None,
        }
    }

    pub fn mode(&self) -> ViewMode {
        self.zoom.mode()
    }

    pub fn date_info(&self) -> String {
        let descriptor = catalog::body(self.body);
        match self.mode() {
            ViewMode::Satellite if self.body == BodyId::Earth && !self.date.is_empty() => {
                self.date.clone()
            }
            ViewMode::Satellite => "Archive Data".to_string(),
            ViewMode::Elevation => descriptor.elevation.source_label.to_string(),
        }
    }
}

/// Render-ready projection of [`ViewState`].
#[derive(Clone, Debug, PartialEq)]
pub struct ViewSnapshot {
    pub body: BodyId,
    pub mode: ViewMode,
    pub date: String,
    pub zoom: ZoomState,
    pub zoom_text: String,
    pub date_info: String,
    pub marker: Option<LatLng>,
    pub chat_open: bool,
    pub notice: Option<Notice>,
}

impl ViewSnapshot {
    pub fn of(state: &ViewState, max_zoom: u8) -> Self {
        Self {
            body: state.body,
            mode: state.mode(),
            date: state.date.clone(),
            zoom: state.zoom,
            zoom_text: state.zoom.readout(max_zoom),
            date_info: state.date_info(),
            marker: state.marker,
            chat_open: state.chat_open,
            notice: state.notice.clone(),
        }
    }

    pub fn descriptor(&self) -> &'static catalog::BodyDescriptor {
        catalog::body(self.body)
    }

    pub fn is_satellite(&self) -> bool {
        self.mode == ViewMode::Satellite
    }

    /// Date picker and coordinate entry only make sense for Earth imagery.
    pub fn earth_tools_enabled(&self) -> bool {
        self.body == BodyId::Earth && self.is_satellite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn readout_formats() {
        assert_eq!(ZoomState::Tile(2).readout(9), "Zoom: 2/9");
        assert_eq!(ZoomState::Scale(1.0).readout(9), "Zoom: 1.0x");
        assert_eq!(ZoomState::Scale(1.69).readout(9), "Zoom: 1.7x");
        assert_eq!(ZoomState::Scale(0.5).readout(9), "Zoom: 0.5x");
    }

    #[test]
    fn date_info_per_mode() {
        let mut state = ViewState::initial("2024-08-15", 2);
        assert_eq!(state.date_info(), "2024-08-15");

        state.body = BodyId::Moon;
        assert_eq!(state.date_info(), "Archive Data");

        state.zoom = ZoomState::Scale(1.0);
        assert_eq!(state.date_info(), "3D Elevation Model");

        state.body = BodyId::Earth;
        state.date.clear();
        state.zoom = ZoomState::Tile(2);
        assert_eq!(state.date_info(), "Archive Data");
    }

    #[test]
    fn parses_modes() {
        assert_eq!("elevation".parse::<ViewMode>(), Ok(ViewMode::Elevation));
        assert_eq!("satellite".parse::<ViewMode>(), Ok(ViewMode::Satellite));
        assert!("infrared".parse::<ViewMode>().is_err());
    }
}
