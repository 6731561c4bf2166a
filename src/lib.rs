//! View-state coordination for the Cosmoscope planetary imagery viewer.

pub mod catalog;
pub mod chat;
pub mod config;
pub mod coordinator;
pub mod coords;
pub mod error;
pub mod layer;
pub mod marker;
pub mod surface;
pub mod view;
pub mod zoom;

pub use catalog::{BodyDescriptor, BodyId};
pub use config::{ChatConfig, ViewerConfig};
pub use coordinator::{Coordinator, SubscriptionId};
pub use coords::LatLng;
pub use error::{ChatError, ConfigError, CoordinateError, SurfaceError, ViewError};
pub use surface::{RenderSurface, SurfaceEvent};
pub use view::{Notice, ViewMode, ViewSnapshot, ZoomState};
