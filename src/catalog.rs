//! Static imagery sources and metadata for every supported celestial body.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ViewError;

/// Declared bounding box of every tile pyramid: `[[south, west], [north, east]]`.
pub const TILE_BOUNDS: [[f64; 2]; 2] = [[-85.0511, -180.0], [85.0511, 180.0]];

const DATE_PLACEHOLDER: &str = "{date}";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyId {
    Earth,
    Moon,
    Mars,
    Mercury,
}

impl BodyId {
    pub const ALL: [BodyId; 4] = [BodyId::Earth, BodyId::Moon, BodyId::Mars, BodyId::Mercury];

    pub fn as_str(self) -> &'static str {
        match self {
            BodyId::Earth => "earth",
            BodyId::Moon => "moon",
            BodyId::Mars => "mars",
            BodyId::Mercury => "mercury",
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BodyId {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BodyId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ViewError::InvalidBodySelection(s.to_string()))
    }
}

/// Where a body's satellite tiles come from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSource {
    /// A single URL template with `{z}/{y}/{x}` placeholders.
    Fixed(&'static str),
    /// Same, plus a `{date}` placeholder filled from the selected date.
    Dated(&'static str),
}

impl TileSource {
    /// Resolves the template for `date`. Fixed sources ignore the date.
    pub fn resolve(&self, date: &str) -> String {
        match self {
            TileSource::Fixed(url) => (*url).to_string(),
            TileSource::Dated(template) => template.replace(DATE_PLACEHOLDER, date),
        }
    }

    pub fn is_dated(&self) -> bool {
        matches!(self, TileSource::Dated(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElevationImage {
    pub url: &'static str,
    pub caption: &'static str,
    /// Shown in the info panel while the elevation view is active.
    pub source_label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateEntry {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyDescriptor {
    pub id: BodyId,
    pub name: &'static str,
    pub icon: &'static str,
    pub tiles: TileSource,
    pub tile_label: &'static str,
    pub elevation: ElevationImage,
    pub dates: &'static [DateEntry],
}

impl BodyDescriptor {
    pub fn has_dates(&self) -> bool {
        !self.dates.is_empty()
    }
}

static EARTH_DATES: [DateEntry; 3] = [
    DateEntry { value: "2024-09-01", label: "2024-09-01 (September)" },
    DateEntry { value: "2024-08-15", label: "2024-08-15 (August)" },
    DateEntry { value: "2024-07-01", label: "2024-07-01 (July)" },
];

static BODIES: [BodyDescriptor; 4] = [
    BodyDescriptor {
        id: BodyId::Earth,
        name: "Earth",
        icon: "🌍",
        tiles: TileSource::Dated(
            "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/VIIRS_SNPP_CorrectedReflectance_TrueColor/default/{date}/GoogleMapsCompatible_Level9/{z}/{y}/{x}.jpg",
        ),
        tile_label: "VIIRS/SNPP True Color",
        elevation: ElevationImage {
            url: "https://media.sciencephoto.com/image/e0500675/800wm",
            caption: "Global Elevation Map",
            source_label: "SRTM/ASTER Data",
        },
        dates: &EARTH_DATES,
    },
    BodyDescriptor {
        id: BodyId::Moon,
        name: "Moon",
        icon: "🌙",
        tiles: TileSource::Fixed(
            "https://trek.nasa.gov/tiles/Moon/EQ/LRO_WAC_Mosaic_Global_303ppd_v02/1.0.0//default/default028mm/{z}/{y}/{x}.jpg",
        ),
        tile_label: "LRO WAC Global Mosaic",
        elevation: ElevationImage {
            url: "https://pubs.usgs.gov/of/2006/1367/images/coverphoto.jpg",
            caption: "Moon Topography",
            source_label: "3D Elevation Model",
        },
        dates: &[],
    },
    BodyDescriptor {
        id: BodyId::Mars,
        name: "Mars",
        icon: "🔴",
        tiles: TileSource::Fixed(
            "https://trek.nasa.gov/tiles/Mars/EQ/Mars_Viking_MDIM21_ClrMosaic_global_232m/1.0.0//default/default028mm/{z}/{y}/{x}.jpg",
        ),
        tile_label: "Viking MDIM Mosaic",
        elevation: ElevationImage {
            url: "https://cdn.mos.cms.futurecdn.net/XdrsSzvjJB9bc5wTyFW3KV-1200-80.jpg.webp",
            caption: "Mars Topography",
            source_label: "MOLA Elevation Data",
        },
        dates: &[],
    },
    BodyDescriptor {
        id: BodyId::Mercury,
        name: "Mercury",
        icon: "☿",
        tiles: TileSource::Fixed(
            "https://trek.nasa.gov/tiles/Mercury/EQ/Mercury_MESSENGER_MDIS_Basemap_LOI_Mosaic_Global_166m/1.0.0//default/default028mm/{z}/{y}/{x}.jpg",
        ),
        tile_label: "MESSENGER MDIS Mosaic",
        elevation: ElevationImage {
            url: "https://pressbooks.online.ucf.edu/app/uploads/sites/40/2018/12/OSC_Astro_09_05_MercuryTopo-1.jpg",
            caption: "MLA Elevation Data",
            source_label: "MESSENGER Laser Altimeter",
        },
        dates: &[],
    },
];

/// Looks up the descriptor for `id`. Every `BodyId` has exactly one entry.
pub fn body(id: BodyId) -> &'static BodyDescriptor {
    match id {
        BodyId::Earth => &BODIES[0],
        BodyId::Moon => &BODIES[1],
        BodyId::Mars => &BODIES[2],
        BodyId::Mercury => &BODIES[3],
    }
}

pub fn bodies() -> &'static [BodyDescriptor] {
    &BODIES
}

/// Selectable Earth dates, newest first.
pub fn earth_dates() -> &'static [DateEntry] {
    body(BodyId::Earth).dates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_descriptor_per_id() {
        for id in BodyId::ALL {
            assert_eq!(body(id).id, id);
            assert_eq!(bodies().iter().filter(|b| b.id == id).count(), 1);
        }
    }

    #[test]
    fn only_earth_carries_dates() {
        for b in bodies() {
            let earth = b.id == BodyId::Earth;
            assert_eq!(b.has_dates(), earth, "{}", b.name);
            assert_eq!(b.tiles.is_dated(), earth, "{}", b.name);
        }
    }

    #[test]
    fn earth_url_resolves_date() {
        let url = body(BodyId::Earth).tiles.resolve("2024-07-01");
        assert!(url.contains("/default/2024-07-01/GoogleMapsCompatible_Level9/{z}/{y}/{x}.jpg"));
        assert!(!url.contains(DATE_PLACEHOLDER));
    }

    #[test]
    fn fixed_url_ignores_date() {
        let mars = body(BodyId::Mars);
        assert_eq!(mars.tiles.resolve("2024-07-01"), mars.tiles.resolve(""));
    }

    #[test]
    fn parses_ids() {
        assert_eq!("mercury".parse::<BodyId>().unwrap(), BodyId::Mercury);
        assert!(matches!(
            "pluto".parse::<BodyId>(),
            Err(ViewError::InvalidBodySelection(s)) if s == "pluto"
        ));
    }
}
