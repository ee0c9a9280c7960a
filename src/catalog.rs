use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;

use geo_types::Point;
use serde::Deserialize;

/// A pickup zone: a cluster center with a stable integer id and a
/// representative coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Zone {
    #[serde(rename = "cluster_id")]
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
}

impl Zone {
    /// The zone center as a point with x = longitude, y = latitude.
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MalformedCatalogError {
    #[error("duplicate zone id {0}")]
    DuplicateZoneId(u32),
    #[error("zone {id} has out-of-range coordinates (lat: {lat}, lon: {lon})")]
    CoordinateOutOfRange { id: u32, lat: f64, lon: f64 },
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub struct UnknownZoneIdError(pub u32);

impl fmt::Display for UnknownZoneIdError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown zone id {}", self.0)
    }
}

/// The immutable set of all known zones, loaded once and queried by id or
/// scanned in load order for the lifetime of the process.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    zones: Vec<Zone>,
    by_id: HashMap<u32, usize>,
}

impl ZoneCatalog {
    /// Builds a catalog, rejecting duplicate ids and coordinates outside
    /// lat [-90, 90] / lon [-180, 180].
    pub fn new(zones: Vec<Zone>) -> Result<ZoneCatalog, MalformedCatalogError> {
        let mut by_id = HashMap::with_capacity(zones.len());
        for (index, zone) in zones.iter().enumerate() {
            if !(-90.0..=90.0).contains(&zone.lat) || !(-180.0..=180.0).contains(&zone.lon) {
                return Err(MalformedCatalogError::CoordinateOutOfRange {
                    id: zone.id,
                    lat: zone.lat,
                    lon: zone.lon,
                });
            }
            if by_id.insert(zone.id, index).is_some() {
                return Err(MalformedCatalogError::DuplicateZoneId(zone.id));
            }
        }
        Ok(ZoneCatalog { zones, by_id })
    }

    pub fn lookup(&self, id: u32) -> Result<&Zone, UnknownZoneIdError> {
        self.by_id
            .get(&id)
            .map(|&index| &self.zones[index])
            .ok_or(UnknownZoneIdError(id))
    }

    /// All zones in load order.
    pub fn all(&self) -> &[Zone] {
        &self.zones
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}
