use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use csv::ReaderBuilder;

use crate::catalog::{MalformedCatalogError, Zone, ZoneCatalog};
use crate::recommend::ActivityRecord;

/// Weekday display names, indexed by the weekday numbers used in the stats
/// table (0 = Monday).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

#[derive(thiserror::Error, Debug)]
pub enum DatasetError {
    #[error("could not read dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse dataset row: {0}")]
    Csv(#[from] csv::Error),
    #[error("malformed zone table: {0}")]
    MalformedCatalog(#[from] MalformedCatalogError),
}

/// Reads a zone center table (`cluster_id,lat,lon` with a header row) into a
/// validated catalog.
pub fn read_zone_catalog<R: Read>(reader: R) -> Result<ZoneCatalog, DatasetError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut zones: Vec<Zone> = vec![];
    for row in csv_reader.deserialize() {
        zones.push(row?);
    }
    Ok(ZoneCatalog::new(zones)?)
}

/// Reads an activity table (`cluster_id,pickup_weekday,pickup_hour,trip_count`
/// with a header row).
pub fn read_activity_records<R: Read>(reader: R) -> Result<Vec<ActivityRecord>, DatasetError> {
    let mut csv_reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let mut records: Vec<ActivityRecord> = vec![];
    for row in csv_reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

pub fn load_zone_catalog(path: &Path) -> Result<ZoneCatalog, DatasetError> {
    read_zone_catalog(BufReader::new(File::open(path)?))
}

pub fn load_activity_records(path: &Path) -> Result<Vec<ActivityRecord>, DatasetError> {
    read_activity_records(BufReader::new(File::open(path)?))
}
