use geo_types::Point;
use serde::Deserialize;

use crate::catalog::{UnknownZoneIdError, Zone, ZoneCatalog};

/// Observed trip count for a zone at a specific weekday/hour slot.
/// Weekdays are numbered 0 (Monday) through 6 (Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ActivityRecord {
    #[serde(rename = "cluster_id")]
    pub zone_id: u32,
    #[serde(rename = "pickup_weekday")]
    pub weekday: u8,
    #[serde(rename = "pickup_hour")]
    pub hour: u8,
    pub trip_count: u64,
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecommendError {
    #[error("the zone catalog is empty; nothing to search")]
    EmptyCatalog,
    #[error("invalid time slot (weekday: {weekday}, hour: {hour}); expected weekday in 0..=6 and hour in 0..=23")]
    InvalidTimeSlot { weekday: u8, hour: u8 },
    #[error(transparent)]
    UnknownZone(#[from] UnknownZoneIdError),
}

/// Returns the zone closest to `query` by Euclidean distance in lon/lat space.
///
/// Distances are compared squared; equidistant zones resolve to the lowest id,
/// independent of catalog order. Linear scan over the whole catalog, which is
/// fine for the hundreds-to-thousands of zones these tables hold.
pub fn find_nearest<'a>(
    query: &Point<f64>,
    catalog: &'a ZoneCatalog,
) -> Result<&'a Zone, RecommendError> {
    let mut best: Option<(&Zone, f64)> = None;
    for zone in catalog.all() {
        let dx = zone.lon - query.x();
        let dy = zone.lat - query.y();
        let distance = dx * dx + dy * dy;
        let closer = match best {
            None => true,
            Some((best_zone, best_distance)) => {
                distance < best_distance || (distance == best_distance && zone.id < best_zone.id)
            }
        };
        if closer {
            best = Some((zone, distance));
        }
    }
    best.map(|(zone, _)| zone).ok_or(RecommendError::EmptyCatalog)
}

/// Returns the zone with the most trips in the exact (`weekday`, `hour`) slot,
/// along with its trip count, or `None` when no record matches the slot.
///
/// Equal maxima resolve to the lowest zone id. Duplicate (zone, weekday, hour)
/// records are not aggregated; each competes on its own count. A winning record
/// whose zone id is missing from the catalog is a data-integrity error.
pub fn find_busiest<'a>(
    weekday: u8,
    hour: u8,
    records: &[ActivityRecord],
    catalog: &'a ZoneCatalog,
) -> Result<Option<(&'a Zone, u64)>, RecommendError> {
    if weekday > 6 || hour > 23 {
        return Err(RecommendError::InvalidTimeSlot { weekday, hour });
    }

    let mut best: Option<&ActivityRecord> = None;
    for record in records {
        if record.weekday != weekday || record.hour != hour {
            continue;
        }
        let busier = match best {
            None => true,
            Some(current) => {
                record.trip_count > current.trip_count
                    || (record.trip_count == current.trip_count
                        && record.zone_id < current.zone_id)
            }
        };
        if busier {
            best = Some(record);
        }
    }

    match best {
        None => Ok(None),
        Some(record) => {
            let zone = catalog.lookup(record.zone_id)?;
            Ok(Some((zone, record.trip_count)))
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::Rng;

    use super::*;

    fn zone(id: u32, lat: f64, lon: f64) -> Zone {
        Zone { id, lat, lon }
    }

    fn record(zone_id: u32, weekday: u8, hour: u8, trip_count: u64) -> ActivityRecord {
        ActivityRecord {
            zone_id,
            weekday,
            hour,
            trip_count,
        }
    }

    fn midtown_catalog() -> ZoneCatalog {
        ZoneCatalog::new(vec![zone(0, 40.75, -73.98), zone(1, 40.76, -73.99)]).unwrap()
    }

    #[test]
    fn nearest_picks_the_closer_zone() {
        let catalog = midtown_catalog();
        let nearest = find_nearest(&Point::new(-73.981, 40.751), &catalog).unwrap();
        assert_eq!(nearest.id, 0);
    }

    #[test]
    fn nearest_on_empty_catalog_fails() {
        let catalog = ZoneCatalog::new(vec![]).unwrap();
        let result = find_nearest(&Point::new(0.0, 0.0), &catalog);
        assert_eq!(result.unwrap_err(), RecommendError::EmptyCatalog);
    }

    #[test]
    fn nearest_on_single_zone_catalog_always_returns_it() {
        let catalog = ZoneCatalog::new(vec![zone(5, 40.75, -73.98)]).unwrap();
        for query in [
            Point::new(0.0, 0.0),
            Point::new(-73.98, 40.75),
            Point::new(179.0, -89.0),
        ] {
            assert_eq!(find_nearest(&query, &catalog).unwrap().id, 5);
        }
    }

    #[test]
    fn nearest_breaks_ties_by_lowest_id() {
        // Two zones at the same coordinate; the lower id must win no matter
        // which order the catalog holds them in.
        let catalog =
            ZoneCatalog::new(vec![zone(9, 40.75, -73.98), zone(2, 40.75, -73.98)]).unwrap();
        for _ in 0..10 {
            let nearest = find_nearest(&Point::new(-73.5, 40.5), &catalog).unwrap();
            assert_eq!(nearest.id, 2);
        }
    }

    #[test]
    fn nearest_is_minimal_against_brute_force() {
        let catalog = ZoneCatalog::new(
            (0..50)
                .map(|i| zone(i, 40.6 + (i as f64) * 0.007, -74.05 + (i as f64 % 7.0) * 0.02))
                .collect(),
        )
        .unwrap();

        let mut rng = rand::thread_rng();
        for _ in 0..1000 {
            let query = Point::new(rng.gen_range(-74.3..-73.7), rng.gen_range(40.5..41.0));
            let nearest = find_nearest(&query, &catalog).unwrap();
            let nearest_distance = squared_distance(&query, nearest);
            for other in catalog.all() {
                assert!(nearest_distance <= squared_distance(&query, other));
            }
        }
    }

    fn squared_distance(query: &Point<f64>, zone: &Zone) -> f64 {
        let dx = zone.lon - query.x();
        let dy = zone.lat - query.y();
        dx * dx + dy * dy
    }

    #[test]
    fn busiest_picks_the_highest_count_in_the_slot() {
        let catalog = midtown_catalog();
        let records = vec![record(0, 0, 8, 50), record(1, 0, 8, 120), record(0, 0, 9, 30)];
        let (zone, count) = find_busiest(0, 8, &records, &catalog).unwrap().unwrap();
        assert_eq!(zone.id, 1);
        assert_eq!(count, 120);
    }

    #[test]
    fn busiest_requires_an_exact_slot_match() {
        let catalog = midtown_catalog();
        let records = vec![record(0, 0, 8, 50), record(1, 0, 8, 120), record(0, 0, 9, 30)];
        // Same weekday, different hour: no data.
        assert_eq!(find_busiest(0, 10, &records, &catalog).unwrap(), None);
        // Different weekday, same hour: no data.
        assert_eq!(find_busiest(1, 8, &records, &catalog).unwrap(), None);
    }

    #[test]
    fn busiest_breaks_ties_by_lowest_zone_id() {
        let catalog = midtown_catalog();
        let records = vec![record(1, 2, 17, 75), record(0, 2, 17, 75)];
        let (zone, count) = find_busiest(2, 17, &records, &catalog).unwrap().unwrap();
        assert_eq!(zone.id, 0);
        assert_eq!(count, 75);
    }

    #[test]
    fn busiest_rejects_out_of_range_slots() {
        let catalog = midtown_catalog();
        assert_eq!(
            find_busiest(7, 8, &[], &catalog).unwrap_err(),
            RecommendError::InvalidTimeSlot { weekday: 7, hour: 8 }
        );
        assert_eq!(
            find_busiest(0, 24, &[], &catalog).unwrap_err(),
            RecommendError::InvalidTimeSlot { weekday: 0, hour: 24 }
        );
    }

    #[test]
    fn busiest_accepts_slot_lower_bounds() {
        let catalog = midtown_catalog();
        let records = vec![record(0, 0, 0, 10)];
        let (zone, count) = find_busiest(0, 0, &records, &catalog).unwrap().unwrap();
        assert_eq!((zone.id, count), (0, 10));
    }

    #[test]
    fn busiest_surfaces_unknown_zone_ids() {
        let catalog = midtown_catalog();
        let records = vec![record(42, 0, 8, 10)];
        assert_eq!(
            find_busiest(0, 8, &records, &catalog).unwrap_err(),
            RecommendError::UnknownZone(UnknownZoneIdError(42))
        );
    }
}
