/// This script demonstrates the usage of the zonepointer library for performing nearest-zone queries.
///
/// It performs the following steps:
/// 1. Builds a synthetic catalog of pickup zone centers spread over the NYC bounding box.
/// 2. Generates a list of random latitude-longitude coordinates in the same box.
/// 3. Queries the nearest zone for each coordinate and reports the query throughput.
use std::time::Instant;

use geo_types::Point;
use rand::Rng;
use zonepointer::catalog::{Zone, ZoneCatalog};
use zonepointer::recommend::find_nearest;

pub fn main() {
    let mut rng = rand::thread_rng();

    // Roughly the density of the real cluster center table.
    let zones: Vec<Zone> = (0..500)
        .map(|id| Zone {
            id,
            lat: rng.gen_range(40.55..40.95),
            lon: rng.gen_range(-74.15..-73.70),
        })
        .collect();
    let catalog = ZoneCatalog::new(zones).unwrap();

    let latlons: Vec<(f64, f64)> = (0..1000000)
        .map(|_| (rng.gen_range(40.55..40.95), rng.gen_range(-74.15..-73.70)))
        .collect();

    let t0 = Instant::now();
    let mut nearest_ids = vec![];
    for (lat, lon) in latlons.iter() {
        let nearest = find_nearest(&Point::new(*lon, *lat), &catalog).unwrap();
        nearest_ids.push(nearest.id);
    }

    let duration = t0.elapsed().as_secs_f64();

    println!(
        "{} nearest-zone queries completed in {:.4} seconds ({:.2} queries per second).",
        latlons.len(),
        duration,
        latlons.len() as f64 / duration
    );
}
