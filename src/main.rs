use std::env;
use std::path::Path;

use geo_types::Point;
use log::{error, info};

use zonepointer::datasets::{load_activity_records, load_zone_catalog, WEEKDAY_NAMES};
use zonepointer::recommend::{find_busiest, find_nearest};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(err) = run() {
        error!("{}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = env::args().nth(1).unwrap_or_else(|| "data".to_string());
    let data_dir = Path::new(&data_dir);

    let catalog = load_zone_catalog(&data_dir.join("cluster_centers.csv"))?;
    let records = load_activity_records(&data_dir.join("cluster_stats.csv"))?;
    info!("Loaded {} zones and {} activity records", catalog.len(), records.len());

    // A click near Times Square, Monday at 8am.
    let click = Point::new(-73.985, 40.758);
    let (weekday, hour) = (0, 8);

    let nearest = find_nearest(&click, &catalog)?;
    info!(
        "Nearest pickup zone to ({:.4}, {:.4}): {} (lat: {:.4}, lon: {:.4})",
        click.y(),
        click.x(),
        nearest.id,
        nearest.lat,
        nearest.lon
    );

    match find_busiest(weekday, hour, &records, &catalog)? {
        Some((zone, trip_count)) => info!(
            "Busiest pickup zone on {} at {}:00: {} with {} trips (lat: {:.4}, lon: {:.4})",
            WEEKDAY_NAMES[weekday as usize], hour, zone.id, trip_count, zone.lat, zone.lon
        ),
        None => info!(
            "No trip data for {} at {}:00",
            WEEKDAY_NAMES[weekday as usize], hour
        ),
    }

    Ok(())
}
