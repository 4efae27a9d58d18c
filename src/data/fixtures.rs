//! Shared test data.

use super::model::{Dataset, FlightNumber, LaunchRecord, Outcome};

pub fn record(flight: i64, site: &str, payload: f64, class: i64, booster: &str) -> LaunchRecord {
    LaunchRecord {
        flight_number: Some(FlightNumber::Number(flight)),
        launch_site: site.to_string(),
        payload_mass_kg: payload,
        outcome: Outcome::from_class(class).expect("class must be 0 or 1"),
        booster_version_category: booster.to_string(),
    }
}

/// Sites {A, B} with records [(A,1), (A,0), (B,1)].
pub fn two_site_dataset() -> Dataset {
    Dataset::new(
        vec![
            record(1, "A", 1000.0, 1, "v1.0"),
            record(2, "A", 3000.0, 0, "v1.1"),
            record(3, "B", 5000.0, 1, "FT"),
        ],
        Some("Flight Number".into()),
    )
    .expect("fixture is non-empty")
}

/// A dataset shaped like the public launch table.
pub fn launch_dataset() -> Dataset {
    Dataset::new(
        vec![
            record(1, "CCAFS LC-40", 0.0, 0, "v1.0"),
            record(2, "CCAFS LC-40", 525.0, 0, "v1.0"),
            record(3, "VAFB SLC-4E", 500.0, 0, "v1.1"),
            record(4, "KSC LC-39A", 2490.0, 1, "FT"),
            record(5, "CCAFS SLC-40", 4600.0, 1, "FT"),
            record(6, "KSC LC-39A", 9600.0, 1, "B4"),
            record(7, "VAFB SLC-4E", 3310.0, 1, "B5"),
            record(8, "CCAFS LC-40", 3170.0, 1, "v1.1"),
        ],
        Some("Flight Number".into()),
    )
    .expect("fixture is non-empty")
}
