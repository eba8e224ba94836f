//! CSV fleet loader.
//!
//! # CSV format
//!
//! One row per train, in fleet order.
//!
//! ```csv
//! id,category,speed_kmh,delay_min
//! T1,Express,110,0
//! T2,Express,120,5
//! T6,Freight,45,20
//! ```
//!
//! `category` is matched case-insensitively against the train categories.
//! Duplicate ids are rejected.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use ops_core::TrainCategory;

use crate::{Fleet, FleetError, FleetMember, FleetResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct FleetRecord {
    id:        String,
    category:  String,
    speed_kmh: u32,
    delay_min: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a fleet snapshot from a CSV file.
pub fn load_fleet_csv(path: &Path) -> FleetResult<Fleet> {
    let file = std::fs::File::open(path).map_err(FleetError::Io)?;
    load_fleet_reader(file)
}

/// Like [`load_fleet_csv`] but accepts any `Read` source.
pub fn load_fleet_reader<R: Read>(reader: R) -> FleetResult<Fleet> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut members = Vec::new();

    for (line, result) in csv_reader.deserialize::<FleetRecord>().enumerate() {
        let row = result.map_err(|e| FleetError::Parse(e.to_string()))?;
        let category = row.category.parse::<TrainCategory>().map_err(|e| {
            // +2: one for the header, one for 1-based numbering.
            FleetError::Parse(format!("row {}: {e}", line + 2))
        })?;
        members.push(FleetMember::new(row.id.trim(), category, row.speed_kmh, row.delay_min));
    }

    debug!("loaded {} fleet members from CSV", members.len());
    Fleet::new(members)
}
