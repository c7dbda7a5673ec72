//! CSV call-schedule loader.
//!
//! # CSV format
//!
//! One row per call; `party_size` passengers are scheduled per row
//! (defaults to 1 when the column is empty).
//!
//! ```csv
//! tick,start_floor,destination_floor,party_size
//! 0,1,7,2
//! 5,3,1,1
//! 5,1,9,
//! ```
//!
//! Rows whose start and destination floors coincide are rejected — the
//! dispatch core leaves that case unspecified, so it is filtered here at
//! the boundary.  Floor-range checks against a concrete building happen
//! later, when the schedule is handed to the sim builder.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use lift_core::{Floor, Tick};

use crate::{CallRequest, CallSchedule, TrafficError, TrafficResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CallRecord {
    tick: u64,
    start_floor: u16,
    destination_floor: u16,
    #[serde(default)]
    party_size: Option<u8>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a call schedule from a CSV file.
pub fn load_calls_path(path: &Path) -> TrafficResult<CallSchedule> {
    let file = std::fs::File::open(path).map_err(TrafficError::Io)?;
    load_calls_reader(file)
}

/// Like [`load_calls_path`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded scenarios.
pub fn load_calls_reader<R: Read>(reader: R) -> TrafficResult<CallSchedule> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut schedule = CallSchedule::new();

    for result in csv_reader.deserialize::<CallRecord>() {
        let row = result.map_err(|e| TrafficError::Parse(e.to_string()))?;
        if row.start_floor == row.destination_floor {
            return Err(TrafficError::SameFloorCall {
                tick: Tick(row.tick),
                floor: Floor(row.start_floor),
            });
        }
        let call = CallRequest {
            start: Floor(row.start_floor),
            destination: Floor(row.destination_floor),
        };
        for _ in 0..row.party_size.unwrap_or(1) {
            schedule.push(Tick(row.tick), call);
        }
    }

    Ok(schedule)
}
