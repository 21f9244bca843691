//! Event sinks for registry state changes.
//!
//! Row schema: [`EventRow`], one per [`RegistryEvent`], stamped with the
//! caller that triggered it and a per-run sequence number.
//!
//! Backend:
//! - **NDJSON stream** — write newline-delimited JSON rows to any `Write` impl

pub mod json_stream;

use alloy_primitives::Address;
use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};
use whitelist_core::RegistryEvent;

/// One row per event — append-only.
#[derive(Debug, Clone, Serialize)]
pub struct EventRow {
    pub seq: u64,
    pub caller: Address,
    #[serde(flatten)]
    pub event: RegistryEvent,
    pub created_at: u64,
}

/// Stamp a batch of events drained from one call.
pub fn to_rows(first_seq: u64, caller: Address, events: Vec<RegistryEvent>) -> Vec<EventRow> {
    let created_at = unix_now();
    events
        .into_iter()
        .zip(first_seq..)
        .map(|(event, seq)| EventRow {
            seq,
            caller,
            event,
            created_at,
        })
        .collect()
}

/// Seconds since the Unix epoch; zero if the clock is before it.
fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
