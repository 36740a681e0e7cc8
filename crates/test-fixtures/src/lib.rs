//! Test fixtures for campaign redirection: event builders for chains and
//! cycles, and loaders for the JSON campaigns under `data/`.

use std::path::PathBuf;

use campaign_core::CampaignEvent;
use chrono::{TimeZone, Utc};
use serde::de::DeserializeOwned;

/// Fixed deletion timestamp so fixtures are deterministic.
pub fn deleted_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

/// A live event.
pub fn live(id: u64) -> CampaignEvent {
    CampaignEvent::new(id, format!("Event {id}"))
}

/// A deleted event, optionally redirected to `target`.
pub fn deleted(id: u64, target: Option<u64>) -> CampaignEvent {
    let event = live(id).deleted(deleted_at());
    match target {
        Some(t) => event.redirect_to(t),
        None => event,
    }
}

/// Linear chain `1 → 2 → … → len`.
///
/// Every event but the last is deleted; the last is live when `live_tail`
/// is set and deleted without a target otherwise.
pub fn chain(len: u64, live_tail: bool) -> Vec<CampaignEvent> {
    assert!(len >= 1, "chain needs at least one event");
    let mut events: Vec<CampaignEvent> = (1..len).map(|i| deleted(i, Some(i + 1))).collect();
    events.push(if live_tail {
        live(len)
    } else {
        deleted(len, None)
    });
    events
}

/// Deleted events redirecting around a ring: `ids[0] → ids[1] → … → ids[0]`.
pub fn cycle(ids: &[u64]) -> Vec<CampaignEvent> {
    ids.iter()
        .enumerate()
        .map(|(i, &id)| deleted(id, Some(ids[(i + 1) % ids.len()])))
        .collect()
}

/// Root directory of the fixture data.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_fixture_text(relative_path: &str) -> String {
    let path = fixtures_root().join(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let content = load_fixture_text(relative_path);
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {relative_path}: {e}"))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}
