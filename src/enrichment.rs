//! Derived fields added to upstream player documents before rendering.
//!
//! Enrichment is additive: the source keys are never touched, only the
//! `*_formatted` and `days_played` keys are (re)written next to them.
use crate::timestamp::{epoch_to_datetime, format_timestamp_in};
use chrono::{DateTime, Local, TimeDelta, TimeZone};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Sub-records of the upstream document that carry account timestamps.
pub const TIMESTAMPED_RECORDS: [&str; 2] = ["basicInfo", "captainBasicInfo"];

/// Timestamp keys that get a `_formatted` sibling.
pub const TIMESTAMP_FIELDS: [&str; 2] = ["createAt", "lastLoginAt"];

pub const DAYS_PLAYED_KEY: &str = "days_played";

/// Enriches a document using the server's local time zone and the current time.
pub fn enrich_player_document(doc: &mut Value) {
    enrich_player_document_at(doc, &Local, Local::now());
}

/// Enriches a document against an explicit time zone and "now".
pub fn enrich_player_document_at<Tz>(doc: &mut Value, tz: &Tz, now: DateTime<Tz>)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(root) = doc.as_object_mut() else {
        tracing::debug!("Upstream document is not an object, skipping enrichment");
        return;
    };

    for record_key in TIMESTAMPED_RECORDS {
        if let Some(record) = root.get_mut(record_key).and_then(Value::as_object_mut) {
            format_record_timestamps(record, tz);
        }
    }

    if let Some(basic) = root.get_mut("basicInfo").and_then(Value::as_object_mut) {
        let Some(created) = basic.get("createAt").cloned() else {
            return;
        };
        match days_since(&created, tz, &now) {
            Some(days) => {
                basic.insert(DAYS_PLAYED_KEY.to_string(), Value::from(days));
            }
            None => tracing::debug!("basicInfo.createAt is not an epoch: {}", created),
        }
    }
}

fn format_record_timestamps<Tz>(record: &mut Map<String, Value>, tz: &Tz)
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    for field in TIMESTAMP_FIELDS {
        let Some(raw) = record.get(field) else {
            continue;
        };
        let formatted = format_timestamp_in(raw, tz);
        if !formatted.is_formatted() {
            tracing::debug!("{} is not an epoch, passing it through: {}", field, raw);
        }
        record.insert(format!("{}_formatted", field), formatted.into_value());
    }
}

/// Whole days between `created` and `now`, compared as naive local times.
///
/// Partial days are dropped (floor), so an account created 36 hours ago
/// reports 1 day.
pub fn days_since<Tz: TimeZone>(created: &Value, tz: &Tz, now: &DateTime<Tz>) -> Option<i64> {
    let created = epoch_to_datetime(created, tz)?;
    let elapsed = now.naive_local() - created.naive_local();
    Some(floor_days(elapsed))
}

fn floor_days(elapsed: TimeDelta) -> i64 {
    let days = elapsed.num_days();
    if elapsed < TimeDelta::days(days) {
        days - 1
    } else {
        days
    }
}
