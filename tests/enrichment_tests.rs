/// Unit tests for timestamp formatting and document enrichment
/// Uses UTC and a fixed "now" so results do not depend on the host clock
use chrono::{DateTime, Utc};
use ff_info_api::enrichment::{enrich_player_document, enrich_player_document_at};
use ff_info_api::timestamp::{format_timestamp, format_timestamp_in, FormattedTimestamp};
use serde_json::json;

fn utc(secs: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(secs, 0).unwrap()
}

#[cfg(test)]
mod timestamp_tests {
    use super::*;

    #[test]
    fn test_known_epoch_in_utc() {
        assert_eq!(
            format_timestamp_in(&json!(1609459200), &Utc),
            FormattedTimestamp::Formatted("01 January 2021 12:00 AM".to_string())
        );
    }

    #[test]
    fn test_string_epoch_in_utc() {
        assert_eq!(
            format_timestamp_in(&json!("1612137600"), &Utc),
            FormattedTimestamp::Formatted("01 February 2021 12:00 AM".to_string())
        );
    }

    #[test]
    fn test_afternoon_uses_pm() {
        // 2021-01-01 13:05:00 UTC
        assert_eq!(
            format_timestamp_in(&json!(1609506300), &Utc).into_value(),
            json!("01 January 2021 01:05 PM")
        );
    }

    #[test]
    fn test_non_numeric_input_passes_through() {
        assert_eq!(
            format_timestamp_in(&json!("abc"), &Utc).into_value(),
            json!("abc")
        );
        assert_eq!(format_timestamp(&json!("abc")).into_value(), json!("abc"));
        assert_eq!(format_timestamp(&json!(null)).into_value(), json!(null));
        assert_eq!(
            format_timestamp(&json!({"nested": true})).into_value(),
            json!({"nested": true})
        );
    }

    #[test]
    fn test_local_formatting_produces_text() {
        let formatted = format_timestamp(&json!(1609459200));
        assert!(formatted.is_formatted());
    }
}

#[cfg(test)]
mod enrichment_tests {
    use super::*;

    #[test]
    fn test_basic_info_gains_derived_fields() {
        let mut doc = json!({
            "basicInfo": {"createAt": 1609459200, "lastLoginAt": 1612137600}
        });
        // 31 days and 12 hours after creation
        enrich_player_document_at(&mut doc, &Utc, utc(1612137600 + 12 * 3600));

        let basic = &doc["basicInfo"];
        assert_eq!(basic["createAt_formatted"], json!("01 January 2021 12:00 AM"));
        assert_eq!(basic["lastLoginAt_formatted"], json!("01 February 2021 12:00 AM"));
        assert_eq!(basic["days_played"], json!(31));
    }

    #[test]
    fn test_days_played_with_real_clock_is_non_negative() {
        let mut doc = json!({
            "basicInfo": {"createAt": 1609459200, "lastLoginAt": 1612137600}
        });
        enrich_player_document(&mut doc);

        let basic = &doc["basicInfo"];
        assert!(basic.get("createAt_formatted").is_some());
        assert!(basic.get("lastLoginAt_formatted").is_some());
        let days = basic["days_played"].as_i64().expect("integer days_played");
        assert!(days >= 0);
    }

    #[test]
    fn test_empty_document_is_unchanged() {
        let mut doc = json!({});
        enrich_player_document(&mut doc);
        assert_eq!(doc, json!({}));
    }

    #[test]
    fn test_captain_info_gets_formatted_fields_only() {
        let mut doc = json!({
            "captainBasicInfo": {"createAt": "1609459200", "lastLoginAt": 1612137600}
        });
        enrich_player_document_at(&mut doc, &Utc, utc(1612137600));

        let captain = &doc["captainBasicInfo"];
        assert_eq!(captain["createAt_formatted"], json!("01 January 2021 12:00 AM"));
        assert_eq!(captain["lastLoginAt_formatted"], json!("01 February 2021 12:00 AM"));
        assert!(captain.get("days_played").is_none());
    }

    #[test]
    fn test_missing_fields_are_skipped() {
        let mut doc = json!({
            "basicInfo": {"nickname": "Hero", "lastLoginAt": 1612137600},
            "captainBasicInfo": {"nickname": "Boss"}
        });
        enrich_player_document_at(&mut doc, &Utc, utc(1612137600));

        assert!(doc["basicInfo"].get("createAt_formatted").is_none());
        assert!(doc["basicInfo"].get("days_played").is_none());
        assert!(doc["basicInfo"].get("lastLoginAt_formatted").is_some());
        assert_eq!(doc["captainBasicInfo"], json!({"nickname": "Boss"}));
    }

    #[test]
    fn test_unparsable_create_at_omits_days_played() {
        let mut doc = json!({"basicInfo": {"createAt": "not-a-date"}});
        enrich_player_document_at(&mut doc, &Utc, utc(1612137600));

        assert_eq!(doc["basicInfo"]["createAt_formatted"], json!("not-a-date"));
        assert!(doc["basicInfo"].get("days_played").is_none());
    }

    #[test]
    fn test_partial_days_are_dropped() {
        let mut doc = json!({"basicInfo": {"createAt": 1609459200}});
        // 23h59m later
        enrich_player_document_at(&mut doc, &Utc, utc(1609459200 + 86_340));
        assert_eq!(doc["basicInfo"]["days_played"], json!(0));
    }

    #[test]
    fn test_future_create_at_floors_below_zero() {
        let mut doc = json!({"basicInfo": {"createAt": 1609459200}});
        // one hour before creation
        enrich_player_document_at(&mut doc, &Utc, utc(1609459200 - 3600));
        assert_eq!(doc["basicInfo"]["days_played"], json!(-1));
    }

    #[test]
    fn test_running_twice_keeps_original_fields() {
        let original = json!({
            "basicInfo": {"createAt": "1609459200", "lastLoginAt": 1612137600, "level": 70},
            "captainBasicInfo": {"createAt": 1609459200}
        });
        let mut doc = original.clone();
        enrich_player_document_at(&mut doc, &Utc, utc(1612137600));
        enrich_player_document_at(&mut doc, &Utc, utc(1612137600 + 86_400));

        assert_eq!(doc["basicInfo"]["createAt"], original["basicInfo"]["createAt"]);
        assert_eq!(doc["basicInfo"]["lastLoginAt"], original["basicInfo"]["lastLoginAt"]);
        assert_eq!(doc["basicInfo"]["level"], json!(70));
        assert_eq!(
            doc["captainBasicInfo"]["createAt"],
            original["captainBasicInfo"]["createAt"]
        );
        // recomputed against the later "now"
        assert_eq!(doc["basicInfo"]["days_played"], json!(32));
    }

    #[test]
    fn test_other_top_level_keys_untouched() {
        let mut doc = json!({
            "clanBasicInfo": {"createAt": 1609459200},
            "basicInfo": {"createAt": 1609459200}
        });
        enrich_player_document_at(&mut doc, &Utc, utc(1609459200));
        assert_eq!(doc["clanBasicInfo"], json!({"createAt": 1609459200}));
    }
}
