//! Tests for the `/ics` feeds.
//!
//! Every game in the static tables is in the past, so with a stub source
//! attached each one goes through the score lookup.

use std::sync::Arc;

use chrono::NaiveDate;
use salvo::http::StatusCode;

use super::helpers::*;

const ICS_TYPE: &str = "text/calendar; charset=utf-8";

const BILLS_RAVENS: &str = r#"{
    "events": [{
        "id": "401772510",
        "status": {"type": {"completed": true, "state": "post"}},
        "competitions": [{
            "competitors": [
                {"homeAway": "home", "score": "41",
                 "team": {"abbreviation": "BUF", "displayName": "Buffalo Bills", "shortDisplayName": "Bills"}},
                {"homeAway": "away", "score": "40",
                 "team": {"abbreviation": "BAL", "displayName": "Baltimore Ravens", "shortDisplayName": "Ravens"}}
            ],
            "headlines": [{"shortLinkText": "Bills rally past Ravens"}]
        }]
    }]
}"#;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid fixture date")
}

// ============================================================================
// Envelope and headers
// ============================================================================

#[test_log::test(tokio::test)]
async fn bills_feed_is_a_calendar() {
    let service = create_test_service(None);
    let res = get(&service, "/ics/bills").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type.as_deref(), Some(ICS_TYPE));
    assert!(res.body.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
    assert!(res.body.ends_with("END:VCALENDAR\r\n"));
    assert!(res.body.contains("X-WR-CALNAME:Bills — 11218\r\n"));
    assert!(res.body.contains("X-APPLE-CALENDAR-COLOR:#00338D\r\n"));
    assert!(res.body.contains("REFRESH-INTERVAL;VALUE=DURATION:PT4H\r\n"));
    assert_eq!(res.body.matches("BEGIN:VEVENT\r\n").count(), 17);
    assert!(!res.body.replace("\r\n", "").contains('\n'));
}

#[test_log::test(tokio::test)]
async fn bills_feed_uses_query_parameters() {
    let service = create_test_service(None);
    let res = get(&service, "/ics/bills?zip=14201&subs=sundayticket").await;

    assert_eq!(res.status, StatusCode::OK);
    let body = unfold(&res.body);
    assert!(body.contains("NAME:Bills — 14201\r\n"));
    assert!(body.contains("Market: 14201 (NYC area assumptions)\\nSubscriptions: sundayticket\\n"));
    assert!(!body.contains("paramount"));
}

#[test_log::test(tokio::test)]
async fn bills_feed_rejects_malformed_zip() {
    let service = create_test_service(None);

    for path in ["/ics/bills?zip=abcde", "/ics/bills?zip=1121", "/ics/bills?zip=112189"] {
        let res = get(&service, path).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{path}");
        assert!(res.body.contains("zip must be five digits"), "{path}");
    }
}

#[test_log::test(tokio::test)]
async fn uids_are_stable_across_requests() {
    let service = create_test_service(None);
    let uids = |body: &str| -> Vec<String> {
        unfold(body)
            .lines()
            .filter(|l| l.starts_with("UID:"))
            .map(str::to_string)
            .collect()
    };

    let first = get(&service, "/ics/bills?zip=11218").await;
    let second = get(&service, "/ics/bills?zip=90210").await;

    assert_eq!(uids(&first.body).len(), 17);
    assert_eq!(uids(&first.body), uids(&second.body));
    assert!(
        uids(&first.body)
            .contains(&"UID:bills-2025-week10-2025-11-09@teamwatcher.local".to_string())
    );
}

#[test_log::test(tokio::test)]
async fn unc_feed_is_a_calendar() {
    let service = create_test_service(None);
    let res = get(&service, "/ics/unc").await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.content_type.as_deref(), Some(ICS_TYPE));
    assert!(res.body.contains("NAME:UNC Men's Basketball\r\n"));
    assert!(res.body.contains("COLOR:#7BAFD4\r\n"));
    assert_eq!(res.body.matches("BEGIN:VEVENT\r\n").count(), 15);
    assert_eq!(res.body.matches("TRIGGER:-PT60M\r\n").count(), 15);
    assert_eq!(res.body.matches("TRIGGER:-PT10M\r\n").count(), 15);
    assert!(res.body.contains("DTSTART:20251112T000000Z\r\n"));
}

// ============================================================================
// Results
// ============================================================================

#[test_log::test(tokio::test)]
async fn final_scores_rewrite_events() {
    let source = Arc::new(FixtureSource {
        boards: vec![(day(2025, 9, 7), BILLS_RAVENS)],
        ..FixtureSource::default()
    });
    let service = create_test_service(Some(source.clone()));
    let res = get(&service, "/ics/bills?zip=14201").await;

    assert_eq!(res.status, StatusCode::OK);
    let body = unfold(&res.body);
    assert!(body.contains("SUMMARY:Vs Baltimore (W Bills 41\\, Ravens 40)\r\n"));
    assert!(body.contains(
        "DESCRIPTION:Final: Bills 41\\, Ravens 40\\nBills rally past Ravens\\nBox score: https://www.espn.com/nfl/game/_/gameId/401772510\\n"
    ));
    assert_eq!(body.matches("Result pending. Check back later.").count(), 16);
    assert_eq!(source.calls(), 17);

    // Scoreboards are cached per day for the life of the service.
    let again = get(&service, "/ics/bills?zip=14201").await;
    assert_eq!(source.calls(), 17);
    assert!(unfold(&again.body).contains("SUMMARY:Vs Baltimore (W Bills 41\\, Ravens 40)\r\n"));
}

#[test_log::test(tokio::test)]
async fn failed_lookups_keep_every_event() {
    let source = Arc::new(FixtureSource {
        fail: true,
        ..FixtureSource::default()
    });
    let service = create_test_service(Some(source));

    let bills = get(&service, "/ics/bills").await;
    assert_eq!(bills.status, StatusCode::OK);
    assert_eq!(bills.body.matches("BEGIN:VEVENT\r\n").count(), 17);
    assert_eq!(unfold(&bills.body).matches("Result pending").count(), 17);

    let unc = get(&service, "/ics/unc").await;
    assert_eq!(unc.status, StatusCode::OK);
    assert_eq!(unfold(&unc.body).matches("Result pending").count(), 15);
}
