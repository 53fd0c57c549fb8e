//! How-to-watch guidance keyed by broadcast network.

/// Guidance lines for an NFL game on `network`.
#[must_use]
pub fn nfl_notes(network: &str) -> Vec<String> {
    const NYC_CONFLICT: &str =
        "NYC carriage depends on Jets/Giants conflicts; check 506 coverage map near game day.";

    match network {
        "CBS" => vec![
            NYC_CONFLICT.to_string(),
            "If airing on WCBS-2 (NYC), Paramount+ will stream it; otherwise use NFL Sunday Ticket (out-of-market)."
                .to_string(),
        ],
        "FOX" => vec![
            NYC_CONFLICT.to_string(),
            "If airing on WNYW-5 (NYC), watch via pay-TV/vMVPD; otherwise use NFL Sunday Ticket (out-of-market)."
                .to_string(),
        ],
        "Prime Video" => vec!["National exclusive: Watch on Prime Video.".to_string()],
        "NBC" | "ESPN/ABC" | "ESPN" => vec![format!(
            "National window: {network}. Use the network app or your vMVPD."
        )],
        _ => vec!["Time/Network TBD. Placeholder assignment; check back later.".to_string()],
    }
}

/// Guidance lines for a men's college basketball game on `network`.
#[must_use]
pub fn ncaamb_notes(network: &str) -> Vec<String> {
    match network {
        "" | "TBD" => vec![
            "Network TBD. Times and TV assignments often finalize closer to game day.".to_string(),
        ],
        "ESPN" | "ESPN2" | "ESPNU" | "ACCN" => vec![format!(
            "TV: {network}. Stream via ESPN app with a participating provider."
        )],
        "ESPN+" => vec!["Streaming exclusive on ESPN+ (no cable login required).".to_string()],
        other => vec![format!("TV/Stream: {other}")],
    }
}
