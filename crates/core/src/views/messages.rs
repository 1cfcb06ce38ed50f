//! User-facing messages, in Norwegian.

/// A detail lookup named an unknown municipality number.
pub const NO_MATCH_DETAILS: &str = "Ingen treff på nummeret, dobbeltskjekk at det er gyldig.";

/// Both sides of a comparison are the same municipality.
pub const SAME_NUMBERS: &str = "Nummerne er like.";

/// A comparison named at least one unknown municipality number.
pub const NO_MATCH_COMPARISON: &str =
    "Ingen treff på de nummerne, dobbeltskjekk at de er gyldige.";

pub fn winner(winner: &str, loser: &str) -> String {
    format!("{} slår {} i utdanning.", winner, loser)
}

pub fn tie(first: &str, second: &str) -> String {
    format!("Uavgjort mellom {} og {} i utdanning.", first, second)
}
