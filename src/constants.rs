//! Static lookup tables: team line colors and division display priority.

use phf::phf_map;

/// Line color used for abbreviations missing from [`TEAM_COLORS`]
pub const FALLBACK_TEAM_COLOR: &str = "#888888";

/// Primary color per team abbreviation, as hex strings
pub static TEAM_COLORS: phf::Map<&'static str, &'static str> = phf_map! {
    "ARI" => "#A71930",
    "ATL" => "#CE1141",
    "BAL" => "#DF4601",
    "BOS" => "#BD3039",
    "CHC" => "#0E3386",
    "CHW" => "#27251F",
    "CIN" => "#C6011F",
    "CLE" => "#0C2340",
    "COL" => "#33006F",
    "DET" => "#0C2340",
    "HOU" => "#EB6E1F",
    "KCR" => "#004687",
    "LAA" => "#BA0021",
    "LAD" => "#005A9C",
    "MIA" => "#00A3E0",
    "MIL" => "#12284B",
    "MIN" => "#002B5C",
    "NYM" => "#FF5910",
    "NYY" => "#0C2340",
    "OAK" => "#003831",
    "PHI" => "#E81828",
    "PIT" => "#FDB827",
    "SDP" => "#2F241D",
    "SEA" => "#005C5C",
    "SFG" => "#FD5A1E",
    "STL" => "#C41E3A",
    "TBR" => "#092C5C",
    "TEX" => "#003278",
    "TOR" => "#134A8E",
    "WSN" => "#AB0003",
    // Historical franchises
    "ANA" => "#BA0021",
    "CAL" => "#BA0021",
    "FLA" => "#00A3E0",
    "MON" => "#003087",
    "TBD" => "#092C5C",
    "SEP" => "#0A2351",
    "WSA" => "#0A2351",
    "KCA" => "#006241",
    "MLN" => "#0C2340",
    "BSN" => "#C8102E",
    "BRO" => "#005A9C",
    "NYG" => "#FD5A1E",
    "PHA" => "#003831",
    "SLB" => "#FF6600",
    "WSH" => "#0A2351",
};

/// Display rank per division key. Lower ranks draw first; NL precedes AL
/// so that each AL chart sits to the right of its NL partner.
pub static DIVISION_PRIORITY: phf::Map<&'static str, usize> = phf_map! {
    "NL East" => 0,
    "AL East" => 1,
    "NL Central" => 2,
    "AL Central" => 3,
    "NL West" => 4,
    "AL West" => 5,
    "NL" => 6,
    "AL" => 7,
};

/// Look up a team's line color, falling back to grey
pub fn team_color(abbreviation: &str) -> &'static str {
    TEAM_COLORS
        .get(abbreviation)
        .copied()
        .unwrap_or(FALLBACK_TEAM_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_color_known_and_unknown() {
        assert_eq!(team_color("BOS"), "#BD3039");
        assert_eq!(team_color("XXX"), FALLBACK_TEAM_COLOR);
    }

    #[test]
    fn test_nl_ranks_before_al_in_each_region() {
        for region in ["East", "Central", "West"] {
            let nl = DIVISION_PRIORITY[format!("NL {}", region).as_str()];
            let al = DIVISION_PRIORITY[format!("AL {}", region).as_str()];
            assert_eq!(nl + 1, al);
        }
    }
}
