// crates/gazetteer-core/src/states.rs

//! Static lookup table for US state names.
//!
//! Maps a state's full name to its postal abbreviation ("CA") and its
//! traditional abbreviation ("Calif."). Built once on first use, never
//! mutated afterwards. Missing names resolve to the empty string at the
//! call sites, never to an error.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// (full name, postal abbreviation, traditional abbreviation) for the 50
/// states plus the District of Columbia.
const STATE_TABLE: &[(&str, &str, &str)] = &[
    ("Alabama", "AL", "Ala."),
    ("Alaska", "AK", "Alaska"),
    ("Arizona", "AZ", "Ariz."),
    ("Arkansas", "AR", "Ark."),
    ("California", "CA", "Calif."),
    ("Colorado", "CO", "Colo."),
    ("Connecticut", "CT", "Conn."),
    ("Delaware", "DE", "Del."),
    ("Florida", "FL", "Fla."),
    ("Georgia", "GA", "Ga."),
    ("Hawaii", "HI", "Hawaii"),
    ("Idaho", "ID", "Idaho"),
    ("Illinois", "IL", "Ill."),
    ("Indiana", "IN", "Ind."),
    ("Iowa", "IA", "Iowa"),
    ("Kansas", "KS", "Kans."),
    ("Kentucky", "KY", "Ky."),
    ("Louisiana", "LA", "La."),
    ("Maine", "ME", "Maine"),
    ("Maryland", "MD", "Md."),
    ("Massachusetts", "MA", "Mass."),
    ("Michigan", "MI", "Mich."),
    ("Minnesota", "MN", "Minn."),
    ("Mississippi", "MS", "Miss."),
    ("Missouri", "MO", "Mo."),
    ("Montana", "MT", "Mont."),
    ("Nebraska", "NE", "Nebr."),
    ("Nevada", "NV", "Nev."),
    ("New Hampshire", "NH", "N.H."),
    ("New Jersey", "NJ", "N.J."),
    ("New Mexico", "NM", "N.Mex."),
    ("New York", "NY", "N.Y."),
    ("North Carolina", "NC", "N.C."),
    ("North Dakota", "ND", "N.Dak."),
    ("Ohio", "OH", "Ohio"),
    ("Oklahoma", "OK", "Okla."),
    ("Oregon", "OR", "Ore."),
    ("Pennsylvania", "PA", "Pa."),
    ("Rhode Island", "RI", "R.I."),
    ("South Carolina", "SC", "S.C."),
    ("South Dakota", "SD", "S.Dak."),
    ("Tennessee", "TN", "Tenn."),
    ("Texas", "TX", "Tex."),
    ("Utah", "UT", "Utah"),
    ("Vermont", "VT", "Vt."),
    ("Virginia", "VA", "Va."),
    ("Washington", "WA", "Wash."),
    ("West Virginia", "WV", "W.Va."),
    ("Wisconsin", "WI", "Wisc."),
    ("Wyoming", "WY", "Wyo."),
    ("District of Columbia", "DC", "D.C."),
];

static STATE_IDS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    STATE_TABLE.iter().map(|&(name, id, _)| (name, id)).collect()
});

static STATE_ABBREVIATIONS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    STATE_TABLE
        .iter()
        .map(|&(name, _, abbr)| (name, abbr))
        .collect()
});

/// Postal abbreviation for a full state name, or `""` if unknown.
pub fn state_id(full_name: &str) -> &'static str {
    STATE_IDS.get(full_name).copied().unwrap_or("")
}

/// Traditional abbreviation for a full state name, or `""` if unknown.
pub fn state_abbreviation(full_name: &str) -> &'static str {
    STATE_ABBREVIATIONS.get(full_name).copied().unwrap_or("")
}
