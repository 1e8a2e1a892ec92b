// crates/gazetteer-core/src/model.rs
use serde::{Deserialize, Serialize};

/// Whether a city is a national capital, an administrative (state/province)
/// capital, a minor seat, or none of those.
///
/// The source data stores this as one of the literals `"primary"`,
/// `"admin"`, `"minor"` or the empty string; anything else fails
/// validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapitalStatus {
    Primary,
    Admin,
    Minor,
    None,
}

impl CapitalStatus {
    /// Parses the source literal. The empty string is normalized to
    /// [`CapitalStatus::None`]; unknown literals return `Option::None` so
    /// the caller can raise a validation error instead of defaulting.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "" | "none" => Some(Self::None),
            "primary" => Some(Self::Primary),
            "admin" => Some(Self::Admin),
            "minor" => Some(Self::Minor),
            _ => None,
        }
    }

    /// Single-byte wire code used by the binary artifact.
    pub fn code(self) -> u8 {
        match self {
            Self::Primary => 0,
            Self::Admin => 1,
            Self::Minor => 2,
            Self::None => 3,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Admin),
            2 => Some(Self::Minor),
            3 => Some(Self::None),
            _ => None,
        }
    }
}

/// One canonical gazetteer entry: either a world city (`zip_code` empty)
/// or a US zip code (`zip_code` non-empty).
///
/// Records are constructed once during ingestion and never mutated. Field
/// order here is the field order of the binary artifact.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// Display name exactly as given by the source, case preserved.
    pub name: String,
    /// Lowercase name variant used as a sort/lookup key.
    pub search_name: String,
    /// Empty for world-city records.
    pub zip_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: String,
    pub iso2: String,
    pub iso3: String,
    /// State/province/region full name.
    pub admin_name: String,
    /// Postal abbreviation, e.g. "CA". Empty when unknown.
    pub state_id: String,
    /// Traditional abbreviation, e.g. "Calif.". Empty when unknown.
    pub state_abbreviation: String,
    pub capitol: CapitalStatus,
    /// `-1` means "present but empty" in the source, which is tolerated.
    pub population: i64,
}

impl CityRecord {
    /// The key the final ordering is computed over: the zip code when
    /// present, otherwise the lowercase search name.
    pub fn sort_key(&self) -> &str {
        if !self.zip_code.is_empty() {
            &self.zip_code
        } else {
            &self.search_name
        }
    }
}

/// Aggregate counts over a gazetteer, as printed by the CLI `stats`
/// command.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GazetteerStats {
    pub records: usize,
    pub zip_codes: usize,
    pub cities: usize,
    pub primary_capitals: usize,
    pub admin_capitals: usize,
    pub minor_capitals: usize,
}

/// The ordered collection of canonical records. This is the sole
/// top-level entity the binary artifact serializes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Gazetteer {
    pub records: Vec<CityRecord>,
}

impl Gazetteer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn push(&mut self, record: CityRecord) {
        self.records.push(record);
    }

    /// Imposes the final total order: ascending byte-lexicographic over
    /// [`CityRecord::sort_key`].
    ///
    /// The relative order of records sharing an identical key is
    /// unspecified (unstable sort, matching the original pipeline);
    /// consumers must not rely on any particular tie-break.
    pub fn sort(&mut self) {
        self.records
            .sort_unstable_by(|a, b| a.sort_key().cmp(b.sort_key()));
    }

    /// Renders the first `limit` records as JSON lines, for the CLI dump
    /// view.
    #[cfg(feature = "json")]
    pub fn json_lines(&self, limit: usize) -> serde_json::Result<Vec<String>> {
        self.records
            .iter()
            .take(limit)
            .map(serde_json::to_string)
            .collect()
    }

    pub fn stats(&self) -> GazetteerStats {
        let mut stats = GazetteerStats {
            records: self.records.len(),
            zip_codes: 0,
            cities: 0,
            primary_capitals: 0,
            admin_capitals: 0,
            minor_capitals: 0,
        };
        for record in &self.records {
            if record.zip_code.is_empty() {
                stats.cities += 1;
            } else {
                stats.zip_codes += 1;
            }
            match record.capitol {
                CapitalStatus::Primary => stats.primary_capitals += 1,
                CapitalStatus::Admin => stats.admin_capitals += 1,
                CapitalStatus::Minor => stats.minor_capitals += 1,
                CapitalStatus::None => {}
            }
        }
        stats
    }
}
