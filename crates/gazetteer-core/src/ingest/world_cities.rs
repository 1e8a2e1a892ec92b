// crates/gazetteer-core/src/ingest/world_cities.rs

//! Row validator for the world-cities source (11 positional columns).

use super::{field, parse_population};
use crate::error::ValidationError;
use crate::model::{CapitalStatus, CityRecord, Gazetteer};
use crate::states;

/// Column schema of the world-cities table.
mod col {
    pub const CITY: usize = 0;
    pub const CITY_ASCII: usize = 1;
    pub const LAT: usize = 2;
    pub const LNG: usize = 3;
    pub const COUNTRY: usize = 4;
    pub const ISO2: usize = 5;
    pub const ISO3: usize = 6;
    pub const ADMIN_NAME: usize = 7;
    pub const CAPITAL: usize = 8;
    pub const POPULATION: usize = 9;
}

/// Emits one record per row, or two when the ASCII transliteration of the
/// city name differs from the primary name (same display name, second
/// search name), so the city is findable under either spelling. A row with
/// any invalid field emits no record and one error per failed field.
///
/// The population column must be present: a row truncated before it fails
/// validation. Only a present-but-empty value maps to the `-1` sentinel.
pub(super) fn validate_row(
    row: &[String],
    line: usize,
    gazetteer: &mut Gazetteer,
    errors: &mut Vec<ValidationError>,
) {
    let latitude = field(row, col::LAT).parse::<f64>().ok();
    let longitude = field(row, col::LNG).parse::<f64>().ok();
    let capitol = CapitalStatus::parse(field(row, col::CAPITAL));
    let population = row
        .get(col::POPULATION)
        .and_then(|raw| parse_population(raw));

    if let (Some(latitude), Some(longitude), Some(capitol), Some(population)) =
        (latitude, longitude, capitol, population)
    {
        let city = field(row, col::CITY);
        let admin_name = field(row, col::ADMIN_NAME);

        let make = |search_name: String| CityRecord {
            name: city.to_string(),
            search_name,
            zip_code: String::new(),
            latitude,
            longitude,
            country: field(row, col::COUNTRY).to_string(),
            iso2: field(row, col::ISO2).to_string(),
            iso3: field(row, col::ISO3).to_string(),
            admin_name: admin_name.to_string(),
            state_id: states::state_id(admin_name).to_string(),
            state_abbreviation: states::state_abbreviation(admin_name).to_string(),
            capitol,
            population,
        };

        gazetteer.push(make(city.to_lowercase()));

        let city_ascii = field(row, col::CITY_ASCII);
        if city != city_ascii {
            gazetteer.push(make(city_ascii.to_lowercase()));
        }
    } else {
        if latitude.is_none() {
            errors.push(ValidationError::InvalidLatitude {
                value: field(row, col::LAT).to_string(),
                row: row.to_vec(),
                line,
            });
        }
        if longitude.is_none() {
            errors.push(ValidationError::InvalidLongitude {
                value: field(row, col::LNG).to_string(),
                row: row.to_vec(),
                line,
            });
        }
        if capitol.is_none() {
            errors.push(ValidationError::InvalidCapitalStatus {
                value: field(row, col::CAPITAL).to_string(),
                row: row.to_vec(),
                line,
            });
        }
        if population.is_none() {
            errors.push(ValidationError::InvalidPopulation {
                value: field(row, col::POPULATION).to_string(),
                row: row.to_vec(),
                line,
            });
        }
    }
}
