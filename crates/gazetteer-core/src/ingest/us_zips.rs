// crates/gazetteer-core/src/ingest/us_zips.rs

//! Row validator for the US zip-codes source (18 positional columns).

use super::{field, parse_population};
use crate::error::ValidationError;
use crate::model::{CapitalStatus, CityRecord, Gazetteer};
use crate::states;

/// Column schema of the US zip-codes table. Columns past `population`
/// (density, county data, flags, timezone) are not carried into records.
mod col {
    pub const ZIP: usize = 0;
    pub const LAT: usize = 1;
    pub const LNG: usize = 2;
    pub const CITY: usize = 3;
    pub const STATE_ID: usize = 4;
    pub const STATE_NAME: usize = 5;
    pub const POPULATION: usize = 8;
}

/// Emits exactly one record per valid row. Zip records are always
/// US-scoped: fixed country fields, capital status forced to `None`, and
/// the postal state id taken straight from the source rather than looked
/// up.
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
    let population = row
        .get(col::POPULATION)
        .and_then(|raw| parse_population(raw));

    if let (Some(latitude), Some(longitude), Some(population)) =
        (latitude, longitude, population)
    {
        let city = field(row, col::CITY);
        let state_name = field(row, col::STATE_NAME);

        gazetteer.push(CityRecord {
            name: city.to_string(),
            search_name: city.to_lowercase(),
            zip_code: field(row, col::ZIP).to_string(),
            latitude,
            longitude,
            country: "United States".to_string(),
            iso2: "US".to_string(),
            iso3: "USA".to_string(),
            admin_name: state_name.to_string(),
            state_id: field(row, col::STATE_ID).to_string(),
            state_abbreviation: states::state_abbreviation(state_name).to_string(),
            capitol: CapitalStatus::None,
            population,
        });
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
        if population.is_none() {
            errors.push(ValidationError::InvalidPopulation {
                value: field(row, col::POPULATION).to_string(),
                row: row.to_vec(),
                line,
            });
        }
    }
}
