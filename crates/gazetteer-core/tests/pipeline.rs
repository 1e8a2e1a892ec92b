//! End-to-end pipeline tests: ingest both CSV sources, sort, encode to a
//! file, and read the artifact back.

use gazetteer_core::{ingest, CapitalStatus, Gazetteer, GazetteerError, ValidationError};

const WORLD_HEADER: &str =
    "city,city_ascii,lat,lng,country,iso2,iso3,admin_name,capital,population,id\n";
const ZIPS_HEADER: &str = "zip,lat,lng,city,state_id,state_name,zcta,parent_zcta,population,density,county_fips,county_name,county_weights,county_names_all,county_fips_all,imprecise,military,timezone\n";

fn build(world_rows: &str, zip_rows: &str) -> Result<Gazetteer, GazetteerError> {
    let world = format!("{WORLD_HEADER}{world_rows}");
    let zips = format!("{ZIPS_HEADER}{zip_rows}");
    ingest::build_from_readers(world.as_bytes(), zips.as_bytes())
}

#[test]
fn springfield_scenario() {
    let mut gazetteer = build(
        "Springfield,Springfield,39.78,-89.65,United States,US,USA,Illinois,admin,114230,1234567\n",
        "62701,39.78,-89.65,Springfield,IL,Illinois,62701,,17000.5,1319.1,17167,Sangamon,,,,,,\n",
    )
    .unwrap();
    gazetteer.sort();

    assert_eq!(gazetteer.len(), 2);

    let city = gazetteer
        .records
        .iter()
        .find(|r| r.zip_code.is_empty())
        .unwrap();
    assert_eq!(city.search_name, "springfield");
    assert_eq!(city.capitol, CapitalStatus::Admin);
    assert_eq!(city.population, 114230);
    assert_eq!(city.state_id, "IL");
    assert_eq!(city.state_abbreviation, "Ill.");

    let zip = gazetteer
        .records
        .iter()
        .find(|r| !r.zip_code.is_empty())
        .unwrap();
    assert_eq!(zip.zip_code, "62701");
    assert_eq!(zip.search_name, "springfield");
    assert_eq!(zip.capitol, CapitalStatus::None);
    assert_eq!(zip.population, 17000);
    assert_eq!(zip.state_abbreviation, "Ill.");

    // Order is whatever the string keys say, nothing else: "62701" sorts
    // before "springfield" because '6' < 's' in byte order.
    let keys: Vec<&str> = gazetteer.records.iter().map(|r| r.sort_key()).collect();
    let mut expected = keys.clone();
    expected.sort_unstable();
    assert_eq!(keys, expected);
    assert_eq!(keys, vec!["62701", "springfield"]);
}

#[test]
fn adjacent_pairs_are_ordered_after_sort() {
    let mut gazetteer = build(
        concat!(
            "Köln,Koln,50.9422,6.9578,Germany,DE,DEU,North Rhine-Westphalia,,3522773,1\n",
            "Tokyo,Tokyo,35.6897,139.6922,Japan,JP,JPN,Tōkyō,primary,37732000,2\n",
            "Aurora,Aurora,41.7638,-88.2902,United States,US,USA,Illinois,,180542,3\n",
            "Zürich,Zurich,47.3744,8.5411,Switzerland,CH,CHE,Zürich,admin,436332,4\n",
        ),
        concat!(
            "90210,34.1,-118.41,Beverly Hills,CA,California,90210,,19813,,,,,,,,,\n",
            "00501,40.81,-73.04,Holtsville,NY,New York,00501,,,,,,,,,,,\n",
            "62701,39.78,-89.65,Springfield,IL,Illinois,62701,,17000,,,,,,,,,\n",
        ),
    )
    .unwrap();

    // Dual-name rows expand before sorting: Köln and Zürich contribute two
    // records each.
    assert_eq!(gazetteer.len(), 9);

    gazetteer.sort();
    for pair in gazetteer.records.windows(2) {
        assert!(
            pair[0].sort_key() <= pair[1].sort_key(),
            "{:?} sorted after {:?}",
            pair[0].sort_key(),
            pair[1].sort_key()
        );
    }
}

#[test]
fn artifact_survives_a_disk_round_trip() {
    let mut gazetteer = build(
        "Paris,Paris,48.8567,2.3522,France,FR,FRA,Île-de-France,primary,11060000,1\n",
        "62701,39.78,-89.65,Springfield,IL,Illinois,62701,,17000,,,,,,,,,\n",
    )
    .unwrap();
    gazetteer.sort();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("worldcities.bin");
    gazetteer.write_to_path(&path).unwrap();

    let reread = Gazetteer::read_from_path(&path).unwrap();
    assert_eq!(reread, gazetteer);
    assert_eq!(reread.encode(), gazetteer.encode());

    // Writing the same content twice produces byte-identical files.
    let second = dir.path().join("worldcities2.bin");
    gazetteer.write_to_path(&second).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn world_errors_are_collected_exhaustively_then_fail_the_run() {
    // Three bad rows; the run still reaches the end of the source and
    // fails with the first collected error.
    let err = build(
        concat!(
            "Good,Good,10.0,20.0,X,XX,XXX,,,100,1\n",
            "BadLat,BadLat,north,20.0,X,XX,XXX,,,100,2\n",
            "BadCap,BadCap,10.0,20.0,X,XX,XXX,,capital-city,100,3\n",
            "BadPop,BadPop,10.0,20.0,X,XX,XXX,,,many,4\n",
        ),
        "",
    )
    .unwrap_err();

    match err {
        GazetteerError::Validation(ValidationError::InvalidLatitude { value, line, row }) => {
            assert_eq!(value, "north");
            assert_eq!(line, 2);
            assert_eq!(row[0], "BadLat");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn zip_errors_surface_once_the_world_pass_succeeds() {
    let err = build(
        "Paris,Paris,48.8567,2.3522,France,FR,FRA,Île-de-France,primary,11060000,1\n",
        "00000,40.81,east,Holtsville,NY,New York,,,,,,,,,,,,\n",
    )
    .unwrap_err();

    assert!(matches!(
        err,
        GazetteerError::Validation(ValidationError::InvalidLongitude { line: 1, .. })
    ));
}

#[test]
fn quoted_fields_with_commas_parse_positionally() {
    let gazetteer = build(
        "\"Washington, D.C.\",Washington,38.9047,-77.0163,United States,US,USA,District of Columbia,primary,5434811,1\n",
        "",
    )
    .unwrap();

    // city and city_ascii differ, so the row expands to two records.
    assert_eq!(gazetteer.len(), 2);
    assert_eq!(gazetteer.records[0].name, "Washington, D.C.");
    assert_eq!(gazetteer.records[0].search_name, "washington, d.c.");
    assert_eq!(gazetteer.records[1].search_name, "washington");
    assert_eq!(gazetteer.records[0].state_id, "DC");
    assert_eq!(gazetteer.records[0].state_abbreviation, "D.C.");
}
