use exoplanet_query::ingestion::csv::{ingest_csv_from_path, ingest_csv_from_reader};
use exoplanet_query::types::{ExoplanetRecord, FilterOptionSet};

#[test]
fn ingest_csv_from_path_happy_path() {
    let rows = ingest_csv_from_path("tests/fixtures/exoplanets.csv").unwrap();

    assert_eq!(rows.len(), 18);
    assert_eq!(
        rows[0],
        ExoplanetRecord::new(2008, "Imaging", "HR 8799", "W. M. Keck Observatory")
    );
    assert!(rows.iter().all(|r| !r.host_name.contains('"')));
}

#[test]
fn fixture_filter_options_cover_distinct_values() {
    let rows = ingest_csv_from_path("tests/fixtures/exoplanets.csv").unwrap();
    let opts = FilterOptionSet::from_records(&rows);

    assert_eq!(opts.years.first(), Some(&1992));
    assert_eq!(opts.years.last(), Some(&2019));
    assert_eq!(opts.years.len(), 13);
    assert!(opts.years.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(
        opts.methods,
        vec![
            "Imaging".to_string(),
            "Microlensing".to_string(),
            "Pulsar Timing".to_string(),
            "Radial Velocity".to_string(),
            "Transit".to_string(),
        ]
    );
    assert_eq!(opts.hosts.len(), 15);
    for host in &opts.hosts {
        assert!(rows.iter().any(|r| &r.host_name == host));
    }
}

#[test]
fn ingest_csv_allows_reordered_columns() {
    let input = "hostname,disc_facility,disc_year,discoverymethod\n\"HostA\",F1,2008,Imaging\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let rows = ingest_csv_from_reader(&mut rdr).unwrap();
    assert_eq!(rows, vec![ExoplanetRecord::new(2008, "Imaging", "HostA", "F1")]);
}

#[test]
fn ingest_csv_errors_on_unrecognized_table() {
    let input = "id,name\n1,Ada\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("schema mismatch"));
    assert!(msg.contains("disc_year"));
}

#[test]
fn ingest_csv_errors_on_year_parse() {
    let input = "disc_year,discoverymethod,hostname,disc_facility\n20x8,Imaging,HostA,F1\n";
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(input.as_bytes());

    let err = ingest_csv_from_reader(&mut rdr).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("failed to parse value"));
    assert!(msg.contains("column 'disc_year'"));
}

#[test]
fn ingest_csv_missing_file_is_an_error() {
    assert!(ingest_csv_from_path("tests/fixtures/does_not_exist.csv").is_err());
}
