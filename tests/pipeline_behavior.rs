//! End-to-end pipeline behavior against canned feed archives: fetch both
//! feeds, reduce to the target currency set, and render the report.

use std::sync::Arc;

use fxref_core::{
    compute_means, render, FeedClient, FeedConfig, FeedError, RatesSnapshot, StaticHttpClient,
    TARGET_CURRENCIES,
};
use fxref_tests::{zip_archive, DAILY_XML, HIST_CSV};

const DAILY_URL: &str = "http://feed/daily.zip";
const HIST_URL: &str = "http://feed/hist.zip";

fn config() -> FeedConfig {
    FeedConfig {
        daily_url: String::from(DAILY_URL),
        historical_url: String::from(HIST_URL),
        ..FeedConfig::default()
    }
}

fn client(daily: Vec<u8>, historical: Vec<u8>) -> FeedClient {
    let http = StaticHttpClient::new()
        .with_response(DAILY_URL, daily)
        .with_response(HIST_URL, historical);
    FeedClient::with_http_client(config(), Arc::new(http))
}

#[test]
fn when_both_feeds_resolve_the_full_report_matches_the_golden_output() {
    let daily_zip = zip_archive(&[("eurofxref-daily.xml", DAILY_XML.as_bytes())]);
    let hist_zip = zip_archive(&[("eurofxref-hist.csv", HIST_CSV.as_bytes())]);
    let client = client(daily_zip, hist_zip);

    let daily = client.load_daily().expect("daily feed loads");
    let historical = client.load_historical().expect("historical feed loads");

    let daily = daily.select(&TARGET_CURRENCIES);
    let historical: Vec<RatesSnapshot> = historical
        .iter()
        .map(|snapshot| snapshot.select(&TARGET_CURRENCIES))
        .collect();
    let means = compute_means(&historical, &TARGET_CURRENCIES);
    let report = render(&daily, &means, &TARGET_CURRENCIES);

    let expected = "\
# ECB Exchange Rates (EUR base)

**Daily rates date:** 2024-01-04

| Currency Code | Rate | Mean Historical Rate |
|---|---:|---:|
| USD | 1.086543 | 2.000000 |
| SEK | 11.250000 | 11.500000 |
| GBP | N/A | N/A |
| JPY | 160.000000 | 155.000000 |
";
    assert_eq!(report, expected);
}

#[test]
fn when_the_daily_archive_carries_a_csv_the_tabular_dialect_is_used() {
    let sheet = "Date,USD,SEK\n2024-01-04,1.0865,11.25\n";
    let daily_zip = zip_archive(&[("eurofxref.csv", sheet.as_bytes())]);
    let client = client(daily_zip, Vec::new());

    let daily = client.load_daily().expect("daily feed loads");

    assert_eq!(daily.as_of().to_string(), "2024-01-04");
    assert_eq!(daily.rate("SEK"), Some(11.25));
}

#[test]
fn when_the_daily_xml_has_several_dates_the_latest_wins() {
    let xml = r#"<root>
  <Cube time="2024-01-02"><Cube currency="USD" rate="1.0956"/></Cube>
  <Cube time="2024-01-04"><Cube currency="USD" rate="1.0865"/></Cube>
  <Cube time="2024-01-03"><Cube currency="USD" rate="1.0919"/></Cube>
</root>"#;
    let daily_zip = zip_archive(&[("eurofxref-daily.xml", xml.as_bytes())]);
    let client = client(daily_zip, Vec::new());

    let daily = client.load_daily().expect("daily feed loads");
    assert_eq!(daily.as_of().to_string(), "2024-01-04");
}

#[test]
fn when_the_historical_sheet_is_header_only_the_load_reports_no_data() {
    let hist_zip = zip_archive(&[("eurofxref-hist.csv", b"Date,USD,\n")]);
    let client = client(Vec::new(), hist_zip);

    let error = client.load_historical().expect_err("load fails");
    assert!(matches!(error, FeedError::NoData { feed: "historical" }));
}

#[test]
fn when_a_feed_archive_is_empty_the_load_fails_before_parsing() {
    let client = client(zip_archive(&[]), Vec::new());

    let error = client.load_daily().expect_err("load fails");
    assert!(matches!(error, FeedError::EmptyArchive));
}

#[test]
fn when_the_fetch_itself_fails_no_other_step_runs() {
    let http = StaticHttpClient::new();
    let client = FeedClient::with_http_client(config(), Arc::new(http));

    let error = client.load_historical().expect_err("load fails");
    assert!(matches!(error, FeedError::Transport(_)));
}
