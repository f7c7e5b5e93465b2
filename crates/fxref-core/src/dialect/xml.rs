//! Cube-XML dialect: dates and rates ride on element attributes.

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use super::{parse_rate, RateDialect};
use crate::domain::{RateDate, RatesSnapshot};
use crate::error::FeedError;

/// Parser for the XML dialect.
///
/// Any element carrying a `time` attribute opens one snapshot; its direct
/// children carrying both `currency` and `rate` attributes contribute
/// entries. An element whose `time` value does not parse is skipped
/// wholesale, and a rate that is not a usable number is dropped without
/// failing the sheet.
pub struct XmlDialect;

struct OpenSnapshot {
    as_of: RateDate,
    rates: BTreeMap<String, f64>,
    depth: usize,
}

impl OpenSnapshot {
    fn close(self) -> RatesSnapshot {
        RatesSnapshot::new(self.as_of, self.rates)
    }
}

impl RateDialect for XmlDialect {
    fn parse_daily(&self, content: &[u8]) -> Result<RatesSnapshot, FeedError> {
        // Chronologically latest wins; the series is already sorted.
        self.parse_series(content)?
            .pop()
            .ok_or(FeedError::NoData { feed: "daily" })
    }

    fn parse_series(&self, content: &[u8]) -> Result<Vec<RatesSnapshot>, FeedError> {
        let text = String::from_utf8_lossy(content);
        let mut reader = Reader::from_str(&text);

        let mut snapshots = Vec::new();
        let mut open: Option<OpenSnapshot> = None;
        let mut depth = 0usize;

        loop {
            match reader.read_event()? {
                Event::Start(element) => {
                    depth += 1;
                    visit_element(&element, depth, false, &mut open, &mut snapshots)?;
                }
                Event::Empty(element) => {
                    visit_element(&element, depth + 1, true, &mut open, &mut snapshots)?;
                }
                Event::End(_) => {
                    if let Some(finished) = open.take_if(|snapshot| snapshot.depth == depth) {
                        snapshots.push(finished.close());
                    }
                    depth = depth.saturating_sub(1);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if let Some(unclosed) = open.take() {
            snapshots.push(unclosed.close());
        }

        snapshots.sort_by(|a, b| a.as_of().cmp(&b.as_of()));
        Ok(snapshots)
    }
}

fn visit_element(
    element: &BytesStart<'_>,
    element_depth: usize,
    self_closing: bool,
    open: &mut Option<OpenSnapshot>,
    snapshots: &mut Vec<RatesSnapshot>,
) -> Result<(), FeedError> {
    if let Some(time) = attribute(element, "time")? {
        // Unparsable `time` skips the element and everything under it.
        if let Ok(as_of) = RateDate::parse(&time) {
            if let Some(previous) = open.take() {
                snapshots.push(previous.close());
            }

            if self_closing {
                snapshots.push(RatesSnapshot::new(as_of, BTreeMap::new()));
            } else {
                *open = Some(OpenSnapshot {
                    as_of,
                    rates: BTreeMap::new(),
                    depth: element_depth,
                });
            }
        }
        return Ok(());
    }

    let Some(snapshot) = open.as_mut() else {
        return Ok(());
    };

    // Only direct children of the snapshot element contribute rates.
    if element_depth != snapshot.depth + 1 {
        return Ok(());
    }

    let (Some(currency), Some(rate_text)) = (
        attribute(element, "currency")?,
        attribute(element, "rate")?,
    ) else {
        return Ok(());
    };

    if let Some(rate) = parse_rate(&rate_text) {
        snapshot.rates.insert(currency, rate);
    }

    Ok(())
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, FeedError> {
    let attr = element
        .try_get_attribute(name)
        .map_err(quick_xml::Error::from)?;

    match attr {
        Some(attr) => {
            let value = attr.unescape_value().map_err(quick_xml::Error::from)?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENVELOPE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<gesmes:Envelope xmlns:gesmes="http://www.gesmes.org/xml/2002-08-01" xmlns="http://www.ecb.int/vocabulary/2002-08-01/eurofxref">
  <gesmes:subject>Reference rates</gesmes:subject>
  <Cube>
    <Cube time="2024-01-03">
      <Cube currency="USD" rate="1.0919"/>
      <Cube currency="JPY" rate="155.91"/>
    </Cube>
    <Cube time="2024-01-02">
      <Cube currency="USD" rate="1.0956"/>
      <Cube currency="GBP" rate="0.86645"/>
    </Cube>
  </Cube>
</gesmes:Envelope>"#;

    #[test]
    fn parses_every_dated_element_sorted_ascending() {
        let series = XmlDialect
            .parse_series(ENVELOPE.as_bytes())
            .expect("must parse");

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].as_of().to_string(), "2024-01-02");
        assert_eq!(series[1].as_of().to_string(), "2024-01-03");
        assert_eq!(series[0].rate("GBP"), Some(0.86645));
        assert_eq!(series[1].rate("USD"), Some(1.0919));
    }

    #[test]
    fn daily_returns_chronologically_latest() {
        let daily = XmlDialect
            .parse_daily(ENVELOPE.as_bytes())
            .expect("must parse");

        assert_eq!(daily.as_of().to_string(), "2024-01-03");
        assert_eq!(daily.rate("JPY"), Some(155.91));
    }

    #[test]
    fn element_with_unparsable_time_is_skipped_entirely() {
        let xml = r#"<root>
  <Cube time="whenever">
    <Cube currency="USD" rate="1.0"/>
  </Cube>
  <Cube time="2024-01-02">
    <Cube currency="USD" rate="1.1"/>
  </Cube>
</root>"#;

        let series = XmlDialect.parse_series(xml.as_bytes()).expect("must parse");
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].rate("USD"), Some(1.1));
    }

    #[test]
    fn unparsable_rate_is_dropped_not_zeroed() {
        let xml = r#"<root><Cube time="2024-01-02">
  <Cube currency="USD" rate="oops"/>
  <Cube currency="JPY" rate="155.91"/>
</Cube></root>"#;

        let series = XmlDialect.parse_series(xml.as_bytes()).expect("must parse");
        assert_eq!(series[0].rate("USD"), None);
        assert_eq!(series[0].rate("JPY"), Some(155.91));
    }

    #[test]
    fn dated_element_without_children_yields_empty_snapshot() {
        let xml = r#"<root><Cube time="2024-01-02"/></root>"#;

        let series = XmlDialect.parse_series(xml.as_bytes()).expect("must parse");
        assert_eq!(series.len(), 1);
        assert!(series[0].is_empty());
    }

    #[test]
    fn sheet_without_dated_elements_is_empty_series_but_no_daily() {
        let xml = r#"<root><Cube currency="USD" rate="1.0"/></root>"#;

        let series = XmlDialect.parse_series(xml.as_bytes()).expect("must parse");
        assert!(series.is_empty());

        let error = XmlDialect.parse_daily(xml.as_bytes()).expect_err("must fail");
        assert!(matches!(error, FeedError::NoData { feed: "daily" }));
    }

    #[test]
    fn grandchildren_do_not_contribute_to_a_snapshot() {
        let xml = r#"<root><Cube time="2024-01-02">
  <group><Cube currency="USD" rate="1.0"/></group>
  <Cube currency="JPY" rate="155.91"/>
</Cube></root>"#;

        let series = XmlDialect.parse_series(xml.as_bytes()).expect("must parse");
        assert_eq!(series[0].rate("USD"), None);
        assert_eq!(series[0].rate("JPY"), Some(155.91));
    }
}
