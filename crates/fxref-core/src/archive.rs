//! Selects the one data file to read out of a fetched feed archive.

use std::io::{Cursor, Read};

use zip::ZipArchive;

use crate::error::FeedError;

/// Entry names recognized outright, checked in this order. The name decides
/// whether the daily feed is read as single-day XML or single-row tabular
/// data, so the order is load-bearing.
const PREFERRED_ENTRIES: [&str; 4] = [
    "eurofxref-daily.xml",
    "eurofxref-hist.xml",
    "eurofxref.csv",
    "eurofxref-hist.csv",
];

/// Picks the data file inside `archive` and returns its name and content.
///
/// Selection order: an exact match from the fixed preference list, then the
/// first entry in listing order whose name ends in `.xml` or `.csv`
/// (case-insensitive). An archive with zero entries or with no
/// recognizable data file fails.
pub fn select_entry(archive: &[u8]) -> Result<(String, Vec<u8>), FeedError> {
    let mut zip = ZipArchive::new(Cursor::new(archive))?;

    if zip.is_empty() {
        return Err(FeedError::EmptyArchive);
    }

    // Enumerated by index so listing order is the central-directory order
    // the fallback rule is defined over.
    let names: Vec<String> = (0..zip.len())
        .map(|index| zip.by_index(index).map(|entry| entry.name().to_owned()))
        .collect::<Result<_, _>>()?;

    let chosen = PREFERRED_ENTRIES
        .iter()
        .find(|preferred| names.iter().any(|name| name == *preferred))
        .map(|preferred| (*preferred).to_owned())
        .or_else(|| names.iter().find(|name| has_data_extension(name)).cloned());

    let Some(chosen) = chosen else {
        return Err(FeedError::UnsupportedArchive { entries: names });
    };

    log::debug!("selected archive entry '{chosen}'");

    let mut entry = zip.by_name(&chosen)?;
    let mut content = Vec::with_capacity(entry.size() as usize);
    entry.read_to_end(&mut content)?;

    Ok((chosen, content))
}

fn has_data_extension(name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    lower.ends_with(".xml") || lower.ends_with(".csv")
}
