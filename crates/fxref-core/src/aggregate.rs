//! Currency-subset selection and historical means.

use std::collections::BTreeMap;

use crate::domain::RatesSnapshot;

/// Keeps only the requested codes that are present in `rates`.
///
/// Requested codes with no source value are silently omitted; reporting
/// them as missing is the renderer's concern.
pub fn select_currencies(rates: &BTreeMap<String, f64>, wanted: &[&str]) -> BTreeMap<String, f64> {
    wanted
        .iter()
        .filter_map(|code| rates.get(*code).map(|rate| ((*code).to_owned(), *rate)))
        .collect()
}

/// Arithmetic mean per requested code across `series`.
///
/// A code contributes nothing for snapshots it is absent from; a code with
/// zero observations is left out of the result entirely, never emitted as
/// zero.
pub fn compute_means(series: &[RatesSnapshot], wanted: &[&str]) -> BTreeMap<String, f64> {
    let mut means = BTreeMap::new();

    for code in wanted {
        let values: Vec<f64> = series
            .iter()
            .filter_map(|snapshot| snapshot.rate(code))
            .filter(|value| value.is_finite())
            .collect();

        if values.is_empty() {
            continue;
        }

        means.insert((*code).to_owned(), stable_mean(&values));
    }

    means
}

/// Neumaier-compensated sum divided by count. The running sum's rounding
/// error is carried in a second accumulator, keeping the result independent
/// of accumulation order.
fn stable_mean(values: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut compensation = 0.0_f64;

    for &value in values {
        let tentative = sum + value;
        if sum.abs() >= value.abs() {
            compensation += (sum - tentative) + value;
        } else {
            compensation += (value - tentative) + sum;
        }
        sum = tentative;
    }

    (sum + compensation) / values.len() as f64
}
