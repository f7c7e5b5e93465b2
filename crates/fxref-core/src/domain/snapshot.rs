use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::RateDate;
use crate::aggregate;

/// Reference rates for every observed currency as of one calendar date.
///
/// A snapshot is a value: built once by a dialect parser from one unit of
/// raw input and never mutated afterwards. Selecting a currency subset
/// produces a new snapshot; the rates map is owned by its snapshot and only
/// handed out by reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatesSnapshot {
    as_of: RateDate,
    rates: BTreeMap<String, f64>,
}

impl RatesSnapshot {
    pub fn new(as_of: RateDate, rates: BTreeMap<String, f64>) -> Self {
        Self { as_of, rates }
    }

    pub fn as_of(&self) -> RateDate {
        self.as_of
    }

    pub fn rates(&self) -> &BTreeMap<String, f64> {
        &self.rates
    }

    pub fn rate(&self, code: &str) -> Option<f64> {
        self.rates.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// New snapshot keeping only the requested codes that are present.
    pub fn select(&self, wanted: &[&str]) -> Self {
        Self {
            as_of: self.as_of,
            rates: aggregate::select_currencies(&self.rates, wanted),
        }
    }
}
