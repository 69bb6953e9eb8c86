//! Portfolio domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::GAIN_PERCENT_PRECISION;

/// Aggregate figures for a whole portfolio.
///
/// The four fields are computed together by the backend and must stay
/// consistent with each other, so a summary is always replaced whole.
/// Amounts serialize as decimal strings to keep cached figures exact.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Sum of cost basis across holdings.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_cost: Decimal,
    /// Current mark-to-market value.
    #[serde(with = "rust_decimal::serde::str")]
    pub total_equity: Decimal,
    /// `total_equity - total_cost`, may be negative.
    #[serde(with = "rust_decimal::serde::str")]
    pub absolute_gain: Decimal,
    /// Gain relative to cost, in percent. Zero when cost is zero.
    #[serde(with = "rust_decimal::serde::str")]
    pub gain_percent: Decimal,
}

impl PortfolioSummary {
    pub fn zero() -> Self {
        PortfolioSummary {
            total_cost: Decimal::ZERO,
            total_equity: Decimal::ZERO,
            absolute_gain: Decimal::ZERO,
            gain_percent: Decimal::ZERO,
        }
    }

    /// Builds a summary from its two primary totals, deriving the gain fields
    /// the same way the backend does.
    pub fn from_totals(total_cost: Decimal, total_equity: Decimal) -> Self {
        let absolute_gain = total_equity - total_cost;
        let gain_percent = if total_cost > Decimal::ZERO {
            (absolute_gain / total_cost * Decimal::ONE_HUNDRED).round_dp(GAIN_PERCENT_PRECISION)
        } else {
            Decimal::ZERO
        };

        PortfolioSummary {
            total_cost,
            total_equity,
            absolute_gain,
            gain_percent,
        }
    }

    /// A summary is valid when its total equity is non-negative.
    ///
    /// `Decimal` has no NaN or infinity, so finiteness holds by construction;
    /// non-finite floats are rejected when the wire payload is decoded.
    pub fn is_valid(&self) -> bool {
        self.total_equity >= Decimal::ZERO
    }

    /// Zero equity is syntactically valid but may be a transient reading taken
    /// while the backend is still pricing holdings.
    pub fn is_suspect(&self) -> bool {
        self.total_equity.is_zero()
    }

    pub fn has_positive_equity(&self) -> bool {
        self.total_equity > Decimal::ZERO
    }
}

/// One row per traded asset. Ordering is display order only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub symbol: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub coins: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub cost: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub value: Decimal,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub gain: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub gain_percent: Option<Decimal>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::str_option"
    )]
    pub price: Option<Decimal>,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, coins: Decimal, cost: Decimal, value: Decimal) -> Self {
        Holding {
            symbol: symbol.into(),
            coins,
            cost,
            value,
            gain: None,
            gain_percent: None,
            price: None,
        }
    }
}

/// Summary and holdings forming one coherent point-in-time view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub summary: PortfolioSummary,
    #[serde(default)]
    pub holdings: Vec<Holding>,
}

impl Snapshot {
    pub fn new(summary: PortfolioSummary, holdings: Vec<Holding>) -> Self {
        Snapshot { summary, holdings }
    }

    pub fn total_equity(&self) -> Decimal {
        self.summary.total_equity
    }

    /// Only snapshots with strictly positive equity may become the cached
    /// known-good value.
    pub fn is_persistable(&self) -> bool {
        self.summary.has_positive_equity()
    }
}
