//! Wire format of the backend's `/portfolio` endpoint.
//!
//! ```json
//! {
//!   "holdings": [{ "symbol": "BTC", "coins": 0.5, "cost": 15000, "value": 30000,
//!                  "gain": 15000, "gain_percent": 100, "price": 60000 }],
//!   "summary": { "total_cost": 15000, "total_equity": 30000,
//!                "absolute_gain": 15000, "gain_percent": 100 }
//! }
//! ```
//!
//! Older deployments answer with the bare summary object instead of the
//! wrapped form; both are accepted.

use coinfolio_core::{Holding, PortfolioSummary, Snapshot};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ApiError;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum PortfolioResponse {
    Wrapped {
        summary: SummaryPayload,
        #[serde(default)]
        holdings: Vec<HoldingPayload>,
    },
    Bare(SummaryPayload),
}

#[derive(Debug, Deserialize)]
struct SummaryPayload {
    total_cost: Option<f64>,
    total_equity: Option<f64>,
    absolute_gain: Option<f64>,
    gain_percent: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct HoldingPayload {
    symbol: String,
    #[serde(default)]
    coins: f64,
    #[serde(default)]
    cost: f64,
    #[serde(default)]
    value: f64,
    gain: Option<f64>,
    gain_percent: Option<f64>,
    price: Option<f64>,
}

/// Error body returned by the backend on failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: Option<String>,
}

/// Decodes a `/portfolio` response body into a snapshot.
///
/// Missing `total_equity` or any non-finite number is a decode error; the
/// caller must not mistake a malformed answer for a zero portfolio.
pub fn decode_portfolio(body: &str) -> Result<Snapshot, ApiError> {
    let response: PortfolioResponse = serde_json::from_str(body)
        .map_err(|e| ApiError::Decode(format!("Invalid portfolio response: {}", e)))?;

    let (summary, holdings) = match response {
        PortfolioResponse::Wrapped { summary, holdings } => (summary, holdings),
        PortfolioResponse::Bare(summary) => (summary, Vec::new()),
    };

    let summary = summary.into_summary()?;
    let holdings = holdings
        .into_iter()
        .map(HoldingPayload::into_holding)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Snapshot::new(summary, holdings))
}

impl SummaryPayload {
    fn into_summary(self) -> Result<PortfolioSummary, ApiError> {
        let total_equity = self
            .total_equity
            .ok_or_else(|| ApiError::Decode("Summary is missing total_equity".to_string()))?;
        let total_equity = to_decimal("total_equity", total_equity)?;
        let total_cost = to_decimal("total_cost", self.total_cost.unwrap_or(0.0))?;

        // Derive whatever the backend left out
        let mut summary = PortfolioSummary::from_totals(total_cost, total_equity);
        if let Some(gain) = self.absolute_gain {
            summary.absolute_gain = to_decimal("absolute_gain", gain)?;
        }
        if let Some(pct) = self.gain_percent {
            summary.gain_percent = to_decimal("gain_percent", pct)?;
        }
        Ok(summary)
    }
}

impl HoldingPayload {
    fn into_holding(self) -> Result<Holding, ApiError> {
        let mut holding = Holding::new(
            self.symbol,
            to_decimal("coins", self.coins)?,
            to_decimal("cost", self.cost)?,
            to_decimal("value", self.value)?,
        );
        holding.gain = self.gain.map(|v| to_decimal("gain", v)).transpose()?;
        holding.gain_percent = self
            .gain_percent
            .map(|v| to_decimal("gain_percent", v))
            .transpose()?;
        holding.price = self.price.map(|v| to_decimal("price", v)).transpose()?;
        Ok(holding)
    }
}

fn to_decimal(field: &str, value: f64) -> Result<Decimal, ApiError> {
    Decimal::try_from(value)
        .map_err(|_| ApiError::Decode(format!("Invalid {}: {}", field, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_decode_wrapped_response() {
        let body = r#"{
            "holdings": [
                {"symbol": "BTC", "coins": 0.5, "cost": 15000, "value": 30000,
                 "gain": 15000, "gain_percent": 100, "price": 60000}
            ],
            "summary": {"total_cost": 15000, "total_equity": 30000,
                        "absolute_gain": 15000, "gain_percent": 100}
        }"#;

        let snapshot = decode_portfolio(body).unwrap();
        assert_eq!(snapshot.summary.total_equity, dec!(30000));
        assert_eq!(snapshot.summary.gain_percent, dec!(100));
        assert_eq!(snapshot.holdings.len(), 1);
        let btc = &snapshot.holdings[0];
        assert_eq!(btc.symbol, "BTC");
        assert_eq!(btc.coins, dec!(0.5));
        assert_eq!(btc.price, Some(dec!(60000)));
    }

    #[test]
    fn test_decode_zero_summary_is_not_an_error() {
        let body = r#"{"holdings": [], "summary": {"total_cost": 0, "total_equity": 0,
                      "absolute_gain": 0, "gain_percent": 0}}"#;

        let snapshot = decode_portfolio(body).unwrap();
        assert!(snapshot.summary.is_suspect());
        assert!(snapshot.holdings.is_empty());
    }

    #[test]
    fn test_decode_bare_summary() {
        let body = r#"{"total_cost": 100, "total_equity": 150}"#;

        let snapshot = decode_portfolio(body).unwrap();
        assert_eq!(snapshot.summary.absolute_gain, dec!(50));
        assert_eq!(snapshot.summary.gain_percent, dec!(50));
        assert!(snapshot.holdings.is_empty());
    }

    #[test]
    fn test_missing_total_equity_is_decode_error() {
        let body = r#"{"holdings": [], "summary": {"total_cost": 100}}"#;
        assert!(matches!(decode_portfolio(body), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_garbage_is_decode_error() {
        assert!(matches!(decode_portfolio("<html>"), Err(ApiError::Decode(_))));
        assert!(matches!(decode_portfolio("[]"), Err(ApiError::Decode(_))));
    }
}
