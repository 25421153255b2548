use std::cmp::Ordering;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::models::bs::{EuropeanCall, EuropeanPut};
use crate::models::traits::OptionPricer;
use crate::pricing::config::PricingConfig;
use crate::pricing::types::{BatchPricingResult, ContractParams, ContractRow};

/// CSV row structure for contract files
#[derive(Debug, Deserialize)]
struct CsvContractRow {
    #[serde(default)]
    label: String,
    asset_price: f64,
    asset_volatility: f64,
    strike_price: f64,
    time_to_expiration: f64,
    risk_free_rate: f64,
}

impl From<CsvContractRow> for ContractRow {
    fn from(r: CsvContractRow) -> Self {
        let label = r.label.trim();
        ContractRow {
            label: (!label.is_empty()).then(|| label.to_string()),
            contract: ContractParams::new(
                r.asset_price,
                r.asset_volatility,
                r.strike_price,
                r.time_to_expiration,
                r.risk_free_rate,
            ),
        }
    }
}

/// Read contracts from any CSV source with a header row.
///
/// Expected columns: `label,asset_price,asset_volatility,strike_price,time_to_expiration,risk_free_rate`.
/// Column order does not matter and `label` may be left empty or omitted.
pub fn read_contracts_csv<R: io::Read>(reader: R) -> Result<Vec<ContractRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize().enumerate() {
        // +2: one for the header, one for 1-based line numbers
        let row: CsvContractRow =
            result.with_context(|| format!("Malformed contract on line {}", i + 2))?;
        rows.push(row.into());
    }
    debug!(count = rows.len(), "loaded contracts");
    Ok(rows)
}

/// Load contracts from a CSV file.
pub fn load_contracts_csv(path: impl AsRef<Path>) -> Result<Vec<ContractRow>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .with_context(|| format!("Failed to open contract file {}", path.display()))?;
    read_contracts_csv(file).with_context(|| format!("Invalid contract file {}", path.display()))
}

/// Price both legs of every contract.
///
/// Rejected contracts are kept in the output with their errors. Results are
/// sorted by strike price in ascending order; rows with equal strikes keep
/// their input order.
pub fn price_contracts(rows: Vec<ContractRow>, config: &PricingConfig) -> Vec<BatchPricingResult> {
    let call = EuropeanCall {
        policy: config.degenerate_policy,
    };
    let put = EuropeanPut {
        policy: config.degenerate_policy,
    };

    let mut results = Vec::with_capacity(rows.len());
    for row in rows {
        let result = BatchPricingResult {
            call: call.price(&row.contract),
            put: put.price(&row.contract),
            label: row.label,
            contract: row.contract,
        };

        if let Err(e) = result.call.as_ref().and(result.put.as_ref()) {
            warn!(label = ?result.label, error = %e, "contract rejected");
        } else if config.verbosity >= 2 {
            debug!(
                label = ?result.label,
                call = ?result.call,
                put = ?result.put,
                "contract priced"
            );
        }
        results.push(result);
    }

    if config.verbosity >= 1 {
        let failed = results.iter().filter(|r| !r.is_ok()).count();
        info!(total = results.len(), failed, "batch priced");
    }

    results.sort_by(|a, b| {
        a.contract
            .strike_price
            .partial_cmp(&b.contract.strike_price)
            .unwrap_or(Ordering::Equal)
    });
    results
}
