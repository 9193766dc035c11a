//! Per-sample cost and profitability primitives.
//!
//! Ratios that can be undefined return `Option`; only the two allocation
//! primitives surface `DivisionUndefined`, because their callers must decide
//! how to present a run that fits no samples.

use crate::error::CalcError;

/// Samples that fit on one run: floor(output / per-sample consumption).
pub fn samples_per_run(flowcell_output_gb: f64, panel_size_gb: f64) -> Result<u64, CalcError> {
    if panel_size_gb.is_nan() || panel_size_gb <= 0.0 {
        return Err(CalcError::DivisionUndefined {
            what: "samples per run (panel size <= 0)",
        });
    }
    let n = (flowcell_output_gb / panel_size_gb).floor();
    if n.is_nan() || n <= 0.0 {
        return Ok(0);
    }
    Ok(n as u64)
}

/// Flow cell share plus every extra per-sample cost, in order.
pub fn cost_per_sample(
    flowcell_cost: f64,
    samples_per_run: u64,
    extra_costs: &[f64],
) -> Result<f64, CalcError> {
    if samples_per_run == 0 {
        return Err(CalcError::DivisionUndefined {
            what: "cost per sample (no samples per run)",
        });
    }
    let share = flowcell_cost / samples_per_run as f64;
    Ok(extra_costs.iter().fold(share, |acc, c| acc + c))
}

pub fn profit(reimbursement: f64, total_cost: f64) -> f64 {
    reimbursement - total_cost
}

pub fn roi(profit: f64, cost: f64) -> Option<f64> {
    if cost == 0.0 {
        return None;
    }
    Some(profit / cost * 100.0)
}

/// Samples needed to recover one sample's cost; only meaningful at a profit.
pub fn payback_samples(cost: f64, profit: f64) -> Option<f64> {
    if profit > 0.0 { Some(cost / profit) } else { None }
}

pub fn annual_cost(per_sample_cost: f64, volume: u64, fixed_annual_cost: f64) -> f64 {
    per_sample_cost * volume as f64 + fixed_annual_cost
}

/// `None` means no break-even point exists.
pub fn break_even_volume(fixed_cost: f64, per_sample_savings: f64) -> Option<f64> {
    if per_sample_savings > 0.0 {
        Some(fixed_cost / per_sample_savings)
    } else {
        None
    }
}

/// Half-away-from-zero rounding to cents.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
