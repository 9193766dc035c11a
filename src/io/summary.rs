use anyhow::Result;

use crate::calc::compare::WorkflowComparison;
use crate::ctx::Ctx;
use crate::io::{fmt_money, results_rows};

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let version = env!("CARGO_PKG_VERSION");
    let inputs = &ctx.inputs;
    let outputs = ctx.outputs()?;
    let panel = inputs
        .panel
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| format!("{} Gb panel", inputs.panel_size_gb));

    let mut out = String::new();
    out.push_str(&format!("kira-ngscost v{}\n", version));
    out.push_str(&format!("Results for {} on {}\n", panel, inputs.platform));
    out.push_str(&format!("Samples per run: {}\n", outputs.samples_per_run));
    for row in results_rows(inputs, outputs) {
        out.push_str(&format!(
            "{}: cost={} profit={} roi={} payback={}\n",
            row.workflow,
            fmt_money(row.total_cost),
            fmt_money(row.profit_per_test),
            row.roi_percent
                .map(|r| format!("{:.2}%", r))
                .unwrap_or_else(|| "N/A".to_string()),
            fmt_money(row.payback_samples),
        ));
    }
    out.push_str(&format!(
        "Profit delta (bundle vs current): {} per test\n",
        fmt_money(outputs.profit_delta)
    ));
    out.push_str(&format!(
        "Risk: {:.3} ({}) [{} x {} x {}]\n",
        outputs.risk.score,
        outputs.risk.band.label(),
        inputs.backbone,
        inputs.positioning,
        inputs.region
    ));

    match &outputs.comparison {
        Some(cmp) => push_comparison(&mut out, cmp),
        None => out.push_str("Comparison: N/A\n"),
    }

    if let Some(key) = &ctx.session_key {
        out.push_str(&format!("Session: {}\n", key));
    }

    Ok(out)
}

fn push_comparison(out: &mut String, cmp: &WorkflowComparison) {
    out.push_str(&format!(
        "Annual cost: current={:.2} reference={:.2} savings={:.2} ({} samples)\n",
        cmp.annual_cost_current, cmp.annual_cost_alt, cmp.annual_savings, cmp.annual_volume
    ));
    match cmp.break_even_samples() {
        Some(n) => out.push_str(&format!("Break-even: {} samples\n", n)),
        None => out.push_str("Break-even: no break-even point\n"),
    }
    out.push_str(&format!(
        "Turnaround saved: {:.1} days, FTE saved: {:.1}\n",
        cmp.turnaround_saved_days, cmp.fte_saved
    ));
}
