use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};

use crate::calc::projection::Projection;
use crate::ctx::Ctx;
use crate::io::{fmt_money, results_rows};

pub fn write_results_tsv(path: &Path, ctx: &Ctx) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    let outputs = ctx.outputs()?;
    writeln!(
        w,
        "workflow\tflowcell_cost_per_sample\twet_bench\tbioinformatics\ttotal_cost\treimbursement\tprofit_per_test\troi_percent\tpayback_samples"
    )?;
    for row in results_rows(&ctx.inputs, outputs) {
        writeln!(
            w,
            "{}\t{}\t{:.2}\t{:.2}\t{}\t{:.2}\t{}\t{}\t{}",
            row.workflow,
            fmt_money(row.flowcell_cost_per_sample),
            row.wet_bench,
            row.bioinformatics,
            fmt_money(row.total_cost),
            row.reimbursement,
            fmt_money(row.profit_per_test),
            fmt_money(row.roi_percent),
            fmt_money(row.payback_samples),
        )?;
    }
    w.flush()?;
    Ok(())
}

pub fn write_projection_tsv(path: &Path, projection: &Projection) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);

    writeln!(w, "volume\trevenue\tcost\tprofit")?;
    for p in projection {
        writeln!(
            w,
            "{}\t{:.2}\t{:.2}\t{:.2}",
            p.volume, p.revenue, p.cost, p.profit
        )?;
    }
    w.flush()?;
    Ok(())
}
