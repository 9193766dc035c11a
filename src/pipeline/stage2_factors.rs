use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::factors;
use crate::pipeline::Stage;

pub struct Stage2Factors;

impl Stage2Factors {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Factors {
    fn name(&self) -> &'static str {
        "stage2_factors"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let table = factors::load_table(ctx.factors_path.as_deref())?;
        info!(version = %table.version, max_score = table.max_score(), "factors_ready");
        ctx.report.factors_version = table.version.clone();
        ctx.factors = Some(table);
        Ok(())
    }
}
