use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage1Validate;

impl Stage1Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Validate {
    fn name(&self) -> &'static str {
        "stage1_validate"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        ctx.inputs.validate()?;
        for w in ctx.inputs.warnings() {
            warn!(warning = %w, "scenario warning");
            ctx.warnings.push(w);
        }
        info!(
            platform = %ctx.inputs.platform,
            panel_size_gb = ctx.inputs.panel_size_gb,
            "inputs_valid"
        );
        Ok(())
    }
}
