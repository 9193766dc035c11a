use anyhow::Result;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;

pub struct Stage4Projection;

impl Stage4Projection {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Projection {
    fn name(&self) -> &'static str {
        "stage4_projection"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let projection = ctx
            .outputs()?
            .projection(&ctx.inputs)
            .map(|p| p.with_max_volume(ctx.projection_max));
        if projection.is_none() {
            return Ok(());
        }
        ctx.projection = projection;
        info!(max_volume = ctx.projection_max, "projection_ready");
        Ok(())
    }
}
