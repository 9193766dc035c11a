use anyhow::Result;
use std::time::Instant;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_scaffold;
pub mod stage1_validate;
pub mod stage2_factors;
pub mod stage3_evaluate;
pub mod stage4_projection;
pub mod stage5_output;
pub mod stage6_session;

pub trait Stage {
    fn name(&self) -> &'static str;
    fn run(&self, ctx: &mut Ctx) -> Result<()>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Validation and evaluation only; nothing touches the filesystem.
    pub fn calculate() -> Self {
        Self::new(vec![
            Box::new(stage1_validate::Stage1Validate::new()),
            Box::new(stage2_factors::Stage2Factors::new()),
            Box::new(stage3_evaluate::Stage3Evaluate::new()),
            Box::new(stage4_projection::Stage4Projection::new()),
        ])
    }

    pub fn full() -> Self {
        Self::new(vec![
            Box::new(stage0_scaffold::Stage0Scaffold::new()),
            Box::new(stage1_validate::Stage1Validate::new()),
            Box::new(stage2_factors::Stage2Factors::new()),
            Box::new(stage3_evaluate::Stage3Evaluate::new()),
            Box::new(stage4_projection::Stage4Projection::new()),
            Box::new(stage5_output::Stage5Output::new()),
            Box::new(stage6_session::Stage6Session::new()),
        ])
    }

    pub fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx) {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
