use anyhow::Result;
use chrono::Local;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::Stage;
use crate::session::{JsonFileStore, SessionSnapshot, SessionStore, session_key};

pub struct Stage6Session;

impl Stage6Session {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Session {
    fn name(&self) -> &'static str {
        "stage6_session"
    }

    fn run(&self, ctx: &mut Ctx) -> Result<()> {
        let Some(path) = ctx.session_path.clone() else {
            return Ok(());
        };
        let snapshot = SessionSnapshot::from_scenario(&ctx.inputs, ctx.outputs()?);
        let key = ctx
            .session_key
            .clone()
            .unwrap_or_else(|| session_key(&Local::now()));
        let mut store = JsonFileStore::new(path);
        store.save(&key, snapshot)?;
        info!(key = %key, store = %store.path().display(), "session_saved");
        ctx.session_key = Some(key);
        Ok(())
    }
}
