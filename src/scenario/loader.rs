use std::path::Path;

use anyhow::{Context, Result};

use crate::error::CalcError;
use crate::scenario::WorkflowInputs;
use crate::schema::categories::{Backbone, PanelPreset, Platform, Positioning, Region};

pub fn load_scenario(path: &Path) -> Result<WorkflowInputs> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read scenario {}", path.display()))?;
    parse_scenario(&content, &path.display().to_string())
}

/// Missing fields fall back to the built-in defaults. When only `panel` is
/// given, its preset size wins over the default `panel_size_gb`; when only
/// `panel_size_gb` is given, the preset label follows the size.
pub fn parse_scenario(content: &str, source: &str) -> Result<WorkflowInputs> {
    let raw: serde_json::Value =
        serde_json::from_str(content).with_context(|| format!("{}: malformed JSON", source))?;
    check_categories(&raw).with_context(|| format!("{}: scenario rejected", source))?;
    let explicit_size = raw.get("panel_size_gb").is_some();
    let explicit_panel = raw.get("panel").is_some_and(|v| !v.is_null());
    let inputs: WorkflowInputs = serde_json::from_value(raw)
        .with_context(|| format!("{}: invalid scenario fields", source))?;
    let inputs = match (explicit_panel, explicit_size) {
        (true, false) => match inputs.panel {
            Some(panel) => inputs.with_panel(panel),
            None => inputs,
        },
        (false, true) => {
            let size = inputs.panel_size_gb;
            inputs.with_panel_size(size)
        }
        _ => inputs,
    };
    inputs
        .validate()
        .with_context(|| format!("{}: scenario rejected", source))?;
    Ok(inputs)
}

// Categorical labels go through the same domain check as CLI values so an
// out-of-domain label surfaces as UnknownCategory.
fn check_categories(raw: &serde_json::Value) -> Result<(), CalcError> {
    let label = |key: &str| raw.get(key).and_then(|v| v.as_str());
    if let Some(s) = label("platform") {
        s.parse::<Platform>()?;
    }
    if let Some(s) = label("panel") {
        s.parse::<PanelPreset>()?;
    }
    if let Some(s) = label("backbone") {
        s.parse::<Backbone>()?;
    }
    if let Some(s) = label("positioning") {
        s.parse::<Positioning>()?;
    }
    if let Some(s) = label("region") {
        s.parse::<Region>()?;
    }
    Ok(())
}
