use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::error::CalcError;
use crate::factors::{FactorCategory, FactorDef};
use crate::schema::categories::{Backbone, Positioning, Region};

pub fn load_builtin_v1() -> Result<Vec<FactorDef>> {
    let content = include_str!("../../assets/factors/risk_factors_v1.tsv");
    parse_factor_tsv(content, "built-in v1")
}

pub fn load_factor_tsv(path: &Path) -> Result<Vec<FactorDef>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read factor TSV {}", path.display()))?;
    parse_factor_tsv(&content, &path.display().to_string())
}

/// User rows replace built-in rows with the same category and value.
pub fn merge_defs(builtin: Vec<FactorDef>, user: Vec<FactorDef>) -> Vec<FactorDef> {
    if user.is_empty() {
        return builtin;
    }
    let mut user_map: HashMap<(FactorCategory, String), FactorDef> = HashMap::new();
    let mut user_order = Vec::new();
    for def in user {
        let key = (def.category, def.value.clone());
        if !user_map.contains_key(&key) {
            user_order.push(key.clone());
        }
        user_map.insert(key, def);
    }

    let mut merged = Vec::with_capacity(builtin.len() + user_map.len());
    for def in builtin {
        let key = (def.category, def.value.clone());
        match user_map.remove(&key) {
            Some(user_def) => merged.push(user_def),
            None => merged.push(def),
        }
    }
    for key in user_order {
        if let Some(def) = user_map.remove(&key) {
            merged.push(def);
        }
    }
    merged
}

fn parse_factor_tsv(content: &str, source: &str) -> Result<Vec<FactorDef>> {
    let mut out = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parts: Vec<&str> = trimmed.split('\t').collect();
        if parts.len() != 3 {
            bail!("{}:{} malformed TSV (expected 3 columns)", source, line_no);
        }
        let category_str = parts[0].trim();
        let value_str = parts[1].trim();
        let factor_str = parts[2].trim();
        if category_str.is_empty() || value_str.is_empty() || factor_str.is_empty() {
            bail!("{}:{} empty field in TSV", source, line_no);
        }

        let category = category_str
            .parse::<FactorCategory>()
            .with_context(|| format!("{}:{}", source, line_no))?;
        let value = canonical_value(category, value_str)
            .with_context(|| format!("{}:{}", source, line_no))?;
        let factor = factor_str
            .parse::<f64>()
            .with_context(|| format!("{}:{} factor is not a number", source, line_no))?;
        if !factor.is_finite() || factor <= 0.0 {
            return Err(CalcError::InvalidMagnitude {
                field: "factor",
                value: factor,
                constraint: "a finite number > 0",
            })
            .with_context(|| format!("{}:{}", source, line_no));
        }

        out.push(FactorDef {
            category,
            value,
            factor,
        });
    }
    Ok(out)
}

// Values are stored under their canonical label so overlays written as
// `first-line` still replace the built-in `First-line` row.
fn canonical_value(category: FactorCategory, value: &str) -> Result<String, CalcError> {
    let label = match category {
        FactorCategory::Backbone => value.parse::<Backbone>()?.label(),
        FactorCategory::Positioning => value.parse::<Positioning>()?.label(),
        FactorCategory::Region => value.parse::<Region>()?.label(),
    };
    Ok(label.to_string())
}
