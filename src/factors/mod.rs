//! Payer-denial risk multipliers.
//!
//! One immutable table per scenario run, built from the bundled TSV and an
//! optional user overlay. A table only exists if every enumerated backbone,
//! positioning and region value has a positive multiplier.

mod loader;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Result, bail};

use crate::error::CalcError;
use crate::schema::categories::{Backbone, Positioning, Region};

pub use loader::{load_builtin_v1, load_factor_tsv, merge_defs};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FactorCategory {
    Backbone,
    Positioning,
    Region,
}

impl FactorCategory {
    pub fn label(self) -> &'static str {
        match self {
            FactorCategory::Backbone => "backbone",
            FactorCategory::Positioning => "positioning",
            FactorCategory::Region => "region",
        }
    }
}

impl FromStr for FactorCategory {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backbone" => Ok(FactorCategory::Backbone),
            "positioning" => Ok(FactorCategory::Positioning),
            "region" => Ok(FactorCategory::Region),
            _ => Err(CalcError::unknown("factor category", s)),
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactorDef {
    pub category: FactorCategory,
    pub value: String,
    pub factor: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskFactorTable {
    pub version: String,
    backbone: [f64; 3],
    positioning: [f64; 2],
    region: [f64; 5],
}

impl RiskFactorTable {
    pub fn from_defs(version: &str, defs: &[FactorDef]) -> Result<Self> {
        let mut backbone = [None; 3];
        let mut positioning = [None; 2];
        let mut region = [None; 5];

        for def in defs {
            let slot = match def.category {
                FactorCategory::Backbone => {
                    let v: Backbone = def.value.parse()?;
                    &mut backbone[index_of(&Backbone::ALL, v)]
                }
                FactorCategory::Positioning => {
                    let v: Positioning = def.value.parse()?;
                    &mut positioning[index_of(&Positioning::ALL, v)]
                }
                FactorCategory::Region => {
                    let v: Region = def.value.parse()?;
                    &mut region[index_of(&Region::ALL, v)]
                }
            };
            if !def.factor.is_finite() || def.factor <= 0.0 {
                return Err(CalcError::InvalidMagnitude {
                    field: "factor",
                    value: def.factor,
                    constraint: "a finite number > 0",
                }
                .into());
            }
            *slot = Some(def.factor);
        }

        Ok(Self {
            version: version.to_string(),
            backbone: complete(FactorCategory::Backbone, &Backbone::ALL, backbone)?,
            positioning: complete(FactorCategory::Positioning, &Positioning::ALL, positioning)?,
            region: complete(FactorCategory::Region, &Region::ALL, region)?,
        })
    }

    pub fn backbone(&self, v: Backbone) -> f64 {
        self.backbone[index_of(&Backbone::ALL, v)]
    }

    pub fn positioning(&self, v: Positioning) -> f64 {
        self.positioning[index_of(&Positioning::ALL, v)]
    }

    pub fn region(&self, v: Region) -> f64 {
        self.region[index_of(&Region::ALL, v)]
    }

    /// Largest score any combination can reach; used as the display ceiling.
    pub fn max_score(&self) -> f64 {
        max_of(&self.backbone) * max_of(&self.positioning) * max_of(&self.region)
    }

    /// Rows in category order, labels canonical.
    pub fn rows(&self) -> Vec<FactorDef> {
        let mut out = Vec::with_capacity(10);
        for v in Backbone::ALL {
            out.push(row(FactorCategory::Backbone, v.label(), self.backbone(v)));
        }
        for v in Positioning::ALL {
            out.push(row(FactorCategory::Positioning, v.label(), self.positioning(v)));
        }
        for v in Region::ALL {
            out.push(row(FactorCategory::Region, v.label(), self.region(v)));
        }
        out
    }
}

impl Default for RiskFactorTable {
    fn default() -> Self {
        Self {
            version: "v1".to_string(),
            backbone: [1.0, 1.2, 1.3],
            positioning: [1.3, 1.0],
            region: [1.0, 1.1, 1.2, 1.05, 1.15],
        }
    }
}

pub fn load_builtin() -> Result<RiskFactorTable> {
    let defs = load_builtin_v1()?;
    RiskFactorTable::from_defs("v1", &defs)
}

/// Built-in table with an optional TSV overlay.
pub fn load_table(overlay: Option<&Path>) -> Result<RiskFactorTable> {
    let builtin = load_builtin_v1()?;
    match overlay {
        None => RiskFactorTable::from_defs("v1", &builtin),
        Some(path) => {
            let user = load_factor_tsv(path)?;
            let merged = merge_defs(builtin, user);
            RiskFactorTable::from_defs("v1+user", &merged)
        }
    }
}

fn index_of<T: PartialEq + Copy>(all: &[T], v: T) -> usize {
    all.iter().position(|x| *x == v).unwrap_or(0)
}

fn complete<T: fmt::Display + Copy, const N: usize>(
    category: FactorCategory,
    all: &[T; N],
    slots: [Option<f64>; N],
) -> Result<[f64; N]> {
    let mut out = [0.0; N];
    for (i, slot) in slots.iter().enumerate() {
        match slot {
            Some(f) => out[i] = *f,
            None => bail!("missing {} factor for '{}'", category, all[i]),
        }
    }
    Ok(out)
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::MIN, f64::max)
}

fn row(category: FactorCategory, value: &str, factor: f64) -> FactorDef {
    FactorDef {
        category,
        value: value.to_string(),
        factor,
    }
}
