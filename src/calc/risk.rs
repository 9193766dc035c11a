use serde::{Deserialize, Serialize};

use crate::factors::RiskFactorTable;
use crate::schema::categories::{Backbone, Positioning, Region};

const LOW_CEILING: f64 = 1.05;
const HIGH_THRESHOLD: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub fn of(score: f64) -> Self {
        if score > HIGH_THRESHOLD {
            RiskBand::High
        } else if score <= LOW_CEILING {
            RiskBand::Low
        } else {
            RiskBand::Moderate
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RiskBand::Low => "low",
            RiskBand::Moderate => "moderate",
            RiskBand::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub backbone_factor: f64,
    pub positioning_factor: f64,
    pub region_factor: f64,
    pub score: f64,
    pub band: RiskBand,
    pub display_fraction: f64,
}

pub fn risk_score(
    table: &RiskFactorTable,
    backbone: Backbone,
    positioning: Positioning,
    region: Region,
) -> f64 {
    table.backbone(backbone) * table.positioning(positioning) * table.region(region)
}

/// Share of the display ceiling, capped at 1. The score itself is untouched.
pub fn display_fraction(score: f64, ceiling: f64) -> f64 {
    if ceiling <= 0.0 {
        return 1.0;
    }
    (score / ceiling).min(1.0)
}

pub fn assess(
    table: &RiskFactorTable,
    backbone: Backbone,
    positioning: Positioning,
    region: Region,
) -> RiskAssessment {
    let backbone_factor = table.backbone(backbone);
    let positioning_factor = table.positioning(positioning);
    let region_factor = table.region(region);
    let score = backbone_factor * positioning_factor * region_factor;
    RiskAssessment {
        backbone_factor,
        positioning_factor,
        region_factor,
        score,
        band: RiskBand::of(score),
        display_fraction: display_fraction(score, table.max_score()),
    }
}
