use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalcError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Platform {
    #[serde(rename = "NS550")]
    Ns550,
    #[serde(rename = "NS2000 P3")]
    Ns2000P3,
    #[serde(rename = "Aviti High")]
    AvitiHigh,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Ns550, Platform::Ns2000P3, Platform::AvitiHigh];

    pub fn label(self) -> &'static str {
        match self {
            Platform::Ns550 => "NS550",
            Platform::Ns2000P3 => "NS2000 P3",
            Platform::AvitiHigh => "Aviti High",
        }
    }
}

/// Panel presets and the sequencing output they consume per sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum PanelPreset {
    #[serde(rename = "Small Panel (160 genes)")]
    Small,
    #[serde(rename = "Medium Panel (500 genes)")]
    Medium,
    #[serde(rename = "Large Panel (WES)")]
    Wes,
    #[serde(rename = "Genome (WGS)")]
    Wgs,
}

impl PanelPreset {
    pub const ALL: [PanelPreset; 4] = [
        PanelPreset::Small,
        PanelPreset::Medium,
        PanelPreset::Wes,
        PanelPreset::Wgs,
    ];

    pub fn size_gb(self) -> f64 {
        match self {
            PanelPreset::Small => 5.0,
            PanelPreset::Medium => 6.0,
            PanelPreset::Wes => 45.0,
            PanelPreset::Wgs => 90.0,
        }
    }

    /// The preset whose per-sample output is exactly `size_gb`, if any.
    pub fn from_size(size_gb: f64) -> Option<PanelPreset> {
        PanelPreset::ALL.iter().copied().find(|p| p.size_gb() == size_gb)
    }

    pub fn label(self) -> &'static str {
        match self {
            PanelPreset::Small => "Small Panel (160 genes)",
            PanelPreset::Medium => "Medium Panel (500 genes)",
            PanelPreset::Wes => "Large Panel (WES)",
            PanelPreset::Wgs => "Genome (WGS)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Backbone {
    Panel,
    Exome,
    Genome,
}

impl Backbone {
    pub const ALL: [Backbone; 3] = [Backbone::Panel, Backbone::Exome, Backbone::Genome];

    pub fn label(self) -> &'static str {
        match self {
            Backbone::Panel => "Panel",
            Backbone::Exome => "Exome",
            Backbone::Genome => "Genome",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Positioning {
    #[serde(rename = "First-line")]
    FirstLine,
    Reflex,
}

impl Positioning {
    pub const ALL: [Positioning; 2] = [Positioning::FirstLine, Positioning::Reflex];

    pub fn label(self) -> &'static str {
        match self {
            Positioning::FirstLine => "First-line",
            Positioning::Reflex => "Reflex",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Region {
    National,
    Northeast,
    South,
    Midwest,
    West,
}

impl Region {
    pub const ALL: [Region; 5] = [
        Region::National,
        Region::Northeast,
        Region::South,
        Region::Midwest,
        Region::West,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Region::National => "National",
            Region::Northeast => "Northeast",
            Region::South => "South",
            Region::Midwest => "Midwest",
            Region::West => "West",
        }
    }
}

// Labels parse case-insensitively; spaces, dashes and underscores are
// interchangeable so that CLI values like `first-line` or `ns2000_p3` work.
fn normalize(s: &str) -> String {
    s.trim()
        .chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(|c| c.to_lowercase())
        .collect()
}

macro_rules! label_parsing {
    ($ty:ty, $category:literal) => {
        impl FromStr for $ty {
            type Err = CalcError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = normalize(s);
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| normalize(v.label()) == wanted)
                    .ok_or_else(|| CalcError::unknown($category, s))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = CalcError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

label_parsing!(Platform, "platform");
label_parsing!(Backbone, "backbone");
label_parsing!(Positioning, "positioning");
label_parsing!(Region, "region");

impl FromStr for PanelPreset {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalize(s);
        let short = match wanted.as_str() {
            "small" => Some(PanelPreset::Small),
            "medium" => Some(PanelPreset::Medium),
            "wes" | "large" => Some(PanelPreset::Wes),
            "wgs" | "genome" => Some(PanelPreset::Wgs),
            _ => None,
        };
        short
            .or_else(|| {
                PanelPreset::ALL
                    .iter()
                    .copied()
                    .find(|p| normalize(p.label()) == wanted)
            })
            .ok_or_else(|| CalcError::unknown("panel", s))
    }
}

impl TryFrom<String> for PanelPreset {
    type Error = CalcError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for PanelPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_loose_labels() {
        assert_eq!("first-line".parse::<Positioning>().unwrap(), Positioning::FirstLine);
        assert_eq!("NS2000_P3".parse::<Platform>().unwrap(), Platform::Ns2000P3);
        assert_eq!("wes".parse::<PanelPreset>().unwrap(), PanelPreset::Wes);
        assert_eq!(" midwest ".parse::<Region>().unwrap(), Region::Midwest);
    }

    #[test]
    fn deserializes_loose_labels_and_serializes_canonical() {
        let p: Positioning = serde_json::from_str("\"first-line\"").unwrap();
        assert_eq!(p, Positioning::FirstLine);
        assert_eq!(serde_json::to_string(&p).unwrap(), "\"First-line\"");
        let panel: PanelPreset = serde_json::from_str("\"wgs\"").unwrap();
        assert_eq!(serde_json::to_string(&panel).unwrap(), "\"Genome (WGS)\"");
        assert!(serde_json::from_str::<Region>("\"Pacific\"").is_err());
    }

    #[test]
    fn preset_from_size() {
        assert_eq!(PanelPreset::from_size(45.0), Some(PanelPreset::Wes));
        assert_eq!(PanelPreset::from_size(7.5), None);
    }

    #[test]
    fn rejects_outside_domain() {
        let err = "Pacific".parse::<Region>().unwrap_err();
        assert_eq!(err, CalcError::unknown("region", "Pacific"));
    }
}
