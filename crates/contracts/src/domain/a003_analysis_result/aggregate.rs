use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Picks a level from two independent uniform rolls in `[0, 1)`.
    ///
    /// `first > 0.7` is High; otherwise `second > 0.4` is Medium; else Low.
    pub fn from_rolls(first: f64, second: f64) -> Self {
        if first > 0.7 {
            RiskLevel::High
        } else if second > 0.4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisDetails {
    pub parties: Vec<String>,
    pub dates: Vec<String>,
    pub amounts: Vec<String>,
    pub obligations: Vec<String>,
}

/// Result of (simulated) document analysis.
///
/// Nothing here is derived from the document bytes; see
/// [`super::generator::synthesize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub summary: String,
    pub key_points: Vec<String>,
    pub document_type: String,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub details: AnalysisDetails,
}
