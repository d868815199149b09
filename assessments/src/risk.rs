//! Risk level labels as reported by the scoring API.

#[cfg(test)]
#[path = "risk_test.rs"]
mod risk_test;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Three-band risk classification attached to each prediction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const ALL: [Self; 3] = [Self::Low, Self::Moderate, Self::High];

    /// Parse an API label such as `"Medium Risk"` or a bare `"high"`.
    #[must_use]
    pub fn parse_label(raw: &str) -> Option<Self> {
        let lowered = raw.trim().to_ascii_lowercase();
        let word = lowered.strip_suffix("risk").unwrap_or(&lowered).trim();
        match word {
            "low" => Some(Self::Low),
            "moderate" | "medium" => Some(Self::Moderate),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }

    /// Legend label used by the distribution chart.
    #[must_use]
    pub fn legend(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Moderate Risk",
            Self::High => "High Risk",
        }
    }

    /// Label the risk API uses in `outcome_<model>` fields.
    #[must_use]
    pub fn api_label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Moderate => "Medium Risk",
            Self::High => "High Risk",
        }
    }

    /// Fill colour for charts.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Low => "#10B981",
            Self::Moderate => "#F59E0B",
            Self::High => "#EF4444",
        }
    }

    /// Badge modifier class for tables and result cards.
    #[must_use]
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Low => "risk-badge risk-badge--low",
            Self::Moderate => "risk-badge risk-badge--moderate",
            Self::High => "risk-badge risk-badge--high",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RiskLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.api_label())
    }
}

impl<'de> Deserialize<'de> for RiskLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error as _;
        let raw = String::deserialize(deserializer)?;
        Self::parse_label(&raw).ok_or_else(|| D::Error::custom(format!("unknown risk label: {raw}")))
    }
}
