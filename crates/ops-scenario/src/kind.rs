//! The closed set of disruption scenarios and their catalog entries.

use std::fmt;
use std::str::FromStr;

use crate::ScenarioError;

/// A named disruption scenario.
///
/// Scenario identifiers arrive as strings from the host; [`FromStr`] is the
/// only place an unknown identifier can enter, and it fails with
/// [`ScenarioError::InvalidScenario`].  Everything downstream matches on this
/// enum exhaustively.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ScenarioKind {
    Delay,
    Breakdown,
    Weather,
    Maintenance,
    Signal,
    Passenger,
}

impl ScenarioKind {
    /// Every scenario, in catalog order.
    pub const ALL: [ScenarioKind; 6] = [
        ScenarioKind::Delay,
        ScenarioKind::Breakdown,
        ScenarioKind::Weather,
        ScenarioKind::Maintenance,
        ScenarioKind::Signal,
        ScenarioKind::Passenger,
    ];

    /// Stable string identifier.
    pub fn id(self) -> &'static str {
        match self {
            ScenarioKind::Delay       => "delay",
            ScenarioKind::Breakdown   => "breakdown",
            ScenarioKind::Weather     => "weather",
            ScenarioKind::Maintenance => "maintenance",
            ScenarioKind::Signal      => "signal",
            ScenarioKind::Passenger   => "passenger",
        }
    }

    pub fn title(self) -> &'static str {
        self.entry().title
    }

    /// The catalog card for this scenario.
    pub fn entry(self) -> CatalogEntry {
        match self {
            ScenarioKind::Delay => CatalogEntry {
                title:       "Express Train Delay (20 min)",
                description: "Simulate major express train delay and analyze cascading effects on schedule",
                impact:      "High impact on punctuality",
            },
            ScenarioKind::Breakdown => CatalogEntry {
                title:       "Engine Breakdown Emergency",
                description: "Critical engine failure requiring immediate track clearance and rerouting",
                impact:      "Critical impact on capacity",
            },
            ScenarioKind::Weather => CatalogEntry {
                title:       "Heavy Monsoon Impact",
                description: "Severe weather conditions affecting visibility and track conditions",
                impact:      "Moderate impact on speed",
            },
            ScenarioKind::Maintenance => CatalogEntry {
                title:       "Emergency Track Maintenance",
                description: "Urgent track repair requiring section closure and traffic diversion",
                impact:      "High impact on routing",
            },
            ScenarioKind::Signal => CatalogEntry {
                title:       "Signal System Failure",
                description: "Multiple signal failures requiring manual control and reduced speeds",
                impact:      "Critical impact on operations",
            },
            ScenarioKind::Passenger => CatalogEntry {
                title:       "Medical Emergency",
                description: "Passenger medical emergency requiring immediate station stop",
                impact:      "Moderate impact on schedule",
            },
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ScenarioKind {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScenarioKind::ALL
            .into_iter()
            .find(|k| k.id() == s)
            .ok_or_else(|| ScenarioError::InvalidScenario(s.to_owned()))
    }
}

/// Display text for one scenario in the catalog.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CatalogEntry {
    pub title:       &'static str,
    pub description: &'static str,
    pub impact:      &'static str,
}
