//! Fleet members and fleet snapshots.

use std::collections::HashSet;

use ops_core::{TrainCategory, TrainId};

use crate::{FleetError, FleetResult};

/// One train in an evaluation snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetMember {
    pub id:        TrainId,
    pub category:  TrainCategory,
    /// Current speed in km/h.
    pub speed_kmh: u32,
    /// Current schedule deviation in minutes.
    pub delay_min: u32,
}

impl FleetMember {
    pub fn new(id: impl Into<TrainId>, category: TrainCategory, speed_kmh: u32, delay_min: u32) -> Self {
        Self { id: id.into(), category, speed_kmh, delay_min }
    }
}

/// An ordered fleet snapshot with unique train ids.
///
/// Snapshots are immutable once built.  Scenario evaluation produces a new
/// snapshot with [`Fleet::derive`] rather than editing the baseline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fleet {
    members: Vec<FleetMember>,
}

impl Fleet {
    /// Build a snapshot, rejecting duplicate train ids.
    pub fn new(members: Vec<FleetMember>) -> FleetResult<Self> {
        let mut seen = HashSet::with_capacity(members.len());
        for m in &members {
            if !seen.insert(&m.id) {
                return Err(FleetError::DuplicateTrain(m.id.clone()));
            }
        }
        Ok(Self { members })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The seven-train fixture the what-if page evaluates against.
    pub fn reference() -> Self {
        use TrainCategory::*;
        Self {
            members: vec![
                FleetMember::new("T1", Express, 110, 0),
                FleetMember::new("T2", Express, 120, 5),
                FleetMember::new("T3", Local,    60, 10),
                FleetMember::new("T4", Local,    55, 0),
                FleetMember::new("T5", Local,    65, 2),
                FleetMember::new("T6", Freight,  45, 20),
                FleetMember::new("T7", Freight,  50, 15),
            ],
        }
    }

    /// A new snapshot with the same ids and categories, in the same order,
    /// and the `(speed_kmh, delay_min)` returned by `f` for each member.
    pub fn derive<F>(&self, mut f: F) -> Fleet
    where
        F: FnMut(&FleetMember) -> (u32, u32),
    {
        let members = self
            .members
            .iter()
            .map(|m| {
                let (speed_kmh, delay_min) = f(m);
                FleetMember { id: m.id.clone(), category: m.category, speed_kmh, delay_min }
            })
            .collect();
        Fleet { members }
    }

    pub fn members(&self) -> &[FleetMember] {
        &self.members
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FleetMember> {
        self.members.iter()
    }

    pub fn get(&self, id: &TrainId) -> Option<&FleetMember> {
        self.members.iter().find(|m| &m.id == id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a FleetMember;
    type IntoIter = std::slice::Iter<'a, FleetMember>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
