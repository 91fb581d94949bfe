//! Derived statistics over a user's workout history.
//!
//! Everything here is a pure function over rows the repositories have already
//! fetched, so the handlers stay thin and the maths is testable in isolation.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDateTime;
use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::models::WorkoutSet;

/// Best weight and best reps seen at one set position. The two maxima are
/// tracked independently and may come from different historical sets.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct SetRecord {
    pub max_weight: f64,
    pub max_reps: i32,
}

/// Per-set-number records keyed by set number.
///
/// Serializes as `{"set_1": {...}, "set_2": {...}}` in ascending numeric
/// order, so `set_10` follows `set_9` rather than `set_1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalRecords(BTreeMap<i32, SetRecord>);

#[cfg(test)]
impl PersonalRecords {
    pub fn get(&self, set_number: i32) -> Option<&SetRecord> {
        self.0.get(&set_number)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &SetRecord)> {
        self.0.iter().map(|(n, r)| (*n, r))
    }
}

impl Serialize for PersonalRecords {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (set_number, record) in &self.0 {
            map.serialize_entry(&format!("set_{set_number}"), record)?;
        }
        map.end()
    }
}

/// The three gamified aggregates shown on the stats screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize)]
pub struct StatsSummary {
    #[serde(serialize_with = "serialize_power")]
    pub power: Option<f64>,
    pub consistency_days: i64,
    pub stamina: i64,
}

/// A history without sets reports `0`.
fn serialize_power<S: Serializer>(power: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
    match power {
        Some(volume) => serializer.serialize_f64(*volume),
        None => serializer.serialize_i64(0),
    }
}

/// Group sets by set number and keep the max weight and max reps per group.
///
/// Callers pass only the sets of one user and one exercise.
pub fn personal_records(sets: &[WorkoutSet]) -> PersonalRecords {
    let mut records: BTreeMap<i32, SetRecord> = BTreeMap::new();

    for set in sets {
        records
            .entry(set.set_number)
            .and_modify(|r| {
                r.max_weight = r.max_weight.max(set.weight);
                r.max_reps = r.max_reps.max(set.reps);
            })
            .or_insert(SetRecord {
                max_weight: set.weight,
                max_reps: set.reps,
            });
    }

    PersonalRecords(records)
}

/// Highest single-set volume (weight × reps), even when every volume is
/// negative. `None` with no sets.
pub fn power(sets: &[WorkoutSet]) -> Option<f64> {
    sets.iter().map(WorkoutSet::volume).reduce(f64::max)
}

/// Number of distinct calendar dates among workout start times.
pub fn consistency_days(workout_starts: &[NaiveDateTime]) -> i64 {
    workout_starts
        .iter()
        .map(NaiveDateTime::date)
        .collect::<HashSet<_>>()
        .len() as i64
}

/// Total number of workouts.
pub fn stamina(workout_starts: &[NaiveDateTime]) -> i64 {
    workout_starts.len() as i64
}

pub fn summarize(sets: &[WorkoutSet], workout_starts: &[NaiveDateTime]) -> StatsSummary {
    StatsSummary {
        power: power(sets),
        consistency_days: consistency_days(workout_starts),
        stamina: stamina(workout_starts),
    }
}
