use super::entity::{Draft, Patch};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

pub const PROGRESS_MAX: u8 = 100;
pub const PROGRESS_STEP: u8 = 5;

/// Clamps a progress value to `0..=100` and snaps it to the nearest step.
pub fn normalize_progress(value: f64) -> u8 {
    if !value.is_finite() {
        return 0;
    }
    let step = PROGRESS_STEP as f64;
    let snapped = (value.clamp(0.0, PROGRESS_MAX as f64) / step).round() * step;
    snapped.min(PROGRESS_MAX as f64) as u8
}

fn deserialize_progress<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    Ok(normalize_progress(value))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target_date: NaiveDate,
    #[serde(deserialize_with = "deserialize_progress")]
    pub progress: u8,
    pub category: String,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn is_completed(&self) -> bool {
        self.progress >= PROGRESS_MAX
    }

    /// A goal is overdue once its target day has started and it is not done.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        !self.is_completed() && self.target_date.and_time(NaiveTime::default()) < now
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub title: String,
    pub description: String,
    pub target_date: NaiveDate,
    pub progress: u8,
    pub category: String,
}

impl NewGoal {
    pub fn new(title: &str, target_date: NaiveDate) -> Self {
        NewGoal {
            title: title.to_string(),
            description: String::new(),
            target_date,
            progress: 0,
            category: String::new(),
        }
    }
}

impl Draft for NewGoal {
    type Record = Goal;

    fn into_record(self, id: String, created_at: DateTime<Utc>) -> Goal {
        Goal {
            id,
            title: self.title,
            description: self.description,
            target_date: self.target_date,
            progress: normalize_progress(self.progress as f64),
            category: self.category,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub target_date: Option<NaiveDate>,
    pub progress: Option<u8>,
    pub category: Option<String>,
}

impl GoalPatch {
    pub fn progress(progress: u8) -> Self {
        GoalPatch {
            progress: Some(progress),
            ..Default::default()
        }
    }
}

impl Patch for GoalPatch {
    type Record = Goal;

    fn apply_to(self, goal: &mut Goal) {
        if let Some(title) = self.title {
            goal.title = title;
        }
        if let Some(description) = self.description {
            goal.description = description;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        if let Some(progress) = self.progress {
            goal.progress = normalize_progress(progress as f64);
        }
        if let Some(category) = self.category {
            goal.category = category;
        }
    }

    fn is_empty(&self) -> bool {
        self == &GoalPatch::default()
    }
}
