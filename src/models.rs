use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthIssue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub daily_entry_id: Option<i64>,
    pub issue_type: String,
    #[serde(default)]
    pub severity: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub time_of_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// One day of tracking, keyed by its ISO `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub date: String,
    #[serde(default)]
    pub stress_level: Option<i32>,
    #[serde(default)]
    pub worked_out: bool,
    #[serde(default)]
    pub workout_notes: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub health_issues: Vec<HealthIssue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_metrics: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewHealthIssue {
    pub issue_type: String,
    pub severity: Option<i32>,
    pub notes: Option<String>,
    pub time_of_day: Option<String>,
}

/// Body of `POST /entries`. Ids and timestamps are assigned by the server.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewDailyEntry {
    pub date: String,
    pub stress_level: Option<i32>,
    pub worked_out: bool,
    pub workout_notes: Option<String>,
    pub notes: Option<String>,
    #[serde(default)]
    pub health_issues: Vec<NewHealthIssue>,
}

/// Partial body of `PUT /entries/{date}`; `None` fields are left out and
/// `Some(None)` sends an explicit `null`, clearing the stored value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DailyEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<Option<i32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worked_out: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_issues: Option<Vec<NewHealthIssue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueType {
    pub id: i64,
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewIssueType {
    pub name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssueCount {
    #[serde(rename = "type")]
    pub issue_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_entries: u64,
    pub workout_days: u64,
    pub avg_stress: Option<f64>,
    #[serde(default)]
    pub common_issues: Vec<IssueCount>,
    pub streak_days: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workout_day_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub target_sets: Option<u32>,
    /// Free-form so ranges like "8-12" survive.
    #[serde(default)]
    pub target_reps: Option<String>,
    #[serde(default)]
    pub target_weight: Option<String>,
    #[serde(default)]
    pub rest_seconds: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub sort_order: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routine_id: Option<i64>,
    pub name: String,
    /// 0-6, or `None` for "any day".
    #[serde(default)]
    pub day_of_week: Option<u8>,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default)]
    pub exercises: Vec<Exercise>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutRoutine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub days: Vec<WorkoutDay>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub target_sets: Option<u32>,
    pub target_reps: Option<String>,
    pub target_weight: Option<String>,
    pub rest_seconds: Option<u32>,
    pub notes: Option<String>,
    pub sort_order: i32,
}

/// Same `None` / `Some(None)` convention as [`DailyEntryUpdate`].
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ExerciseUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_sets: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_reps: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_weight: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rest_seconds: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewWorkoutDay {
    pub name: String,
    pub day_of_week: Option<u8>,
    pub sort_order: i32,
    #[serde(default)]
    pub exercises: Vec<NewExercise>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkoutDayUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// `Some(None)` sends an explicit `null`, resetting the day to "any".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_week: Option<Option<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NewWorkoutRoutine {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub days: Vec<NewWorkoutDay>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct WorkoutRoutineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

fn default_true() -> bool {
    true
}
