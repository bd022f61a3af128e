//! One method per backend endpoint.
//!
//! Nothing here validates field values; the server owns that. Each method
//! only builds the path and query, picks the verb and encodes the body.

use crate::client::{ApiClient, RequestOptions};
use crate::errors::ApiError;
use crate::models::{
    DailyEntry, DailyEntryUpdate, Exercise, ExerciseUpdate, HealthStatus, IssueType,
    NewDailyEntry, NewExercise, NewIssueType, NewWorkoutDay, NewWorkoutRoutine, Stats,
    WorkoutDay, WorkoutDayUpdate, WorkoutRoutine, WorkoutRoutineUpdate,
};

pub const DEFAULT_STATS_DAYS: u32 = 30;

/// Optional filters for `GET /entries`. Unset filters are left out of the
/// query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<u32>,
}

impl EntryQuery {
    fn apply(&self, mut options: RequestOptions) -> RequestOptions {
        if let Some(start) = self.start_date.as_deref().filter(|value| !value.is_empty()) {
            options = options.query("start_date", start);
        }
        if let Some(end) = self.end_date.as_deref().filter(|value| !value.is_empty()) {
            options = options.query("end_date", end);
        }
        if let Some(limit) = self.limit.filter(|limit| *limit > 0) {
            options = options.query("limit", limit);
        }
        options
    }
}

impl ApiClient {
    pub async fn list_entries(&self, query: &EntryQuery) -> Result<Vec<DailyEntry>, ApiError> {
        self.fetch_entity("/entries", query.apply(RequestOptions::get()))
            .await
    }

    pub async fn get_entry(&self, date: &str) -> Result<DailyEntry, ApiError> {
        self.fetch_entity(&format!("/entries/{date}"), RequestOptions::get())
            .await
    }

    pub async fn get_today(&self) -> Result<Option<DailyEntry>, ApiError> {
        self.fetch_optional("/today", RequestOptions::get()).await
    }

    pub async fn create_entry(&self, entry: &NewDailyEntry) -> Result<DailyEntry, ApiError> {
        self.fetch_entity("/entries", RequestOptions::post().json(entry)?)
            .await
    }

    pub async fn update_entry(
        &self,
        date: &str,
        update: &DailyEntryUpdate,
    ) -> Result<DailyEntry, ApiError> {
        self.fetch_entity(&format!("/entries/{date}"), RequestOptions::put().json(update)?)
            .await
    }

    pub async fn delete_entry(&self, date: &str) -> Result<(), ApiError> {
        self.send(&format!("/entries/{date}"), RequestOptions::delete())
            .await
    }

    pub async fn list_issue_types(&self) -> Result<Vec<IssueType>, ApiError> {
        self.fetch_entity("/issue-types", RequestOptions::get()).await
    }

    pub async fn create_issue_type(&self, issue_type: &NewIssueType) -> Result<IssueType, ApiError> {
        self.fetch_entity("/issue-types", RequestOptions::post().json(issue_type)?)
            .await
    }

    /// Summary over the last `days` days; callers usually pass [`DEFAULT_STATS_DAYS`].
    pub async fn get_stats(&self, days: u32) -> Result<Stats, ApiError> {
        self.fetch_entity("/stats", RequestOptions::get().query("days", days))
            .await
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.fetch_entity("/health", RequestOptions::get()).await
    }

    pub async fn list_workout_routines(
        &self,
        active_only: bool,
    ) -> Result<Vec<WorkoutRoutine>, ApiError> {
        self.fetch_entity(
            "/workouts",
            RequestOptions::get().query("active_only", active_only),
        )
        .await
    }

    pub async fn get_workout_routine(&self, id: i64) -> Result<WorkoutRoutine, ApiError> {
        self.fetch_entity(&format!("/workouts/{id}"), RequestOptions::get())
            .await
    }

    pub async fn get_todays_workout(&self) -> Result<Option<WorkoutDay>, ApiError> {
        self.fetch_optional("/workouts/today", RequestOptions::get())
            .await
    }

    pub async fn create_workout_routine(
        &self,
        routine: &NewWorkoutRoutine,
    ) -> Result<WorkoutRoutine, ApiError> {
        self.fetch_entity("/workouts", RequestOptions::post().json(routine)?)
            .await
    }

    pub async fn update_workout_routine(
        &self,
        id: i64,
        update: &WorkoutRoutineUpdate,
    ) -> Result<WorkoutRoutine, ApiError> {
        self.fetch_entity(&format!("/workouts/{id}"), RequestOptions::put().json(update)?)
            .await
    }

    pub async fn delete_workout_routine(&self, id: i64) -> Result<(), ApiError> {
        self.send(&format!("/workouts/{id}"), RequestOptions::delete())
            .await
    }

    pub async fn create_workout_day(
        &self,
        routine_id: i64,
        day: &NewWorkoutDay,
    ) -> Result<WorkoutDay, ApiError> {
        self.fetch_entity(
            &format!("/workouts/{routine_id}/days"),
            RequestOptions::post().json(day)?,
        )
        .await
    }

    pub async fn update_workout_day(
        &self,
        day_id: i64,
        update: &WorkoutDayUpdate,
    ) -> Result<WorkoutDay, ApiError> {
        self.fetch_entity(
            &format!("/workouts/days/{day_id}"),
            RequestOptions::put().json(update)?,
        )
        .await
    }

    pub async fn delete_workout_day(&self, day_id: i64) -> Result<(), ApiError> {
        self.send(&format!("/workouts/days/{day_id}"), RequestOptions::delete())
            .await
    }

    pub async fn create_exercise(
        &self,
        day_id: i64,
        exercise: &NewExercise,
    ) -> Result<Exercise, ApiError> {
        self.fetch_entity(
            &format!("/workouts/days/{day_id}/exercises"),
            RequestOptions::post().json(exercise)?,
        )
        .await
    }

    pub async fn update_exercise(
        &self,
        exercise_id: i64,
        update: &ExerciseUpdate,
    ) -> Result<Exercise, ApiError> {
        self.fetch_entity(
            &format!("/workouts/exercises/{exercise_id}"),
            RequestOptions::put().json(update)?,
        )
        .await
    }

    pub async fn delete_exercise(&self, exercise_id: i64) -> Result<(), ApiError> {
        self.send(
            &format!("/workouts/exercises/{exercise_id}"),
            RequestOptions::delete(),
        )
        .await
    }
}
