use serde::Deserialize;

use super::ApiClient;
use crate::core::{
    models::{
        DailyStats,
        ProgressOutcome,
        StatsSummary,
    },
    TangoError,
};

#[derive(Debug, Deserialize)]
struct DailyStatsResponse {
    #[serde(default)]
    stats: DailyStats,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GoalCheckResponse {
    #[serde(default)]
    is_goal_reached: bool,
}

pub async fn get_daily_stats(client: &ApiClient) -> Result<DailyStats, TangoError> {
    let response = client.dispatch(client.get("/word-stats/daily")).await?;
    let body: DailyStatsResponse = response.json().await?;
    Ok(body.stats)
}

/// The service's own verdict on today's goal. Authoritative at startup.
pub async fn check_daily_goal(client: &ApiClient) -> Result<bool, TangoError> {
    let response = client.dispatch(client.get("/word-stats/check-daily-goal")).await?;
    let body: GoalCheckResponse = response.json().await?;
    Ok(body.is_goal_reached)
}

/// Count one word toward today's stats. A 400 means the word was already
/// counted on an earlier pass; that is the idempotent path, not a failure.
pub async fn record_progress(
    client: &ApiClient,
    word_id: &str,
) -> Result<ProgressOutcome, TangoError> {
    let body = serde_json::json!({ "wordId": word_id });

    match client.dispatch(client.put("/word-stats/update").json(&body)).await {
        Ok(_) => Ok(ProgressOutcome::Counted),
        Err(TangoError::Api { status: 400, .. }) => Ok(ProgressOutcome::AlreadyCounted),
        Err(e) => Err(e),
    }
}

pub async fn get_summary(client: &ApiClient) -> Result<StatsSummary, TangoError> {
    let response = client.dispatch(client.get("/word-stats/summary")).await?;
    Ok(response.json().await?)
}
