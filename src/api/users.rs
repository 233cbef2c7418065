use super::ApiClient;
use crate::core::{
    models::{
        ProfileUpdate,
        UserProfile,
    },
    TangoError,
};

pub async fn get_profile(client: &ApiClient) -> Result<UserProfile, TangoError> {
    let response = client.dispatch(client.get("/users/profile")).await?;
    Ok(response.json().await?)
}

pub async fn set_day_words(client: &ApiClient, day_words: u32) -> Result<(), TangoError> {
    let body = serde_json::json!({ "dayWords": day_words });
    client.dispatch(client.put("/users/daywords").json(&body)).await?;
    Ok(())
}

/// Persist profile settings; the service echoes the updated profile.
pub async fn update_settings(
    client: &ApiClient,
    update: &ProfileUpdate,
) -> Result<UserProfile, TangoError> {
    let response = client.dispatch(client.put("/users/settings").json(update)).await?;
    Ok(response.json().await?)
}
