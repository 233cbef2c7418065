use serde::Deserialize;

use super::ApiClient;
use crate::core::{
    models::{
        VocabularyItem,
        WordCounts,
        WordFilter,
    },
    TangoError,
};

#[derive(Debug, Deserialize)]
struct WordsResponse {
    #[serde(default)]
    words: Vec<VocabularyItem>,
}

pub async fn get_words(
    client: &ApiClient,
    filter: WordFilter,
) -> Result<Vec<VocabularyItem>, TangoError> {
    let path = format!("/words?filter={}", filter.query());
    let response = client.dispatch(client.get(&path)).await?;
    let body: WordsResponse = response.json().await?;
    Ok(body.words)
}

/// Flip a word's learned flag. The service echoes the updated entry.
pub async fn set_learned(
    client: &ApiClient,
    word_id: &str,
    learned: bool,
) -> Result<VocabularyItem, TangoError> {
    let path = format!("/words/{}/learned", word_id);
    let body = serde_json::json!({ "learned": learned });
    let response = client.dispatch(client.patch(&path).json(&body)).await?;
    Ok(response.json().await?)
}

/// Mark a word as still in rotation after a "still learning" review.
pub async fn set_learning(client: &ApiClient, word_id: &str) -> Result<(), TangoError> {
    let path = format!("/words/{}/learning", word_id);
    let body = serde_json::json!({ "learning": true });
    client.dispatch(client.patch(&path).json(&body)).await?;
    Ok(())
}

pub async fn delete_word(client: &ApiClient, word_id: &str) -> Result<(), TangoError> {
    let path = format!("/words/{}", word_id);
    client.dispatch(client.delete(&path)).await?;
    Ok(())
}

pub async fn get_counts(client: &ApiClient) -> Result<WordCounts, TangoError> {
    let response = client.dispatch(client.get("/words/counts")).await?;
    Ok(response.json().await?)
}
