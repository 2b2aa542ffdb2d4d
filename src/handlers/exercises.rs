//! Exercise endpoints: exercises for a word, learnable words, supported pairs.

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, header};
use serde::{Deserialize, Serialize};

use super::ApiError;
use crate::bitmark::{self, Exercise};
use crate::config;
use crate::db;
use crate::domain::{ExerciseType, TranslationPair};
use crate::state::AppState;

/// Query parameters for `GET /exercises`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExercisesParams {
    /// Target word to return exercises for, in the language to be learned
    pub word: String,
    pub translation_pair: TranslationPair,
    #[serde(default)]
    pub exercise_type: ExerciseType,
}

/// Query parameters for `GET /words`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordsParams {
    pub translation_pair: TranslationPair,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationPairWrapper {
    pub translation_pair: TranslationPair,
}

#[derive(Debug, Serialize)]
pub struct LearnableWord {
    pub word: String,
}

/// List the translation pairs this API has exercises for.
pub async fn translation_pairs() -> Json<Vec<TranslationPairWrapper>> {
    Json(vec![
        TranslationPairWrapper {
            translation_pair: TranslationPair::UkDe,
        },
        TranslationPairWrapper {
            translation_pair: TranslationPair::DeEn,
        },
    ])
}

/// List the distinct learnable words for a translation pair.
pub async fn words(
    State(state): State<AppState>,
    Query(params): Query<WordsParams>,
) -> Result<Json<Vec<LearnableWord>>, ApiError> {
    let conn = db::try_lock(&state.db)?;
    let words = db::exercises::distinct_words(&conn, &params.translation_pair.languages())?;

    Ok(Json(
        words.into_iter().map(|word| LearnableWord { word }).collect(),
    ))
}

/// Return all exercises for a word, compiled into the requested bitmark types.
pub async fn exercises(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<ExercisesParams>,
) -> Result<Json<Vec<Exercise>>, ApiError> {
    let base_url = request_base_url(&headers);

    let records = {
        let conn = db::try_lock(&state.db)?;
        db::exercises::exercises_by_pair_and_word(
            &conn,
            &params.translation_pair.languages(),
            &params.word,
        )?
    };

    let mut rng = rand::rng();
    let payload = records
        .iter()
        .map(|record| bitmark::compile(record, params.exercise_type, &base_url, &mut rng))
        .collect();

    Ok(Json(payload))
}

/// Root URL audio links are built against, taken from the request Host header
/// with the configured bind address as fallback.
fn request_base_url(headers: &HeaderMap) -> String {
    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) => format!("http://{host}/"),
        None => format!("http://{}/", config::server_bind_addr()),
    }
}
