use std::collections::HashSet;
use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::questions, Question},
    quiz::QuizSelector,
    server::{app::AppState, error::ApiError, extractors::JsonBody},
    telemetry::QUIZ_QUESTIONS_SERVED,
};

use super::ApiResponse;

/// Category id 0 selects every question
const ALL_CATEGORIES: i64 = 0;

#[derive(Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizBody {
    quiz_category: Option<QuizCategory>,
    previous_questions: Option<Vec<i64>>,
}

#[derive(Serialize)]
struct QuizResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
}

async fn next_question(
    State(pool): State<SqlitePool>,
    State(selector): State<Arc<QuizSelector>>,
    JsonBody(body): JsonBody<QuizBody>,
) -> ApiResponse<Json<QuizResponse>> {
    let (Some(category), Some(previous)) = (body.quiz_category, body.previous_questions) else {
        return Err(ApiError::NotFound(
            "quiz_category and previous_questions are required".to_owned(),
        ));
    };

    let candidates = if category.id == ALL_CATEGORIES {
        questions::get_all_questions(&pool).await?
    } else {
        questions::get_questions_for_category(&pool, category.id).await?
    };
    let previous: HashSet<i64> = previous.into_iter().collect();

    let question = selector.pick(&candidates, &previous).await.cloned();
    match &question {
        Some(q) => {
            let label = category.id.to_string();
            QUIZ_QUESTIONS_SERVED
                .with_label_values(&[label.as_str()])
                .inc();
            tracing::debug!(id = q.id, category = category.id, "Serving quiz question");
        }
        None => tracing::debug!(
            category = category.id,
            asked = previous.len(),
            "Quiz exhausted"
        ),
    }

    Ok(Json(QuizResponse {
        success: true,
        question,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/quizzes", post(next_question))
        .with_state(state)
}
