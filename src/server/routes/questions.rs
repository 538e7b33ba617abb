use std::collections::BTreeMap;

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::{delete, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_option_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        NewQuestion, Question,
    },
    pagination::{paginate, PageQuery},
    server::{
        app::AppState,
        error::ApiError,
        extractors::{IdPath, JsonBody, QueryParams},
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

use super::{categories_by_id, ApiResponse};

// the form posts category ids as strings
#[derive(Deserialize)]
struct QuestionsBody {
    question: Option<String>,
    answer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    difficulty: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    category: Option<i64>,
    #[serde(rename = "searchTerm")]
    search_term: Option<String>,
}

#[derive(Serialize)]
struct QuestionsPage {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct DeletedResponse {
    success: bool,
    deleted: i64,
    total_questions: i64,
}

#[derive(Serialize)]
struct CreatedResponse {
    success: bool,
    created: i64,
    questions: Vec<Question>,
    total_questions: i64,
}

#[derive(Serialize)]
struct SearchResponse {
    success: bool,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    QueryParams(page): QueryParams<PageQuery>,
) -> ApiResponse<Json<QuestionsPage>> {
    let selection = questions::get_all_questions(&pool).await?;
    let current = paginate(&selection, page.page());
    if current.is_empty() {
        return Err(ApiError::NotFound(format!("page {}", page.page())));
    }

    Ok(Json(QuestionsPage {
        success: true,
        questions: current.to_vec(),
        total_questions: selection.len() as i64,
        categories: categories_by_id(categories::get_all_categories(&pool).await?),
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
) -> ApiResponse<Json<DeletedResponse>> {
    let deleted = questions::delete_question(&pool, id)
        .await
        .map_err(ApiError::unprocessable)?;
    if !deleted {
        return Err(ApiError::Unprocessable(format!(
            "question {id} does not exist"
        )));
    }
    QUESTIONS_DELETED.inc();
    tracing::info!(id, "Deleted question");

    let total_questions = questions::count_questions(&pool)
        .await
        .map_err(ApiError::unprocessable)?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted: id,
        total_questions,
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    QueryParams(page): QueryParams<PageQuery>,
    JsonBody(mut body): JsonBody<QuestionsBody>,
) -> ApiResponse<Response> {
    match body.search_term.take().filter(|term| !term.is_empty()) {
        Some(term) => Ok(search(&pool, &term, page).await?.into_response()),
        None => Ok(create(&pool, body, page).await?.into_response()),
    }
}

async fn search(
    pool: &SqlitePool,
    term: &str,
    page: PageQuery,
) -> ApiResponse<Json<SearchResponse>> {
    let selection = questions::search_questions(pool, term)
        .await
        .map_err(ApiError::unprocessable)?;
    if selection.is_empty() {
        return Err(ApiError::Unprocessable(format!(
            "no question matches {term:?}"
        )));
    }

    Ok(Json(SearchResponse {
        success: true,
        questions: paginate(&selection, page.page()).to_vec(),
        total_questions: selection.len(),
    }))
}

async fn create(
    pool: &SqlitePool,
    body: QuestionsBody,
    page: PageQuery,
) -> ApiResponse<Json<CreatedResponse>> {
    let (Some(question), Some(answer), Some(category), Some(difficulty)) =
        (body.question, body.answer, body.category, body.difficulty)
    else {
        return Err(ApiError::unprocessable("incomplete question"));
    };
    let new = NewQuestion {
        question,
        answer,
        category,
        difficulty,
    };

    let created = questions::create_question(pool, &new)
        .await
        .map_err(ApiError::unprocessable)?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id = created, category, "Created question");

    let selection = questions::get_all_questions(pool)
        .await
        .map_err(ApiError::unprocessable)?;
    Ok(Json(CreatedResponse {
        success: true,
        created,
        questions: paginate(&selection, page.page()).to_vec(),
        total_questions: selection.len() as i64,
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(list_questions).post(create_or_search))
        .route("/questions/{id}", delete(delete_question))
        .with_state(state)
}
