use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use crate::{
    db::{
        queries::{categories, questions},
        Question,
    },
    pagination::{paginate, PageQuery},
    server::{app::AppState, error::ApiError, extractors::{IdPath, QueryParams}},
};

use super::{categories_by_id, ApiResponse};

#[derive(Serialize)]
struct CategoriesResponse {
    success: bool,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
struct CategoryQuestionsResponse {
    success: bool,
    category: String,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesResponse>> {
    let categories = categories::get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound("no categories".to_owned()));
    }
    Ok(Json(CategoriesResponse {
        success: true,
        categories: categories_by_id(categories),
    }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    IdPath(id): IdPath,
    QueryParams(page): QueryParams<PageQuery>,
) -> ApiResponse<Json<CategoryQuestionsResponse>> {
    let category = categories::get_category(&pool, id)
        .await?
        .ok_or_else(|| ApiError::BadRequest(format!("category {id} does not exist")))?;

    let selection = questions::get_questions_for_category(&pool, category.id).await?;
    Ok(Json(CategoryQuestionsResponse {
        success: true,
        category: category.kind,
        questions: paginate(&selection, page.page()).to_vec(),
        total_questions: selection.len(),
    }))
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
