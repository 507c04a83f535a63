//! Pattern catalog endpoints.

use axum::Json;
use axum::extract::{Path, Query};
use serde::{Deserialize, Serialize};

use crate::catalog::{self, Category, PatternEntry};
use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct PatternList {
    pub count: usize,
    pub patterns: Vec<PatternEntry>,
}

/// GET /patterns: lists the catalog, optionally filtered by `?category=`.
#[tracing::instrument]
pub async fn list(Query(query): Query<ListQuery>) -> Result<Json<PatternList>, ApiError> {
    let patterns = match query.category.as_deref() {
        Some(raw) => {
            let category: Category = raw.parse()?;
            catalog::by_category(category)
        }
        None => catalog::all().to_vec(),
    };

    Ok(Json(PatternList {
        count: patterns.len(),
        patterns,
    }))
}

/// GET /patterns/{slug}: a single catalog entry.
#[tracing::instrument]
pub async fn get(Path(slug): Path<String>) -> Result<Json<PatternEntry>, ApiError> {
    catalog::find(&slug)
        .copied()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Pattern not found: {slug}")))
}
