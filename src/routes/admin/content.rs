//! Long-form sector page content.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::crud::operator_backend;
use crate::api::response::DataResponse;
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::domain::sectors::BusinessContent;
use crate::domain::{Entity, Record};
use crate::error::ApiError;
use crate::services::Query;

#[derive(Debug, serde::Serialize)]
pub struct SectorContentResponse {
    /// `None` until the content has been saved once
    pub id: Option<Uuid>,
    #[serde(flatten)]
    pub content: BusinessContent,
}

fn by_sector(sector_id: Uuid) -> Query {
    Query::new().eq("sector_id", sector_id)
}

/// GET /admin/sectors/:id/content
///
/// A sector without a content row gets an empty editor rather than a 404.
pub async fn get_content(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Path(sector_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = operator_backend(&state, &auth)
        .select_one::<Record<BusinessContent>>(BusinessContent::TABLE, &by_sector(sector_id))
        .await?;

    let response = match existing {
        Some(row) => SectorContentResponse {
            id: Some(row.id),
            content: row.fields,
        },
        None => SectorContentResponse {
            id: None,
            content: BusinessContent::empty(sector_id),
        },
    };

    Ok(DataResponse::new(response))
}

/// PUT /admin/sectors/:id/content
///
/// Updates the sector's content row, inserting it on first save.
pub async fn put_content(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    Path(sector_id): Path<Uuid>,
    Json(mut content): Json<BusinessContent>,
) -> Result<impl IntoResponse, ApiError> {
    content.sector_id = sector_id;
    content.validate()?;

    let backend = operator_backend(&state, &auth);
    let existing = backend
        .select_one::<Record<BusinessContent>>(BusinessContent::TABLE, &by_sector(sector_id))
        .await?;

    let saved: Record<BusinessContent> = match existing {
        Some(row) => backend.update(BusinessContent::TABLE, row.id, &content).await?,
        None => backend.insert(BusinessContent::TABLE, &content).await?,
    };

    tracing::info!(
        sector_id = %sector_id,
        content_id = %saved.id,
        user_id = %auth.user_id,
        "Sector content saved"
    );

    Ok(DataResponse::new(SectorContentResponse {
        id: Some(saved.id),
        content: saved.fields,
    }))
}
