//! Public job application intake.

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::response::{Created, DataResponse};
use crate::app::AppState;
use crate::domain::careers::{ApplicationStatus, ApplicationSubmission, JobApplication, JobPosition};
use crate::domain::{Entity, Record};
use crate::error::ApiError;
use crate::services::{notifications, Query, SupabaseClient};

const GENERAL_APPLICATION: &str = "General Application";

#[derive(Debug, Serialize)]
pub struct ApplicationReceipt {
    pub id: Uuid,
    pub status: ApplicationStatus,
    pub message: String,
}

async fn position_title(backend: &SupabaseClient, position_id: Option<Uuid>) -> String {
    let Some(id) = position_id else {
        return GENERAL_APPLICATION.to_string();
    };

    match backend
        .select_one::<Record<JobPosition>>(JobPosition::TABLE, &Query::new().eq("id", id))
        .await
    {
        Ok(Some(position)) => position.title.clone(),
        Ok(None) => GENERAL_APPLICATION.to_string(),
        Err(e) => {
            tracing::warn!(position_id = %id, error = %e, "Position lookup failed");
            GENERAL_APPLICATION.to_string()
        }
    }
}

/// POST /careers/applications
///
/// The row is stored first; the HR email is best effort and never fails the submission.
pub async fn submit_application(
    State(state): State<Arc<AppState>>,
    Json(submission): Json<ApplicationSubmission>,
) -> Result<impl IntoResponse, ApiError> {
    let mut application = JobApplication::from(submission);
    application.validate()?;

    let stored = Record {
        id: Uuid::new_v4(),
        fields: application,
        created_at: None,
        updated_at: None,
    };
    state
        .backend
        .insert_minimal(JobApplication::TABLE, &stored)
        .await?;

    tracing::info!(
        application_id = %stored.id,
        position_id = ?stored.position_id,
        "Job application received"
    );

    let title = position_title(&state.backend, stored.position_id).await;
    if let Err(e) = notifications::notify_application_received(
        &state.backend,
        &state.settings.hr_notify_function,
        &stored,
        &title,
    )
    .await
    {
        tracing::warn!(application_id = %stored.id, error = %e, "HR notification failed");
    }

    Ok(Created(DataResponse::new(ApplicationReceipt {
        id: stored.id,
        status: stored.status,
        message: "Thank you for applying. Our HR team will be in touch.".to_string(),
    })))
}
