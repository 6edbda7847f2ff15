//! Notification service
//!
//! Emails HR through a serverless function when a job application arrives.

use serde::{Deserialize, Serialize};

use super::{BackendError, SupabaseClient};
use crate::domain::careers::JobApplication;
use crate::domain::Record;

#[derive(Debug, Serialize)]
struct ApplicationEmail<'a> {
    application_id: String,
    position_title: &'a str,
    full_name: &'a str,
    email: &'a str,
    phone: Option<&'a str>,
    resume_url: Option<&'a str>,
    cover_letter: Option<&'a str>,
    status: String,
}

#[derive(Debug, Default, Deserialize)]
struct FunctionAck {
    #[serde(default)]
    #[allow(dead_code)]
    success: Option<bool>,
}

/// Ask the HR mail function to announce a new application.
pub async fn notify_application_received(
    backend: &SupabaseClient,
    function: &str,
    application: &Record<JobApplication>,
    position_title: &str,
) -> Result<(), BackendError> {
    let body = ApplicationEmail {
        application_id: application.id.to_string(),
        position_title,
        full_name: &application.full_name,
        email: &application.email,
        phone: application.phone.as_deref(),
        resume_url: application.resume_url.as_deref(),
        cover_letter: application.cover_letter.as_deref(),
        status: application.status.to_string(),
    };

    let _: FunctionAck = backend.invoke(function, &body).await?;

    tracing::info!(
        application_id = %application.id,
        function = function,
        "HR notified of application"
    );

    Ok(())
}
