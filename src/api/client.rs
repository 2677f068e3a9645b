//! Remote service client
//!
//! All server communication goes through one HTTP endpoint accepting
//! `{ action, data }` POST bodies. Failures are terminal for the action:
//! no retries, no backoff; the caller keeps whatever state it already had.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::ConsultationCreate;

use super::types::{ConsultaRecord, ErrorBody, RecetaRecord};

/// Client error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Connection error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Invalid response payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for service calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Client for the prescription/consultation service
#[derive(Clone)]
pub struct PrescriptionService {
    endpoint: String,
    client: Client,
}

impl PrescriptionService {
    /// Create a client for the given endpoint URL
    pub fn new<S: Into<String>>(endpoint: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    /// Fetch all prescriptions for a patient
    pub async fn get_recipes_by_patient(&self, paciente_id: i64) -> ApiResult<Vec<RecetaRecord>> {
        self.post_action(
            "getRecipesByPatient",
            &serde_json::json!({ "pacienteId": paciente_id }),
        )
        .await
    }

    /// Fetch all consultation requests for a patient
    pub async fn get_consultas_by_patient(
        &self,
        paciente_id: i64,
    ) -> ApiResult<Vec<ConsultaRecord>> {
        self.post_action(
            "getConsultasByPatient",
            &serde_json::json!({ "pacienteId": paciente_id }),
        )
        .await
    }

    /// Request a new consultation
    pub async fn create_consulta(&self, data: &ConsultationCreate) -> ApiResult<ConsultaRecord> {
        self.post_action("createConsulta", data).await
    }

    /// POST an `{ action, data }` envelope and decode the response.
    ///
    /// Non-2xx responses surface the `message` field from the JSON error
    /// body, or a generic message when the body has none.
    async fn post_action<D, T>(&self, action: &str, data: &D) -> ApiResult<T>
    where
        D: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!(action, endpoint = %self.endpoint, "calling prescription service");

        let body = serde_json::json!({ "action": action, "data": data });
        let response = self.client.post(&self.endpoint).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|b| b.message)
                .unwrap_or_else(|| "Request failed".to_string());
            warn!(action, status = status.as_u16(), %message, "service returned an error");
            return Err(ApiError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let text = response.text().await?;
        Ok(serde_json::from_str(&text)?)
    }
}
