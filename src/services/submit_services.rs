// src/services/submit_services.rs

use log::error;
use reqwest::StatusCode;
use thiserror::Error;

use crate::dtos::registration::{RegistrationOut, SubmitBody};
use crate::models::registration::Registration;

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("pendaftaran ditolak server: {0}")]
    Rejected(StatusCode),
}

/// Pengirim pendaftaran ke API bootcamp. Satu POST per submit, tanpa
/// retry otomatis dan tanpa timeout.
#[derive(Clone)]
pub struct SubmissionService {
    client: reqwest::Client,
    endpoint: String,
}

impl SubmissionService {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self { client, endpoint: endpoint.into() }
    }

    /// Kirim satu pendaftaran. Sukses = status 2xx; badan respons tidak
    /// pernah di-parse, hanya dibaca untuk log saat gagal.
    pub async fn submit(&self, registration: &Registration) -> Result<(), SubmitError> {
        let body = SubmitBody { data: RegistrationOut::from(registration) };

        let resp = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            error!("submit pendaftaran gagal: {} {}", status, text);
            return Err(SubmitError::Rejected(status));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crate::models::registration::{CodingExperience, Education};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn registration() -> Registration {
        Registration {
            full_name: "Budi".into(),
            email: "budi@mail.com".into(),
            number_phone: "0812".into(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            education: Education::Sma,
            address: "Jl. A".into(),
            coding_experience: CodingExperience::TidakAda,
            reasons_to_join_bootcamp: "Ingin belajar".into(),
        }
    }

    #[tokio::test]
    async fn ok_status_is_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/bootcamp-participants"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let service = SubmissionService::new(
            reqwest::Client::new(),
            format!("{}/api/bootcamp-participants", server.uri()),
        );
        assert!(service.submit(&registration()).await.is_ok());
    }

    #[tokio::test]
    async fn non_success_status_is_rejected() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let service = SubmissionService::new(
            reqwest::Client::new(),
            format!("{}/api/bootcamp-participants", server.uri()),
        );
        match service.submit(&registration()).await {
            Err(SubmitError::Rejected(status)) => {
                assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn transport_failure_is_a_typed_error() {
        // tidak ada yang listen di port ini
        let service =
            SubmissionService::new(reqwest::Client::new(), "http://127.0.0.1:9/api");
        match service.submit(&registration()).await {
            Err(SubmitError::Http(_)) => {}
            other => panic!("expected Http, got {other:?}"),
        }
    }
}
