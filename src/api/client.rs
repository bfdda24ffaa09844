use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceLog;
use crate::models::check::{Alert, CheckResult};
use crate::models::presence::PresenceRecord;
use crate::models::student::Student;
use reqwest::Url;
use serde::de::DeserializeOwned;
use std::future::Future;
use tracing::debug;

/// Endpoints consumed by the dashboard.
///
/// Every non-success status is an error; there are no retries.
pub trait AttendanceApi: Send + Sync {
    /// `GET /students/`
    fn students(&self) -> impl Future<Output = AppResult<Vec<Student>>> + Send;

    /// `GET /current-status/`
    fn current_status(&self) -> impl Future<Output = AppResult<Vec<PresenceRecord>>> + Send;

    /// `GET /attendance/{student_id}?days={days}`
    fn attendance(
        &self,
        student_id: &str,
        days: u32,
    ) -> impl Future<Output = AppResult<Vec<AttendanceLog>>> + Send;

    /// `GET /core-time/check/{period}`
    fn check_core_time(&self, period: u8) -> impl Future<Output = AppResult<CheckResult>> + Send;

    /// `GET /core-time/violations`
    fn violations(&self) -> impl Future<Output = AppResult<Vec<Alert>>> + Send;
}

pub struct HttpApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpApi {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| AppError::InvalidUrl(format!("{base_url}: {e}")))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(AppError::InvalidUrl(base_url.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("coretime/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Append path segments to the base URL; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str], trailing_slash: bool) -> AppResult<Url> {
        let mut url = self.base.clone();
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| AppError::InvalidUrl(self.base.to_string()))?;
            path.pop_if_empty().extend(segments);
            if trailing_slash {
                path.push("");
            }
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> AppResult<T> {
        let endpoint = url.path().to_string();
        let resp = self.client.get(url).send().await?;
        let status = resp.status();
        debug!(endpoint = %endpoint, status = status.as_u16(), "api response");

        if !status.is_success() {
            return Err(AppError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = resp.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| AppError::Decode {
            endpoint,
            reason: e.to_string(),
        })
    }
}

impl AttendanceApi for HttpApi {
    async fn students(&self) -> AppResult<Vec<Student>> {
        let url = self.endpoint(&["students"], true)?;
        self.get_json(url).await
    }

    async fn current_status(&self) -> AppResult<Vec<PresenceRecord>> {
        let url = self.endpoint(&["current-status"], true)?;
        self.get_json(url).await
    }

    async fn attendance(&self, student_id: &str, days: u32) -> AppResult<Vec<AttendanceLog>> {
        let mut url = self.endpoint(&["attendance", student_id], false)?;
        url.query_pairs_mut()
            .append_pair("days", &days.to_string());
        self.get_json(url).await
    }

    async fn check_core_time(&self, period: u8) -> AppResult<CheckResult> {
        let url = self.endpoint(&["core-time", "check", &period.to_string()], false)?;
        self.get_json(url).await
    }

    async fn violations(&self) -> AppResult<Vec<Alert>> {
        let url = self.endpoint(&["core-time", "violations"], false)?;
        self.get_json(url).await
    }
}
