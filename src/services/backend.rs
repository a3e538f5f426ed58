use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Typed client for the backend REST API (settings, branches, employee
/// auth, KYC submission). Consumed by screens, not by the alarm core.
#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn fetch_settings(&self) -> Result<AppSettings, String> {
        let url = format!("{}/settings", self.base_url);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("settings fetch failed: {status} {body}"));
        }

        res.json::<AppSettings>().await.map_err(|e| e.to_string())
    }

    pub async fn fetch_branches(&self) -> Result<Vec<Branch>, String> {
        let url = format!("{}/branches", self.base_url);
        let res = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("branches fetch failed: {status} {body}"));
        }

        res.json::<Vec<Branch>>().await.map_err(|e| e.to_string())
    }

    /// Employee login; the returned token is an opaque string the session
    /// store persists as-is.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, String> {
        let url = format!("{}/auth/login", self.base_url);
        let res = self
            .http
            .post(&url)
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("login failed: {status} {body}"));
        }

        res.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }

    pub async fn submit_kyc(&self, form: &KycForm) -> Result<(), String> {
        let url = format!("{}/kyc", self.base_url);
        let res = self
            .http
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| e.to_string())?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(format!("KYC submission failed: {status} {body}"));
        }

        Ok(())
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub maintenance: bool,
    pub min_app_version: String,
    #[serde(default)]
    pub contact_phone: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,

    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycForm {
    pub full_name: String,
    pub national_id: String,
    pub birth_date: String,
    pub phone: String,

    #[serde(default)]
    pub email: Option<String>,
}
