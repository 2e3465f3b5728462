use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::Session;
use crate::core::compile::CreateItemRequest;

const FORMS_BASE_URL: &str = "https://forms.googleapis.com/v1/forms";

/// Narrow contract over the form-building service.
#[async_trait]
pub trait FormsBackend: Send + Sync {
    async fn create_form(&self, title: &str) -> Result<String>;
    async fn set_description(&self, form_id: &str, description: &str) -> Result<()>;
    async fn append_items(&self, form_id: &str, items: &[CreateItemRequest]) -> Result<()>;
    async fn responder_url(&self, form_id: &str) -> Result<String>;
}

#[derive(Serialize)]
struct CreateFormRequest<'a> {
    info: FormInfo<'a>,
}

#[derive(Serialize)]
struct FormInfo<'a> {
    title: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateFormResponse {
    form_id: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GetFormResponse {
    responder_uri: Option<String>,
}

pub struct HttpFormsBackend {
    client: Client,
    session: Session,
    base_url: String,
}

impl HttpFormsBackend {
    pub fn new(client: Client, session: Session) -> Self {
        Self {
            client,
            session,
            base_url: FORMS_BASE_URL.to_string(),
        }
    }

    async fn batch_update(&self, form_id: &str, body: serde_json::Value) -> Result<()> {
        let res = self
            .client
            .post(format!("{}/{}:batchUpdate", self.base_url, form_id))
            .header(
                "Authorization",
                format!("Bearer {}", self.session.access_token),
            )
            .json(&body)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Forms API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        Ok(())
    }
}

#[async_trait]
impl FormsBackend for HttpFormsBackend {
    async fn create_form(&self, title: &str) -> Result<String> {
        let res = self
            .client
            .post(&self.base_url)
            .header(
                "Authorization",
                format!("Bearer {}", self.session.access_token),
            )
            .json(&CreateFormRequest {
                info: FormInfo { title },
            })
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Forms API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        let parsed: CreateFormResponse = res.json().await?;
        parsed
            .form_id
            .ok_or_else(|| anyhow!("Form creation returned no formId."))
    }

    async fn set_description(&self, form_id: &str, description: &str) -> Result<()> {
        self.batch_update(
            form_id,
            json!({
                "requests": [{
                    "updateFormInfo": {
                        "info": { "description": description },
                        "updateMask": "description"
                    }
                }]
            }),
        )
        .await
    }

    async fn append_items(&self, form_id: &str, items: &[CreateItemRequest]) -> Result<()> {
        if items.is_empty() {
            return Ok(());
        }
        self.batch_update(form_id, json!({ "requests": items })).await
    }

    async fn responder_url(&self, form_id: &str) -> Result<String> {
        let res = self
            .client
            .get(format!("{}/{}", self.base_url, form_id))
            .header(
                "Authorization",
                format!("Bearer {}", self.session.access_token),
            )
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Forms API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        let parsed: GetFormResponse = res.json().await?;
        Ok(parsed
            .responder_uri
            .unwrap_or_else(|| format!("https://docs.google.com/forms/d/e/{form_id}/viewform")))
    }
}

/// Browser edit URL for a created form.
pub fn edit_url(form_id: &str) -> String {
    format!("https://docs.google.com/forms/d/{form_id}/edit")
}
