use anyhow::{Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use serde_json::json;

use super::Session;

const DRIVE_FILES_URL: &str = "https://www.googleapis.com/drive/v3/files";
const DRIVE_UPLOAD_URL: &str = "https://www.googleapis.com/upload/drive/v3/files";
const FOLDER_MIME: &str = "application/vnd.google-apps.folder";

/// Narrow contract over the document-storage service. Lookups are by exact
/// name so re-runs land on the same folders and files.
#[async_trait]
pub trait DriveBackend: Send + Sync {
    async fn find_folder(&self, name: &str, parent: Option<&str>) -> Result<Option<String>>;
    async fn create_folder(&self, name: &str, parent: Option<&str>) -> Result<String>;
    async fn find_file(&self, name: &str, parent: &str) -> Result<Option<String>>;
    async fn create_file(&self, name: &str, parent: &str, content: &str) -> Result<CreatedFile>;
    async fn update_file_content(&self, file_id: &str, content: &str) -> Result<()>;
}

#[derive(Debug, Clone)]
pub struct CreatedFile {
    pub file_id: String,
    pub file_url: String,
}

#[derive(Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<FileEntry>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FileEntry {
    id: String,
    web_view_link: Option<String>,
}

pub struct HttpDriveBackend {
    client: Client,
    session: Session,
}

impl HttpDriveBackend {
    pub fn new(client: Client, session: Session) -> Self {
        Self { client, session }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.session.access_token)
    }

    async fn search(&self, query: &str) -> Result<Vec<FileEntry>> {
        let res = self
            .client
            .get(DRIVE_FILES_URL)
            .header("Authorization", self.bearer())
            .query(&[
                ("q", query),
                ("fields", "files(id, webViewLink)"),
                ("spaces", "drive"),
            ])
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Drive API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        let parsed: FileList = res.json().await?;
        Ok(parsed.files)
    }
}

// Drive query strings quote names with single quotes.
fn quote(name: &str) -> String {
    name.replace('\\', "\\\\").replace('\'', "\\'")
}

#[async_trait]
impl DriveBackend for HttpDriveBackend {
    async fn find_folder(&self, name: &str, parent: Option<&str>) -> Result<Option<String>> {
        let mut query = format!(
            "name='{}' and mimeType='{FOLDER_MIME}' and trashed=false",
            quote(name)
        );
        if let Some(parent) = parent {
            query.push_str(&format!(" and '{}' in parents", quote(parent)));
        }
        Ok(self.search(&query).await?.into_iter().next().map(|f| f.id))
    }

    async fn create_folder(&self, name: &str, parent: Option<&str>) -> Result<String> {
        let mut metadata = json!({ "name": name, "mimeType": FOLDER_MIME });
        if let Some(parent) = parent {
            metadata["parents"] = json!([parent]);
        }
        let res = self
            .client
            .post(DRIVE_FILES_URL)
            .header("Authorization", self.bearer())
            .query(&[("fields", "id")])
            .json(&metadata)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Drive API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        let parsed: FileEntry = res.json().await?;
        Ok(parsed.id)
    }

    async fn find_file(&self, name: &str, parent: &str) -> Result<Option<String>> {
        let query = format!(
            "name='{}' and '{}' in parents and trashed=false",
            quote(name),
            quote(parent)
        );
        Ok(self.search(&query).await?.into_iter().next().map(|f| f.id))
    }

    async fn create_file(&self, name: &str, parent: &str, content: &str) -> Result<CreatedFile> {
        let metadata = json!({ "name": name, "parents": [parent] });
        let form = Form::new()
            .part(
                "metadata",
                Part::text(metadata.to_string()).mime_str("application/json")?,
            )
            .part(
                "media",
                Part::text(content.to_string()).mime_str("text/plain")?,
            );

        let res = self
            .client
            .post(DRIVE_UPLOAD_URL)
            .header("Authorization", self.bearer())
            .query(&[
                ("uploadType", "multipart"),
                ("fields", "id, webViewLink"),
            ])
            .multipart(form)
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Drive API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        let parsed: FileEntry = res.json().await?;
        let file_url = parsed
            .web_view_link
            .unwrap_or_else(|| file_view_url(&parsed.id));
        Ok(CreatedFile {
            file_id: parsed.id,
            file_url,
        })
    }

    async fn update_file_content(&self, file_id: &str, content: &str) -> Result<()> {
        let res = self
            .client
            .patch(format!("{DRIVE_UPLOAD_URL}/{file_id}"))
            .header("Authorization", self.bearer())
            .header("Content-Type", "text/plain")
            .query(&[("uploadType", "media")])
            .body(content.to_string())
            .send()
            .await?;
        if !res.status().is_success() {
            let status = res.status();
            return Err(anyhow!(
                "Drive API error ({status}): {}",
                res.text().await.unwrap_or_default()
            ));
        }
        Ok(())
    }
}

pub fn file_view_url(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{file_id}/view")
}

pub fn folder_url(folder_id: &str) -> String {
    format!("https://drive.google.com/drive/folders/{folder_id}")
}
