use crate::config::SyncConfig;
use crate::domain::model::{Contact, NewContact, NewProject};
use crate::domain::ports::CrmGateway;
use crate::utils::error::{Result, SyncError};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Bearer-authenticated REST transport for the marketing CRM.
pub struct CrmRestClient {
    client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ContactSearchResponse {
    #[serde(default)]
    contacts: Vec<Contact>,
}

#[derive(Debug, Deserialize)]
struct ContactCreateResponse {
    contact: Contact,
}

impl CrmRestClient {
    pub fn new(config: &SyncConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.crm_base_url.trim_end_matches('/').to_string(),
            api_key: config.crm_api_key.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn check_status(url: &str, response: &reqwest::Response) -> Result<()> {
        if response.status().is_success() {
            Ok(())
        } else {
            Err(SyncError::UnexpectedResponse {
                endpoint: url.to_string(),
                message: format!("HTTP status {}", response.status()),
            })
        }
    }
}

#[async_trait]
impl CrmGateway for CrmRestClient {
    async fn search_contact_by_email(&self, email: &str) -> Result<Vec<Contact>> {
        let url = self.endpoint("/contacts/search");
        tracing::debug!("Searching CRM contacts for {}", email);

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(&[("email", email)])
            .send()
            .await?;

        Self::check_status(&url, &response)?;
        let body: ContactSearchResponse = response.json().await?;
        Ok(body.contacts)
    }

    async fn create_contact(&self, contact: &NewContact) -> Result<Contact> {
        let url = self.endpoint("/contacts/");
        tracing::debug!("Creating CRM contact for {}", contact.email);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(contact)
            .send()
            .await?;

        Self::check_status(&url, &response)?;
        let body: ContactCreateResponse = response.json().await?;
        Ok(body.contact)
    }

    async fn create_project(&self, project: &NewProject) -> Result<()> {
        let url = self.endpoint("/projects/");
        tracing::debug!("Creating CRM project '{}'", project.name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(project)
            .send()
            .await?;

        Self::check_status(&url, &response)
    }
}
