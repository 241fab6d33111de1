use crate::domain::model::{Contact, Lead, NewContact, NewProject};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the sync: the business-management backend holding the
/// leads.
#[async_trait]
pub trait LeadSource: Send + Sync {
    /// Authenticate once and return the backend user id used by
    /// subsequent reads.
    async fn authenticate(&self) -> Result<i64>;

    /// Fetch every lead with `probability == 100`. The filter is applied
    /// server-side; result order is whatever the backend returns.
    async fn fetch_closed_won(&self, uid: i64) -> Result<Vec<Lead>>;
}

/// Write side of the sync: the marketing-CRM REST API.
#[async_trait]
pub trait CrmGateway: Send + Sync {
    async fn search_contact_by_email(&self, email: &str) -> Result<Vec<Contact>>;

    async fn create_contact(&self, contact: &NewContact) -> Result<Contact>;

    async fn create_project(&self, project: &NewProject) -> Result<()>;
}
