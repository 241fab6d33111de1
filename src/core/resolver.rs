use crate::core::{CrmGateway, Lead, NewContact};
use crate::utils::error::Result;

/// Resolves the CRM contact matching a lead by exact email, creating one
/// when no match exists. Existing contacts are never updated.
pub struct ContactResolver<'g, G: CrmGateway> {
    gateway: &'g G,
}

impl<'g, G: CrmGateway> ContactResolver<'g, G> {
    pub fn new(gateway: &'g G) -> Self {
        Self { gateway }
    }

    /// Returns `Ok(None)` when the lead carries no email address; a
    /// search with an empty filter is never issued.
    pub async fn resolve_or_create(&self, lead: &Lead) -> Result<Option<String>> {
        let Some(email) = lead.email_from.as_deref() else {
            return Ok(None);
        };

        let matches = self.gateway.search_contact_by_email(email).await?;
        if let Some(existing) = matches.first() {
            // Tie-break on multiple matches: first element in CRM order.
            tracing::debug!("Matched existing contact {} for {}", existing.id, email);
            return Ok(Some(existing.id.clone()));
        }

        let created = self
            .gateway
            .create_contact(&NewContact {
                first_name: lead.name.clone(),
                email: email.to_string(),
                phone: lead.phone.clone(),
            })
            .await?;

        tracing::debug!("Created contact {} for {}", created.id, email);
        Ok(Some(created.id))
    }
}
