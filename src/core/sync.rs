use crate::core::resolver::ContactResolver;
use crate::core::{CrmGateway, Lead, LeadSource, NewProject, SyncReport};
use crate::utils::error::{Result, SyncError};

/// Outcome of one lead inside the per-lead error boundary.
enum LeadOutcome {
    Synced { contact_id: String },
    Skipped { reason: String },
    Failed { error: SyncError },
}

/// Best-effort batch orchestrator: one fetch, then a sequential loop in
/// backend order. A failing lead never aborts the leads after it; only
/// the fetch itself is fatal.
pub struct LeadSyncPipeline<B: LeadSource, G: CrmGateway> {
    backend: B,
    gateway: G,
}

impl<B: LeadSource, G: CrmGateway> LeadSyncPipeline<B, G> {
    pub fn new(backend: B, gateway: G) -> Self {
        Self { backend, gateway }
    }

    pub async fn authenticate(&self) -> Result<i64> {
        self.backend.authenticate().await
    }

    pub async fn sync(&self, uid: i64) -> Result<SyncReport> {
        let leads = self.backend.fetch_closed_won(uid).await?;
        tracing::info!("Fetched {} closed-won leads", leads.len());

        let mut report = SyncReport {
            total: leads.len(),
            ..Default::default()
        };

        for lead in &leads {
            match self.sync_lead(lead).await {
                LeadOutcome::Synced { contact_id } => {
                    report.synced += 1;
                    tracing::info!("Synced lead '{}' (contact {})", lead.name, contact_id);
                }
                LeadOutcome::Skipped { reason } => {
                    report.skipped += 1;
                    tracing::warn!("Skipped lead '{}': {}", lead.name, reason);
                }
                LeadOutcome::Failed { error } => {
                    report.failed += 1;
                    tracing::warn!("Failed to sync lead '{}': {}", lead.name, error);
                }
            }
        }

        Ok(report)
    }

    async fn sync_lead(&self, lead: &Lead) -> LeadOutcome {
        let resolver = ContactResolver::new(&self.gateway);
        let contact_id = match resolver.resolve_or_create(lead).await {
            Ok(Some(id)) => id,
            Ok(None) => {
                return LeadOutcome::Skipped {
                    reason: "lead has no email address".to_string(),
                }
            }
            Err(e) => {
                return LeadOutcome::Skipped {
                    reason: format!("contact resolution failed: {}", e),
                }
            }
        };

        let project = NewProject::from_lead(lead, contact_id.clone());
        match self.gateway.create_project(&project).await {
            Ok(()) => LeadOutcome::Synced { contact_id },
            Err(error) => LeadOutcome::Failed { error },
        }
    }
}
