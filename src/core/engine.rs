use crate::core::sync::LeadSyncPipeline;
use crate::core::{CrmGateway, LeadSource, SyncReport};
use crate::utils::error::Result;

/// Single-shot runner: authenticate once, hold the uid in memory for the
/// run, drive the pipeline to completion.
pub struct SyncEngine<B: LeadSource, G: CrmGateway> {
    pipeline: LeadSyncPipeline<B, G>,
}

impl<B: LeadSource, G: CrmGateway> SyncEngine<B, G> {
    pub fn new(pipeline: LeadSyncPipeline<B, G>) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<SyncReport> {
        tracing::info!("Starting lead sync...");

        let uid = self.pipeline.authenticate().await?;
        tracing::info!("Authenticated against backend as uid {}", uid);

        let report = self.pipeline.sync(uid).await?;
        tracing::info!(
            "Sync finished: {} synced, {} skipped, {} failed out of {} leads",
            report.synced,
            report.skipped,
            report.failed,
            report.total
        );

        Ok(report)
    }
}
