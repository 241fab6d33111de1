pub mod clients;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use clients::crm::CrmRestClient;
pub use clients::odoo::OdooRpcClient;
pub use config::SyncConfig;
pub use core::{engine::SyncEngine, sync::LeadSyncPipeline};
pub use domain::model::SyncReport;
pub use utils::error::{Result, SyncError};
