pub mod engine;
pub mod resolver;
pub mod sync;

pub use crate::domain::model::{Contact, Lead, NewContact, NewProject, SyncReport};
pub use crate::domain::ports::{CrmGateway, LeadSource};
pub use crate::utils::error::Result;
