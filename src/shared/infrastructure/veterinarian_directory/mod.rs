use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

use crate::modules::veterinarians::core::registration::VeterinarianRegistration;

#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredVeterinarian {
    pub id: Uuid,
    pub registration: VeterinarianRegistration,
    pub registered_at: DateTime<Utc>,
}

#[async_trait]
pub trait VeterinarianDirectory: Send + Sync {
    async fn record(&self, veterinarian: RegisteredVeterinarian) -> Result<(), DirectoryError>;
    async fn list(&self) -> Result<Vec<RegisteredVeterinarian>, DirectoryError>;
}

pub mod in_memory;
