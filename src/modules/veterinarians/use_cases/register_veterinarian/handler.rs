use crate::modules::veterinarians::use_cases::register_veterinarian::command::RegisterVeterinarian;
use crate::modules::veterinarians::use_cases::register_veterinarian::decide::decide_register;
use crate::modules::veterinarians::use_cases::register_veterinarian::decision::{
    DecideError, Decision,
};
use crate::shared::infrastructure::veterinarian_directory::{
    DirectoryError, RegisteredVeterinarian, VeterinarianDirectory,
};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(DecideError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

pub struct RegisterVeterinarianHandler<TDirectory>
where
    TDirectory: VeterinarianDirectory + 'static,
{
    directory: Arc<TDirectory>,
}

impl<TDirectory> RegisterVeterinarianHandler<TDirectory>
where
    TDirectory: VeterinarianDirectory + 'static,
{
    pub fn new(directory: Arc<TDirectory>) -> Self {
        Self { directory }
    }

    pub async fn handle(
        &self,
        command: &RegisterVeterinarian,
    ) -> Result<RegisteredVeterinarian, ApplicationError> {
        match decide_register(command) {
            Decision::Accepted { registration } => {
                let registered = RegisteredVeterinarian {
                    id: Uuid::now_v7(),
                    registration,
                    registered_at: Utc::now(),
                };
                self.directory.record(registered.clone()).await?;
                tracing::info!(id = %registered.id, "veterinarian registered");
                Ok(registered)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "veterinarian registration rejected");
                Err(ApplicationError::Domain(reason))
            }
        }
    }
}
