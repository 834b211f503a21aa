use crate::shared::infrastructure::veterinarian_directory::{
    DirectoryError, RegisteredVeterinarian, VeterinarianDirectory,
};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryVeterinarianDirectory {
    rows: RwLock<Vec<RegisteredVeterinarian>>,
    offline: bool,
}

impl InMemoryVeterinarianDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.offline = !self.offline;
    }

    fn ensure_online(&self) -> Result<(), DirectoryError> {
        if self.offline {
            return Err(DirectoryError::Backend(
                "Veterinarian directory offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl VeterinarianDirectory for InMemoryVeterinarianDirectory {
    async fn record(&self, veterinarian: RegisteredVeterinarian) -> Result<(), DirectoryError> {
        self.ensure_online()?;
        self.rows.write().await.push(veterinarian);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<RegisteredVeterinarian>, DirectoryError> {
        self.ensure_online()?;
        Ok(self.rows.read().await.clone())
    }
}
