use crate::modules::veterinarians::use_cases::register_veterinarian::handler::RegisterVeterinarianHandler;
use crate::shared::infrastructure::veterinarian_directory::in_memory::InMemoryVeterinarianDirectory;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub register_handler: Arc<RegisterVeterinarianHandler<InMemoryVeterinarianDirectory>>,
    pub directory: Arc<InMemoryVeterinarianDirectory>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::with_directory(InMemoryVeterinarianDirectory::new())
    }

    pub fn with_directory(directory: InMemoryVeterinarianDirectory) -> Self {
        let directory = Arc::new(directory);
        let register_handler = Arc::new(RegisterVeterinarianHandler::new(directory.clone()));
        Self {
            register_handler,
            directory,
        }
    }
}
