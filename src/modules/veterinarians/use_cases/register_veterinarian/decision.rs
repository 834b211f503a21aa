use crate::modules::veterinarians::core::registration::VeterinarianRegistration;
use crate::modules::veterinarians::use_cases::register_veterinarian::command::RegistrationField;

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum DecideError {
    #[error("{0} is required")]
    MissingField(RegistrationField),

    #[error("{0} is not well formed")]
    InvalidFormat(RegistrationField),
}

impl DecideError {
    pub fn field(&self) -> RegistrationField {
        match self {
            DecideError::MissingField(field) | DecideError::InvalidFormat(field) => *field,
        }
    }

    /// Message shown to the user above the re-rendered form.
    pub fn user_message(&self) -> String {
        match self {
            DecideError::MissingField(field) => {
                format!("O campo {} é obrigatório.", field.label())
            }
            DecideError::InvalidFormat(field) => {
                format!("O campo {} está em formato inválido.", field.label())
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Decision {
    Accepted {
        registration: VeterinarianRegistration,
    },
    Rejected {
        reason: DecideError,
    },
}
