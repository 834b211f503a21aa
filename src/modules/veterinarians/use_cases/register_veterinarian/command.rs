use serde::Deserialize;
use std::fmt;

/// Values exactly as the client submitted them. Absent fields decode as empty
/// strings so they are rejected by the presence check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RegisterVeterinarian {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub specialty: String,
    #[serde(default)]
    pub salary: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationField {
    Name,
    Email,
    Specialty,
    Salary,
}

impl RegistrationField {
    /// Presence is checked in this order.
    pub const ALL: [RegistrationField; 4] = [
        RegistrationField::Name,
        RegistrationField::Email,
        RegistrationField::Specialty,
        RegistrationField::Salary,
    ];

    pub fn form_name(self) -> &'static str {
        match self {
            RegistrationField::Name => "name",
            RegistrationField::Email => "email",
            RegistrationField::Specialty => "specialty",
            RegistrationField::Salary => "salary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RegistrationField::Name => "Nome",
            RegistrationField::Email => "Email",
            RegistrationField::Specialty => "Especialidade",
            RegistrationField::Salary => "Salário",
        }
    }
}

impl fmt::Display for RegistrationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.form_name())
    }
}

impl RegisterVeterinarian {
    pub fn value(&self, field: RegistrationField) -> &str {
        match field {
            RegistrationField::Name => &self.name,
            RegistrationField::Email => &self.email,
            RegistrationField::Specialty => &self.specialty,
            RegistrationField::Salary => &self.salary,
        }
    }
}
