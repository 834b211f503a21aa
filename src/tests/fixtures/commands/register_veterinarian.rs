// Shared test fixture for the RegisterVeterinarian command.
// Defaults to the valid submission of Dr. João Silva; setters override one field at a time.

use crate::modules::veterinarians::use_cases::register_veterinarian::command::RegisterVeterinarian;

pub struct RegisterVeterinarianBuilder {
    inner: RegisterVeterinarian,
}

impl Default for RegisterVeterinarianBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RegisterVeterinarianBuilder {
    pub fn new() -> Self {
        Self {
            inner: RegisterVeterinarian {
                name: "Dr. João Silva".to_string(),
                email: "joao.silva@veterinaria.com".to_string(),
                specialty: "Cirurgia Veterinária".to_string(),
                salary: "5000.00".to_string(),
            },
        }
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn email(mut self, v: impl Into<String>) -> Self {
        self.inner.email = v.into();
        self
    }

    pub fn specialty(mut self, v: impl Into<String>) -> Self {
        self.inner.specialty = v.into();
        self
    }

    pub fn salary(mut self, v: impl Into<String>) -> Self {
        self.inner.salary = v.into();
        self
    }

    pub fn build(self) -> RegisterVeterinarian {
        self.inner
    }
}

#[cfg(test)]
mod register_veterinarian_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new() {
        assert_eq!(
            RegisterVeterinarianBuilder::default().build(),
            RegisterVeterinarianBuilder::new().build()
        );
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = RegisterVeterinarianBuilder::new()
            .name("Dr. Maria Santos")
            .email("email-invalido")
            .specialty("Dermatologia Veterinária")
            .salary("4500.00")
            .build();

        assert_eq!(custom.name, "Dr. Maria Santos");
        assert_eq!(custom.email, "email-invalido");
        assert_eq!(custom.specialty, "Dermatologia Veterinária");
        assert_eq!(custom.salary, "4500.00");
    }
}
