use email_address::EmailAddress;

use crate::modules::veterinarians::core::registration::VeterinarianRegistration;
use crate::modules::veterinarians::use_cases::register_veterinarian::command::{
    RegisterVeterinarian, RegistrationField,
};
use crate::modules::veterinarians::use_cases::register_veterinarian::decision::{
    DecideError, Decision,
};

pub fn decide_register(command: &RegisterVeterinarian) -> Decision {
    if let Some(field) = RegistrationField::ALL
        .into_iter()
        .find(|field| command.value(*field).trim().is_empty())
    {
        return Decision::Rejected {
            reason: DecideError::MissingField(field),
        };
    }

    let email = command.email.trim();
    if !is_plain_address(email) {
        return Decision::Rejected {
            reason: DecideError::InvalidFormat(RegistrationField::Email),
        };
    }

    let salary = command.salary.trim();
    if !is_decimal_amount(salary) {
        return Decision::Rejected {
            reason: DecideError::InvalidFormat(RegistrationField::Salary),
        };
    }

    Decision::Accepted {
        registration: VeterinarianRegistration {
            name: command.name.trim().to_string(),
            email: email.to_string(),
            specialty: command.specialty.trim().to_string(),
            salary: salary.to_string(),
        },
    }
}

// A bare dot-atom addr-spec, as an `<input type="email">` accepts it:
// no display name, no quoted local part, no domain literal.
fn is_plain_address(value: &str) -> bool {
    EmailAddress::parse_with_options(value, Default::default())
        .map(|address| {
            address.email() == value
                && !address.local_part().starts_with('"')
                && !address.domain().starts_with('[')
        })
        .unwrap_or(false)
}

// Non-negative plain decimal: digits with at most one dot, no sign or exponent.
fn is_decimal_amount(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || c == '.')
        && value.chars().any(|c| c.is_ascii_digit())
        && value
            .parse::<f64>()
            .is_ok_and(|amount| amount.is_finite())
}
