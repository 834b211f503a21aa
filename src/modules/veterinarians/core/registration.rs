/// A veterinarian registration that passed validation.
///
/// `decide_register` produces one only when every field is present, the email
/// is well formed and the salary is a decimal amount. Values are stored trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VeterinarianRegistration {
    pub name: String,
    pub email: String,
    pub specialty: String,
    /// Decimal amount as submitted, e.g. "5000.00".
    pub salary: String,
}
