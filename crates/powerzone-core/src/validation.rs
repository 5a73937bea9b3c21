//! # Validation Module
//!
//! Client-side form rules for the account and contact screens.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Input widgets                                                 │
//! │  ├── maxLength on phone (10) and zip code (5)                           │
//! │  └── Leading spaces stripped while typing the password                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Required fields, letters-only names, email/phone/zip patterns      │
//! │  └── Runs before any request leaves the device                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote API                                                    │
//! │  └── Duplicate accounts, credentials, rate limits                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use powerzone_core::validation::{validate_email, LoginForm};
//!
//! assert!(validate_email("socio@powerzone.mx").is_ok());
//!
//! let login = LoginForm {
//!     email: "socio@powerzone.mx".to_string(),
//!     password: "secreto123".to_string(),
//! };
//! assert!(login.validate().is_ok());
//! ```

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, FormErrors, ValidationError};
use crate::types::Product;
use crate::MAX_RATING;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Password length bounds, in characters.
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 10;

/// Minimum length of a password chosen on the reset screen.
pub const RESET_PASSWORD_MIN_LEN: usize = 6;

// =============================================================================
// Patterns
// =============================================================================

fn pattern(cell: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(source).unwrap_or_else(|e| panic!("bad pattern {source}: {e}")))
}

fn email_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"\S+@\S+\.\S+")
}

fn strict_email_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
}

fn letters_pattern() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    pattern(&CELL, r"^[a-zA-ZáéíóúÁÉÍÓÚñÑ\s]*$")
}

// =============================================================================
// Field Validators
// =============================================================================

/// Field must not be blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Field must not start or end with whitespace.
pub fn validate_no_surrounding_whitespace(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim() != value {
        return Err(ValidationError::SurroundingWhitespace {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Letters (Spanish accents included) and spaces only.
///
/// ```rust
/// use powerzone_core::validation::validate_letters_only;
///
/// assert!(validate_letters_only("city", "Ciudad de México").is_ok());
/// assert!(validate_letters_only("city", "CDMX 2").is_err());
/// ```
pub fn validate_letters_only(field: &str, value: &str) -> ValidationResult<()> {
    if !letters_pattern().is_match(value) {
        return Err(ValidationError::LettersOnly {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Loose email check used by login and registration.
pub fn validate_email(value: &str) -> ValidationResult<()> {
    if !email_pattern().is_match(value) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }
    Ok(())
}

/// Stricter email check used by the contact form and the password reset
/// request: no whitespace and exactly one `@` anywhere in the address.
pub fn validate_strict_email(value: &str) -> ValidationResult<()> {
    if !strict_email_pattern().is_match(value) {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must look like name@domain.tld".to_string(),
        });
    }
    Ok(())
}

fn validate_digits(field: &str, value: &str, len: usize) -> ValidationResult<()> {
    if value.len() != len || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: format!("must be exactly {} digits", len),
        });
    }
    Ok(())
}

/// Ten-digit phone number.
pub fn validate_phone(value: &str) -> ValidationResult<()> {
    validate_digits("phone", value, 10)
}

/// Five-digit postal code.
pub fn validate_zip_code(value: &str) -> ValidationResult<()> {
    validate_digits("zip_code", value, 5)
}

/// Password of 8 to 10 characters without surrounding whitespace.
pub fn validate_password(value: &str) -> ValidationResult<()> {
    let len = value.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&len) {
        return Err(ValidationError::LengthOutOfRange {
            field: "password".to_string(),
            min: PASSWORD_MIN_LEN,
            max: PASSWORD_MAX_LEN,
        });
    }
    validate_no_surrounding_whitespace("password", value)
}

/// Validates a price in cents. Zero is allowed (free items).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }
    Ok(())
}

/// Checks a catalog product before it is listed.
///
/// ## Rules
/// - id and name present
/// - price not negative
/// - rating between 0 and 5
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_required("id", &product.id)?;
    validate_required("name", &product.name)?;
    validate_price_cents(product.price_cents)?;

    if !(0.0..=MAX_RATING).contains(&product.rating) {
        return Err(ValidationError::OutOfRange {
            field: "rating".to_string(),
            min: 0,
            max: MAX_RATING as i64,
        });
    }
    Ok(())
}

fn all_required(fields: &[(&str, &str)]) -> ValidationResult<()> {
    fields
        .iter()
        .try_for_each(|(field, value)| validate_required(field, value))
}

fn all_trimmed(fields: &[(&str, &str)]) -> ValidationResult<()> {
    fields
        .iter()
        .try_for_each(|(field, value)| validate_no_surrounding_whitespace(field, value))
}

fn all_letters(fields: &[(&str, &str)]) -> ValidationResult<()> {
    fields
        .iter()
        .try_for_each(|(field, value)| validate_letters_only(field, value))
}

// =============================================================================
// Registration Wizard
// =============================================================================

/// The three pages of the sign-up wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RegistrationStep {
    /// Names, email and password.
    Personal,
    /// Phone, address type and street.
    Contact,
    /// City, state, zip code and delivery references.
    Address,
}

impl RegistrationStep {
    /// Page number as shown to the user (1-3).
    pub fn number(self) -> u8 {
        match self {
            RegistrationStep::Personal => 1,
            RegistrationStep::Contact => 2,
            RegistrationStep::Address => 3,
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            RegistrationStep::Personal => Some(RegistrationStep::Contact),
            RegistrationStep::Contact => Some(RegistrationStep::Address),
            RegistrationStep::Address => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            RegistrationStep::Personal => None,
            RegistrationStep::Contact => Some(RegistrationStep::Personal),
            RegistrationStep::Address => Some(RegistrationStep::Contact),
        }
    }
}

impl TryFrom<u8> for RegistrationStep {
    type Error = CoreError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(RegistrationStep::Personal),
            2 => Ok(RegistrationStep::Contact),
            3 => Ok(RegistrationStep::Address),
            other => Err(CoreError::InvalidStep(other)),
        }
    }
}

/// Everything the sign-up wizard collects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct RegistrationForm {
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    /// Address type picked from a list (house, apartment, office).
    pub address_type: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub references: String,
}

impl RegistrationForm {
    /// Validates one page; the wizard only advances when this passes.
    ///
    /// Checks run in a fixed order and the first failure is returned, so
    /// the screen shows a single message at a time.
    pub fn validate_step(&self, step: RegistrationStep) -> ValidationResult<()> {
        match step {
            RegistrationStep::Personal => self.validate_personal(),
            RegistrationStep::Contact => self.validate_contact(),
            RegistrationStep::Address => self.validate_address(),
        }
    }

    /// Validates all three pages in order, as the final submit does.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut step = Some(RegistrationStep::Personal);
        while let Some(current) = step {
            self.validate_step(current)?;
            step = current.next();
        }
        Ok(())
    }

    fn validate_personal(&self) -> ValidationResult<()> {
        let names = [
            ("first_name", self.first_name.as_str()),
            ("paternal_surname", self.paternal_surname.as_str()),
            ("maternal_surname", self.maternal_surname.as_str()),
        ];

        all_required(&names)?;
        validate_required("email", &self.email)?;
        validate_required("password", &self.password)?;

        all_trimmed(&names)?;
        all_letters(&names)?;

        validate_email(&self.email)?;
        validate_no_surrounding_whitespace("email", &self.email)?;

        validate_password(&self.password)
    }

    fn validate_contact(&self) -> ValidationResult<()> {
        all_required(&[
            ("phone", self.phone.as_str()),
            ("address_type", self.address_type.as_str()),
            ("street", self.street.as_str()),
        ])?;

        validate_phone(&self.phone)?;
        validate_no_surrounding_whitespace("street", &self.street)
    }

    fn validate_address(&self) -> ValidationResult<()> {
        let fields = [
            ("city", self.city.as_str()),
            ("state", self.state.as_str()),
            ("zip_code", self.zip_code.as_str()),
            ("references", self.references.as_str()),
        ];

        all_required(&fields)?;
        all_trimmed(&fields)?;
        all_letters(&fields[..2])?;

        validate_zip_code(&self.zip_code)
    }
}

// =============================================================================
// Login / Password Reset
// =============================================================================

/// Credentials typed on the login screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("email", &self.email)?;
        validate_required("password", &self.password)?;
        validate_email(&self.email)
    }
}

/// "Forgot password" request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PasswordResetRequest {
    pub email: String,
}

impl PasswordResetRequest {
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("email", &self.email)?;
        validate_strict_email(&self.email)
    }
}

/// New password typed on the reset screen opened from the emailed link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PasswordResetForm {
    pub new_password: String,
    pub confirm_password: String,
}

impl PasswordResetForm {
    /// Both fields present, at least six characters, and identical.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_required("new_password", &self.new_password)?;
        validate_required("confirm_password", &self.confirm_password)?;

        if self.new_password.chars().count() < RESET_PASSWORD_MIN_LEN {
            return Err(ValidationError::TooShort {
                field: "new_password".to_string(),
                min: RESET_PASSWORD_MIN_LEN,
            });
        }

        if self.new_password != self.confirm_password {
            return Err(ValidationError::Mismatch {
                field: "confirm_password".to_string(),
                other: "new_password".to_string(),
            });
        }
        Ok(())
    }
}

// =============================================================================
// Contact Form
// =============================================================================

/// Lead submitted from the contact section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Checks every field and reports all failures together.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::default();

        errors.check(validate_required("name", &self.name));
        errors.check(
            validate_required("email", &self.email)
                .and_then(|()| validate_strict_email(&self.email)),
        );
        errors.check(validate_required("message", &self.message));

        errors.into_result()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn complete_registration() -> RegistrationForm {
        RegistrationForm {
            first_name: "María José".to_string(),
            paternal_surname: "Núñez".to_string(),
            maternal_surname: "López".to_string(),
            email: "maria@powerzone.mx".to_string(),
            password: "fuerte123".to_string(),
            phone: "5512345678".to_string(),
            address_type: "casa".to_string(),
            street: "Av. Reforma 100".to_string(),
            city: "Ciudad de México".to_string(),
            state: "CDMX".to_string(),
            zip_code: "06600".to_string(),
            references: "Portón negro".to_string(),
        }
    }

    #[test]
    fn test_primitive_rules() {
        assert!(validate_required("name", "Ana").is_ok());
        assert!(validate_required("name", "   ").is_err());

        assert!(validate_no_surrounding_whitespace("street", "Calle 5").is_ok());
        assert!(validate_no_surrounding_whitespace("street", " Calle 5").is_err());
        assert!(validate_no_surrounding_whitespace("street", "Calle 5\t").is_err());

        assert!(validate_letters_only("city", "Mérida").is_ok());
        assert!(validate_letters_only("city", "").is_ok());
        assert!(validate_letters_only("city", "Zona-1").is_err());
    }

    #[test]
    fn test_email_patterns() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("sin-arroba.com").is_err());
        assert!(validate_email("a@b").is_err());

        assert!(validate_strict_email("a@b.co").is_ok());
        assert!(validate_strict_email("a b@c.co").is_err());
        assert!(validate_strict_email("a@@b.co").is_err());
        // The loose login pattern only needs a match somewhere.
        assert!(validate_email("a b@c.co").is_ok());
    }

    #[test]
    fn test_phone_and_zip() {
        assert!(validate_phone("5512345678").is_ok());
        assert!(validate_phone("551234567").is_err());
        assert!(validate_phone("55 1234567").is_err());
        assert!(validate_phone("٥٥١٢٣٤٥٦٧٨").is_err());

        assert!(validate_zip_code("06600").is_ok());
        assert!(validate_zip_code("6600").is_err());
        assert!(validate_zip_code("0660a").is_err());
    }

    #[test]
    fn test_password_bounds() {
        assert!(validate_password("12345678").is_ok());
        assert!(validate_password("1234567890").is_ok());
        assert!(validate_password("ñandú1234").is_ok());

        assert!(matches!(
            validate_password("1234567"),
            Err(ValidationError::LengthOutOfRange { .. })
        ));
        assert!(validate_password("12345678901").is_err());
        assert!(matches!(
            validate_password("1234567 "),
            Err(ValidationError::SurroundingWhitespace { .. })
        ));
    }

    #[test]
    fn test_validate_product() {
        let product = Product::new("p1", "Creatina", Money::from_cents(59990)).with_rating(4.5, 3);
        assert!(validate_product(&product).is_ok());

        let free = Product::new("p2", "Muestra", Money::zero());
        assert!(validate_product(&free).is_ok());

        let negative = Product::new("p3", "Error", Money::from_cents(-1));
        assert!(validate_product(&negative).is_err());

        let unnamed = Product::new("p4", " ", Money::from_cents(100));
        assert!(validate_product(&unnamed).is_err());

        let overrated = Product::new("p5", "Banda", Money::from_cents(100)).with_rating(7.0, 1);
        assert!(validate_product(&overrated).is_err());
    }

    #[test]
    fn test_registration_complete_form_passes() {
        assert!(complete_registration().validate().is_ok());
    }

    #[test]
    fn test_registration_step_one_order() {
        let mut form = complete_registration();
        form.maternal_surname = String::new();
        form.email = "not-an-email".to_string();
        // Missing field reported before the bad email.
        assert_eq!(
            form.validate_step(RegistrationStep::Personal),
            Err(ValidationError::Required {
                field: "maternal_surname".to_string()
            })
        );

        let mut form = complete_registration();
        form.first_name = "R2D2".to_string();
        assert!(matches!(
            form.validate_step(RegistrationStep::Personal),
            Err(ValidationError::LettersOnly { .. })
        ));

        let mut form = complete_registration();
        form.first_name = " Ana".to_string();
        assert!(matches!(
            form.validate_step(RegistrationStep::Personal),
            Err(ValidationError::SurroundingWhitespace { .. })
        ));

        let mut form = complete_registration();
        form.password = "corta".to_string();
        assert_eq!(
            form.validate_step(RegistrationStep::Personal).unwrap_err().field(),
            "password"
        );
    }

    #[test]
    fn test_registration_step_two() {
        let mut form = complete_registration();
        form.address_type = String::new();
        assert!(form.validate_step(RegistrationStep::Contact).is_err());
        // Other pages are unaffected.
        assert!(form.validate_step(RegistrationStep::Personal).is_ok());

        let mut form = complete_registration();
        form.phone = "12345".to_string();
        assert_eq!(
            form.validate_step(RegistrationStep::Contact).unwrap_err().field(),
            "phone"
        );

        let mut form = complete_registration();
        form.street = "Reforma 100 ".to_string();
        assert!(matches!(
            form.validate_step(RegistrationStep::Contact),
            Err(ValidationError::SurroundingWhitespace { .. })
        ));
    }

    #[test]
    fn test_registration_step_three() {
        let mut form = complete_registration();
        form.state = "Jalisco3".to_string();
        assert!(matches!(
            form.validate_step(RegistrationStep::Address),
            Err(ValidationError::LettersOnly { .. })
        ));

        // References may contain digits.
        let mut form = complete_registration();
        form.references = "Casa 4, portón 2".to_string();
        assert!(form.validate_step(RegistrationStep::Address).is_ok());

        let mut form = complete_registration();
        form.zip_code = "1234".to_string();
        assert_eq!(form.validate().unwrap_err().field(), "zip_code");
    }

    #[test]
    fn test_registration_step_navigation() {
        let step = RegistrationStep::try_from(1).unwrap();
        assert_eq!(step.next(), Some(RegistrationStep::Contact));
        assert_eq!(step.prev(), None);
        assert_eq!(RegistrationStep::Address.next(), None);
        assert_eq!(RegistrationStep::Address.number(), 3);
        assert!(matches!(
            RegistrationStep::try_from(4),
            Err(CoreError::InvalidStep(4))
        ));
    }

    #[test]
    fn test_login_and_reset() {
        let login = LoginForm {
            email: String::new(),
            password: "x".to_string(),
        };
        assert!(matches!(login.validate(), Err(ValidationError::Required { .. })));

        let login = LoginForm {
            email: "socio".to_string(),
            password: "x".to_string(),
        };
        assert!(matches!(
            login.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));

        assert!(PasswordResetRequest {
            email: "socio@powerzone.mx".to_string()
        }
        .validate()
        .is_ok());
        assert!(PasswordResetRequest::default().validate().is_err());
    }

    #[test]
    fn test_reset_request_rejects_whitespace_email() {
        // Login keeps the loose pattern; the reset request does not.
        assert!(validate_email("a b@c.co").is_ok());

        let request = PasswordResetRequest {
            email: "a b@c.co".to_string(),
        };
        assert!(matches!(
            request.validate(),
            Err(ValidationError::InvalidFormat { .. })
        ));

        let request = PasswordResetRequest {
            email: "a@@b.co".to_string(),
        };
        assert!(request.validate().is_err());
    }

    fn reset_form(new_password: &str, confirm_password: &str) -> PasswordResetForm {
        PasswordResetForm {
            new_password: new_password.to_string(),
            confirm_password: confirm_password.to_string(),
        }
    }

    #[test]
    fn test_reset_form_requires_both_fields() {
        assert_eq!(
            reset_form("", "secreto").validate(),
            Err(ValidationError::Required {
                field: "new_password".to_string()
            })
        );
        assert_eq!(
            reset_form("secreto", "").validate(),
            Err(ValidationError::Required {
                field: "confirm_password".to_string()
            })
        );
    }

    #[test]
    fn test_reset_form_minimum_length() {
        assert_eq!(
            reset_form("12345", "12345").validate(),
            Err(ValidationError::TooShort {
                field: "new_password".to_string(),
                min: 6
            })
        );
        assert!(reset_form("123456", "123456").validate().is_ok());
        // Counted in characters, not bytes.
        assert!(reset_form("ñññññ", "ñññññ").validate().is_err());
    }

    #[test]
    fn test_reset_form_confirmation_must_match() {
        let err = reset_form("nueva123", "nueva124").validate().unwrap_err();
        assert!(matches!(err, ValidationError::Mismatch { .. }));
        assert_eq!(err.field(), "confirm_password");
        assert_eq!(err.to_string(), "confirm_password must match new_password");

        // Length is checked before the comparison.
        assert!(matches!(
            reset_form("abc", "xyz").validate(),
            Err(ValidationError::TooShort { .. })
        ));
    }

    #[test]
    fn test_contact_form_reports_every_field() {
        let errors = ContactForm::default().validate().unwrap_err();
        assert_eq!(errors.errors.len(), 3);

        let form = ContactForm {
            name: "Luis".to_string(),
            email: "luis@correo".to_string(),
            message: String::new(),
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.errors.len(), 2);
        assert!(matches!(
            errors.for_field("email"),
            Some(ValidationError::InvalidFormat { .. })
        ));
        assert!(errors.for_field("message").is_some());

        let form = ContactForm {
            name: "Luis".to_string(),
            email: "luis@correo.mx".to_string(),
            message: "¿Horario del sábado?".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
