//! Sign-in and registration form rules
//!
//! Each validator returns the message to show under the field, or `None`
//! when the value is acceptable.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Login => write!(f, "login"),
            Self::Register => write!(f, "register"),
        }
    }
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "login" => Ok(Self::Login),
            "register" => Ok(Self::Register),
            other => Err(format!("Invalid auth mode: '{}'", other)),
        }
    }
}

pub fn validate_name(mode: AuthMode, name: &str) -> Option<String> {
    (mode == AuthMode::Register && name.trim().is_empty())
        .then(|| "El nombre es obligatorio.".to_string())
}

pub fn validate_email(email: &str) -> Option<String> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Some("El correo es obligatorio.".to_string());
    }

    (!is_email_address(trimmed)).then(|| "Ingresa un correo válido.".to_string())
}

pub fn validate_password(mode: AuthMode, password: &str) -> Option<String> {
    if password.is_empty() {
        return Some("La contraseña es obligatoria.".to_string());
    }

    (mode == AuthMode::Register && !is_strong_password(password)).then(|| {
        "Debe tener 8 caracteres, una mayúscula, una minúscula y un número.".to_string()
    })
}

pub fn validate_confirm_password(mode: AuthMode, password: &str, confirm: &str) -> Option<String> {
    (mode == AuthMode::Register && password != confirm)
        .then(|| "Las contraseñas no coinciden.".to_string())
}

/// Every message for the form, in field order
pub fn validate_form(
    mode: AuthMode,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Vec<String> {
    [
        validate_name(mode, name),
        validate_email(email),
        validate_password(mode, password),
        validate_confirm_password(mode, password, confirm),
    ]
    .into_iter()
    .flatten()
    .collect()
}

fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
        && password.chars().any(char::is_uppercase)
        && password.chars().any(char::is_lowercase)
        && password.chars().any(|c| c.is_ascii_digit())
}

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9+._%\-]{1,256}@[a-zA-Z0-9][a-zA-Z0-9\-]{0,64}(\.[a-zA-Z0-9][a-zA-Z0-9\-]{0,25})+$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// `local@domain.tld`; the first domain label may be up to 65 characters,
/// later ones up to 26
fn is_email_address(email: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(email))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_required_when_registering() {
        assert_eq!(
            validate_name(AuthMode::Register, "  ").as_deref(),
            Some("El nombre es obligatorio.")
        );
        assert_eq!(validate_name(AuthMode::Login, ""), None);
    }

    #[test]
    fn test_email_rules() {
        assert_eq!(
            validate_email("correo-invalido").as_deref(),
            Some("Ingresa un correo válido.")
        );
        assert_eq!(
            validate_email("   ").as_deref(),
            Some("El correo es obligatorio.")
        );
        assert_eq!(validate_email("usuario@example.com"), None);
        assert_eq!(validate_email(" first.last+tag@mail.example.es "), None);
        assert!(validate_email("a@b").is_some());
        assert!(validate_email("a@@b.com").is_some());
        assert!(validate_email("a b@c.com").is_some());
    }

    #[test]
    fn test_email_label_lengths() {
        assert!(email_regex().is_some());

        let first = format!("a@{}.com", "d".repeat(65));
        assert_eq!(validate_email(&first), None);
        assert!(validate_email(&format!("a@{}.com", "d".repeat(66))).is_some());

        let later = format!("a@mail.{}", "t".repeat(26));
        assert_eq!(validate_email(&later), None);
        assert!(validate_email(&format!("a@mail.{}", "t".repeat(27))).is_some());

        assert!(validate_email("a@-mail.com").is_some());
        assert!(validate_email("a@mail.com.").is_some());
    }

    #[test]
    fn test_password_strength_only_on_register() {
        assert_eq!(
            validate_password(AuthMode::Register, "weakpass").as_deref(),
            Some("Debe tener 8 caracteres, una mayúscula, una minúscula y un número.")
        );
        assert_eq!(validate_password(AuthMode::Register, "Seguro123"), None);
        assert_eq!(validate_password(AuthMode::Login, "weak"), None);
        assert_eq!(
            validate_password(AuthMode::Login, "").as_deref(),
            Some("La contraseña es obligatoria.")
        );
    }

    #[test]
    fn test_confirm_password() {
        assert_eq!(
            validate_confirm_password(AuthMode::Register, "Seguro123", "Seguro124").as_deref(),
            Some("Las contraseñas no coinciden.")
        );
        assert_eq!(
            validate_confirm_password(AuthMode::Login, "Clave123", "Diferente"),
            None
        );
    }

    #[test]
    fn test_validate_form_collects_in_order() {
        let errors = validate_form(AuthMode::Register, "", "nope", "Seguro123", "x");
        assert_eq!(
            errors,
            vec![
                "El nombre es obligatorio.",
                "Ingresa un correo válido.",
                "Las contraseñas no coinciden."
            ]
        );
        assert!(validate_form(AuthMode::Login, "", "a@b.co", "x", "").is_empty());
    }
}
