//! Contact-form validation rules, kept free of DOM types so they run in
//! plain unit tests and behind the dev hook.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ContactData {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(rename = "project-type", default)]
    pub project_type: String,
    #[serde(default)]
    pub message: String,
}

/// One error slot per required field; a later rule on the same field
/// overwrites an earlier one (ordered rule list, last write wins).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    #[serde(rename = "project-type")]
    pub project_type: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_valid(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.project_type.is_none()
            && self.message.is_none()
    }
}

fn required(field_id: &str) -> String {
    format!("{} is required", field_id.replace('-', " "))
}

/// `local@domain.tld` shape: no whitespace, a single `@` with a non-empty
/// local part, and a dot inside the domain that is neither first nor last.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// After stripping everything but digits and `+`: an optional leading `+`
/// followed by 7 to 16 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    let stripped: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();
    let digits = stripped.strip_prefix('+').unwrap_or(&stripped);
    (7..=16).contains(&digits.chars().count()) && digits.chars().all(|c| c.is_ascii_digit())
}

pub fn validate(data: &ContactData) -> FieldErrors {
    let mut errors = FieldErrors::default();

    let name = data.name.trim();
    if name.is_empty() {
        errors.name = Some(required("name"));
    } else if name.chars().count() < 2 {
        errors.name = Some("Name must be at least 2 characters".to_string());
    } else if !name.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace()) {
        errors.name = Some("Name should contain only letters and spaces".to_string());
    }

    let email = data.email.trim();
    if email.is_empty() {
        errors.email = Some(required("email"));
    } else if !is_valid_email(email) {
        errors.email = Some("Invalid email address".to_string());
    }

    let phone = data.phone.trim();
    if phone.is_empty() {
        errors.phone = Some(required("phone"));
    } else if !is_valid_phone(phone) {
        errors.phone = Some("Invalid phone number".to_string());
    }

    if data.project_type.trim().is_empty() {
        errors.project_type = Some(required("project-type"));
    }

    let message = data.message.trim();
    if message.is_empty() {
        errors.message = Some(required("message"));
    } else {
        let len = message.chars().count();
        if len < 10 {
            errors.message = Some("Message must be at least 10 characters".to_string());
        }
        if len > 2000 {
            errors.message = Some("Message too long (max 2000)".to_string());
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactData {
        ContactData {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            project_type: "IoT Automation".to_string(),
            message: "I need help with my final year sensor network project.".to_string(),
        }
    }

    #[test]
    fn well_formed_data_passes() {
        assert!(validate(&filled()).is_valid());
    }

    #[test]
    fn empty_fields_report_required_with_spaced_names() {
        let errors = validate(&ContactData::default());
        assert_eq!(errors.name.as_deref(), Some("name is required"));
        assert_eq!(errors.email.as_deref(), Some("email is required"));
        assert_eq!(errors.phone.as_deref(), Some("phone is required"));
        assert_eq!(errors.project_type.as_deref(), Some("project type is required"));
        assert_eq!(errors.message.as_deref(), Some("message is required"));
    }

    #[test]
    fn name_rules() {
        let mut data = filled();
        data.name = "A".to_string();
        assert_eq!(
            validate(&data).name.as_deref(),
            Some("Name must be at least 2 characters")
        );
        data.name = "R2D2".to_string();
        assert_eq!(
            validate(&data).name.as_deref(),
            Some("Name should contain only letters and spaces")
        );
    }

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b.com "));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn phone_shapes() {
        assert!(is_valid_phone("+12345678"));
        assert!(is_valid_phone("(123) 456-7890"));
        assert!(!is_valid_phone("123456"));
        assert!(!is_valid_phone("12345678901234567"));
        assert!(!is_valid_phone("123+4567890"));
    }

    #[test]
    fn message_length_boundaries() {
        let mut data = filled();
        data.message = "x".repeat(9);
        assert_eq!(
            validate(&data).message.as_deref(),
            Some("Message must be at least 10 characters")
        );
        data.message = "x".repeat(10);
        assert!(validate(&data).is_valid());
        data.message = "x".repeat(2000);
        assert!(validate(&data).is_valid());
        data.message = "x".repeat(2001);
        assert_eq!(
            validate(&data).message.as_deref(),
            Some("Message too long (max 2000)")
        );
    }

    #[test]
    fn errors_serialize_with_form_field_ids() {
        let errors = validate(&ContactData::default());
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["project-type"], "project type is required");
    }
}
