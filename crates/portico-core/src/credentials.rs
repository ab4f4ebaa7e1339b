//! Login credentials and form fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A named input of the login form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginField {
    /// The `email` input.
    Email,
    /// The `password` input.
    Password,
}

impl LoginField {
    /// Returns the input name as rendered in the form.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
        }
    }
}

impl FromStr for LoginField {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            other => Err(CoreError::UnknownField(other.to_string())),
        }
    }
}

/// Email and password held by the form until submission.
///
/// No validation happens here; whatever the user typed is forwarded as-is.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Creates credentials from an email and password.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Merges a changed field into the credentials.
    pub fn set_field(&mut self, field: LoginField, value: impl Into<String>) {
        match field {
            LoginField::Email => self.email = value.into(),
            LoginField::Password => self.password = value.into(),
        }
    }

    /// Merges a changed field addressed by its input name.
    pub fn set_named(&mut self, name: &str, value: impl Into<String>) -> crate::Result<()> {
        let field = name.parse::<LoginField>()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Returns the current value of a field.
    pub fn get(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip() {
        for field in [LoginField::Email, LoginField::Password] {
            assert_eq!(field.name().parse::<LoginField>().unwrap(), field);
        }
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = "username".parse::<LoginField>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownField(name) if name == "username"));
    }

    #[test]
    fn set_field_only_touches_that_field() {
        let mut creds = Credentials::new("a@b.c", "secret");
        creds.set_field(LoginField::Password, "other");
        assert_eq!(creds.email, "a@b.c");
        assert_eq!(creds.password, "other");
    }

    #[test]
    fn set_named_merges_by_input_name() {
        let mut creds = Credentials::default();
        creds.set_named("email", "x@y.z").unwrap();
        creds.set_named("password", "pw").unwrap();
        assert_eq!(creds, Credentials::new("x@y.z", "pw"));
        assert!(creds.set_named("remember", "1").is_err());
    }

    #[test]
    fn no_local_validation() {
        let mut creds = Credentials::default();
        creds.set_field(LoginField::Email, "not an email");
        assert_eq!(creds.get(LoginField::Email), "not an email");
    }

    #[test]
    fn debug_redacts_password() {
        let creds = Credentials::new("a@b.c", "hunter2");
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("a@b.c"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn serializes_as_email_password_object() {
        let creds = Credentials::new("a@b.c", "pw");
        let json = serde_json::to_value(&creds).unwrap();
        assert_eq!(json, serde_json::json!({"email": "a@b.c", "password": "pw"}));
    }
}
