//! Mock sign-in and sign-up forms.
//!
//! Nothing is stored or sent anywhere. Both forms only check that every
//! field was filled in; a complete sign-up opens a
//! [`VerificationSession`] for the entered address.

use derive_more::{Display, Error};
use tracing::{info, instrument, warn};

use crate::verification::VerificationSession;

/// A form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    /// Display name (sign-up only).
    #[display("name")]
    Name,
    /// Email address.
    #[display("email")]
    Email,
    /// Password.
    #[display("password")]
    Password,
}

/// Why a form was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum AuthError {
    /// A required field is blank.
    #[display("Please enter your {_0}")]
    Missing(#[error(not(source))] Field),
}

/// Shared editing behaviour for both forms.
pub trait Form {
    /// Fields in tab order.
    fn fields(&self) -> &'static [Field];

    /// Field with keyboard focus.
    fn focused(&self) -> Field;

    /// Moves focus.
    fn focus(&mut self, field: Field);

    /// Current text of `field`. Fields the form lacks read as empty.
    fn value(&self, field: Field) -> &str;

    /// Mutable text of the focused field.
    fn focused_value_mut(&mut self) -> &mut String;

    /// Appends a character to the focused field.
    fn type_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    /// Removes the last character of the focused field.
    fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    /// Moves focus to the next field, wrapping.
    fn next_field(&mut self) {
        let fields = self.fields();
        let i = fields.iter().position(|f| *f == self.focused()).unwrap_or(0);
        self.focus(fields[(i + 1) % fields.len()]);
    }

    /// Moves focus to the previous field, wrapping.
    fn previous_field(&mut self) {
        let fields = self.fields();
        let i = fields.iter().position(|f| *f == self.focused()).unwrap_or(0);
        self.focus(fields[(i + fields.len() - 1) % fields.len()]);
    }

    /// First blank field, in tab order.
    fn first_missing(&self) -> Option<Field> {
        self.fields()
            .iter()
            .copied()
            .find(|f| self.value(*f).trim().is_empty())
    }
}

/// Sign-in form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInForm {
    email: String,
    password: String,
    focused: Field,
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignInForm {
    /// An empty form focused on the email field.
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focused: Field::Email,
        }
    }

    /// Fills in both fields.
    pub fn with_values(email: &str, password: &str) -> Self {
        Self {
            email: email.to_string(),
            password: password.to_string(),
            focused: Field::Email,
        }
    }

    /// Validates the form. Returns the trimmed email on success.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Missing`] for the first blank field.
    #[instrument(skip(self))]
    pub fn submit(&self) -> Result<String, AuthError> {
        if let Some(field) = self.first_missing() {
            warn!(%field, "Sign-in refused");
            return Err(AuthError::Missing(field));
        }
        info!("Signed in");
        Ok(self.email.trim().to_string())
    }
}

impl Form for SignInForm {
    fn fields(&self) -> &'static [Field] {
        &[Field::Email, Field::Password]
    }

    fn focused(&self) -> Field {
        self.focused
    }

    fn focus(&mut self, field: Field) {
        if self.fields().contains(&field) {
            self.focused = field;
        }
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Name => "",
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            Field::Password => &mut self.password,
            Field::Email | Field::Name => &mut self.email,
        }
    }
}

/// Sign-up form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpForm {
    name: String,
    email: String,
    password: String,
    focused: Field,
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl SignUpForm {
    /// An empty form focused on the name field.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            focused: Field::Name,
        }
    }

    /// Fills in every field.
    pub fn with_values(name: &str, email: &str, password: &str) -> Self {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            focused: Field::Name,
        }
    }

    /// Validates the form and opens verification for the entered email.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Missing`] for the first blank field.
    #[instrument(skip(self))]
    pub fn submit(&self) -> Result<VerificationSession, AuthError> {
        if let Some(field) = self.first_missing() {
            warn!(%field, "Sign-up refused");
            return Err(AuthError::Missing(field));
        }
        info!("Account created, awaiting verification");
        Ok(VerificationSession::new(self.email.trim()))
    }
}

impl Form for SignUpForm {
    fn fields(&self) -> &'static [Field] {
        &[Field::Name, Field::Email, Field::Password]
    }

    fn focused(&self) -> Field {
        self.focused
    }

    fn focus(&mut self, field: Field) {
        self.focused = field;
    }

    fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }
}
