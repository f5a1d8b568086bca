//! Wire types for the form backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Fields submitted by the contact form, in form order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    /// `(field name, value)` pairs as they appear in the multipart body.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &str); 3] {
        [("name", &self.name), ("email", &self.email), ("message", &self.message)]
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
    }
}

/// Error body returned with a non-2xx status.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub errors: Option<Vec<FieldError>>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FieldError {
    #[serde(default)]
    pub message: String,
}

impl ServerErrorBody {
    /// Non-empty field error messages, in payload order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors
            .iter()
            .flatten()
            .map(|e| e.message.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_owned)
            .collect()
    }
}
