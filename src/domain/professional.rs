//! Professional directory entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Professional {
    pub id: Uuid,
    #[schema(example = "Jane Smith")]
    pub full_name: String,
    #[schema(example = "Site Engineer")]
    pub professional_title: String,
    #[schema(example = "+251911000000")]
    pub phone_number: String,
    pub email: Option<String>,
    pub company: Option<String>,
    pub license_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Professional creation data transfer object
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProfessional {
    #[validate(length(min = 1, message = "Full name is required"))]
    #[schema(example = "jane smith")]
    pub full_name: String,
    #[validate(length(min = 1, message = "Professional title is required"))]
    #[schema(example = "site engineer")]
    pub professional_title: String,
    #[validate(length(min = 1, message = "Phone number is required"))]
    #[schema(example = "+251911000000")]
    pub phone_number: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
}

impl CreateProfessional {
    /// Title-case the name and title.
    pub fn normalized(mut self) -> Self {
        self.full_name = capitalize_words(&self.full_name);
        self.professional_title = capitalize_words(&self.professional_title);
        self
    }
}

/// Partial update; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfessional {
    #[schema(example = "jane smith")]
    pub full_name: Option<String>,
    #[schema(example = "senior site engineer")]
    pub professional_title: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub company: Option<String>,
    pub license_number: Option<String>,
}

impl UpdateProfessional {
    /// Title-case whichever of name and title are present.
    pub fn normalized(mut self) -> Self {
        self.full_name = self.full_name.as_deref().map(capitalize_words);
        self.professional_title = self.professional_title.as_deref().map(capitalize_words);
        self
    }
}

/// Lowercase the text, then uppercase the first character of every
/// space-separated word. Runs of spaces are kept as empty words.
pub fn capitalize_words(text: &str) -> String {
    text.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
