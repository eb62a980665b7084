//! Author model (document store)

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::NAME_REGEX;

/// Author document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Author {
    /// Document id
    pub id: String,
    pub name: String,
    pub country_of_origin: String,
}

/// Body of the JSON document stored for an author (the id lives beside it)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorDocument {
    pub name: String,
    pub country_of_origin: String,
}

/// Create/update author request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct AuthorRequest {
    /// Optional on create: a new id is generated when absent.
    /// Ignored on update, where the path id wins.
    pub id: Option<String>,
    #[serde(default)]
    #[validate(regex(path = *NAME_REGEX, message = "Invalid author name"))]
    pub name: String,
    #[serde(default)]
    #[validate(regex(path = *NAME_REGEX, message = "Invalid author country of origin"))]
    pub country_of_origin: String,
}

impl Author {
    pub fn document(&self) -> AuthorDocument {
        AuthorDocument {
            name: self.name.clone(),
            country_of_origin: self.country_of_origin.clone(),
        }
    }

    pub fn from_document(id: String, doc: AuthorDocument) -> Self {
        Self {
            id,
            name: doc.name,
            country_of_origin: doc.country_of_origin,
        }
    }
}
