//! Category model (flat text file)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::error::{AppError, AppResult};

static SINGLE_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\r\n]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Create category request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(required(message = "Category id is required"))]
    pub id: Option<i64>,
    #[validate(
        required(message = "Category name is required"),
        regex(path = *SINGLE_LINE_REGEX, message = "Category name must be a single non-empty line")
    )]
    pub name: Option<String>,
}

impl TryFrom<CreateCategory> for Category {
    type Error = AppError;

    fn try_from(request: CreateCategory) -> AppResult<Self> {
        request.validate()?;
        match (request.id, request.name) {
            (Some(id), Some(name)) => Ok(Self { id, name }),
            _ => Err(AppError::Validation(
                "Category id and name are required".to_string(),
            )),
        }
    }
}

impl Category {
    /// Line stored in the categories file
    pub fn to_line(&self) -> String {
        format!("{};{}", self.id, self.name)
    }

    /// Parse one line of the categories file
    pub fn from_line(line: &str) -> Option<Self> {
        let (id, name) = line.split_once(';')?;
        let id = id.trim().parse().ok()?;
        if name.is_empty() {
            return None;
        }
        Some(Self {
            id,
            name: name.to_string(),
        })
    }
}
