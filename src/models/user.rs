//! User model (XML file)

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::NAME_REGEX;

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Mobile number written as `6xx xx xx xx` or `7xx xx xx xx`
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([67]\d{2} \d{2} \d{2} \d{2})$").unwrap());

/// Library user, also the `<user>` element of the users file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    #[validate(regex(path = *NAME_REGEX, message = "Invalid user name"))]
    pub name: String,
    #[serde(default)]
    #[validate(regex(path = *EMAIL_REGEX, message = "Invalid email"))]
    pub email: String,
    #[serde(default)]
    #[validate(regex(path = *PHONE_REGEX, message = "Invalid phone number"))]
    pub phone: String,
}
