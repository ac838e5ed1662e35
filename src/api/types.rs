// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use utoipa::IntoParams;

#[derive(Serialize, Deserialize, ToSchema, Default)]
pub struct PasswordGenerationRequest {
    /// Password length, 6 to 100 (default: configured length)
    pub length: Option<usize>,
    /// Include digits (default: configured value)
    pub include_digits: Option<bool>,
    /// Include symbols (default: configured value)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationResponse {
    /// Whether the operation was successful
    pub success: bool,
    /// Generated password
    pub password: Option<String>,
    /// Length of the generated password
    pub length: Option<usize>,
    /// Number of characters the password was sampled from
    pub alphabet_size: Option<usize>,
    /// Error message (if operation failed)
    pub error: Option<String>,
}

impl PasswordGenerationResponse {
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            password: None,
            length: None,
            alphabet_size: None,
            error: Some(error.into()),
        }
    }
}

#[derive(Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlphabetQuery {
    /// Include digits (default: true)
    pub include_digits: Option<bool>,
    /// Include symbols (default: true)
    pub include_symbols: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct AlphabetResponse {
    /// Characters eligible for sampling, in order
    pub alphabet: String,
    /// Number of characters
    pub size: usize,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
