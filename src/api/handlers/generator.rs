// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::api::AppState;
use crate::api::types::{
    AlphabetQuery, AlphabetResponse, PasswordGenerationRequest, PasswordGenerationResponse,
};
use crate::generators::{build_alphabet, GeneratorError};
use crate::models::PasswordConfig;
use log::{debug, error, warn};

/// Generate a password
///
/// Samples a password from the alphabet selected by the request. Omitted
/// fields fall back to the server's configured defaults. Out-of-range lengths
/// are rejected, not clamped.
#[utoipa::path(
    post,
    path = "/generator/password",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid length", body = PasswordGenerationResponse),
        (status = 500, description = "Server error", body = PasswordGenerationResponse)
    )
)]
pub async fn generate_password(
    state: web::Data<AppState>,
    generation_req: web::Json<PasswordGenerationRequest>,
) -> impl Responder {
    let defaults = &state.defaults;
    let config = PasswordConfig {
        length: generation_req.length.unwrap_or(defaults.length),
        include_digits: generation_req.include_digits.unwrap_or(defaults.include_digits),
        include_symbols: generation_req.include_symbols.unwrap_or(defaults.include_symbols),
    };

    match state.generator.generate(&config) {
        Ok(password) => {
            let alphabet = build_alphabet(config.include_digits, config.include_symbols);
            debug!("Generated password of length {}", password.len());
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                length: Some(password.len()),
                alphabet_size: Some(alphabet.len()),
                password: Some(password.into_string()),
                error: None,
            })
        }
        Err(e @ GeneratorError::InvalidLength { .. }) => {
            warn!("Rejected generation request: {}", e);
            HttpResponse::BadRequest().json(PasswordGenerationResponse::failure(e.to_string()))
        }
        Err(e) => {
            error!("Password generation failed: {}", e);
            HttpResponse::InternalServerError().json(PasswordGenerationResponse::failure(
                format!("Failed to generate password: {}", e),
            ))
        }
    }
}

/// Show the sampling alphabet
///
/// Returns the ordered characters a password would be drawn from.
#[utoipa::path(
    get,
    path = "/generator/alphabet",
    tag = "Generator",
    params(AlphabetQuery),
    responses(
        (status = 200, description = "Sampling alphabet", body = AlphabetResponse)
    )
)]
pub async fn get_alphabet(query: web::Query<AlphabetQuery>) -> impl Responder {
    let alphabet = build_alphabet(
        query.include_digits.unwrap_or(true),
        query.include_symbols.unwrap_or(true),
    );

    HttpResponse::Ok().json(AlphabetResponse {
        size: alphabet.len(),
        alphabet: alphabet.to_string(),
    })
}
