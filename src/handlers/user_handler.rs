use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::errors::ApiError;
use crate::store::{StoreError, UserStore};
use crate::utils::auth::hash_password;
use crate::utils::validate::is_valid_identifier;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[serde(default)]
    pub email_or_mobile: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

// Signup API
#[post("/api/auth/signup")]
pub async fn signup(
    store: web::Data<dyn UserStore>,
    body: web::Json<SignupRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    let (email_or_mobile, password) = match (req.email_or_mobile, req.password) {
        (Some(e), Some(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => return Err(ApiError::Validation("All fields are required".into())),
    };

    if !is_valid_identifier(&email_or_mobile) {
        return Err(ApiError::Validation("Invalid email or mobile number".into()));
    }

    if password.chars().count() < 8 {
        return Err(ApiError::Validation(
            "Password must be at least 8 characters long".into(),
        ));
    }

    let password_hash = hash_password(&password).map_err(|err| {
        log::error!("Signup error: {err}");
        ApiError::Internal("Server error".into())
    })?;

    match store.create(&email_or_mobile, &password_hash).await {
        Ok(_) => Ok(HttpResponse::Created().json(json!({
            "message": "User registered successfully"
        }))),
        Err(StoreError::Conflict) => Err(ApiError::Conflict("User already exists".into())),
        Err(err) => {
            log::error!("Signup error: {err}");
            Err(ApiError::Internal("Server error".into()))
        }
    }
}

// Fetch user details by email or mobile number
#[get("/api/user/{email_or_mobile}")]
pub async fn get_user(
    store: web::Data<dyn UserStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let email_or_mobile = path.into_inner();

    let user = store
        .find_by_identifier(&email_or_mobile)
        .await
        .map_err(|err| {
            log::error!("Error fetching user details: {err}");
            ApiError::Internal("Failed to fetch user details".into())
        })?;

    match user {
        // `password_hash` is skipped during serialization.
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ApiError::NotFound("User not found".into())),
    }
}
