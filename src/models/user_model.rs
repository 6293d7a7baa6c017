use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry in a user's cart. Append-only in intended use; order is
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub name: String,
    pub price: f64,
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email_or_mobile: String,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub profile_image: String,
    pub cart: Vec<CartItem>,
    // Never send the hash to a client.
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
