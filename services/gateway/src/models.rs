use serde::{Deserialize, Serialize};
use types::principal::Role;
use uuid::Uuid;

#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    /// Any value other than "admin" (including absence) means farmer.
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub id: Uuid,
    pub username: String,
    pub role: Role,
    pub token: Uuid,
}

#[derive(Debug, Clone, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulkResponse {
    pub added: usize,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceRequest {
    pub city: Option<String>,
    pub weather_summary: Option<String>,
    pub market_summary: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdviceResponse {
    pub advice: String,
}
