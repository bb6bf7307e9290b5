//! Authentication data models

use serde::{Deserialize, Serialize};

/// JWT claims issued by the external auth provider
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub email: Option<String>,
    pub exp: usize,
}

/// Response for `GET /api/auth/me`
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct MeResponse {
    pub id: String,
    pub email: Option<String>,
    pub dev_mode: bool,
}
