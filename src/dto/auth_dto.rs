use serde::{Deserialize, Serialize};

use crate::models::auth::Principal;

// Request de login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

// Response de login / sesión actual
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub logged_in: bool,
    pub user: Option<Principal>,
}
