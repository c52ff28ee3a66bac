use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity of the caller behind a validated access token.
///
/// `account_id` doubles as the user id that owns cells.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub account_id: String,
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl AuthenticatedUser {
    /// Id used to scope cell ownership
    pub fn user_id(&self) -> &str {
        &self.account_id
    }
}
