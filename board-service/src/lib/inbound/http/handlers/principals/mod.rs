use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::principal::models::Principal;
use crate::domain::principal::models::PrincipalKind;

pub mod list;
pub mod register;

/// Principal as exposed over HTTP. The password hash never leaves the
/// service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrincipalData {
    pub id: String,
    pub kind: PrincipalKind,
    pub name: String,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Principal> for PrincipalData {
    fn from(principal: &Principal) -> Self {
        Self {
            id: principal.id.to_string(),
            kind: principal.kind,
            name: principal.name.clone(),
            username: principal.username.as_str().to_string(),
            email: principal.email.as_str().to_string(),
            created_at: principal.created_at,
        }
    }
}
