//! The signed-in tenant.

use hris_wire::LoginResponse;

use crate::client::TenantAuth;

/// In-memory session; lives until logout or page reload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub auth: TenantAuth,
    pub company_name: String,
}

impl Session {
    pub fn from_login(login: &LoginResponse) -> Self {
        Self {
            auth: TenantAuth::from_login(login),
            company_name: login.company_name.clone(),
        }
    }

    pub fn tenant_id(&self) -> i64 {
        self.auth.tenant_id
    }
}
