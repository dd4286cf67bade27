//! HTTP client for the attendance backend.
//!
//! Every endpoint of the backend is one method on [`AttendanceBackend`].
//! [`HrisClient`] implements it with reqwest (fetch on wasm32). The tenant
//! header is attached in exactly one place, [`HrisClient::with_tenant`].

use async_trait::async_trait;
use hris_wire::{
    AttendanceRecord, CheckinRequest, Credentials, Employee, ErrorBody, LoginResponse,
    MessageReply, RegistrationRequest, Statistics, UploadReceipt,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::ApiError;

/// Header carrying the tenant key on every authenticated call
pub const TENANT_HEADER: &str = "x-user-id";

/// Multipart field name the import endpoint reads
const UPLOAD_FIELD: &str = "file";

/// Credentials attached to authenticated calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantAuth {
    pub tenant_id: i64,
    /// Signed credential, when the backend issued one at login
    pub token: Option<String>,
}

impl TenantAuth {
    pub fn from_login(login: &LoginResponse) -> Self {
        Self {
            tenant_id: login.user_id,
            token: login.token.clone(),
        }
    }
}

/// Spreadsheet picked by the operator for bulk import.
#[derive(Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for UploadFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UploadFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Result of the two joined dashboard requests.
///
/// Each half fails independently; the caller decides what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub records: Result<Vec<AttendanceRecord>, ApiError>,
    pub statistics: Result<Statistics, ApiError>,
}

/// Every call the front end makes against the backend.
#[async_trait(?Send)]
pub trait AttendanceBackend {
    /// POST /api/login/
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// POST /api/registro/
    async fn register(&self, request: &RegistrationRequest) -> Result<MessageReply, ApiError>;

    /// POST /api/subir-asistencia/ (multipart)
    async fn upload_attendance(
        &self,
        auth: &TenantAuth,
        file: &UploadFile,
    ) -> Result<UploadReceipt, ApiError>;

    /// POST /api/registrar-qr/
    async fn record_checkin(
        &self,
        auth: &TenantAuth,
        request: &CheckinRequest,
    ) -> Result<MessageReply, ApiError>;

    /// GET /api/registros-qr/, in backend order
    async fn checkin_log(&self, auth: &TenantAuth) -> Result<Vec<AttendanceRecord>, ApiError>;

    /// GET /api/estadisticas/
    async fn statistics(&self, auth: &TenantAuth) -> Result<Statistics, ApiError>;

    /// GET /api/empleados/
    async fn list_employees(&self, auth: &TenantAuth) -> Result<Vec<Employee>, ApiError>;

    /// POST /api/empleados/
    async fn create_employee(
        &self,
        auth: &TenantAuth,
        employee: &Employee,
    ) -> Result<MessageReply, ApiError>;

    /// PUT /api/empleados/{id}
    async fn update_employee(
        &self,
        auth: &TenantAuth,
        employee_id: i64,
        employee: &Employee,
    ) -> Result<MessageReply, ApiError>;

    /// DELETE /api/empleados/{id}
    async fn delete_employee(&self, auth: &TenantAuth, employee_id: i64) -> Result<(), ApiError>;

    /// Fetch the check-in log and statistics concurrently and wait for both.
    async fn load_dashboard(&self, auth: &TenantAuth) -> DashboardSnapshot {
        let (records, statistics) =
            futures::join!(self.checkin_log(auth), self.statistics(auth));
        DashboardSnapshot {
            records,
            statistics,
        }
    }
}

/// reqwest-backed [`AttendanceBackend`].
#[derive(Clone)]
pub struct HrisClient {
    client: Client,
    base_url: String,
}

impl HrisClient {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            client: build_http_client(config),
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_tenant(&self, request: RequestBuilder, auth: &TenantAuth) -> RequestBuilder {
        let request = request.header(TENANT_HEADER, auth.tenant_id.to_string());
        match &auth.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and decode a JSON reply.
    ///
    /// Non-2xx replies become [`ApiError::Server`] carrying the backend's
    /// `detail` text when the body has one.
    async fn send_json<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        path: &str,
    ) -> Result<T, ApiError> {
        debug!(path, "HRIS request");

        let response = request.send().await.map_err(|e| {
            warn!(path, "HRIS request failed: {}", e);
            ApiError::from(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(ApiError::from)?;

        if !status.is_success() {
            let detail = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.message());
            debug!(path, status = status.as_u16(), ?detail, "HRIS request rejected");
            return Err(ApiError::Server {
                status: status.as_u16(),
                detail,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!(path, "HRIS response did not decode: {}", e);
            ApiError::Decode(e.to_string())
        })
    }
}

#[async_trait(?Send)]
impl AttendanceBackend for HrisClient {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        let path = "/api/login/";
        let request = self.client.post(self.url(path)).json(credentials);
        self.send_json(request, path).await
    }

    async fn register(&self, request: &RegistrationRequest) -> Result<MessageReply, ApiError> {
        let path = "/api/registro/";
        let builder = self.client.post(self.url(path)).json(request);
        self.send_json(builder, path).await
    }

    async fn upload_attendance(
        &self,
        auth: &TenantAuth,
        file: &UploadFile,
    ) -> Result<UploadReceipt, ApiError> {
        let path = "/api/subir-asistencia/";
        let part = Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = Form::new().part(UPLOAD_FIELD, part);
        // No explicit Content-Type: the multipart boundary is set by the transport
        let request = self.with_tenant(self.client.post(self.url(path)), auth).multipart(form);
        self.send_json(request, path).await
    }

    async fn record_checkin(
        &self,
        auth: &TenantAuth,
        request: &CheckinRequest,
    ) -> Result<MessageReply, ApiError> {
        let path = "/api/registrar-qr/";
        let builder = self
            .with_tenant(self.client.post(self.url(path)), auth)
            .json(request);
        self.send_json(builder, path).await
    }

    async fn checkin_log(&self, auth: &TenantAuth) -> Result<Vec<AttendanceRecord>, ApiError> {
        let path = "/api/registros-qr/";
        let request = self.with_tenant(self.client.get(self.url(path)), auth);
        self.send_json(request, path).await
    }

    async fn statistics(&self, auth: &TenantAuth) -> Result<Statistics, ApiError> {
        let path = "/api/estadisticas/";
        let request = self.with_tenant(self.client.get(self.url(path)), auth);
        self.send_json(request, path).await
    }

    async fn list_employees(&self, auth: &TenantAuth) -> Result<Vec<Employee>, ApiError> {
        let path = "/api/empleados/";
        let request = self.with_tenant(self.client.get(self.url(path)), auth);
        self.send_json(request, path).await
    }

    async fn create_employee(
        &self,
        auth: &TenantAuth,
        employee: &Employee,
    ) -> Result<MessageReply, ApiError> {
        let path = "/api/empleados/";
        let request = self
            .with_tenant(self.client.post(self.url(path)), auth)
            .json(employee);
        self.send_json(request, path).await
    }

    async fn update_employee(
        &self,
        auth: &TenantAuth,
        employee_id: i64,
        employee: &Employee,
    ) -> Result<MessageReply, ApiError> {
        let path = format!("/api/empleados/{}", employee_id);
        let request = self
            .with_tenant(self.client.put(self.url(&path)), auth)
            .json(employee);
        self.send_json(request, &path).await
    }

    async fn delete_employee(&self, auth: &TenantAuth, employee_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/empleados/{}", employee_id);
        let request = self.with_tenant(self.client.delete(self.url(&path)), auth);
        // The reply body is informational only
        self.send_json::<serde_json::Value>(request, &path)
            .await
            .map(|_| ())
    }
}

fn build_http_client(config: &ClientConfig) -> Client {
    #[cfg(not(target_arch = "wasm32"))]
    let builder =
        Client::builder().timeout(std::time::Duration::from_secs(config.request_timeout_secs));
    #[cfg(target_arch = "wasm32")]
    let builder = {
        let _ = config;
        Client::builder()
    };

    builder.build().unwrap_or_else(|e| {
        warn!(
            "Failed to build HTTP client with custom config: {}. Using default.",
            e
        );
        Client::default()
    })
}

/// Remove the decorative status glyphs the backend prefixes to messages.
pub fn strip_status_glyphs(message: &str) -> String {
    ["✅ ", "❌ ", "⚠️ "]
        .iter()
        .fold(message.to_string(), |acc, glyph| acc.replace(glyph, ""))
}
