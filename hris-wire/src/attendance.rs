//! Attendance bodies: bulk upload receipts, QR check-ins, the check-in
//! log, and the aggregated statistics shown on the dashboard.

use serde::{Deserialize, Serialize};

/// Training session every QR check-in is recorded against.
///
/// The terminal has no training selector; all scans go to this session.
pub const DEFAULT_TRAINING_ID: i64 = 1;

/// Reply of `POST /api/subir-asistencia/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadReceipt {
    /// Number of spreadsheet rows the backend stored
    #[serde(rename = "filas_registradas")]
    pub rows_imported: u64,

    #[serde(rename = "estado", default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `POST /api/registrar-qr/`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckinRequest {
    #[serde(rename = "id_empleado")]
    pub employee_id: i64,

    #[serde(rename = "id_capacitacion")]
    pub training_id: i64,
}

impl CheckinRequest {
    /// Check-in for the fixed training session.
    pub fn new(employee_id: i64) -> Self {
        Self {
            employee_id,
            training_id: DEFAULT_TRAINING_ID,
        }
    }
}

/// Outcome of a stored check-in.
///
/// The backend only stores accepted scans, so every record it returns is
/// authorized.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CheckinStatus {
    #[default]
    Authorized,
}

impl std::fmt::Display for CheckinStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Authorized => write!(f, "authorized"),
        }
    }
}

/// One row of `GET /api/registros-qr/`.
///
/// Extra columns the backend attaches (tenant id, row ids) are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttendanceRecord {
    #[serde(rename = "id_empleado")]
    pub employee_id: i64,

    /// Local server time, formatted `YYYY-MM-DD HH:MM:SS`
    #[serde(rename = "hora_escaneo")]
    pub scanned_at: String,

    #[serde(rename = "id_capacitacion", default, skip_serializing_if = "Option::is_none")]
    pub training_id: Option<i64>,

    #[serde(default)]
    pub status: CheckinStatus,
}

/// Reply of `GET /api/estadisticas/`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statistics {
    /// Headline figures, in display order
    #[serde(rename = "resumen", default)]
    pub summary: Vec<SummaryItem>,

    /// Check-ins per hour of day, in display order
    #[serde(rename = "datos_grafica", default)]
    pub hourly_volume: Vec<HourlyVolume>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryItem {
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "valor")]
    pub value: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HourlyVolume {
    /// Hour bucket label such as `"9:00"`
    #[serde(rename = "name")]
    pub label: String,

    #[serde(rename = "asistencias")]
    pub count: u64,
}

impl Statistics {
    /// Largest hourly count, used to scale the volume chart.
    pub fn peak_hourly_count(&self) -> u64 {
        self.hourly_volume.iter().map(|h| h.count).max().unwrap_or(0)
    }
}
