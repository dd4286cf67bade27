//! Employee directory rows.

use serde::{Deserialize, Serialize};

/// One employee of the signed-in tenant.
///
/// Used both as the row returned by `GET /api/empleados/` and as the body
/// of create/update calls. `employee_id` is chosen by the operator and
/// never changes once the record exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    #[serde(rename = "id_empleado")]
    pub employee_id: i64,

    #[serde(rename = "nombre")]
    pub full_name: String,

    #[serde(rename = "puesto")]
    pub role: String,

    #[serde(rename = "departamento")]
    pub department: String,
}
