//! Wire types for the prescription service
//!
//! The service speaks a single-endpoint action protocol with Spanish field
//! names; serde renames keep the Rust side conventional. Optional fields
//! default to `None`/empty so a sparse record never fails to decode.

use serde::Deserialize;

/// One prescribed medication inside a prescription record
#[derive(Debug, Clone, Deserialize)]
pub struct MedicamentoRecord {
    pub nombre_medicamento: String,
    #[serde(default)]
    pub dosis: String,
    #[serde(default)]
    pub frecuencia: Option<String>,
    #[serde(default, rename = "primeraIngesta")]
    pub primera_ingesta: Option<String>,
    #[serde(default)]
    pub duracion: Option<String>,
    #[serde(default)]
    pub instrucciones: Option<String>,
    #[serde(default, rename = "cantidadInicial")]
    pub cantidad_inicial: Option<i32>,
}

/// Prescription record from `getRecipesByPatient`
#[derive(Debug, Clone, Deserialize)]
pub struct RecetaRecord {
    pub id: i64,
    #[serde(rename = "fechaEmision")]
    pub fecha_emision: String,
    #[serde(default)]
    pub diagnostico: Option<String>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default, rename = "doctorNombre")]
    pub doctor_nombre: Option<String>,
    #[serde(default)]
    pub medicamentos: Vec<MedicamentoRecord>,
}

/// Consultation record from `getConsultasByPatient` / `createConsulta`
#[derive(Debug, Clone, Deserialize)]
pub struct ConsultaRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub fecha: String,
    pub hora: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body the service attaches to non-2xx responses
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
