use crate::error::ProxyError;
use serde_json::Value;

/// The fixed entity taxonomy, in the dashboard's display order. The list
/// lives in code rather than in the database; Spanish is the product's
/// only locale.
const CATEGORIES: [&str; 11] = [
    "Evento",
    "Equipo",
    "Lugar",
    "Organización",
    "Persona",
    "Medio",
    "Marca",
    "Grupo",
    "Fenómeno",
    "Concepto",
    "Ciudad",
];

/// Returns the category list. No inputs, no external call.
pub(crate) fn handler() -> Result<Value, ProxyError> {
    Ok(serde_json::to_value(CATEGORIES).expect("Category list serialization failed. It's a bug."))
}
