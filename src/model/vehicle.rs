use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::validation::ValidationError;

/// Maximum length of a make or model name.
pub const NAME_MAX_LEN: usize = 100;
/// Maximum length of an abbreviation.
pub const ABRV_MAX_LEN: usize = 20;
/// Current manufacturer label on the edit form when the referenced make no longer exists.
pub const UNKNOWN_MAKE_LABEL: &str = "Unknown manufacturer";

/// The two reference tables managed by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Make,
    Model,
}

impl EntityKind {
    /// Backend table name.
    pub fn table(&self) -> &'static str {
        match self {
            Self::Make => "VehicleMake",
            Self::Model => "VehicleModel",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Make => write!(f, "Manufacturer"),
            Self::Model => write!(f, "Model"),
        }
    }
}

/// A vehicle manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleMake {
    pub id: i64,
    pub name: String,
    pub abrv: String,
}

/// A vehicle model belonging to exactly one manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: i64,
    pub make_id: i64,
    pub name: String,
    pub abrv: String,
}

/// The joined manufacturer fields embedded into a model row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeRef {
    pub name: String,
}

/// A model row with its manufacturer embedded.
///
/// `vehicle_make` is `None` when the referenced make no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleModelWithMake {
    pub id: i64,
    pub make_id: i64,
    pub name: String,
    pub abrv: String,
    #[serde(rename = "VehicleMake")]
    pub vehicle_make: Option<MakeRef>,
}

impl VehicleModelWithMake {
    /// Manufacturer name for list display.
    pub fn make_name(&self) -> &str {
        self.vehicle_make
            .as_ref()
            .map(|make| make.name.as_str())
            .unwrap_or("Unknown")
    }

    /// Manufacturer name shown as the current manufacturer on the edit form.
    pub fn current_make_label(&self) -> &str {
        self.vehicle_make
            .as_ref()
            .map(|make| make.name.as_str())
            .unwrap_or(UNKNOWN_MAKE_LABEL)
    }
}

/// Unvalidated make form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MakeInput {
    pub name: String,
    pub abrv: String,
}

/// Make fields accepted by the backend for insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MakePayload {
    pub name: String,
    pub abrv: String,
}

impl MakeInput {
    pub fn validate(&self) -> Result<MakePayload, ValidationError> {
        Ok(MakePayload {
            name: required("name", "Name", &self.name, NAME_MAX_LEN)?,
            abrv: optional("abrv", "Abbreviation", &self.abrv, ABRV_MAX_LEN)?,
        })
    }
}

impl From<&VehicleMake> for MakeInput {
    fn from(make: &VehicleMake) -> Self {
        Self {
            name: make.name.clone(),
            abrv: make.abrv.clone(),
        }
    }
}

/// Unvalidated model form values, `make_id` is `None` until a manufacturer is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelInput {
    pub make_id: Option<i64>,
    pub name: String,
    pub abrv: String,
}

/// Model fields accepted by the backend for insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelPayload {
    pub make_id: i64,
    pub name: String,
    pub abrv: String,
}

impl ModelInput {
    pub fn validate(&self) -> Result<ModelPayload, ValidationError> {
        let name = required("name", "Model Name", &self.name, NAME_MAX_LEN)?;
        let abrv = optional("abrv", "Abbreviation", &self.abrv, ABRV_MAX_LEN)?;
        let make_id = match self.make_id {
            Some(id) if id > 0 => id,
            _ => {
                return Err(ValidationError::Required {
                    field: "make_id",
                    label: "Manufacturer",
                })
            }
        };

        Ok(ModelPayload {
            make_id,
            name,
            abrv,
        })
    }
}

impl From<&VehicleModelWithMake> for ModelInput {
    fn from(model: &VehicleModelWithMake) -> Self {
        Self {
            make_id: Some(model.make_id),
            name: model.name.clone(),
            abrv: model.abrv.clone(),
        }
    }
}

fn required(
    field: &'static str,
    label: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required { field, label });
    }

    optional(field, label, value, max)
}

fn optional(
    field: &'static str,
    label: &'static str,
    value: &str,
    max: usize,
) -> Result<String, ValidationError> {
    let value = value.trim();

    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, label, max });
    }

    Ok(value.to_string())
}
