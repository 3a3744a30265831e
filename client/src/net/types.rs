//! Wire types for the asset detail endpoints.
//!
//! DESIGN
//! ======
//! Each detail endpoint returns its own record shape, so the decoded reply is
//! a closed sum type discriminated by the endpoint that was requested. Scalar
//! fields are all optional and tolerate numbers or booleans where text is
//! expected; the detail panel renders whatever arrives.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One of the six information categories served per asset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ProductInfo,
    RepairInstructions,
    BillOfMaterials,
    CadModel,
    LicenseInfo,
    SafetyInfo,
}

impl Endpoint {
    /// All endpoints in button order.
    pub const ALL: [Self; 6] = [
        Self::ProductInfo,
        Self::RepairInstructions,
        Self::BillOfMaterials,
        Self::CadModel,
        Self::LicenseInfo,
        Self::SafetyInfo,
    ];

    /// Path segment under `/api/Assets/`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProductInfo => "ProductInfo",
            Self::RepairInstructions => "RepairInstructions",
            Self::BillOfMaterials => "BillOfMaterials",
            Self::CadModel => "CADModel",
            Self::LicenseInfo => "LicenseInfo",
            Self::SafetyInfo => "SafetyInfo",
        }
    }

    /// Human-readable name used for buttons and panel titles.
    pub fn label(self) -> &'static str {
        match self {
            Self::ProductInfo => "Product Info",
            Self::RepairInstructions => "Repair Instructions",
            Self::BillOfMaterials => "Bill of Materials",
            Self::CadModel => "CAD Model",
            Self::LicenseInfo => "License Info",
            Self::SafetyInfo => "Safety Info",
        }
    }

    pub fn from_path(segment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == segment)
    }
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// General product description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductInfo {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub payload: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub reach_range: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub applications: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub license_details: Option<String>,
}

/// Ordered repair steps.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepairInstructions {
    pub instructions: Vec<String>,
}

/// Ordered list of component materials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BillOfMaterials {
    pub materials: Vec<String>,
}

/// CAD model metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CadModel {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub weight: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub material: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub manufacturer: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub part_number: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub file_format: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub model_type: Option<String>,
}

/// Licensing terms.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub license_details: Option<String>,
}

/// Safety features and operating instructions.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafetyInfo {
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub safety_features: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_text_list")]
    pub safety_instructions: Vec<String>,
}

/// A decoded detail reply, tagged by the endpoint it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailResponse {
    ProductInfo(ProductInfo),
    RepairInstructions(RepairInstructions),
    BillOfMaterials(BillOfMaterials),
    CadModel(CadModel),
    LicenseInfo(LicenseInfo),
    SafetyInfo(SafetyInfo),
}

impl DetailResponse {
    /// Decode a reply body according to the endpoint that produced it.
    ///
    /// # Errors
    ///
    /// Returns the serde error when the body does not fit the endpoint's shape.
    pub fn parse(endpoint: Endpoint, body: Value) -> Result<Self, serde_json::Error> {
        Ok(match endpoint {
            Endpoint::ProductInfo => Self::ProductInfo(serde_json::from_value(body)?),
            Endpoint::RepairInstructions => Self::RepairInstructions(RepairInstructions {
                instructions: list_body(body, &["instructions", "repairInstructions"])?,
            }),
            Endpoint::BillOfMaterials => Self::BillOfMaterials(BillOfMaterials {
                materials: list_body(body, &["materials", "billOfMaterials"])?,
            }),
            Endpoint::CadModel => Self::CadModel(serde_json::from_value(body)?),
            Endpoint::LicenseInfo => Self::LicenseInfo(serde_json::from_value(body)?),
            Endpoint::SafetyInfo => Self::SafetyInfo(serde_json::from_value(body)?),
        })
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::ProductInfo(_) => Endpoint::ProductInfo,
            Self::RepairInstructions(_) => Endpoint::RepairInstructions,
            Self::BillOfMaterials(_) => Endpoint::BillOfMaterials,
            Self::CadModel(_) => Endpoint::CadModel,
            Self::LicenseInfo(_) => Endpoint::LicenseInfo,
            Self::SafetyInfo(_) => Endpoint::SafetyInfo,
        }
    }
}

/// A list reply is either a bare array or an object holding it under one of `keys`.
fn list_body(body: Value, keys: &[&str]) -> Result<Vec<String>, serde_json::Error> {
    let list = match body {
        Value::Object(mut map) => keys
            .iter()
            .find_map(|key| map.remove(*key))
            .unwrap_or(Value::Null),
        other => other,
    };
    text_list(list).map_err(serde_json::Error::custom)
}

fn text_list(value: Value) -> Result<Vec<String>, String> {
    match value {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| text_value(item).transpose())
            .collect(),
        other => Err(format!("expected a list, got {other}")),
    }
}

fn text_value(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(format!("expected text, got {other}")),
    }
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    text_value(value).map_err(D::Error::custom)
}

fn deserialize_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    text_list(value).map_err(D::Error::custom)
}
