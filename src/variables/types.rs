//! Serde model of the design tool's local Variables response.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Colour;

/// Top-level response of the local-variables endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariablesResponse {
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub error: bool,
    pub meta: VariablesMeta,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariablesMeta {
    #[serde(default)]
    pub variable_collections: BTreeMap<String, VariableCollection>,
    #[serde(default)]
    pub variables: BTreeMap<String, Variable>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mode {
    pub mode_id: String,
    pub name: String,
}

/// A set of modes and the variables that hold one value per mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    pub modes: Vec<Mode>,
    pub default_mode_id: String,
    #[serde(default)]
    pub variable_ids: Vec<String>,
    #[serde(default)]
    pub hidden_from_publishing: bool,
}

impl VariableCollection {
    /// Id of the mode called `name`.
    pub fn mode_id(&self, name: &str) -> Option<&str> {
        self.modes
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.mode_id.as_str())
    }

    /// Mode used when another collection aliases into this one: the mode
    /// named `primitives`, else the default mode.
    pub fn resolution_mode_id(&self, primitives: Option<&str>) -> &str {
        primitives
            .and_then(|name| self.mode_id(name))
            .unwrap_or(&self.default_mode_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    pub name: String,
    pub variable_collection_id: String,
    #[serde(default)]
    pub resolved_type: Option<String>,
    #[serde(default)]
    pub values_by_mode: BTreeMap<String, VariableValue>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub hidden_from_publishing: bool,
}

/// Reference to another variable's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableAlias {
    /// Always `VARIABLE_ALIAS`.
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

impl VariableAlias {
    pub fn to(id: impl Into<String>) -> Self {
        Self {
            kind: "VARIABLE_ALIAS".to_string(),
            id: id.into(),
        }
    }
}

/// One mode's value: a literal or an alias.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(VariableAlias),
    Color(Colour),
    Number(f64),
    Boolean(bool),
    Text(String),
}
