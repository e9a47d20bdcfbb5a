// veda-ingest-core/src/domain/schema.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::domain::error::DomainError;

/// Name of the array property carrying tenant choices in a form schema.
/// Dataset forms use `tenant`, collection forms use `tenants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TenantField {
    Tenant,
    #[default]
    Tenants,
}

impl TenantField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Tenant => "tenant",
            Self::Tenants => "tenants",
        }
    }

    fn property_pointer(&self) -> String {
        format!("/properties/{}", self.as_str())
    }
}

impl fmt::Display for TenantField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TenantField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "tenant" => Ok(Self::Tenant),
            "tenants" => Ok(Self::Tenants),
            _ => Err(DomainError::SchemaError(format!(
                "Unknown tenant field '{}' (expected 'tenant' or 'tenants')",
                s
            ))),
        }
    }
}

/// Returns a copy of `base` whose tenant `items` schema enumerates exactly `tenants`.
///
/// `base` is never touched. When the schema has no `properties.<field>.items`
/// object (or the property declares a non-array `type`) the copy comes back unchanged.
pub fn with_tenant_enum(base: &Value, field: TenantField, tenants: &[String]) -> Value {
    let mut schema = base.clone();

    let Some(property) = schema.pointer_mut(&field.property_pointer()) else {
        return schema;
    };

    if let Some(kind) = property.get("type")
        && kind != "array"
    {
        return schema;
    }

    if let Some(Value::Object(items)) = property.get_mut("items") {
        let choices = tenants.iter().cloned().map(Value::String).collect();
        items.insert("enum".to_string(), Value::Array(choices));
    }

    schema
}

/// Current tenant choices declared by a schema, if it carries any.
pub fn tenant_enum(schema: &Value, field: TenantField) -> Option<Vec<&str>> {
    schema
        .pointer(&format!("{}/items/enum", field.property_pointer()))?
        .as_array()
        .map(|values| values.iter().filter_map(Value::as_str).collect())
}
