use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered property map; insertion order is kept so output is deterministic
pub type Properties = IndexMap<String, Schema>;

/// The `type` keyword values the scraper emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Any,
    Null,
    String,
    Boolean,
    Number,
    Integer,
    Object,
    Array,
}

/// `items` is either one schema for every element or a positional tuple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Tuple(Vec<Schema>),
    Single(Box<Schema>),
}

/// A JSON-Schema fragment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SchemaType>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "const", default, skip_serializing_if = "Option::is_none")]
    pub constant: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<Properties>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Items>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub any_of: Option<Vec<Schema>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_properties: Option<Box<Schema>>,

    /// TypeScript binding derived from the finished schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts_type: Option<String>,
}

impl Schema {
    pub fn of_type(kind: SchemaType) -> Self {
        Self {
            kind: Some(kind),
            ..Self::default()
        }
    }

    pub fn any() -> Self {
        Self::of_type(SchemaType::Any)
    }

    pub fn null() -> Self {
        Self::of_type(SchemaType::Null)
    }

    pub fn constant(value: impl Into<Value>) -> Self {
        Self {
            constant: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn reference(target: impl Into<String>) -> Self {
        Self {
            reference: Some(target.into()),
            ..Self::default()
        }
    }

    /// `{type: "array", items: <items>}`
    pub fn array_of(items: Schema) -> Self {
        Self {
            kind: Some(SchemaType::Array),
            items: Some(Items::Single(Box::new(items))),
            ..Self::default()
        }
    }

    /// `{type: "array", items: [<positional>...]}`
    pub fn tuple(items: Vec<Schema>) -> Self {
        Self {
            kind: Some(SchemaType::Array),
            items: Some(Items::Tuple(items)),
            ..Self::default()
        }
    }

    /// `{type: "object", properties: {...}}`
    pub fn object(properties: Properties) -> Self {
        Self {
            kind: Some(SchemaType::Object),
            properties: Some(properties),
            ..Self::default()
        }
    }

    /// `{type: "object", additionalProperties: <values>}`
    pub fn map_of(values: Schema) -> Self {
        Self {
            kind: Some(SchemaType::Object),
            additional_properties: Some(Box::new(values)),
            ..Self::default()
        }
    }

    pub fn any_of(variants: Vec<Schema>) -> Self {
        Self {
            any_of: Some(variants),
            ..Self::default()
        }
    }

    /// A fragment with only `properties` set (no `type`)
    pub fn with_properties(properties: Properties) -> Self {
        Self {
            properties: Some(properties),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.as_ref()?.get(name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    /// The string held by `properties.name.const`, which every member and class carries
    pub fn name_const(&self) -> Option<&str> {
        self.property("name")?.constant.as_ref()?.as_str()
    }
}
