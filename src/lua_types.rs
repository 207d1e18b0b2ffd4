use crate::schema::{Schema, SchemaType};

/// Maps a free-text Lua type name from the documentation to a schema fragment
pub trait TypeMapper {
    fn from_lua_type(&self, lua_type: &str) -> Schema;
}

/// Default mapping for the types used by the Lua API docs
#[derive(Debug, Clone)]
pub struct LuaTypes {
    /// Prefix for `$ref`s to named API types
    definitions_prefix: String,
}

impl Default for LuaTypes {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_DEFINITIONS_PREFIX)
    }
}

impl LuaTypes {
    pub fn new(definitions_prefix: impl Into<String>) -> Self {
        Self {
            definitions_prefix: definitions_prefix.into(),
        }
    }

    fn primitive(name: &str) -> Option<Schema> {
        let kind = match name {
            "string" => SchemaType::String,
            "boolean" | "bool" => SchemaType::Boolean,
            "double" | "float" | "number" => SchemaType::Number,
            "int" | "int8" | "int16" | "int32" | "int64" | "uint" | "uint8" | "uint16"
            | "uint32" | "uint64" => SchemaType::Integer,
            "nil" => SchemaType::Null,
            "table" => SchemaType::Object,
            "any" | "Any" => SchemaType::Any,
            _ => return None,
        };
        Some(Schema::of_type(kind))
    }

    fn map(&self, lua_type: &str) -> Schema {
        let lua_type = strip_optional(lua_type.trim());

        if lua_type.is_empty() || lua_type.starts_with("function") {
            return Schema::any();
        }

        // Containers bind tighter than `or`, so `array of A or B` is an array of a union
        if let Some(element) = lua_type.strip_prefix("array of ") {
            return Schema::array_of(self.map(element));
        }
        if let Some(element) = bracketed(lua_type, "array") {
            return Schema::array_of(self.map(element));
        }
        if lua_type == "dictionary" {
            return Schema::of_type(SchemaType::Object);
        }
        if let Some(entry) = lua_type
            .strip_prefix("dictionary ")
            .or_else(|| bracketed(lua_type, "dictionary"))
        {
            return match split_arrow(entry) {
                Some((_key, value)) => Schema::map_of(self.map(value)),
                None => Schema::of_type(SchemaType::Object),
            };
        }

        let variants: Vec<&str> = lua_type.split(" or ").map(str::trim).collect();
        if variants.len() > 1 {
            return Schema::any_of(variants.into_iter().map(|v| self.map(v)).collect());
        }

        Self::primitive(lua_type)
            .unwrap_or_else(|| Schema::reference(format!("{}{}", self.definitions_prefix, lua_type)))
    }
}

impl TypeMapper for LuaTypes {
    fn from_lua_type(&self, lua_type: &str) -> Schema {
        let schema = self.map(lua_type);
        ::log::trace!("Mapped Lua type {:?} to {:?}", lua_type, schema);
        schema
    }
}

fn strip_optional(lua_type: &str) -> &str {
    lua_type
        .strip_suffix("(optional)")
        .map(str::trim_end)
        .unwrap_or(lua_type)
}

/// `name[inner]` -> `inner`
fn bracketed<'a>(lua_type: &'a str, name: &str) -> Option<&'a str> {
    lua_type
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('[')?
        .strip_suffix(']')
        .map(str::trim)
}

fn split_arrow(entry: &str) -> Option<(&str, &str)> {
    entry
        .split_once('→')
        .or_else(|| entry.split_once("->"))
        .map(|(k, v)| (k.trim(), v.trim()))
}
