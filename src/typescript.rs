//! TypeScript bindings derived from finished schemas.

use crate::schema::{Items, Schema, SchemaType};

/// Renders a class schema as a TypeScript interface declaration
pub fn class_type(schema: &Schema) -> String {
    let name = schema.name_const().unwrap_or("Unknown");

    let parents: Vec<String> = match schema.property("inherits").and_then(|s| s.items.as_ref()) {
        Some(Items::Tuple(items)) => items.iter().filter_map(const_str).collect(),
        _ => Vec::new(),
    };
    let extends = if parents.is_empty() {
        String::new()
    } else {
        format!(" extends {}", parents.join(", "))
    };

    let members: Vec<String> = schema
        .property("members")
        .and_then(|m| m.properties.as_ref())
        .map(|members| members.values().map(member_declaration).collect())
        .unwrap_or_default();

    if members.is_empty() {
        return format!("interface {}{} {{}}", name, extends);
    }
    format!(
        "interface {}{} {{\n{}\n}}",
        name,
        extends,
        members
            .iter()
            .map(|m| format!("  {};", m))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

fn member_declaration(member: &Schema) -> String {
    let name = member.name_const().unwrap_or("unknown");

    if let Some(parameters) = member.property("parameters") {
        let params: Vec<String> = match &parameters.items {
            Some(Items::Tuple(items)) => items.iter().enumerate().map(parameter).collect(),
            _ => Vec::new(),
        };
        let ret = member.property("return").map(type_of).unwrap_or_else(|| "void".into());
        return format!("{}({}): {}", name, params.join(", "), ret);
    }

    let ty = member.property("type").map(type_of).unwrap_or_else(|| "any".into());
    let writable = member
        .property("mode")
        .and_then(|mode| mode.constant.as_ref())
        .and_then(|flags| flags.as_array())
        .map(|flags| {
            flags.is_empty()
                || flags
                    .iter()
                    .any(|f| f.as_str().is_some_and(|f| f.eq_ignore_ascii_case("w")))
        })
        .unwrap_or(true);

    if writable {
        format!("{}: {}", name, ty)
    } else {
        format!("readonly {}: {}", name, ty)
    }
}

fn parameter((index, param): (usize, &Schema)) -> String {
    // Variadic parameters collapse to a bare `any`
    if param.properties.is_none() {
        return format!("...args: {}[]", type_of(param));
    }
    let name = param
        .name_const()
        .map(str::to_string)
        .unwrap_or_else(|| format!("arg{}", index));
    let ty = param.property("type").map(type_of).unwrap_or_else(|| "any".into());
    format!("{}: {}", name, ty)
}

/// TypeScript type expression for a schema fragment
pub fn type_of(schema: &Schema) -> String {
    if let Some(target) = &schema.reference {
        return target.rsplit('/').next().unwrap_or(target).to_string();
    }

    if let Some(variants) = &schema.any_of {
        let mut rendered: Vec<String> = Vec::new();
        for variant in variants.iter().map(type_of) {
            if !rendered.contains(&variant) {
                rendered.push(variant);
            }
        }
        return match rendered.len() {
            0 => "any".to_string(),
            _ => rendered.join(" | "),
        };
    }

    if let Some(value) = &schema.constant {
        return value.to_string();
    }

    match schema.kind {
        Some(SchemaType::Null) => "null".to_string(),
        Some(SchemaType::String) => "string".to_string(),
        Some(SchemaType::Boolean) => "boolean".to_string(),
        Some(SchemaType::Number) | Some(SchemaType::Integer) => "number".to_string(),
        Some(SchemaType::Array) => match &schema.items {
            Some(Items::Single(items)) => {
                let inner = type_of(items);
                if inner.contains(' ') {
                    format!("({})[]", inner)
                } else {
                    format!("{}[]", inner)
                }
            }
            Some(Items::Tuple(items)) => {
                format!("[{}]", items.iter().map(type_of).collect::<Vec<_>>().join(", "))
            }
            None => "any[]".to_string(),
        },
        Some(SchemaType::Object) => match &schema.additional_properties {
            Some(values) => format!("Record<string, {}>", type_of(values)),
            None => "Record<string, any>".to_string(),
        },
        Some(SchemaType::Any) | None => "any".to_string(),
    }
}

fn const_str(schema: &Schema) -> Option<String> {
    schema.constant.as_ref()?.as_str().map(str::to_string)
}
