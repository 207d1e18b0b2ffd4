use crate::dom;
use crate::extract::ScrapeContext;
use crate::lua_types::TypeMapper;
use crate::schema::{Properties, Schema};
use scraper::ElementRef;

/// Marks a variadic parameter; arity is not modeled
const VARIADIC: &str = "...";
/// Separates a parameter name from its type
const NAME_SEPARATOR: &str = "::";

/// Parses one parameter list item into a schema fragment.
///
/// Nested list items describe the fields of table parameters; they are dropped because
/// folding them into the parent text yields worse types.
pub fn parse_param(ctx: &ScrapeContext<'_>, item: ElementRef<'_>) -> Schema {
    let text = dom::text_content_without(item, "li");
    parse_signature_text(text.trim(), ctx.types)
}

/// Parses `name :: type : description`, `type : description`, or a variadic marker
pub fn parse_signature_text(text: &str, types: &dyn TypeMapper) -> Schema {
    if text.starts_with(VARIADIC) {
        return Schema::any();
    }

    let mut properties = Properties::new();
    let rest = match text.split_once(NAME_SEPARATOR) {
        Some((name, rest)) => {
            properties.insert("name".to_string(), Schema::constant(name.trim()));
            rest
        }
        None => text,
    };

    let (type_str, description) = split_type(rest);
    properties.insert("type".to_string(), types.from_lua_type(type_str));

    Schema::with_properties(properties).with_description(description)
}

/// `type : description` -> (type, description); a missing description is empty
/// Only the first `:` separates; later colons stay part of the description.
fn split_type(text: &str) -> (&str, &str) {
    match text.split_once(':') {
        Some((type_str, description)) => (type_str.trim(), description.trim()),
        None => (text.trim(), ""),
    }
}
