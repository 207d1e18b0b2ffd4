use crate::dom;
use crate::error::ScrapeResult;
use crate::extract::{ScrapeContext, method};
use crate::markdown::as_url_corrected_markdown;
use crate::schema::{Properties, Schema};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;
use serde_json::Value;

/// Attribute signatures carry an access-mode annotation such as `[RW]`
static ATTRIBUTE_ANNOTATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[.+\]").expect("annotation pattern is valid"));

/// A mode annotation directly after a bare word means the attribute has no type
/// (e.g. `connected_entity [RW]`)
static UNTYPED_ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9_-]+ (\[\])?\S?\[").expect("untyped pattern is valid"));

/// What a member row describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    Attribute,
    Function,
}

/// Classifies a member by its visible signature text
pub fn classify(signature: &str) -> MemberKind {
    if ATTRIBUTE_ANNOTATION.is_match(signature) {
        MemberKind::Attribute
    } else {
        MemberKind::Function
    }
}

/// Whether an attribute signature lacks type information
pub fn is_untyped_attribute(signature: &str) -> bool {
    UNTYPED_ATTRIBUTE.is_match(signature)
}

/// Parses one member table row: a signature cell followed by an optional description cell
pub fn parse_member_row(ctx: &ScrapeContext<'_>, row: ElementRef<'_>) -> ScrapeResult<Schema> {
    let mut cells = dom::child_elements(row);
    let signature_el = cells
        .next()
        .ok_or_else(|| ctx.missing("unable to find member signature el"))?;
    let description = cells
        .next()
        .map(|el| as_url_corrected_markdown(&dom::text_content(el), ctx.page))
        .unwrap_or_default();

    let signature = dom::text_content(signature_el);
    let kind = classify(&signature);
    ::log::trace!("Member signature {:?} classified as {:?}", signature.trim(), kind);

    let schema = match kind {
        MemberKind::Attribute => parse_member_attribute(ctx, signature_el)?,
        MemberKind::Function => method::parse_member_function(ctx, signature_el)?,
    };
    Ok(schema.with_description(description))
}

/// Parses an attribute signature cell into `{name, type, mode}`
pub fn parse_member_attribute(
    ctx: &ScrapeContext<'_>,
    signature_el: ElementRef<'_>,
) -> ScrapeResult<Schema> {
    let name_el = dom::query(
        signature_el,
        ".element-name",
        "failed to find member attr name element",
        ctx.page,
    )?;
    let name = dom::text_content(name_el).trim().to_string();

    let signature = dom::text_content(signature_el);
    let attr_type = if is_untyped_attribute(&signature) {
        Schema::any()
    } else {
        let type_el = dom::query(
            signature_el,
            ".param-type",
            "failed to find member attr type element",
            ctx.page,
        )?;
        ctx.lua_type(dom::text_content(type_el).trim())
    };

    let mode: Vec<Value> = dom::query_opt(signature_el, ".attribute-mode")?
        .map(|el| mode_flags(&dom::text_content(el)))
        .unwrap_or_default()
        .into_iter()
        .map(Value::from)
        .collect();

    ::log::debug!("Parsed attribute {} (mode {:?})", name, mode);

    let mut properties = Properties::new();
    properties.insert("name".to_string(), Schema::constant(name));
    properties.insert("type".to_string(), attr_type);
    properties.insert("mode".to_string(), Schema::constant(Value::Array(mode)));
    Ok(Schema::with_properties(properties))
}

/// The R/W/X flags of a mode annotation, in order of appearance
pub fn mode_flags(annotation: &str) -> Vec<String> {
    annotation
        .chars()
        .filter(|c| matches!(c.to_ascii_uppercase(), 'R' | 'W' | 'X'))
        .map(String::from)
        .collect()
}
