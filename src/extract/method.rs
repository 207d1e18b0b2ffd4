use crate::dom;
use crate::error::{ScrapeError, ScrapeResult};
use crate::extract::{ScrapeContext, signature};
use crate::markdown::as_markdown;
use crate::schema::{Properties, Schema};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::ElementRef;

/// Shown in a signature when the method takes no arguments
const NO_ARGS: &str = "()";
/// Precedes the return type in a signature
const RETURNS: char = '→';

/// The parenthesized (positional) or braced (table) argument group of a detail signature
static ARGS_GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"((\(|\{).*(\)|\}))").expect("args pattern is valid"));

/// Whether the brief signature can be resolved without the detail section
pub fn takes_no_args(signature: &str) -> bool {
    signature.contains(NO_ARGS)
}

pub fn has_return(signature: &str) -> bool {
    signature.contains(RETURNS)
}

/// Resolves a function member from its signature cell into `{name, parameters, return}`
pub fn parse_member_function(
    ctx: &ScrapeContext<'_>,
    signature_el: ElementRef<'_>,
) -> ScrapeResult<Schema> {
    let el = dom::query(
        signature_el,
        ".element-name",
        "missing function implementation node, (class=element-name)",
        ctx.page,
    )?;
    let impl_anchor = dom::query(el, "a", "missing impl anchor", ctx.page)?;
    let text = dom::text_content(el);

    if takes_no_args(&text) {
        let name = dom::text_content(impl_anchor).trim().to_string();
        ::log::trace!("Fast parse for no-arg method {}", name);

        let ret = if has_return(&text) {
            let return_el = dom::query(el, ".return-type", "unable to find return type", ctx.page)?;
            ctx.lua_type(dom::text_content(return_el).trim())
        } else {
            Schema::null()
        };
        return Ok(method(name, Vec::new(), ret));
    }

    parse_method_detail(ctx, impl_anchor)
}

/// Slow path: follows the anchor to the detail section holding the full signature
fn parse_method_detail(ctx: &ScrapeContext<'_>, impl_anchor: ElementRef<'_>) -> ScrapeResult<Schema> {
    let href = impl_anchor
        .value()
        .attr("href")
        .ok_or_else(|| ctx.missing("missing impl href"))?;
    let id = detail_id(href);
    let impl_el = dom::element_by_id(ctx.document, id)
        .ok_or_else(|| ctx.missing(format!("missing impl el #{}", id)))?;

    let name = id.rsplit('.').next().unwrap_or_default();
    if name.is_empty() {
        return Err(ctx.missing(format!("missing impl fn name in #{}", id)));
    }
    ::log::trace!("Slow parse for method {} via #{}", name, id);

    let signature_el = dom::query(impl_el, ".element-name", "failed to find signature el", ctx.page)?;
    let signature = dom::text_content(signature_el);

    let args = ARGS_GROUP
        .captures(&signature)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| {
            ScrapeError::malformed(format!("failed to find args in {:?}", signature), ctx.page)
        })?;
    if arg_count(args) == 0 {
        return Err(ScrapeError::invariant(
            format!("no args detected in {:?}, fast parse should have executed", signature),
            ctx.page,
        ));
    }

    let headers = dom::query_all(impl_el, ".detail-header")?;
    let header = |title: &str| {
        headers
            .iter()
            .copied()
            .find(|el| dom::text_content(*el).trim() == title)
    };

    let params_list = header("Parameters")
        .ok_or_else(|| ctx.missing("missing parameter heading el"))
        .and_then(|el| {
            dom::next_element_sibling(el).ok_or_else(|| ctx.missing("missing parameter list el"))
        })?;
    let params: Vec<Schema> = dom::query_all(params_list, ".field-list > li")?
        .into_iter()
        .filter(|item| !dom::nested_in(*item, "li", params_list))
        .filter(|item| !dom::text_content(*item).trim().is_empty())
        .map(|item| signature::parse_param(ctx, item))
        .collect();

    let return_description = header("Return value")
        .and_then(dom::next_element_sibling)
        .map(|el| as_markdown(&dom::text_content(el)))
        .unwrap_or_default();

    let returns_nil = !has_return(&signature);
    let return_type = match dom::query_opt(signature_el, ".return-type")? {
        _ if returns_nil => Schema::null(),
        Some(el) => ctx.lua_type(dom::text_content(el).trim()),
        None => return Err(ctx.missing("failed to find return type")),
    };

    let mut variants = vec![return_type];
    // May duplicate a null branch the mapped type already has
    if return_description.contains("or nil") {
        variants.push(Schema::null());
    }
    let ret = Schema::any_of(variants).with_description(return_description);

    ::log::debug!("Parsed method {} with {} parameter(s)", name, params.len());
    Ok(method(name.to_string(), params, ret))
}

/// `LuaEntity.html#LuaEntity.destroy` -> `LuaEntity.destroy`
fn detail_id(href: &str) -> &str {
    href.rsplit('#').next().unwrap_or(href)
}

/// Number of non-empty comma-separated arguments inside an argument group
fn arg_count(group: &str) -> usize {
    group
        .trim_start_matches(['(', '{'])
        .trim_end_matches([')', '}'])
        .split(',')
        .filter(|arg| !arg.trim().is_empty())
        .count()
}

fn method(name: String, parameters: Vec<Schema>, ret: Schema) -> Schema {
    let mut properties = Properties::new();
    properties.insert("name".to_string(), Schema::constant(name));
    properties.insert("parameters".to_string(), Schema::tuple(parameters));
    properties.insert("return".to_string(), ret);
    Schema::with_properties(properties)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_id() {
        assert_eq!(detail_id("#LuaEntity.destroy"), "LuaEntity.destroy");
        assert_eq!(detail_id("LuaEntity.html#LuaEntity.destroy"), "LuaEntity.destroy");
        assert_eq!(detail_id("LuaEntity.destroy"), "LuaEntity.destroy");
    }

    #[test]
    fn test_arg_count() {
        assert_eq!(arg_count("(raise_destroy)"), 1);
        assert_eq!(arg_count("{position=…, force=…}"), 2);
        assert_eq!(arg_count("( )"), 0);
        assert_eq!(arg_count("{}"), 0);
    }

    #[test]
    fn test_heuristics() {
        assert!(takes_no_args("clone() → LuaEntity"));
        assert!(!takes_no_args("destroy(raise_destroy) → boolean"));
        assert!(has_return("clone() → LuaEntity"));
        assert!(!has_return("die()"));
    }
}
