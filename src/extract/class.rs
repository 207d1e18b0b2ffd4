use crate::dom;
use crate::error::ScrapeResult;
use crate::extract::{ScrapeContext, member};
use crate::schema::{Properties, Schema};
use crate::typescript;
use crate::utils::filter_while;
use scraper::ElementRef;

/// Extracts one class listing block into `{name, members, inherits}` plus its `tsType`
pub fn scrape_class(ctx: &ScrapeContext<'_>, block: ElementRef<'_>) -> ScrapeResult<Schema> {
    let children: Vec<ElementRef<'_>> = dom::child_elements(block).collect();

    let name_el = children
        .iter()
        .find(|el| dom::class_name(**el) == "type-name")
        .ok_or_else(|| ctx.missing("missing class name el"))?;
    let name = dom::text_content(*name_el).trim().to_string();

    let inherits = inherited_classes(&children);

    let members_root = children
        .iter()
        .find(|el| dom::has_class(**el, "brief-members"))
        .ok_or_else(|| ctx.missing(format!("unable to find class member root el for {}", name)))?;

    let members = dom::query_all(*members_root, "tr")?
        .into_iter()
        .map(|row| member::parse_member_row(ctx, row))
        .collect::<ScrapeResult<Vec<_>>>()?;
    ::log::debug!("Class {} has {} member row(s)", name, members.len());

    let mut properties = Properties::new();
    properties.insert("name".to_string(), Schema::constant(name));
    properties.insert("members".to_string(), Schema::object(fold_members(members)));
    properties.insert(
        "inherits".to_string(),
        Schema::tuple(inherits.into_iter().map(Schema::constant).collect()),
    );

    let mut schema = Schema::with_properties(properties);
    schema.ts_type = Some(typescript::class_type(&schema));
    Ok(schema)
}

/// Names of the leading run of parent-class anchors, stopping at the sort control
pub fn inherited_classes(children: &[ElementRef<'_>]) -> Vec<String> {
    let is_anchor = |el: &&ElementRef<'_>| dom::tag_is(**el, "a");
    let not_sort = |el: &&ElementRef<'_>| dom::class_name(**el) != "sort";
    filter_while(children.iter(), &[&is_anchor, &not_sort])
        .into_iter()
        .map(|el| dom::text_content(*el).trim().to_string())
        .collect()
}

/// Keys members by name; a repeated name replaces the earlier schema but keeps its position
pub fn fold_members(members: Vec<Schema>) -> Properties {
    let mut properties = Properties::new();
    for member in members {
        let Some(name) = member.name_const().map(str::to_string) else {
            ::log::warn!("Skipping member without a name: {:?}", member);
            continue;
        };
        if properties.contains_key(&name) {
            ::log::debug!("Member {} redefined, keeping the later definition", name);
        }
        properties.insert(name, member);
    }
    properties
}
