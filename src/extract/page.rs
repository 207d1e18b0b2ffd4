use crate::dom;
use crate::error::ScrapeResult;
use crate::extract::{ScrapeContext, class};
use crate::markdown::as_url_corrected_markdown;
use crate::schema::Schema;
use scraper::ElementRef;

/// Nested listings mark top-level classes
const CLASS_LISTING: &str = ".brief-listing > .brief-listing";

/// Scrapes every class on the page, each prefixed with the page-level description
pub fn scrape_class_page(ctx: &ScrapeContext<'_>) -> ScrapeResult<Vec<Schema>> {
    let blocks = dom::query_document(ctx.document, CLASS_LISTING)?;
    ::log::info!("Found {} class listing(s) on {}", blocks.len(), ctx.page);

    let classes = blocks
        .into_iter()
        .map(|block| class::scrape_class(ctx, block))
        .collect::<ScrapeResult<Vec<_>>>()?;

    let description = page_description(ctx)?;
    Ok(classes
        .into_iter()
        .map(|schema| prefix_description(&description, schema))
        .collect())
}

/// Description of the page: the first `brief-description` at or after the first `h1`
pub fn page_description(ctx: &ScrapeContext<'_>) -> ScrapeResult<String> {
    let heading = dom::query_document(ctx.document, "body h1")?
        .into_iter()
        .next()
        .ok_or_else(|| ctx.missing("missing page heading el"))?;

    Ok(find_description(heading)
        .map(|el| as_url_corrected_markdown(&dom::text_content(el), ctx.page))
        .unwrap_or_default())
}

/// Walks `start` and its following siblings; `None` once the chain runs out
fn find_description(start: ElementRef<'_>) -> Option<ElementRef<'_>> {
    std::iter::once(start)
        .chain(dom::siblings(start))
        .find(|el| dom::has_class(*el, "brief-description"))
}

/// Prepends the page description to a class description
pub fn prefix_description(description: &str, mut schema: Schema) -> Schema {
    if description.is_empty() {
        return schema;
    }
    schema.description = Some(match schema.description.take() {
        Some(own) if !own.is_empty() => format!("{}. {}", description, own),
        _ => description.to_string(),
    });
    schema
}
