use crate::error::{ScrapeError, ScrapeResult};
use crate::page::PageMeta;
use scraper::{ElementRef, Html, Node, Selector};

/// Compiles a CSS selector
pub fn selector(css: &str) -> ScrapeResult<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{}: {}", css, e)))
}

/// First descendant matching `css`, if any
pub fn query_opt<'a>(el: ElementRef<'a>, css: &str) -> ScrapeResult<Option<ElementRef<'a>>> {
    Ok(el.select(&selector(css)?).next())
}

/// First descendant matching `css`; fails with `message` when there is none
pub fn query<'a>(
    el: ElementRef<'a>,
    css: &str,
    message: &str,
    page: &PageMeta,
) -> ScrapeResult<ElementRef<'a>> {
    query_opt(el, css)?.ok_or_else(|| ScrapeError::missing(message, page))
}

/// All descendants matching `css`, in document order
pub fn query_all<'a>(el: ElementRef<'a>, css: &str) -> ScrapeResult<Vec<ElementRef<'a>>> {
    Ok(el.select(&selector(css)?).collect())
}

/// All elements in the document matching `css`, in document order
pub fn query_document<'a>(document: &'a Html, css: &str) -> ScrapeResult<Vec<ElementRef<'a>>> {
    Ok(document.select(&selector(css)?).collect())
}

/// Element with the given `id` attribute
pub fn element_by_id<'a>(document: &'a Html, id: &str) -> Option<ElementRef<'a>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .find(|el| el.value().id() == Some(id))
}

/// Direct element children
pub fn child_elements<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Following element siblings, nearest first
pub fn siblings<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.next_siblings().filter_map(ElementRef::wrap)
}

pub fn next_element_sibling<'a>(el: ElementRef<'a>) -> Option<ElementRef<'a>> {
    siblings(el).next()
}

/// Concatenated text of every descendant text node
pub fn text_content(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// Text content with the subtrees of any descendant `tag` elements left out
pub fn text_content_without(el: ElementRef<'_>, tag: &str) -> String {
    let mut text = String::new();
    collect_text(el, tag, &mut text);
    text
}

fn collect_text(el: ElementRef<'_>, skip_tag: &str, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) if e.name() == skip_tag => {}
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    collect_text(child, skip_tag, out);
                }
            }
            _ => {}
        }
    }
}

pub fn tag_is(el: ElementRef<'_>, tag: &str) -> bool {
    el.value().name().eq_ignore_ascii_case(tag)
}

pub fn has_class(el: ElementRef<'_>, class: &str) -> bool {
    el.value().classes().any(|c| c == class)
}

/// The raw `class` attribute, compared as a whole
pub fn class_name(el: ElementRef<'_>) -> &str {
    el.value().attr("class").unwrap_or("")
}

/// Whether `el` sits inside a `tag` element that is itself below `root`
pub fn nested_in(el: ElementRef<'_>, tag: &str, root: ElementRef<'_>) -> bool {
    el.ancestors()
        .take_while(|node| *node != *root)
        .filter_map(ElementRef::wrap)
        .any(|ancestor| tag_is(ancestor, tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HTML: &str = r#"<html><body>
        <div id="root" class="brief-listing outer">
            <a href="LuaControl.html">LuaControl</a>
            <span class="type-name">LuaEntity</span>
            <ul class="field-list">
                <li>outer <ul><li>inner</li></ul> tail</li>
            </ul>
        </div>
        <p id="after">after</p>
    </body></html>"#;

    fn root(doc: &Html) -> ElementRef<'_> {
        element_by_id(doc, "root").unwrap()
    }

    #[test]
    fn test_query_required_and_optional() {
        let doc = Html::parse_document(HTML);
        let page = PageMeta::new("https://example.com/LuaEntity.html");

        let name = query(root(&doc), ".type-name", "missing name", &page).unwrap();
        assert_eq!(text_content(name), "LuaEntity");

        assert!(query_opt(root(&doc), ".sort").unwrap().is_none());
        let err = query(root(&doc), ".sort", "missing sort", &page).unwrap_err();
        assert_eq!(
            err.to_string(),
            "missing sort @ https://example.com/LuaEntity.html"
        );
    }

    #[test]
    fn test_invalid_selector_is_an_error() {
        let doc = Html::parse_document(HTML);
        assert!(matches!(
            query_opt(root(&doc), "[[["),
            Err(ScrapeError::Selector(_))
        ));
    }

    #[test]
    fn test_children_and_siblings() {
        let doc = Html::parse_document(HTML);
        let tags: Vec<_> = child_elements(root(&doc))
            .map(|el| el.value().name().to_string())
            .collect();
        assert_eq!(tags, vec!["a", "span", "ul"]);

        let next = next_element_sibling(root(&doc)).unwrap();
        assert_eq!(next.value().id(), Some("after"));
        assert_eq!(siblings(next).count(), 0);
    }

    #[test]
    fn test_text_without_nested_items() {
        let doc = Html::parse_document(HTML);
        let item = query_all(root(&doc), ".field-list > li").unwrap()[0];
        let text = text_content_without(item, "li");
        assert_eq!(text.split_whitespace().collect::<Vec<_>>(), vec!["outer", "tail"]);
    }

    #[test]
    fn test_nested_in() {
        let doc = Html::parse_document(HTML);
        let items = query_all(root(&doc), "li").unwrap();
        assert_eq!(items.len(), 2);
        assert!(!nested_in(items[0], "li", root(&doc)));
        assert!(nested_in(items[1], "li", root(&doc)));
    }

    #[test]
    fn test_classes() {
        let doc = Html::parse_document(HTML);
        assert!(has_class(root(&doc), "brief-listing"));
        assert!(!has_class(root(&doc), "brief"));
        assert_eq!(class_name(root(&doc)), "brief-listing outer");
    }
}
