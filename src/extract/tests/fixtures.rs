use crate::extract::ScrapeContext;
use crate::lua_types::LuaTypes;
use crate::page::PageMeta;
use scraper::Html;

pub const PAGE_URL: &str = "https://lua-api.factorio.com/1.1.0/LuaEntity.html";

/// Parses `html` and runs `f` against a context for it
pub fn with_context<R>(html: &str, f: impl FnOnce(&ScrapeContext<'_>) -> R) -> R {
    let document = Html::parse_document(html);
    let page = PageMeta::new(PAGE_URL);
    let types = LuaTypes::default();
    let ctx = ScrapeContext::new(&document, &page, &types);
    f(&ctx)
}

/// Wraps member rows in a minimal class page
pub fn member_table(rows: &str) -> String {
    format!(
        r#"<html><body><table class="brief-members">{}</table></body></html>"#,
        rows
    )
}

pub const HEALTH_ROW: &str = r##"<tr>
    <td class="header"><span class="element-name"><a href="#LuaEntity.health">health</a></span> :: <span class="param-type">float</span><span class="attribute-mode">[RW]</span></td>
    <td class="description">The health of the entity.</td>
</tr>"##;

pub const UNIT_NUMBER_ROW: &str = r##"<tr>
    <td class="header"><span class="element-name"><a href="#LuaEntity.unit_number">unit_number</a></span> :: <span class="param-type">uint</span><span class="attribute-mode">[R]</span></td>
    <td class="description">A unique number identifying this entity.</td>
</tr>"##;

pub const CONNECTED_ENTITY_ROW: &str = r##"<tr>
    <td class="header"><span class="element-name"><a href="#LuaEntity.connected_entity">connected_entity</a></span> <span class="attribute-mode">[RW]</span></td>
    <td class="description">The connected entity, if any.</td>
</tr>"##;

pub const CLONE_ROW: &str = r##"<tr>
    <td class="header"><span class="element-name"><a href="#LuaEntity.clone">clone</a>() → <span class="return-type">LuaEntity</span></span></td>
    <td class="description">Clones this entity.</td>
</tr>"##;

pub const CLEAR_FLUID_ROW: &str = r##"<tr>
    <td class="header"><span class="element-name"><a href="#LuaEntity.clear_fluid_inside">clear_fluid_inside</a>()</span></td>
    <td class="description">Remove all fluids from this entity. See [fluids](Concepts.html#Fluid).</td>
</tr>"##;

pub const DESTROY_ROW: &str = r##"<tr>
    <td class="header"><span class="element-name"><a href="#LuaEntity.destroy">destroy</a>(raise_destroy) → <span class="return-type">boolean</span></span></td>
    <td class="description">Destroys this entity.</td>
</tr>"##;

pub const ORDER_UPGRADE_ROW: &str = r##"<tr>
    <td class="header"><span class="element-name"><a href="#LuaEntity.order_upgrade">order_upgrade</a>{force=…, target=…} → <span class="return-type">LuaEntity</span></span></td>
    <td class="description">Sets the entity to be upgraded by construction robots.</td>
</tr>"##;

pub const DESTROY_DETAIL: &str = r#"<div class="element" id="LuaEntity.destroy">
    <div class="element-header"><span class="element-name">destroy(raise_destroy) → <span class="return-type">boolean</span></span></div>
    <div class="element-content">
        <p>Destroys the entity.</p>
        <div class="detail">
            <div class="detail-header">Parameters</div>
            <div class="detail-content">
                <ul class="field-list">
                    <li><span class="param-name">raise_destroy</span> :: <span class="param-type">boolean</span> (optional): If true, script_raised_destroy will be called.</li>
                </ul>
            </div>
        </div>
        <div class="detail">
            <div class="detail-header">Return value</div>
            <div class="detail-content">Returns false if the entity was valid and destruction failed.</div>
        </div>
    </div>
</div>"#;

pub const ORDER_UPGRADE_DETAIL: &str = r#"<div class="element" id="LuaEntity.order_upgrade">
    <div class="element-header"><span class="element-name">order_upgrade{force=…, target=…} → <span class="return-type">LuaEntity</span></span></div>
    <div class="element-content">
        <div class="detail">
            <div class="detail-header">Parameters</div>
            <div class="detail-content">
                <p>Table with the following fields:</p>
                <ul class="field-list">
                    <li><span class="param-name">force</span> :: <span class="param-type">ForceSpecification</span>: The force whose robots are supposed to do the upgrade.</li>
                    <li><span class="param-name">target</span> :: <span class="param-type">string</span>: The prototype of the entity to upgrade to.
                        <ul class="field-list">
                            <li><span class="param-name">quality</span> :: <span class="param-type">string</span>: Nested field.</li>
                        </ul>
                    </li>
                    <li></li>
                </ul>
            </div>
        </div>
        <div class="detail">
            <div class="detail-header">Return value</div>
            <div class="detail-content">The upgrade proxy   or nil if it could
                not be placed.</div>
        </div>
    </div>
</div>"#;

/// A full class page: heading, page description, one class listing and detail sections
pub fn entity_page() -> String {
    format!(
        r##"<!DOCTYPE html>
<html>
<head><title>LuaEntity - Factorio API</title></head>
<body>
<div class="breadcrumbs"><a href="index.html">Home</a> / LuaEntity</div>
<h1>LuaEntity</h1>
<div class="version">1.1.0</div>
<div class="brief-description">The primary interface for interacting with entities. See [LuaControl](LuaControl.html).</div>
<div class="brief-listing">
    <div class="brief-listing">
        <a href="LuaControl.html">LuaControl</a>
        <a class="sort" href="#">sort</a>
        <span class="type-name">LuaEntity</span>
        <div class="brief-members">
            <table>
                {health}
                {unit_number}
                {connected_entity}
                {clone}
                {clear_fluid}
                {destroy}
                {order_upgrade}
            </table>
        </div>
    </div>
</div>
<div class="element-details">
    {destroy_detail}
    {order_upgrade_detail}
</div>
</body>
</html>"##,
        health = HEALTH_ROW,
        unit_number = UNIT_NUMBER_ROW,
        connected_entity = CONNECTED_ENTITY_ROW,
        clone = CLONE_ROW,
        clear_fluid = CLEAR_FLUID_ROW,
        destroy = DESTROY_ROW,
        order_upgrade = ORDER_UPGRADE_ROW,
        destroy_detail = DESTROY_DETAIL,
        order_upgrade_detail = ORDER_UPGRADE_DETAIL,
    )
}
