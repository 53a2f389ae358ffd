use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::results::BuildEntry;
use crate::utils::clean_text;

/// Member links on the current category page layout
static MEMBER_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a.category-page__member-link").unwrap());

/// Member links on the older MediaWiki category layout
static LEGACY_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div#mw-pages li a").unwrap());

/// Parses a build category page into its build links, in document order
///
/// `site_origin` is prefixed to site-relative hrefs (e.g.
/// `https://gwpvx.fandom.com`). The legacy listing is only consulted when
/// the current layout yields nothing.
pub fn parse(html: &str, site_origin: &str) -> Vec<BuildEntry> {
    let doc = Html::parse_document(html);

    let builds = collect_links(&doc, &MEMBER_LINK, site_origin);
    if !builds.is_empty() {
        ::log::debug!("Found {} member links", builds.len());
        return builds;
    }

    let builds = collect_links(&doc, &LEGACY_LINK, site_origin);
    ::log::debug!("Found {} legacy category links", builds.len());
    builds
}

fn collect_links(doc: &Html, selector: &Selector, site_origin: &str) -> Vec<BuildEntry> {
    doc.select(selector)
        .map(|link| {
            let href = link.value().attr("href").unwrap_or("");
            BuildEntry::new(clean_text(link), absolutize(href, site_origin))
        })
        .collect()
}

/// Resolve a link href against the site origin
///
/// Every href starting with `/` gets the origin prefixed; anything else is
/// returned unchanged.
pub fn absolutize(href: &str, site_origin: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", site_origin.trim_end_matches('/'), href)
    } else {
        href.to_string()
    }
}
