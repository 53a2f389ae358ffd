//! Heading-anchored section lookup.
//!
//! Wiki pages mark each section with an element whose `id` is the section
//! label (`<span id="Objectives">` inside an `<h2>`, or an `<h2 id=...>`
//! wrapped in `<div class="mw-heading">` on newer skins). A [`Section`] starts
//! at that heading block and runs over its following siblings until the next
//! level-2 or level-3 heading.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::utils::clean_text;

static WITH_ID: LazyLock<Selector> = LazyLock::new(|| Selector::parse("[id]").unwrap());

/// A named section of a page, located by its heading anchor
#[derive(Debug, Clone, Copy)]
pub struct Section<'a> {
    heading: ElementRef<'a>,
}

impl<'a> Section<'a> {
    /// Find the first element (in document order) whose id is one of `labels`
    pub fn locate(doc: &'a Html, labels: &[&str]) -> Option<Self> {
        let anchor = doc.select(&WITH_ID).find(|el| {
            el.value()
                .attr("id")
                .is_some_and(|id| labels.contains(&id))
        })?;

        Some(Self {
            heading: heading_block(anchor),
        })
    }

    /// The heading block the section hangs off
    pub fn heading(&self) -> ElementRef<'a> {
        self.heading
    }

    /// Sibling elements after the heading, up to the next section boundary
    pub fn body(&self) -> impl Iterator<Item = ElementRef<'a>> + use<'a> {
        self.heading
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .take_while(|el| !is_boundary(*el))
    }

    /// First ordered or unordered list in the section body
    pub fn first_list(&self) -> Option<ElementRef<'a>> {
        self.body().find(|el| is_list(*el))
    }

    /// Text of each item of the first list; `None` when there is no list or
    /// every item is blank
    pub fn list_items(&self) -> Option<Vec<String>> {
        let list = self.first_list()?;
        let items: Vec<String> = list
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "li")
            .map(clean_text)
            .filter(|text| !text.is_empty())
            .collect();

        (!items.is_empty()).then_some(items)
    }

    /// Paragraph and list text of the section body joined by newlines
    pub fn text_blocks(&self) -> Option<String> {
        let blocks: Vec<String> = self
            .body()
            .filter(|el| el.value().name() == "p" || is_list(*el))
            .map(clean_text)
            .filter(|text| !text.is_empty())
            .collect();

        (!blocks.is_empty()).then(|| blocks.join("\n"))
    }
}

/// Resolve an anchor to the block its section content follows
fn heading_block(anchor: ElementRef<'_>) -> ElementRef<'_> {
    let heading = if is_heading(anchor) {
        anchor
    } else {
        parent_element(anchor).unwrap_or(anchor)
    };

    match parent_element(heading) {
        Some(wrapper) if wrapper.value().classes().any(|c| c == "mw-heading") => wrapper,
        _ => heading,
    }
}

fn parent_element(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.parent().and_then(ElementRef::wrap)
}

fn is_heading(el: ElementRef<'_>) -> bool {
    matches!(el.value().name(), "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
}

fn is_list(el: ElementRef<'_>) -> bool {
    matches!(el.value().name(), "ul" | "ol")
}

/// Level-2/3 headings, bare or inside a `mw-heading2`/`mw-heading3` wrapper
fn is_boundary(el: ElementRef<'_>) -> bool {
    matches!(el.value().name(), "h2" | "h3")
        || el
            .value()
            .classes()
            .any(|c| c == "mw-heading2" || c == "mw-heading3")
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGACY_LAYOUT: &str = r#"
        <div class="mw-parser-output">
            <h2><span class="mw-headline" id="Objectives">Objectives</span></h2>
            <p>Intro text.</p>
            <ul><li>First</li><li> Second </li></ul>
            <h2><span class="mw-headline" id="Notes">Notes</span></h2>
            <p>No list here.</p>
            <h2><span class="mw-headline" id="Trivia">Trivia</span></h2>
            <ul><li>Belongs to trivia</li></ul>
        </div>
    "#;

    const MODERN_LAYOUT: &str = r#"
        <div class="mw-parser-output">
            <div class="mw-heading mw-heading2"><h2 id="Walkthrough">Walkthrough</h2></div>
            <p>Go north.</p>
            <table><tr><td>skipped</td></tr></table>
            <ol><li>Kill the boss.</li></ol>
            <div class="mw-heading mw-heading3"><h3 id="Tips">Tips</h3></div>
            <p>Not part of the walkthrough.</p>
        </div>
    "#;

    #[test]
    fn test_locate_legacy_span_anchor() {
        let doc = Html::parse_document(LEGACY_LAYOUT);
        let section = Section::locate(&doc, &["Objectives"]).unwrap();
        assert_eq!(section.heading().value().name(), "h2");
        assert_eq!(
            section.list_items(),
            Some(vec!["First".to_string(), "Second".to_string()])
        );
    }

    #[test]
    fn test_locate_missing_anchor() {
        let doc = Html::parse_document(LEGACY_LAYOUT);
        assert!(Section::locate(&doc, &["Reward", "Rewards"]).is_none());
    }

    #[test]
    fn test_list_does_not_cross_heading_boundary() {
        let doc = Html::parse_document(LEGACY_LAYOUT);
        let notes = Section::locate(&doc, &["Notes"]).unwrap();
        assert!(notes.first_list().is_none());
        assert_eq!(notes.list_items(), None);
    }

    #[test]
    fn test_modern_wrapper_heading() {
        let doc = Html::parse_document(MODERN_LAYOUT);
        let section = Section::locate(&doc, &["Walkthrough"]).unwrap();
        assert!(section.heading().value().classes().any(|c| c == "mw-heading"));
        assert_eq!(
            section.text_blocks().as_deref(),
            Some("Go north.\nKill the boss.")
        );
    }

    #[test]
    fn test_empty_list_is_absent() {
        let doc = Html::parse_document(
            r#"<h2><span id="Notes">Notes</span></h2><ul><li>  </li></ul>"#,
        );
        let section = Section::locate(&doc, &["Notes"]).unwrap();
        assert!(section.first_list().is_some());
        assert_eq!(section.list_items(), None);
    }

    #[test]
    fn test_first_matching_label_in_document_order() {
        let doc = Html::parse_document(
            r#"<h2><span id="Rewards">Rewards</span></h2><ul><li>500 XP</li></ul>
               <h2><span id="Reward">Reward</span></h2><ul><li>Other</li></ul>"#,
        );
        let section = Section::locate(&doc, &["Reward", "Rewards"]).unwrap();
        assert_eq!(section.list_items(), Some(vec!["500 XP".to_string()]));
    }
}
