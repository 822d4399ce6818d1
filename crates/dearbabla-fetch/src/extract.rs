//! Translation extraction from bab.la result pages.
//!
//! The page is parsed into a DOM and walked along a fixed descendant path:
//! the first `.content` element, then
//! `.quick-results .quick-result-entry .sense-group-results a`.
//! Link texts are returned in document order with duplicates dropped; a link
//! listing several translations (`a, b`) contributes each of them.
//!
//! A page without the expected structure yields nothing, the same as a word
//! the dictionary does not know.

use dearbabla_core::record::canonical_translations;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::rc::Rc;

/// Class of the element every lookup is scoped to.
const SCOPE_CLASS: &str = "content";

/// Descendant path from the scope element to translation links.
/// `.name` matches a class, anything else a tag name.
const RESULT_PATH: &[&str] = &[
    ".quick-results",
    ".quick-result-entry",
    ".sense-group-results",
    "a",
];

/// Extract translations from a result page.
pub fn extract_translations(html: &str) -> Vec<String> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    let Some(scope) = find_first(&dom.document, &format!(".{SCOPE_CLASS}")) else {
        return Vec::new();
    };

    let mut nodes = vec![scope];
    for step in RESULT_PATH {
        nodes = select_descendants(&nodes, step);
        if nodes.is_empty() {
            return Vec::new();
        }
    }

    canonical_translations(
        nodes
            .iter()
            .map(|node| normalize_whitespace(&text_content(node))),
    )
}

/// Does `node` match a single path step?
fn matches_step(node: &Handle, step: &str) -> bool {
    let NodeData::Element {
        ref name,
        ref attrs,
        ..
    } = node.data
    else {
        return false;
    };

    match step.strip_prefix('.') {
        Some(class) => attrs
            .borrow()
            .iter()
            .filter(|attr| &*attr.name.local == "class")
            .any(|attr| attr.value.split_ascii_whitespace().any(|c| c == class)),
        None => {
            let tag: &str = &name.local;
            tag.eq_ignore_ascii_case(step)
        }
    }
}

/// First node in document order matching `step`, including `node` itself.
fn find_first(node: &Handle, step: &str) -> Option<Handle> {
    if matches_step(node, step) {
        return Some(node.clone());
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_first(child, step))
}

/// Every strict descendant of `roots` matching `step`, each node once.
fn select_descendants(roots: &[Handle], step: &str) -> Vec<Handle> {
    let mut found = Vec::new();
    for root in roots {
        for child in root.children.borrow().iter() {
            collect_matching(child, step, &mut found);
        }
    }
    found
}

fn collect_matching(node: &Handle, step: &str, found: &mut Vec<Handle>) {
    if matches_step(node, step) && !found.iter().any(|n| Rc::ptr_eq(n, node)) {
        found.push(node.clone());
    }
    for child in node.children.borrow().iter() {
        collect_matching(child, step, found);
    }
}

/// Concatenated text of `node` and all its descendants.
fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    push_text(node, &mut out);
    out
}

fn push_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        push_text(child, out);
    }
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(quick_results: &str) -> String {
        format!(
            r#"<!DOCTYPE html>
<html><head><title>bab.la</title></head>
<body>
  <nav><a href="/">home</a></nav>
  <div class="content">
    <div class="quick-results container">{quick_results}</div>
  </div>
</body></html>"#
        )
    }

    fn entry(links: &[&str]) -> String {
        let anchors: String = links
            .iter()
            .map(|l| format!(r#"<li><a href="/x">{l}</a></li>"#))
            .collect();
        format!(
            r#"<div class="quick-result-entry">
                 <div class="quick-result-option"><a href="/y">headword</a></div>
                 <div class="quick-result-overview"><ul class="sense-group-results">{anchors}</ul></div>
               </div>"#
        )
    }

    #[test]
    fn test_extracts_links_in_document_order() {
        let html = page(&format!(
            "{}{}",
            entry(&["zamek", "blokada"]),
            entry(&["zamknąć"])
        ));
        assert_eq!(
            extract_translations(&html),
            vec!["zamek", "blokada", "zamknąć"]
        );
    }

    #[test]
    fn test_drops_duplicates_keeping_first() {
        let html = page(&format!(
            "{}{}",
            entry(&["dom", "budynek"]),
            entry(&["dom", "chata"])
        ));
        assert_eq!(extract_translations(&html), vec!["dom", "budynek", "chata"]);
    }

    #[test]
    fn test_ignores_links_outside_sense_groups() {
        let html = page(&entry(&["kot"]));
        let got = extract_translations(&html);
        assert_eq!(got, vec!["kot"]);
        assert!(!got.contains(&"headword".to_string()));
        assert!(!got.contains(&"home".to_string()));
    }

    #[test]
    fn test_nested_markup_text_is_flattened() {
        let html = page(
            r#"<div class="quick-result-entry"><ul class="sense-group-results">
                 <li><a href="/z">  <strong>pies</strong>
                    podwórkowy </a></li>
               </ul></div>"#,
        );
        assert_eq!(extract_translations(&html), vec!["pies podwórkowy"]);
    }

    #[test]
    fn test_comma_joined_link_is_split() {
        let html = page(&entry(&["lody, lód", "sorbet", "lód"]));
        assert_eq!(extract_translations(&html), vec!["lody", "lód", "sorbet"]);
    }

    #[test]
    fn test_blank_links_skipped() {
        let html = page(&entry(&["  ", "mysz"]));
        assert_eq!(extract_translations(&html), vec!["mysz"]);
    }

    #[test]
    fn test_no_content_block_is_empty() {
        let html = r#"<html><body><div class="quick-results">
            <div class="quick-result-entry"><ul class="sense-group-results">
            <li><a>ignored</a></li></ul></div></div></body></html>"#;
        assert!(extract_translations(html).is_empty());
    }

    #[test]
    fn test_no_quick_results_is_empty() {
        let html = r#"<html><body><div class="content"><p>Nothing found.</p></div></body></html>"#;
        assert!(extract_translations(html).is_empty());
    }

    #[test]
    fn test_only_first_content_block_is_searched() {
        let html = format!(
            r#"<html><body>
                 <div class="content"><p>ads</p></div>
                 <div class="content"><div class="quick-results">{}</div></div>
               </body></html>"#,
            entry(&["ukryty"])
        );
        assert!(extract_translations(&html).is_empty());
    }

    #[test]
    fn test_non_html_input_is_empty() {
        assert!(extract_translations("").is_empty());
        assert!(extract_translations("{\"error\": \"rate limited\"}").is_empty());
    }

    #[test]
    fn test_class_match_is_whole_token() {
        let html = r#"<html><body><div class="content-wrapper"><div class="quick-results">
            <div class="quick-result-entry"><ul class="sense-group-results">
            <li><a>nie</a></li></ul></div></div></div></body></html>"#;
        assert!(extract_translations(html).is_empty());
    }
}
