//! Minimal tree-walking interface over a parsed HTML document.
//!
//! The extractors only need a handful of navigation primitives, so they are
//! written against [`TreeNode`] instead of a concrete HTML library. The crate
//! ships an implementation for [`scraper::ElementRef`].

use scraper::ElementRef;

/// An element in a parsed document.
///
/// Only elements are visible through this trait; text and comment nodes are
/// reachable solely through [`TreeNode::text_content`].
pub trait TreeNode: Copy {
    /// Lowercase tag name, e.g. `"table"`.
    fn tag_name(&self) -> &str;

    /// Direct element children in document order.
    fn element_children(&self) -> impl Iterator<Item = Self>;

    /// All element descendants in document order, excluding `self`.
    fn element_descendants(&self) -> impl Iterator<Item = Self>;

    /// Concatenated text of every text node below this element, verbatim.
    fn text_content(&self) -> String;

    /// Value of the attribute `name`, if present.
    fn attribute(&self, name: &str) -> Option<&str>;

    /// Direct children with the given tag.
    fn children_by_tag<'t>(&self, tag: &'t str) -> impl Iterator<Item = Self> {
        self.element_children()
            .filter(move |child| child.tag_name() == tag)
    }

    /// Descendants at any depth with the given tag.
    fn descendants_by_tag<'t>(&self, tag: &'t str) -> impl Iterator<Item = Self> {
        self.element_descendants()
            .filter(move |node| node.tag_name() == tag)
    }

    /// First descendant with the given tag.
    fn find_first(&self, tag: &str) -> Option<Self> {
        self.element_descendants().find(|node| node.tag_name() == tag)
    }

    /// Whether the whitespace-separated `class` attribute contains `class`.
    fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|value| value.split_whitespace().any(|token| token == class))
    }

    /// Rows belonging to this table, not to tables nested inside it.
    ///
    /// Parsers insert an implicit `tbody`, so rows under the table's own
    /// `thead`/`tbody`/`tfoot` count as direct rows.
    fn table_rows(&self) -> Vec<Self> {
        let mut rows = Vec::new();
        for child in self.element_children() {
            match child.tag_name() {
                "tr" => rows.push(child),
                "thead" | "tbody" | "tfoot" => rows.extend(child.children_by_tag("tr")),
                _ => {}
            }
        }
        rows
    }
}

impl<'a> TreeNode for ElementRef<'a> {
    fn tag_name(&self) -> &str {
        self.value().name()
    }

    fn element_children(&self) -> impl Iterator<Item = Self> {
        self.children().filter_map(ElementRef::wrap)
    }

    fn element_descendants(&self) -> impl Iterator<Item = Self> {
        // `descendants` yields the node itself first
        self.descendants().skip(1).filter_map(ElementRef::wrap)
    }

    fn text_content(&self) -> String {
        self.text().collect()
    }

    fn attribute(&self, name: &str) -> Option<&str> {
        self.value().attr(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    fn body(doc: &Html) -> ElementRef<'_> {
        doc.root_element()
            .find_first("body")
            .expect("parser always produces a body")
    }

    #[test]
    fn test_children_by_tag_is_not_recursive() {
        let doc = Html::parse_document(
            "<div><table><tr><td><table></table></td></tr></table><table></table></div>",
        );
        let div = body(&doc).find_first("div").unwrap();
        assert_eq!(div.children_by_tag("table").count(), 2);
        assert_eq!(div.descendants_by_tag("table").count(), 3);
    }

    #[test]
    fn test_descendants_exclude_self() {
        let doc = Html::parse_document("<div><div></div></div>");
        let outer = body(&doc).find_first("div").unwrap();
        assert_eq!(outer.descendants_by_tag("div").count(), 1);
    }

    #[test]
    fn test_text_content_is_verbatim() {
        let doc = Html::parse_document("<p>  A &amp; <b>B</b>\n</p>");
        let p = body(&doc).find_first("p").unwrap();
        assert_eq!(p.text_content(), "  A & B\n");
    }

    #[test]
    fn test_has_class_matches_tokens() {
        let doc = Html::parse_document(r#"<div class="wrap tender-details-home"></div>"#);
        let div = body(&doc).find_first("div").unwrap();
        assert!(div.has_class("tender-details-home"));
        assert!(!div.has_class("tender-details"));
    }

    #[test]
    fn test_table_rows_skip_nested_tables() {
        let doc = Html::parse_document(
            "<table>\
               <tr><td>a</td></tr>\
               <tr><td><table><tr><td>x</td></tr><tr><td>y</td></tr></table></td></tr>\
             </table>",
        );
        let table = body(&doc).find_first("table").unwrap();
        assert_eq!(table.table_rows().len(), 2);
        assert_eq!(table.descendants_by_tag("tr").count(), 4);
    }

    #[test]
    fn test_attribute_lookup() {
        let doc = Html::parse_document(r#"<a href="/files/1.pdf">doc</a>"#);
        let a = body(&doc).find_first("a").unwrap();
        assert_eq!(a.attribute("href"), Some("/files/1.pdf"));
        assert_eq!(a.attribute("title"), None);
    }
}
