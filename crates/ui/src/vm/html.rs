use std::collections::{HashMap, HashSet};

/// Keeps only the markup the passage renderer emits: paragraphs and highlight spans.
#[must_use]
pub fn sanitize_passage_html(html: &str) -> String {
    let tags: HashSet<&str> = ["p", "span"].into_iter().collect();

    let mut attributes: HashMap<&str, HashSet<&str>> = HashMap::new();
    attributes.insert("p", ["id", "class"].into_iter().collect());
    attributes.insert("span", ["class", "style"].into_iter().collect());

    ammonia::Builder::new()
        .tags(tags)
        .tag_attributes(attributes)
        .clean(html)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_paragraph_and_highlight_markup() {
        let html = r#"<p id="para-0" class="mb-4"><span class="highlight-text" style="background-color: rgba(255, 255, 0, 0.3);">tea</span></p>"#;
        let clean = sanitize_passage_html(html);
        assert!(clean.contains(r#"id="para-0""#));
        assert!(clean.contains("highlight-text"));
        assert!(clean.contains("background-color"));
    }

    #[test]
    fn strips_scripts_and_handlers() {
        let clean = sanitize_passage_html(r#"<p onclick="x()">hi<script>alert(1)</script></p>"#);
        assert_eq!(clean, "<p>hi</p>");
    }
}
