use dioxus::document::eval;

pub(super) const PASSAGE_ELEMENT_ID: &str = "reading-passage";

const SELECTION_TEXT_SCRIPT_TEMPLATE: &str = r#"
    const el = document.getElementById("{element_id}");
    const sel = window.getSelection();
    if (!el || !sel || sel.rangeCount === 0 || sel.isCollapsed) {
        return "";
    }
    const range = sel.getRangeAt(0);
    if (!el.contains(range.commonAncestorContainer)) {
        return "";
    }
    const text = sel.toString();
    sel.removeAllRanges();
    return text;
"#;

/// Text selected inside `element_id`, cleared after reading. Empty when
/// nothing inside the element is selected.
pub(super) async fn take_selection_text(element_id: &str) -> Option<String> {
    let script = SELECTION_TEXT_SCRIPT_TEMPLATE.replace("{element_id}", element_id);
    eval(&script)
        .join::<String>()
        .await
        .ok()
        .filter(|text| !text.trim().is_empty())
}
