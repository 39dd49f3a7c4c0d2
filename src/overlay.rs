use crate::core::InputMode;
use crate::dom;
use web_sys as web;

const STATUS_OVERLAY_ID: &str = "status-overlay";
const STATUS_TEXT_ID: &str = "status-text";
const MODE_LABEL_ID: &str = "mode-label";

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        _ = el.set_attribute("style", "display:none");
    }
}

#[inline]
pub fn is_hidden(document: &web::Document) -> bool {
    if let Some(el) = document.get_element_by_id(STATUS_OVERLAY_ID) {
        if el.class_list().contains("hidden") {
            return true;
        }
        return el
            .get_attribute("style")
            .map(|s| s.contains("display:none"))
            .unwrap_or(false);
    }
    false
}

#[inline]
pub fn toggle(document: &web::Document) {
    if is_hidden(document) {
        show(document);
    } else {
        hide(document);
    }
}

/// Show a user-facing status line (camera progress, failures). An empty
/// message clears it.
pub fn set_status(document: &web::Document, message: &str) {
    dom::set_text(document, STATUS_TEXT_ID, message);
    if !message.is_empty() {
        show(document);
    }
}

pub fn set_mode_label(document: &web::Document, mode: InputMode) {
    dom::set_text(document, MODE_LABEL_ID, &format!("Input: {}", mode.label()));
}
