use web_sys as web;

use crate::constants::PLAY_OVERLAY_ID;

#[inline]
pub fn show(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PLAY_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.remove_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "");
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(PLAY_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback
        _ = el.set_attribute("style", "display:none");
    }
}
