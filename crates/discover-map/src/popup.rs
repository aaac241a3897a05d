//! Popup HTML for content and search markers.

use crate::models::{ContentItem, MediaKind};
use crate::widget::Popup;
use std::fmt::Write;

/// Popup for a content marker: media, title, category badge, description,
/// optional location and author.
pub fn content_popup(item: &ContentItem, color: &str) -> Popup {
    let mut html = String::from("<div class=\"popup-content\">");

    if let Some(media) = item.media() {
        let url = escape(&media.url());
        match media.kind {
            MediaKind::Image => {
                let _ = write!(
                    html,
                    "<img src=\"{}\" alt=\"{}\" class=\"popup-image\">",
                    url,
                    escape(&item.title)
                );
            }
            MediaKind::Video => {
                let _ = write!(
                    html,
                    "<video class=\"popup-video\" controls><source src=\"{}\"></video>",
                    url
                );
            }
            MediaKind::Audio => {
                let _ = write!(
                    html,
                    "<audio class=\"popup-audio\" controls><source src=\"{}\"></audio>",
                    url
                );
            }
            MediaKind::Unknown => {}
        }
    }

    let _ = write!(
        html,
        "<h3 class=\"popup-title\">{}</h3>\
         <span class=\"popup-category\" style=\"background-color: {}\">{}</span>\
         <p class=\"popup-description\">{}</p>",
        escape(&item.title),
        escape(color),
        escape(&item.category),
        escape(&item.description),
    );

    if let Some(location) = item.location_label() {
        let _ = write!(html, "<p class=\"popup-location\">📍 {}</p>", escape(location));
    }

    let _ = write!(html, "<p class=\"popup-author\">By: {}</p></div>", escape(&item.author));

    Popup::new(html)
}

/// Popup for the location search marker.
pub fn search_popup(display_name: &str) -> Popup {
    Popup::new(format!(
        "<div class=\"popup-content\"><h3>{}</h3><p>Search result</p></div>",
        escape(display_name)
    ))
}

/// Escape text for HTML element content and quoted attributes.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
