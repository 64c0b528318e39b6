use web_sys::HtmlElement;

use crate::contact::Severity;
use crate::dom;

pub const AUTO_HIDE_MS: u32 = 5_000;
pub const SLIDE_IN_DELAY_MS: u32 = 100;
pub const SLIDE_OUT_MS: u32 = 300;

pub fn notify(message: &str, severity: Severity) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(body) = doc.body() else {
        return;
    };

    if let Some(existing) = dom::query(".notification") {
        existing.remove();
    }

    let Ok(container) = doc.create_element("div") else {
        return;
    };
    container.set_class_name(&format!(
        "notification notification-{}",
        severity.as_str()
    ));
    container.set_inner_html(
        "<div class=\"notification-content\">\
         <span class=\"notification-message\"></span>\
         <button class=\"notification-close\">&times;</button>\
         </div>",
    );

    if let Some(message_el) = dom::query_within(&container, ".notification-message") {
        message_el.set_text_content(Some(message));
    }

    let Some(container) = dom::as_html(container) else {
        return;
    };
    container.style().set_css_text(&format!(
        "position: fixed; top: 100px; right: 20px; background: {}; color: {}; \
         padding: 1rem 1.5rem; border-radius: 10px; \
         box-shadow: 0 10px 25px rgba(0, 0, 0, 0.3); z-index: 10000; \
         transform: translateX(400px); transition: transform 0.3s ease; \
         max-width: 400px; border: 1px solid rgba(255, 255, 255, 0.1); \
         font-family: 'JetBrains Mono', monospace;",
        severity.background(),
        severity.foreground()
    ));

    if let Some(content) = dom::query_within(&container, ".notification-content").and_then(dom::as_html) {
        content.style().set_css_text(
            "display: flex; align-items: center; justify-content: space-between; gap: 1rem;",
        );
    }

    if let Some(close) = dom::query_within(&container, ".notification-close").and_then(dom::as_html) {
        close.style().set_css_text(
            "background: none; border: none; color: inherit; font-size: 1.5rem; \
             cursor: pointer; padding: 0; width: 24px; height: 24px; display: flex; \
             align-items: center; justify-content: center; border-radius: 50%; \
             transition: background 0.3s ease;",
        );

        let container = container.clone();
        dom::on_click(&close, move |_| dismiss(container.clone()));
    }

    let _ = body.append_child(&container);

    {
        let container = container.clone();
        dom::set_timeout(
            move || dom::set_style(&container, "transform", "translateX(0)"),
            SLIDE_IN_DELAY_MS,
        );
    }

    dom::set_timeout(
        move || {
            if container.is_connected() {
                dismiss(container);
            }
        },
        AUTO_HIDE_MS,
    );
}

fn dismiss(element: HtmlElement) {
    dom::set_style(&element, "transform", "translateX(400px)");
    dom::set_timeout(move || element.remove(), SLIDE_OUT_MS);
}
