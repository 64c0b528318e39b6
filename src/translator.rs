use std::cell::Cell;
use std::rc::Rc;

use crate::dom;
use crate::i18n::{self, Lang};
use crate::showcase::{self, SequencerSlot};

pub fn init(lang: Rc<Cell<Lang>>, slot: SequencerSlot) {
    let Some(toggle) = dom::query("#lang-toggle") else {
        return;
    };

    dom::on_click(&toggle, move |_| {
        let next = lang.get().toggled();
        lang.set(next);
        apply(next);
        showcase::restart_subtitle(next, &slot);
    });
}

pub fn apply(lang: Lang) {
    let Some(doc) = dom::document() else {
        return;
    };

    if let Some(label) = dom::query(".lang-text") {
        label.set_text_content(Some(lang.toggle_label()));
    }

    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", lang.as_str());
        let _ = root.set_attribute("dir", lang.direction());
    }

    if let Some(body) = doc.body() {
        let _ = body.set_attribute("dir", lang.direction());
        dom::set_style(&body, "direction", lang.direction());
        dom::set_style(&body, "text-align", lang.text_align());
    }

    for element in dom::query_all("[data-translate]") {
        let Some(key) = element.get_attribute("data-translate") else {
            continue;
        };
        let Some(text) = i18n::lookup(lang, &key) else {
            continue;
        };

        if i18n::is_rich_text(&key) {
            element.set_inner_html(text);
        } else {
            element.set_text_content(Some(text));
        }
    }

    for element in dom::query_all("[data-translate-placeholder]") {
        let Some(key) = element.get_attribute("data-translate-placeholder") else {
            continue;
        };
        if let Some(text) = i18n::lookup(lang, &key) {
            let _ = element.set_attribute("placeholder", text);
        }
    }

    // the remaining strings live in the same dictionary but their elements
    // carry no data-translate hook, so they are addressed by selector
    let title_words = dom::query_all(".title-word");
    if title_words.len() >= 2 {
        for (element, key) in title_words
            .iter()
            .zip(["title-word-first", "title-word-last"])
        {
            if let Some(text) = i18n::lookup(lang, key) {
                element.set_text_content(Some(text));
                let _ = element.set_attribute("data-text", text);
            }
        }
    }

    if let Some(prompt) = i18n::lookup(lang, "terminal-prompt") {
        if let Some(title) = dom::query(".terminal-title") {
            title.set_text_content(Some(prompt));
        }
        for line_prompt in dom::query_all(".terminal-line .prompt") {
            line_prompt.set_text_content(Some(prompt));
        }
    }

    if let Some(name_literal) = i18n::lookup(lang, "code-name-string") {
        if let Some(element) = dom::query(".code-window .code-text .string") {
            element.set_text_content(Some(name_literal));
        }
    }

    if let Some(hello_literal) = i18n::lookup(lang, "code-hello-string") {
        if let Some(element) = dom::query(".code-window .code-line:last-child .string") {
            element.set_text_content(Some(hello_literal));
        }
    }
}
