use std::cell::Cell;
use std::rc::Rc;

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

use crate::contact::{self, FormFields, MailPayload, Severity, SubmitDecision};
use crate::dom;
use crate::i18n::{self, Lang};
use crate::notify;

pub fn init(lang: Rc<Cell<Lang>>) {
    let Some(form) = dom::query("#contact-form").and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return;
    };

    {
        let form = form.clone();
        let lang = lang.clone();
        dom::on_submit(&form.clone(), move |event| {
            event.prevent_default();
            submit(&form, lang.get());
        });
    }

    for button in dom::query_all(".contact-copy") {
        let lang = lang.clone();
        dom::on_click(&button, move |event| {
            let text = event
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(".contact-card").ok().flatten())
                .and_then(|card| dom::query_within(&card, "p"))
                .and_then(|paragraph| paragraph.text_content());

            let Some(text) = text else {
                return;
            };

            copy_to_clipboard(&text);
            if let Some(message) = i18n::lookup(lang.get(), "notify-copied") {
                notify::notify(message, Severity::Success);
            }
        });
    }
}

fn submit(form: &HtmlFormElement, lang: Lang) {
    let fields = FormFields {
        name: field_value(form, "name"),
        email: field_value(form, "email"),
        subject: field_value(form, "subject"),
        message: field_value(form, "message"),
        honeypot: field_value(form, "website"),
    };

    let stamp = local_timestamp();
    let SubmitDecision::Send(payload) = contact::gate_submission(fields, stamp.clone()) else {
        return;
    };

    set_field_value(form, "time", &stamp);

    let Some(button) = form
        .query_selector("button[type='submit']")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok())
    else {
        return;
    };
    let original_label = button.inner_html();

    let sending = i18n::lookup(lang, "notify-sending").unwrap_or("Sending...");
    button.set_inner_html(&format!("<span class=\"loading\"></span> {sending}"));
    button.set_disabled(true);

    let Some(send) = relay_call(form, &payload) else {
        if let Some(message) = i18n::lookup(lang, "notify-unavailable") {
            notify::notify(message, Severity::Error);
        }
        button.set_inner_html(&original_label);
        button.set_disabled(false);
        return;
    };

    let form = form.clone();
    spawn_local(async move {
        match JsFuture::from(send).await {
            Ok(_) => {
                if let Some(message) = i18n::lookup(lang, "notify-sent") {
                    notify::notify(message, Severity::Success);
                }
                form.reset();
            }
            Err(_) => {
                if let Some(message) = i18n::lookup(lang, "notify-send-failed") {
                    notify::notify(message, Severity::Error);
                }
            }
        }

        button.set_inner_html(&original_label);
        button.set_disabled(false);
    });
}

fn relay_call(form: &HtmlFormElement, payload: &MailPayload) -> Option<Promise> {
    let win = dom::win()?;
    let win_js: JsValue = win.into();
    let emailjs = Reflect::get(&win_js, &JsValue::from_str("emailjs")).ok()?;
    if emailjs.is_undefined() || emailjs.is_null() {
        return None;
    }

    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("publicKey"),
        &JsValue::from_str(contact::PUBLIC_KEY),
    )
    .ok()?;

    if let Some(send_form) = capability(&emailjs, "sendForm") {
        let form_js: JsValue = form.clone().into();
        let args = js_sys::Array::of4(
            &JsValue::from_str(contact::SERVICE_ID),
            &JsValue::from_str(contact::TEMPLATE_ID),
            &form_js,
            &options,
        );
        return send_form
            .apply(&emailjs, &args)
            .ok()?
            .dyn_into::<Promise>()
            .ok();
    }

    if let Some(send) = capability(&emailjs, "send") {
        let params = Object::new();
        for (key, value) in [
            ("name", payload.name.as_str()),
            ("email", payload.email.as_str()),
            ("subject", payload.subject.as_str()),
            ("message", payload.message.as_str()),
            ("time", payload.time.as_str()),
        ] {
            Reflect::set(&params, &JsValue::from_str(key), &JsValue::from_str(value)).ok()?;
        }

        let args = js_sys::Array::of4(
            &JsValue::from_str(contact::SERVICE_ID),
            &JsValue::from_str(contact::TEMPLATE_ID),
            &params,
            &options,
        );
        return send.apply(&emailjs, &args).ok()?.dyn_into::<Promise>().ok();
    }

    None
}

fn capability(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn field_value(form: &HtmlFormElement, name: &str) -> String {
    let Some(element) = form
        .query_selector(&format!("[name='{name}']"))
        .ok()
        .flatten()
    else {
        return String::new();
    };

    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        return area.value();
    }

    String::new()
}

fn set_field_value(form: &HtmlFormElement, name: &str, value: &str) {
    if let Some(input) = form
        .query_selector(&format!("[name='{name}']"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    {
        input.set_value(value);
    }
}

fn local_timestamp() -> String {
    String::from(js_sys::Date::new_0().to_locale_string("en-US", &JsValue::UNDEFINED))
}

fn copy_to_clipboard(text: &str) {
    let Some(win) = dom::win() else {
        return;
    };

    let promise = win.navigator().clipboard().write_text(text);
    spawn_local(async move {
        let _ = JsFuture::from(promise).await;
    });
}
