use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{
    window, Document, Element, EventTarget, HtmlElement, IntersectionObserver,
    IntersectionObserverEntry, IntersectionObserverInit, NodeList, Window,
};

pub fn win() -> Option<Window> {
    window()
}

pub fn document() -> Option<Document> {
    window()?.document()
}

pub fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

pub fn query_html(selector: &str) -> Option<HtmlElement> {
    query(selector)?.dyn_into().ok()
}

pub fn query_within(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(doc) = document() else {
        return Vec::new();
    };

    doc.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn query_all_within(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(|list| node_list_elements(&list))
        .unwrap_or_default()
}

pub fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn as_html(element: Element) -> Option<HtmlElement> {
    element.dyn_into().ok()
}

pub fn add_class(element: &Element, class: &str) {
    let _ = element.class_list().add_1(class);
}

pub fn remove_class(element: &Element, class: &str) {
    let _ = element.class_list().remove_1(class);
}

pub fn toggle_class(element: &Element, class: &str) {
    let _ = element.class_list().toggle(class);
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    let _ = element.style().set_property(property, value);
}

pub fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn on_click(target: &EventTarget, handler: impl FnMut(web_sys::MouseEvent) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    let _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_mouse_event(
    target: &EventTarget,
    event: &str,
    handler: impl FnMut(web_sys::MouseEvent) + 'static,
) {
    let closure = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(handler);
    let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_keydown(target: &EventTarget, handler: impl FnMut(web_sys::KeyboardEvent) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(handler);
    let _ = target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_submit(target: &EventTarget, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    let _ = target.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn on_window_event(event: &str, handler: impl FnMut() + 'static) {
    let Some(win) = window() else {
        return;
    };

    let closure = Closure::<dyn FnMut()>::new(handler);
    let _ = win.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn set_timeout(callback: impl FnOnce() + 'static, delay_ms: u32) {
    let Some(win) = window() else {
        return;
    };

    let closure = Closure::once_into_js(callback);
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.unchecked_ref(),
        delay_ms as i32,
    );
}

pub fn raw_set_interval(callback: impl FnMut() + 'static, period_ms: u32) -> Option<i32> {
    let win = window()?;
    let closure = Closure::<dyn FnMut()>::new(callback);
    let id = win
        .set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms as i32,
        )
        .ok();
    closure.forget();
    id
}

pub fn clear_interval_id(id: i32) {
    if let Some(win) = window() {
        win.clear_interval_with_handle(id);
    }
}

pub fn clear_timeout_id(id: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(id);
    }
}

// A self-rescheduling timeout chain. The step callback returns the delay
// until its next run, or None to stop. Dropping the handle cancels the
// pending timeout and trips the cancelled flag, so a callback already
// queued by the host does nothing.
pub struct TimerChain {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    _closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl TimerChain {
    pub fn detach(self) {
        std::mem::forget(self);
    }
}

impl Drop for TimerChain {
    fn drop(&mut self) {
        self.cancelled.set(true);
        if let Some(id) = self.pending.take() {
            clear_timeout_id(id);
        }
    }
}

pub fn spawn_timer_chain(
    mut step: impl FnMut() -> Option<u32> + 'static,
    first_delay_ms: u32,
) -> TimerChain {
    let cancelled = Rc::new(Cell::new(false));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    let closure = {
        let cancelled = cancelled.clone();
        let pending = pending.clone();
        let closure_cell = closure_cell.clone();
        Closure::<dyn FnMut()>::new(move || {
            if cancelled.get() {
                return;
            }
            pending.set(None);

            let Some(delay) = step() else {
                return;
            };

            if let Some(callback) = closure_cell.borrow().as_ref() {
                pending.set(schedule_timeout(callback, delay));
            }
        })
    };

    pending.set(schedule_timeout(&closure, first_delay_ms));
    *closure_cell.borrow_mut() = Some(closure);

    TimerChain {
        cancelled,
        pending,
        _closure: closure_cell,
    }
}

fn schedule_timeout(callback: &Closure<dyn FnMut()>, delay_ms: u32) -> Option<i32> {
    window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .ok()
}

// Trailing-edge debounce: the action fires once the quiet period elapses
// after the most recent trigger.
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<Cell<Option<i32>>>,
    callback: Rc<Closure<dyn FnMut()>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32, mut action: impl FnMut() + 'static) -> Self {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback = {
            let pending = pending.clone();
            Closure::<dyn FnMut()>::new(move || {
                pending.set(None);
                action();
            })
        };

        Self {
            delay_ms,
            pending,
            callback: Rc::new(callback),
        }
    }

    pub fn trigger(&self) {
        let Some(win) = window() else {
            return;
        };

        if let Some(id) = self.pending.take() {
            win.clear_timeout_with_handle(id);
        }

        let id = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                (*self.callback).as_ref().unchecked_ref(),
                self.delay_ms as i32,
            )
            .ok();
        self.pending.set(id);
    }
}

pub fn observe_intersections(
    targets: Vec<Element>,
    threshold: f64,
    root_margin: Option<&str>,
    once: bool,
    mut handler: impl FnMut(&Element) + 'static,
) {
    if targets.is_empty() {
        return;
    }

    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }

                let target = entry.target();
                handler(&target);
                if once {
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            callback.forget();
        }
        Err(_) => drop(callback),
    }
}
