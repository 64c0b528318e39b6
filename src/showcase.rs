use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_sys::HtmlElement;

use crate::dom::{self, TimerChain};
use crate::i18n::{self, Lang};
use crate::typing::{self, SubtitleCycle};

pub const CODE_TYPE_START_DELAY_MS: u32 = 200;
pub const COMPILE_OVERLAY_FADE_MS: u32 = 100;
pub const COMPILE_PROGRESS_START_MS: u32 = 500;
pub const COMPILE_DURATION_MS: u32 = 3_000;
pub const COMPILE_CLEANUP_MS: u32 = 300;
pub const PROFILE_REVEAL_DELAY_MS: u32 = 1_000;
pub const GLOW_CLEAR_MS: u32 = 2_000;
pub const PROFILE_START_DELAY_MS: u32 = 100;
pub const PROFILE_TOGGLE_MS: u32 = 2_000;
pub const PROFILE_TOTAL_MS: u32 = 15_000;
pub const PROFILE_RESTORE_DELAY_MS: u32 = 500;

const COMPILING_TITLE: &str = "awsam-portfolio.js - Compiling...";
const COMPILED_TITLE: &str = "awsam-portfolio.js - Compiled ✓";
const CURSOR_HTML: &str =
    "<span class=\"typing-cursor\" style=\"animation: blink 1s infinite; color: #00ff88;\">|</span>";

pub type SequencerSlot = Rc<RefCell<Option<TimerChain>>>;

pub fn new_sequencer_slot() -> SequencerSlot {
    Rc::new(RefCell::new(None))
}

pub fn init(lang: Rc<Cell<Lang>>, slot: &SequencerSlot) {
    if let Some(greeting) = dom::query_html(".greeting-text") {
        if let Some(text) = greeting.text_content() {
            type_once(greeting, text, typing::GREETING_TYPE_MS);
        }
    }

    restart_subtitle(lang.get(), slot);
    start_code_reveal();
}

// Replacing the slot's previous chain drops it, which clears its pending
// timer; at most one subtitle typist is ever live.
pub fn restart_subtitle(lang: Lang, slot: &SequencerSlot) {
    let Some(subtitle) = dom::query_html(".subtitle-text") else {
        return;
    };

    let phrases = i18n::subtitle_phrases(lang)
        .iter()
        .map(ToString::to_string)
        .collect();
    let Some(mut cycle) = SubtitleCycle::new(phrases) else {
        return;
    };

    let chain = dom::spawn_timer_chain(
        move || {
            let frame = cycle.step();
            subtitle.set_text_content(Some(&frame.text));
            Some(frame.next_step_ms)
        },
        0,
    );

    *slot.borrow_mut() = Some(chain);
}

fn type_once(element: HtmlElement, text: String, char_delay_ms: u32) {
    let total = text.chars().count();
    if total == 0 {
        return;
    }

    element.set_text_content(Some(""));
    let mut shown = 0usize;

    dom::spawn_timer_chain(
        move || {
            shown += 1;
            element.set_text_content(Some(&typing::char_prefix(&text, shown)));
            (shown < total).then_some(char_delay_ms)
        },
        0,
    )
    .detach();
}

fn start_code_reveal() {
    let lines = dom::query_all(".code-line");
    if lines.is_empty() {
        return;
    }
    let Some(code_window) = dom::query_html(".code-window") else {
        return;
    };

    for line in lines.iter().cloned().filter_map(dom::as_html) {
        dom::set_style(&line, "opacity", "0");
        dom::set_style(&line, "transform", "translateX(-20px)");
    }

    dom::set_style(&code_window, "opacity", "0");
    dom::set_style(&code_window, "transform", "translateY(20px)");
    {
        let code_window = code_window.clone();
        dom::set_timeout(
            move || {
                dom::set_style(&code_window, "transition", "all 0.5s ease");
                dom::set_style(&code_window, "opacity", "1");
                dom::set_style(&code_window, "transform", "translateY(0)");
            },
            typing::CODE_WINDOW_REVEAL_MS,
        );
    }

    for (index, line) in lines.iter().cloned().filter_map(dom::as_html).enumerate() {
        dom::set_timeout(move || type_code_line(&line), typing::code_line_start_ms(index));
    }

    dom::set_timeout(show_compile_effect, typing::compile_start_ms(lines.len()));
}

fn type_code_line(line: &HtmlElement) {
    let Some(code_text) = dom::query_within(line, ".code-text").and_then(dom::as_html) else {
        return;
    };

    let source = code_text.inner_html();
    code_text.set_inner_html(CURSOR_HTML);

    dom::set_style(line, "transition", "all 0.3s ease");
    dom::set_style(line, "opacity", "1");
    dom::set_style(line, "transform", "translateX(0)");

    let chunks = typing::markup_chunks(&source);
    let total = chunks.len();
    let mut typed = String::new();
    let mut next = 0usize;
    let mut lingering = false;

    dom::spawn_timer_chain(
        move || {
            if lingering || total == 0 {
                code_text.set_inner_html(&typed);
                return None;
            }

            typed.push_str(&chunks[next]);
            next += 1;
            code_text.set_inner_html(&format!("{typed}{CURSOR_HTML}"));

            if next == total {
                lingering = true;
                Some(typing::CODE_CURSOR_LINGER_MS)
            } else {
                Some(typing::CODE_CHAR_MS)
            }
        },
        CODE_TYPE_START_DELAY_MS,
    )
    .detach();
}

fn show_compile_effect() {
    let Some(code_window) = dom::query_html(".code-window") else {
        return;
    };
    let Some(title) = dom::query_html(".window-title") else {
        return;
    };
    let Some(doc) = dom::document() else {
        return;
    };

    title.set_text_content(Some(COMPILING_TITLE));
    dom::set_style(&title, "color", "#ff6b6b");

    let Ok(overlay) = doc.create_element("div") else {
        return;
    };
    overlay.set_class_name("compilation-overlay");
    overlay.set_inner_html(
        "<div class=\"compilation-content\">\
         <div class=\"compilation-spinner\"></div>\
         <p>Compiling...</p>\
         <div class=\"compilation-progress\"><div class=\"progress-bar\"></div></div>\
         </div>",
    );
    let Some(overlay) = dom::as_html(overlay) else {
        return;
    };
    overlay.style().set_css_text(
        "position: absolute; top: 0; left: 0; width: 100%; height: 100%; \
         background: rgba(0, 0, 0, 0.95); display: flex; align-items: center; \
         justify-content: center; color: #00ff88; \
         font-family: 'JetBrains Mono', monospace; z-index: 10; opacity: 0; \
         transition: opacity 0.3s ease; border-radius: 8px;",
    );

    dom::set_style(&code_window, "position", "relative");
    let _ = code_window.append_child(&overlay);

    if let Some(content) =
        dom::query_within(&overlay, ".compilation-content").and_then(dom::as_html)
    {
        content.style().set_css_text("text-align: center;");
    }

    if let Some(spinner) =
        dom::query_within(&overlay, ".compilation-spinner").and_then(dom::as_html)
    {
        spinner.style().set_css_text(
            "width: 40px; height: 40px; border: 3px solid rgba(0, 255, 136, 0.3); \
             border-top: 3px solid #00ff88; border-radius: 50%; \
             animation: spin 1s linear infinite; margin: 0 auto 1rem;",
        );
    }

    if let Some(progress) =
        dom::query_within(&overlay, ".compilation-progress").and_then(dom::as_html)
    {
        progress.style().set_css_text(
            "width: 200px; height: 4px; background: rgba(0, 255, 136, 0.2); \
             border-radius: 2px; margin: 1rem auto 0; overflow: hidden;",
        );
    }

    let progress_bar = dom::query_within(&overlay, ".progress-bar").and_then(dom::as_html);
    if let Some(bar) = &progress_bar {
        bar.style().set_css_text(
            "width: 0%; height: 100%; background: linear-gradient(90deg, #00ff88, #00ccff); \
             border-radius: 2px; transition: width 2s ease;",
        );
    }

    {
        let overlay = overlay.clone();
        dom::set_timeout(
            move || dom::set_style(&overlay, "opacity", "1"),
            COMPILE_OVERLAY_FADE_MS,
        );
    }

    if let Some(bar) = progress_bar {
        dom::set_timeout(
            move || dom::set_style(&bar, "width", "100%"),
            COMPILE_PROGRESS_START_MS,
        );
    }

    dom::set_timeout(
        move || finish_compile(overlay, title, code_window),
        COMPILE_DURATION_MS,
    );
}

fn finish_compile(overlay: HtmlElement, title: HtmlElement, code_window: HtmlElement) {
    dom::set_style(&overlay, "opacity", "0");

    dom::set_timeout(
        move || {
            overlay.remove();
            title.set_text_content(Some(COMPILED_TITLE));
            dom::set_style(&title, "color", "#00ff88");
            dom::set_style(&code_window, "box-shadow", "0 0 30px rgba(0, 255, 136, 0.5)");

            dom::set_timeout(show_profile_image, PROFILE_REVEAL_DELAY_MS);

            dom::set_timeout(
                move || dom::set_style(&code_window, "box-shadow", ""),
                GLOW_CLEAR_MS,
            );
        },
        COMPILE_CLEANUP_MS,
    );
}

fn show_profile_image() {
    let Some(code_content) = dom::query_html(".code-content") else {
        return;
    };

    // captured so the bounded image phase can revert to the exact markup
    let original_markup = code_content.inner_html();

    code_content.set_inner_html(
        "<div class=\"profile-container\">\
         <img src=\"images/profile.jpeg\" alt=\"Awsam Raafat\" class=\"profile-image\">\
         <div class=\"profile-glow\"></div>\
         </div>",
    );

    let Some(container) =
        dom::query_within(&code_content, ".profile-container").and_then(dom::as_html)
    else {
        return;
    };
    container.style().set_css_text(
        "position: relative; width: 100%; height: 100%; display: flex; \
         align-items: center; justify-content: center; opacity: 0; \
         transition: all 0.5s ease;",
    );

    let image = dom::query_within(&code_content, ".profile-image").and_then(dom::as_html);
    if let Some(image) = &image {
        image.style().set_css_text(
            "width: 100%; height: 100%; border-radius: 8px; border: 3px solid #00ff88; \
             object-fit: cover; transition: all 0.3s ease;",
        );
    }

    let glow = dom::query_within(&code_content, ".profile-glow").and_then(dom::as_html);
    if let Some(glow) = &glow {
        glow.style().set_css_text(
            "position: absolute; top: -5px; left: -5px; right: -5px; bottom: -5px; \
             border-radius: 12px; \
             background: linear-gradient(45deg, #00ff88, #00ccff, #ff6b6b, #00ff88); \
             background-size: 400% 400%; animation: gradientShift 3s ease infinite; \
             z-index: -1; opacity: 0.7;",
        );
    }

    let visible = Rc::new(Cell::new(false));

    let show: Rc<dyn Fn()> = {
        let container = container.clone();
        let image = image.clone();
        let visible = visible.clone();
        Rc::new(move || {
            dom::set_style(&container, "opacity", "1");
            if let Some(image) = &image {
                dom::set_style(image, "transform", "scale(1.05)");
            }
            visible.set(true);
        })
    };

    let hide: Rc<dyn Fn()> = {
        let container = container.clone();
        let image = image.clone();
        let visible = visible.clone();
        Rc::new(move || {
            dom::set_style(&container, "opacity", "0");
            if let Some(image) = &image {
                dom::set_style(image, "transform", "scale(1)");
            }
            visible.set(false);
        })
    };

    if let (Some(image), Some(glow)) = (image.clone(), glow) {
        {
            let image = image.clone();
            let glow = glow.clone();
            let visible = visible.clone();
            dom::on_mouse_event(&image.clone(), "mouseenter", move |_| {
                if visible.get() {
                    dom::set_style(&image, "transform", "scale(1.1)");
                    dom::set_style(&glow, "opacity", "1");
                }
            });
        }
        {
            let hover_image = image.clone();
            let visible = visible.clone();
            dom::on_mouse_event(&image, "mouseleave", move |_| {
                if visible.get() {
                    dom::set_style(&hover_image, "transform", "scale(1.05)");
                    dom::set_style(&glow, "opacity", "0.7");
                }
            });
        }
    }

    let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    {
        let show = show.clone();
        let hide = hide.clone();
        let visible = visible.clone();
        let interval_id = interval_id.clone();
        dom::set_timeout(
            move || {
                show();
                let id = dom::raw_set_interval(
                    move || {
                        if visible.get() {
                            hide();
                        } else {
                            show();
                        }
                    },
                    PROFILE_TOGGLE_MS,
                );
                interval_id.set(id);
            },
            PROFILE_START_DELAY_MS,
        );
    }

    dom::set_timeout(
        move || {
            if let Some(id) = interval_id.take() {
                dom::clear_interval_id(id);
            }
            hide();
            dom::set_timeout(
                move || code_content.set_inner_html(&original_markup),
                PROFILE_RESTORE_DELAY_MS,
            );
        },
        PROFILE_TOTAL_MS,
    );
}
