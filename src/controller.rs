use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::dom;
use crate::i18n::Lang;
use crate::mailer;
use crate::motion;
use crate::router::{self, SectionRouter};
use crate::showcase;
use crate::translator;

const MATRIX_GLYPHS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ123456789@#$%^&*()*&^%+-/~{[|`]}";
const MATRIX_FONT_SIZE: f64 = 10.0;
const MATRIX_FRAME_MS: u32 = 35;
const MATRIX_RESET_KEEP: f64 = 0.975;
const CARD_PRESS_MS: u32 = 150;

pub fn mount() {
    let lang = Rc::new(Cell::new(Lang::En));
    let sections = Rc::new(RefCell::new(SectionRouter::new()));
    let sequencer = showcase::new_sequencer_slot();

    setup_matrix_background();
    setup_navigation(&sections);
    setup_keyboard_navigation(&sections);
    setup_mobile_menu();
    setup_entrance_animations();
    setup_skills();
    setup_counters();
    setup_projects();
    setup_scroll_effects();
    setup_anchor_scrolling();
    setup_hover_effects();
    setup_particles();
    setup_mouse_effects();
    showcase::init(lang.clone(), &sequencer);
    translator::init(lang.clone(), sequencer);
    mailer::init(lang);
}

fn show_section(sections: &Rc<RefCell<SectionRouter>>, section_id: &str) {
    if !sections.borrow_mut().begin(section_id) {
        return;
    }

    for section in dom::query_all(".section") {
        dom::remove_class(&section, "active");
    }

    let target = dom::document().and_then(|doc| doc.get_element_by_id(section_id));
    let Some(target) = target else {
        sections.borrow_mut().finish();
        return;
    };

    dom::add_class(&target, "active");

    let sections = sections.clone();
    dom::set_timeout(
        move || {
            trigger_section_animations(&target);
            sections.borrow_mut().finish();
        },
        router::SECTION_SWITCH_DELAY_MS,
    );
}

fn trigger_section_animations(section: &Element) {
    let animated = dom::query_all_within(section, ".fade-in, .slide-in-left, .slide-in-right");
    for (index, element) in animated.into_iter().enumerate() {
        dom::set_timeout(
            move || dom::add_class(&element, "visible"),
            index as u32 * router::ENTRANCE_STAGGER_MS,
        );
    }
}

fn mark_active_nav(active: &Element) {
    for link in dom::query_all(".nav-link") {
        dom::remove_class(&link, "active");
    }
    dom::add_class(active, "active");
}

fn setup_navigation(sections: &Rc<RefCell<SectionRouter>>) {
    for link in dom::query_all(".nav-link") {
        let sections = sections.clone();
        let link_el = link.clone();
        dom::on_click(&link, move |event| {
            event.prevent_default();
            let Some(section_id) = link_el.get_attribute("data-section") else {
                return;
            };
            show_section(&sections, &section_id);
            mark_active_nav(&link_el);
        });
    }
}

fn setup_keyboard_navigation(sections: &Rc<RefCell<SectionRouter>>) {
    let Some(doc) = dom::document() else {
        return;
    };

    let sections = sections.clone();
    dom::on_keydown(&doc, move |event| {
        let delta = match event.key().as_str() {
            "ArrowUp" => -1,
            "ArrowDown" => 1,
            _ => return,
        };

        let target = sections.borrow().neighbor(delta);
        let Some(target) = target else {
            return;
        };

        event.prevent_default();
        show_section(&sections, target);
        if let Some(link) = dom::query(&format!("[data-section=\"{target}\"]")) {
            mark_active_nav(&link);
        }
    });
}

fn setup_mobile_menu() {
    let (Some(toggle), Some(links)) = (dom::query(".nav-toggle"), dom::query(".nav-links"))
    else {
        return;
    };

    let toggle_el = toggle.clone();
    dom::on_click(&toggle, move |_| {
        dom::toggle_class(&links, "active");
        dom::toggle_class(&toggle_el, "active");
    });
}

fn setup_entrance_animations() {
    for selector in [".skill-card", ".project-card", ".contact-card", ".text-block"] {
        for (index, element) in dom::query_all(selector).into_iter().enumerate() {
            dom::add_class(&element, "fade-in");
            if let Some(element) = dom::as_html(element) {
                dom::set_style(
                    &element,
                    "animation-delay",
                    &format!("{:.1}s", motion::fade_in_delay_secs(index)),
                );
            }
        }
    }

    dom::observe_intersections(
        dom::query_all(".fade-in, .slide-in-left, .slide-in-right"),
        0.1,
        Some("0px 0px -50px 0px"),
        false,
        |element| dom::add_class(element, "visible"),
    );
}

fn setup_skills() {
    let Some(skills_section) = dom::query("#skills") else {
        return;
    };

    dom::observe_intersections(vec![skills_section], 0.5, None, true, |_| animate_skill_bars());
}

fn animate_skill_bars() {
    for (index, bar) in dom::query_all(".skill-progress").into_iter().enumerate() {
        let Some(width) = bar.get_attribute("data-width") else {
            continue;
        };
        let Some(bar) = dom::as_html(bar) else {
            continue;
        };

        dom::set_timeout(
            move || dom::set_style(&bar, "width", &width),
            index as u32 * motion::SKILL_BAR_STAGGER_MS,
        );
    }
}

fn setup_counters() {
    let Some(hero) = dom::query("#home") else {
        return;
    };

    dom::observe_intersections(vec![hero], 0.5, None, true, |_| animate_counters());
}

fn animate_counters() {
    for counter_el in dom::query_all(".stat-number") {
        let Some(target) = counter_el
            .get_attribute("data-target")
            .and_then(|raw| raw.parse::<u64>().ok())
        else {
            continue;
        };

        let mut animation =
            motion::CounterAnimation::new(target, motion::COUNTER_DURATION_MS, motion::COUNTER_TICK_MS);
        let interval_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let id_cell = interval_id.clone();
        let id = dom::raw_set_interval(
            move || {
                let value = animation.advance();
                counter_el.set_text_content(Some(&value.to_string()));

                if animation.done() {
                    if let Some(id) = id_cell.take() {
                        dom::clear_interval_id(id);
                    }
                }
            },
            motion::COUNTER_TICK_MS,
        );
        interval_id.set(id);
    }
}

fn setup_projects() {
    for button in dom::query_all(".filter-btn") {
        let button_el = button.clone();
        dom::on_click(&button, move |_| {
            let Some(filter) = button_el.get_attribute("data-filter") else {
                return;
            };

            for other in dom::query_all(".filter-btn") {
                dom::remove_class(&other, "active");
            }
            dom::add_class(&button_el, "active");

            apply_project_filter(&filter);
        });
    }
}

fn apply_project_filter(filter: &str) {
    for card in dom::query_all(".project-card") {
        let category = card.get_attribute("data-category").unwrap_or_default();
        let shown = filter == "all" || category == filter;

        if let Some(card_html) = dom::as_html(card.clone()) {
            dom::set_style(&card_html, "display", if shown { "block" } else { "none" });
        }
        let _ = card.class_list().toggle_with_force("fade-in", shown);
    }
}

fn setup_scroll_effects() {
    let reduced = dom::prefers_reduced_motion();

    if !reduced {
        let parallax = dom::Debouncer::new(motion::PARALLAX_DEBOUNCE_MS, apply_parallax);
        dom::on_window_event("scroll", move || parallax.trigger());

        let glitch = dom::Debouncer::new(motion::GLITCH_DEBOUNCE_MS, trigger_glitch);
        dom::on_window_event("scroll", move || glitch.trigger());
    }

    let highlight = dom::Debouncer::new(motion::NAV_HIGHLIGHT_DEBOUNCE_MS, highlight_nav_for_scroll);
    dom::on_window_event("scroll", move || highlight.trigger());
}

fn scroll_offset() -> f64 {
    dom::win()
        .and_then(|win| win.page_y_offset().ok())
        .unwrap_or(0.0)
}

fn apply_parallax() {
    let scrolled = scroll_offset();

    for (index, particle) in dom::query_all(".particle").into_iter().enumerate() {
        if let Some(particle) = dom::as_html(particle) {
            dom::set_style(
                &particle,
                "transform",
                &format!("translateY({:.2}px)", motion::parallax_offset(scrolled, index)),
            );
        }
    }
}

fn highlight_nav_for_scroll() {
    let scroll_y = scroll_offset();

    let mut measured: Vec<(String, f64, f64)> = Vec::new();
    for section in dom::query_all(".section") {
        let Some(id) = section.get_attribute("id") else {
            continue;
        };
        let Some(html) = dom::as_html(section.clone()) else {
            continue;
        };
        measured.push((
            id,
            f64::from(html.offset_top()),
            f64::from(section.client_height()),
        ));
    }

    let sections: Vec<(&str, f64, f64)> = measured
        .iter()
        .map(|(id, top, height)| (id.as_str(), *top, *height))
        .collect();
    let current = motion::section_in_view(&sections, scroll_y);

    for link in dom::query_all(".nav-link") {
        dom::remove_class(&link, "active");
        if link.get_attribute("data-section").as_deref() == current {
            dom::add_class(&link, "active");
        }
    }
}

fn trigger_glitch() {
    for word in dom::query_all(".title-word").into_iter().filter_map(dom::as_html) {
        if motion::glitch_triggers(js_sys::Math::random()) {
            dom::set_style(&word, "animation", "glitch 0.3s ease-in-out");
            dom::set_timeout(
                move || dom::set_style(&word, "animation", ""),
                motion::GLITCH_ANIMATION_MS,
            );
        }
    }
}

fn setup_anchor_scrolling() {
    for anchor in dom::query_all("a[href^='#']") {
        let anchor_el = anchor.clone();
        dom::on_click(&anchor, move |event| {
            event.prevent_default();

            let section_id = anchor_el
                .get_attribute("href")
                .and_then(|href| href.strip_prefix('#').map(ToString::to_string))
                .filter(|id| !id.is_empty());
            let Some(section_id) = section_id else {
                return;
            };
            let Some(target) = dom::document().and_then(|doc| doc.get_element_by_id(&section_id))
            else {
                return;
            };

            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);

            if let Some(link) = dom::query(&format!("[data-section=\"{section_id}\"]")) {
                mark_active_nav(&link);
            }

            if let Some(links) = dom::query(".nav-links") {
                if dom::has_class(&links, "active") {
                    dom::remove_class(&links, "active");
                    if let Some(toggle) = dom::query(".nav-toggle") {
                        dom::remove_class(&toggle, "active");
                    }
                }
            }
        });
    }
}

fn setup_hover_effects() {
    for button in dom::query_all(".btn").into_iter().filter_map(dom::as_html) {
        {
            let button = button.clone();
            let lifted = button.clone();
            dom::on_mouse_event(&button, "mouseenter", move |_| {
                dom::set_style(&lifted, "transform", "translateY(-2px)")
            });
        }
        let rested = button.clone();
        dom::on_mouse_event(&button, "mouseleave", move |_| {
            dom::set_style(&rested, "transform", "translateY(0)")
        });
    }

    for card in dom::query_all(".project-card").into_iter().filter_map(dom::as_html) {
        let pressed = card.clone();
        dom::on_click(&card, move |_| {
            dom::set_style(&pressed, "transform", "scale(0.98)");
            let restore = pressed.clone();
            dom::set_timeout(
                move || dom::set_style(&restore, "transform", "scale(1)"),
                CARD_PRESS_MS,
            );
        });
    }
}

fn setup_particles() {
    if dom::prefers_reduced_motion() {
        return;
    }

    for particle in dom::query_all(".particle").into_iter().filter_map(dom::as_html) {
        dom::set_style(
            &particle,
            "left",
            &format!("{:.2}%", motion::particle_position_percent(js_sys::Math::random())),
        );
        dom::set_style(
            &particle,
            "top",
            &format!("{:.2}%", motion::particle_position_percent(js_sys::Math::random())),
        );
        dom::set_style(
            &particle,
            "animation-duration",
            &format!("{:.2}s", motion::particle_duration_secs(js_sys::Math::random())),
        );
    }
}

fn setup_mouse_effects() {
    if dom::prefers_reduced_motion() {
        return;
    }
    let Some(doc) = dom::document() else {
        return;
    };

    dom::on_mouse_event(&doc, "mousemove", move |event| {
        let Some(win) = dom::win() else {
            return;
        };
        let width = win
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(1.0)
            .max(1.0);
        let height = win
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(1.0)
            .max(1.0);

        let mouse_x = f64::from(event.client_x()) / width;
        let mouse_y = f64::from(event.client_y()) / height;

        for (index, particle) in dom::query_all(".particle").into_iter().enumerate() {
            if let Some(particle) = dom::as_html(particle) {
                let (x, y) = motion::mouse_drift(mouse_x, mouse_y, index);
                dom::set_style(
                    &particle,
                    "transform",
                    &format!("translate({x:.2}px, {y:.2}px)"),
                );
            }
        }
    });
}

fn setup_matrix_background() {
    if dom::prefers_reduced_motion() {
        return;
    }

    let Some(canvas) = dom::query("#matrix-canvas").and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
    else {
        return;
    };
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    size_canvas(&canvas);
    {
        let canvas = canvas.clone();
        dom::on_window_event("resize", move || size_canvas(&canvas));
    }

    let glyphs: Vec<char> = MATRIX_GLYPHS.chars().collect();
    let columns = (f64::from(canvas.width()) / MATRIX_FONT_SIZE) as usize;
    let mut drops = vec![1.0f64; columns.max(1)];

    let _ = dom::raw_set_interval(
        move || {
            context.set_fill_style_str("rgba(10, 10, 10, 0.04)");
            context.fill_rect(
                0.0,
                0.0,
                f64::from(canvas.width()),
                f64::from(canvas.height()),
            );

            context.set_fill_style_str("#00ff88");
            context.set_font(&format!("{MATRIX_FONT_SIZE}px monospace"));

            let bottom = f64::from(canvas.height());
            for (index, drop) in drops.iter_mut().enumerate() {
                let glyph = glyphs[(js_sys::Math::random() * glyphs.len() as f64) as usize];
                let _ = context.fill_text(
                    &glyph.to_string(),
                    index as f64 * MATRIX_FONT_SIZE,
                    *drop * MATRIX_FONT_SIZE,
                );

                if *drop * MATRIX_FONT_SIZE > bottom && js_sys::Math::random() > MATRIX_RESET_KEEP {
                    *drop = 0.0;
                }
                *drop += 1.0;
            }
        },
        MATRIX_FRAME_MS,
    );
}

fn size_canvas(canvas: &HtmlCanvasElement) {
    let Some(win) = dom::win() else {
        return;
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);

    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}
