use leptos::prelude::*;
use leptos_use::{use_event_listener_with_options, use_window, UseEventListenerOptions};
use wasm_bindgen::JsCast;

use super::era_context::EraContext;
use crate::scroll::{active_section, scroll_progress, SectionBounds};

/// Sections that are at least partly inside the viewport horizontally. Eras
/// slid off to the side don't compete for the midpoint.
fn visible_sections() -> Vec<SectionBounds> {
    let Ok(nodes) = document().query_selector_all("[data-section]") else {
        return Vec::new();
    };
    let width = window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(f64::MAX);
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
        .filter_map(|el| {
            let rect = el.get_bounding_client_rect();
            if rect.right() <= 0.0 || rect.left() >= width {
                return None;
            }
            Some(SectionBounds {
                name: el.get_attribute("data-section").unwrap_or_default(),
                era: el.get_attribute("data-era").and_then(|e| e.parse().ok()),
                top: rect.top(),
                bottom: rect.bottom(),
            })
        })
        .collect()
}

/// Vertical bar tracking how far the visitor has scrolled, plus the name of
/// the section under the viewport midpoint.
#[component]
pub fn ScrollIndicator() -> impl IntoView {
    let ctx = expect_context::<EraContext>();
    let (progress, set_progress) = signal(0.0_f64);
    let (active, set_active) = signal(String::new());

    let handle_scroll = move |target: Option<web_sys::Element>| {
        let Some(el) = target.or_else(|| document().document_element()) else {
            return;
        };
        let client_height = el.client_height() as f64;
        set_progress(scroll_progress(
            el.scroll_top() as f64,
            el.scroll_height() as f64,
            client_height,
        ));

        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or(client_height);
        let sections = visible_sections();
        if let Some(section) = active_section(&sections, viewport_height) {
            if active.get_untracked() != section.name {
                set_active(section.name.clone());
            }
            if let Some(era) = section.era {
                ctx.set_era(era);
            }
        }
    };

    // Scroll doesn't bubble, so listen in the capture phase to see the era
    // panels scrolling as well as the document.
    _ = use_event_listener_with_options(
        use_window(),
        leptos::ev::scroll,
        move |ev| {
            let target = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok());
            handle_scroll(target);
        },
        UseEventListenerOptions::default().passive(true).capture(true),
    );

    Effect::new(move |_| handle_scroll(None));

    view! {
        <div
            class="fixed right-4 top-1/2 transform -translate-y-1/2 h-1/3 w-1.5 rounded-full bg-white/20 hidden md:block z-50 backdrop-blur-sm"
            role="progressbar"
            aria-valuenow=move || format!("{:.0}", progress.get())
            aria-valuemin="0"
            aria-valuemax="100"
            aria-label="Page scroll progress"
            tabindex="0"
        >
            <div
                class="bg-white rounded-full w-full transition-all duration-200 ease-out shadow-glow"
                style:height=move || format!("{}%", progress.get())
                aria-hidden="true"
            ></div>
            <Show when=move || !active.get().is_empty()>
                <div
                    class="absolute -left-8 top-1/2 transform -translate-y-1/2 text-xs text-white/80 whitespace-nowrap"
                    style:opacity=move || { if progress.get() > 5.0 { "1" } else { "0" } }
                    style:transition="opacity 0.3s ease"
                >
                    {move || active.get()}
                </div>
            </Show>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::era::Era;

    #[test]
    fn test_renders_empty_progressbar() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(EraContext::new(Era::Present));
            view! { <ScrollIndicator /> }.to_html()
        });
        assert!(html.contains("role=\"progressbar\""));
        assert!(html.contains("aria-valuenow=\"0\""));
        assert!(html.contains("height:0%"));
    }
}
