use std::time::Duration;

use leptos::{ev::TouchEvent, prelude::*};
use leptos_use::{use_event_listener, use_media_query, use_window};

use super::era_context::EraContext;
use crate::{
    era::{is_boot_transition, Era, BOOT_SEQUENCE_DURATION},
    theme::class_names,
};

const MOBILE_QUERY: &str = "(max-width: 767px)";

fn first_touch_x(ev: &TouchEvent) -> Option<f64> {
    ev.touches().get(0).map(|t| t.client_x() as f64)
}

/// Holds the three eras side by side and slides between them. Arrow keys
/// and horizontal swipes move one era at a time.
#[component]
pub fn EraContainer(children: Children) -> impl IntoView {
    let ctx = expect_context::<EraContext>();
    let era = ctx.era();
    let is_mobile = use_media_query(MOBILE_QUERY);
    let touch_start = StoredValue::new(None::<f64>);

    _ = use_event_listener(use_window(), leptos::ev::keydown, move |ev| {
        match ev.key().as_str() {
            "ArrowLeft" => {
                ctx.previous();
            }
            "ArrowRight" => {
                ctx.next();
            }
            _ => {}
        }
    });

    let on_touch_start = move |ev: TouchEvent| {
        if ctx.is_transitioning() {
            return;
        }
        touch_start.set_value(first_touch_x(&ev));
    };

    let on_touch_move = move |ev: TouchEvent| {
        let Some(start) = touch_start.get_value() else {
            return;
        };
        if ctx.is_transitioning() {
            return;
        }
        let Some(end) = first_touch_x(&ev) else {
            return;
        };
        if ctx.swipe(start - end) {
            touch_start.set_value(None);
        }
    };

    view! {
        <div
            class="w-full h-full relative overflow-hidden era-container-root"
            style="width: 100vw; height: 100vh;"
            style:background-color=move || era.get().background_color()
        >
            <div
                class="flex flex-row absolute top-0 left-0 h-screen min-h-screen transition-transform duration-800 ease-custom motion-reduce:duration-150 motion-reduce:ease-linear"
                style:transform=move || era.get().translate(is_mobile.get())
                style:width=move || { if is_mobile.get() { "100%" } else { "300%" } }
                on:touchstart=on_touch_start
                on:touchmove=on_touch_move
                on:touchend=move |_| touch_start.set_value(None)
                aria-live="polite"
                aria-atomic="true"
            >
                {children()}
            </div>
            <BootSequence />
            <div class="sr-only" aria-live="polite" aria-atomic="true">
                {move || format!("Now viewing {} era", era.get())}
            </div>
        </div>
    }
}

/// One era's panel. Scrolls vertically on its own.
#[component]
pub fn EraSection(era: Era, #[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let ctx = expect_context::<EraContext>();
    let current = ctx.era();
    let base = class_names(&[
        "w-full h-full flex-shrink-0 flex-grow overflow-y-auto md:min-w-full p-8",
        "transition-all duration-300 ease-in-out",
        &format!("era era--{era}"),
        &class,
    ]);
    view! {
        <section
            class=move || {
                let visibility = if current.get() == era { "era--active block" } else { "hidden md:block" };
                class_names(&[&base, visibility])
            }
            data-era=era.as_str()
            data-section=era.label()
        >
            <div class="min-h-screen w-full">{children()}</div>
        </section>
    }
}

/// Progress bar shown while the retro desktop "boots" into the present.
#[component]
fn BootSequence() -> impl IntoView {
    let era = expect_context::<EraContext>().era();
    let (booting, set_booting) = signal(false);

    Effect::watch(
        move || era.get(),
        move |to, from, _| {
            if from.is_some_and(|from| is_boot_transition(*from, *to)) {
                log::debug!("Triggering boot sequence");
                set_booting(true);
                set_timeout(
                    move || set_booting(false),
                    BOOT_SEQUENCE_DURATION + Duration::from_millis(500),
                );
            }
        },
        false,
    );

    view! {
        <div
            class="fixed top-0 left-0 h-1 bg-present-accent1 z-50"
            style:width=move || { if booting.get() { "100%" } else { "0%" } }
            style:transition=move || {
                if booting.get() {
                    format!("width {}ms linear", BOOT_SEQUENCE_DURATION.as_millis())
                } else {
                    "none".to_string()
                }
            }
            id="boot-progress-bar"
            aria-hidden="true"
        ></div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_container_renders_wide_track_and_idle_boot_bar() {
        let owner = Owner::new();
        let html = owner.with(|| {
            provide_context(EraContext::new(Era::Past));
            view! {
                <EraContainer>
                    <EraSection era=Era::Past>"desktop"</EraSection>
                </EraContainer>
            }
            .to_html()
        });
        assert!(html.contains("width:300%"));
        assert!(html.contains("width:0%"));
        assert!(html.contains("Now viewing past era"));
        assert!(html.contains("data-section=\"Windows 95 Era\""));
    }
}
