use leptos::prelude::*;

use super::era_context::EraContext;
use crate::era::Era;

/// Dot navigation along the bottom edge, one dot per era.
#[component]
pub fn EraNavigation() -> impl IntoView {
    let ctx = expect_context::<EraContext>();
    let era = ctx.era();

    view! {
        <nav
            class="fixed bottom-8 left-1/2 -translate-x-1/2 z-50 flex flex-col items-center gap-2"
            aria-label="Era navigation"
        >
            <div class="relative w-32 h-1 rounded-full bg-white/20 overflow-hidden" aria-hidden="true">
                <div
                    class="absolute top-0 h-full w-1/3 bg-white rounded-full transition-all duration-800 ease-custom"
                    style:left=move || era.get().progress_offset()
                ></div>
            </div>
            <div class="flex gap-4">
                {Era::ALL
                    .into_iter()
                    .map(|target| {
                        let is_current = move || era.get() == target;
                        view! {
                            <button
                                type="button"
                                on:click=move |_| {
                                    ctx.set_era(target);
                                }
                                class=move || {
                                    if is_current() {
                                        "w-4 h-4 rounded-full bg-white scale-125 transition-transform shadow-glow"
                                    } else {
                                        "w-4 h-4 rounded-full bg-white/40 hover:bg-white/70 transition-transform"
                                    }
                                }
                                aria-label=format!("Go to {}", target.label())
                                aria-current=move || is_current().then_some("true")
                                title=target.label()
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
        </nav>
    }
}
