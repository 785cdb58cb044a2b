use leptos::{either::EitherOf3, prelude::*};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;

use super::era_context::EraContext;
use crate::{
    desktop::{Desktop, DesktopWindow, StartMenuAction, DESKTOP_WINDOWS},
    era::Era,
    theme::class_names,
};

fn window_body(name: &str) -> impl IntoView {
    match name {
        "about" => EitherOf3::A(view! {
            <p class="past-body">
                "Twenty-five years of building software, from shareware floppies to language models. "
                "Double-click around; everything here still runs on 16 colors."
            </p>
        }),
        "projects" => EitherOf3::B(view! {
            <p class="past-body">
                "Projects live in the present. Pick "<strong>"Next Era"</strong>" from the Start menu to see them."
            </p>
        }),
        _ => EitherOf3::C(view! {
            <p class="past-body">"Dial-up is slow. Email is faster: "<code class="past-code">"hello@example.com"</code></p>
        }),
    }
}

#[component]
fn DesktopIcon(window: DesktopWindow, desktop: RwSignal<Desktop>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="desktop-icon flex flex-col items-center w-20 text-white focus:bg-past-accent1/60"
            on:dblclick=move |_| {
                log::debug!("Opened window: {}", window.name);
                desktop.update(|d| d.open_window(window.name));
            }
            aria-label=format!("Open {}", window.title)
        >
            <span class="text-3xl" aria-hidden="true">
                {window.icon}
            </span>
            <span class="text-xs past-body">{window.title}</span>
        </button>
    }
}

#[component]
fn RetroWindow(window: DesktopWindow, desktop: RwSignal<Desktop>) -> impl IntoView {
    view! {
        <Show when=move || desktop.with(|d| d.is_active(window.name))>
            <div
                class="window window--active absolute top-16 left-1/4 w-1/2 bg-past-secondary border-2 border-white shadow-lg"
                data-window=window.name
                role="dialog"
                aria-label=window.title
            >
                <div class="flex items-center justify-between bg-[#000080] text-white px-2 py-1">
                    <span class="past-heading text-sm">{window.title}</span>
                    <div class="flex gap-1">
                        <button
                            type="button"
                            class="window__control--minimize w-5 h-5 bg-past-secondary text-black text-xs"
                            on:click=move |_| desktop.update(|d| d.minimize_window(window.name))
                            aria-label="Minimize"
                        >
                            "_"
                        </button>
                        <button
                            type="button"
                            class="window__control--close w-5 h-5 bg-past-secondary text-black text-xs"
                            on:click=move |_| desktop.update(|d| d.close_window(window.name))
                            aria-label="Close"
                        >
                            "×"
                        </button>
                    </div>
                </div>
                <div class="p-4 text-black">{window_body(window.name)}</div>
            </div>
        </Show>
    }
}

/// The past era: a Windows 95 style desktop with icons, windows and a
/// taskbar.
#[component]
pub fn RetroDesktop() -> impl IntoView {
    let ctx = expect_context::<EraContext>();
    let desktop = RwSignal::new(Desktop::default());

    // clicking anywhere else closes the start menu
    _ = use_event_listener(use_document(), leptos::ev::click, move |ev| {
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.closest(".start-button, .start-menu").ok().flatten())
            .is_some();
        if !inside && desktop.with_untracked(Desktop::is_start_menu_open) {
            desktop.update(Desktop::close_start_menu);
        }
    });

    let run = move |action: StartMenuAction| {
        let mut next_era = false;
        desktop.update(|d| next_era = d.run(action));
        if next_era {
            ctx.set_era(Era::Present);
        }
    };

    view! {
        <div class="relative min-h-screen font-ms-sans">
            <div class="grid grid-cols-1 gap-6 p-4 w-24">
                {DESKTOP_WINDOWS
                    .into_iter()
                    .map(|window| view! { <DesktopIcon window=window desktop=desktop /> })
                    .collect_view()}
            </div>
            {DESKTOP_WINDOWS
                .into_iter()
                .map(|window| view! { <RetroWindow window=window desktop=desktop /> })
                .collect_view()}
            <Show when=move || desktop.with(Desktop::is_start_menu_open)>
                <ul class="start-menu start-menu--active absolute bottom-10 left-0 w-56 bg-past-secondary border-2 border-white text-black shadow-lg">
                    {DESKTOP_WINDOWS
                        .into_iter()
                        .map(|window| {
                            view! {
                                <li>
                                    <button
                                        type="button"
                                        class="start-menu__item w-full text-left px-4 py-2 hover:bg-[#000080] hover:text-white"
                                        on:click=move |_| run(StartMenuAction::Open(window.name))
                                    >
                                        {window.icon}
                                        " "
                                        {window.title}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                    <li class="border-t border-gray-500">
                        <button
                            type="button"
                            class="start-menu__item w-full text-left px-4 py-2 hover:bg-[#000080] hover:text-white"
                            on:click=move |_| run(StartMenuAction::NextEra)
                        >
                            "⏩ Next Era"
                        </button>
                    </li>
                </ul>
            </Show>
            <div class="taskbar absolute bottom-0 left-0 right-0 h-10 flex items-center gap-2 px-1 bg-past-secondary border-t-2 border-white">
                <button
                    type="button"
                    class=move || {
                        class_names(
                            &[
                                "start-button px-3 h-8 font-bold text-black border-2",
                                if desktop.with(Desktop::is_start_menu_open) {
                                    "start-button--active border-gray-700"
                                } else {
                                    "border-white"
                                },
                            ],
                        )
                    }
                    on:click=move |_| desktop.update(Desktop::toggle_start_menu)
                    aria-expanded=move || desktop.with(Desktop::is_start_menu_open).to_string()
                >
                    "Start"
                </button>
                {move || {
                    desktop
                        .with(|d| d.tasks().collect::<Vec<_>>())
                        .into_iter()
                        .filter_map(|name| DESKTOP_WINDOWS.iter().find(|w| w.name == name).copied())
                        .map(|window| {
                            view! {
                                <button
                                    type="button"
                                    class=move || {
                                        if desktop.with(|d| d.is_active(window.name)) {
                                            "taskbar__task taskbar__task--active px-3 h-8 text-xs text-black border-2 border-gray-700"
                                        } else {
                                            "taskbar__task px-3 h-8 text-xs text-black border-2 border-white"
                                        }
                                    }
                                    on:click=move |_| desktop.update(|d| d.toggle_window(window.name))
                                >
                                    {window.title}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_window_bodies_render() {
        let about = window_body("about").to_html();
        assert!(about.contains("shareware floppies"));
        let projects = window_body("projects").to_html();
        assert!(projects.contains("<strong>Next Era</strong>"));
        let contact = window_body("contact").to_html();
        assert!(contact.contains("hello@example.com"));
    }
}
