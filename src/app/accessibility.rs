use leptos::prelude::*;

use crate::{
    preferences::{
        AccessibilityPreferences, FontSize, MemoryStore, Preference, PreferenceError,
        SystemPreferences, FONT_SIZE_KEY, HIGH_CONTRAST_QUERY, REDUCED_MOTION_QUERY,
    },
    theme::class_names,
};

/// The visitor's accessibility choices, shared with anything that animates.
#[derive(Clone, Copy)]
pub struct PreferencesContext(RwSignal<AccessibilityPreferences>);

impl PreferencesContext {
    pub fn get(&self) -> AccessibilityPreferences {
        self.0.get()
    }

    pub fn reduced_motion_untracked(&self) -> bool {
        self.0.with_untracked(|p| p.reduced_motion)
    }

    pub fn toggle(&self, pref: Preference) {
        self.0.update(|p| {
            let res = match local_storage() {
                Some(mut store) => p.toggle(pref, &mut store),
                None => p.toggle(pref, &mut MemoryStore::default()),
            };
            report(pref.key(), res.map(|v| v.to_string()));
            apply_to_document(p);
        });
    }

    pub fn set_font_size(&self, size: FontSize) {
        self.0.update(|p| {
            let res = match local_storage() {
                Some(mut store) => p.set_font_size(size, &mut store),
                None => p.set_font_size(size, &mut MemoryStore::default()),
            };
            report(FONT_SIZE_KEY, res.map(|_| size.to_string()));
            apply_to_document(p);
        });
    }
}

fn report(key: &str, res: Result<String, PreferenceError>) {
    match res {
        Ok(value) => log::info!("{key} set to {value}"),
        Err(e) => log::warn!("{e}"),
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    window().local_storage().ok().flatten()
}

fn system_matches(query: &str) -> bool {
    window()
        .match_media(query)
        .ok()
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

fn apply_to_document(prefs: &AccessibilityPreferences) {
    if let Some(mut root) = document().document_element() {
        prefs.apply(&mut root);
    }
}

/// Loads stored preferences once the page is running in the browser. The
/// server always renders the defaults.
pub fn provide_preferences_context() -> PreferencesContext {
    let prefs = RwSignal::new(AccessibilityPreferences::default());
    let ctx = PreferencesContext(prefs);
    provide_context(ctx);

    Effect::new(move |_| {
        let system = SystemPreferences {
            reduced_motion: system_matches(REDUCED_MOTION_QUERY),
            high_contrast: system_matches(HIGH_CONTRAST_QUERY),
        };
        let loaded = match local_storage() {
            Some(store) => AccessibilityPreferences::load(&store, system),
            None => AccessibilityPreferences::load(&MemoryStore::default(), system),
        };
        apply_to_document(&loaded);
        prefs.set(loaded);
    });

    ctx
}

#[component]
fn PreferenceSwitch(pref: Preference) -> impl IntoView {
    let ctx = expect_context::<PreferencesContext>();
    let on = move || ctx.get().get(pref);
    let id = pref.class_name();
    view! {
        <div class="flex items-center justify-between">
            <label for=id class="text-sm">
                {pref.label()}
            </label>
            <button
                type="button"
                id=id
                on:click=move |_| ctx.toggle(pref)
                class=move || {
                    class_names(
                        &[
                            "w-10 h-6 rounded-full relative transition-colors",
                            if on() { "bg-white" } else { "bg-gray-600" },
                        ],
                    )
                }
                aria-pressed=move || on().to_string()
            >
                <span class=move || {
                    class_names(
                        &[
                            "absolute top-1 w-4 h-4 rounded-full transition-transform",
                            if on() { "bg-black translate-x-5" } else { "bg-white translate-x-1" },
                        ],
                    )
                }></span>
            </button>
        </div>
    }
}

#[component]
pub fn AccessibilityControls() -> impl IntoView {
    let ctx = expect_context::<PreferencesContext>();
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="fixed bottom-8 right-8 z-50">
            <button
                type="button"
                on:click=move |_| set_is_open.update(|o| *o = !*o)
                class="w-10 h-10 rounded-full bg-black/20 backdrop-blur-md flex items-center justify-center text-white"
                aria-label="Accessibility options"
                aria-expanded=move || is_open.get().to_string()
            >
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width="24"
                    height="24"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    aria-hidden="true"
                >
                    <circle cx="12" cy="12" r="10" />
                    <path d="m4.93 4.93 4.24 4.24" />
                    <path d="m14.83 9.17 4.24-4.24" />
                    <path d="m14.83 14.83 4.24 4.24" />
                    <path d="m9.17 14.83-4.24 4.24" />
                    <circle cx="12" cy="12" r="4" />
                </svg>
            </button>
            <Show when=move || is_open.get()>
                <div class="absolute bottom-12 right-0 bg-black/20 backdrop-blur-md p-4 rounded-lg w-64 text-white">
                    <h2 class="text-lg font-medium mb-2">"Accessibility"</h2>
                    <div class="space-y-2">
                        <PreferenceSwitch pref=Preference::ReducedMotion />
                        <PreferenceSwitch pref=Preference::HighContrast />
                        <div class="flex items-center justify-between">
                            <span class="text-sm">"Font Size"</span>
                            <div class="flex gap-1" role="group" aria-label="Font size">
                                {FontSize::ALL
                                    .into_iter()
                                    .map(|size| {
                                        view! {
                                            <button
                                                type="button"
                                                on:click=move |_| ctx.set_font_size(size)
                                                class=move || {
                                                    if ctx.get().font_size == size {
                                                        "px-2 rounded bg-white text-black text-xs"
                                                    } else {
                                                        "px-2 rounded bg-gray-600 text-xs"
                                                    }
                                                }
                                                aria-pressed=move || (ctx.get().font_size == size).to_string()
                                            >
                                                {size.as_str()}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
