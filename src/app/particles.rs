use leptos::{html, prelude::*};
use leptos_use::{use_debounce_fn, use_event_listener, use_window};
use wasm_bindgen::JsCast;

use super::{accessibility::PreferencesContext, era_context::EraContext};
use crate::{
    era::Era,
    particles::{density_for_width, ParticleField, PARTICLE_ACTIVE_DURATION},
};

fn viewport() -> (f64, f64) {
    let w = window();
    let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (width, height)
}

fn context_2d(canvas: &web_sys::HtmlCanvasElement) -> Option<web_sys::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<web_sys::CanvasRenderingContext2d>()
        .ok()
}

fn draw(canvas: &web_sys::HtmlCanvasElement, field: &ParticleField) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };
    let (w, h) = field.size();
    ctx.clear_rect(0.0, 0.0, w, h);
    for p in field.particles().iter().filter(|p| p.active) {
        ctx.begin_path();
        _ = ctx.arc(p.x, p.y, p.radius, 0.0, std::f64::consts::TAU);
        ctx.set_fill_style_str(p.color);
        ctx.fill();
    }
}

/// Drives one animation frame and reschedules itself until every particle
/// has been switched off.
fn run_frame(
    canvas_ref: NodeRef<html::Canvas>,
    field: StoredValue<Option<ParticleField>>,
    running: StoredValue<bool>,
) {
    let keep_going = field
        .try_update_value(|f| {
            let Some(f) = f.as_mut() else {
                return false;
            };
            let more = f.step();
            if let Some(canvas) = canvas_ref.get_untracked() {
                draw(&canvas, f);
            }
            more
        })
        .unwrap_or(false);
    if keep_going {
        request_animation_frame(move || run_frame(canvas_ref, field, running));
    } else {
        running.set_value(false);
    }
}

/// Full-screen canvas that bursts into drifting particles whenever the
/// future era comes into view.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let era = expect_context::<EraContext>().era();
    let prefs = expect_context::<PreferencesContext>();
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<ParticleField>);
    let running = StoredValue::new(false);

    let rebuild = move || {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        let (width, height) = viewport();
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
        let was_active = field.with_value(|f| f.as_ref().is_some_and(ParticleField::any_active));
        field.update_value(|f| match f {
            Some(f) => f.resize(width, height, js_sys::Math::random),
            None => {
                *f = Some(ParticleField::new(
                    width,
                    height,
                    density_for_width(width),
                    js_sys::Math::random,
                ))
            }
        });
        if was_active {
            field.update_value(|f| f.iter_mut().for_each(ParticleField::activate));
        }
    };

    Effect::new(move |_| {
        if canvas_ref.get().is_some() {
            rebuild();
        }
    });

    let on_resize = use_debounce_fn(rebuild, 250.0);
    _ = use_event_listener(use_window(), leptos::ev::resize, move |_| {
        on_resize();
    });

    Effect::watch(
        move || era.get(),
        move |era, _, _| {
            if *era != Era::Future || prefs.reduced_motion_untracked() {
                return;
            }
            log::debug!("Triggering particle transition");
            field.update_value(|f| f.iter_mut().for_each(ParticleField::activate));
            if !running.get_value() {
                running.set_value(true);
                request_animation_frame(move || run_frame(canvas_ref, field, running));
            }
            set_timeout(
                move || field.update_value(|f| f.iter_mut().for_each(ParticleField::deactivate)),
                PARTICLE_ACTIVE_DURATION,
            );
        },
        true,
    );

    view! {
        <canvas
            node_ref=canvas_ref
            id="particles-canvas"
            class="fixed inset-0 pointer-events-none z-40"
            aria-hidden="true"
        ></canvas>
    }
}
