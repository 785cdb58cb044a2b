use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use leptos_router::{
    hooks::{use_location, use_navigate},
    params::ParamsMap,
    NavigateOptions,
};

use crate::era::{swipe_target, Era, EraController, ERA_QUERY_PARAM, TRANSITION_DURATION};

/// Shared handle on the current era. Provided once under the router and
/// pulled out with `expect_context::<EraContext>()`.
#[derive(Clone, Copy)]
pub struct EraContext {
    controller: StoredValue<Arc<Mutex<EraController>>>,
    current: RwSignal<Era>,
}

impl EraContext {
    pub fn new(initial: Era) -> Self {
        let current = RwSignal::new(initial);
        let controller = EraController::new(initial).on_change(move |era| {
            log::info!("Era changed to: {era}");
            current.set(era);
        });
        Self {
            controller: StoredValue::new(Arc::new(Mutex::new(controller))),
            current,
        }
    }

    pub fn era(&self) -> ReadSignal<Era> {
        self.current.read_only()
    }

    fn with_controller<T>(&self, f: impl FnOnce(&mut EraController) -> T) -> T {
        self.controller.with_value(|c| {
            let mut c = c.lock().expect("should be able to lock era controller");
            f(&mut c)
        })
    }

    pub fn is_transitioning(&self) -> bool {
        self.with_controller(|c| c.is_transitioning())
    }

    /// Runs a controller operation and, when the era changed, schedules the
    /// end of the transition.
    fn transition(&self, f: impl FnOnce(&mut EraController) -> bool) -> bool {
        let changed = self.with_controller(f);
        if changed {
            let this = *self;
            set_timeout(
                move || this.with_controller(EraController::finish_transition),
                TRANSITION_DURATION,
            );
        }
        changed
    }

    /// Switches eras unless `target` is current or a transition is running.
    pub fn set_era(&self, target: Era) -> bool {
        self.transition(|c| c.set_era(target))
    }

    pub fn next(&self) -> bool {
        self.transition(EraController::next)
    }

    pub fn previous(&self) -> bool {
        self.transition(EraController::previous)
    }

    /// Returns whether the gesture was long enough to count, whether or not
    /// the era could change.
    pub fn swipe(&self, delta_x: f64) -> bool {
        if swipe_target(self.current.get_untracked(), delta_x).is_none() {
            return false;
        }
        self.transition(|c| c.swipe(delta_x));
        true
    }
}

/// `query` with the era parameter pointing at `era`. Other parameters keep
/// their place.
pub fn era_query(query: &ParamsMap, era: Era) -> String {
    let mut query = query.clone();
    query.replace(ERA_QUERY_PARAM, era.to_string());
    query.to_query_string()
}

/// Seeds the era from `?era=` and keeps the query in sync afterwards.
/// Navigation replaces the history entry instead of pushing one.
pub fn provide_era_context() -> EraContext {
    let location = use_location();
    let navigate = use_navigate();
    let initial = location
        .query
        .with_untracked(|q| Era::from_query(q.get_str(ERA_QUERY_PARAM)));
    let ctx = EraContext::new(initial);
    provide_context(ctx);

    Effect::watch(
        move || ctx.current.get(),
        move |era, _, _| {
            let query = location.query.with_untracked(|q| era_query(q, *era));
            let url = format!("{}{query}", location.pathname.get_untracked());
            navigate(
                &url,
                NavigateOptions {
                    replace: true,
                    scroll: false,
                    ..Default::default()
                },
            );
        },
        false,
    );

    ctx
}

#[component]
pub fn EraProvider(children: Children) -> impl IntoView {
    provide_era_context();
    children()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_era_query_replaces_in_place() {
        let empty = ParamsMap::new();
        assert_eq!(era_query(&empty, Era::Future), "?era=future");

        let query = ParamsMap::from_iter([("ref", "home"), ("era", "past"), ("x", "1")]);
        assert_eq!(era_query(&query, Era::Future), "?ref=home&era=future&x=1");
    }

    #[test]
    fn test_era_query_keeps_similar_keys() {
        let query = ParamsMap::from_iter([("eras", "2")]);
        assert_eq!(era_query(&query, Era::Past), "?eras=2&era=past");
    }

    #[test]
    fn test_short_swipe_leaves_context_alone() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = EraContext::new(Era::Past);
            assert!(!ctx.swipe(40.0));
            assert!(!ctx.swipe(-50.0));
            assert!(!ctx.is_transitioning());
            assert_eq!(ctx.era().get_untracked(), Era::Past);
        });
    }

    #[test]
    fn test_era_query_escapes_other_values() {
        let query = ParamsMap::from_iter([("q", "a b&c")]);
        assert_eq!(era_query(&query, Era::Present), "?q=a%20b%26c&era=present");
    }
}
