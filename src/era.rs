use std::{fmt, str::FromStr, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long an era change blocks further navigation. Matches the CSS
/// transition on the era container.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(800);

/// Minimum horizontal travel, in pixels, before a touch counts as a swipe.
pub const SWIPE_THRESHOLD: f64 = 50.0;

/// Boot progress bar fill time when leaving the past for the present.
pub const BOOT_SEQUENCE_DURATION: Duration = Duration::from_millis(3000);

pub const ERA_QUERY_PARAM: &str = "era";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Era {
    Past,
    #[default]
    Present,
    Future,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown era: {0}")]
pub struct UnknownEra(pub String);

impl Era {
    pub const ALL: [Era; 3] = [Era::Past, Era::Present, Era::Future];

    pub fn next(self) -> Self {
        match self {
            Era::Past => Era::Present,
            Era::Present => Era::Future,
            Era::Future => Era::Past,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Era::Past => Era::Future,
            Era::Present => Era::Past,
            Era::Future => Era::Present,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Era::Past => "past",
            Era::Present => "present",
            Era::Future => "future",
        }
    }

    /// Reads the `era` query parameter. Anything unrecognized falls back to
    /// the default era.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn label(self) -> &'static str {
        match self {
            Era::Past => "Windows 95 Era",
            Era::Present => "Modern Era",
            Era::Future => "AI Integration Era",
        }
    }

    pub fn background_color(self) -> &'static str {
        match self {
            Era::Past => "#008080",
            Era::Present => "#2d3748",
            Era::Future => "#1a202c",
        }
    }

    /// Horizontal offset of the three-panel container. Mobile layouts stack
    /// the eras instead of sliding them.
    pub fn translate(self, is_mobile: bool) -> &'static str {
        if is_mobile {
            return "none";
        }
        match self {
            Era::Past => "translateX(0%)",
            Era::Present => "translateX(-100%)",
            Era::Future => "translateX(-200%)",
        }
    }

    pub fn progress_offset(self) -> &'static str {
        match self {
            Era::Past => "0%",
            Era::Present => "33.33%",
            Era::Future => "66.66%",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Era {
    type Err = UnknownEra;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "past" => Ok(Era::Past),
            "present" => Ok(Era::Present),
            "future" => Ok(Era::Future),
            other => Err(UnknownEra(other.to_string())),
        }
    }
}

/// Era a horizontal swipe leads to. `delta_x` is start minus end, so a
/// finger moving left (positive delta) advances.
pub fn swipe_target(current: Era, delta_x: f64) -> Option<Era> {
    if delta_x.abs() <= SWIPE_THRESHOLD {
        None
    } else if delta_x > 0.0 {
        Some(current.next())
    } else {
        Some(current.previous())
    }
}

/// Only the jump from the retro desktop into the present plays the boot bar.
pub fn is_boot_transition(from: Era, to: Era) -> bool {
    from == Era::Past && to == Era::Present
}

type ChangeCallback = Box<dyn Fn(Era) + Send + Sync>;

/// Owns the current era and the in-flight transition flag.
///
/// States are `{past, present, future} x {idle, transitioning}`; a change is
/// only accepted while idle. Clearing the flag is left to the caller, which
/// schedules [`EraController::finish_transition`] after
/// [`TRANSITION_DURATION`].
pub struct EraController {
    current: Era,
    transitioning: bool,
    on_change: Vec<ChangeCallback>,
}

impl EraController {
    pub fn new(initial: Era) -> Self {
        Self {
            current: initial,
            transitioning: false,
            on_change: Vec::new(),
        }
    }

    pub fn on_change(mut self, callback: impl Fn(Era) + Send + Sync + 'static) -> Self {
        self.on_change.push(Box::new(callback));
        self
    }

    pub fn current(&self) -> Era {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Returns whether the era actually changed.
    pub fn set_era(&mut self, target: Era) -> bool {
        if target == self.current || self.transitioning {
            return false;
        }
        self.transitioning = true;
        self.current = target;
        for cb in &self.on_change {
            cb(target);
        }
        true
    }

    pub fn finish_transition(&mut self) {
        self.transitioning = false;
    }

    pub fn next(&mut self) -> bool {
        self.set_era(self.current.next())
    }

    pub fn previous(&mut self) -> bool {
        self.set_era(self.current.previous())
    }

    pub fn swipe(&mut self, delta_x: f64) -> bool {
        match swipe_target(self.current, delta_x) {
            Some(target) => self.set_era(target),
            None => false,
        }
    }
}

impl fmt::Debug for EraController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EraController")
            .field("current", &self.current)
            .field("transitioning", &self.transitioning)
            .field("callbacks", &self.on_change.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    };

    fn counting_controller(initial: Era) -> (EraController, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let controller = EraController::new(initial).on_change(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (controller, calls)
    }

    #[test]
    fn test_next_cycles_back_after_three_steps() {
        for era in Era::ALL {
            assert_eq!(era.next().next().next(), era);
            assert_eq!(era.previous().previous().previous(), era);
            assert_eq!(era.next().previous(), era);
        }
        assert_eq!(Era::Future.next(), Era::Past);
        assert_eq!(Era::Past.previous(), Era::Future);
    }

    #[test]
    fn test_parse_and_query() {
        assert_eq!("past".parse::<Era>(), Ok(Era::Past));
        assert_eq!(" Future ".parse::<Era>(), Ok(Era::Future));
        assert!("medieval".parse::<Era>().is_err());

        assert_eq!(Era::from_query(Some("future")), Era::Future);
        assert_eq!(Era::from_query(Some("bogus")), Era::Present);
        assert_eq!(Era::from_query(None), Era::Present);
    }

    #[test]
    fn test_set_era_same_is_noop() {
        let (mut controller, calls) = counting_controller(Era::Present);
        assert!(!controller.set_era(Era::Present));
        assert!(!controller.is_transitioning());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_era_ignored_while_transitioning() {
        let (mut controller, calls) = counting_controller(Era::Present);
        assert!(controller.set_era(Era::Future));
        assert!(controller.is_transitioning());
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(!controller.set_era(Era::Past));
        assert!(!controller.next());
        assert_eq!(controller.current(), Era::Future);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        controller.finish_transition();
        assert!(controller.set_era(Era::Past));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_callback_receives_target() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let mut controller =
            EraController::new(Era::Past).on_change(move |era| sink.lock().unwrap().push(era));

        controller.next();
        controller.finish_transition();
        controller.previous();
        controller.finish_transition();
        controller.previous();

        assert_eq!(*seen.lock().unwrap(), vec![Era::Present, Era::Past, Era::Future]);
    }

    #[test]
    fn test_swipe_threshold() {
        assert_eq!(swipe_target(Era::Present, 40.0), None);
        assert_eq!(swipe_target(Era::Present, -40.0), None);
        assert_eq!(swipe_target(Era::Present, 50.0), None);
        assert_eq!(swipe_target(Era::Present, 60.0), Some(Era::Future));
        assert_eq!(swipe_target(Era::Present, -60.0), Some(Era::Past));

        let (mut controller, _) = counting_controller(Era::Present);
        assert!(!controller.swipe(40.0));
        assert_eq!(controller.current(), Era::Present);
        assert!(controller.swipe(60.0));
        assert_eq!(controller.current(), Era::Future);
    }

    #[test]
    fn test_boot_transition() {
        assert!(is_boot_transition(Era::Past, Era::Present));
        assert!(!is_boot_transition(Era::Present, Era::Past));
        assert!(!is_boot_transition(Era::Past, Era::Future));
    }

    #[test]
    fn test_layout_tables() {
        assert_eq!(Era::Present.translate(false), "translateX(-100%)");
        assert_eq!(Era::Future.translate(true), "none");
        assert_eq!(Era::Past.background_color(), "#008080");
        assert_eq!(Era::Future.progress_offset(), "66.66%");
        assert_eq!(Era::Future.to_string(), "future");
        assert_eq!(
            serde_json::to_string(&Era::Past).expect("era should serialize"),
            "\"past\""
        );
    }
}
