//! Fade-out page transition before a full navigation.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use std::rc::Rc;
use std::time::Duration;

use super::timing::Timers;
use crate::platform::Navigator;

pub const TRANSITION_DELAY: Duration = Duration::from_millis(300);

/// Fade the page body, then navigate to `target` once the fade has run.
pub fn page_transition(target: &str, timers: &dyn Timers, navigator: Rc<dyn Navigator>) {
    apply_fade_out();
    let target = target.to_owned();
    timers.set_timeout(TRANSITION_DELAY, Box::new(move || navigator.redirect(&target)));
}

fn apply_fade_out() {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let _ = style.set_property("opacity", "0.8");
        let _ = style.set_property("transform", "scale(0.98)");
        let _ = style.set_property("transition", "all 0.3s ease");
    }
}
