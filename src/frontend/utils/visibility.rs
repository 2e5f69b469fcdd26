use leptos::{html::Div, prelude::*};

/// Load the comment section shortly before it scrolls into view.
pub const SECTION_ROOT_MARGIN: &str = "200px";
/// The load-more sentinel triggers closer to the viewport than the section.
pub const SENTINEL_ROOT_MARGIN: &str = "50px";

/// Monotonic activation flag, kept separate from the DOM observer so the
/// transition rules can be tested without a browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Activation {
    active: bool,
}

impl Activation {
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true only for the first intersecting report. Later reports,
    /// including scrolling back out of view, change nothing.
    pub fn intersect(&mut self, intersecting: bool) -> bool {
        if self.active || !intersecting {
            return false;
        }
        self.active = true;
        true
    }
}

/// Flips to true once `target` comes within `root_margin` of the viewport,
/// then permanently stops observing. Browsers without IntersectionObserver
/// fail open and activate immediately.
pub fn use_visibility_activation(target: NodeRef<Div>, root_margin: &str) -> Signal<bool> {
    let (active, set_active) = signal(false);

    #[cfg(feature = "ssr")]
    {
        let _ = (target, root_margin, set_active);
    }
    #[cfg(not(feature = "ssr"))]
    {
        use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

        if observer_supported() {
            let mut activation = Activation::default();
            use_intersection_observer_with_options(
                target,
                move |entries, observer| {
                    let intersecting = entries.iter().any(|e| e.is_intersecting());
                    if activation.intersect(intersecting) {
                        set_active.set(true);
                        observer.disconnect();
                    }
                },
                UseIntersectionObserverOptions::default()
                    .root_margin(root_margin.to_string())
                    .thresholds(vec![0.0]),
            );
        } else {
            set_active.set(true);
        }
    }

    active.into()
}

#[cfg(not(feature = "ssr"))]
fn observer_supported() -> bool {
    web_sys::window()
        .map(|w| w.get("IntersectionObserver").is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activation_is_monotonic() {
        let mut activation = Activation::default();
        assert!(!activation.is_active());

        // not intersecting yet
        assert!(!activation.intersect(false));
        assert!(!activation.is_active());

        assert!(activation.intersect(true));
        assert!(activation.is_active());

        // repeated reports after activation are no-ops
        assert!(!activation.intersect(true));
        assert!(!activation.intersect(false));
        assert!(activation.is_active());
    }
}
