pub struct SectionTracker {
    sections: &'static [&'static str],
    active: usize,
}

impl SectionTracker {
    pub fn new(sections: &'static [&'static str]) -> Self {
        assert!(!sections.is_empty(), "section tracker requires at least one section id");

        Self {
            sections,
            active: 0,
        }
    }

    pub fn active(&self) -> &'static str {
        self.sections[self.active]
    }

    pub fn apply<'a>(&mut self, batch: impl IntoIterator<Item = (&'a str, bool)>) {
        for (id, intersecting) in batch {
            if !intersecting {
                continue;
            }

            if let Some(position) = self.sections.iter().position(|section| *section == id) {
                self.active = position;
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use js_sys::Array;
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{
        window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    };

    const ROOT_MARGIN: &str = "-40% 0px -55% 0px";
    const THRESHOLDS: [f64; 4] = [0.0, 0.2, 0.5, 1.0];

    pub struct SectionObserver {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array)>,
    }

    impl SectionObserver {
        pub fn register(
            sections: &'static [&'static str],
            mut on_batch: impl FnMut(Vec<(String, bool)>) + 'static,
        ) -> Option<Self> {
            let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .map(|entry| (entry.target().id(), entry.is_intersecting()))
                    .collect();
                on_batch(batch);
            });

            let options = IntersectionObserverInit::new();
            options.set_root_margin(ROOT_MARGIN);
            let thresholds = THRESHOLDS
                .iter()
                .copied()
                .map(JsValue::from)
                .collect::<Array>();
            options.set_threshold(&JsValue::from(thresholds));

            let observer = IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;

            let document = window()?.document()?;
            for id in sections {
                if let Some(region) = document.get_element_by_id(id) {
                    observer.observe(&region);
                }
            }

            Some(Self {
                observer,
                _callback: callback,
            })
        }
    }

    impl Drop for SectionObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::SectionObserver;

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: &[&str] = &["hero", "about", "contact"];

    #[test]
    fn defaults_to_first_section_before_any_observation() {
        let tracker = SectionTracker::new(SECTIONS);

        assert_eq!(tracker.active(), "hero");
    }

    #[test]
    fn intersecting_region_becomes_active() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.apply([("about", true)]);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn last_intersecting_region_wins_within_a_batch() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.apply([("about", true), ("contact", true)]);
        assert_eq!(tracker.active(), "contact");
    }

    #[test]
    fn non_intersecting_regions_leave_the_active_id_untouched() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.apply([("about", true)]);
        tracker.apply([("about", false), ("contact", false)]);
        assert_eq!(tracker.active(), "about");
    }

    #[test]
    fn unknown_region_ids_are_ignored() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.apply([("sidebar", true)]);
        assert_eq!(tracker.active(), "hero");
    }

    #[test]
    fn no_observation_ever_firing_keeps_the_default() {
        let mut tracker = SectionTracker::new(SECTIONS);

        tracker.apply(std::iter::empty());
        assert_eq!(tracker.active(), "hero");
    }

    #[test]
    #[should_panic(expected = "at least one section")]
    fn empty_section_list_is_rejected_at_construction() {
        SectionTracker::new(&[]);
    }
}
