use std::cell::Cell;

use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, HtmlElement};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    #[default]
    Hero,
    Features,
    Cta,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Cta => "cta",
        }
    }
}

/// Vertical extent of a tracked region in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RegionBounds {
    pub top: f64,
    pub height: f64,
}

impl RegionBounds {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Everything the tracker reads from the window on one scroll notification.
/// A region is `None` while its element is not mounted.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_y: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    pub hero: Option<RegionBounds>,
    pub features: Option<RegionBounds>,
    pub cta: Option<RegionBounds>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub scrolled: bool,
    pub active_section: Section,
    pub header_opacity: f64,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            scrolled: false,
            active_section: Section::Hero,
            header_opacity: 0.0,
        }
    }
}

impl ViewState {
    /// Pure derivation used on every scroll event. `previous` is kept when no
    /// measurable region claims the viewport midpoint.
    pub fn derive(previous: Section, snapshot: &ScrollSnapshot) -> Self {
        Self {
            scrolled: snapshot.scroll_y > config::SCROLL_THRESHOLD_PX,
            active_section: active_section(previous, snapshot),
            header_opacity: header_opacity(snapshot),
        }
    }
}

fn active_section(previous: Section, snapshot: &ScrollSnapshot) -> Section {
    let probe = snapshot.scroll_y + snapshot.viewport_height / 2.0;

    // First match wins, in document order.
    match (snapshot.hero, snapshot.features, snapshot.cta) {
        (Some(hero), _, _) if probe < hero.bottom() => Section::Hero,
        (_, Some(features), _) if probe < features.bottom() => Section::Features,
        (_, _, Some(_)) => Section::Cta,
        _ => previous,
    }
}

fn header_opacity(snapshot: &ScrollSnapshot) -> f64 {
    let scrollable = snapshot.document_height - snapshot.viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    let progress = snapshot.scroll_y / scrollable;
    (progress / config::HEADER_FADE_PROGRESS).clamp(0.0, 1.0)
}

fn measure(node: &NodeRef) -> Option<RegionBounds> {
    node.cast::<HtmlElement>().map(|element| RegionBounds {
        top: element.offset_top() as f64,
        height: element.offset_height() as f64,
    })
}

fn read_snapshot(
    window: &web_sys::Window,
    hero: &NodeRef,
    features: &NodeRef,
    cta: &NodeRef,
) -> ScrollSnapshot {
    let document_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or_default();

    ScrollSnapshot {
        scroll_y: window.scroll_y().unwrap_or_default(),
        viewport_height: window
            .inner_height()
            .ok()
            .and_then(|height| height.as_f64())
            .unwrap_or_default(),
        document_height,
        hero: measure(hero),
        features: measure(features),
        cta: measure(cta),
    }
}

fn root_style(window: &web_sys::Window) -> Option<web_sys::CssStyleDeclaration> {
    window
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
        .map(|root| root.style())
}

/// Tracks the window scroll position for as long as the calling component is
/// mounted. Smooth scrolling is switched on for the document while mounted and
/// the previous `scroll-behavior` is restored on unmount.
#[hook]
pub fn use_scroll_tracker(hero: NodeRef, features: NodeRef, cta: NodeRef) -> ViewState {
    let view_state = use_state(ViewState::default);

    {
        let view_state = view_state.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let mut teardown: Option<Box<dyn FnOnce()>> = None;

                if let Some(window) = window {
                    let previous_behavior = root_style(&window).map(|style| {
                        let previous = style.get_property_value("scroll-behavior").unwrap_or_default();
                        let _ = style.set_property("scroll-behavior", "smooth");
                        previous
                    });

                    let window_clone = window.clone();
                    let last = Cell::new(ViewState::default());
                    let update = move || {
                        let snapshot = read_snapshot(&window_clone, &hero, &features, &cta);
                        let next = ViewState::derive(last.get().active_section, &snapshot);
                        if next.active_section != last.get().active_section {
                            debug!("Active section changed to {}", next.active_section.as_str());
                        }
                        if next != last.get() {
                            last.set(next);
                            view_state.set(next);
                        }
                    };

                    // Initial check
                    update();
                    let scroll_callback = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);

                    let mut options = AddEventListenerOptions::new();
                    options.passive(true);
                    let _ = window.add_event_listener_with_callback_and_add_event_listener_options(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                        &options,
                    );

                    teardown = Some(Box::new(move || {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                        if let (Some(style), Some(previous)) = (root_style(&window), previous_behavior) {
                            let _ = style.set_property("scroll-behavior", &previous);
                        }
                    }));
                }

                move || {
                    if let Some(teardown) = teardown {
                        teardown();
                    }
                }
            },
            (),
        );
    }

    *view_state
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(top: f64, height: f64) -> Option<RegionBounds> {
        Some(RegionBounds { top, height })
    }

    fn page(scroll_y: f64) -> ScrollSnapshot {
        ScrollSnapshot {
            scroll_y,
            viewport_height: 800.0,
            document_height: 3000.0,
            hero: region(0.0, 1000.0),
            features: region(1000.0, 1200.0),
            cta: region(2200.0, 800.0),
        }
    }

    #[test]
    fn test_scrolled_threshold_boundary() {
        assert!(!ViewState::derive(Section::Hero, &page(0.0)).scrolled);
        assert!(!ViewState::derive(Section::Hero, &page(20.0)).scrolled);
        assert!(ViewState::derive(Section::Hero, &page(21.0)).scrolled);
        assert!(ViewState::derive(Section::Hero, &page(20.5)).scrolled);
    }

    #[test]
    fn test_active_section_follows_viewport_midpoint() {
        // probe = scroll_y + 400
        assert_eq!(ViewState::derive(Section::Hero, &page(0.0)).active_section, Section::Hero);
        assert_eq!(ViewState::derive(Section::Hero, &page(599.0)).active_section, Section::Hero);
        assert_eq!(ViewState::derive(Section::Hero, &page(600.0)).active_section, Section::Features);
        assert_eq!(ViewState::derive(Section::Hero, &page(1799.0)).active_section, Section::Features);
        assert_eq!(ViewState::derive(Section::Hero, &page(1800.0)).active_section, Section::Cta);
        assert_eq!(ViewState::derive(Section::Hero, &page(9000.0)).active_section, Section::Cta);
    }

    #[test]
    fn test_overlapping_regions_prefer_earlier_region() {
        let mut snapshot = page(0.0);
        snapshot.features = region(0.0, 2000.0);
        assert_eq!(ViewState::derive(Section::Cta, &snapshot).active_section, Section::Hero);
    }

    #[test]
    fn test_unmounted_regions_are_skipped() {
        let mut snapshot = page(0.0);
        snapshot.hero = None;
        assert_eq!(ViewState::derive(Section::Hero, &snapshot).active_section, Section::Features);

        snapshot.features = None;
        assert_eq!(ViewState::derive(Section::Hero, &snapshot).active_section, Section::Cta);
    }

    #[test]
    fn test_nothing_measurable_keeps_previous_section() {
        let snapshot = ScrollSnapshot {
            scroll_y: 5000.0,
            viewport_height: 800.0,
            ..ScrollSnapshot::default()
        };
        assert_eq!(ViewState::derive(Section::Features, &snapshot).active_section, Section::Features);
        assert_eq!(ViewState::derive(Section::Hero, &snapshot).active_section, Section::Hero);
    }

    #[test]
    fn test_past_features_without_cta_keeps_previous_section() {
        let mut snapshot = page(2500.0);
        snapshot.cta = None;
        assert_eq!(ViewState::derive(Section::Features, &snapshot).active_section, Section::Features);
    }

    #[test]
    fn test_header_opacity_ramps_over_first_five_percent() {
        // scrollable range is 2200px, so 5% is 110px
        assert_eq!(ViewState::derive(Section::Hero, &page(0.0)).header_opacity, 0.0);
        let halfway = ViewState::derive(Section::Hero, &page(55.0)).header_opacity;
        assert!((halfway - 0.5).abs() < 1e-9);
        assert_eq!(ViewState::derive(Section::Hero, &page(110.0)).header_opacity, 1.0);
        assert_eq!(ViewState::derive(Section::Hero, &page(2000.0)).header_opacity, 1.0);
    }

    #[test]
    fn test_header_opacity_on_unscrollable_page() {
        let snapshot = ScrollSnapshot {
            viewport_height: 800.0,
            document_height: 600.0,
            ..ScrollSnapshot::default()
        };
        assert_eq!(ViewState::derive(Section::Hero, &snapshot).header_opacity, 0.0);
    }

    #[test]
    fn test_default_view_state() {
        let state = ViewState::default();
        assert!(!state.scrolled);
        assert_eq!(state.active_section, Section::Hero);
        assert_eq!(state.active_section.as_str(), "hero");
    }
}
