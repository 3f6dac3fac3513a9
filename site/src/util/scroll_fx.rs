//! Scroll and viewport effects bound to a view's lifetime.
//!
//! ARCHITECTURE
//! ============
//! Views mark elements declaratively (`.reveal`, `data-parallax`,
//! `data-parallax-page`, `data-scroll-progress`, `data-pin-panels`, `data-marquee`, `data-step`)
//! and call `use_scroll_fx` / `use_viewport_steps` with their root `NodeRef`.
//! On hydration the hooks attach an observer/listener handle to the root;
//! the handle is dropped in `on_cleanup`, and `Drop` disconnects observers
//! and removes listeners, so no callback outlives the view's elements.
//!
//! During server rendering the hooks do nothing.

use leptos::html;
use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
#[cfg(feature = "hydrate")]
use web_sys::{Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

#[cfg(feature = "hydrate")]
use crate::util::motion::{
    REVEAL_CLASS, REVEALED_CLASS, REVERSIBLE_CLASS, marquee_offset_percent, parallax_percent, pin_progress,
    scroll_progress, track_offset_percent, traversal_progress,
};

/// Jump (or glide, when `smooth`) to the top of the document.
pub fn scroll_to_top(smooth: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(if smooth {
                web_sys::ScrollBehavior::Smooth
            } else {
                web_sys::ScrollBehavior::Instant
            });
            window.scroll_to_with_scroll_to_options(&opts);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = smooth;
    }
}

/// Attach reveal/parallax/progress/pin/marquee effects under `root` for as
/// long as the calling component is mounted.
pub fn use_scroll_fx(root: NodeRef<html::Div>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<ScrollFx>);
        Effect::new(move || {
            let Some(el) = root.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }
            handle.set_value(ScrollFx::attach(&el));
        });
        on_cleanup(move || {
            handle.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = root;
    }
}

/// Report the index of the `data-step` element that scrolls into view.
pub fn use_viewport_steps(root: NodeRef<html::Div>, on_step: Callback<usize>) {
    #[cfg(feature = "hydrate")]
    {
        let handle = StoredValue::new_local(None::<ViewportSteps>);
        Effect::new(move || {
            let Some(el) = root.get() else {
                return;
            };
            if handle.with_value(Option::is_some) {
                return;
            }
            handle.set_value(ViewportSteps::attach(&el, move |step| on_step.run(step)));
        });
        on_cleanup(move || {
            handle.try_update_value(Option::take);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (root, on_step);
    }
}

// =============================================================================
// BROWSER HANDLES
// =============================================================================

#[cfg(feature = "hydrate")]
type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

#[cfg(feature = "hydrate")]
fn query_all(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

#[cfg(feature = "hydrate")]
fn set_transform(el: &Element, value: &str) {
    if let Some(el) = el.dyn_ref::<HtmlElement>() {
        let _ = el.style().set_property("transform", value);
    }
}

#[cfg(feature = "hydrate")]
fn viewport_height(window: &web_sys::Window) -> f64 {
    window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
}

#[cfg(feature = "hydrate")]
fn observer(threshold: f64, callback: &ObserverCallback) -> Option<IntersectionObserver> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()
}

#[cfg(feature = "hydrate")]
fn entries(list: &js_sys::Array) -> impl Iterator<Item = IntersectionObserverEntry> + '_ {
    list.iter().filter_map(|v| v.dyn_into::<IntersectionObserverEntry>().ok())
}

#[cfg(feature = "hydrate")]
struct ParallaxTarget {
    el: Element,
    weight: f64,
    /// Driven by whole-document scroll instead of the parent frame crossing the viewport.
    page_scoped: bool,
}

/// Scroll-linked targets collected once at attach time.
#[cfg(feature = "hydrate")]
struct ScrollTargets {
    parallax: Vec<ParallaxTarget>,
    progress_bars: Vec<Element>,
    pinned: Vec<(Element, Vec<Element>, usize)>,
    marquees: Vec<Element>,
}

#[cfg(feature = "hydrate")]
impl ScrollTargets {
    fn collect(root: &Element) -> Self {
        let parallax = query_all(root, "[data-parallax]")
            .into_iter()
            .filter_map(|el| {
                let weight = el.get_attribute("data-parallax")?.parse::<f64>().ok()?;
                let page_scoped = el.has_attribute("data-parallax-page");
                Some(ParallaxTarget { el, weight, page_scoped })
            })
            .collect();
        let pinned = query_all(root, "[data-pin-panels]")
            .into_iter()
            .map(|section| {
                let panels = section
                    .get_attribute("data-pin-panels")
                    .and_then(|v| v.parse::<usize>().ok())
                    .unwrap_or(1);
                let tracks = query_all(&section, "[data-pin-track]");
                (section, tracks, panels)
            })
            .collect();
        Self {
            parallax,
            progress_bars: query_all(root, "[data-scroll-progress]"),
            pinned,
            marquees: query_all(root, "[data-marquee]"),
        }
    }

    fn is_empty(&self) -> bool {
        self.parallax.is_empty() && self.progress_bars.is_empty() && self.pinned.is_empty() && self.marquees.is_empty()
    }

    fn apply(&self, window: &web_sys::Window) {
        let vh = viewport_height(window);
        let scroll_top = window.scroll_y().unwrap_or(0.0);
        let scroll_height = window
            .document()
            .and_then(|d| d.document_element())
            .map_or(0.0, |el| f64::from(el.scroll_height()));
        let page_progress = scroll_progress(scroll_top, scroll_height, vh);

        for target in &self.parallax {
            let progress = if target.page_scoped {
                page_progress
            } else {
                let frame = target.el.parent_element().unwrap_or_else(|| target.el.clone());
                let rect = frame.get_bounding_client_rect();
                traversal_progress(rect.top(), rect.height(), vh)
            };
            let pct = parallax_percent(progress, target.weight);
            set_transform(&target.el, &format!("translate3d(0, {pct:.3}%, 0)"));
        }

        for bar in &self.progress_bars {
            set_transform(bar, &format!("scaleX({page_progress:.4})"));
        }

        for (section, tracks, panels) in &self.pinned {
            let rect = section.get_bounding_client_rect();
            let offset = track_offset_percent(pin_progress(rect.top(), rect.height(), vh), *panels);
            for track in tracks {
                set_transform(track, &format!("translate3d({offset:.3}%, 0, 0)"));
            }
        }

        for marquee in &self.marquees {
            let frame = marquee.closest("section").ok().flatten().unwrap_or_else(|| marquee.clone());
            let rect = frame.get_bounding_client_rect();
            let offset = marquee_offset_percent(traversal_progress(rect.top(), rect.height(), vh));
            set_transform(marquee, &format!("translate3d({offset:.3}%, 0, 0)"));
        }
    }
}

/// Live observer + scroll listener for one mounted view.
#[cfg(feature = "hydrate")]
struct ScrollFx {
    reveal_observer: Option<IntersectionObserver>,
    _reveal_cb: ObserverCallback,
    scroll_cb: Option<Closure<dyn FnMut()>>,
}

#[cfg(feature = "hydrate")]
impl ScrollFx {
    fn attach(root: &Element) -> Option<Self> {
        let window = web_sys::window()?;

        let reveal_cb: ObserverCallback = Closure::wrap(Box::new(|list: js_sys::Array, _obs: IntersectionObserver| {
            for entry in entries(&list) {
                let target = entry.target();
                let classes = target.class_list();
                if entry.is_intersecting() {
                    let _ = classes.add_1(REVEALED_CLASS);
                } else if classes.contains(REVERSIBLE_CLASS) {
                    let _ = classes.remove_1(REVEALED_CLASS);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let reveals = query_all(root, &format!(".{REVEAL_CLASS}"));
        let reveal_observer = if reveals.is_empty() { None } else { observer(0.1, &reveal_cb) };
        if let Some(obs) = &reveal_observer {
            for el in &reveals {
                obs.observe(el);
            }
        }

        let targets = ScrollTargets::collect(root);
        let scroll_cb = if targets.is_empty() {
            None
        } else {
            targets.apply(&window);
            let win = window.clone();
            let cb = Closure::wrap(Box::new(move || targets.apply(&win)) as Box<dyn FnMut()>);
            let _ = window.add_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            let _ = window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
            Some(cb)
        };

        log::debug!("scroll fx attached: {} reveals, scroll listener {}", reveals.len(), scroll_cb.is_some());
        Some(Self { reveal_observer, _reveal_cb: reveal_cb, scroll_cb })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ScrollFx {
    fn drop(&mut self) {
        if let Some(obs) = self.reveal_observer.take() {
            obs.disconnect();
        }
        if let (Some(cb), Some(window)) = (self.scroll_cb.take(), web_sys::window()) {
            let _ = window.remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            let _ = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
        }
        log::debug!("scroll fx released");
    }
}

/// Observer reporting which `data-step` block is in view.
#[cfg(feature = "hydrate")]
struct ViewportSteps {
    observer: IntersectionObserver,
    _cb: ObserverCallback,
}

#[cfg(feature = "hydrate")]
impl ViewportSteps {
    fn attach(root: &Element, on_step: impl Fn(usize) + 'static) -> Option<Self> {
        let cb: ObserverCallback = Closure::wrap(Box::new(move |list: js_sys::Array, _obs: IntersectionObserver| {
            for entry in entries(&list).filter(IntersectionObserverEntry::is_intersecting) {
                if let Some(step) = entry.target().get_attribute("data-step").and_then(|v| v.parse::<usize>().ok()) {
                    on_step(step);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let observer = observer(0.5, &cb)?;
        for el in query_all(root, "[data-step]") {
            observer.observe(&el);
        }
        Some(Self { observer, _cb: cb })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ViewportSteps {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
