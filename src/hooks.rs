use gloo_timers::callback::Timeout;
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::scroll::{self, BodyScroll};
use crate::tabs::{TabAction, TabSet, TAB_TRANSITION_MS};

/// Scrolls to the top on mount and names the browser tab.
#[hook]
pub fn use_page(title: &'static str) {
    use_title(config::page_title(title));
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (), // Only on mount
    );
}

/// Flips to true the first time `node` scrolls past `start` of the viewport, and stays there.
#[hook]
pub fn use_reveal(node: NodeRef, start: f64) -> bool {
    let revealed = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |(_, viewport_height)| {
                if !*revealed {
                    if let Some(element) = node.cast::<Element>() {
                        let top = element.get_bounding_client_rect().top();
                        if scroll::should_reveal(top, *viewport_height, start) {
                            revealed.set(true);
                        }
                    }
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }

    *revealed
}

/// Vertical offset in px for `node`, scrubbed by scroll position.
#[hook]
pub fn use_parallax(node: NodeRef, travel: f64) -> f64 {
    let offset = use_state(|| 0.0);
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |(_, viewport_height)| {
                if let Some(element) = node.cast::<Element>() {
                    let rect = element.get_bounding_client_rect();
                    offset.set(scroll::parallax_offset(
                        rect.top(),
                        rect.height(),
                        *viewport_height,
                        travel,
                    ));
                }
                || ()
            },
            (scroll_y, viewport_height),
        );
    }

    *offset
}

#[hook]
pub fn use_scroll_progress() -> f64 {
    let (_, scroll_y) = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let document_height = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|root| root.scroll_height() as f64)
        .unwrap_or(0.0);
    scroll::scroll_progress(scroll_y, document_height, viewport_height)
}

/// Locks page scrolling while `locked` is true. The lock is also released
/// when the calling component unmounts.
#[hook]
pub fn use_body_scroll_lock(locked: bool) {
    use_effect_with_deps(
        move |locked| {
            let guard = scroll::guard_for(*locked, BodyScroll);
            move || drop(guard)
        },
        locked,
    );
}

/// Tab strip state whose pending selection settles after the exit animation.
#[hook]
pub fn use_tabs(count: usize, initial: usize) -> UseReducerHandle<TabSet> {
    let tabs = use_reducer(move || TabSet::new(count, initial));
    let pending = tabs.pending();

    {
        let tabs = tabs.clone();
        use_effect_with_deps(
            move |pending| {
                // Dropping the Timeout cancels it, so a newer selection restarts the wait.
                let timeout = pending.map(|_| {
                    Timeout::new(TAB_TRANSITION_MS, move || tabs.dispatch(TabAction::Settle))
                });
                move || drop(timeout)
            },
            pending,
        );
    }

    tabs
}
