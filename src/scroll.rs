use log::warn;

/// True once an element's top edge has crossed `start` of the viewport
/// height, measured from the top ("top 85%" is `start = 0.85`).
pub fn should_reveal(top: f64, viewport_height: f64, start: f64) -> bool {
    top <= viewport_height * start
}

/// 0.0 while the element's top sits at the viewport bottom, 1.0 once its
/// bottom has passed the viewport top.
pub fn parallax_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let span = viewport_height + height;
    if span <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / span).clamp(0.0, 1.0)
}

pub fn parallax_offset(top: f64, height: f64, viewport_height: f64, travel: f64) -> f64 {
    parallax_progress(top, height, viewport_height) * travel
}

/// Fraction of the page scrolled so far; 0.0 when the page can't scroll.
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

/// Maps `value` from `from` onto `to`, clamped to the ends of `to`.
pub fn interpolate(value: f64, from: (f64, f64), to: (f64, f64)) -> f64 {
    let width = from.1 - from.0;
    if width == 0.0 {
        return to.0;
    }
    let t = ((value - from.0) / width).clamp(0.0, 1.0);
    to.0 + (to.1 - to.0) * t
}

/// Element box in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Rotation in degrees `(about x, about y)` for a card under the pointer.
/// The pointer offset from the centre, as a fraction of the box in
/// `[-0.5, 0.5]`, maps onto `[5, -5]` about x and `[-5, 5]` about y.
pub fn tilt_angles(pointer_x: f64, pointer_y: f64, bounds: Bounds) -> (f64, f64) {
    let fraction = |pointer: f64, start: f64, size: f64| {
        if size <= 0.0 {
            0.0
        } else {
            (pointer - start - size / 2.0) / size
        }
    };
    let fx = fraction(pointer_x, bounds.left, bounds.width);
    let fy = fraction(pointer_y, bounds.top, bounds.height);
    (
        interpolate(fy, (-0.5, 0.5), (TILT_DEGREES, -TILT_DEGREES)),
        interpolate(fx, (-0.5, 0.5), (-TILT_DEGREES, TILT_DEGREES)),
    )
}

const TILT_DEGREES: f64 = 5.0;

pub trait ScrollLock {
    fn acquire(&self);
    fn release(&self);
}

/// Locks page scrolling through the `overflow` style of `<body>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BodyScroll;

impl BodyScroll {
    fn set_overflow(value: &str) {
        let body = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body());
        match body {
            Some(body) => {
                if body.style().set_property("overflow", value).is_err() {
                    warn!("could not set body overflow to {}", value);
                }
            }
            None => warn!("no document body to set overflow on"),
        }
    }
}

impl ScrollLock for BodyScroll {
    fn acquire(&self) {
        Self::set_overflow("hidden");
    }

    fn release(&self) {
        Self::set_overflow("auto");
    }
}

/// The guard a component should hold for its current `locked` state. Hooks
/// drop the previous guard before asking for the next one.
pub fn guard_for<L: ScrollLock>(locked: bool, lock: L) -> Option<ScrollLockGuard<L>> {
    locked.then(|| ScrollLockGuard::new(lock))
}

/// Holds a scroll lock for as long as it lives.
pub struct ScrollLockGuard<L: ScrollLock> {
    lock: L,
}

impl<L: ScrollLock> ScrollLockGuard<L> {
    pub fn new(lock: L) -> Self {
        lock.acquire();
        Self { lock }
    }
}

impl<L: ScrollLock> Drop for ScrollLockGuard<L> {
    fn drop(&mut self) {
        self.lock.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingLock(Rc<RefCell<Vec<&'static str>>>);

    impl ScrollLock for RecordingLock {
        fn acquire(&self) {
            self.0.borrow_mut().push("acquire");
        }

        fn release(&self) {
            self.0.borrow_mut().push("release");
        }
    }

    #[test]
    fn guard_releases_on_drop() {
        let lock = RecordingLock::default();
        let guard = ScrollLockGuard::new(lock.clone());
        assert_eq!(*lock.0.borrow(), vec!["acquire"]);
        drop(guard);
        assert_eq!(*lock.0.borrow(), vec!["acquire", "release"]);
    }

    #[test]
    fn guard_follows_open_state() {
        // Same sequence as the effect in use_body_scroll_lock: cleanup drops
        // the old guard, then the new state decides whether to take one.
        let lock = RecordingLock::default();
        let mut held = None;
        for open in [true, true, false, false, true] {
            drop(held.take());
            held = guard_for(open, lock.clone());
            assert_eq!(held.is_some(), open);
        }
        drop(held);
        let events = lock.0.borrow();
        let acquires = events.iter().filter(|e| **e == "acquire").count();
        let releases = events.iter().filter(|e| **e == "release").count();
        assert_eq!(acquires, 3);
        assert_eq!(acquires, releases);
        assert_eq!(events.last(), Some(&"release"));
    }

    #[test]
    fn unlocked_state_takes_no_guard() {
        let lock = RecordingLock::default();
        assert!(guard_for(false, lock.clone()).is_none());
        assert!(lock.0.borrow().is_empty());
    }

    #[test]
    fn reveal_threshold() {
        assert!(!should_reveal(900.0, 1000.0, 0.85));
        assert!(should_reveal(850.0, 1000.0, 0.85));
        assert!(should_reveal(-200.0, 1000.0, 0.85));
    }

    #[test]
    fn parallax_runs_from_entry_to_exit() {
        assert_eq!(parallax_progress(1000.0, 500.0, 1000.0), 0.0);
        assert_eq!(parallax_progress(-500.0, 500.0, 1000.0), 1.0);
        assert_eq!(parallax_progress(250.0, 500.0, 1000.0), 0.5);
        assert_eq!(parallax_progress(2000.0, 500.0, 1000.0), 0.0);
        assert_eq!(parallax_offset(250.0, 500.0, 1000.0, -60.0), -30.0);
    }

    #[test]
    fn parallax_degenerate_span() {
        assert_eq!(parallax_progress(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn interpolate_clamps_to_output_range() {
        assert_eq!(interpolate(250.0, (0.0, 500.0), (0.0, 200.0)), 100.0);
        assert_eq!(interpolate(900.0, (0.0, 500.0), (0.0, -150.0)), -150.0);
        assert_eq!(interpolate(-10.0, (0.0, 500.0), (0.0, 200.0)), 0.0);
        assert_eq!(interpolate(3.0, (1.0, 1.0), (7.0, 9.0)), 7.0);
    }

    fn card() -> Bounds {
        Bounds { left: 100.0, top: 50.0, width: 200.0, height: 400.0 }
    }

    #[test]
    fn tilt_is_flat_at_centre() {
        assert_eq!(tilt_angles(200.0, 250.0, card()), (0.0, 0.0));
    }

    #[test]
    fn tilt_peaks_at_corners() {
        assert_eq!(tilt_angles(100.0, 50.0, card()), (5.0, -5.0));
        assert_eq!(tilt_angles(300.0, 450.0, card()), (-5.0, 5.0));
        assert_eq!(tilt_angles(300.0, 50.0, card()), (5.0, 5.0));
        // Outside the box stays at the corner angle.
        assert_eq!(tilt_angles(900.0, -900.0, card()), (5.0, 5.0));
    }

    #[test]
    fn tilt_of_zero_size_box_is_flat() {
        assert_eq!(tilt_angles(10.0, 10.0, Bounds::default()), (0.0, 0.0));
    }

    #[test]
    fn progress_bar_fraction() {
        assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(scroll_progress(5000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(scroll_progress(10.0, 800.0, 1000.0), 0.0);
    }
}
