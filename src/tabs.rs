use std::rc::Rc;

use log::debug;
use yew::prelude::*;

/// How long the outgoing panel animates out before the next one mounts.
pub const TAB_TRANSITION_MS: u32 = 400;

/// Active tab of a fixed-size tab strip, with a "wait" style swap: a
/// selection first marks the current panel as leaving and only becomes the
/// active tab once [`TabSet::settle`] runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TabSet {
    count: usize,
    active: usize,
    pending: Option<usize>,
}

impl TabSet {
    /// `count` is at least 1; an `initial` past the end falls back to the first tab.
    pub fn new(count: usize, initial: usize) -> Self {
        let count = count.max(1);
        Self {
            count,
            active: if initial < count { initial } else { 0 },
            pending: None,
        }
    }

    /// Panel currently mounted.
    pub fn active(&self) -> usize {
        self.active
    }

    /// Tab whose button is drawn as selected.
    pub fn highlighted(&self) -> usize {
        self.pending.unwrap_or(self.active)
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn is_leaving(&self) -> bool {
        self.pending.is_some()
    }

    pub fn select(&mut self, index: usize) {
        if index >= self.count {
            debug!("rejecting tab {} of {}", index, self.count);
            return;
        }
        if index == self.active {
            self.pending = None;
        } else {
            self.pending = Some(index);
        }
    }

    pub fn settle(&mut self) {
        if let Some(next) = self.pending.take() {
            self.active = next;
        }
    }
}

pub enum TabAction {
    Select(usize),
    Settle,
}

impl Reducible for TabSet {
    type Action = TabAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            TabAction::Select(index) => next.select(index),
            TabAction::Settle => next.settle(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_initial_tab() {
        let tabs = TabSet::new(4, 2);
        assert_eq!(tabs.active(), 2);
        assert_eq!(tabs.highlighted(), 2);
        assert!(!tabs.is_leaving());
    }

    #[test]
    fn initial_past_end_falls_back_to_first() {
        assert_eq!(TabSet::new(4, 9).active(), 0);

        let mut empty = TabSet::new(0, 0);
        empty.select(1);
        assert_eq!(empty.active(), 0);
        assert_eq!(empty.pending(), None);
    }

    #[test]
    fn selection_waits_for_settle() {
        let mut tabs = TabSet::new(4, 0);
        tabs.select(3);
        assert_eq!(tabs.active(), 0);
        assert_eq!(tabs.highlighted(), 3);
        assert!(tabs.is_leaving());
        tabs.settle();
        assert_eq!(tabs.active(), 3);
        assert!(!tabs.is_leaving());
    }

    #[test]
    fn later_selection_replaces_pending() {
        let mut tabs = TabSet::new(4, 0);
        tabs.select(1);
        tabs.select(2);
        tabs.settle();
        assert_eq!(tabs.active(), 2);
    }

    #[test]
    fn reselecting_active_cancels_pending() {
        let mut tabs = TabSet::new(4, 0);
        tabs.select(1);
        tabs.select(0);
        assert!(!tabs.is_leaving());
        tabs.settle();
        assert_eq!(tabs.active(), 0);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut tabs = TabSet::new(4, 1);
        tabs.select(4);
        assert_eq!(tabs, TabSet::new(4, 1));
    }

    #[test]
    fn reducer_round() {
        let tabs = Rc::new(TabSet::new(3, 0));
        let tabs = tabs.reduce(TabAction::Select(2)).reduce(TabAction::Settle);
        assert_eq!(tabs.active(), 2);
    }
}
