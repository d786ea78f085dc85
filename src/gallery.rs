//! Portfolio filter and lightbox navigation.
//!
//! The gallery is either Closed or Open on one item of the full catalog.
//! While open, `next`/`previous` wrap around the item's images and `select`
//! only accepts an index that exists. Nothing here touches the DOM; the page
//! reads [`GalleryState::is_open`] to decide whether background scrolling is
//! locked.

use std::rc::Rc;

use log::debug;
use yew::prelude::*;

use crate::catalog::{Catalog, Category, Item, ItemId};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    /// A category tag. Tags absent from the catalog match nothing.
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => item.category().as_str() == tag,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(tag) => tag,
        }
    }
}

impl From<&str> for CategoryFilter {
    fn from(tag: &str) -> Self {
        if tag == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(tag.to_string())
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category.as_str().to_string())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct OpenItem {
    position: usize,
    image: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryState {
    catalog: Catalog,
    filter: CategoryFilter,
    open: Option<OpenItem>,
}

impl GalleryState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: CategoryFilter::All,
            open: None,
        }
    }

    pub fn active_category(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Items passing the active filter, in catalog order.
    pub fn filtered(&self) -> Vec<&Item> {
        self.catalog
            .items()
            .iter()
            .filter(|item| self.filter.matches(item))
            .collect()
    }

    pub fn set_category_filter(&mut self, filter: impl Into<CategoryFilter>) -> Vec<&Item> {
        self.filter = filter.into();
        self.filtered()
    }

    /// Opens `id` at its first image. Ids outside the catalog are ignored.
    pub fn open_gallery(&mut self, id: ItemId) {
        match self.catalog.position(id) {
            Some(position) => self.open = Some(OpenItem { position, image: 0 }),
            None => debug!("ignoring open for unknown project {}", id),
        }
    }

    pub fn close_gallery(&mut self) {
        self.open = None;
    }

    pub fn next_image(&mut self) {
        if let Some((open, count)) = self.open_with_count() {
            self.open = Some(OpenItem {
                image: (open.image + 1) % count,
                ..open
            });
        }
    }

    pub fn previous_image(&mut self) {
        if let Some((open, count)) = self.open_with_count() {
            self.open = Some(OpenItem {
                image: (open.image + count - 1) % count,
                ..open
            });
        }
    }

    /// Jumps to `index`. Rejected unless the open item has that image.
    pub fn select_image(&mut self, index: usize) {
        match self.open_with_count() {
            Some((open, count)) if index < count => {
                self.open = Some(OpenItem { image: index, ..open });
            }
            Some((_, count)) => debug!("rejecting image {} of {}", index, count),
            None => {}
        }
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn open_item(&self) -> Option<&Item> {
        self.open.and_then(|open| self.catalog.get(open.position))
    }

    pub fn active_image_index(&self) -> Option<usize> {
        self.open.map(|open| open.image)
    }

    pub fn active_image(&self) -> Option<&str> {
        let open = self.open?;
        self.catalog
            .get(open.position)
            .and_then(|item| item.images().get(open.image))
            .map(String::as_str)
    }

    fn open_with_count(&self) -> Option<(OpenItem, usize)> {
        let open = self.open?;
        let item = self.catalog.get(open.position)?;
        Some((open, item.image_count()))
    }

    pub fn apply(&mut self, action: GalleryAction) {
        match action {
            GalleryAction::Filter(filter) => {
                self.set_category_filter(filter);
            }
            GalleryAction::Open(id) => self.open_gallery(id),
            GalleryAction::Close => self.close_gallery(),
            GalleryAction::Next => self.next_image(),
            GalleryAction::Previous => self.previous_image(),
            GalleryAction::Select(index) => self.select_image(index),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    Filter(CategoryFilter),
    Open(ItemId),
    Close,
    Next,
    Previous,
    Select(usize),
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::item;

    fn state(items: Vec<Item>) -> GalleryState {
        GalleryState::new(Catalog::from_items(items).unwrap())
    }

    fn ids(items: &[&Item]) -> Vec<ItemId> {
        items.iter().map(|item| item.id()).collect()
    }

    #[test]
    fn starts_closed_with_everything_visible() {
        let gallery = state(vec![
            item(1, Category::Residential, 2),
            item(2, Category::Institutional, 2),
        ]);
        assert!(!gallery.is_open());
        assert_eq!(gallery.active_category(), &CategoryFilter::All);
        assert_eq!(gallery.active_image_index(), None);
        assert_eq!(ids(&gallery.filtered()), vec![1, 2]);
    }

    #[test]
    fn filter_keeps_catalog_order() {
        let mut gallery = state(vec![
            item(1, Category::Residential, 1),
            item(2, Category::Institutional, 1),
            item(3, Category::Residential, 1),
        ]);
        assert_eq!(ids(&gallery.set_category_filter("residential")), vec![1, 3]);
        assert_eq!(ids(&gallery.set_category_filter(Category::Institutional)), vec![2]);
        assert_eq!(ids(&gallery.set_category_filter("all")), vec![1, 2, 3]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let mut gallery = state(vec![item(1, Category::Residential, 1)]);
        assert!(gallery.set_category_filter("commercial").is_empty());
        assert_eq!(gallery.active_category().as_str(), "commercial");
    }

    #[test]
    fn filter_leaves_open_gallery_alone() {
        let mut gallery = state(vec![
            item(1, Category::Residential, 3),
            item(2, Category::Institutional, 1),
        ]);
        gallery.open_gallery(1);
        gallery.next_image();
        gallery.set_category_filter(Category::Institutional);
        assert_eq!(gallery.open_item().map(Item::id), Some(1));
        assert_eq!(gallery.active_image_index(), Some(1));
    }

    #[test]
    fn next_wraps_after_last_image() {
        let mut gallery = state(vec![item(1, Category::Residential, 5)]);
        gallery.open_gallery(1);
        for _ in 0..4 {
            gallery.next_image();
        }
        assert_eq!(gallery.active_image_index(), Some(4));
        gallery.next_image();
        assert_eq!(gallery.active_image_index(), Some(0));
    }

    #[test]
    fn n_steps_forward_return_to_start() {
        for count in 1..=8 {
            let mut gallery = state(vec![item(1, Category::Residential, count)]);
            gallery.open_gallery(1);
            for _ in 0..count {
                gallery.next_image();
            }
            assert_eq!(gallery.active_image_index(), Some(0), "count {count}");
        }
    }

    #[test]
    fn previous_from_first_goes_to_last() {
        let mut gallery = state(vec![item(1, Category::Residential, 3)]);
        gallery.open_gallery(1);
        gallery.previous_image();
        assert_eq!(gallery.active_image_index(), Some(2));
        assert_eq!(gallery.active_image(), Some("img/1/2.jpeg"));
    }

    #[test]
    fn navigation_while_closed_is_ignored() {
        let mut gallery = state(vec![item(1, Category::Residential, 3)]);
        let before = gallery.clone();
        gallery.next_image();
        gallery.previous_image();
        gallery.select_image(1);
        assert_eq!(gallery, before);
        assert!(gallery.open_item().is_none());
    }

    #[test]
    fn reopening_resets_to_first_image() {
        let mut gallery = state(vec![item(1, Category::Residential, 3)]);
        gallery.open_gallery(1);
        gallery.next_image();
        gallery.next_image();
        assert_eq!(gallery.active_image_index(), Some(2));
        gallery.close_gallery();
        gallery.open_gallery(1);
        assert_eq!(gallery.active_image_index(), Some(0));
    }

    #[test]
    fn opening_another_item_resets_index() {
        let mut gallery = state(vec![
            item(1, Category::Residential, 3),
            item(2, Category::Institutional, 4),
        ]);
        gallery.open_gallery(1);
        gallery.select_image(2);
        gallery.open_gallery(2);
        assert_eq!(gallery.open_item().map(Item::id), Some(2));
        assert_eq!(gallery.active_image_index(), Some(0));
    }

    #[test]
    fn opening_unknown_id_keeps_state() {
        let mut gallery = state(vec![item(1, Category::Residential, 3)]);
        gallery.open_gallery(99);
        assert!(!gallery.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut gallery = state(vec![item(1, Category::Residential, 3)]);
        gallery.open_gallery(1);
        gallery.close_gallery();
        let once = gallery.clone();
        gallery.close_gallery();
        assert_eq!(gallery, once);
        assert!(!gallery.is_open());
    }

    #[test]
    fn select_rejects_out_of_range() {
        let mut gallery = state(vec![item(1, Category::Residential, 3)]);
        gallery.open_gallery(1);
        gallery.select_image(1);
        gallery.select_image(3);
        assert_eq!(gallery.active_image_index(), Some(1));
        gallery.select_image(usize::MAX);
        assert_eq!(gallery.active_image_index(), Some(1));
        gallery.select_image(2);
        assert_eq!(gallery.active_image_index(), Some(2));
    }

    #[test]
    fn reducer_applies_actions() {
        let gallery = Rc::new(state(vec![
            item(1, Category::Residential, 2),
            item(2, Category::Institutional, 2),
        ]));
        let gallery = gallery.reduce(GalleryAction::Filter("institutional".into()));
        let gallery = gallery.reduce(GalleryAction::Open(2));
        let gallery = gallery.reduce(GalleryAction::Previous);
        assert_eq!(ids(&gallery.filtered()), vec![2]);
        assert_eq!(gallery.active_image_index(), Some(1));
        let gallery = gallery.reduce(GalleryAction::Close);
        assert!(!gallery.is_open());
    }
}
