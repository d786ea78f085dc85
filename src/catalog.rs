use std::collections::HashSet;
use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

const BUILTIN_PROJECTS: &str = include_str!("../data/projects.json");

pub type ItemId = u32;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("malformed project catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("project {id} has no images")]
    NoImages { id: ItemId },
    #[error("project id {id} is used more than once")]
    DuplicateId { id: ItemId },
    #[error("project catalog is empty")]
    EmptyCatalog,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Residential,
    Institutional,
}

impl Category {
    /// Filter buttons are rendered in this order, after "all".
    pub const ALL: [Category; 2] = [Category::Residential, Category::Institutional];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Residential => "residential",
            Category::Institutional => "institutional",
        }
    }

    /// Badge text shown on cards and in the lightbox.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Institutional => "Institutional",
        }
    }
}

/// Display-only fields. Nothing in the gallery logic reads these.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ItemDetails {
    pub title: String,
    pub location: String,
    pub area: String,
    pub year: String,
    pub description: String,
    pub cover: String,
}

#[derive(Deserialize)]
struct RawItem {
    id: ItemId,
    category: Category,
    images: Vec<String>,
    #[serde(flatten)]
    details: ItemDetails,
}

/// A showcase entry. Only constructible with at least one image.
#[derive(Clone, Debug, PartialEq)]
pub struct Item {
    id: ItemId,
    category: Category,
    images: Vec<String>,
    details: ItemDetails,
}

impl Item {
    pub fn new(
        id: ItemId,
        category: Category,
        images: Vec<String>,
        details: ItemDetails,
    ) -> Result<Self, CatalogError> {
        if images.is_empty() {
            return Err(CatalogError::NoImages { id });
        }
        Ok(Self { id, category, images, details })
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Always at least 1.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    pub fn details(&self) -> &ItemDetails {
        &self.details
    }
}

/// Ordered, immutable set of showcase items. Cloning shares the items.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    items: Rc<[Item]>,
}

impl Catalog {
    /// Projects bundled into the binary at build time.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PROJECTS)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: Vec<RawItem> = serde_json::from_str(json)?;
        let items = raw
            .into_iter()
            .map(|r| Item::new(r.id, r.category, r.images, r.details))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_items(items)
    }

    pub fn from_items(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyCatalog);
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id) {
                return Err(CatalogError::DuplicateId { id: item.id });
            }
        }
        Ok(Self { items: items.into() })
    }

    /// A catalog with no items. Only for showing nothing when loading
    /// failed; `from_items` never returns one.
    pub fn empty() -> Self {
        Self { items: Rc::from(Vec::new()) }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn get(&self, position: usize) -> Option<&Item> {
        self.items.get(position)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn details(title: &str) -> ItemDetails {
        ItemDetails {
            title: title.to_string(),
            location: "Bangalore, Karnataka".to_string(),
            area: "1,000 sq.ft".to_string(),
            year: "2024".to_string(),
            description: String::new(),
            cover: format!("img/{title}.jpeg"),
        }
    }

    pub(crate) fn item(id: ItemId, category: Category, image_count: usize) -> Item {
        let images = (0..image_count).map(|i| format!("img/{id}/{i}.jpeg")).collect();
        Item::new(id, category, images, details(&format!("project-{id}"))).unwrap()
    }

    #[test]
    fn builtin_catalog_loads_in_authored_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<ItemId> = catalog.items().iter().map(Item::id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(catalog.items()[1].image_count(), 8);
        assert_eq!(catalog.items()[1].category(), Category::Institutional);
        assert_eq!(catalog.items()[0].details().title, "Modern Villa Design");
    }

    #[test]
    fn item_without_images_is_rejected() {
        let err = Item::new(7, Category::Residential, vec![], details("empty")).unwrap_err();
        assert!(matches!(err, CatalogError::NoImages { id: 7 }));
    }

    #[test]
    fn json_item_without_images_is_rejected() {
        let json = r#"[{
            "id": 9, "title": "t", "category": "residential", "location": "l",
            "area": "a", "year": "2024", "description": "d", "cover": "c",
            "images": []
        }]"#;
        let err = Catalog::from_json(json).unwrap_err();
        assert!(matches!(err, CatalogError::NoImages { id: 9 }));
    }

    #[test]
    fn unknown_category_tag_is_a_parse_error() {
        let json = r#"[{
            "id": 1, "title": "t", "category": "commercial", "location": "l",
            "area": "a", "year": "2024", "description": "d", "cover": "c",
            "images": ["x.jpeg"]
        }]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let items = vec![item(1, Category::Residential, 1), item(1, Category::Institutional, 2)];
        assert!(matches!(
            Catalog::from_items(items),
            Err(CatalogError::DuplicateId { id: 1 })
        ));
    }

    #[test]
    fn empty_catalog_is_rejected() {
        assert!(matches!(Catalog::from_json("[]"), Err(CatalogError::EmptyCatalog)));
    }

    #[test]
    fn empty_fallback_has_no_items() {
        let catalog = Catalog::empty();
        assert!(catalog.items().is_empty());
        assert_eq!(catalog.position(1), None);
        assert_eq!(catalog.get(0), None);
    }

    #[test]
    fn position_looks_up_by_id() {
        let catalog = Catalog::from_items(vec![
            item(10, Category::Residential, 1),
            item(20, Category::Institutional, 1),
        ])
        .unwrap();
        assert_eq!(catalog.position(20), Some(1));
        assert_eq!(catalog.position(30), None);
    }
}
