//! Category Groups
//!
//! Partitions an ordered product list into categories by product type.
//! Categories come out in the order they are first seen, and products keep
//! their relative order within each category.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::products::Product;

/// Products sharing one category, in source order.
#[derive(Debug, Clone)]
pub struct CategoryGroup<'c> {
    name: &'c str,
    products: SmallVec<[&'c Product; 8]>,
}

impl<'c> CategoryGroup<'c> {
    /// Category name
    pub fn name(&self) -> &'c str {
        self.name
    }

    /// Iterate over the products in the category.
    pub fn iter(&self) -> impl Iterator<Item = &'c Product> + '_ {
        self.products.iter().copied()
    }

    /// Get a product by its position within the category.
    pub fn get(&self, index: usize) -> Option<&'c Product> {
        self.products.get(index).copied()
    }

    /// Number of products in the category.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the category has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// Catalog products grouped by category.
#[derive(Debug, Clone, Default)]
pub struct CatalogGroups<'c> {
    groups: Vec<CategoryGroup<'c>>,
    index: FxHashMap<&'c str, usize>,
}

impl<'c> CatalogGroups<'c> {
    /// Iterate over the categories in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &CategoryGroup<'c>> {
        self.groups.iter()
    }

    /// Look a category up by name.
    pub fn get(&self, name: &str) -> Option<&CategoryGroup<'c>> {
        self.index
            .get(name)
            .and_then(|position| self.groups.get(*position))
    }

    /// Category names in first-seen order.
    pub fn category_names(&self) -> impl Iterator<Item = &'c str> + '_ {
        self.groups.iter().map(CategoryGroup::name)
    }

    /// All products, category by category.
    pub fn flatten(&self) -> impl Iterator<Item = &'c Product> + '_ {
        self.groups.iter().flat_map(CategoryGroup::iter)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no categories.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

/// Group products by their category.
pub fn group_by_kind<'c>(products: impl IntoIterator<Item = &'c Product>) -> CatalogGroups<'c> {
    let mut grouped = CatalogGroups::default();

    for product in products {
        let kind = product.kind.as_str();

        let position = *grouped.index.entry(kind).or_insert_with(|| {
            grouped.groups.push(CategoryGroup {
                name: kind,
                products: SmallVec::new(),
            });

            grouped.groups.len() - 1
        });

        if let Some(group) = grouped.groups.get_mut(position) {
            group.products.push(product);
        }
    }

    grouped
}
