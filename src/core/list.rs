//! Listing and filtering of registry items
//!
//! Applies the `list` command's kind/category/search filters to a fetched
//! index. Filters compose (AND); results keep index order.

use crate::registry::{ItemKind, RegistryIndex, RegistryItem};

/// Filters for listing registry items
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    /// Only this kind
    pub kind: Option<ItemKind>,
    /// Only items in this category (case-insensitive, exact)
    pub category: Option<String>,
    /// Only items matching this query (substring over name, description,
    /// category, tags)
    pub search: Option<String>,
}

/// Apply filters to an index, returning matches grouped by kind
pub fn filter_items<'a>(
    index: &'a RegistryIndex,
    filter: &ListFilter,
) -> Vec<(ItemKind, Vec<&'a RegistryItem>)> {
    let kinds: Vec<ItemKind> = match filter.kind {
        Some(kind) => vec![kind],
        None => ItemKind::ALL.to_vec(),
    };

    kinds
        .into_iter()
        .map(|kind| {
            let items: Vec<&RegistryItem> = match &filter.search {
                Some(query) => index.search_kind(kind, query),
                None => index.list(kind).iter().collect(),
            };
            let items = match &filter.category {
                Some(category) => items
                    .into_iter()
                    .filter(|item| {
                        item.category
                            .as_ref()
                            .is_some_and(|c| c.eq_ignore_ascii_case(category))
                    })
                    .collect(),
                None => items,
            };
            (kind, items)
        })
        .filter(|(_, items)| !items.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> RegistryIndex {
        let mut index = RegistryIndex::default();
        let mut hero = RegistryItem::new("hero-block", "Hero section");
        hero.category = Some("marketing".to_string());
        let mut faq = RegistryItem::new("faq-block", "FAQ accordion");
        faq.category = Some("content".to_string());
        index.blocks = vec![hero, faq];
        index.components = vec![RegistryItem::new("media-card", "Media card")];
        index
    }

    #[test]
    fn test_no_filters_lists_everything() {
        let index = sample_index();
        let groups = filter_items(&index, &ListFilter::default());
        let total: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_kind_filter() {
        let index = sample_index();
        let filter = ListFilter {
            kind: Some(ItemKind::Component),
            ..ListFilter::default()
        };
        let groups = filter_items(&index, &filter);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, ItemKind::Component);
        assert_eq!(groups[0].1[0].name, "media-card");
    }

    #[test]
    fn test_category_filter_case_insensitive() {
        let index = sample_index();
        let filter = ListFilter {
            category: Some("Marketing".to_string()),
            ..ListFilter::default()
        };
        let groups = filter_items(&index, &filter);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1[0].name, "hero-block");
    }

    #[test]
    fn test_filters_compose() {
        let index = sample_index();
        let filter = ListFilter {
            kind: Some(ItemKind::Block),
            category: Some("content".to_string()),
            search: Some("accordion".to_string()),
        };
        let groups = filter_items(&index, &filter);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1[0].name, "faq-block");

        let none = ListFilter {
            search: Some("accordion".to_string()),
            category: Some("marketing".to_string()),
            ..ListFilter::default()
        };
        assert!(filter_items(&index, &none).is_empty());
    }
}
