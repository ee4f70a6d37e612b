//! Store directory queries

use chrono::NaiveDate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::Store;
use crate::{Error, Floor};

/// Optional directory filters, all combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<Floor>,
    /// Case-insensitive substring of the category
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Case-insensitive substring of the name or description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl StoreFilter {
    fn matches(&self, store: &Store) -> bool {
        if self.floor.is_some_and(|floor| store.floor != floor) {
            return false;
        }
        if let Some(category) = &self.category {
            if !contains_ignore_case(&store.category, category) {
                return false;
            }
        }
        if let Some(term) = &self.search {
            if !contains_ignore_case(&store.name, term)
                && !contains_ignore_case(&store.description, term)
            {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StoreListing<'a> {
    pub stores: Vec<&'a Store>,
    pub total: usize,
    pub filters: StoreFilter,
}

/// Read-only collection of store records
#[derive(Debug, Clone, Default)]
pub struct StoreDirectory {
    stores: Vec<Store>,
}

impl StoreDirectory {
    pub fn new(stores: Vec<Store>) -> Self {
        Self { stores }
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// Keeps only the stores for which `keep` returns `true`
    pub(crate) fn retain(&mut self, keep: impl FnMut(&Store) -> bool) {
        self.stores.retain(keep);
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    fn active(&self) -> impl Iterator<Item = &Store> {
        self.stores.iter().filter(|store| store.active)
    }

    /// Active stores matching `filter`, sorted by name
    pub fn stores(&self, filter: &StoreFilter) -> StoreListing<'_> {
        let stores: Vec<&Store> = self
            .active()
            .filter(|store| filter.matches(store))
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect();

        StoreListing {
            total: stores.len(),
            stores,
            filters: filter.clone(),
        }
    }

    pub fn store(&self, id: &str) -> Result<&Store, Error> {
        self.active()
            .find(|store| store.id == id)
            .ok_or_else(|| Error::not_found("Store", id))
    }

    /// Store reached through the given topology node
    pub fn store_at(&self, node_id: &str) -> Option<&Store> {
        self.active().find(|store| store.node_id == node_id)
    }

    pub fn stores_on_floor(&self, floor: Floor) -> Vec<&Store> {
        self.stores(&StoreFilter {
            floor: Some(floor),
            ..StoreFilter::default()
        })
        .stores
    }

    /// Distinct categories in alphabetical order
    pub fn categories(&self) -> Vec<&str> {
        self.active()
            .map(|store| store.category.as_str())
            .sorted_unstable()
            .dedup()
            .collect()
    }

    /// Stores with at least one promotion running on `today`, sorted by name
    pub fn with_active_promotions(&self, today: NaiveDate) -> Vec<&Store> {
        self.active()
            .filter(|store| store.has_running_promotion(today))
            .sorted_by(|a, b| a.name.cmp(&b.name))
            .collect()
    }

    /// All active stores ordered by floor and name
    pub fn all_stores(&self) -> Vec<&Store> {
        self.active()
            .sorted_by(|a, b| a.floor.cmp(&b.floor).then_with(|| a.name.cmp(&b.name)))
            .collect()
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
