//! In-memory mock catalog: restaurants and their menus.
//!
//! Menus are generated once from a seeded rng and never change afterwards,
//! so an item id always refers to the same dish for the life of the process.

mod generator;
mod seed;

use std::collections::{HashMap, HashSet};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use crate::server::model::filter::RestaurantFilter;
use crate::server::model::menu_item::{Category, MenuItem, Suggestions};
use crate::server::model::restaurant::Restaurant;

pub(crate) use seed::CUISINES;

const MIN_SUGGESTION_QUERY_LEN: usize = 2;
const MAX_ITEM_SUGGESTIONS: usize = 8;
const MAX_CATEGORY_SUGGESTIONS: usize = 3;

#[derive(Debug)]
pub(crate) struct Catalog {
    restaurants: Vec<Restaurant>,
    /// keyed by restaurant id
    menus: HashMap<String, Vec<MenuItem>>,
}

impl Catalog {
    /// Build the mock catalog, a random seed is drawn when none is given.
    pub fn generate(rng_seed: Option<u64>) -> Self {
        let rng_seed = rng_seed.unwrap_or_else(rand::random);
        info!("generating mock catalog with seed={}", rng_seed);
        let mut rng = StdRng::seed_from_u64(rng_seed);

        let mut restaurants = Vec::with_capacity(seed::RESTAURANTS.len());
        let mut menus = HashMap::with_capacity(seed::RESTAURANTS.len());
        for record in seed::RESTAURANTS.iter() {
            restaurants.push(generator::restaurant(record));
            menus.insert(record.id.to_string(), generator::menu(record, &mut rng));
        }
        info!(
            "catalog ready, restaurants={} items={}",
            restaurants.len(),
            menus.values().map(Vec::len).sum::<usize>()
        );
        Self { restaurants, menus }
    }

    pub fn restaurants(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn restaurant_name(&self, id: &str) -> Option<&str> {
        self.restaurant(id).map(|r| r.name.as_str())
    }

    pub fn menu(&self, restaurant_id: &str) -> Option<&[MenuItem]> {
        self.menus.get(restaurant_id).map(Vec::as_slice)
    }

    /// Item ids are `{restaurant_id}-{n}`, so the owning menu is found first.
    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        let (restaurant_id, _) = id.split_once('-')?;
        self.menu(restaurant_id)?.iter().find(|item| item.id == id)
    }

    /// Every item, in restaurant order.
    pub fn all_items(&self) -> impl Iterator<Item = &MenuItem> {
        self.restaurants
            .iter()
            .filter_map(|r| self.menus.get(&r.id))
            .flatten()
    }

    /// Tabs for a restaurant page: `all` then each category in menu order.
    pub fn categories(&self, restaurant_id: &str) -> Option<Vec<String>> {
        let menu = self.menu(restaurant_id)?;
        let mut seen = HashSet::new();
        let categories = std::iter::once("all".to_string())
            .chain(
                menu.iter()
                    .filter(|item| seen.insert(item.category))
                    .map(|item| item.category.to_string()),
            )
            .collect();
        Some(categories)
    }

    /// Menu of one restaurant narrowed by category and a case-insensitive
    /// match on name or description.
    pub fn search_menu(
        &self,
        restaurant_id: &str,
        category: Option<Category>,
        text: &str,
    ) -> Option<Vec<&MenuItem>> {
        let needle = text.trim().to_lowercase();
        let items = self
            .menu(restaurant_id)?
            .iter()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .filter(|item| {
                needle.is_empty()
                    || item.name.to_lowercase().contains(&needle)
                    || item.description.to_lowercase().contains(&needle)
            })
            .collect();
        Some(items)
    }

    /// Items across every restaurant, optionally of one category.
    pub fn browse(&self, category: Option<Category>) -> Vec<&MenuItem> {
        self.all_items()
            .filter(|item| category.map_or(true, |c| item.category == c))
            .collect()
    }

    pub fn filter_restaurants(&self, filter: &RestaurantFilter) -> Vec<&Restaurant> {
        let mut matched = self
            .restaurants()
            .iter()
            .filter(|r| filter.matches(r, self.menu(&r.id).unwrap_or_default()))
            .collect::<Vec<_>>();
        filter.sort(&mut matched);
        matched
    }

    /// Type-ahead suggestions over all menu items.
    pub fn suggestions(&self, text: &str) -> Suggestions {
        let query = text.trim().to_lowercase();
        if query.chars().count() < MIN_SUGGESTION_QUERY_LEN {
            return Suggestions::default();
        }

        let items = self
            .all_items()
            .filter(|item| {
                item.name.to_lowercase().contains(&query)
                    || item.description.to_lowercase().contains(&query)
                    || item.category.to_string().contains(&query)
            })
            .take(MAX_ITEM_SUGGESTIONS)
            .cloned()
            .collect();

        let mut seen = HashSet::new();
        let categories = self
            .all_items()
            .map(|item| item.category)
            .filter(|c| c.to_string().contains(&query) && seen.insert(*c))
            .take(MAX_CATEGORY_SUGGESTIONS)
            .collect();

        Suggestions { items, categories }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::server::model::filter::{DeliveryTimeBucket, SortKey};

    pub(crate) fn catalog() -> Catalog {
        Catalog::generate(Some(2024))
    }

    fn ids(restaurants: &[&Restaurant]) -> Vec<String> {
        restaurants.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn generates_six_restaurants_with_menus() {
        let catalog = catalog();
        assert_eq!(catalog.restaurants().len(), 6);
        for restaurant in catalog.restaurants() {
            let menu = catalog.menu(&restaurant.id).unwrap();
            assert!(menu.len() >= 80);
        }
        assert!(catalog.all_items().count() >= 480);
    }

    #[test]
    fn menus_are_stable_across_reads() {
        let catalog = catalog();
        let first = catalog.menu_item("3-42").cloned();
        let second = catalog.menu_item("3-42").cloned();
        assert!(first.is_some());
        assert_eq!(first, second);
        assert_eq!(Catalog::generate(Some(2024)).menu_item("3-42").cloned(), first);
    }

    #[test]
    fn menu_item_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.menu_item("2-1").unwrap().name, "Margherita Pizza");
        assert!(catalog.menu_item("2-999").is_none());
        assert!(catalog.menu_item("nope").is_none());
        assert!(catalog.menu_item("9-1").is_none());
    }

    #[test]
    fn default_filter_returns_everything_by_rating() {
        let catalog = catalog();
        let listed = catalog.filter_restaurants(&RestaurantFilter::default());
        assert_eq!(ids(&listed), vec!["4", "5", "1", "2", "6", "3"]);
    }

    #[test]
    fn rating_floor_excludes_lower_rated() {
        let catalog = catalog();
        let filter = RestaurantFilter {
            min_rating: 4.5,
            ..Default::default()
        };
        let listed = catalog.filter_restaurants(&filter);
        assert!(listed.iter().all(|r| r.rating >= 4.5));
        assert_eq!(ids(&listed), vec!["4", "5", "1"]);
    }

    #[test]
    fn cuisines_are_ored() {
        let catalog = catalog();
        let filter = RestaurantFilter {
            cuisines: vec!["indian".to_string(), "Mexican".to_string()],
            sort_by: SortKey::DeliveryFee,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter_restaurants(&filter)), vec!["6", "1"]);
    }

    #[test]
    fn dimensions_are_anded() {
        let catalog = catalog();
        let filter = RestaurantFilter {
            cuisines: vec!["Spicy".to_string()],
            fee_range: 0..=220,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter_restaurants(&filter)), vec!["6"]);
    }

    #[test]
    fn search_covers_dishes_and_cuisines() {
        let catalog = catalog();
        let by_dish = RestaurantFilter {
            search: "tiramisu".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter_restaurants(&by_dish)), vec!["2"]);

        let by_cuisine = RestaurantFilter {
            search: "SUSHI".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter_restaurants(&by_cuisine)), vec!["5"]);
    }

    #[test]
    fn delivery_bucket_and_time_sort() {
        let catalog = catalog();
        let fast = RestaurantFilter {
            delivery_time: DeliveryTimeBucket::Fast,
            sort_by: SortKey::DeliveryTime,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter_restaurants(&fast)), vec!["3", "2", "4", "6"]);

        let medium = RestaurantFilter {
            delivery_time: DeliveryTimeBucket::Medium,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter_restaurants(&medium)), vec!["5", "1"]);

        let slow = RestaurantFilter {
            delivery_time: DeliveryTimeBucket::Slow,
            ..Default::default()
        };
        assert!(catalog.filter_restaurants(&slow).is_empty());
    }

    #[test]
    fn min_order_sort() {
        let catalog = catalog();
        let filter = RestaurantFilter {
            sort_by: SortKey::MinOrder,
            ..Default::default()
        };
        assert_eq!(ids(&catalog.filter_restaurants(&filter)), vec!["4", "3", "2", "6", "1", "5"]);
    }

    #[test]
    fn categories_start_with_all() {
        let catalog = catalog();
        let categories = catalog.categories("1").unwrap();
        assert_eq!(categories[0], "all");
        assert_eq!(categories[1], "mains");
        assert_eq!(categories[2], "appetizers");
        let unique = categories.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), categories.len());
        assert!(catalog.categories("42").is_none());
    }

    #[test]
    fn search_menu_by_category_and_text() {
        let catalog = catalog();
        let pizzas = catalog.search_menu("2", Some(Category::Pizzas), "").unwrap();
        assert!(pizzas.iter().all(|i| i.category == Category::Pizzas));
        assert!(pizzas.iter().any(|i| i.name == "Quattro Stagioni"));

        let lentils = catalog.search_menu("1", None, "LENTILS").unwrap();
        assert_eq!(lentils.len(), 1);
        assert_eq!(lentils[0].name, "Dal Makhani");
    }

    #[test]
    fn browse_spans_restaurants() {
        let catalog = catalog();
        let drinks = catalog.browse(Some(Category::Beverages));
        assert!(drinks.iter().all(|i| i.category == Category::Beverages));
        let owners = drinks.iter().map(|i| i.restaurant_id.as_str()).collect::<HashSet<_>>();
        assert_eq!(owners.len(), 6);
        assert_eq!(catalog.browse(None).len(), catalog.all_items().count());
    }

    #[test]
    fn suggestions_need_two_chars() {
        let catalog = catalog();
        let none = catalog.suggestions("p");
        assert!(none.items.is_empty() && none.categories.is_empty());
    }

    #[test]
    fn suggestions_are_capped() {
        let catalog = catalog();
        let found = catalog.suggestions("pizza");
        assert!(!found.items.is_empty() && found.items.len() <= 8);
        assert_eq!(found.categories, vec![Category::Pizzas]);

        let broad = catalog.suggestions("es");
        assert!(broad.categories.len() <= 3);
        assert!(broad.categories.contains(&Category::Appetizers));
    }
}
