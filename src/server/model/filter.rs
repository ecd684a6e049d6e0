//! restaurant listing filters and sort order

use std::cmp::Ordering;
use std::ops::RangeInclusive;
use derive_more::{Display, Error};
use serde::Deserialize;
use crate::server::model::menu_item::MenuItem;
use crate::server::model::restaurant::Restaurant;
use crate::server::model::Cents;

pub(crate) const MAX_RATING: f32 = 5.0;
/// upper end of the delivery fee slider
pub(crate) const MAX_DELIVERY_FEE: Cents = 1000;

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum FilterError {
    #[display("minimum rating must be between 0 and 5, got {rating}")]
    RatingOutOfRange { rating: f32 },
    #[display("delivery fee range is inverted: {min}..{max}")]
    InvertedFeeRange { min: Cents, max: Cents },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) enum SortKey {
    /// highest first
    #[default]
    Rating,
    DeliveryTime,
    DeliveryFee,
    MinOrder,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum DeliveryTimeBucket {
    #[default]
    All,
    /// done within 30 minutes
    Fast,
    /// done within 31 to 45 minutes
    Medium,
    /// over 45 minutes
    Slow,
}

impl DeliveryTimeBucket {
    fn contains(&self, restaurant: &Restaurant) -> bool {
        let upper = restaurant.delivery_window().map(|w| w.max);
        match (self, upper) {
            (DeliveryTimeBucket::All, _) => true,
            (_, None) => false,
            (DeliveryTimeBucket::Fast, Some(max)) => max <= 30,
            (DeliveryTimeBucket::Medium, Some(max)) => (31..=45).contains(&max),
            (DeliveryTimeBucket::Slow, Some(max)) => max > 45,
        }
    }
}

/// Raw query string of `GET /v1/restaurants`.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RestaurantQuery {
    pub search: Option<String>,
    /// comma separated
    pub cuisines: Option<String>,
    pub min_rating: Option<f32>,
    pub min_fee: Option<Cents>,
    pub max_fee: Option<Cents>,
    pub delivery_time: Option<DeliveryTimeBucket>,
    pub sort_by: Option<SortKey>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RestaurantFilter {
    pub search: String,
    pub cuisines: Vec<String>,
    pub min_rating: f32,
    pub fee_range: RangeInclusive<Cents>,
    pub delivery_time: DeliveryTimeBucket,
    pub sort_by: SortKey,
}

impl Default for RestaurantFilter {
    fn default() -> Self {
        Self {
            search: String::new(),
            cuisines: Vec::new(),
            min_rating: 0.0,
            fee_range: 0..=MAX_DELIVERY_FEE,
            delivery_time: DeliveryTimeBucket::All,
            sort_by: SortKey::Rating,
        }
    }
}

impl TryFrom<RestaurantQuery> for RestaurantFilter {
    type Error = FilterError;

    fn try_from(query: RestaurantQuery) -> Result<Self, Self::Error> {
        let min_rating = query.min_rating.unwrap_or(0.0);
        if !(0.0..=MAX_RATING).contains(&min_rating) {
            return Err(FilterError::RatingOutOfRange { rating: min_rating });
        }
        let (min, max) = (
            query.min_fee.unwrap_or(0),
            query.max_fee.unwrap_or(MAX_DELIVERY_FEE),
        );
        if min > max {
            return Err(FilterError::InvertedFeeRange { min, max });
        }
        let cuisines = query
            .cuisines
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            search: query.search.unwrap_or_default().trim().to_string(),
            cuisines,
            min_rating,
            fee_range: min..=max,
            delivery_time: query.delivery_time.unwrap_or_default(),
            sort_by: query.sort_by.unwrap_or_default(),
        })
    }
}

impl RestaurantFilter {
    /// All active predicates must hold. `menu` is the restaurant's menu, its
    /// dish names take part in the text search.
    pub fn matches(&self, restaurant: &Restaurant, menu: &[MenuItem]) -> bool {
        self.matches_search(restaurant, menu)
            && self.matches_cuisine(restaurant)
            && restaurant.rating >= self.min_rating
            && self.fee_range.contains(&restaurant.delivery_fee)
            && self.delivery_time.contains(restaurant)
    }

    fn matches_search(&self, restaurant: &Restaurant, menu: &[MenuItem]) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let hit = |s: &str| s.to_lowercase().contains(&needle);
        hit(&restaurant.name)
            || restaurant.cuisine.iter().any(|c| hit(c))
            || hit(&restaurant.description)
            || menu.iter().any(|item| hit(&item.name))
    }

    fn matches_cuisine(&self, restaurant: &Restaurant) -> bool {
        self.cuisines.is_empty()
            || self.cuisines.iter().any(|wanted| {
                restaurant
                    .cuisine
                    .iter()
                    .any(|c| c.eq_ignore_ascii_case(wanted))
            })
    }

    /// Stable sort, ties keep their incoming order.
    pub fn sort(&self, restaurants: &mut [&Restaurant]) {
        restaurants.sort_by(|a, b| self.compare(a, b));
    }

    fn compare(&self, a: &Restaurant, b: &Restaurant) -> Ordering {
        match self.sort_by {
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::DeliveryTime => {
                let lower = |r: &Restaurant| r.delivery_window().map_or(u32::MAX, |w| w.min);
                lower(a).cmp(&lower(b))
            }
            SortKey::DeliveryFee => a.delivery_fee.cmp(&b.delivery_fee),
            SortKey::MinOrder => a.min_order.cmp(&b.min_order),
        }
    }
}
