use serde::Serialize;
use crate::server::model::Cents;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Restaurant {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cuisine: Vec<String>,
    pub rating: f32,
    pub review_count: u32,
    /// e.g. "25-35 min"
    pub delivery_time: String,
    pub delivery_fee: Cents,
    pub min_order: Cents,
    pub location: String,
    pub is_open: bool,
    pub badges: Vec<String>,
    pub description: String,
    pub address: String,
    pub phone: String,
}

impl Restaurant {
    pub fn delivery_window(&self) -> Option<DeliveryWindow> {
        DeliveryWindow::parse(&self.delivery_time)
    }
}

/// Delivery estimate in minutes, parsed from strings like "25-35 min".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DeliveryWindow {
    pub min: u32,
    pub max: u32,
}

impl DeliveryWindow {
    pub fn parse(s: &str) -> Option<Self> {
        let range = s.trim().trim_end_matches("min").trim();
        let (min, max) = match range.split_once('-') {
            Some((lo, hi)) => (lo.trim().parse().ok()?, hi.trim().parse().ok()?),
            None => {
                let single = range.parse().ok()?;
                (single, single)
            }
        };
        (min <= max).then_some(Self { min, max })
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GetRestaurantsResponse {
    pub total: usize,
    pub restaurants: Vec<Restaurant>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetCuisinesResponse {
    pub cuisines: Vec<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_range() {
        assert_eq!(
            DeliveryWindow::parse("25-35 min"),
            Some(DeliveryWindow { min: 25, max: 35 })
        );
        assert_eq!(
            DeliveryWindow::parse(" 15 - 25min"),
            Some(DeliveryWindow { min: 15, max: 25 })
        );
    }

    #[test]
    fn parse_single_value() {
        assert_eq!(
            DeliveryWindow::parse("40 min"),
            Some(DeliveryWindow { min: 40, max: 40 })
        );
    }

    #[test]
    fn parse_garbage() {
        assert_eq!(DeliveryWindow::parse("soon"), None);
        assert_eq!(DeliveryWindow::parse("40-20 min"), None);
        assert_eq!(DeliveryWindow::parse(""), None);
    }
}
