use std::str::FromStr;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use crate::server::model::Cents;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    #[display("appetizers")]
    Appetizers,
    #[display("mains")]
    Mains,
    #[display("pizzas")]
    Pizzas,
    #[display("salads")]
    Salads,
    #[display("desserts")]
    Desserts,
    #[display("beverages")]
    Beverages,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Appetizers,
        Category::Mains,
        Category::Pizzas,
        Category::Salads,
        Category::Desserts,
        Category::Beverages,
    ];
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "appetizers" => Ok(Self::Appetizers),
            "mains" => Ok(Self::Mains),
            "pizzas" => Ok(Self::Pizzas),
            "salads" => Ok(Self::Salads),
            "desserts" => Ok(Self::Desserts),
            "beverages" => Ok(Self::Beverages),
            s => Err(format!("Invalid Category: {s}")),
        }
    }
}

/// Parse a category query parameter, `all` (or nothing) means no restriction.
pub(crate) fn parse_category_param(param: Option<&str>) -> Result<Option<Category>, String> {
    match param.map(str::trim) {
        None | Some("") | Some("all") => Ok(None),
        Some(s) => s.to_lowercase().parse().map(Some),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MenuItem {
    /// `{restaurant_id}-{n}`
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Cents,
    pub image: String,
    pub category: Category,
    pub is_veg: bool,
    pub is_spicy: bool,
    pub rating: f32,
    pub badges: Vec<String>,
    pub restaurant_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MenuQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetMenuResponse {
    pub total: usize,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetCategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SuggestionQuery {
    pub q: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub(crate) struct Suggestions {
    pub items: Vec<MenuItem>,
    pub categories: Vec<Category>,
}
