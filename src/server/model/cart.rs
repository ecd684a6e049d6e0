use chrono::{DateTime, Utc};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use crate::server::model::menu_item::MenuItem;
use crate::server::model::{Cents, Notice};
use crate::server::util::time;

pub(crate) type CartId = u64;

/// 8% flat tax
const TAX_PERCENT: Cents = 8;
pub(crate) const UNKNOWN_RESTAURANT: &str = "Unknown restaurant";

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub(crate) enum CartError {
    #[display("cart {id} not found")]
    CartNotFound { id: CartId },
    #[display("item {id} is not in the cart")]
    ItemNotFound { id: String },
    #[display("menu item {id} does not exist")]
    UnknownMenuItem { id: String },
    #[display("{name} is closed and not taking orders")]
    RestaurantClosed { name: String },
    #[display("quantity must be at least 1")]
    InvalidQuantity,
}

/// The part of a menu item a cart keeps, plus how many were ordered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct CartItem {
    pub id: String,
    pub name: String,
    pub price: Cents,
    pub image: String,
    pub restaurant_id: String,
    pub quantity: u32,
}

impl CartItem {
    fn new(item: &MenuItem, quantity: u32) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            image: item.image.clone(),
            restaurant_id: item.restaurant_id.clone(),
            quantity,
        }
    }

    pub fn line_total(&self) -> Cents {
        self.price * self.quantity as Cents
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub(crate) struct CartTotals {
    pub subtotal: Cents,
    pub tax: Cents,
    pub total: Cents,
}

impl CartTotals {
    pub fn from_subtotal(subtotal: Cents) -> Self {
        // round half up to the cent
        let tax = (subtotal * TAX_PERCENT + 50) / 100;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}

/// An in-progress order. Items keep the order they were first added in.
#[derive(Debug, Clone)]
pub(crate) struct Cart {
    items: Vec<CartItem>,
    touched_at: DateTime<Utc>,
}

impl Cart {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            touched_at: time::helper::get_utc_now(),
        }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn touched_at(&self) -> DateTime<Utc> {
        self.touched_at
    }

    fn touch(&mut self) {
        self.touched_at = time::helper::get_utc_now();
    }

    /// Add `quantity` of `item`, merging with an existing entry of the same id.
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> Result<&CartItem, CartError> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        self.touch();
        let idx = match self.items.iter().position(|i| i.id == item.id) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.quantity = existing.quantity.saturating_add(quantity);
                idx
            }
            None => {
                self.items.push(CartItem::new(item, quantity));
                self.items.len() - 1
            }
        };
        Ok(&self.items[idx])
    }

    /// Set the quantity of an item already in the cart. Zero removes it, in
    /// which case `None` is returned.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<Option<&CartItem>, CartError> {
        if quantity == 0 {
            return self.remove(id).map(|_| None);
        }
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CartError::ItemNotFound { id: id.to_string() })?;
        item.quantity = quantity;
        self.touch();
        Ok(self.items.iter().find(|i| i.id == id))
    }

    pub fn remove(&mut self, id: &str) -> Result<CartItem, CartError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CartError::ItemNotFound { id: id.to_string() })?;
        self.touch();
        Ok(self.items.remove(idx))
    }

    /// Move every line out, leaving the cart empty under the same id.
    pub fn take_items(&mut self) -> Vec<CartItem> {
        self.touch();
        std::mem::take(&mut self.items)
    }

    pub fn clear(&mut self) {
        self.touch();
        self.items.clear();
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn subtotal(&self) -> Cents {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from_subtotal(self.subtotal())
    }

    /// Cart lines decorated with their restaurant's name, `restaurant_name`
    /// resolves an id to a name.
    pub fn lines<'a, F>(&self, restaurant_name: F) -> Vec<CartLine>
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        self.items
            .iter()
            .map(|item| CartLine {
                restaurant_name: restaurant_name(&item.restaurant_id)
                    .unwrap_or(UNKNOWN_RESTAURANT)
                    .to_string(),
                line_total: item.line_total(),
                item: item.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CartLine {
    #[serde(flatten)]
    pub item: CartItem,
    pub restaurant_name: String,
    pub line_total: Cents,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostCartsResponse {
    pub cart_id: CartId,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetCartResponse {
    pub cart_id: CartId,
    pub items: Vec<CartLine>,
    pub item_count: u32,
    pub totals: CartTotals,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostCartItemsRequest {
    pub item_id: String,
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PatchCartItemRequest {
    pub quantity: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct CartMutationResponse {
    pub cart: GetCartResponse,
    pub notice: Option<Notice>,
}
