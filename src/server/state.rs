use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use crate::server::catalog::Catalog;
use crate::server::model::cart::{Cart, CartError, CartId};
use crate::server::model::order::OrderConfirmation;

#[derive(Clone)]
pub(crate) struct AppState {
    catalog: Arc<Catalog>,
    carts: Arc<Mutex<HashMap<CartId, Cart>>>,
    orders: Arc<Mutex<Vec<OrderConfirmation>>>,
    next_order_id: Arc<AtomicU64>,
    processing_delay: Duration,
}

impl AppState {
    pub fn new(catalog: Catalog, processing_delay: Duration) -> Self {
        Self {
            catalog: Arc::new(catalog),
            carts: Arc::new(Mutex::new(HashMap::new())),
            orders: Arc::new(Mutex::new(Vec::new())),
            next_order_id: Arc::new(AtomicU64::new(1)),
            processing_delay,
        }
    }

    pub fn get_catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn get_processing_delay(&self) -> Duration {
        self.processing_delay
    }

    /// Open an empty cart under a fresh random id.
    pub async fn create_cart(&self) -> CartId {
        let mut carts = self.carts.lock().await;
        let id = loop {
            let candidate = rand::random::<CartId>();
            if !carts.contains_key(&candidate) {
                break candidate;
            }
        };
        carts.insert(id, Cart::new());
        id
    }

    /// Run `f` against a cart while holding the cart map lock.
    pub async fn with_cart<T, F>(&self, id: CartId, f: F) -> Result<T, CartError>
    where
        F: FnOnce(&mut Cart) -> Result<T, CartError>,
    {
        let mut carts = self.carts.lock().await;
        let cart = carts.get_mut(&id).ok_or(CartError::CartNotFound { id })?;
        f(cart)
    }

    /// Drop carts not touched since `now - idle`, returns how many went.
    pub async fn evict_idle_carts(&self, now: DateTime<Utc>, idle: Duration) -> usize {
        let idle = chrono::Duration::from_std(idle).unwrap_or(chrono::Duration::MAX);
        let cutoff = now.checked_sub_signed(idle).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let mut carts = self.carts.lock().await;
        let before = carts.len();
        carts.retain(|_, cart| cart.touched_at() > cutoff);
        before - carts.len()
    }

    pub fn next_order_id(&self) -> u64 {
        self.next_order_id.fetch_add(1, Ordering::Relaxed)
    }

    pub async fn record_order(&self, order: OrderConfirmation) {
        self.orders.lock().await.push(order);
    }

    pub async fn get_orders(&self) -> Vec<OrderConfirmation> {
        self.orders.lock().await.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::catalog::tests::catalog;
    use crate::server::util::time::helper::set_utc_now;

    fn state() -> AppState {
        AppState::new(catalog(), Duration::ZERO)
    }

    #[actix_web::test]
    async fn carts_are_independent() {
        let state = state();
        let (a, b) = (state.create_cart().await, state.create_cart().await);
        assert_ne!(a, b);

        let item = state.get_catalog().menu_item("1-1").unwrap().clone();
        state.with_cart(a, |cart| cart.add(&item, 2).map(|_| ())).await.unwrap();
        let (count_a, count_b) = (
            state.with_cart(a, |cart| Ok(cart.item_count())).await.unwrap(),
            state.with_cart(b, |cart| Ok(cart.item_count())).await.unwrap(),
        );
        assert_eq!((count_a, count_b), (2, 0));
    }

    #[actix_web::test]
    async fn unknown_cart() {
        let state = state();
        assert_eq!(
            state.with_cart(7, |cart| Ok(cart.item_count())).await,
            Err(CartError::CartNotFound { id: 7 })
        );
    }

    #[actix_web::test]
    async fn idle_carts_are_evicted() {
        let state = state();
        set_utc_now(1_000);
        let stale = state.create_cart().await;
        set_utc_now(1_500);
        let fresh = state.create_cart().await;

        let now = DateTime::<Utc>::from_timestamp(1_700, 0).unwrap();
        let evicted = state.evict_idle_carts(now, Duration::from_secs(600)).await;
        assert_eq!(evicted, 1);
        assert!(state.with_cart(stale, |_| Ok(())).await.is_err());
        assert!(state.with_cart(fresh, |_| Ok(())).await.is_ok());
    }

    #[actix_web::test]
    async fn order_ids_increase() {
        let state = state();
        let first = state.next_order_id();
        assert_eq!(state.clone().next_order_id(), first + 1);
    }
}
