//! main file for the server

mod catalog;
mod controller;
pub mod model;
mod routes;
mod scheduler;
mod state;
mod util;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::{error, info};
use tokio_util::sync::CancellationToken;
use crate::server::catalog::Catalog;
use crate::server::controller::{cart, checkout, menu, restaurants};
use crate::server::model::config::ServerConfig;
use crate::server::routes::orders::get_orders;
use crate::server::scheduler::job::{cart_sweeper, SWEEP_INTERVAL};
use crate::server::state::AppState;

/// Register every endpoint.
pub(crate) fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(restaurants::get_restaurants)
        .service(restaurants::get_restaurant)
        .service(restaurants::get_cuisines)
        .service(menu::get_restaurant_menu)
        .service(menu::get_restaurant_categories)
        .service(menu::get_menu)
        .service(menu::get_suggestions)
        .service(cart::post_carts)
        .service(cart::get_cart)
        .service(cart::post_cart_items)
        .service(cart::patch_cart_item)
        .service(cart::delete_cart_item)
        .service(cart::delete_cart)
        .service(checkout::post_checkout)
        .service(get_orders);
}

/// Run the server
pub async fn run(config: ServerConfig) -> std::io::Result<()> {
    let ServerConfig {
        addr,
        catalog_seed,
        processing_delay,
        cart_idle_timeout,
    } = config;
    let state = AppState::new(Catalog::generate(catalog_seed), processing_delay);

    let cancel_token = CancellationToken::new();
    let sweeper = tokio::spawn(cart_sweeper(
        state.clone(),
        cart_idle_timeout,
        SWEEP_INTERVAL,
        cancel_token.clone(),
    ));

    info!("listening on {}", addr);
    let data = web::Data::new(state);
    let result = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(data.clone())
            .configure(configure)
    })
        .bind(addr)?
        .run()
        .await;

    cancel_token.cancel();
    if let Err(e) = sweeper.await {
        error!("cart sweeper ended abnormally, {}", e);
    }
    result
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::time::Duration;
    use crate::server::catalog::tests::catalog;
    use crate::server::state::AppState;

    /// Fixed catalog seed, no processing delay.
    pub(crate) fn app_state() -> AppState {
        AppState::new(catalog(), Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use super::*;

    #[actix_web::test]
    async fn browse_to_checkout() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_util::app_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/v1/restaurants?search=taco&sort_by=minOrder")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let restaurant_id = body["restaurants"][0]["id"].as_str().unwrap().to_string();
        assert_eq!(restaurant_id, "6");

        let req = test::TestRequest::get()
            .uri(&format!("/v1/restaurants/{restaurant_id}/menu?category=mains&search=fish"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let item_id = body["items"][0]["id"].as_str().unwrap().to_string();
        assert_eq!(body["items"][0]["name"], "Fish Tacos");

        let req = test::TestRequest::post().uri("/v1/carts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let cart_id = body["cart_id"].as_u64().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/v1/cart/{cart_id}/items"))
            .set_json(json!({ "item_id": item_id, "quantity": 3 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cart"]["items"][0]["restaurant_name"], "Taco Fiesta");

        let req = test::TestRequest::post()
            .uri(&format!("/v1/cart/{cart_id}/checkout"))
            .set_json(json!({
                "customer": { "name": "Lin", "phone": "555-0100", "address": "9 Elm St" }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        // 3 x 14.99
        assert_eq!(body["order"]["totals"]["subtotal"], 4497);
        assert_eq!(body["order"]["totals"]["total"], 4857);

        let req = test::TestRequest::get().uri("/v1/orders").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["orders"][0]["order_id"], 1);
    }
}
