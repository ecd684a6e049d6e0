use actix_web::{delete, get, patch, post, web, HttpResponse, Responder};
use log::info;
use crate::server::catalog::Catalog;
use crate::server::controller::error::CustomError;
use crate::server::model::cart::{
    Cart, CartError, CartId, CartMutationResponse, GetCartResponse, PatchCartItemRequest,
    PostCartItemsRequest, PostCartsResponse,
};
use crate::server::model::Notice;
use crate::server::state::AppState;

pub(crate) fn cart_view(catalog: &Catalog, cart_id: CartId, cart: &Cart) -> GetCartResponse {
    GetCartResponse {
        cart_id,
        items: cart.lines(|id| catalog.restaurant_name(id)),
        item_count: cart.item_count(),
        totals: cart.totals(),
    }
}

fn removed_notice() -> Notice {
    Notice::destructive("Item removed", "Item has been removed from your cart.")
}

#[post("/v1/carts")]
/// open a new cart
pub(crate) async fn post_carts(data: web::Data<AppState>) -> impl Responder {
    let cart_id = data.create_cart().await;
    info!("cart={} created", cart_id);
    HttpResponse::Created().json(PostCartsResponse { cart_id })
}

#[get("/v1/cart/{id}")]
/// cart content and totals
pub(crate) async fn get_cart(id: web::Path<CartId>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    let catalog = data.get_catalog();
    let view = data
        .with_cart(id, |cart| Ok(cart_view(catalog, id, cart)))
        .await?;
    Ok(web::Json(view))
}

#[post("/v1/cart/{id}/items")]
/// add an item, merging with an existing line
pub(crate) async fn post_cart_items(id: web::Path<CartId>, body: web::Json<PostCartItemsRequest>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    let PostCartItemsRequest { item_id, quantity } = body.into_inner();
    let catalog = data.get_catalog();

    let item = catalog
        .menu_item(&item_id)
        .ok_or_else(|| CartError::UnknownMenuItem { id: item_id.clone() })?;
    if let Some(restaurant) = catalog.restaurant(&item.restaurant_id) {
        if !restaurant.is_open {
            return Err(CartError::RestaurantClosed {
                name: restaurant.name.clone(),
            }
            .into());
        }
    }

    let quantity = quantity.unwrap_or(1);
    let cart = data
        .with_cart(id, |cart| {
            cart.add(item, quantity)?;
            Ok(cart_view(catalog, id, cart))
        })
        .await?;
    info!("cart={} added {}x {}", id, quantity, item.id);

    Ok(web::Json(CartMutationResponse {
        cart,
        notice: Some(Notice::info(
            "Added to cart!",
            format!("{}x {} added to your cart.", quantity, item.name),
        )),
    }))
}

#[patch("/v1/cart/{id}/item/{item_id}")]
/// set an item's quantity, zero removes it
pub(crate) async fn patch_cart_item(path: web::Path<(CartId, String)>, body: web::Json<PatchCartItemRequest>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let (id, item_id) = path.into_inner();
    let quantity = body.quantity;
    let catalog = data.get_catalog();

    let (cart, removed) = data
        .with_cart(id, |cart| {
            let removed = cart.update_quantity(&item_id, quantity)?.is_none();
            Ok((cart_view(catalog, id, cart), removed))
        })
        .await?;
    info!("cart={} item={} quantity={}", id, item_id, quantity);

    Ok(web::Json(CartMutationResponse {
        cart,
        notice: removed.then(removed_notice),
    }))
}

#[delete("/v1/cart/{id}/item/{item_id}")]
/// remove one line from the cart
pub(crate) async fn delete_cart_item(path: web::Path<(CartId, String)>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let (id, item_id) = path.into_inner();
    let catalog = data.get_catalog();

    let cart = data
        .with_cart(id, |cart| {
            cart.remove(&item_id)?;
            Ok(cart_view(catalog, id, cart))
        })
        .await?;
    info!("cart={} removed item={}", id, item_id);

    Ok(web::Json(CartMutationResponse {
        cart,
        notice: Some(removed_notice()),
    }))
}

#[delete("/v1/cart/{id}")]
/// empty the cart, the id stays valid
pub(crate) async fn delete_cart(id: web::Path<CartId>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    let catalog = data.get_catalog();
    let cart = data
        .with_cart(id, |cart| {
            cart.clear();
            Ok(cart_view(catalog, id, cart))
        })
        .await?;
    Ok(web::Json(CartMutationResponse { cart, notice: None }))
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};
    use actix_web::http::StatusCode;
    use serde_json::{json, Value};
    use crate::server::test_util::app_state;
    use super::*;

    macro_rules! cart_app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(app_state()))
                    .service(post_carts)
                    .service(get_cart)
                    .service(post_cart_items)
                    .service(patch_cart_item)
                    .service(delete_cart_item)
                    .service(delete_cart),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn add_update_remove() {
        let app = cart_app!();
        let req = test::TestRequest::post().uri("/v1/carts").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(res).await;
        let cart_id = body["cart_id"].as_u64().unwrap();

        for quantity in [json!(1), json!(2)] {
            let req = test::TestRequest::post()
                .uri(&format!("/v1/cart/{cart_id}/items"))
                .set_json(json!({ "item_id": "1-1", "quantity": quantity }))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body["notice"]["title"], "Added to cart!");
        }
        let req = test::TestRequest::post()
            .uri(&format!("/v1/cart/{cart_id}/items"))
            .set_json(json!({ "item_id": "2-7" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["notice"]["description"], "1x Italian Soda added to your cart.");

        let req = test::TestRequest::get().uri(&format!("/v1/cart/{cart_id}")).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["items"].as_array().unwrap().len(), 2);
        assert_eq!(body["items"][0]["quantity"], 3);
        assert_eq!(body["items"][0]["restaurant_name"], "Spice Kingdom");
        assert_eq!(body["item_count"], 4);
        // 3 x 16.99 + 3.99
        assert_eq!(body["totals"]["subtotal"], 5496);
        assert_eq!(body["totals"]["tax"], 440);
        assert_eq!(body["totals"]["total"], 5936);

        let req = test::TestRequest::patch()
            .uri(&format!("/v1/cart/{cart_id}/item/1-1"))
            .set_json(json!({ "quantity": 0 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["notice"]["title"], "Item removed");
        assert_eq!(body["cart"]["items"].as_array().unwrap().len(), 1);

        let req = test::TestRequest::delete()
            .uri(&format!("/v1/cart/{cart_id}/item/2-7"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cart"]["item_count"], 0);
        assert_eq!(body["cart"]["totals"]["total"], 0);
    }

    #[actix_web::test]
    async fn rejections() {
        let app = cart_app!();
        let req = test::TestRequest::post().uri("/v1/carts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let cart_id = body["cart_id"].as_u64().unwrap();

        let cases = [
            (json!({ "item_id": "5-1" }), StatusCode::CONFLICT),
            (json!({ "item_id": "1-999" }), StatusCode::NOT_FOUND),
            (json!({ "item_id": "1-1", "quantity": 0 }), StatusCode::BAD_REQUEST),
        ];
        for (payload, status) in cases {
            let req = test::TestRequest::post()
                .uri(&format!("/v1/cart/{cart_id}/items"))
                .set_json(payload)
                .to_request();
            assert_eq!(test::call_service(&app, req).await.status(), status);
        }

        let req = test::TestRequest::patch()
            .uri(&format!("/v1/cart/{cart_id}/item/1-1"))
            .set_json(json!({ "quantity": 2 }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

        let req = test::TestRequest::get().uri("/v1/cart/0").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn clear_keeps_cart_id() {
        let app = cart_app!();
        let req = test::TestRequest::post().uri("/v1/carts").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let cart_id = body["cart_id"].as_u64().unwrap();

        let req = test::TestRequest::post()
            .uri(&format!("/v1/cart/{cart_id}/items"))
            .set_json(json!({ "item_id": "4-1", "quantity": 2 }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::delete().uri(&format!("/v1/cart/{cart_id}")).to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["cart"]["items"].as_array().unwrap().len(), 0);

        let req = test::TestRequest::get().uri(&format!("/v1/cart/{cart_id}")).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
