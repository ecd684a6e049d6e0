use actix_web::{post, web, Responder};
use actix_web::rt::time;
use log::{info, warn};
use crate::server::controller::error::CustomError;
use crate::server::model::cart::CartId;
use crate::server::model::order::{
    CheckoutError, OrderConfirmation, PostCheckoutRequest, PostCheckoutResponse, ESTIMATED_DELIVERY,
};
use crate::server::model::{format_price, Notice};
use crate::server::state::AppState;
use crate::server::util::time as clock;

#[post("/v1/cart/{id}/checkout")]
/// Place the order held in a cart.
///
/// The lines move out of the cart before the (simulated) processing starts,
/// so they end up in exactly one order and anything added meanwhile stays
/// in the cart. A rejected checkout leaves the cart untouched.
pub(crate) async fn post_checkout(id: web::Path<CartId>, body: web::Json<PostCheckoutRequest>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let id = id.into_inner();
    let PostCheckoutRequest { customer } = body.into_inner();
    let validation = customer.validate();

    let (items, totals) = data
        .with_cart(id, |cart| {
            Ok(if cart.is_empty() {
                Err(CheckoutError::EmptyCart)
            } else {
                validation.map(|()| {
                    let totals = cart.totals();
                    (cart.take_items(), totals)
                })
            })
        })
        .await?
        .inspect_err(|e| warn!("cart={} checkout rejected, {}", id, e))?;

    time::sleep(data.get_processing_delay()).await;

    let order = OrderConfirmation {
        order_id: data.next_order_id(),
        placed_at: clock::helper::get_utc_now(),
        items,
        totals,
        customer,
        estimated_delivery: ESTIMATED_DELIVERY,
    };
    info!("cart={} placed order={} total={}", id, order.order_id, order.totals.total);
    data.record_order(order.clone()).await;

    let notice = Notice::info(
        "Order Placed Successfully!",
        format!(
            "Your order for {} has been confirmed. Estimated delivery: {}.",
            format_price(order.totals.total),
            ESTIMATED_DELIVERY
        ),
    );
    Ok(web::Json(PostCheckoutResponse { order, notice }))
}
