use actix_web::{get, web, HttpResponse};
use crate::server::model::order::GetOrdersResponse;
use crate::server::state::AppState;

#[get("/v1/orders")]
/// orders placed since the server started
pub(crate) async fn get_orders(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("application/json")
        .json(GetOrdersResponse {
            orders: data.get_orders().await,
        })
}
