use actix_web::{get, web, HttpRequest, Responder};
use log::{info, warn};
use crate::server::catalog::CUISINES;
use crate::server::controller::error::CustomError;
use crate::server::model::filter::{RestaurantFilter, RestaurantQuery};
use crate::server::model::restaurant::{GetCuisinesResponse, GetRestaurantsResponse};
use crate::server::state::AppState;

#[get("/v1/restaurants")]
/// list restaurants, filtered and sorted
pub(crate) async fn get_restaurants(req: HttpRequest, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let query = web::Query::<RestaurantQuery>::from_query(req.query_string())
        .map_err(|e| {
            warn!("get_restaurants got a malformed query, {}", e);
            CustomError::bad_request(e)
        })?
        .into_inner();
    let filter = RestaurantFilter::try_from(query)?;
    let restaurants = data
        .get_catalog()
        .filter_restaurants(&filter)
        .into_iter()
        .cloned()
        .collect::<Vec<_>>();
    info!("get_restaurants matched={} filter={:?}", restaurants.len(), filter);

    Ok(web::Json(GetRestaurantsResponse {
        total: restaurants.len(),
        restaurants,
    }))
}

#[get("/v1/restaurants/{id}")]
/// one restaurant
pub(crate) async fn get_restaurant(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    data.get_catalog()
        .restaurant(&id)
        .cloned()
        .map(web::Json)
        .ok_or(CustomError::ResourceNotFound)
}

#[get("/v1/cuisines")]
/// cuisine tags offered for filtering
pub(crate) async fn get_cuisines() -> impl Responder {
    web::Json(GetCuisinesResponse {
        cuisines: CUISINES.to_vec(),
    })
}
