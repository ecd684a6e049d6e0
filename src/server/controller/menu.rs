use actix_web::{get, web, HttpRequest, Responder};
use log::warn;
use serde::de::DeserializeOwned;
use crate::server::controller::error::CustomError;
use crate::server::model::menu_item::{
    parse_category_param, GetCategoriesResponse, GetMenuResponse, MenuQuery, SuggestionQuery,
};
use crate::server::model::CommonRequestParams;
use crate::server::state::AppState;

fn parse_query<T: DeserializeOwned>(req: &HttpRequest) -> Result<T, CustomError> {
    web::Query::<T>::from_query(req.query_string())
        .map(web::Query::into_inner)
        .map_err(|e| {
            warn!("failed to parse query string {:?}, {}", req.query_string(), e);
            CustomError::bad_request(e)
        })
}

#[get("/v1/restaurants/{id}/menu")]
/// menu of one restaurant, by category and search text
pub(crate) async fn get_restaurant_menu(id: web::Path<String>, req: HttpRequest, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let MenuQuery { category, search } = parse_query(&req)?;
    let page: CommonRequestParams = parse_query(&req)?;
    let category = parse_category_param(category.as_deref()).map_err(CustomError::bad_request)?;

    let items = data
        .get_catalog()
        .search_menu(&id, category, search.as_deref().unwrap_or_default())
        .ok_or(CustomError::ResourceNotFound)?;
    let total = items.len();

    Ok(web::Json(GetMenuResponse {
        total,
        items: page.paginate(items).into_iter().cloned().collect(),
    }))
}

#[get("/v1/restaurants/{id}/categories")]
/// category tabs of a restaurant page
pub(crate) async fn get_restaurant_categories(id: web::Path<String>, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let categories = data
        .get_catalog()
        .categories(&id)
        .ok_or(CustomError::ResourceNotFound)?;
    Ok(web::Json(GetCategoriesResponse { categories }))
}

#[get("/v1/menu")]
/// browse items of every restaurant
pub(crate) async fn get_menu(req: HttpRequest, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let MenuQuery { category, .. } = parse_query(&req)?;
    let page: CommonRequestParams = parse_query(&req)?;
    let category = parse_category_param(category.as_deref()).map_err(CustomError::bad_request)?;

    let items = data.get_catalog().browse(category);
    let total = items.len();
    Ok(web::Json(GetMenuResponse {
        total,
        items: page.paginate(items).into_iter().cloned().collect(),
    }))
}

#[get("/v1/suggestions")]
/// type-ahead over dish names, descriptions and categories
pub(crate) async fn get_suggestions(req: HttpRequest, data: web::Data<AppState>) -> Result<impl Responder, CustomError> {
    let SuggestionQuery { q } = parse_query(&req)?;
    Ok(web::Json(
        data.get_catalog().suggestions(q.as_deref().unwrap_or_default()),
    ))
}
