use actix_web::{error, HttpResponse};
use actix_web::http::StatusCode;
use derive_more::{Display, Error};
use serde::Serialize;
use crate::server::model::cart::CartError;
use crate::server::model::filter::FilterError;
use crate::server::model::order::CheckoutError;
use crate::server::model::Notice;

#[derive(Debug, Display, Error)]
pub(crate) enum CustomError {
    #[display("invalid request: {reason}")]
    BadRequest { reason: String },
    #[display("resource not found")]
    ResourceNotFound,
    #[display("{_0}")]
    Cart(CartError),
    #[display("{_0}")]
    Checkout(CheckoutError),
}

impl CustomError {
    pub fn bad_request(reason: impl ToString) -> Self {
        CustomError::BadRequest {
            reason: reason.to_string(),
        }
    }
}

impl From<CartError> for CustomError {
    fn from(e: CartError) -> Self {
        CustomError::Cart(e)
    }
}

impl From<CheckoutError> for CustomError {
    fn from(e: CheckoutError) -> Self {
        CustomError::Checkout(e)
    }
}

impl From<FilterError> for CustomError {
    fn from(e: FilterError) -> Self {
        CustomError::bad_request(e)
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    notice: Option<Notice>,
}

impl error::ResponseError for CustomError {
    fn status_code(&self) -> StatusCode {
        match self {
            CustomError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            CustomError::ResourceNotFound => StatusCode::NOT_FOUND,
            CustomError::Cart(e) => match e {
                CartError::CartNotFound { .. }
                | CartError::ItemNotFound { .. }
                | CartError::UnknownMenuItem { .. } => StatusCode::NOT_FOUND,
                CartError::RestaurantClosed { .. } => StatusCode::CONFLICT,
                CartError::InvalidQuantity => StatusCode::BAD_REQUEST,
            },
            CustomError::Checkout(e) => match e {
                CheckoutError::MissingInformation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutError::EmptyCart => StatusCode::CONFLICT,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        let notice = match self {
            CustomError::Checkout(e) => Some(e.notice()),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorBody {
            message: self.to_string(),
            notice,
        })
    }
}

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(
            CustomError::from(CartError::InvalidQuantity).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CustomError::from(CartError::ItemNotFound { id: "1-1".to_string() }).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CustomError::from(CheckoutError::EmptyCart).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            CustomError::from(FilterError::InvertedFeeRange { min: 2, max: 1 }).status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn message_passes_through() {
        let err = CustomError::from(CartError::RestaurantClosed {
            name: "Tokyo Sushi Bar".to_string(),
        });
        assert_eq!(err.to_string(), "Tokyo Sushi Bar is closed and not taking orders");
    }
}
