pub(crate) mod cart;
pub(crate) mod checkout;
pub(crate) mod error;
pub(crate) mod menu;
pub(crate) mod restaurants;
