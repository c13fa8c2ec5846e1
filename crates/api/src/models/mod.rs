//! Request/response and persistence models for the API.

pub mod cart;
pub mod order;

pub use cart::CartLineInput;
pub use order::{CustomerAddress, NewOrder, Order, PaymentOutcome};
