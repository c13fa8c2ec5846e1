//! External collaborators and the quote builder.

pub mod pricing;
pub mod stripe;
