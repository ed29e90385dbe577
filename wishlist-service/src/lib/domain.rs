pub mod errors;
pub mod user;
pub mod wishlist;
