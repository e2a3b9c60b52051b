pub mod offer;
pub mod order;
pub mod user;

pub use offer::{Offer, OfferFields};
pub use order::{Order, OrderFields};
pub use user::{User, UserFields};
