//! Page Components

mod home;
mod store;

pub use home::HomePage;
pub use store::StorePage;
