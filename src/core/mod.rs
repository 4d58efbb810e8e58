pub mod detail;
pub mod landing;
pub mod layout;
pub mod parallax;
pub mod portfolio;
pub mod reveal;
pub mod route;
pub mod store;
pub mod timer;
pub mod welcome;
