pub mod character;
pub mod favorite;
pub mod planet;
pub mod sitemap;
pub mod user;
