pub use super::movies::Entity as Movies;
pub use super::ratings::Entity as Ratings;
