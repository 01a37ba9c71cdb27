pub mod movie;

pub use movie::{MovieKey, MovieQueryService};
