pub mod group;
pub mod meeting;
pub mod user;
