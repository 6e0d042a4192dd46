pub mod generated;
pub mod product;
pub mod profile;
pub mod template;
