pub mod generate;
pub mod generated;
pub mod products;
pub mod profiles;
pub mod templates;
