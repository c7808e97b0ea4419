pub mod budget;
pub mod category;
pub mod expense;
pub mod favorites;
pub mod product;
pub mod sample;
