//! Entity module - Contains the SeaORM entity definitions for the database.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod product;

pub use product::{
    Column as ProductColumn, Entity as Product, Model as ProductModel, ProductStatus,
};
