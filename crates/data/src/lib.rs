//! Catalog and booster loading. Normalizes upstream rows into typed cards.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
