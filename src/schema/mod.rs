pub mod categories;
pub mod v1;
