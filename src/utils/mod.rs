pub mod collation;
pub mod validation;
