pub mod fixture_ops;
pub mod validate;
