pub mod constraint;
pub mod particle;
pub mod types;
