pub mod constraint_validator;

pub use constraint_validator::ConstraintValidator;
