pub mod validate;
pub mod validate_rules;
