use super::validate::{Rule, Validation};

pub struct MustBeGreaterThanZero;

impl Rule<u64> for MustBeGreaterThanZero {
    fn validate(field: &str, value: &u64, result: &mut Validation) {
        if *value == 0 {
            result.add_field_error(field, "Value must be greater than zero.");
        }
    }
}

impl Rule<usize> for MustBeGreaterThanZero {
    fn validate(field: &str, value: &usize, result: &mut Validation) {
        if *value == 0 {
            result.add_field_error(field, "Value must be greater than zero.");
        }
    }
}
