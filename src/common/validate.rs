pub trait Validatable {
    fn validate(&self, result: &mut Validation);
}

pub trait Rule<Value> {
    fn validate(field: &str, value: &Value, result: &mut Validation);
}

pub struct Validation {
    scope: Vec<String>,
    errors: Vec<String>,
}

impl Validation {
    pub fn validate(item: &impl Validatable) -> Validation {
        let mut instance = Validation::new();

        item.validate(&mut instance);

        instance
    }

    pub fn new() -> Self {
        Self {
            scope: vec![],
            errors: vec![],
        }
    }

    pub fn validate_rule<RuleType, Value>(&mut self, field: &str, value: &Value)
    where
        RuleType: Rule<Value>,
    {
        RuleType::validate(field, value, self);
    }

    pub fn validate_child(&mut self, scope: &str, item: &impl Validatable) {
        self.scope.push(scope.to_owned());
        item.validate(self);
        self.scope.pop();
    }

    pub fn add_error(&mut self, error: &str) {
        if self.scope.is_empty() {
            self.errors.push(error.to_owned());
        } else {
            self.errors.push(format!("{}: {}", self.scope.join("."), error));
        }
    }

    pub fn add_field_error(&mut self, field: &str, error: &str) {
        let mut path = self.scope.join(".");

        if !path.is_empty() {
            path.push('.');
        }

        self.errors.push(format!("{}{}: {}", path, field, error));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &Vec<String> {
        &self.errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestValidatable {
        is_valid: bool,
    }

    impl Validatable for TestValidatable {
        fn validate(&self, result: &mut Validation) {
            if !self.is_valid {
                result.add_error("TestValidatable is invalid");
            }
        }
    }

    struct TestRule;

    impl Rule<bool> for TestRule {
        fn validate(field: &str, value: &bool, result: &mut Validation) {
            if !value {
                result.add_field_error(field, "TestRule validation failed");
            }
        }
    }

    #[test]
    fn test_validatable() {
        let valid_result = Validation::validate(&TestValidatable { is_valid: true });
        let invalid_result = Validation::validate(&TestValidatable { is_valid: false });

        assert!(valid_result.is_valid());
        assert!(!invalid_result.is_valid());
        assert_eq!(invalid_result.errors(), &vec!["TestValidatable is invalid"]);
    }

    #[test]
    fn test_rule() {
        let mut validation = Validation::new();
        validation.validate_rule::<TestRule, bool>("test_field", &true);
        assert!(validation.is_valid());

        validation.validate_rule::<TestRule, bool>("test_field", &false);
        assert!(!validation.is_valid());
        assert_eq!(
            validation.errors()[0],
            "test_field: TestRule validation failed"
        );
    }

    #[test]
    fn test_child_scope_prefixes_errors() {
        struct Child;

        impl Validatable for Child {
            fn validate(&self, result: &mut Validation) {
                result.add_field_error("value", "is wrong");
            }
        }

        let mut validation = Validation::new();
        validation.validate_child("child", &Child);

        assert_eq!(validation.errors()[0], "child.value: is wrong");
    }
}
