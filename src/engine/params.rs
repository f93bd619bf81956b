//! Parsing of the free-text value and position inputs

/// The value input of an operation
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ValueInput {
    /// Empty input: inserts draw a value from the value source
    #[default]
    Random,
    Given(i32),
    /// Text that is not an integer, kept for the narration
    Invalid(String),
}

impl ValueInput {
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ValueInput::Random;
        }
        match trimmed.parse::<i32>() {
            Ok(value) => ValueInput::Given(value),
            Err(_) => ValueInput::Invalid(trimmed.to_string()),
        }
    }

    /// The explicit value, if one was given
    pub fn given(&self) -> Option<i32> {
        match self {
            ValueInput::Given(value) => Some(*value),
            _ => None,
        }
    }
}

/// Empty, non-numeric or negative positions fall back to 0
pub fn parse_position(text: &str) -> usize {
    text.trim().parse::<usize>().unwrap_or(0)
}

/// Parameters of one run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OperationParams {
    pub value: ValueInput,
    pub position: usize,
}

impl OperationParams {
    pub fn parse(value_text: &str, position_text: &str) -> Self {
        OperationParams {
            value: ValueInput::parse(value_text),
            position: parse_position(position_text),
        }
    }

    pub fn with_value(value: i32) -> Self {
        OperationParams {
            value: ValueInput::Given(value),
            position: 0,
        }
    }

    pub fn at(mut self, position: usize) -> Self {
        self.position = position;
        self
    }
}
