use std::fmt;

use crate::model::{AnswerMap, FieldDescriptor};

/// Percentage of required fields that currently hold a non-empty answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Progress(u8);

impl Progress {
    pub const ZERO: Self = Self(0);
    pub const COMPLETE: Self = Self(100);

    /// Progress over `fields` given the current `answers`.
    ///
    /// Rounds half up, and yields zero when no field is required.
    #[must_use]
    pub fn compute(fields: &[FieldDescriptor], answers: &AnswerMap) -> Self {
        let (required, filled) = fields
            .iter()
            .filter(|field| field.is_required())
            .fold((0usize, 0usize), |(required, filled), field| {
                let filled = filled + usize::from(answers.is_filled(field.name()));
                (required + 1, filled)
            });
        Self::from_counts(filled, required)
    }

    /// `round(100 * filled / required)` in integer arithmetic.
    #[must_use]
    pub fn from_counts(filled: usize, required: usize) -> Self {
        if required == 0 {
            return Self::ZERO;
        }
        let filled = filled.min(required);
        let percent = (200 * filled + required) / (2 * required);
        // filled <= required keeps percent within 0..=100
        Self(u8::try_from(percent).unwrap_or(100))
    }

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn is_complete(self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
