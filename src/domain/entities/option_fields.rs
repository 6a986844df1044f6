/// Edit semantics for a single field of an existing record.
///
/// - `Unchanged` → keep the current value
/// - `SetToNull` → clear an optional field
/// - `SetToValue` → replace with the provided value
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<T> OptionField<T> {
    /// Resolves the edit against the current optional value.
    pub fn apply(self, current: Option<T>) -> Option<T> {
        match self {
            Self::Unchanged => current,
            Self::SetToNull => None,
            Self::SetToValue(v) => Some(v),
        }
    }

    /// Resolves the edit against a required value. `SetToNull` falls back to `cleared`.
    pub fn apply_required(self, current: T, cleared: T) -> T {
        match self {
            Self::Unchanged => current,
            Self::SetToNull => cleared,
            Self::SetToValue(v) => v,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl OptionField<String> {
    /// Reads a raw text input: absent → `Unchanged`, empty → `SetToNull`.
    pub fn from_input(input: Option<String>) -> Self {
        match input {
            None => OptionField::Unchanged,
            Some(s) if s.trim().is_empty() => OptionField::SetToNull,
            Some(s) => OptionField::SetToValue(s),
        }
    }
}

pub type EditString = OptionField<String>;
