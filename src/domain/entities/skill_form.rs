use crate::{
    constants::{DEFAULT_LEVEL, DEFAULT_TARGET_LEVEL},
    entities::{
        option_fields::{EditString, OptionField},
        skill::{Skill, SkillPayload},
    },
};

/// Raw text input for a new skill, as typed into a form or passed on the
/// command line.
#[derive(Debug, Clone, Default)]
pub struct SkillForm {
    pub name: String,
    pub category: String,
    pub level: String,
    pub target_level: String,
    pub deadline: String,
    pub notes: String,
}

impl SkillForm {
    pub fn named(name: impl Into<String>) -> Self {
        SkillForm {
            name: name.into(),
            ..Default::default()
        }
    }
}

impl From<SkillForm> for SkillPayload {
    fn from(form: SkillForm) -> Self {
        SkillPayload {
            name: form.name,
            category: non_empty(form.category),
            level: coerce_level(&form.level, DEFAULT_LEVEL),
            target_level: coerce_level(&form.target_level, DEFAULT_TARGET_LEVEL),
            deadline: non_empty(form.deadline),
            notes: non_empty(form.notes),
        }
    }
}

/// Per-field changes applied to a fetched record before a full replace.
#[derive(Debug, Clone, Default)]
pub struct SkillEdit {
    pub name: OptionField<String>,
    pub category: EditString,
    pub level: OptionField<i32>,
    pub target_level: OptionField<i32>,
    pub deadline: EditString,
    pub notes: EditString,
}

impl SkillEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_unchanged()
            && self.category.is_unchanged()
            && self.level.is_unchanged()
            && self.target_level.is_unchanged()
            && self.deadline.is_unchanged()
            && self.notes.is_unchanged()
    }

    /// Builds the replacement payload. Every field is sent, edited or not.
    pub fn apply_to(self, current: Skill) -> SkillPayload {
        SkillPayload {
            name: self.name.apply_required(current.name, String::new()),
            category: self.category.apply(current.category),
            level: self.level.apply_required(current.level, 0),
            target_level: self.target_level.apply_required(current.target_level, 0),
            deadline: self.deadline.apply(current.deadline),
            notes: self.notes.apply(current.notes),
        }
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

// Zero counts as missing, so "0" also falls back. Integral decimals such as
// "2.0" are accepted; fractional ones are not.
fn coerce_level(raw: &str, fallback: i32) -> i32 {
    match raw.trim().parse::<f64>() {
        Ok(n)
            if n.is_finite()
                && n != 0.0
                && n.fract() == 0.0
                && n >= f64::from(i32::MIN)
                && n <= f64::from(i32::MAX) =>
        {
            n as i32
        }
        _ => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::skill::SkillId;

    #[test]
    fn form_coerces_levels_with_defaults() {
        let form = SkillForm {
            level: "abc".into(),
            target_level: "".into(),
            ..SkillForm::named("Machine Learning")
        };

        let payload = SkillPayload::from(form);

        assert_eq!(payload.level, DEFAULT_LEVEL);
        assert_eq!(payload.target_level, DEFAULT_TARGET_LEVEL);
    }

    #[test]
    fn form_keeps_numeric_levels_and_drops_empty_text() {
        let form = SkillForm {
            level: " 2 ".into(),
            target_level: "3".into(),
            category: "".into(),
            notes: "weekly course".into(),
            ..SkillForm::named("Data Analysis")
        };

        let payload = SkillPayload::from(form);

        assert_eq!(payload.level, 2);
        assert_eq!(payload.target_level, 3);
        assert_eq!(payload.category, None);
        assert_eq!(payload.notes.as_deref(), Some("weekly course"));
    }

    #[test]
    fn zero_level_falls_back() {
        assert_eq!(coerce_level("0", DEFAULT_LEVEL), DEFAULT_LEVEL);
        assert_eq!(coerce_level("0.0", DEFAULT_LEVEL), DEFAULT_LEVEL);
    }

    #[test]
    fn integral_decimal_level_is_numeric() {
        assert_eq!(coerce_level("2.0", DEFAULT_LEVEL), 2);
        assert_eq!(coerce_level(" 3.00 ", DEFAULT_TARGET_LEVEL), 3);
    }

    #[test]
    fn fractional_or_out_of_range_level_falls_back() {
        assert_eq!(coerce_level("2.5", DEFAULT_LEVEL), DEFAULT_LEVEL);
        assert_eq!(coerce_level("NaN", DEFAULT_LEVEL), DEFAULT_LEVEL);
        assert_eq!(coerce_level("inf", DEFAULT_LEVEL), DEFAULT_LEVEL);
        assert_eq!(coerce_level("1e12", DEFAULT_LEVEL), DEFAULT_LEVEL);
    }

    #[test]
    fn edit_replaces_only_touched_fields() {
        let current = SkillPayload::new("Leadership", 1, 3)
            .with_category("soft")
            .with_deadline("2026-12-31")
            .into_skill(SkillId(9));

        let edit = SkillEdit {
            level: OptionField::SetToValue(2),
            deadline: OptionField::SetToNull,
            ..Default::default()
        };

        let payload = edit.apply_to(current);

        assert_eq!(payload.name, "Leadership");
        assert_eq!(payload.category.as_deref(), Some("soft"));
        assert_eq!(payload.level, 2);
        assert_eq!(payload.deadline, None);
    }

    #[test]
    fn default_edit_is_empty() {
        assert!(SkillEdit::default().is_empty());
    }
}
