use std::{fmt, num::ParseIntError, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Store-assigned identifier of a skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillId(pub i64);

impl fmt::Display for SkillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SkillId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(SkillId)
    }
}

impl From<i64> for SkillId {
    fn from(id: i64) -> Self {
        SkillId(id)
    }
}

/// A tracked competency as the store returns it.
///
/// `level` and `target_level` use the 1 (beginner) .. 3 (advanced) scale by
/// convention only; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: SkillId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub level: i32,
    pub target_level: i32,
    /// `YYYY-MM-DD`, kept as the raw string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Body of create and update requests. The store owns `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SkillPayload {
    #[validate(custom(function = "not_blank", message = "Skill name is required"))]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub level: i32,
    pub target_level: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SkillPayload {
    pub fn new(name: impl Into<String>, level: i32, target_level: i32) -> Self {
        SkillPayload {
            name: name.into(),
            category: None,
            level,
            target_level,
            deadline: None,
            notes: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_deadline(mut self, deadline: impl Into<String>) -> Self {
        self.deadline = Some(deadline.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Attaches a store-assigned id, producing the stored record.
    pub fn into_skill(self, id: SkillId) -> Skill {
        Skill {
            id,
            name: self.name,
            category: self.category,
            level: self.level,
            target_level: self.target_level,
            deadline: self.deadline,
            notes: self.notes,
        }
    }
}

impl From<Skill> for SkillPayload {
    fn from(skill: Skill) -> Self {
        SkillPayload {
            name: skill.name,
            category: skill.category,
            level: skill.level,
            target_level: skill.target_level,
            deadline: skill.deadline,
            notes: skill.notes,
        }
    }
}

impl From<&Skill> for SkillPayload {
    fn from(skill: &Skill) -> Self {
        skill.clone().into()
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_omits_absent_optional_fields() {
        let payload = SkillPayload::new("Machine Learning", 1, 3);

        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({"name": "Machine Learning", "level": 1, "targetLevel": 3})
        );
    }

    #[test]
    fn skill_decodes_null_and_missing_optionals_as_absent() {
        let skill: Skill = serde_json::from_value(json!({
            "id": 7,
            "name": "Critical Thinking",
            "category": null,
            "level": 2,
            "targetLevel": 3
        }))
        .unwrap();

        assert_eq!(skill.id, SkillId(7));
        assert_eq!(skill.category, None);
        assert_eq!(skill.deadline, None);
        assert_eq!(skill.notes, None);
    }

    #[test]
    fn converting_a_skill_drops_the_id() {
        let skill = SkillPayload::new("Collaboration", 2, 3)
            .with_notes("pair more often")
            .into_skill(SkillId(4));

        let value = serde_json::to_value(SkillPayload::from(&skill)).unwrap();

        assert!(value.get("id").is_none());
        assert_eq!(value["notes"], "pair more often");
    }

    #[test]
    fn blank_name_fails_validation() {
        assert!(SkillPayload::new("   ", 1, 3).validate().is_err());
        assert!(SkillPayload::new("AI literacy", 1, 3).validate().is_ok());
    }

    #[test]
    fn skill_id_parses_from_its_string_form() {
        assert_eq!(" 12 ".parse::<SkillId>().unwrap(), SkillId(12));
        assert!("twelve".parse::<SkillId>().is_err());
    }
}
