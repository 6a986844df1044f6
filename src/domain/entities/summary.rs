use serde::Serialize;

use crate::entities::skill::Skill;

/// Aggregate counts shown on the insights view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummary {
    pub total: usize,
    pub reached_target: usize,
    pub in_progress: usize,
}

impl SkillSummary {
    pub fn from_skills(skills: &[Skill]) -> Self {
        let total = skills.len();
        let reached_target = skills
            .iter()
            .filter(|s| s.level >= s.target_level)
            .count();

        SkillSummary {
            total,
            reached_target,
            in_progress: total - reached_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::skill::{SkillId, SkillPayload};

    #[test]
    fn counts_skills_at_or_above_target() {
        let skills = vec![
            SkillPayload::new("Critical Thinking", 3, 3).into_skill(SkillId(1)),
            SkillPayload::new("Machine Learning", 1, 3).into_skill(SkillId(2)),
            SkillPayload::new("Negotiation", 3, 2).into_skill(SkillId(3)),
        ];

        let summary = SkillSummary::from_skills(&skills);

        assert_eq!(summary, SkillSummary { total: 3, reached_target: 2, in_progress: 1 });
    }

    #[test]
    fn empty_list_is_all_zero() {
        assert_eq!(SkillSummary::from_skills(&[]), SkillSummary::default());
    }
}
