use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::entities::{
    option_fields::{EditString, OptionField},
    skill::Skill,
    skill_form::{SkillEdit, SkillForm},
    summary::SkillSummary,
};

/// Track future-of-work skills against a remote skill store
#[derive(Parser, Debug, Clone)]
#[command(name = "future_skills")]
#[command(version)]
pub struct Cli {
    /// Store base URL including its path prefix; overrides APP_API_BASE_URL
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<Url>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List every skill
    List,
    /// Show one skill
    Show {
        id: String,
    },
    /// Create a skill
    Add(AddArgs),
    /// Change fields of a skill; the rest of the record is sent unchanged
    Edit(EditArgs),
    /// Delete a skill
    Delete {
        id: String,
    },
    /// Count skills and how many reached their target level
    Insights,
    /// Run an in-memory skill store for local development
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub category: String,
    /// Current level, 1 (beginner) to 3 (advanced)
    #[arg(long, default_value = "1")]
    pub level: String,
    #[arg(long, default_value = "3")]
    pub target_level: String,
    /// YYYY-MM-DD
    #[arg(long, default_value = "")]
    pub deadline: String,
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<AddArgs> for SkillForm {
    fn from(args: AddArgs) -> Self {
        SkillForm {
            name: args.name,
            category: args.category,
            level: args.level,
            target_level: args.target_level,
            deadline: args.deadline,
            notes: args.notes,
        }
    }
}

/// Omitted flags keep the current value; an empty string clears an optional field.
#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub level: Option<i32>,
    #[arg(long)]
    pub target_level: Option<i32>,
    #[arg(long)]
    pub deadline: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

impl EditArgs {
    pub fn into_edit(self) -> (String, SkillEdit) {
        let edit = SkillEdit {
            name: EditString::from_input(self.name),
            category: EditString::from_input(self.category),
            level: self.level.map_or(OptionField::Unchanged, OptionField::SetToValue),
            target_level: self
                .target_level
                .map_or(OptionField::Unchanged, OptionField::SetToValue),
            deadline: EditString::from_input(self.deadline),
            notes: EditString::from_input(self.notes),
        };
        (self.id, edit)
    }
}

/// One-line rendering of a skill.
pub fn format_skill(skill: &Skill) -> String {
    let mut line = format!(
        "#{} {} | level {} / target {}",
        skill.id, skill.name, skill.level, skill.target_level
    );
    if let Some(category) = &skill.category {
        line.push_str(&format!(" | {}", category));
    }
    if let Some(deadline) = &skill.deadline {
        line.push_str(&format!(" | due {}", deadline));
    }
    line
}

pub fn format_skill_details(skill: &Skill) -> String {
    let mut out = format_skill(skill);
    if let Some(notes) = &skill.notes {
        out.push_str(&format!("\n  notes: {}", notes));
    }
    out
}

pub fn format_summary(summary: &SkillSummary) -> String {
    format!(
        "{} skills tracked\n{} reached target\n{} in progress",
        summary.total, summary.reached_target, summary.in_progress
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::skill::{SkillId, SkillPayload};

    #[test]
    fn parses_edit_with_cleared_field() {
        let cli = Cli::try_parse_from([
            "future_skills", "edit", "4", "--level", "2", "--notes", "",
        ])
        .unwrap();

        let Commands::Edit(args) = cli.command else {
            panic!("expected edit command");
        };
        let (id, edit) = args.into_edit();

        assert_eq!(id, "4");
        assert_eq!(edit.level, OptionField::SetToValue(2));
        assert_eq!(edit.notes, OptionField::SetToNull);
        assert!(edit.name.is_unchanged());
    }

    #[test]
    fn add_defaults_match_form_defaults() {
        let cli = Cli::try_parse_from(["future_skills", "add", "--name", "AI literacy"]).unwrap();

        let Commands::Add(args) = cli.command else {
            panic!("expected add command");
        };
        let payload = SkillPayload::from(SkillForm::from(args));

        assert_eq!(payload, SkillPayload::new("AI literacy", 1, 3));
    }

    #[test]
    fn base_url_is_accepted_after_the_subcommand() {
        let cli = Cli::try_parse_from([
            "future_skills", "list", "--base-url", "http://10.0.2.2:8080/api",
        ])
        .unwrap();

        assert_eq!(cli.base_url.unwrap().as_str(), "http://10.0.2.2:8080/api");
    }

    #[test]
    fn formats_optional_fields_only_when_present() {
        let bare = SkillPayload::new("Negotiation", 2, 3).into_skill(SkillId(1));
        let full = SkillPayload::new("Machine Learning", 1, 3)
            .with_category("tech")
            .with_deadline("2026-12-31")
            .with_notes("finish course")
            .into_skill(SkillId(2));

        assert_eq!(format_skill(&bare), "#1 Negotiation | level 2 / target 3");
        assert_eq!(
            format_skill_details(&full),
            "#2 Machine Learning | level 1 / target 3 | tech | due 2026-12-31\n  notes: finish course"
        );
    }
}
