pub mod option_fields;
pub mod skill;
pub mod skill_form;
pub mod summary;
