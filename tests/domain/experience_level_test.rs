use std::str::FromStr;

use voxhire::domain::ExperienceLevel;

#[test]
fn given_level_strings_then_parsing_is_case_insensitive() {
    assert_eq!(
        ExperienceLevel::from_str("Junior"),
        Ok(ExperienceLevel::Junior)
    );
    assert_eq!(ExperienceLevel::from_str("MID"), Ok(ExperienceLevel::Mid));
    assert_eq!(
        ExperienceLevel::from_str("mid-level"),
        Ok(ExperienceLevel::Mid)
    );
    assert_eq!(
        ExperienceLevel::from_str("senior"),
        Ok(ExperienceLevel::Senior)
    );
}

#[test]
fn given_unknown_level_then_parsing_fails() {
    assert!(ExperienceLevel::from_str("principal").is_err());
}

#[test]
fn given_no_level_then_default_is_junior() {
    assert_eq!(ExperienceLevel::default(), ExperienceLevel::Junior);
}
