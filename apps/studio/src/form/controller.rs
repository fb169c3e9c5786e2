//! Form state controller — copy-on-write edits over the resume record.
//!
//! Every operation takes `&self` and returns a new `ResumeRecord` with one
//! change applied; the previous record is left untouched. Indexed operations
//! validate the index and fail loudly — the form UI derives its buttons from
//! the rendered list, so an out-of-range index is a programming bug, never a
//! user action.

use crate::errors::AppError;
use crate::models::resume::{EducationEntry, ExperienceEntry, ResumeRecord};

/// Selector for the personal-info fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Address,
}

/// Selector for the fields of one experience entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExperienceField {
    Company,
    Position,
    Duration,
    Description,
}

/// Selector for the fields of one education entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EducationField {
    Institution,
    Degree,
    Year,
}

impl ResumeRecord {
    /// Returns a copy with one personal-info field replaced.
    pub fn with_personal(&self, field: PersonalField, value: impl Into<String>) -> ResumeRecord {
        let mut next = self.clone();
        let value = value.into();
        match field {
            PersonalField::Name => next.personal.name = value,
            PersonalField::Email => next.personal.email = value,
            PersonalField::Phone => next.personal.phone = value,
            PersonalField::Address => next.personal.address = value,
        }
        next
    }

    /// Returns a copy with one field of the experience entry at `index`
    /// replaced.
    pub fn with_experience_field(
        &self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<ResumeRecord, AppError> {
        let mut next = self.clone();
        let entry = next
            .experience
            .get_mut(index)
            .ok_or_else(|| stale_index("experience", index))?;
        let value = value.into();
        match field {
            ExperienceField::Company => entry.company = value,
            ExperienceField::Position => entry.position = value,
            ExperienceField::Duration => entry.duration = value,
            ExperienceField::Description => entry.description = value,
        }
        Ok(next)
    }

    /// Returns a copy with one field of the education entry at `index`
    /// replaced.
    pub fn with_education_field(
        &self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<ResumeRecord, AppError> {
        let mut next = self.clone();
        let entry = next
            .education
            .get_mut(index)
            .ok_or_else(|| stale_index("education", index))?;
        let value = value.into();
        match field {
            EducationField::Institution => entry.institution = value,
            EducationField::Degree => entry.degree = value,
            EducationField::Year => entry.year = value,
        }
        Ok(next)
    }

    /// Returns a copy with a blank experience entry appended.
    pub fn push_blank_experience(&self) -> ResumeRecord {
        let mut next = self.clone();
        next.experience.push(ExperienceEntry::default());
        next
    }

    /// Returns a copy with the experience entry at `index` removed. The
    /// vector may become empty.
    pub fn remove_experience(&self, index: usize) -> Result<ResumeRecord, AppError> {
        if index >= self.experience.len() {
            return Err(stale_index("experience", index));
        }
        let mut next = self.clone();
        next.experience.remove(index);
        Ok(next)
    }

    /// Returns a copy with a blank education entry appended.
    pub fn push_blank_education(&self) -> ResumeRecord {
        let mut next = self.clone();
        next.education.push(EducationEntry::default());
        next
    }

    /// Returns a copy with the education entry at `index` removed. The
    /// vector may become empty.
    pub fn remove_education(&self, index: usize) -> Result<ResumeRecord, AppError> {
        if index >= self.education.len() {
            return Err(stale_index("education", index));
        }
        let mut next = self.clone();
        next.education.remove(index);
        Ok(next)
    }

    /// Returns a copy with the skills string replaced.
    pub fn with_skills(&self, value: impl Into<String>) -> ResumeRecord {
        let mut next = self.clone();
        next.skills = value.into();
        next
    }

    /// Returns a copy with the picture data URI replaced.
    pub fn with_picture(&self, data_uri: impl Into<String>) -> ResumeRecord {
        let mut next = self.clone();
        next.picture_data_uri = data_uri.into();
        next
    }
}

fn stale_index(section: &str, index: usize) -> AppError {
    AppError::Validation(format!("No {section} entry at index {index}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ResumeRecord {
        ResumeRecord::blank()
            .with_personal(PersonalField::Name, "Jane Doe")
            .with_personal(PersonalField::Email, "jane@x.com")
    }

    #[test]
    fn test_with_personal_replaces_only_one_field() {
        let record = sample();
        let next = record.with_personal(PersonalField::Phone, "555-1234");
        assert_eq!(next.personal.phone, "555-1234");
        assert_eq!(next.personal.name, "Jane Doe");
        assert_eq!(next.personal.email, "jane@x.com");
        // The original snapshot is untouched.
        assert_eq!(record.personal.phone, "");
    }

    #[test]
    fn test_with_experience_field_updates_at_index() {
        let record = sample().push_blank_experience();
        let next = record
            .with_experience_field(1, ExperienceField::Company, "Acme")
            .unwrap();
        assert_eq!(next.experience[1].company, "Acme");
        assert_eq!(next.experience[0].company, "");
        assert_eq!(record.experience[1].company, "");
    }

    #[test]
    fn test_with_experience_field_rejects_stale_index() {
        let record = sample();
        let err = record
            .with_experience_field(5, ExperienceField::Position, "Engineer")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_add_then_remove_restores_prior_sequence() {
        let record = sample();
        let grown = record.push_blank_experience();
        assert_eq!(grown.experience.len(), 2);
        let shrunk = grown.remove_experience(1).unwrap();
        assert_eq!(shrunk.experience, record.experience);

        let grown = record.push_blank_education();
        let shrunk = grown.remove_education(1).unwrap();
        assert_eq!(shrunk.education, record.education);
    }

    #[test]
    fn test_removal_may_empty_the_sequence() {
        let record = sample();
        let next = record.remove_experience(0).unwrap();
        assert!(next.experience.is_empty());
        let next = next.remove_education(0).unwrap();
        assert!(next.education.is_empty());
    }

    #[test]
    fn test_remove_rejects_stale_index() {
        let record = sample().remove_education(0).unwrap();
        let err = record.remove_education(0).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_with_skills_and_picture_replace_strings() {
        let record = sample();
        let next = record
            .with_skills("Rust, SQL")
            .with_picture("data:image/png;base64,AAAA");
        assert_eq!(next.skills, "Rust, SQL");
        assert!(next.has_picture());
        assert!(!record.has_picture());
    }

    #[test]
    fn test_entry_order_is_preserved_across_edits() {
        let record = sample().push_blank_experience().push_blank_experience();
        let record = record
            .with_experience_field(0, ExperienceField::Company, "First")
            .unwrap()
            .with_experience_field(1, ExperienceField::Company, "Second")
            .unwrap()
            .with_experience_field(2, ExperienceField::Company, "Third")
            .unwrap();
        let record = record.remove_experience(1).unwrap();
        let companies: Vec<&str> = record
            .experience
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(companies, vec!["First", "Third"]);
    }
}
