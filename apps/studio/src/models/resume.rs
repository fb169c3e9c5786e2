use serde::{Deserialize, Serialize};

/// Contact block of the resume. Presence of name/email/phone is enforced at
/// submission time; no format checking beyond that.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// One work-experience row. All fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub description: String,
}

/// One education row. All fields are free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: String,
    pub degree: String,
    pub year: String,
}

/// The single in-memory resume record the whole application operates on.
///
/// Vector order is display order. Entries carry no identity beyond their
/// index. Every edit replaces the record with a changed copy (see
/// `form::controller`), so a held reference is always a consistent snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub personal: PersonalInfo,
    /// `data:image/...;base64,` string, or empty when no picture is loaded.
    pub picture_data_uri: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Free text, comma-separated by convention.
    pub skills: String,
}

impl ResumeRecord {
    /// The record as created at startup: all fields blank, with exactly one
    /// blank experience entry and one blank education entry.
    pub fn blank() -> Self {
        Self {
            personal: PersonalInfo::default(),
            picture_data_uri: String::new(),
            experience: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            skills: String::new(),
        }
    }

    pub fn has_picture(&self) -> bool {
        !self.picture_data_uri.is_empty()
    }
}

impl Default for ResumeRecord {
    fn default() -> Self {
        Self::blank()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_record_starts_with_one_entry_per_section() {
        let record = ResumeRecord::blank();
        assert_eq!(record.experience.len(), 1);
        assert_eq!(record.education.len(), 1);
        assert_eq!(record.experience[0], ExperienceEntry::default());
        assert_eq!(record.education[0], EducationEntry::default());
    }

    #[test]
    fn test_blank_record_has_no_picture() {
        assert!(!ResumeRecord::blank().has_picture());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut record = ResumeRecord::blank();
        record.personal.name = "Jane Doe".to_string();
        record.experience[0].company = "Acme".to_string();
        record.skills = "Rust, SQL".to_string();

        let json = serde_json::to_string(&record).unwrap();
        let recovered: ResumeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, record);
    }
}
