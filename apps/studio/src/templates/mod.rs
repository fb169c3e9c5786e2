//! Template rendering — three fixed layout variants over one record.
//!
//! Each variant is a pure function from the record to a `Document`; the
//! variants differ only in presentation (heading sizes, picture placement,
//! section order), never in which data they include.

pub mod classic;
pub mod document;
pub mod minimalist;
pub mod modern;

pub use document::Document;

use crate::models::resume::ResumeRecord;

/// The closed set of template variants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TemplateKind {
    #[default]
    Modern,
    Classic,
    Minimalist,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Modern,
        TemplateKind::Classic,
        TemplateKind::Minimalist,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Modern => "Modern",
            TemplateKind::Classic => "Classic",
            TemplateKind::Minimalist => "Minimalist",
        }
    }
}

/// Renders the record with the selected variant.
pub fn render(record: &ResumeRecord, kind: TemplateKind) -> Document {
    match kind {
        TemplateKind::Modern => modern::render(record),
        TemplateKind::Classic => classic::render(record),
        TemplateKind::Minimalist => minimalist::render(record),
    }
}
