//! Minimalist variant — uppercase spaced-out headings, small picture after
//! the contact lines, skills promoted ahead of education.

use crate::models::resume::ResumeRecord;
use crate::templates::document::{Block, Document, PicturePlacement, Style};

fn style() -> Style {
    Style {
        font_stack: "'Segoe UI', Verdana, sans-serif",
        title_pt: 20.0,
        section_pt: 11.0,
        body_pt: 10.0,
        accent: (120, 120, 120),
        centered_header: false,
        uppercase_sections: true,
        underline_sections: false,
        picture_px: 56,
        picture_circular: true,
        picture_placement: PicturePlacement::InlineSmall,
    }
}

pub fn render(record: &ResumeRecord) -> Document {
    let mut header = Vec::new();
    header.push(Block::Title(record.personal.name.clone()));
    header.push(Block::Contact(record.personal.email.clone()));
    header.push(Block::Contact(record.personal.phone.clone()));
    header.push(Block::Contact(record.personal.address.clone()));
    if record.has_picture() {
        header.push(Block::Picture {
            data_uri: record.picture_data_uri.clone(),
        });
    }
    header.push(Block::Rule);

    let mut body = Vec::new();

    body.push(Block::Section("Work Experience".to_string()));
    for entry in &record.experience {
        body.push(Block::Entry {
            heading: format!("{} — {}", entry.position, entry.company),
            meta: entry.duration.clone(),
        });
        body.push(Block::Text(entry.description.clone()));
    }

    body.push(Block::Section("Skills".to_string()));
    body.push(Block::Text(record.skills.clone()));

    body.push(Block::Section("Education".to_string()));
    for entry in &record.education {
        body.push(Block::Entry {
            heading: format!("{} — {}", entry.degree, entry.institution),
            meta: entry.year.clone(),
        });
    }

    Document {
        title: record.personal.name.clone(),
        style: style(),
        header,
        body,
    }
}
