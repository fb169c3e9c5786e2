//! Classic variant — left-aligned serif header with the picture floated
//! beside it, underlined headings, sections ordered work → education →
//! skills.

use crate::models::resume::ResumeRecord;
use crate::templates::document::{Block, Document, PicturePlacement, Style};

fn style() -> Style {
    Style {
        font_stack: "Georgia, 'Times New Roman', serif",
        title_pt: 22.0,
        section_pt: 14.0,
        body_pt: 11.0,
        accent: (60, 60, 60),
        centered_header: false,
        uppercase_sections: false,
        underline_sections: true,
        picture_px: 84,
        picture_circular: false,
        picture_placement: PicturePlacement::BesideHeader,
    }
}

pub fn render(record: &ResumeRecord) -> Document {
    let mut header = Vec::new();
    if record.has_picture() {
        header.push(Block::Picture {
            data_uri: record.picture_data_uri.clone(),
        });
    }
    header.push(Block::Title(record.personal.name.clone()));
    header.push(Block::Contact(record.personal.email.clone()));
    header.push(Block::Contact(record.personal.phone.clone()));
    header.push(Block::Contact(record.personal.address.clone()));
    header.push(Block::Rule);

    let mut body = Vec::new();

    body.push(Block::Section("Work Experience".to_string()));
    for entry in &record.experience {
        body.push(Block::Entry {
            heading: entry.company.clone(),
            meta: format!("{}, {}", entry.position, entry.duration),
        });
        body.push(Block::Text(entry.description.clone()));
    }

    body.push(Block::Section("Education".to_string()));
    for entry in &record.education {
        body.push(Block::Entry {
            heading: entry.institution.clone(),
            meta: format!("{}, {}", entry.degree, entry.year),
        });
    }

    body.push(Block::Section("Skills".to_string()));
    body.push(Block::Text(record.skills.clone()));

    Document {
        title: record.personal.name.clone(),
        style: style(),
        header,
        body,
    }
}
