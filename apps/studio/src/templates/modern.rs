//! Modern variant — centered header, picture above the name, accent-colored
//! section headings, sections ordered work → education → skills.

use crate::models::resume::ResumeRecord;
use crate::templates::document::{Block, Document, PicturePlacement, Style};

fn style() -> Style {
    Style {
        font_stack: "'Helvetica Neue', Helvetica, Arial, sans-serif",
        title_pt: 26.0,
        section_pt: 13.0,
        body_pt: 10.5,
        accent: (31, 111, 235),
        centered_header: true,
        uppercase_sections: false,
        underline_sections: true,
        picture_px: 96,
        picture_circular: true,
        picture_placement: PicturePlacement::AboveName,
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

    let mut body = Vec::new();

    body.push(Block::Section("Work Experience".to_string()));
    for entry in &record.experience {
        body.push(Block::Entry {
            heading: entry.position.clone(),
            meta: format!("{} · {}", entry.company, entry.duration),
        });
        body.push(Block::Text(entry.description.clone()));
    }

    body.push(Block::Section("Education".to_string()));
    for entry in &record.education {
        body.push(Block::Entry {
            heading: entry.degree.clone(),
            meta: format!("{} · {}", entry.institution, entry.year),
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
