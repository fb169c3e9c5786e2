//! Typed document model shared by the preview panel and the HTML export.
//!
//! A template variant turns the record into a `Document`: a styled header
//! region plus body blocks. The preview walks the blocks directly; the
//! export serializes them to a standalone HTML page with inline CSS.

use serde::Serialize;

/// Where the profile picture sits relative to the name block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PicturePlacement {
    /// Centered above the name.
    AboveName,
    /// Floated beside the header text.
    BesideHeader,
    /// Small, after the contact lines.
    InlineSmall,
}

/// Presentation parameters for one template variant.
///
/// Sizes are in points for the exported page; the preview reuses them
/// directly as pixel sizes, which is close enough for an on-screen proof.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub font_stack: &'static str,
    pub title_pt: f32,
    pub section_pt: f32,
    pub body_pt: f32,
    pub accent: (u8, u8, u8),
    pub centered_header: bool,
    pub uppercase_sections: bool,
    pub underline_sections: bool,
    pub picture_px: u32,
    pub picture_circular: bool,
    pub picture_placement: PicturePlacement,
}

impl Style {
    pub fn accent_css(&self) -> String {
        let (r, g, b) = self.accent;
        format!("rgb({r}, {g}, {b})")
    }

    /// The full stylesheet for the exported page, derived from the fields
    /// above so the preview and the PDF agree on every knob.
    fn css(&self) -> String {
        let mut css = String::new();
        css.push_str(&format!(
            "body {{ font-family: {}; font-size: {}pt; margin: 0; color: #222; }}\n",
            self.font_stack, self.body_pt
        ));
        css.push_str(&format!(
            "header {{ text-align: {}; }}\n",
            if self.centered_header { "center" } else { "left" }
        ));
        css.push_str(&format!(
            "h1 {{ font-size: {}pt; margin: 0.2em 0; }}\n",
            self.title_pt
        ));

        let mut h2 = format!(
            "h2 {{ font-size: {}pt; color: {}; margin: 1.1em 0 0.3em 0;",
            self.section_pt,
            self.accent_css()
        );
        if self.uppercase_sections {
            h2.push_str(" text-transform: uppercase; letter-spacing: 0.12em;");
        }
        if self.underline_sections {
            h2.push_str(&format!(" border-bottom: 1px solid {};", self.accent_css()));
        }
        h2.push_str(" }\n");
        css.push_str(&h2);

        css.push_str("h3 { font-size: 1.05em; margin: 0.7em 0 0 0; }\n");
        css.push_str(".meta { margin: 0.1em 0; font-style: italic; color: #555; }\n");
        css.push_str(".contact { margin: 0.15em 0; }\n");
        css.push_str("p { margin: 0.3em 0; }\n");
        css.push_str("hr { border: none; border-top: 1px solid #bbb; margin: 0.9em 0; }\n");

        let mut img = format!("img.picture {{ width: {}px;", self.picture_px);
        if self.picture_circular {
            img.push_str(" border-radius: 50%;");
        }
        if self.picture_placement == PicturePlacement::BesideHeader {
            img.push_str(" float: right; margin-left: 16px;");
        }
        img.push_str(" }\n");
        css.push_str(&img);

        css
    }
}

/// One renderable block. Informational content only — all styling lives in
/// `Style`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    /// The person's name.
    Title(String),
    /// One contact detail line.
    Contact(String),
    /// The profile picture, carried as the record's data URI.
    Picture { data_uri: String },
    /// A section heading ("Work Experience").
    Section(String),
    /// An entry heading with its meta line.
    Entry { heading: String, meta: String },
    /// Body text.
    Text(String),
    /// Horizontal divider.
    Rule,
}

/// The rendered resume: header region, body blocks, and the variant style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub title: String,
    pub style: Style,
    pub header: Vec<Block>,
    pub body: Vec<Block>,
}

impl Document {
    /// Serializes the document to a standalone HTML page. All text is
    /// escaped; the picture data URI passes through as the `src` attribute.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("  <title>{}</title>\n", escape_html(&self.title)));
        html.push_str("  <style>\n");
        html.push_str(&self.style.css());
        html.push_str("  </style>\n</head>\n<body>\n");

        html.push_str("<header>\n");
        for block in &self.header {
            push_block(&mut html, block);
        }
        html.push_str("</header>\n<main>\n");
        for block in &self.body {
            push_block(&mut html, block);
        }
        html.push_str("</main>\n</body>\n</html>\n");
        html
    }
}

fn push_block(html: &mut String, block: &Block) {
    match block {
        Block::Title(name) => {
            html.push_str(&format!("  <h1>{}</h1>\n", escape_html(name)));
        }
        Block::Contact(line) => {
            html.push_str(&format!(
                "  <p class=\"contact\">{}</p>\n",
                escape_html(line)
            ));
        }
        Block::Picture { data_uri } => {
            html.push_str(&format!(
                "  <img class=\"picture\" src=\"{}\" alt=\"Profile picture\">\n",
                escape_html(data_uri)
            ));
        }
        Block::Section(title) => {
            html.push_str(&format!("  <h2>{}</h2>\n", escape_html(title)));
        }
        Block::Entry { heading, meta } => {
            html.push_str(&format!("  <h3>{}</h3>\n", escape_html(heading)));
            html.push_str(&format!("  <p class=\"meta\">{}</p>\n", escape_html(meta)));
        }
        Block::Text(text) => {
            html.push_str(&format!("  <p>{}</p>\n", escape_html(text)));
        }
        Block::Rule => {
            html.push_str("  <hr>\n");
        }
    }
}

/// Escapes text for safe interpolation into HTML element and attribute
/// positions.
pub fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn style() -> Style {
        Style {
            font_stack: "Helvetica, Arial, sans-serif",
            title_pt: 24.0,
            section_pt: 13.0,
            body_pt: 10.5,
            accent: (31, 111, 235),
            centered_header: true,
            uppercase_sections: false,
            underline_sections: false,
            picture_px: 96,
            picture_circular: true,
            picture_placement: PicturePlacement::AboveName,
        }
    }

    #[test]
    fn test_escape_html_neutralizes_markup() {
        assert_eq!(
            escape_html("<b>R&D</b> \"lead\""),
            "&lt;b&gt;R&amp;D&lt;/b&gt; &quot;lead&quot;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_to_html_is_a_complete_escaped_page() {
        let doc = Document {
            title: "Jane <Doe>".to_string(),
            style: style(),
            header: vec![
                Block::Title("Jane <Doe>".to_string()),
                Block::Contact("jane@x.com".to_string()),
            ],
            body: vec![
                Block::Section("Work Experience".to_string()),
                Block::Entry {
                    heading: "Engineer".to_string(),
                    meta: "Acme & Co · 2020".to_string(),
                },
                Block::Text("Built things".to_string()),
            ],
        };

        let html = doc.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Jane &lt;Doe&gt;</h1>"));
        assert!(html.contains("<h2>Work Experience</h2>"));
        assert!(html.contains("Acme &amp; Co · 2020"));
        assert!(html.contains("</html>"));
        assert!(!html.contains("<Doe>"));
    }

    #[test]
    fn test_picture_block_uses_data_uri_as_src() {
        let doc = Document {
            title: "x".to_string(),
            style: style(),
            header: vec![Block::Picture {
                data_uri: "data:image/png;base64,AAAA".to_string(),
            }],
            body: vec![],
        };
        assert!(doc
            .to_html()
            .contains("src=\"data:image/png;base64,AAAA\""));
    }

    #[test]
    fn test_css_reflects_style_knobs() {
        let mut s = style();
        s.uppercase_sections = true;
        s.underline_sections = true;
        s.picture_placement = PicturePlacement::BesideHeader;
        let css = s.css();
        assert!(css.contains("text-transform: uppercase"));
        assert!(css.contains("border-bottom: 1px solid rgb(31, 111, 235)"));
        assert!(css.contains("float: right"));
        assert!(css.contains("font-size: 24pt"));
    }
}
