//! Preview panel — maps the rendered `Document` blocks to egui widgets.
//!
//! The preview is an on-screen proof of the export: same blocks, same style
//! knobs, with points reused as pixels.

use egui::{Color32, RichText, TextureHandle, TextureOptions};

use crate::form::picture::decode_data_uri;
use crate::templates::document::{Block, Document, Style};

/// Texture cache for the profile picture, keyed by the data URI so loading a
/// new picture replaces the texture and every other frame reuses it.
#[derive(Default)]
pub struct PictureCache {
    key: String,
    texture: Option<TextureHandle>,
}

impl PictureCache {
    fn texture(&mut self, ctx: &egui::Context, data_uri: &str) -> Option<TextureHandle> {
        if self.key != data_uri {
            self.key = data_uri.to_string();
            self.texture = decode_texture(ctx, data_uri);
        }
        self.texture.clone()
    }
}

fn decode_texture(ctx: &egui::Context, data_uri: &str) -> Option<TextureHandle> {
    let (_mime, bytes) = decode_data_uri(data_uri).ok()?;
    let image = image::load_from_memory(&bytes).ok()?.to_rgba8();
    let size = [image.width() as usize, image.height() as usize];
    let color = egui::ColorImage::from_rgba_unmultiplied(size, image.as_raw());
    Some(ctx.load_texture("profile-picture", color, TextureOptions::LINEAR))
}

/// Renders the whole document into the given `Ui`.
pub fn show(ui: &mut egui::Ui, doc: &Document, cache: &mut PictureCache) {
    if doc.style.centered_header {
        ui.vertical_centered(|ui| render_blocks(ui, &doc.header, &doc.style, cache));
    } else {
        render_blocks(ui, &doc.header, &doc.style, cache);
    }
    ui.add_space(6.0);
    render_blocks(ui, &doc.body, &doc.style, cache);
}

fn render_blocks(ui: &mut egui::Ui, blocks: &[Block], style: &Style, cache: &mut PictureCache) {
    let accent = Color32::from_rgb(style.accent.0, style.accent.1, style.accent.2);

    for block in blocks {
        match block {
            Block::Title(name) => {
                ui.label(RichText::new(name).size(style.title_pt * 1.3).strong());
            }
            Block::Contact(line) => {
                ui.label(RichText::new(line).size(style.body_pt * 1.3));
            }
            Block::Picture { data_uri } => {
                if let Some(texture) = cache.texture(ui.ctx(), data_uri) {
                    let side = style.picture_px as f32;
                    ui.image((texture.id(), egui::vec2(side, side)));
                }
            }
            Block::Section(title) => {
                let text = if style.uppercase_sections {
                    title.to_uppercase()
                } else {
                    title.clone()
                };
                ui.add_space(8.0);
                ui.label(
                    RichText::new(text)
                        .size(style.section_pt * 1.3)
                        .color(accent)
                        .strong(),
                );
                if style.underline_sections {
                    ui.separator();
                }
            }
            Block::Entry { heading, meta } => {
                ui.add_space(4.0);
                ui.label(RichText::new(heading).size(style.body_pt * 1.35).strong());
                ui.label(
                    RichText::new(meta)
                        .size(style.body_pt * 1.25)
                        .italics()
                        .weak(),
                );
            }
            Block::Text(text) => {
                ui.label(RichText::new(text).size(style.body_pt * 1.3));
            }
            Block::Rule => {
                ui.separator();
            }
        }
    }
}
