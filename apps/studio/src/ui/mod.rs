//! The application window: form side panel, preview central panel, and the
//! export flow.
//!
//! The record is replaced, never mutated: every widget edit becomes a
//! `FormOp`, applied after the frame's widgets have rendered, so the record
//! a frame reads is a consistent snapshot.

pub mod preview;

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use egui::Color32;
use tracing::{info, warn};

use crate::export::export_resume;
use crate::form::controller::{EducationField, ExperienceField, PersonalField};
use crate::form::picture::load_picture;
use crate::form::validation::{validate, RequiredField, ValidationReport};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;
use crate::templates::{self, TemplateKind};
use preview::PictureCache;

const ERROR_RED: Color32 = Color32::from_rgb(200, 40, 40);

/// Progress of the one asynchronous operation. While `Running`, the submit
/// control is disabled; there is no cancellation.
#[derive(Debug, Clone, PartialEq)]
enum ExportStatus {
    Idle,
    Running,
    Failed(String),
}

/// One record edit, produced by a widget and applied once per frame.
enum FormOp {
    Personal(PersonalField, String),
    Experience(usize, ExperienceField, String),
    Education(usize, EducationField, String),
    AddExperience,
    RemoveExperience(usize),
    AddEducation,
    RemoveEducation(usize),
    Skills(String),
    LoadPicture(PathBuf),
}

pub struct StudioApp {
    state: AppState,
    record: ResumeRecord,
    template: TemplateKind,
    /// Inline errors for the required fields; populated on submit, cleared
    /// per field as soon as an edit makes the field non-empty.
    errors: ValidationReport,
    export_status: Arc<Mutex<ExportStatus>>,
    /// Dismissible banner for picture and export failures.
    banner: Option<String>,
    /// Path buffer for the picture file field.
    picture_path: String,
    picture_cache: PictureCache,
}

impl StudioApp {
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            record: ResumeRecord::blank(),
            template: TemplateKind::default(),
            errors: ValidationReport::default(),
            export_status: Arc::new(Mutex::new(ExportStatus::Idle)),
            banner: None,
            picture_path: String::new(),
            picture_cache: PictureCache::default(),
        }
    }

    fn apply(&mut self, op: FormOp) {
        let result = match op {
            FormOp::Personal(field, value) => {
                if !value.is_empty() {
                    if let Some(required) = required_for(field) {
                        self.errors.clear(required);
                    }
                }
                self.record = self.record.with_personal(field, value);
                Ok(())
            }
            FormOp::Experience(index, field, value) => self
                .record
                .with_experience_field(index, field, value)
                .map(|next| self.record = next),
            FormOp::Education(index, field, value) => self
                .record
                .with_education_field(index, field, value)
                .map(|next| self.record = next),
            FormOp::AddExperience => {
                self.record = self.record.push_blank_experience();
                Ok(())
            }
            FormOp::RemoveExperience(index) => self
                .record
                .remove_experience(index)
                .map(|next| self.record = next),
            FormOp::AddEducation => {
                self.record = self.record.push_blank_education();
                Ok(())
            }
            FormOp::RemoveEducation(index) => self
                .record
                .remove_education(index)
                .map(|next| self.record = next),
            FormOp::Skills(value) => {
                self.record = self.record.with_skills(value);
                Ok(())
            }
            FormOp::LoadPicture(path) => load_picture(&path).map(|uri| {
                self.record = self.record.with_picture(uri);
            }),
        };

        if let Err(e) = result {
            warn!("Form operation rejected: {e}");
            self.banner = Some(e.user_message());
        }
    }

    /// Validates and, if clean, hands the rendered HTML to the export task.
    fn submit(&mut self) {
        self.errors = validate(&self.record);
        if !self.errors.is_valid() {
            return;
        }

        let html = templates::render(&self.record, self.template).to_html();
        let name = self.record.personal.name.clone();
        let output_dir = self.state.config.output_dir.clone();
        let options = self.state.pdf_options;
        let converter = self.state.converter.clone();
        let status = self.export_status.clone();

        *status.lock().unwrap() = ExportStatus::Running;
        self.state.runtime.spawn(async move {
            let result =
                export_resume(converter.as_ref(), &html, &name, &output_dir, &options).await;
            let mut slot = status.lock().unwrap();
            *slot = match result {
                Ok(path) => {
                    info!("Resume exported to {}", path.display());
                    ExportStatus::Idle
                }
                Err(e) => ExportStatus::Failed(e.user_message()),
            };
        });
    }

    fn export_running(&self) -> bool {
        *self.export_status.lock().unwrap() == ExportStatus::Running
    }

    /// Moves a finished task's failure into the banner.
    fn poll_export_status(&mut self) {
        let mut slot = self.export_status.lock().unwrap();
        if let ExportStatus::Failed(message) = &*slot {
            self.banner = Some(message.clone());
            *slot = ExportStatus::Idle;
        }
    }

    // ── Form widgets ────────────────────────────────────────────────────────

    fn personal_field(
        &self,
        ui: &mut egui::Ui,
        label: &str,
        field: PersonalField,
        op: &mut Option<FormOp>,
    ) {
        ui.label(label);
        let mut value = match field {
            PersonalField::Name => self.record.personal.name.clone(),
            PersonalField::Email => self.record.personal.email.clone(),
            PersonalField::Phone => self.record.personal.phone.clone(),
            PersonalField::Address => self.record.personal.address.clone(),
        };
        let response = ui.add(egui::TextEdit::singleline(&mut value).desired_width(f32::INFINITY));
        if response.changed() {
            *op = Some(FormOp::Personal(field, value));
        }
        if let Some(required) = required_for(field) {
            if let Some(message) = self.errors.message(required) {
                ui.colored_label(ERROR_RED, format!("⚠ {message}"));
            }
        }
        ui.add_space(4.0);
    }

    fn experience_rows(&self, ui: &mut egui::Ui, op: &mut Option<FormOp>) {
        ui.separator();
        ui.strong("Work experience");
        for index in 0..self.record.experience.len() {
            let entry = self.record.experience[index].clone();
            ui.push_id(("experience", index), |ui| {
                text_row(ui, "Company", &entry.company, |v| {
                    *op = Some(FormOp::Experience(index, ExperienceField::Company, v));
                });
                text_row(ui, "Position", &entry.position, |v| {
                    *op = Some(FormOp::Experience(index, ExperienceField::Position, v));
                });
                text_row(ui, "Duration", &entry.duration, |v| {
                    *op = Some(FormOp::Experience(index, ExperienceField::Duration, v));
                });
                multiline_row(ui, "Description", &entry.description, |v| {
                    *op = Some(FormOp::Experience(index, ExperienceField::Description, v));
                });
                if ui.button("Remove entry").clicked() {
                    *op = Some(FormOp::RemoveExperience(index));
                }
                ui.add_space(6.0);
            });
        }
        if ui.button("Add experience").clicked() {
            *op = Some(FormOp::AddExperience);
        }
    }

    fn education_rows(&self, ui: &mut egui::Ui, op: &mut Option<FormOp>) {
        ui.separator();
        ui.strong("Education");
        for index in 0..self.record.education.len() {
            let entry = self.record.education[index].clone();
            ui.push_id(("education", index), |ui| {
                text_row(ui, "Institution", &entry.institution, |v| {
                    *op = Some(FormOp::Education(index, EducationField::Institution, v));
                });
                text_row(ui, "Degree", &entry.degree, |v| {
                    *op = Some(FormOp::Education(index, EducationField::Degree, v));
                });
                text_row(ui, "Year", &entry.year, |v| {
                    *op = Some(FormOp::Education(index, EducationField::Year, v));
                });
                if ui.button("Remove entry").clicked() {
                    *op = Some(FormOp::RemoveEducation(index));
                }
                ui.add_space(6.0);
            });
        }
        if ui.button("Add education").clicked() {
            *op = Some(FormOp::AddEducation);
        }
    }

    fn form_panel(&mut self, ui: &mut egui::Ui) {
        let mut op: Option<FormOp> = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading("Resume details");
            ui.add_space(6.0);

            self.personal_field(ui, "Name", PersonalField::Name, &mut op);
            self.personal_field(ui, "Email", PersonalField::Email, &mut op);
            self.personal_field(ui, "Phone", PersonalField::Phone, &mut op);
            self.personal_field(ui, "Address", PersonalField::Address, &mut op);

            ui.label("Profile picture (path to an image file)");
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.picture_path).desired_width(260.0),
                );
                if ui.button("Load").clicked() && !self.picture_path.is_empty() {
                    op = Some(FormOp::LoadPicture(PathBuf::from(self.picture_path.clone())));
                }
            });
            if self.record.has_picture() {
                ui.weak("Picture loaded");
            }
            ui.add_space(4.0);

            self.experience_rows(ui, &mut op);
            self.education_rows(ui, &mut op);

            ui.separator();
            ui.label("Skills (comma-separated)");
            let mut skills = self.record.skills.clone();
            if ui
                .add(egui::TextEdit::singleline(&mut skills).desired_width(f32::INFINITY))
                .changed()
            {
                op = Some(FormOp::Skills(skills));
            }

            ui.add_space(10.0);
            let running = self.export_running();
            let label = if running { "Exporting…" } else { "Export PDF" };
            if ui
                .add_enabled(!running, egui::Button::new(label))
                .clicked()
            {
                self.submit();
            }
            if !self.errors.is_valid() {
                ui.colored_label(
                    ERROR_RED,
                    format!("{} field(s) need attention", self.errors.len()),
                );
            }
        });

        if let Some(op) = op {
            self.apply(op);
        }
    }

    fn preview_panel(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Template:");
            for kind in TemplateKind::ALL {
                ui.radio_value(&mut self.template, kind, kind.label());
            }
        });
        ui.separator();

        let doc = templates::render(&self.record, self.template);
        egui::ScrollArea::vertical().show(ui, |ui| {
            preview::show(ui, &doc, &mut self.picture_cache);
        });
    }

    fn banner_bar(&mut self, ui: &mut egui::Ui) {
        if let Some(message) = self.banner.clone() {
            ui.horizontal(|ui| {
                ui.colored_label(ERROR_RED, format!("⚠ {message}"));
                if ui.button("Dismiss").clicked() {
                    self.banner = None;
                }
            });
            ui.separator();
        }
    }
}

impl eframe::App for StudioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_export_status();

        egui::SidePanel::left("form_panel")
            .resizable(true)
            .default_width(430.0)
            .show(ctx, |ui| {
                self.form_panel(ui);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.banner_bar(ui);
            self.preview_panel(ui);
        });

        // Keep repainting while the export task runs so its completion is
        // picked up without user input.
        if self.export_running() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

fn required_for(field: PersonalField) -> Option<RequiredField> {
    match field {
        PersonalField::Name => Some(RequiredField::Name),
        PersonalField::Email => Some(RequiredField::Email),
        PersonalField::Phone => Some(RequiredField::Phone),
        PersonalField::Address => None,
    }
}

fn text_row(ui: &mut egui::Ui, label: &str, value: &str, mut on_change: impl FnMut(String)) {
    ui.label(label);
    let mut buffer = value.to_string();
    if ui
        .add(egui::TextEdit::singleline(&mut buffer).desired_width(f32::INFINITY))
        .changed()
    {
        on_change(buffer);
    }
}

fn multiline_row(ui: &mut egui::Ui, label: &str, value: &str, mut on_change: impl FnMut(String)) {
    ui.label(label);
    let mut buffer = value.to_string();
    if ui
        .add(
            egui::TextEdit::multiline(&mut buffer)
                .desired_width(f32::INFINITY)
                .desired_rows(2),
        )
        .changed()
    {
        on_change(buffer);
    }
}
