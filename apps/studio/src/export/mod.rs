//! Export pipeline — rendered HTML to a PDF file on disk.
//!
//! Flow: render HTML → stage it in a temp directory → hand both paths to the
//! converter → verify the output file exists. The converter is a pluggable
//! trait; the default implementation shells out to `wkhtmltopdf` with flags
//! derived 1:1 from `PdfOptions`, so the options bundle passes through
//! unmodified.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;

// ────────────────────────────────────────────────────────────────────────────
// Options bundle
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    A4,
}

impl PageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Portrait,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "Portrait",
        }
    }
}

/// The full configuration handed to the converter. This is the only
/// variability the export interface exposes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PdfOptions {
    pub page_size: PageSize,
    pub orientation: Orientation,
    /// Uniform page margin in millimetres.
    pub margin_mm: u32,
    /// Rasterization scale factor for the rendered page.
    pub zoom: f32,
    /// Whether the converter should compress the output stream.
    pub compress: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            orientation: Orientation::Portrait,
            margin_mm: 10,
            zoom: 2.0,
            compress: true,
        }
    }
}

/// Derives the output filename from the person's name: every whitespace
/// character becomes `_`, then the fixed suffix.
pub fn pdf_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    format!("{cleaned}_resume.pdf")
}

// ────────────────────────────────────────────────────────────────────────────
// Converter trait
// ────────────────────────────────────────────────────────────────────────────

/// The HTML-to-PDF conversion backend. Carried in `AppState` as
/// `Arc<dyn DocumentConverter>`; tests substitute an in-process fake.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert(
        &self,
        html_path: &Path,
        pdf_path: &Path,
        options: &PdfOptions,
    ) -> Result<(), AppError>;
}

/// Default converter: the `wkhtmltopdf` binary as an external process.
pub struct WkhtmltopdfConverter {
    program: String,
}

impl WkhtmltopdfConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Maps `PdfOptions` to command-line flags without interpretation.
    fn build_args(html_path: &Path, pdf_path: &Path, options: &PdfOptions) -> Vec<String> {
        let margin = format!("{}mm", options.margin_mm);
        let mut args = vec![
            "--page-size".to_string(),
            options.page_size.as_str().to_string(),
            "--orientation".to_string(),
            options.orientation.as_str().to_string(),
            "--margin-top".to_string(),
            margin.clone(),
            "--margin-bottom".to_string(),
            margin.clone(),
            "--margin-left".to_string(),
            margin.clone(),
            "--margin-right".to_string(),
            margin,
            "--zoom".to_string(),
            options.zoom.to_string(),
        ];
        if !options.compress {
            args.push("--no-pdf-compression".to_string());
        }
        args.push(html_path.display().to_string());
        args.push(pdf_path.display().to_string());
        args
    }
}

#[async_trait]
impl DocumentConverter for WkhtmltopdfConverter {
    async fn convert(
        &self,
        html_path: &Path,
        pdf_path: &Path,
        options: &PdfOptions,
    ) -> Result<(), AppError> {
        let args = Self::build_args(html_path, pdf_path, options);
        let output = tokio::process::Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|e| AppError::Export(format!("could not run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let tail: String = stderr.lines().rev().take(3).collect::<Vec<_>>().join("; ");
            return Err(AppError::Export(format!(
                "{} exited with {}: {tail}",
                self.program, output.status
            )));
        }
        Ok(())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Converts rendered HTML into `<output_dir>/<Name>_resume.pdf`.
///
/// The HTML is staged in a temp directory that lives until the converter
/// returns. Any failure maps to a single recoverable export error; nothing
/// about the record or the form is touched.
pub async fn export_resume(
    converter: &dyn DocumentConverter,
    html: &str,
    person_name: &str,
    output_dir: &Path,
    options: &PdfOptions,
) -> Result<PathBuf, AppError> {
    let staging = tempfile::tempdir()?;
    let html_path = staging.path().join("resume.html");
    std::fs::write(&html_path, html)?;

    let pdf_path = output_dir.join(pdf_filename(person_name));
    info!("Exporting resume to {}", pdf_path.display());

    converter.convert(&html_path, &pdf_path, options).await?;

    if !pdf_path.exists() {
        return Err(AppError::Export(
            "converter reported success but produced no file".to_string(),
        ));
    }

    info!("Export finished: {}", pdf_path.display());
    Ok(pdf_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-process stand-in for the external converter. Records the staged
    /// HTML and its arguments, and writes a minimal PDF header to the
    /// output path.
    struct FakeConverter {
        calls: Mutex<Vec<(String, PathBuf, PdfOptions)>>,
        fail: bool,
    }

    impl FakeConverter {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                fail: true,
            }
        }
    }

    #[async_trait]
    impl DocumentConverter for FakeConverter {
        async fn convert(
            &self,
            html_path: &Path,
            pdf_path: &Path,
            options: &PdfOptions,
        ) -> Result<(), AppError> {
            let html = std::fs::read_to_string(html_path)?;
            self.calls
                .lock()
                .unwrap()
                .push((html, pdf_path.to_path_buf(), *options));
            if self.fail {
                return Err(AppError::Export("synthetic failure".to_string()));
            }
            std::fs::write(pdf_path, b"%PDF-1.4 fake")?;
            Ok(())
        }
    }

    #[test]
    fn test_pdf_filename_replaces_whitespace() {
        assert_eq!(pdf_filename("Jane Doe"), "Jane_Doe_resume.pdf");
        assert_eq!(pdf_filename("Jane"), "Jane_resume.pdf");
        assert_eq!(pdf_filename("Mary Jane\tWatson"), "Mary_Jane_Watson_resume.pdf");
    }

    #[test]
    fn test_build_args_pass_options_through_unmodified() {
        let options = PdfOptions::default();
        let args = WkhtmltopdfConverter::build_args(
            Path::new("/tmp/in.html"),
            Path::new("/tmp/out.pdf"),
            &options,
        );

        for window in [
            ["--page-size", "A4"],
            ["--orientation", "Portrait"],
            ["--margin-top", "10mm"],
            ["--margin-bottom", "10mm"],
            ["--margin-left", "10mm"],
            ["--margin-right", "10mm"],
            ["--zoom", "2"],
        ] {
            let pos = args.iter().position(|a| a == window[0]).unwrap();
            assert_eq!(args[pos + 1], window[1]);
        }
        assert!(!args.iter().any(|a| a == "--no-pdf-compression"));
        // Input before output, both last.
        assert_eq!(args[args.len() - 2], "/tmp/in.html");
        assert_eq!(args[args.len() - 1], "/tmp/out.pdf");
    }

    #[test]
    fn test_build_args_disable_compression() {
        let options = PdfOptions {
            compress: false,
            ..PdfOptions::default()
        };
        let args =
            WkhtmltopdfConverter::build_args(Path::new("a.html"), Path::new("b.pdf"), &options);
        assert!(args.iter().any(|a| a == "--no-pdf-compression"));
    }

    #[tokio::test]
    async fn test_export_writes_named_pdf() {
        let converter = FakeConverter::new();
        let out_dir = tempfile::tempdir().unwrap();
        let options = PdfOptions::default();

        let path = export_resume(
            &converter,
            "<html><body>Jane</body></html>",
            "Jane Doe",
            out_dir.path(),
            &options,
        )
        .await
        .unwrap();

        assert_eq!(
            path.file_name().unwrap().to_str().unwrap(),
            "Jane_Doe_resume.pdf"
        );
        assert!(path.exists());

        // The converter saw the staged HTML and the untouched options.
        let calls = converter.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (html, pdf_path, seen) = &calls[0];
        assert!(html.contains("Jane"));
        assert_eq!(pdf_path, &path);
        assert_eq!(seen, &options);
    }

    #[tokio::test]
    async fn test_export_failure_is_a_recoverable_error() {
        let converter = FakeConverter::failing();
        let out_dir = tempfile::tempdir().unwrap();

        let err = export_resume(
            &converter,
            "<html></html>",
            "Jane Doe",
            out_dir.path(),
            &PdfOptions::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Export(_)));
        assert!(!out_dir.path().join("Jane_Doe_resume.pdf").exists());
    }

    #[tokio::test]
    async fn test_export_detects_missing_output() {
        // A converter that claims success without writing anything.
        struct NoopConverter;

        #[async_trait]
        impl DocumentConverter for NoopConverter {
            async fn convert(
                &self,
                _html_path: &Path,
                _pdf_path: &Path,
                _options: &PdfOptions,
            ) -> Result<(), AppError> {
                Ok(())
            }
        }

        let out_dir = tempfile::tempdir().unwrap();
        let err = export_resume(
            &NoopConverter,
            "<html></html>",
            "Jane Doe",
            out_dir.path(),
            &PdfOptions::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Export(_)));
    }
}
