use std::sync::Arc;

use crate::config::Config;
use crate::export::{DocumentConverter, PdfOptions};

/// Shared application state handed to the UI shell at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable HTML-to-PDF backend. Default: the `wkhtmltopdf` process.
    pub converter: Arc<dyn DocumentConverter>,
    /// Page geometry bundle passed through to the converter unmodified.
    pub pdf_options: PdfOptions,
    /// Handle of the runtime that runs export tasks.
    pub runtime: tokio::runtime::Handle,
}
