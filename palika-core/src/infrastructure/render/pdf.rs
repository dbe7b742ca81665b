// palika-core/src/infrastructure/render/pdf.rs

// PDF output is delegated to an external HTML-to-PDF engine (weasyprint by
// default), invoked as `<engine> <input.html> <output.pdf>`. The conversion
// is a blocking child process inside the request lifecycle; failures map to
// InfrastructureError::PdfEngine, never a panic.

use std::process::Command;
use tracing::{debug, instrument};

use crate::infrastructure::error::InfrastructureError;

pub struct PdfRenderer {
    engine: String,
}

impl PdfRenderer {
    pub fn new(engine: impl Into<String>) -> Self {
        Self {
            engine: engine.into(),
        }
    }

    /// Convert rendered HTML into PDF bytes via the external engine.
    #[instrument(skip(self, html), fields(engine = %self.engine))]
    pub fn render(&self, html: &str) -> Result<Vec<u8>, InfrastructureError> {
        let dir = tempfile::tempdir()?;
        let html_path = dir.path().join("report.html");
        let pdf_path = dir.path().join("report.pdf");
        std::fs::write(&html_path, html)?;

        debug!(input = %html_path.display(), "Invoking PDF engine");
        let status = Command::new(&self.engine)
            .arg(&html_path)
            .arg(&pdf_path)
            .status()
            .map_err(|e| {
                InfrastructureError::PdfEngine(format!(
                    "failed to spawn '{}': {e}",
                    self.engine
                ))
            })?;

        if !status.success() {
            return Err(InfrastructureError::PdfEngine(format!(
                "'{}' exited with {status}",
                self.engine
            )));
        }

        std::fs::read(&pdf_path).map_err(|e| {
            InfrastructureError::PdfEngine(format!(
                "'{}' produced no output file: {e}",
                self.engine
            ))
        })
    }
}
