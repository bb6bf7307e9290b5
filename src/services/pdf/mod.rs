// src/services/pdf/mod.rs
//! PDF Document Builder for blueprint exports.
//!
//! Building is split in two: [`layout::layout`] computes pages of draw
//! operations, [`render::render`] serialises them with printpdf.

pub mod layout;
pub mod metrics;
pub mod render;

use tracing::{error, info};

use crate::analysis::models::BlueprintTemplate;
use crate::common::helpers::blueprint_file_name;

#[derive(Debug, thiserror::Error)]
pub enum PdfError {
    #[error("Failed to render PDF: {0}")]
    Render(String),

    #[error("PDF worker failed: {0}")]
    Worker(String),
}

/// A rendered export ready to be sent as an attachment
#[derive(Debug, Clone)]
pub struct ExportedPdf {
    pub file_name: String,
    pub page_count: usize,
    pub bytes: Vec<u8>,
}

/// Lay out and render `blueprint` for `target_role`. Blocks for the whole run.
pub fn build(blueprint: &BlueprintTemplate, target_role: &str) -> Result<ExportedPdf, PdfError> {
    let layout = layout::layout(blueprint, target_role);
    let bytes = render::render(&layout, &blueprint.title)?;

    Ok(ExportedPdf {
        file_name: blueprint_file_name(&blueprint.title),
        page_count: layout.page_count(),
        bytes,
    })
}

/// [`build`] on the blocking thread pool
pub async fn build_blocking(
    blueprint: BlueprintTemplate,
    target_role: String,
) -> Result<ExportedPdf, PdfError> {
    let exported = tokio::task::spawn_blocking(move || build(&blueprint, &target_role))
        .await
        .map_err(|e| {
            error!(error = %e, "PDF generation task failed");
            PdfError::Worker(e.to_string())
        })??;

    info!(
        file_name = %exported.file_name,
        pages = exported.page_count,
        bytes = exported.bytes.len(),
        "Blueprint PDF generated"
    );

    Ok(exported)
}
