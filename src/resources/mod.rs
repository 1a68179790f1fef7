use std::path::Path;

use anyhow::Context;

use crate::{context::Gpu, data_structures::geometry::ModelGeometry};

/**
 * This module contains all logic for loading models and textures from external files.
 */
pub mod mesh;
pub mod texture;

pub async fn load_string(path: &Path) -> anyhow::Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

pub async fn load_binary(path: &Path) -> anyhow::Result<Vec<u8>> {
    tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))
}

/// Parse the OBJ file at `path`, flatten it and upload the vertices.
pub async fn load_geometry(gpu: &Gpu, path: &Path) -> anyhow::Result<ModelGeometry> {
    let label = path.display().to_string();
    let source = load_string(path).await?;
    let models = mesh::parse_obj(&source, &label).await?;
    let vertices = mesh::flatten(&models)?;
    let geometry = ModelGeometry::new(gpu, &vertices, &label)?;
    log::info!(
        "Loaded model {label} ({} objects, {} vertices)",
        models.len(),
        geometry.vertex_count()
    );
    Ok(geometry)
}
