use anyhow::{Context, bail};

/// Floats emitted per vertex: position xyz followed by uv.
pub const FLOATS_PER_VERTEX: usize = 5;

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        triangulate: true,
        single_index: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

/// Parse Wavefront OBJ text into its models, in file order.
///
/// Polygons are triangulated. `mtllib` statements are not followed, the
/// scene's texture is chosen by the caller.
pub async fn parse_obj(source: &str, name: &str) -> anyhow::Result<Vec<tobj::Model>> {
    let (models, _) = tobj::tokio::load_obj_buf(source.as_bytes(), &load_options(), |mtl| async move {
        log::debug!("Ignoring material library {}", mtl.display());
        Ok(Default::default())
    })
    .await
    .with_context(|| format!("failed to parse OBJ {name}"))?;
    Ok(models)
}

/// Expand every face vertex of every model into a non-indexed, interleaved
/// `[x, y, z, u, v]` stream.
///
/// Vertices without texture coordinates get uv `(0, 0)` so the stride never
/// changes. Present coordinates are flipped vertically because OBJ puts the
/// texture origin bottom-left and wgpu top-left.
///
/// A model must have texture coordinates on all of its vertices or on none:
/// the loader only stores coordinates for vertices that have them, so a
/// partial set cannot be matched back to its vertices and is rejected.
pub fn flatten(models: &[tobj::Model]) -> anyhow::Result<Vec<f32>> {
    let references: usize = models.iter().map(|m| m.mesh.indices.len()).sum();
    let mut vertices = Vec::with_capacity(references * FLOATS_PER_VERTEX);

    for model in models {
        let mesh = &model.mesh;
        if !mesh.texcoords.is_empty() && mesh.texcoords.len() / 2 != mesh.positions.len() / 3 {
            bail!(
                "model {} has texture coordinates on only some of its vertices ({} of {})",
                model.name,
                mesh.texcoords.len() / 2,
                mesh.positions.len() / 3
            );
        }
        for &index in &mesh.indices {
            let i = index as usize;
            let Some(position) = mesh.positions.get(i * 3..i * 3 + 3) else {
                bail!(
                    "vertex index {i} of {} is out of range ({} positions)",
                    model.name,
                    mesh.positions.len() / 3
                );
            };
            vertices.extend_from_slice(position);
            match mesh.texcoords.get(i * 2..i * 2 + 2) {
                Some(&[u, v]) => vertices.extend_from_slice(&[u, 1.0 - v]),
                _ => vertices.extend_from_slice(&[0.0, 0.0]),
            }
        }
    }

    Ok(vertices)
}
