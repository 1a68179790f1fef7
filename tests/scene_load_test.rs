#[cfg(feature = "integration-tests")]
mod common;

#[tokio::test]
#[cfg(feature = "integration-tests")]
async fn should_build_one_textured_and_one_plain_mesh() {
    use crate::common::test_utils::*;
    use obj_scene::{offscreen::Offscreen, scene::Scene};

    let gpu = gpu().await;
    let scene = Scene::new(&gpu, Offscreen::FORMAT, &fixture_config())
        .await
        .unwrap();

    assert!(!scene.skull().is_textured());
    assert!(scene.cat().is_textured());
    assert_eq!(scene.skull().vertex_count(), 36);
    assert_eq!(scene.cat().vertex_count(), 36);
    for geometry in scene.geometries() {
        assert_eq!(geometry.vertex_buffer.size(), 180 * 4);
    }

    let placement = fixture_config().cat;
    let uniform = scene
        .cat()
        .uniform(placement.position, placement.color, placement.scale);
    assert!(uniform.uses_texture());
    let uniform = scene
        .skull()
        .uniform(placement.position, placement.color, placement.scale);
    assert!(!uniform.uses_texture());
}

#[tokio::test]
#[cfg(feature = "integration-tests")]
async fn should_generate_mipmaps_for_the_texture() {
    use crate::common::test_utils::*;
    use obj_scene::{offscreen::Offscreen, scene::Scene};

    let gpu = gpu().await;
    let scene = Scene::new(&gpu, Offscreen::FORMAT, &fixture_config())
        .await
        .unwrap();

    assert_eq!(scene.texture().size, (4, 4));
    assert_eq!(scene.texture().mip_level_count, 3);
    assert_eq!(scene.texture().texture.mip_level_count(), 3);
}

#[tokio::test]
#[cfg(feature = "integration-tests")]
async fn should_fail_on_a_missing_asset() {
    use crate::common::test_utils::*;
    use obj_scene::{offscreen::Offscreen, scene::Scene};
    use std::path::PathBuf;

    let gpu = gpu().await;
    let mut config = fixture_config();
    config.assets.cat = PathBuf::from("missing.obj");

    let error = Scene::new(&gpu, Offscreen::FORMAT, &config)
        .await
        .expect_err("missing model must fail the scene");
    assert!(format!("{error:#}").contains("missing.obj"));
}

#[tokio::test]
#[cfg(feature = "integration-tests")]
async fn should_reject_undecodable_images() {
    use crate::common::test_utils::*;
    use obj_scene::data_structures::texture::ImageTexture;

    let gpu = gpu().await;
    let error = ImageTexture::from_bytes(&gpu, b"definitely not a png", "garbage")
        .expect_err("garbage must not decode");
    assert!(error.to_string().contains("garbage"));
}

#[tokio::test]
#[cfg(feature = "integration-tests")]
async fn should_reject_geometry_without_faces() {
    use crate::common::test_utils::*;
    use obj_scene::data_structures::geometry::ModelGeometry;

    let gpu = gpu().await;
    assert!(ModelGeometry::new(&gpu, &[], "empty").is_err());
    assert!(ModelGeometry::new(&gpu, &[0.0; 7], "ragged").is_err());
    let triangle = ModelGeometry::new(&gpu, &[0.0; 15], "triangle").unwrap();
    assert_eq!(triangle.vertex_count(), 3);
}
