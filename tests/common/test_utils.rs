use std::path::PathBuf;

use image::RgbaImage;
use obj_scene::{
    Vector3,
    config::{AssetConfig, Placement, SceneConfig},
    context::Gpu,
    offscreen::Offscreen,
    scene::Scene,
};

pub(crate) const SIZE: u32 = 64;

pub(crate) const RED: image::Rgba<u8> = image::Rgba([255, 0, 0, 255]);
pub(crate) const BLUE: image::Rgba<u8> = image::Rgba([0, 0, 255, 255]);
pub(crate) const BLACK: image::Rgba<u8> = image::Rgba([0, 0, 0, 255]);

pub(crate) async fn gpu() -> Gpu {
    Gpu::headless()
        .await
        .expect("integration tests need a GPU adapter")
}

/// Both meshes are the unit cube at full scale: skull red and behind, cat
/// blue with a white texture at the origin.
pub(crate) fn fixture_config() -> SceneConfig {
    SceneConfig {
        assets: AssetConfig {
            root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures"),
            texture: PathBuf::from("white.png"),
            skull: PathBuf::from("cube.obj"),
            cat: PathBuf::from("cube.obj"),
        },
        skull: Placement {
            position: Vector3::new(0.0, 0.0, -1.0),
            color: Vector3::new(1.0, 0.0, 0.0),
            scale: 1.0,
        },
        cat: Placement {
            position: Vector3::new(0.0, 0.0, 0.0),
            color: Vector3::new(0.0, 0.0, 1.0),
            scale: 1.0,
        },
        ..SceneConfig::default()
    }
}

pub(crate) async fn render_once(gpu: &Gpu, scene: &Scene) -> RgbaImage {
    let target = Offscreen::new(gpu, SIZE, SIZE);
    scene.render(gpu, &target.view, &target.depth.view);
    target
        .read_rgba(gpu)
        .await
        .expect("failed to read back the frame")
}

pub(crate) async fn render_config(gpu: &Gpu, config: &SceneConfig) -> RgbaImage {
    let scene = Scene::new(gpu, Offscreen::FORMAT, config)
        .await
        .expect("fixture scene loads");
    render_once(gpu, &scene).await
}

pub(crate) fn centre(image: &RgbaImage) -> image::Rgba<u8> {
    *image.get_pixel(image.width() / 2, image.height() / 2)
}

/// True when every channel of `actual` is within one step of `expected`.
pub(crate) fn close_to(actual: image::Rgba<u8>, expected: [u8; 4]) -> bool {
    actual
        .0
        .iter()
        .zip(expected)
        .all(|(&a, e)| a.abs_diff(e) <= 1)
}
