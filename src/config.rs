//! Fixed parameters of the demo.
//!
//! Everything the scene needs to know up front lives here: window, asset
//! locations, camera and where each mesh is drawn. [`SceneConfig::default`]
//! reproduces the values the binary ships with; tests build their own
//! configs that point at fixtures.

use std::path::{Path, PathBuf};

use cgmath::{Deg, Point3, Vector3};

#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub window: WindowConfig,
    pub assets: AssetConfig,
    pub camera: CameraConfig,
    pub clear_colour: wgpu::Color,
    /// Drawn first, without a texture.
    pub skull: Placement,
    /// Drawn second, with the shared texture.
    pub cat: Placement,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            assets: AssetConfig::default(),
            camera: CameraConfig::default(),
            clear_colour: wgpu::Color::BLACK,
            skull: Placement {
                position: Vector3::new(0.0, 0.0, -1.0),
                color: Vector3::new(1.0, 0.5, 0.5),
                scale: 0.1,
            },
            cat: Placement {
                position: Vector3::new(0.0, 0.0, 0.0),
                color: Vector3::new(0.7, 0.7, 1.0),
                scale: 0.1,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "obj-scene".to_string(),
            width: 800,
            height: 800,
            vsync: true,
        }
    }
}

/// Asset file names, relative to `root`.
#[derive(Clone, Debug)]
pub struct AssetConfig {
    pub root: PathBuf,
    pub texture: PathBuf,
    pub skull: PathBuf,
    pub cat: PathBuf,
}

impl AssetConfig {
    pub fn texture_path(&self) -> PathBuf {
        self.resolve(&self.texture)
    }

    pub fn skull_path(&self) -> PathBuf {
        self.resolve(&self.skull)
    }

    pub fn cat_path(&self) -> PathBuf {
        self.resolve(&self.cat)
    }

    fn resolve(&self, file: &Path) -> PathBuf {
        self.root.join(file)
    }
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
            texture: PathBuf::from("textures/TECLOGO.png"),
            skull: PathBuf::from("models/12140_Skull_v3_L2.obj"),
            cat: PathBuf::from("models/12221_Cat_v1_l3.obj"),
        }
    }
}

/// A perspective camera looking at a fixed target.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub eye: Point3<f32>,
    pub target: Point3<f32>,
    pub up: Vector3<f32>,
    pub fovy: Deg<f32>,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye: Point3::new(0.0, 0.0, 7.0),
            target: Point3::new(0.0, 0.0, 0.0),
            up: Vector3::unit_y(),
            fovy: Deg(45.0),
            aspect: 1.0,
            znear: 0.1,
            zfar: 1000.0,
        }
    }
}

/// Arguments of one `Mesh::render` call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vector3<f32>,
    pub color: Vector3<f32>,
    pub scale: f32,
}
