//! GPU-side data of the scene.
//!
//! - [`texture`]: sampled image textures and the depth attachment
//! - [`geometry`]: vertex buffers built from OBJ models
//! - [`mesh`]: a geometry drawn with a program, uniforms and optional texture

pub mod geometry;
pub mod mesh;
pub mod texture;
