//! obj-scene
//!
//! A minimal wgpu demo: open a window, load two Wavefront OBJ models and one
//! image texture, and draw both models every frame with a single shader
//! program.
//!
//! High-level modules
//! - `camera`: the fixed perspective camera and its uniform
//! - `config`: window, asset and placement parameters
//! - `context`: GPU handles and the window surface
//! - `data_structures`: textures, geometry and meshes on the GPU
//! - `flow`: window creation and the event loop
//! - `offscreen`: render targets that can be read back to the CPU
//! - `pipelines`: the scene shader program
//! - `resources`: loading models and textures from files
//! - `scene`: the two-mesh scene drawn every frame
//!

pub mod camera;
pub mod config;
pub mod context;
pub mod data_structures;
pub mod flow;
pub mod offscreen;
pub mod pipelines;
pub mod resources;
pub mod scene;

// Re-exports commonly used types for convenience in downstream code.
pub use cgmath::*;
