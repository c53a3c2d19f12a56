//! Falling-glyph particle simulation and render loop for the matrix-fps
//! stress test.
//!
//! Nothing here touches platform APIs: the front-end supplies a [`Surface`]
//! and timestamps, and drives [`RenderLoop::tick`] once per refresh.

pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod fps;
pub mod particle;
pub mod render_loop;
pub mod store;
pub mod surface;
pub mod theme;

pub use color::*;
pub use config::*;
pub use controls::*;
pub use fps::*;
pub use particle::*;
pub use render_loop::*;
pub use store::*;
pub use surface::*;
pub use theme::*;
