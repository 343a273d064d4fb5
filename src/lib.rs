//! Sikku is a procedural kolam pattern synthesis and rendering engine.
//!
//! Kolam is a South Indian tradition of geometric floor patterns: a staggered
//! grid of dots (pulli) anchors curved, often continuous lines (sikku). This
//! crate generates decorative scenes in that idiom and animates them with a
//! slow, meditative time modulation.
//!
//! # Pipeline overview
//!
//! 1. **Build**: `Canvas + Variant + seed -> Scene` (dots, connections,
//!    flowing loops)
//! 2. **Compile**: `Scene + time -> FramePlan` (backend-agnostic draw ops in
//!    painter's order)
//! 3. **Render**: `FramePlan -> FrameRGBA` (CPU backend)
//! 4. **Export** (optional): PNG files via [`write_png`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: scene building and frame compilation are
//!   pure and stable for a given `(canvas, variant, seed, time)`; randomness
//!   is an injected [`Rng64`] seed, never ambient.
//! - **No IO in the builder or compiler**: files are touched only at the
//!   pipeline edge and in the CLI.
//!
//! # Animation model
//!
//! A [`Player`] owns the scene, the shared time counter, and the Idle/Running
//! state. The host drives [`Player::advance`] once per displayed frame; each
//! call moves time forward by a fixed [`TIME_STEP`] and compiles a plan.
//! Stopping and restarting rebuilds the scene from scratch; resizing rebuilds
//! it for the new dimensions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod compile;
mod foundation;
mod render;
mod scene;

pub use animation::ease::Ease;
pub use animation::player::{PlayState, Player, TIME_STEP};
pub use compile::frame::{
    AMBER, Brush, DashPattern, DrawOp, FramePlan, GradientStop, VIOLET, WHITE, compile_frame,
};
pub use foundation::core::{Affine, BezPath, Canvas, Point, Rect, Rgba8, Vec2};
pub use foundation::error::{SikkuError, SikkuResult};
pub use foundation::math::Rng64;
pub use render::backend::{BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend};
pub use render::cpu::CpuBackend;
pub use render::pipeline::{render_frame, render_sequence, write_png};
pub use scene::builder::build_scene;
pub use scene::loader::LoaderScene;
pub use scene::model::{Connection, Dot, FlowPath, Scene, SceneParams, Variant};
