use std::f64::consts::TAU;

use crate::{
    foundation::core::{BezPath, Canvas, Point},
    foundation::error::{SikkuError, SikkuResult},
};

/// Which families of primitives a scene contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Staggered dot grid with sparse curved connections.
    Dots,
    /// Flowing lotus-like closed loops only.
    Flowing,
    /// Both layers together.
    Combined,
}

/// A grid dot with its fixed per-dot modulation parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Dot {
    /// Position on the canvas.
    pub pos: Point,
    /// Base opacity in `[0, 1]`.
    pub opacity: f64,
    /// Base radius in pixels.
    pub size: f64,
    /// Fixed random phase in `[0, 2π)` offsetting the brightness pulse.
    pub pulse_phase: f64,
}

/// A curved connector between two dots, stored as an unordered index pair
/// with `from < to`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Connection {
    /// Index of the first endpoint dot.
    pub from: usize,
    /// Index of the second endpoint dot.
    pub to: usize,
    /// Base opacity in `[0, 1]`.
    pub opacity: f64,
    /// Curvature scalar in `[-0.25, 0.25]` displacing the quadratic control
    /// point away from the straight midpoint.
    pub curve: f64,
}

/// A closed decorative loop (petal/lotus silhouette).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowPath {
    /// The closed curve geometry.
    pub path: BezPath,
    /// Loop center.
    pub center: Point,
    /// Base radius in pixels.
    pub radius: f64,
    /// Even petal count, at least 4.
    pub petal_count: u32,
    /// Base opacity in `[0, 1]`.
    pub opacity: f64,
    /// Fixed random phase in `[0, 2π)` offsetting the traveling highlight.
    pub stroke_phase: f64,
}

/// Layout and sampling parameters for scene generation.
///
/// The defaults reproduce the traditional staggered layout: a 60 px pulli
/// grid with local connections, and loop centers every 200 px.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SceneParams {
    /// Dot grid spacing in pixels.
    pub grid_spacing: f64,
    /// Flow-path center spacing in pixels.
    pub flow_spacing: f64,
    /// Exclusive lookahead window when pairing a dot with later dots.
    pub lookahead: usize,
    /// Candidate pairs are admitted only under
    /// `grid_spacing * connect_distance_factor`.
    pub connect_distance_factor: f64,
    /// Admission probability for an in-range candidate pair.
    pub connect_probability: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            grid_spacing: 60.0,
            flow_spacing: 200.0,
            lookahead: 12,
            connect_distance_factor: 1.8,
            connect_probability: 0.15,
        }
    }
}

impl SceneParams {
    /// Validate parameter ranges.
    pub fn validate(&self) -> SikkuResult<()> {
        if !(self.grid_spacing > 0.0) {
            return Err(SikkuError::validation("grid_spacing must be > 0"));
        }
        if !(self.flow_spacing > 0.0) {
            return Err(SikkuError::validation("flow_spacing must be > 0"));
        }
        if self.lookahead == 0 {
            return Err(SikkuError::validation("lookahead must be >= 1"));
        }
        if !(self.connect_distance_factor > 0.0) {
            return Err(SikkuError::validation(
                "connect_distance_factor must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&self.connect_probability) {
            return Err(SikkuError::validation(
                "connect_probability must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

/// A generated scene: everything the frame compiler needs, immutable across
/// frames.
///
/// A scene is rebuilt from scratch on mount and on every resize; only the
/// animation `time` counter changes between frames.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Scene {
    /// Canvas the scene was generated for.
    pub canvas: Canvas,
    /// Variant the scene was generated with.
    pub variant: Variant,
    /// Grid dots, in row-major generation order.
    pub dots: Vec<Dot>,
    /// Sparse local connections between dots.
    pub connections: Vec<Connection>,
    /// Closed decorative loops.
    pub flow_paths: Vec<FlowPath>,
}

impl Scene {
    /// An empty scene for the given canvas and variant.
    pub fn empty(canvas: Canvas, variant: Variant) -> Self {
        Self {
            canvas,
            variant,
            dots: Vec::new(),
            connections: Vec::new(),
            flow_paths: Vec::new(),
        }
    }

    /// Check the structural invariants of the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SikkuError::Scene`] when a connection references a missing
    /// dot or any stored value is outside its declared range.
    pub fn validate(&self) -> SikkuResult<()> {
        let w = f64::from(self.canvas.width);
        let h = f64::from(self.canvas.height);

        for (i, dot) in self.dots.iter().enumerate() {
            if !(0.0..=w).contains(&dot.pos.x) || !(0.0..=h).contains(&dot.pos.y) {
                return Err(SikkuError::scene(format!("dot {i} is out of bounds")));
            }
            if !(0.0..=1.0).contains(&dot.opacity) {
                return Err(SikkuError::scene(format!("dot {i} opacity out of range")));
            }
            if !(dot.size > 0.0) {
                return Err(SikkuError::scene(format!("dot {i} size must be > 0")));
            }
            if !(0.0..TAU).contains(&dot.pulse_phase) {
                return Err(SikkuError::scene(format!("dot {i} phase out of range")));
            }
        }

        for (i, conn) in self.connections.iter().enumerate() {
            if conn.from >= conn.to {
                return Err(SikkuError::scene(format!(
                    "connection {i} endpoints must satisfy from < to"
                )));
            }
            if conn.to >= self.dots.len() {
                return Err(SikkuError::scene(format!(
                    "connection {i} references missing dot {}",
                    conn.to
                )));
            }
            if !(0.0..=1.0).contains(&conn.opacity) {
                return Err(SikkuError::scene(format!(
                    "connection {i} opacity out of range"
                )));
            }
            if conn.curve.abs() > 0.25 {
                return Err(SikkuError::scene(format!(
                    "connection {i} curve out of range"
                )));
            }
        }

        for (i, flow) in self.flow_paths.iter().enumerate() {
            if !(flow.radius > 0.0) {
                return Err(SikkuError::scene(format!("flow path {i} radius must be > 0")));
            }
            if flow.petal_count < 4 || flow.petal_count % 2 != 0 {
                return Err(SikkuError::scene(format!(
                    "flow path {i} petal count must be even and >= 4"
                )));
            }
            if !(0.0..=1.0).contains(&flow.opacity) {
                return Err(SikkuError::scene(format!(
                    "flow path {i} opacity out of range"
                )));
            }
            if !(0.0..TAU).contains(&flow.stroke_phase) {
                return Err(SikkuError::scene(format!("flow path {i} phase out of range")));
            }
            if flow.path.elements().is_empty() {
                return Err(SikkuError::scene(format!("flow path {i} has no geometry")));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/model.rs"]
mod tests;
