//! Decorative radial layout for the dependency-graph card.
//!
//! Nodes sit on an ellipse around the card centre: `x = rx * cos θ`,
//! `y = ry * sin θ`. Each node gets a connector line drawn from the node back
//! towards the centre, rotated by `θ + 180°`. The connector length is fixed to
//! `rx`, so it only meets the centre exactly for nodes on the horizontal axis;
//! see [`OrbitNode::center_distance`] for the true distance.

use crate::constants::*;
use crate::error::{check_radius, check_timing, LayoutResult};
use crate::style::{Ease, VisualStyle};
use glam::Vec2;

/// Position of a single node on the ellipse.
#[inline]
pub fn orbit_position(angle_deg: f32, radius_x: f32, radius_y: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(radius_x * rad.cos(), radius_y * rad.sin())
}

/// Positions for every angle, in input order. No filtering, no side effects.
pub fn compute_positions(angles_deg: &[f32], radius_x: f32, radius_y: f32) -> Vec<Vec2> {
    angles_deg
        .iter()
        .map(|&a| orbit_position(a, radius_x, radius_y))
        .collect()
}

/// Connector rotation for a node at `angle_deg`, normalised to \[0, 360).
#[inline]
pub fn line_rotation_deg(angle_deg: f32) -> f32 {
    (angle_deg + 180.0).rem_euclid(360.0)
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSpec {
    pub angles_deg: Vec<f32>,
    pub radius_x: f32,
    pub radius_y: f32,
    pub base_delay_sec: f64,
    pub delay_step_sec: f64,
    pub appear_duration_sec: f64,
}

impl Default for OrbitSpec {
    fn default() -> Self {
        Self {
            angles_deg: ORBIT_ANGLES_DEG.to_vec(),
            radius_x: ORBIT_RADIUS_X,
            radius_y: ORBIT_RADIUS_Y,
            base_delay_sec: ORBIT_BASE_DELAY_SEC,
            delay_step_sec: ORBIT_DELAY_STEP_SEC,
            appear_duration_sec: ORBIT_APPEAR_DURATION_SEC,
        }
    }
}

impl OrbitSpec {
    pub fn validate(&self) -> LayoutResult<()> {
        check_radius("x", self.radius_x)?;
        check_radius("y", self.radius_y)?;
        check_timing("base_delay_sec", self.base_delay_sec)?;
        check_timing("delay_step_sec", self.delay_step_sec)?;
        check_timing("appear_duration_sec", self.appear_duration_sec)?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitNode {
    pub index: usize,
    pub angle_deg: f32,
    pub position: Vec2,
    pub appear_delay_sec: f64,
    pub appear_duration_sec: f64,
    pub line_rotation_deg: f32,
    pub line_length: f32,
}

impl OrbitNode {
    /// Distance from the centre to the node. Differs from `line_length`
    /// whenever the node is off the horizontal axis and `rx != ry`.
    pub fn center_distance(&self) -> f32 {
        self.position.length()
    }

    /// Style of the node `elapsed_sec` after its card started revealing.
    ///
    /// The node grows out of the centre: offset and opacity interpolate from
    /// zero to its orbit position and full opacity.
    pub fn style_at(&self, elapsed_sec: f64) -> VisualStyle {
        let from = VisualStyle::new(0.0, Vec2::ZERO, 1.0);
        let to = VisualStyle::new(1.0, self.position, 1.0);
        let local = elapsed_sec - self.appear_delay_sec;
        if local <= 0.0 {
            return from;
        }
        if self.appear_duration_sec <= 0.0 {
            return to;
        }
        let t = (local / self.appear_duration_sec) as f32;
        VisualStyle::lerp(from, to, Ease::OutCubic.apply(t))
    }

    /// Seconds after the card's start at which this node is fully placed.
    pub fn settled_at(&self) -> f64 {
        self.appear_delay_sec + self.appear_duration_sec
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct OrbitLayout {
    pub nodes: Vec<OrbitNode>,
}

impl OrbitLayout {
    /// Lay out every node of `spec`.
    ///
    /// Non-finite angles are logged and skipped; the remaining nodes keep
    /// their input index, so their delays are unaffected by the gap.
    pub fn from_spec(spec: &OrbitSpec) -> LayoutResult<Self> {
        spec.validate()?;
        let nodes = spec
            .angles_deg
            .iter()
            .enumerate()
            .filter_map(|(i, &angle)| {
                if !angle.is_finite() {
                    log::warn!("[orbit] skipping node {} with angle {}", i, angle);
                    return None;
                }
                Some(OrbitNode {
                    index: i,
                    angle_deg: angle,
                    position: orbit_position(angle, spec.radius_x, spec.radius_y),
                    appear_delay_sec: spec.base_delay_sec + i as f64 * spec.delay_step_sec,
                    appear_duration_sec: spec.appear_duration_sec,
                    line_rotation_deg: line_rotation_deg(angle),
                    line_length: spec.radius_x,
                })
            })
            .collect::<Vec<_>>();
        log::debug!("[orbit] laid out {} nodes", nodes.len());
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// When the last node settles, relative to the card's start.
    pub fn settled_at(&self) -> f64 {
        self.nodes
            .iter()
            .map(OrbitNode::settled_at)
            .fold(0.0, f64::max)
    }
}
