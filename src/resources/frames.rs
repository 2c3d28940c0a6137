use bevy::prelude::*;
use nalgebra::{Matrix3, Rotation3, UnitQuaternion, Vector3};
use thiserror::Error;

use crate::utils::CENTIMETERS_PER_METER;

#[derive(Error, Debug, PartialEq)]
pub enum FrameError {
    #[error("Render scale must be positive and finite, got {0}")]
    InvalidScale(f64),
}

/// Maps the NED simulation frame onto Bevy's render frame.
///
/// NED: x-north, y-east, z-down. Render: x-east, y-up, z-south, so a body's
/// forward axis lands on Bevy's -Z.
#[derive(Resource, Debug, Clone)]
pub struct RenderFrame {
    /// Render units per simulation unit
    scale: f64,
    /// Rotation matrix from NED to render axes
    ned_to_render: Matrix3<f64>,
}

impl Default for RenderFrame {
    /// Simulation distances are centimetres, rendered as metres.
    fn default() -> Self {
        let ned_to_render = Matrix3::new(
            0.0, 1.0, 0.0, // X (East)   <- Y
            0.0, 0.0, -1.0, // Y (Up)    <- -Z
            -1.0, 0.0, 0.0, // Z (South) <- -X
        );

        Self {
            scale: 1.0 / CENTIMETERS_PER_METER,
            ned_to_render,
        }
    }
}

impl RenderFrame {
    /// Create a render frame with a specific scale
    pub fn new(scale: f64) -> Result<Self, FrameError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(FrameError::InvalidScale(scale));
        }
        Ok(Self {
            scale,
            ..Default::default()
        })
    }

    pub fn render_position(&self, ned: &Vector3<f64>) -> Vec3 {
        let p = self.ned_to_render * ned * self.scale;
        Vec3::new(p.x as f32, p.y as f32, p.z as f32)
    }

    pub fn render_rotation(&self, attitude: &UnitQuaternion<f64>) -> Quat {
        let m = self.ned_to_render;
        let rotation = m * attitude.to_rotation_matrix().into_inner() * m.transpose();
        let q = UnitQuaternion::from_rotation_matrix(&Rotation3::from_matrix_unchecked(rotation));
        let c = q.quaternion().coords;
        Quat::from_xyzw(c.x as f32, c.y as f32, c.z as f32, c.w as f32).normalize()
    }
}
