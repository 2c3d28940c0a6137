use nalgebra::Vector3;

/// The actor transform a glider drives.
///
/// Frames follow the aircraft convention: body X forward, Y right, Z down; world
/// is north-east-down. Rotations are in degrees.
pub trait GliderHost {
    fn set_world_rotation(&mut self, pitch: f64, yaw: f64, roll: f64);

    /// Move along the host's own axes.
    fn add_local_offset(&mut self, offset: Vector3<f64>);

    /// Move along the world axes.
    fn add_world_offset(&mut self, offset: Vector3<f64>);
}

/// Orientation and displacement produced by one flight update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightOutput {
    pub pitch: f64,
    pub yaw: f64,
    pub roll: f64,
    /// Distance to travel along body X.
    pub forward: f64,
    /// Distance to rise along world up.
    pub climb: f64,
}

impl FlightOutput {
    /// Issues rotation, local offset, then world offset.
    pub fn apply<H: GliderHost + ?Sized>(&self, host: &mut H) {
        host.set_world_rotation(self.pitch, self.yaw, self.roll);
        host.add_local_offset(Vector3::new(self.forward, 0.0, 0.0));
        // NED: up is -Z
        host.add_world_offset(Vector3::new(0.0, 0.0, -self.climb));
    }
}
