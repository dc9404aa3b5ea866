use glam::{Mat4, Vec3};

const NEAR_PLANE: f32 = 1.0;

/// Fixed pinhole camera on the +Z axis, looking at the box center.
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    pub far: f32,
}

impl Camera {
    /// A camera whose projection scales a point at depth `z` by
    /// `focal_length / (distance - z)` pixels on a viewport `viewport_height` tall.
    pub fn from_focal_length(
        focal_length: f32,
        distance: f32,
        viewport_height: f32,
        box_size: f32,
    ) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            fov_y: 2.0 * (viewport_height * 0.5 / focal_length).atan(),
            far: distance + box_size,
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fov_y, aspect, NEAR_PLANE, self.far)
    }
}
