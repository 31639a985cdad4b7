use super::constants::{
    CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_SMOOTHING, CAMERA_START, POINTER_INFLUENCE,
};
use glam::{Mat4, Vec2, Vec3};

/// Perspective camera that eases toward a pointer/scroll driven target.
///
/// X/Y follow the pointer with exponential smoothing in [`CameraRig::advance`].
/// Z belongs to the scroll parallax: it is written through [`CameraRig::set_z`]
/// and mirrored into the target so the smoothing never pulls against it.
#[derive(Clone, Debug)]
pub struct CameraRig {
    pub position: Vec3,
    pub target: Vec3,
    pub look_at: Vec3,
    pub aspect: f32,
    smoothing: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(CAMERA_START, 1.0)
    }
}

impl CameraRig {
    pub fn new(position: Vec3, aspect: f32) -> Self {
        Self {
            position,
            target: position,
            look_at: Vec3::ZERO,
            aspect,
            smoothing: CAMERA_SMOOTHING,
        }
    }

    /// `nx`, `ny` in [-1, 1] with +Y meaning "up" on screen.
    pub fn update_target_from_pointer(&mut self, nx: f32, ny: f32) {
        self.target.x = nx * POINTER_INFLUENCE;
        self.target.y = ny * POINTER_INFLUENCE;
    }

    pub fn update_target_z_from_scroll(&mut self, current_z: f32) {
        self.target.z = current_z;
    }

    /// Mirror the camera's own Z into the target.
    pub fn sync_target_z(&mut self) {
        self.update_target_z_from_scroll(self.position.z);
    }

    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
    }

    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    pub fn advance(&mut self) {
        self.position.x += (self.target.x - self.position.x) * self.smoothing;
        self.position.y += (self.target.y - self.position.y) * self.smoothing;
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            CAMERA_FOV_Y_DEG.to_radians(),
            self.aspect,
            CAMERA_NEAR,
            CAMERA_FAR,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Map a client-space pointer position to [-1, 1] on both axes, Y up.
#[inline]
pub fn pointer_to_ndc(client_x: f32, client_y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(
        (client_x / width) * 2.0 - 1.0,
        -(client_y / height) * 2.0 + 1.0,
    )
}
