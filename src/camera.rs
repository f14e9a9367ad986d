use super::ray::Ray;
use super::vec::{Point3, Vec3};
use std::f64::consts::PI;

// Pinhole look-at camera for the demo renderer. The evaluator itself is
// agnostic to projection; this only exists to feed it primary rays.
pub struct Camera {
    origin: Point3,
    horizontal: Vec3,
    vertical: Vec3,
    lower_left_corner: Point3,
}

impl Camera {
    pub fn new(
        origin: Point3,
        look_target: Point3,
        world_up: Vec3,
        vertical_fov_degrees: f64,
        aspect_ratio: f64,
    ) -> Self {
        // Viewport:
        // Doesn't really represent anything in the camera
        const FOCAL_LENGTH: f64 = 1.0;
        let fov = vertical_fov_degrees * (PI / 180.0);
        let viewport_height = 2.0 * FOCAL_LENGTH * (fov / 2.0).tan();
        let viewport_width = aspect_ratio * viewport_height;

        // Local coordinate system:
        // Camera faces along -z
        let camera_z = (origin - look_target).normalized();
        let camera_x = world_up.cross(camera_z).normalized();
        let camera_y = camera_z.cross(camera_x);

        let horizontal = viewport_width * camera_x;
        let vertical = viewport_height * camera_y;
        let lower_left_corner =
            origin - horizontal / 2.0 - vertical / 2.0 - FOCAL_LENGTH * camera_z;

        Self {
            origin,
            horizontal,
            vertical,
            lower_left_corner,
        }
    }

    pub fn get_ray(&self, u: f64, v: f64) -> Ray {
        let direction = (self.lower_left_corner + u * self.horizontal + v * self.vertical
            - self.origin)
            .normalized();
        Ray::new(self.origin, direction)
    }
}
