use super::hit::Hit;
use super::ray::Ray;
use super::scene::Scene;
use super::shading;
use super::vec::Color;

// t_min prevents hitting very near surfaces, aka shadow acne
pub const T_MIN: f64 = 1.0e-4;

// Bounce budget for callers that have no opinion; two facing mirrors
// terminate here instead of recursing forever
pub const DEFAULT_MAX_DEPTH: u64 = 5;

pub fn trace(ray: &Ray, scene: &Scene, depth: u64) -> Color {
    if depth == 0 {
        // Too many bounces! Assume all energy lost
        return Color::zero();
    }

    // A ray with no direction cannot hit anything; reject it before the
    // quadratic divides by its squared length
    if ray.direction().near_zero() {
        return scene.background();
    }

    if let Some(hit) = scene.hit(ray, T_MIN, f64::INFINITY) {
        shading::shade(&hit, ray, scene, depth)
    } else {
        // Background color
        scene.background()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::light::light_from_components;
    use crate::sphere::sphere_from_components;
    use crate::vec::{Point3, Vec3};

    fn mirror_sphere(z: f64) -> crate::sphere::Sphere {
        sphere_from_components(
            [0.0, 0.0, z, 1.0],
            [1.0, 1.0, 1.0, 1.0],
            [0.0, 0.0, 0.0, 1.0],
        )
        .unwrap()
    }

    #[test]
    fn missing_everything_returns_the_background_exactly() {
        let scene = Scene::builder()
            .background(Color::new(0.1, 0.2, 0.3))
            .push_sphere(mirror_sphere(-5.0))
            .build();

        // Aimed well away from the sphere
        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(trace(&ray, &scene, DEFAULT_MAX_DEPTH), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn exhausted_depth_returns_no_energy() {
        let scene = Scene::builder()
            .background(Color::new(0.1, 0.2, 0.3))
            .build();

        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(trace(&ray, &scene, 0), Color::zero());
    }

    #[test]
    fn degenerate_direction_is_rejected_before_intersection() {
        let scene = Scene::builder()
            .background(Color::new(0.1, 0.2, 0.3))
            .push_sphere(mirror_sphere(0.0))
            .build();

        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::zero());
        assert_eq!(trace(&ray, &scene, DEFAULT_MAX_DEPTH), Color::new(0.1, 0.2, 0.3));
    }

    #[test]
    fn identical_queries_give_bit_identical_colors() {
        let scene = Scene::builder()
            .push_sphere(
                sphere_from_components(
                    [0.0, 0.0, -5.0, 1.0],
                    [0.3, 0.6, 0.9, 1.0],
                    [0.2, 0.7, 0.1, 0.0],
                )
                .unwrap(),
            )
            .push_light(
                light_from_components([1.0, -1.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]).unwrap(),
            )
            .build();

        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let first = trace(&ray, &scene, DEFAULT_MAX_DEPTH);
        let second = trace(&ray, &scene, DEFAULT_MAX_DEPTH);
        assert_eq!(first, second);
    }

    #[test]
    fn facing_mirrors_terminate_at_the_depth_budget() {
        // Two fully reflective spheres staring at each other; the bounce
        // ping-pongs until the budget runs out and the energy drops to zero
        let scene = Scene::builder()
            .push_sphere(mirror_sphere(3.0))
            .push_sphere(mirror_sphere(-3.0))
            .build();

        let ray = Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, 1.0));
        let color = trace(&ray, &scene, DEFAULT_MAX_DEPTH);
        assert!(color.x().is_finite() && color.y().is_finite() && color.z().is_finite());
        assert_eq!(color, Color::zero());
    }

    #[test]
    fn worked_example_hits_the_north_pole() {
        // One unit sphere at the origin, one directional light along -y, a
        // ray from (0,0,5) straight down the z axis
        let scene = Scene::builder()
            .push_sphere(
                sphere_from_components(
                    [0.0, 0.0, 0.0, 1.0],
                    [1.0, 1.0, 1.0, 1.0],
                    [0.25, 0.5, 0.0, 0.0],
                )
                .unwrap(),
            )
            .push_light(
                light_from_components([0.0, -1.0, 0.0, 0.0], [1.0, 1.0, 1.0, 1.0]).unwrap(),
            )
            .build();

        let ray = Ray::new(Point3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.hit(&ray, T_MIN, f64::INFINITY).unwrap();
        assert!((hit.t - 4.0).abs() < 1.0e-9);
        assert!((hit.position - Point3::new(0.0, 0.0, 1.0)).near_zero());
        assert!((hit.normal - Vec3::new(0.0, 0.0, 1.0)).near_zero());

        // The light grazes the normal at 90 degrees, leaving ambient alone
        let color = trace(&ray, &scene, DEFAULT_MAX_DEPTH);
        assert!((color - Color::new(0.25, 0.25, 0.25)).near_zero());
    }
}
