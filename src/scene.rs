use thiserror::Error;

use super::hit::{Hit, HitRecord};
use super::light::Light;
use super::ray::Ray;
use super::sphere::Sphere;
use super::vec::Color;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("sphere center must be finite")]
    NonFiniteGeometry,

    #[error("material coefficient {name} must lie in [0, 1], got {value}")]
    CoefficientOutOfRange { name: &'static str, value: f64 },

    #[error("directional light needs a non-zero direction")]
    ZeroDirection,
}

// An immutable world for one render pass: spheres and lights in insertion
// order plus the color rays see when they escape.
pub struct Scene {
    spheres: Vec<Sphere>,
    lights: Vec<Box<dyn Light>>,
    background: Color,
}

impl Scene {
    pub fn builder() -> SceneBuilder {
        SceneBuilder::new()
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn lights(&self) -> &[Box<dyn Light>] {
        &self.lights
    }

    pub fn background(&self) -> Color {
        self.background
    }

    // Any-hit query for shadow rays, stops at the first occluder
    pub fn is_occluded(&self, ray: &Ray, t_min: f64, t_max: f64) -> bool {
        self.spheres
            .iter()
            .any(|sphere| sphere.hit(ray, t_min, t_max).is_some())
    }
}

impl Hit for Scene {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>> {
        let mut closest_t = t_max;
        let mut closest_record = None;

        for sphere in &self.spheres {
            if let Some(record) = sphere.hit(ray, t_min, closest_t) {
                // Strict comparison: when two surfaces land on exactly the
                // same t the sphere added first keeps the hit
                if record.t < closest_t {
                    closest_t = record.t;
                    closest_record = Some(record);
                }
            }
        }

        closest_record
    }
}

pub struct SceneBuilder {
    spheres: Vec<Sphere>,
    lights: Vec<Box<dyn Light>>,
    background: Color,
}

impl SceneBuilder {
    pub fn new() -> Self {
        Self {
            spheres: Vec::new(),
            lights: Vec::new(),
            background: Color::zero(),
        }
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn push_sphere(mut self, sphere: Sphere) -> Self {
        self.spheres.push(sphere);
        self
    }

    pub fn push_light(mut self, light: Box<dyn Light>) -> Self {
        self.lights.push(light);
        self
    }

    pub fn build(self) -> Scene {
        tracing::debug!(
            spheres = self.spheres.len(),
            lights = self.lights.len(),
            "scene sealed"
        );

        Scene {
            spheres: self.spheres,
            lights: self.lights,
            background: self.background,
        }
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::{Material, Surface};
    use crate::vec::{Point3, Vec3};

    fn sphere_at(z: f64, color: Color) -> Sphere {
        let surface = Surface::new(color, 1.0, Material::new(0.1, 0.9, 0.0, 0.0).unwrap());
        Sphere::new(Point3::new(0.0, 0.0, z), 1.0, surface).unwrap()
    }

    fn toward_negative_z() -> Ray {
        Ray::new(Point3::zero(), Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn nearest_sphere_wins() {
        let scene = Scene::builder()
            .push_sphere(sphere_at(-10.0, Color::new(0.0, 1.0, 0.0)))
            .push_sphere(sphere_at(-5.0, Color::new(1.0, 0.0, 0.0)))
            .build();

        let hit = scene.hit(&toward_negative_z(), 1.0e-4, f64::INFINITY).unwrap();
        assert!((hit.t - 4.0).abs() < 1.0e-9);
        assert_eq!(hit.surface.color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn nearest_hit_is_invariant_to_insertion_order() {
        let forward = Scene::builder()
            .push_sphere(sphere_at(-5.0, Color::new(1.0, 0.0, 0.0)))
            .push_sphere(sphere_at(-10.0, Color::new(0.0, 1.0, 0.0)))
            .build();
        let reversed = Scene::builder()
            .push_sphere(sphere_at(-10.0, Color::new(0.0, 1.0, 0.0)))
            .push_sphere(sphere_at(-5.0, Color::new(1.0, 0.0, 0.0)))
            .build();

        let ray = toward_negative_z();
        let a = forward.hit(&ray, 1.0e-4, f64::INFINITY).unwrap();
        let b = reversed.hit(&ray, 1.0e-4, f64::INFINITY).unwrap();
        assert_eq!(a.t, b.t);
        assert_eq!(a.surface.color, b.surface.color);
    }

    #[test]
    fn exact_tie_goes_to_the_first_sphere() {
        // Identical geometry, different colors; the scan must not replace
        // an equal-distance hit
        let scene = Scene::builder()
            .push_sphere(sphere_at(-5.0, Color::new(1.0, 0.0, 0.0)))
            .push_sphere(sphere_at(-5.0, Color::new(0.0, 0.0, 1.0)))
            .build();

        let hit = scene.hit(&toward_negative_z(), 1.0e-4, f64::INFINITY).unwrap();
        assert_eq!(hit.surface.color, Color::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn empty_scene_never_hits() {
        let scene = Scene::builder().build();
        assert!(scene.hit(&toward_negative_z(), 1.0e-4, f64::INFINITY).is_none());
        assert!(!scene.is_occluded(&toward_negative_z(), 1.0e-4, f64::INFINITY));
    }

    #[test]
    fn occlusion_respects_the_distance_bound() {
        let scene = Scene::builder()
            .push_sphere(sphere_at(-5.0, Color::one()))
            .build();

        let ray = toward_negative_z();
        assert!(scene.is_occluded(&ray, 1.0e-4, f64::INFINITY));
        // The blocker starts at t=4; a bound short of it means a clear path
        assert!(!scene.is_occluded(&ray, 1.0e-4, 3.0));
    }
}
