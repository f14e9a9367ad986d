use super::ray::Ray;
use super::scene::SceneError;
use super::vec::{Color, Point3, Vec3};

pub trait Light: Send + Sync {
    fn color(&self) -> Color;

    fn intensity(&self) -> f64;

    // Ray from the surface position towards the light source, normalized by convention
    fn shadow_ray(&self, surface_position: Point3) -> Ray;

    // How far the shadow ray may travel before an occluder sits behind the
    // light instead of in front of it
    fn distance_to(&self, surface_position: Point3) -> f64;
}

pub struct DirectionalLight {
    direction: Vec3,
    color: Color,
    intensity: f64,
}

impl DirectionalLight {
    // `direction` is the direction the light travels, not the direction to it
    pub fn new(direction: Vec3, color: Color, intensity: f64) -> Result<Self, SceneError> {
        if direction.near_zero() {
            return Err(SceneError::ZeroDirection);
        }

        Ok(Self {
            direction: direction.normalized(),
            color,
            intensity,
        })
    }
}

impl Light for DirectionalLight {
    fn color(&self) -> Color {
        self.color
    }

    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn shadow_ray(&self, surface_position: Point3) -> Ray {
        Ray::new(surface_position, -self.direction)
    }

    fn distance_to(&self, _surface_position: Point3) -> f64 {
        // The source sits at infinity; nothing can stand behind it
        f64::INFINITY
    }
}

pub struct PointLight {
    position: Point3,
    color: Color,
    intensity: f64,
}

impl PointLight {
    pub fn new(position: Point3, color: Color, intensity: f64) -> Self {
        Self {
            position,
            color,
            intensity,
        }
    }
}

impl Light for PointLight {
    fn color(&self) -> Color {
        self.color
    }

    fn intensity(&self) -> f64 {
        self.intensity
    }

    fn shadow_ray(&self, surface_position: Point3) -> Ray {
        Ray::new(
            surface_position,
            (self.position - surface_position).normalized(),
        )
    }

    fn distance_to(&self, surface_position: Point3) -> f64 {
        (self.position - surface_position).length()
    }
}

// The source format packs both light kinds into a single record. The
// position's w slot selects the variant (w = 0 means the xyz part is a
// travel direction, anything else a point in space) and the color's fourth
// slot is the intensity scalar.
pub fn light_from_components(
    position: [f64; 4],
    color: [f64; 4],
) -> Result<Box<dyn Light>, SceneError> {
    let [x, y, z, w] = position;
    let [r, g, b, intensity] = color;
    let rgb = Color::new(r, g, b);

    if w == 0.0 {
        Ok(Box::new(DirectionalLight::new(
            Vec3::new(x, y, z),
            rgb,
            intensity,
        )?))
    } else {
        Ok(Box::new(PointLight::new(
            Point3::new(x, y, z),
            rgb,
            intensity,
        )))
    }
}
