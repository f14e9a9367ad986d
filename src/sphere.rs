use super::hit::{Hit, HitRecord};
use super::material::{Material, Surface};
use super::ray::Ray;
use super::scene::SceneError;
use super::vec::{Color, Point3, Vec3};

pub struct Sphere {
    center: Point3,
    radius: f64,
    surface: Surface,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64, surface: Surface) -> Result<Self, SceneError> {
        // A zero or negative radius has no defined intersection, reject it
        // here instead of letting the quadratic produce garbage roots
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SceneError::NonPositiveRadius(radius));
        }
        if !(center.x().is_finite() && center.y().is_finite() && center.z().is_finite()) {
            return Err(SceneError::NonFiniteGeometry);
        }

        Ok(Self {
            center,
            radius,
            surface,
        })
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }
}

// Builds a sphere from the flat source records: position packs the radius
// into its fourth slot, color packs alpha, material packs the coefficients.
pub fn sphere_from_components(
    position: [f64; 4],
    color: [f64; 4],
    material: [f64; 4],
) -> Result<Sphere, SceneError> {
    let [x, y, z, radius] = position;
    let [r, g, b, alpha] = color;
    let [ambient, diffuse, specular, reflectivity] = material;

    let material = Material::new(ambient, diffuse, specular, reflectivity)?;
    let surface = Surface::new(Color::new(r, g, b), alpha, material);
    Sphere::new(Point3::new(x, y, z), radius, surface)
}

impl Hit for Sphere {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>> {
        let oc = ray.origin() - self.center;
        // Quadratic formula (simplified)
        let a = ray.direction().length().powi(2);
        let half_b = oc.dot(ray.direction());
        let c = oc.length().powi(2) - self.radius.powi(2);

        let discriminant = half_b.powi(2) - a * c;
        if discriminant < 0.0 {
            return None;
        }

        // Find the nearest root that lies in the acceptable range
        let sqrt_d = discriminant.sqrt();
        // This is the smallest root from the (simplified) quadratic formula
        let mut root = (-half_b - sqrt_d) / a;
        if root < t_min || root > t_max {
            root = (-half_b + sqrt_d) / a;
            if root < t_min || root > t_max {
                return None;
            }
        }

        let position = ray.at(root);
        let mut hit = HitRecord {
            t: root,
            position,
            normal: Vec3::zero(),
            front_face: false,
            surface: &self.surface,
        };

        let outward_normal = (position - self.center) / self.radius;
        hit.set_face_normal(ray, outward_normal);

        Some(hit)
    }
}
