use super::material::Surface;
use super::ray::Ray;
use super::vec::{Point3, Vec3};

// Transient result of one intersection query. Borrows the surface of the
// sphere it landed on so records stay cheap and Send for parallel passes.
pub struct HitRecord<'a> {
    pub position: Point3,
    pub normal: Vec3,
    pub t: f64,
    pub front_face: bool,
    pub surface: &'a Surface,
}

impl HitRecord<'_> {
    pub fn set_face_normal(&mut self, ray: &Ray, outward_normal: Vec3) -> () {
        // Point normal against ray for faster shading calc (skip dot prod)
        // As a result we have to track if this is front/back face of surface
        // Could instead store normal as always outwards and use dot prod during shading
        self.front_face = ray.direction().dot(outward_normal) < 0.0;
        self.normal = if self.front_face {
            outward_normal
        } else {
            (-1.0) * outward_normal
        }
    }
}

pub trait Hit {
    fn hit(&self, ray: &Ray, t_min: f64, t_max: f64) -> Option<HitRecord<'_>>;
}
