use super::hit::HitRecord;
use super::ray::Ray;
use super::scene::Scene;
use super::trace;
use super::vec::Color;

// Phong exponent. The material record carries no shininess slot, so every
// surface shares one highlight width.
const SHININESS: f64 = 32.0;

// Shadow and reflection rays start slightly off the surface so they cannot
// re-intersect the sphere they left
const SURFACE_BIAS: f64 = 1.0e-4;

// Local illumination at a hit point: ambient once, then for every light
// that survives its shadow test a Lambert diffuse term and a Phong
// highlight. Mirror surfaces blend in a recursive bounce. The result is
// deliberately unclamped; the image sink owns tone mapping.
pub fn shade(hit: &HitRecord, ray: &Ray, scene: &Scene, depth: u64) -> Color {
    let material = hit.surface.material;

    // Ambient responds to no light in particular, so occlusion never
    // removes it
    let mut color = material.ambient * hit.surface.color;

    let view = -ray.direction().normalized();
    let lifted = hit.position + SURFACE_BIAS * hit.normal;

    for light in scene.lights() {
        let shadow_ray = light.shadow_ray(lifted);
        if scene.is_occluded(&shadow_ray, trace::T_MIN, light.distance_to(lifted)) {
            continue;
        }

        let to_light = shadow_ray.direction();
        let lambert = hit.normal.dot(to_light).max(0.0);
        color += material.diffuse
            * lambert
            * light.intensity()
            * (light.color() * hit.surface.color);

        let highlight = (-to_light).reflect(hit.normal).dot(view).max(0.0);
        color += material.specular
            * highlight.powf(SHININESS)
            * light.intensity()
            * light.color();
    }

    if material.reflectivity > 0.0 && depth > 0 {
        let bounced = ray.direction().normalized().reflect(hit.normal);
        let reflected = trace::trace(&Ray::new(lifted, bounced), scene, depth - 1);
        color = (1.0 - material.reflectivity) * color + material.reflectivity * reflected;
    }

    color
}
