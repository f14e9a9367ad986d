pub mod camera;
pub mod hit;
pub mod light;
pub mod material;
pub mod ray;
pub mod scene;
pub mod shading;
pub mod sphere;
pub mod trace;
pub mod vec;

pub use camera::Camera;
pub use hit::{Hit, HitRecord};
pub use light::{light_from_components, DirectionalLight, Light, PointLight};
pub use material::{Material, Surface};
pub use ray::Ray;
pub use scene::{Scene, SceneBuilder, SceneError};
pub use sphere::{sphere_from_components, Sphere};
pub use trace::{trace, DEFAULT_MAX_DEPTH, T_MIN};
pub use vec::{Color, Point3, Vec3};
