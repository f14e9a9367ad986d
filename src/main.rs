use rand::Rng;
use rayon::prelude::*;
use std::time::Instant;

use sphere_tracer::{
    light_from_components, sphere_from_components, trace, Camera, Color, Point3, Scene,
    SceneError, Vec3, DEFAULT_MAX_DEPTH,
};

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

// The scene the renderer ships with: two matte spheres lit by two
// directional sources, fed through the same flat records a scene file
// would carry.
fn demo_scene() -> Result<Scene, SceneError> {
    Ok(Scene::builder()
        .background(Color::new(0.05, 0.05, 0.08))
        .push_sphere(sphere_from_components(
            [0.0, 1.0, 0.0, 1.0],
            [0.0, 0.5, 0.75, 1.0],
            [0.2, 0.75, 0.0, 0.0],
        )?)
        .push_sphere(sphere_from_components(
            [0.0, 5.0, 1.0, 2.0],
            [0.75, 0.3, 0.1, 1.0],
            [0.3, 1.0, 0.0, 0.0],
        )?)
        .push_light(light_from_components(
            [0.0, -2.0, 0.0, 0.0],
            [0.0, 1.0, 1.0, 1.0],
        )?)
        .push_light(light_from_components(
            [0.0, 3.5, 0.0, 0.0],
            [1.0, 0.75, 1.0, 1.0],
        )?)
        .build())
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    tracing_subscriber::fmt::init();

    let start = Instant::now();

    // Image
    const ASPECT_RATIO: f64 = 16.0 / 9.0;
    const IMAGE_WIDTH: u64 = 400;
    const IMAGE_HEIGHT: u64 = ((IMAGE_WIDTH as f64) / ASPECT_RATIO) as u64;
    const SAMPLES_PER_PIXEL: u64 = 16;

    // World
    let scene = demo_scene().expect("demo scene records are valid");
    tracing::info!(
        spheres = scene.spheres().len(),
        lights = scene.lights().len(),
        "scene built"
    );

    // Camera
    let camera = Camera::new(
        Point3::new(0.0, 2.5, 9.0),
        Point3::new(0.0, 2.5, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        60.0,
        ASPECT_RATIO,
    );

    // Output Format
    // ASCII
    println!("P3");
    // Dimensions
    println!("{} {}", IMAGE_WIDTH, IMAGE_HEIGHT);
    // Max color
    println!("255");

    // The scene is sealed, so scanlines are independent and render in
    // parallel without locking
    let rows: Vec<String> = (0..IMAGE_HEIGHT)
        .into_par_iter()
        .map(|j| {
            let mut rng = rand::thread_rng();
            let mut row = String::new();

            for i in 0..IMAGE_WIDTH {
                let mut pixel_color = Color::zero();
                for _ in 0..SAMPLES_PER_PIXEL {
                    let random_u: f64 = rng.gen();
                    let random_v: f64 = rng.gen();

                    let u = (i as f64 + random_u) / ((IMAGE_WIDTH - 1) as f64);
                    let v = (j as f64 + random_v) / ((IMAGE_HEIGHT - 1) as f64);

                    let ray = camera.get_ray(u, v);
                    pixel_color += trace(&ray, &scene, DEFAULT_MAX_DEPTH);
                }

                row.push_str(&pixel_color.format_color(SAMPLES_PER_PIXEL));
                row.push('\n');
            }

            row
        })
        .collect();

    // Pixel values, top scanline first while v grows upward
    for row in rows.iter().rev() {
        print!("{}", row);
    }

    tracing::info!(seconds = start.elapsed().as_secs_f64(), "render finished");
}
