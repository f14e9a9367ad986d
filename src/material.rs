use super::scene::SceneError;
use super::vec::Color;

// The four response coefficients of a surface. Each lives in [0, 1]:
// ambient is the light-independent floor, diffuse scales the Lambert term,
// specular scales the highlight, reflectivity blends in the mirror bounce.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub ambient: f64,
    pub diffuse: f64,
    pub specular: f64,
    pub reflectivity: f64,
}

impl Material {
    pub fn new(
        ambient: f64,
        diffuse: f64,
        specular: f64,
        reflectivity: f64,
    ) -> Result<Self, SceneError> {
        let coefficients = [
            ("ambient", ambient),
            ("diffuse", diffuse),
            ("specular", specular),
            ("reflectivity", reflectivity),
        ];
        for (name, value) in coefficients {
            // NaN fails the range check as well
            if !(0.0..=1.0).contains(&value) {
                return Err(SceneError::CoefficientOutOfRange { name, value });
            }
        }

        Ok(Self {
            ambient,
            diffuse,
            specular,
            reflectivity,
        })
    }
}

// What the shader needs to know about the sphere it hit. Alpha is carried
// through for the image sink; the shader itself never reads it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub color: Color,
    pub alpha: f64,
    pub material: Material,
}

impl Surface {
    pub fn new(color: Color, alpha: f64, material: Material) -> Self {
        Self {
            color,
            alpha,
            material,
        }
    }
}
