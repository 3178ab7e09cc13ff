//! Fixed diagram geometry for 2..=6 sets.
//!
//! All coordinates live in the unit square with `y` pointing up. Shapes are
//! ellipses for 2..=5 sets and triangles for 6 sets, where ellipses cannot
//! produce all 63 regions without heavy distortion.

use crate::models::SetCount;
use std::f64::consts::PI;

use super::types::{HAlign, VAlign};

/// Number of vertices used to approximate an ellipse outline.
const ELLIPSE_SEGMENTS: usize = 120;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeSpec {
    /// `width` runs along x before the counter-clockwise rotation by `angle` degrees.
    Ellipse {
        center: (f64, f64),
        width: f64,
        height: f64,
        angle: f64,
    },
    Triangle {
        vertices: [(f64, f64); 3],
    },
}

impl ShapeSpec {
    /// Closed outline as a polygon (first vertex not repeated).
    pub fn outline(&self) -> Vec<(f64, f64)> {
        match *self {
            ShapeSpec::Ellipse {
                center: (cx, cy),
                width,
                height,
                angle,
            } => {
                let (sin_t, cos_t) = angle.to_radians().sin_cos();
                (0..ELLIPSE_SEGMENTS)
                    .map(|k| {
                        let phi = 2.0 * PI * k as f64 / ELLIPSE_SEGMENTS as f64;
                        let x = width / 2.0 * phi.cos();
                        let y = height / 2.0 * phi.sin();
                        (cx + x * cos_t - y * sin_t, cy + x * sin_t + y * cos_t)
                    })
                    .collect()
            }
            ShapeSpec::Triangle { vertices } => vertices.to_vec(),
        }
    }
}

/// Where a set name goes when it is written next to its shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendAnchor {
    pub position: (f64, f64),
    pub h_align: HAlign,
    pub v_align: VAlign,
}

#[derive(Debug)]
pub struct Geometry {
    /// One shape per set, in set order.
    pub shapes: &'static [ShapeSpec],
    /// Logic code -> petal label position.
    pub petal_anchors: &'static [(&'static str, (f64, f64))],
    /// One name anchor per set, in set order.
    pub legend_anchors: &'static [LegendAnchor],
}

impl Geometry {
    pub fn petal_anchor(&self, code: &str) -> Option<(f64, f64)> {
        self.petal_anchors
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, pos)| *pos)
    }
}

/// Geometry table for `count` sets.
pub fn geometry(count: SetCount) -> &'static Geometry {
    match count {
        SetCount::Two => &GEOMETRY_2,
        SetCount::Three => &GEOMETRY_3,
        SetCount::Four => &GEOMETRY_4,
        SetCount::Five => &GEOMETRY_5,
        SetCount::Six => &GEOMETRY_6,
    }
}

const fn ellipse(cx: f64, cy: f64, width: f64, height: f64, angle: f64) -> ShapeSpec {
    ShapeSpec::Ellipse {
        center: (cx, cy),
        width,
        height,
        angle,
    }
}

const fn triangle(x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) -> ShapeSpec {
    ShapeSpec::Triangle {
        vertices: [(x1, y1), (x2, y2), (x3, y3)],
    }
}

const fn anchor(x: f64, y: f64, h_align: HAlign, v_align: VAlign) -> LegendAnchor {
    LegendAnchor {
        position: (x, y),
        h_align,
        v_align,
    }
}

use HAlign::{Center as HC, Left, Right};
use VAlign::{Bottom, Center as VC, Top};

static GEOMETRY_2: Geometry = Geometry {
    shapes: &[
        ellipse(0.375, 0.500, 0.50, 0.50, 0.0),
        ellipse(0.625, 0.500, 0.50, 0.50, 0.0),
    ],
    petal_anchors: &[("01", (0.74, 0.50)), ("10", (0.26, 0.50)), ("11", (0.50, 0.50))],
    legend_anchors: &[
        anchor(0.20, 0.76, Right, Bottom),
        anchor(0.80, 0.76, Left, Bottom),
    ],
};

static GEOMETRY_3: Geometry = Geometry {
    shapes: &[
        ellipse(0.333, 0.633, 0.50, 0.50, 0.0),
        ellipse(0.666, 0.633, 0.50, 0.50, 0.0),
        ellipse(0.500, 0.310, 0.50, 0.50, 0.0),
    ],
    petal_anchors: &[
        ("001", (0.500, 0.270)),
        ("010", (0.730, 0.650)),
        ("011", (0.610, 0.460)),
        ("100", (0.270, 0.650)),
        ("101", (0.390, 0.460)),
        ("110", (0.500, 0.650)),
        ("111", (0.500, 0.508)),
    ],
    legend_anchors: &[
        anchor(0.15, 0.87, Right, Bottom),
        anchor(0.85, 0.87, Left, Bottom),
        anchor(0.50, 0.02, HC, Top),
    ],
};

static GEOMETRY_4: Geometry = Geometry {
    shapes: &[
        ellipse(0.350, 0.400, 0.72, 0.45, 140.0),
        ellipse(0.450, 0.500, 0.72, 0.45, 140.0),
        ellipse(0.544, 0.500, 0.72, 0.45, 40.0),
        ellipse(0.644, 0.400, 0.72, 0.45, 40.0),
    ],
    petal_anchors: &[
        ("0001", (0.85, 0.42)),
        ("0010", (0.68, 0.72)),
        ("0011", (0.77, 0.59)),
        ("0100", (0.32, 0.72)),
        ("0101", (0.71, 0.30)),
        ("0110", (0.50, 0.66)),
        ("0111", (0.65, 0.50)),
        ("1000", (0.14, 0.42)),
        ("1001", (0.50, 0.17)),
        ("1010", (0.29, 0.30)),
        ("1011", (0.39, 0.24)),
        ("1100", (0.23, 0.59)),
        ("1101", (0.61, 0.24)),
        ("1110", (0.35, 0.50)),
        ("1111", (0.50, 0.38)),
    ],
    legend_anchors: &[
        anchor(0.13, 0.18, Right, VC),
        anchor(0.18, 0.83, Right, Bottom),
        anchor(0.82, 0.83, Left, Bottom),
        anchor(0.87, 0.18, Left, Top),
    ],
};

static GEOMETRY_5: Geometry = Geometry {
    shapes: &[
        ellipse(0.428, 0.449, 0.87, 0.50, 155.0),
        ellipse(0.469, 0.543, 0.87, 0.50, 82.0),
        ellipse(0.558, 0.523, 0.87, 0.50, 10.0),
        ellipse(0.578, 0.432, 0.87, 0.50, 118.0),
        ellipse(0.489, 0.383, 0.87, 0.50, 46.0),
    ],
    petal_anchors: &[
        ("00001", (0.27, 0.11)),
        ("00010", (0.72, 0.11)),
        ("00011", (0.55, 0.13)),
        ("00100", (0.91, 0.58)),
        ("00101", (0.78, 0.64)),
        ("00110", (0.84, 0.41)),
        ("00111", (0.76, 0.55)),
        ("01000", (0.51, 0.90)),
        ("01001", (0.39, 0.15)),
        ("01010", (0.42, 0.78)),
        ("01011", (0.50, 0.15)),
        ("01100", (0.67, 0.76)),
        ("01101", (0.70, 0.71)),
        ("01110", (0.51, 0.74)),
        ("01111", (0.64, 0.67)),
        ("10000", (0.10, 0.61)),
        ("10001", (0.20, 0.31)),
        ("10010", (0.76, 0.25)),
        ("10011", (0.65, 0.23)),
        ("10100", (0.18, 0.50)),
        ("10101", (0.21, 0.37)),
        ("10110", (0.81, 0.37)),
        ("10111", (0.74, 0.40)),
        ("11000", (0.27, 0.70)),
        ("11001", (0.34, 0.25)),
        ("11010", (0.33, 0.72)),
        ("11011", (0.51, 0.22)),
        ("11100", (0.25, 0.58)),
        ("11101", (0.28, 0.39)),
        ("11110", (0.36, 0.66)),
        ("11111", (0.51, 0.47)),
    ],
    legend_anchors: &[
        anchor(0.02, 0.72, Right, VC),
        anchor(0.72, 0.94, HC, Bottom),
        anchor(0.97, 0.74, Left, VC),
        anchor(0.88, 0.05, Left, VC),
        anchor(0.12, 0.05, Right, VC),
    ],
};

static GEOMETRY_6: Geometry = Geometry {
    shapes: &[
        triangle(0.637, 0.921, 0.649, 0.274, 0.188, 0.667),
        triangle(0.981, 0.769, 0.335, 0.191, 0.393, 0.671),
        triangle(0.941, 0.397, 0.292, 0.475, 0.456, 0.747),
        triangle(0.662, 0.119, 0.316, 0.548, 0.662, 0.700),
        triangle(0.309, 0.081, 0.374, 0.718, 0.681, 0.488),
        triangle(0.016, 0.626, 0.726, 0.687, 0.522, 0.327),
    ],
    petal_anchors: &[
        ("000001", (0.212, 0.562)),
        ("000010", (0.430, 0.249)),
        ("000011", (0.356, 0.444)),
        ("000100", (0.609, 0.255)),
        ("000101", (0.323, 0.546)),
        ("000110", (0.513, 0.316)),
        ("000111", (0.523, 0.348)),
        ("001000", (0.747, 0.458)),
        ("001001", (0.325, 0.492)),
        ("001010", (0.670, 0.481)),
        ("001011", (0.359, 0.478)),
        ("001100", (0.653, 0.444)),
        ("001101", (0.344, 0.526)),
        ("001110", (0.653, 0.466)),
        ("001111", (0.363, 0.503)),
        ("010000", (0.750, 0.616)),
        ("010001", (0.682, 0.654)),
        ("010010", (0.402, 0.310)),
        ("010011", (0.392, 0.421)),
        ("010100", (0.653, 0.691)),
        ("010101", (0.651, 0.644)),
        ("010110", (0.490, 0.340)),
        ("010111", (0.468, 0.399)),
        ("011000", (0.692, 0.545)),
        ("011001", (0.666, 0.592)),
        ("011010", (0.665, 0.496)),
        ("011011", (0.374, 0.470)),
        ("011100", (0.653, 0.537)),
        ("011101", (0.652, 0.579)),
        ("011110", (0.653, 0.488)),
        ("011111", (0.389, 0.486)),
        ("100000", (0.553, 0.806)),
        ("100001", (0.313, 0.604)),
        ("100010", (0.388, 0.694)),
        ("100011", (0.375, 0.633)),
        ("100100", (0.605, 0.359)),
        ("100101", (0.334, 0.555)),
        ("100110", (0.582, 0.397)),
        ("100111", (0.542, 0.372)),
        ("101000", (0.468, 0.708)),
        ("101001", (0.355, 0.572)),
        ("101010", (0.420, 0.679)),
        ("101011", (0.375, 0.597)),
        ("101100", (0.641, 0.436)),
        ("101101", (0.348, 0.538)),
        ("101110", (0.635, 0.453)),
        ("101111", (0.370, 0.548)),
        ("110000", (0.594, 0.689)),
        ("110001", (0.579, 0.670)),
        ("110010", (0.398, 0.670)),
        ("110011", (0.395, 0.653)),
        ("110100", (0.633, 0.682)),
        ("110101", (0.616, 0.656)),
        ("110110", (0.587, 0.427)),
        ("110111", (0.526, 0.415)),
        ("111000", (0.495, 0.677)),
        ("111001", (0.505, 0.648)),
        ("111010", (0.428, 0.663)),
        ("111011", (0.430, 0.631)),
        ("111100", (0.639, 0.524)),
        ("111101", (0.591, 0.604)),
        ("111110", (0.622, 0.477)),
        ("111111", (0.501, 0.523)),
    ],
    legend_anchors: &[
        anchor(0.674, 0.824, HC, VC),
        anchor(0.747, 0.751, HC, VC),
        anchor(0.739, 0.396, HC, VC),
        anchor(0.700, 0.247, HC, VC),
        anchor(0.291, 0.255, HC, VC),
        anchor(0.203, 0.484, HC, VC),
    ],
};
