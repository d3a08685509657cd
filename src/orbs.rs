use thiserror::Error;

/// Time advanced per animation frame, in milliseconds (one frame at ~60fps).
pub const FRAME_MS: f64 = 16.0;
/// Horizontal drift amplitude as a fraction of canvas width.
pub const DRIFT_X: f64 = 0.08;
/// Vertical drift amplitude as a fraction of canvas height.
pub const DRIFT_Y: f64 = 0.06;

const GRADIENT_STOPS: [(f32, f64); 3] = [(0.0, 0.18), (0.4, 0.08), (1.0, 0.0)];

pub const ORBS: [Orb; 5] = [
    Orb::new(0.15, 0.2, 280.0, "#22C55E", 0.00018, 0.00012, 0.0),
    Orb::new(0.75, 0.15, 220.0, "#536B69", -0.00014, 0.00016, 1.2),
    Orb::new(0.5, 0.6, 320.0, "#22C55E", 0.00010, -0.00018, 2.4),
    Orb::new(0.85, 0.75, 200.0, "#536B69", -0.00016, -0.00010, 3.6),
    Orb::new(0.25, 0.85, 180.0, "#22C55E", 0.00012, 0.00014, 4.8),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("expected #rrggbb, got {0:?}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let malformed = || ColorError::Malformed(hex.to_string());
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(malformed());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| malformed());
        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
        })
    }

    pub fn rgba(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    /// Anchor as a fraction of the canvas size.
    pub anchor: (f64, f64),
    pub radius: f64,
    pub color: &'static str,
    pub vx: f64,
    pub vy: f64,
    pub phase: f64,
}

impl Orb {
    pub const fn new(
        x: f64,
        y: f64,
        radius: f64,
        color: &'static str,
        vx: f64,
        vy: f64,
        phase: f64,
    ) -> Self {
        Self {
            anchor: (x, y),
            radius,
            color,
            vx,
            vy,
            phase,
        }
    }

    /// Falls back to black for a malformed color.
    pub fn rgb(&self) -> Rgb {
        Rgb::from_hex(self.color).unwrap_or_default()
    }

    /// Offset from the anchor at time `t` (ms) on a canvas of the given size.
    pub fn drift(&self, t: f64, width: f64, height: f64) -> (f64, f64) {
        (
            (t * self.vx * 1000.0 + self.phase).sin() * width * DRIFT_X,
            (t * self.vy * 1000.0 + self.phase).cos() * height * DRIFT_Y,
        )
    }

    /// Radial gradient color stops from the center outwards.
    pub fn gradient(&self) -> Vec<(f32, String)> {
        let rgb = self.rgb();
        GRADIENT_STOPS
            .iter()
            .map(|(offset, alpha)| (*offset, rgb.rgba(*alpha)))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbSprite {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub stops: Vec<(f32, String)>,
}

/// Animation state for the background: the orbs, their pixel anchors and the clock.
#[derive(Debug, Clone)]
pub struct OrbField {
    orbs: Vec<Orb>,
    anchors: Vec<(f64, f64)>,
    width: f64,
    height: f64,
    time: f64,
}

impl OrbField {
    pub fn new(orbs: &[Orb], width: f64, height: f64) -> Self {
        let mut field = Self {
            orbs: orbs.to_vec(),
            anchors: Vec::new(),
            width,
            height,
            time: 0.0,
        };
        field.resize(width, height);
        field
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn anchors(&self) -> &[(f64, f64)] {
        &self.anchors
    }

    /// Anchors follow the canvas so the layout keeps its proportions.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.anchors = self
            .orbs
            .iter()
            .map(|orb| (orb.anchor.0 * width, orb.anchor.1 * height))
            .collect();
    }

    pub fn positions(&self) -> Vec<(f64, f64)> {
        self.orbs
            .iter()
            .zip(&self.anchors)
            .map(|(orb, (ax, ay))| {
                let (dx, dy) = orb.drift(self.time, self.width, self.height);
                (ax + dx, ay + dy)
            })
            .collect()
    }

    /// Returns the frame for the current time, then advances the clock by one frame.
    pub fn step(&mut self) -> Vec<OrbSprite> {
        let frame = self
            .positions()
            .into_iter()
            .zip(&self.orbs)
            .map(|((x, y), orb)| OrbSprite {
                x,
                y,
                radius: orb.radius,
                stops: orb.gradient(),
            })
            .collect();
        self.time += FRAME_MS;
        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(
            Rgb::from_hex("#22C55E"),
            Ok(Rgb {
                r: 0x22,
                g: 0xc5,
                b: 0x5e
            })
        );
        assert_eq!(
            Rgb::from_hex("536b69"),
            Ok(Rgb {
                r: 0x53,
                g: 0x6b,
                b: 0x69
            })
        );
        assert!(Rgb::from_hex("#fff").is_err());
        assert!(Rgb::from_hex("#gg0000").is_err());
        assert!(Rgb::from_hex("#1234€").is_err());
        assert!(Rgb::from_hex("#+1+1+1").is_err());
    }

    #[test]
    fn test_malformed_color_is_black() {
        let orb = Orb::new(0.5, 0.5, 10.0, "green", 0.0, 0.0, 0.0);
        assert_eq!(orb.rgb(), Rgb::default());
        assert_eq!(orb.gradient()[0].1, "rgba(0, 0, 0, 0.18)");
    }

    #[test]
    fn test_gradient_stops() {
        let stops = ORBS[0].gradient();
        assert_eq!(
            stops,
            vec![
                (0.0, "rgba(34, 197, 94, 0.18)".to_string()),
                (0.4, "rgba(34, 197, 94, 0.08)".to_string()),
                (1.0, "rgba(34, 197, 94, 0)".to_string()),
            ]
        );
    }

    #[test]
    fn test_step_advances_clock() {
        let mut field = OrbField::new(&ORBS, 1000.0, 800.0);
        assert_eq!(field.time(), 0.0);

        let first = field.step();
        assert_eq!(first.len(), ORBS.len());
        assert_eq!(field.time(), FRAME_MS);

        // the first frame is drawn at t = 0: pure phase offset
        let orb = &ORBS[1];
        let expected_x = 750.0 + orb.phase.sin() * 1000.0 * DRIFT_X;
        let expected_y = 120.0 + orb.phase.cos() * 800.0 * DRIFT_Y;
        assert!((first[1].x - expected_x).abs() < 1e-9);
        assert!((first[1].y - expected_y).abs() < 1e-9);
        assert_eq!(first[1].radius, 220.0);

        field.step();
        field.step();
        assert_eq!(field.time(), 3.0 * FRAME_MS);
    }

    fn assert_close(actual: (f64, f64), expected: (f64, f64)) {
        assert!(
            (actual.0 - expected.0).abs() < 1e-9 && (actual.1 - expected.1).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn test_new_places_one_anchor_per_orb() {
        let field = OrbField::new(&ORBS, 1000.0, 1000.0);
        assert_eq!(field.anchors().len(), ORBS.len());
        assert_close(field.anchors()[1], (750.0, 150.0));

        let empty = OrbField::new(&[], 1000.0, 1000.0);
        assert!(empty.anchors().is_empty());
        assert!(empty.positions().is_empty());
    }

    #[test]
    fn test_resize_recomputes_anchors() {
        let mut field = OrbField::new(&ORBS, 1000.0, 1000.0);
        assert_close(field.anchors()[2], (500.0, 600.0));

        field.resize(2000.0, 500.0);
        assert_eq!(field.size(), (2000.0, 500.0));
        assert_close(field.anchors()[2], (1000.0, 300.0));
        assert_close(field.anchors()[0], (300.0, 100.0));
    }

    proptest! {
        #[test]
        fn prop_drift_is_bounded(
            t in 0.0f64..1.0e9,
            width in 1.0f64..4000.0,
            height in 1.0f64..4000.0,
        ) {
            for orb in ORBS.iter() {
                let (dx, dy) = orb.drift(t, width, height);
                prop_assert!(dx.abs() <= width * DRIFT_X + 1e-9);
                prop_assert!(dy.abs() <= height * DRIFT_Y + 1e-9);
            }
        }
    }
}
