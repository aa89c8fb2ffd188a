use crate::hue::cycle_hue;

#[allow(non_camel_case_types)]
pub type sRGB = [u8; 3];

pub fn as_index(c: &sRGB) -> usize {
    let mut out: usize = c[2] as usize;
    out |= (c[1] as usize) << 8;
    out |= (c[0] as usize) << 16;
    out
}

// Lowercase, so it can be dropped straight into a fill or stroke attribute.
pub fn to_string(c: &sRGB) -> String {
    format!("#{:06x}", as_index(c))
}

// Hue in degrees, saturation and lightness in percent. Nothing is range checked
// until conversion, where the hue is cycled and the percentages clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hsl {
    pub hue: i32,
    pub saturation: i32,
    pub lightness: i32,
}

impl Hsl {
    pub fn new(hue: i32, saturation: i32, lightness: i32) -> Hsl {
        Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    pub fn with_hue(self, hue: i32) -> Hsl {
        Hsl { hue, ..self }
    }

    pub fn shift_saturation(self, amount: i32) -> Hsl {
        Hsl {
            saturation: self.saturation.saturating_add(amount),
            ..self
        }
    }

    pub fn shift_lightness(self, amount: i32) -> Hsl {
        Hsl {
            lightness: self.lightness.saturating_add(amount),
            ..self
        }
    }

    pub fn to_srgb(&self) -> sRGB {
        (*self).into()
    }

    pub fn to_hex(&self) -> String {
        to_string(&self.to_srgb())
    }
}

// Gamma encoded channels in 0..=1. No linearization happens anywhere here.
#[derive(Debug)]
struct RGB {
    r: f64,
    g: f64,
    b: f64,
}

impl From<Hsl> for RGB {
    fn from(c: Hsl) -> Self {
        let hue = cycle_hue(c.hue) as f64;
        let s = c.saturation.clamp(0, 100) as f64 / 100.0;
        let l = c.lightness.clamp(0, 100) as f64 / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let hue_prime = hue / 60.0;
        let x = chroma * (1.0 - (hue_prime % 2.0 - 1.0).abs());

        let (r, g, b) = match hue_prime.floor() as u8 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        let m = l - chroma / 2.0;
        RGB {
            r: r + m,
            g: g + m,
            b: b + m,
        }
    }
}

// Round half up, same as the usual hsl-to-hex helpers do.
fn encode_channel(v: f64) -> u8 {
    (v * 255.0 + 0.5).floor() as u8
}

impl From<RGB> for sRGB {
    fn from(c: RGB) -> Self {
        [
            encode_channel(c.r),
            encode_channel(c.g),
            encode_channel(c.b),
        ]
    }
}

impl From<Hsl> for sRGB {
    fn from(c: Hsl) -> Self {
        Into::<RGB>::into(c).into()
    }
}
