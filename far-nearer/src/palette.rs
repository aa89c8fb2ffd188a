use color_lib::{adjust_hue, Hsl};

pub const TOKENS: [&str; 3] = ["COLOR_1", "COLOR_2", "COLOR_3"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub token: &'static str,
    pub base: Hsl,
    pub lightness_shift: i32,
}

impl Swatch {
    pub fn new(token: &'static str, base: Hsl, lightness_shift: i32) -> Swatch {
        Swatch {
            token,
            base,
            lightness_shift,
        }
    }

    pub fn color_at(&self, step: i32) -> Hsl {
        self.base
            .with_hue(adjust_hue(self.base.hue, step))
            .shift_lightness(self.lightness_shift)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub swatches: [Swatch; 3],
}

impl Palette {
    pub fn far_nearer() -> Palette {
        Palette {
            swatches: [
                // https://colorpicker.me/#ff00ea
                Swatch::new(TOKENS[0], Hsl::new(305, 100, 50), 40),
                // https://colorpicker.me/#fa0060
                Swatch::new(TOKENS[1], Hsl::new(337, 100, 49), 40),
                // https://colorpicker.me/#ff9100
                Swatch::new(TOKENS[2], Hsl::new(34, 100, 50), 50),
            ],
        }
    }

    pub fn shifted(mut self, saturation: i32, lightness: i32) -> Palette {
        for swatch in self.swatches.iter_mut() {
            swatch.base = swatch
                .base
                .shift_saturation(saturation)
                .shift_lightness(lightness);
        }
        self
    }

    pub fn tokens(&self) -> [&'static str; 3] {
        self.swatches.map(|s| s.token)
    }

    pub fn colors_at(&self, step: i32) -> [String; 3] {
        self.swatches.map(|s| s.color_at(step).to_hex())
    }

    pub fn replacements_at(&self, step: i32) -> [(&'static str, String); 3] {
        self.swatches.map(|s| (s.token, s.color_at(step).to_hex()))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::far_nearer()
    }
}
