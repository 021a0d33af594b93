//! Palette: logical paints to terminal glyphs.

use crate::fb::{Glyph, Rgb, Style};
use crate::types::Paint;

const BACKGROUND: Rgb = Rgb::new(0, 0, 0);

/// Glyph and colours used for every logical paint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub back: Glyph,
    pub block: Glyph,
    pub lock: Glyph,
    pub effect1: Glyph,
    pub effect2: Glyph,
    pub wall: Glyph,
    pub text: Style,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            back: Glyph::new('·', Style::new(Rgb::new(70, 70, 80), Rgb::new(20, 20, 28))),
            block: Glyph::new('█', Style::new(Rgb::new(80, 200, 230), BACKGROUND)),
            lock: Glyph::new('█', Style::new(Rgb::new(150, 150, 170), BACKGROUND)),
            effect1: Glyph::new('█', Style::new(Rgb::new(255, 255, 255), BACKGROUND)),
            effect2: Glyph::new('▒', Style::new(Rgb::new(240, 200, 60), BACKGROUND)),
            wall: Glyph::new('▓', Style::new(Rgb::new(110, 80, 60), BACKGROUND)),
            text: Style::new(Rgb::new(240, 240, 240), BACKGROUND),
        }
    }
}

impl Palette {
    pub fn glyph(&self, paint: Paint) -> Glyph {
        match paint {
            Paint::Back => self.back,
            Paint::Block => self.block,
            Paint::Lock => self.lock,
            Paint::Effect1 => self.effect1,
            Paint::Effect2 => self.effect2,
            Paint::Wall => self.wall,
        }
    }
}
