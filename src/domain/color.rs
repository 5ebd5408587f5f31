use rand::Rng;

/// 24-bit cell color. Alpha is always opaque when drawn, so it isn't stored.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Three independent uniform bytes, drawn in r, g, b order
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let r = rng.random();
        let g = rng.random();
        let b = rng.random();
        Self { r, g, b }
    }
}
