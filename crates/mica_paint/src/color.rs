//! Color types and shading utilities

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
        a: 1.0,
    };
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const RED: Color = Color {
        r: 1.0,
        g: 0.0,
        b: 0.0,
        a: 1.0,
    };
    pub const TRANSPARENT: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            // 0xRRGGBBAA format
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            // 0xRRGGBB format
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Tint toward white by `percent` (0-100; 100 and above is white).
    ///
    /// Alpha is preserved.
    pub fn lighter(self, percent: f32) -> Self {
        let t = (percent / 100.0).clamp(0.0, 1.0);
        Self {
            r: self.r + (1.0 - self.r) * t,
            g: self.g + (1.0 - self.g) * t,
            b: self.b + (1.0 - self.b) * t,
            a: self.a,
        }
    }

    /// Shade toward black by `percent` (0-100; 100 and above is black).
    ///
    /// Alpha is preserved.
    pub fn darker(self, percent: f32) -> Self {
        let t = (percent / 100.0).clamp(0.0, 1.0);
        Self {
            r: self.r * (1.0 - t),
            g: self.g * (1.0 - t),
            b: self.b * (1.0 - t),
            a: self.a,
        }
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
            (self.a * 255.0) as u8,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_percent_is_identity() {
        let c = Color::from_hex(0x4A90D9);
        assert_eq!(c.lighter(0.0), c);
        assert_eq!(c.darker(0.0), c);
    }

    #[test]
    fn full_percent_saturates() {
        let c = Color::rgb(0.3, 0.6, 0.9);
        assert_eq!(c.lighter(100.0), Color::WHITE);
        assert_eq!(c.lighter(200.0), Color::WHITE);
        assert_eq!(c.darker(100.0), Color::BLACK);
        assert_eq!(c.darker(150.0), Color::BLACK);
    }

    #[test]
    fn shading_preserves_alpha() {
        let c = Color::rgb(0.2, 0.4, 0.8).with_alpha(0.5);
        assert_eq!(c.lighter(75.0).a, 0.5);
        assert_eq!(c.darker(75.0).a, 0.5);
    }

    #[test]
    fn hex_roundtrip() {
        let c = Color::from_hex(0x336699FF);
        assert_eq!(c.to_rgba8(), [0x33, 0x66, 0x99, 0xFF]);
        assert_eq!(Color::from_hex(0x336699), Color::from_hex(0x336699FF));
    }
}
