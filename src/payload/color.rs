use std::fmt;

/// An RGB color that renders as the `#rrggbb` string both dialects expect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn renders_lowercase_hex() {
        assert_eq!(Color::new(228, 24, 17).to_hex(), "#e41811");
        assert_eq!(Color::new(0, 0, 0).to_string(), "#000000");
        assert_eq!(String::from(Color::new(255, 255, 255)), "#ffffff");
    }
}
