// Colors are `image::Rgb<u8>` at the API edge and packed 0x00RRGGBB in the buffer,
// the same layout minifb expects.

use crate::error::Error;
use image::Rgb;

pub type Color = Rgb<u8>;

pub const WHITE: Color = Rgb([0xFF, 0xFF, 0xFF]);
pub const BLACK: Color = Rgb([0x00, 0x00, 0x00]);

/// Pack an RGB triple as 0x00RRGGBB.
#[inline]
pub fn pack(color: Color) -> u32 {
    let [r, g, b] = color.0;
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[inline]
pub fn unpack(px: u32) -> Color {
    Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
}

/// Parse `#rrggbb` (the leading `#` is optional).
pub fn parse_hex(text: &str) -> Result<Color, Error> {
    let hex = text.trim();
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(text.to_string()));
    }
    let value = u32::from_str_radix(hex, 16).map_err(|_| Error::InvalidColor(text.to_string()))?;
    Ok(unpack(value))
}

pub fn to_hex(color: Color) -> String {
    format!("#{:06x}", pack(color))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_matches_minifb_layout() {
        assert_eq!(pack(Rgb([0x12, 0x34, 0x56])), 0x00_12_34_56);
        assert_eq!(unpack(0x00_12_34_56), Rgb([0x12, 0x34, 0x56]));
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_hex("#ffffff").unwrap(), WHITE);
        assert_eq!(parse_hex("FF8000").unwrap(), Rgb([0xFF, 0x80, 0x00]));
        assert_eq!(to_hex(Rgb([0xFF, 0x80, 0x00])), "#ff8000");
    }

    #[test]
    fn rejects_malformed_hex() {
        for bad in ["", "#fff", "#gggggg", "#1234567", "white"] {
            assert!(parse_hex(bad).is_err(), "{bad} should be rejected");
        }
    }
}
