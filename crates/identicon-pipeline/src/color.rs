//! Color selection: the first three digest bytes become the fill color.

use crate::types::{Color, HashBytes};

/// Pick the fill color as `(hash[0], hash[1], hash[2])`.
#[must_use = "returns the selected color"]
pub const fn pick_color(hash: &HashBytes) -> Color {
    let bytes = hash.as_bytes();
    Color::new(bytes[0], bytes[1], bytes[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uses_first_three_bytes_in_order() {
        let mut bytes = [0u8; 16];
        bytes[..4].copy_from_slice(&[9, 8, 7, 6]);
        let color = pick_color(&HashBytes::new(bytes));
        assert_eq!(color, Color::new(9, 8, 7));
    }

    #[test]
    fn elixir_color() {
        let hash = HashBytes::new([
            116, 181, 101, 134, 90, 25, 44, 200, 105, 60, 83, 13, 72, 235, 56, 58,
        ]);
        assert_eq!(pick_color(&hash), Color::new(116, 181, 101));
    }
}
