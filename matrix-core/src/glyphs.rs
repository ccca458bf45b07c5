//! Statische Glyphen für die 5×5-Matrix
//!
//! Ziffern 0-9 und ein paar Symbole. Reine Konstanten, kein Engine-Zustand.

use crate::types::Pattern;

pub const DIGIT_0: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0],
];

pub const DIGIT_1: Pattern = [
    [0, 0, 1, 0, 0],
    [0, 1, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 1, 1, 1, 0],
];

pub const DIGIT_2: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 0, 0, 0],
    [0, 1, 1, 1, 0],
];

pub const DIGIT_3: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 0, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 1, 1, 1, 0],
];

pub const DIGIT_4: Pattern = [
    [0, 1, 0, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 0, 0, 1, 0],
];

pub const DIGIT_5: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 1, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 1, 1, 1, 0],
];

pub const DIGIT_6: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 1, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0],
];

pub const DIGIT_7: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
    [0, 0, 1, 0, 0],
];

pub const DIGIT_8: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0],
];

pub const DIGIT_9: Pattern = [
    [0, 1, 1, 1, 0],
    [0, 1, 0, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 1, 0],
    [0, 1, 1, 1, 0],
];

/// Ziffern-Tabelle, Index = Ziffer
pub const DIGITS: [Pattern; 10] = [
    DIGIT_0, DIGIT_1, DIGIT_2, DIGIT_3, DIGIT_4, DIGIT_5, DIGIT_6, DIGIT_7, DIGIT_8, DIGIT_9,
];

pub const HEART: Pattern = [
    [0, 1, 0, 1, 0],
    [1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1],
    [0, 1, 1, 1, 0],
    [0, 0, 1, 0, 0],
];

pub const SQUARE: Pattern = [
    [0, 0, 0, 0, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 1, 1, 1, 0],
    [0, 0, 0, 0, 0],
];

pub const HOLLOW_SQUARE: Pattern = [
    [1, 1, 1, 1, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 0, 0, 0, 1],
    [1, 1, 1, 1, 1],
];

pub const ARROW_LEFT: Pattern = [
    [0, 0, 1, 0, 0],
    [0, 1, 0, 0, 0],
    [1, 1, 1, 1, 1],
    [0, 1, 0, 0, 0],
    [0, 0, 1, 0, 0],
];

pub const ARROW_RIGHT: Pattern = [
    [0, 0, 1, 0, 0],
    [0, 0, 0, 1, 0],
    [1, 1, 1, 1, 1],
    [0, 0, 0, 1, 0],
    [0, 0, 1, 0, 0],
];

/// Grad-Celsius-Zeichen (°C)
pub const DEGREE_C: Pattern = [
    [1, 0, 0, 0, 0],
    [0, 0, 1, 1, 1],
    [0, 1, 0, 0, 0],
    [0, 1, 0, 0, 0],
    [0, 0, 1, 1, 1],
];

pub const ALL_ON: Pattern = [[1; 5]; 5];

pub const ALL_OFF: Pattern = [[0; 5]; 5];

/// Ziffer 0-9 → Glyphe, alles andere → `None`
pub fn digit_glyph(digit: u8) -> Option<&'static Pattern> {
    DIGITS.get(digit as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Frame;

    #[test]
    fn test_digit_glyph_maps_all_digits() {
        for digit in 0..10u8 {
            assert_eq!(digit_glyph(digit), Some(&DIGITS[digit as usize]));
        }
    }

    #[test]
    fn test_digit_glyph_out_of_range() {
        assert_eq!(digit_glyph(10), None);
        assert_eq!(digit_glyph(255), None);
    }

    #[test]
    fn test_digit_glyphs_are_distinct() {
        for a in 0..10 {
            for b in (a + 1)..10 {
                assert_ne!(
                    Frame::from_pattern(&DIGITS[a]),
                    Frame::from_pattern(&DIGITS[b]),
                    "Ziffer {} und {} sehen gleich aus",
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_all_on_all_off() {
        assert_eq!(Frame::from_pattern(&ALL_ON).lit_count(), 25);
        assert_eq!(Frame::from_pattern(&ALL_OFF).lit_count(), 0);
    }
}
