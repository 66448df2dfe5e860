use crate::error::ColorFormatError;

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// handles single-digit coordinates by doubling the digit.
///
/// ```
/// # use prettychalk::hex_to_rgb;
/// # use prettychalk::error::ColorFormatError;
/// assert_eq!(hex_to_rgb("#FF0000")?, [255, 0, 0]);
/// assert_eq!(hex_to_rgb("#f0a")?, [255, 0, 170]);
/// assert!(hex_to_rgb("#f0a0").is_err());
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn hex_to_rgb(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let invalid = || ColorFormatError::InvalidColorFormat(s.to_string());

    // The whole input must match; trailing characters are an error.
    let digits = s.strip_prefix('#').ok_or_else(invalid)?;
    if (digits.len() != 3 && digits.len() != 6)
        || !digits.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return Err(invalid());
    }

    let factor = digits.len() / 3;
    let parse_coordinate = |index: usize| -> Result<u8, ColorFormatError> {
        let t = digits
            .get(factor * index..factor * (index + 1))
            .ok_or_else(invalid)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| invalid())?;

        Ok(if factor == 1 { 16 * n + n } else { n })
    };

    let c1 = parse_coordinate(0)?;
    let c2 = parse_coordinate(1)?;
    let c3 = parse_coordinate(2)?;
    Ok([c1, c2, c3])
}

#[cfg(test)]
mod test {
    use super::{hex_to_rgb, ColorFormatError};

    #[test]
    fn test_hex_to_rgb() -> Result<(), ColorFormatError> {
        assert_eq!(hex_to_rgb("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(hex_to_rgb("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(hex_to_rgb("#DEADED")?, [0xde_u8, 0xad, 0xed]);
        assert_eq!(hex_to_rgb("#deaded")?, [0xde_u8, 0xad, 0xed]);
        assert_eq!(hex_to_rgb("#FfA500")?, [255_u8, 165, 0]);
        assert_eq!(hex_to_rgb("#000")?, [0_u8, 0, 0]);
        assert_eq!(hex_to_rgb("#fff")?, [255_u8, 255, 255]);

        for input in [
            "", "#", "fff", "ff0000", "#ff", "#ffff", "#fffff", "#fffffff", "#FF00001", "#0g0",
            "#00000g", " #fff", "#fff ", "#+ff", "#💩00",
        ] {
            assert_eq!(
                hex_to_rgb(input),
                Err(ColorFormatError::InvalidColorFormat(input.to_string())),
                "{:?} should be rejected",
                input
            );
        }

        Ok(())
    }
}
