//! UTF-16 helpers for the Win32 string parameters and fixed-size buffers

/// Encode a string as a null-terminated UTF-16 buffer
pub fn to_wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

/// Copy `s` into a fixed UTF-16 buffer, truncating and keeping the terminator.
///
/// Truncation happens on character boundaries, so a surrogate pair is either
/// copied whole or not at all.
pub fn copy_to_fixed<const N: usize>(dst: &mut [u16; N], s: &str) {
    let Some(capacity) = N.checked_sub(1) else {
        return;
    };

    let mut len = 0;
    let mut units = [0u16; 2];
    for c in s.chars() {
        let encoded = c.encode_utf16(&mut units);
        if len + encoded.len() > capacity {
            break;
        }
        dst[len..len + encoded.len()].copy_from_slice(encoded);
        len += encoded.len();
    }
    dst[len] = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(buf: &[u16]) -> String {
        let end = buf.iter().position(|&u| u == 0).unwrap_or(buf.len());
        String::from_utf16(&buf[..end]).unwrap()
    }

    #[test]
    fn test_to_wide_is_terminated() {
        assert_eq!(to_wide("ab"), vec![b'a' as u16, b'b' as u16, 0]);
    }

    #[test]
    fn test_copy_fits() {
        let mut buf = [0xFFFFu16; 8];
        copy_to_fixed(&mut buf, "Tray");
        assert_eq!(text(&buf), "Tray");
        assert_eq!(buf[4], 0);
    }

    #[test]
    fn test_copy_truncates_and_terminates() {
        let mut buf = [0xFFFFu16; 4];
        copy_to_fixed(&mut buf, "Notepad");
        assert_eq!(text(&buf), "Not");
        assert_eq!(buf[3], 0);
    }

    #[test]
    fn test_surrogate_pair_is_not_split_at_the_limit() {
        // "ab" plus one astral char needs 4 units; only 3 fit before the terminator
        let mut buf = [0xFFFFu16; 4];
        copy_to_fixed(&mut buf, "ab\u{1F680}");
        assert_eq!(text(&buf), "ab");
        assert_eq!(buf[2], 0);

        let mut roomy = [0xFFFFu16; 5];
        copy_to_fixed(&mut roomy, "ab\u{1F680}");
        assert_eq!(text(&roomy), "ab\u{1F680}");
    }

    #[test]
    fn test_zero_sized_buffer() {
        let mut buf: [u16; 0] = [];
        copy_to_fixed(&mut buf, "x");
    }
}
