use crate::constants::PREVIEW_LEN;

/// Printable ASCII as an escaped byte-string literal, anything else as hex.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", b.escape_ascii())
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// `fmt_bytes` over at most `PREVIEW_LEN` bytes, noting how many were cut.
pub fn preview_bytes(b: &[u8]) -> String {
    if b.len() <= PREVIEW_LEN {
        return fmt_bytes(b);
    }
    format!("{}..(+{} bytes)", fmt_bytes(&b[..PREVIEW_LEN]), b.len() - PREVIEW_LEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_binary() {
        assert_eq!(fmt_bytes(b"abc"), "b\"abc\"");
        assert_eq!(fmt_bytes(&[0x00, 0xFF]), "0x00ff");
        assert_eq!(fmt_bytes(&[]), "b\"\"");
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        assert_eq!(fmt_bytes(b"a\"b"), r#"b"a\"b""#);
        assert_eq!(fmt_bytes(b"a\\b"), r#"b"a\\b""#);
    }

    #[test]
    fn preview_elides_long_payloads() {
        let long = [b'x'; PREVIEW_LEN + 4];
        let shown = preview_bytes(&long);
        assert!(shown.ends_with("..(+4 bytes)"));
    }
}
