//! Byte classes used to pick charsets and transfer encodings

/// Returns `true` for the visible ASCII range and space (bytes 32 to 126)
#[inline]
pub const fn is_printable_ascii(b: u8) -> bool {
    matches!(b, 32..=126)
}

/// Like [`is_printable_ascii`], but also accepts `\r` and `\n`
#[inline]
pub const fn is_printable_ascii_or_crlf(b: u8) -> bool {
    is_printable_ascii(b) || b == b'\r' || b == b'\n'
}

/// Returns `true` if every byte of `s` is printable ASCII
///
/// Used on header values, where line breaks are never allowed.
pub fn is_printable_ascii_str<S: AsRef<[u8]> + ?Sized>(s: &S) -> bool {
    s.as_ref().iter().copied().all(is_printable_ascii)
}

/// Returns `true` if every byte of `s` is printable ASCII, `\r` or `\n`
///
/// Used on body text.
pub fn is_printable_ascii_crlf_str<S: AsRef<[u8]> + ?Sized>(s: &S) -> bool {
    s.as_ref().iter().copied().all(is_printable_ascii_or_crlf)
}
