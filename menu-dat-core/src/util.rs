/// Format a byte count with fractional KB/MB (e.g., "1.5 KB", "2.3 MB").
pub fn format_bytes_approx(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Read a null-terminated ASCII string from a byte slice.
///
/// Stops at the first null byte, filters out non-printable characters,
/// and returns the result. No trimming is performed.
pub fn read_ascii(buf: &[u8]) -> String {
    buf.iter()
        .take_while(|&&b| b != 0)
        .filter(|&&b| (0x20..0x7F).contains(&b))
        .map(|&b| b as char)
        .collect()
}

/// Read a fixed-length ASCII field padded with NULs or spaces.
///
/// Non-printable bytes are replaced with spaces, then the result is trimmed.
/// Unlike [`read_ascii`], this does NOT stop at null bytes, so a field with
/// stray padding in the middle still yields its printable text.
pub fn read_ascii_fixed(buf: &[u8]) -> String {
    let s: String = buf
        .iter()
        .map(|&b| {
            if (0x20..0x7F).contains(&b) {
                b as char
            } else {
                ' '
            }
        })
        .collect();
    s.trim().to_string()
}

/// Write `text` into `buf` as NUL-terminated ASCII.
///
/// At most `buf.len() - 1` bytes are written so the terminator always fits;
/// the remainder of `buf` is zeroed. Control characters become spaces and
/// non-ASCII characters become `?`. Returns the number of text bytes written.
pub fn write_ascii_terminated(buf: &mut [u8], text: &str) -> usize {
    buf.fill(0);
    let capacity = buf.len().saturating_sub(1);
    let mut written = 0;
    for (slot, c) in buf[..capacity].iter_mut().zip(text.chars()) {
        *slot = match c {
            ' '..='~' => c as u8,
            c if c.is_control() => b' ',
            _ => b'?',
        };
        written += 1;
    }
    written
}
