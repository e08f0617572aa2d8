use time::macros::format_description;
use time::OffsetDateTime;

/// JPEG and PNG only; everything else is rejected before touching disk.
pub fn is_allowed_image(content_type: &str) -> bool {
    matches!(content_type, "image/jpeg" | "image/jpg" | "image/png")
}

/// Strips path separators and anything exotic from a client-supplied name.
pub fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload".into()
    } else {
        cleaned
    }
}

/// `YYYYMMDD_HHMMSS_<name>`, unique enough at single-admin upload rates.
pub fn timestamped_filename(original: &str, now: OffsetDateTime) -> String {
    let fmt = format_description!("[year][month][day]_[hour][minute][second]");
    let stamp = now.format(&fmt).unwrap_or_else(|_| "00000000_000000".into());
    format!("{}_{}", stamp, sanitize_filename(original))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn allows_jpeg_and_png_only() {
        assert!(is_allowed_image("image/jpeg"));
        assert!(is_allowed_image("image/jpg"));
        assert!(is_allowed_image("image/png"));
        assert!(!is_allowed_image("image/webp"));
        assert!(!is_allowed_image("application/octet-stream"));
        assert!(!is_allowed_image("text/html"));
    }

    #[test]
    fn sanitizes_path_traversal() {
        assert_eq!(sanitize_filename("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_filename("photo 1.png"), "photo_1.png");
        assert_eq!(sanitize_filename(""), "upload");
    }

    #[test]
    fn filename_carries_timestamp_prefix() {
        let now = datetime!(2026-03-01 09:05:07 UTC);
        assert_eq!(
            timestamped_filename("me.png", now),
            "20260301_090507_me.png"
        );
    }
}
