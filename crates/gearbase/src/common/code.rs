//! Sticker code helpers: syntactic validation and QR redirect URLs.

/// Length of a sticker code.
const CODE_LEN: usize = 8;

/// Fixed redirect prefix embedded in printed QR stickers.
pub const SCANNER_URL_PREFIX: &str = "http://gearbase.app/qr/";

/// Chart service that renders QR images.
const CHART_URL: &str = "https://chart.googleapis.com/chart";

/// Checks if a code is syntactically valid: exactly 8 case-insensitive
/// alphanumeric characters after trimming. This does not mean it is an
/// officially issued code.
#[must_use]
pub fn is_code_valid(code: &str) -> bool {
    let code = code.trim();

    code.len() == CODE_LEN && code.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Redirect URL for a sticker code, `""` when the code is invalid.
#[must_use]
pub fn redirect_url(code: &str) -> String {
    if is_code_valid(code) {
        format!("{SCANNER_URL_PREFIX}{}", code.trim())
    } else {
        String::new()
    }
}

/// Chart-service URL that renders the redirect URL as a `size`x`size` QR
/// image, `""` when the code is invalid.
#[must_use]
pub fn redirect_url_qr(code: &str, size: u32) -> String {
    if is_code_valid(code) {
        // valid codes are ASCII alphanumeric, so the embedded URL needs no
        // percent-escaping
        let url = redirect_url(code);

        format!("{CHART_URL}?chs={size}x{size}&cht=qr&choe=UTF-8&chld=L|0&chl={url}")
    } else {
        String::new()
    }
}

/// True iff the input came off a scanner redirect: its head must match the
/// fixed prefix anchored at position 0, not merely contain it.
#[must_use]
pub fn is_code_from_scanner(url_part: &str) -> bool {
    let head: String = url_part.chars().take(SCANNER_URL_PREFIX.len()).collect();

    !head.is_empty() && SCANNER_URL_PREFIX.starts_with(&head)
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes_are_eight_alphanumerics_case_insensitive() {
        assert!(is_code_valid("c4ab3a6a"));
        assert!(is_code_valid("C4AB3A6A"));
        assert!(is_code_valid("  c4ab3a6a  "));
    }

    #[test]
    fn invalid_codes_are_rejected() {
        assert!(!is_code_valid("short"));
        assert!(!is_code_valid("toolongcode123"));
        assert!(!is_code_valid("has spaces "));
        assert!(!is_code_valid("c4ab3a6!"));
        assert!(!is_code_valid(""));
    }

    #[test]
    fn redirect_url_embeds_the_trimmed_code() {
        assert_eq!(
            redirect_url(" c4ab3a6a "),
            "http://gearbase.app/qr/c4ab3a6a"
        );
        assert_eq!(redirect_url("nope"), "");
    }

    #[test]
    fn qr_url_carries_size_and_redirect() {
        let url = redirect_url_qr("c4ab3a6a", 200);

        assert_eq!(
            url,
            "https://chart.googleapis.com/chart?chs=200x200&cht=qr&choe=UTF-8&chld=L|0\
             &chl=http://gearbase.app/qr/c4ab3a6a"
        );
        assert_eq!(redirect_url_qr("bogus", 200), "");
    }

    #[test]
    fn scanner_check_is_anchored_at_position_zero() {
        assert!(is_code_from_scanner("http://gearbase.app/qr/c4ab3a6a"));
        // partial head still matches the prefix from position 0
        assert!(is_code_from_scanner("http://gearbase.app/"));
        // same text not at position 0 does not count
        assert!(!is_code_from_scanner("see http://gearbase.app/qr/c4ab3a6a"));
        assert!(!is_code_from_scanner("https://gearbase.app/qr/c4ab3a6a"));
    }
}
