/// Coerce a free-form phone number into the international `62…` form the
/// relay expects. Best effort: unrecognized prefixes pass through
/// unchanged and nothing here ever fails.
pub fn normalize_phone(raw: &str) -> String {
    let phone: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if phone.is_empty() {
        return phone;
    }

    if let Some(rest) = phone.strip_prefix("+62") {
        format!("62{rest}")
    } else if phone.starts_with("62") {
        phone
    } else if let Some(rest) = phone.strip_prefix('0') {
        format!("62{rest}")
    } else if phone.starts_with('8') {
        format!("62{phone}")
    } else {
        phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_conventions_map_to_dialing_code() {
        assert_eq!(normalize_phone("081234567"), "6281234567");
        assert_eq!(normalize_phone("+6281234567"), "6281234567");
        assert_eq!(normalize_phone("81234567"), "6281234567");
        assert_eq!(normalize_phone("6281234567"), "6281234567");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_phone("0812-345-67");
        assert_eq!(once, "6281234567");
        assert_eq!(normalize_phone(&once), once);
    }

    #[test]
    fn whitespace_and_hyphens_are_stripped_first() {
        assert_eq!(normalize_phone(" 0812 - 345 - 67 "), "6281234567");
        assert_eq!(normalize_phone("\t+62 812 34567\n"), "6281234567");
    }

    #[test]
    fn unrecognized_prefixes_pass_through() {
        assert_eq!(normalize_phone("1234"), "1234");
        assert_eq!(normalize_phone("+14155550100"), "+14155550100");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_phone(""), "");
        assert_eq!(normalize_phone("  "), "");
    }
}
