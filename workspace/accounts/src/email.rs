/// Canonical form of an email address: the domain part (after the last `@`)
/// is lowercased and surrounding whitespace trimmed. The local part is kept
/// as typed since some mail servers treat it as case sensitive.
///
/// Input without an `@` is returned unchanged.
pub fn normalize_email(email: &str) -> String {
    match email.trim().rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_is_lowercased() {
        assert_eq!(normalize_email("a@EXAMPLE.com"), "a@example.com");
        assert_eq!(normalize_email("Ana.Lopez@Mail.Example.COM"), "Ana.Lopez@mail.example.com");
    }

    #[test]
    fn test_local_part_is_preserved() {
        assert_eq!(normalize_email("MixedCase@example.com"), "MixedCase@example.com");
    }

    #[test]
    fn test_only_last_at_splits() {
        assert_eq!(normalize_email("\"odd@local\"@HOST.org"), "\"odd@local\"@host.org");
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(normalize_email("  b@Example.ORG \n"), "b@example.org");
    }

    #[test]
    fn test_without_at_is_unchanged() {
        assert_eq!(normalize_email("NotAnEmail"), "NotAnEmail");
        assert_eq!(normalize_email(""), "");
    }
}
