//! Email address utilities

/// Mask an email address for display in logs (e.g., j***@example.com)
///
/// Keeps the first character of the local part and the whole domain so
/// operators can still correlate requests without the full address.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first: String = local.chars().take(1).collect();
            format!("{}***@{}", first, domain)
        }
        Some((_, domain)) => format!("***@{}", domain),
        None if email.is_empty() => String::from("<empty>"),
        None => String::from("***"),
    }
}
