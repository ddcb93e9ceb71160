use std::collections::BTreeMap;

use crate::domain::Headers;

/// Headers ZeptoMail either generates itself or derives from the payload
/// fields. Lowercase; compared case-insensitively.
const BYPASSED_HEADERS: [&str; 20] = [
    "date",
    "x-csa-complaints",
    "message-id",
    "domainkey-status",
    "received-spf",
    "authentication-results",
    "received",
    "from",
    "sender",
    "subject",
    "to",
    "cc",
    "bcc",
    "reply-to",
    "return-path",
    "delivered-to",
    "dkim-signature",
    "list-id",
    "user-agent",
    "x-mailer",
];

pub fn is_bypassed(name: &str) -> bool {
    BYPASSED_HEADERS.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Every header that is not bypassed, keyed by its declared name.
/// When two headers share a name the last one wins.
pub fn custom_headers(headers: &Headers) -> BTreeMap<String, String> {
    headers
        .iter()
        .filter(|h| !is_bypassed(h.name()))
        .map(|h| (h.name().to_owned(), h.body().to_owned()))
        .collect()
}
