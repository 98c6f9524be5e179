// Network identifier predicates: email, URL, IP, domain names

use once_cell::sync::Lazy;
use regex::Regex;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$").unwrap()
});

static URL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^https?://[^\s/$.?#].[^\s]*$").unwrap());

/// Email address shape.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}

/// An absolute http or https URL.
pub fn is_url(value: &str) -> bool {
    URL_REGEX.is_match(value)
}

/// An IPv4 or IPv6 address.
pub fn is_ip(value: &str) -> bool {
    value.parse::<IpAddr>().is_ok()
}

/// Dotted-quad IPv4.
pub fn is_ipv4(value: &str) -> bool {
    value.parse::<Ipv4Addr>().is_ok()
}

/// IPv6, including the compressed forms.
pub fn is_ipv6(value: &str) -> bool {
    value.parse::<Ipv6Addr>().is_ok()
}

/// Options for [`fqdn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FqdnOptions {
    /// Require at least two labels with an alphabetic final label.
    pub require_tld: bool,
    /// Permit `_` inside labels.
    pub allow_underscores: bool,
    /// Permit one trailing dot, as in DNS zone files.
    pub allow_trailing_dot: bool,
}

impl Default for FqdnOptions {
    fn default() -> Self {
        Self {
            require_tld: true,
            allow_underscores: false,
            allow_trailing_dot: false,
        }
    }
}

/// Fully-qualified domain name with the default options.
pub fn is_fqdn(value: &str) -> bool {
    fqdn(FqdnOptions::default())(value)
}

/// Fully-qualified domain name check parameterized by [`FqdnOptions`].
pub fn fqdn(options: FqdnOptions) -> impl Fn(&str) -> bool + Send + Sync {
    move |value: &str| {
        let mut value = value;
        if options.allow_trailing_dot {
            value = value.strip_suffix('.').unwrap_or(value);
        }
        if value.is_empty() || value.len() > 253 {
            return false;
        }
        let labels: Vec<&str> = value.split('.').collect();
        if options.require_tld {
            if labels.len() < 2 {
                return false;
            }
            match labels.last() {
                Some(tld) if tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()) => {}
                _ => return false,
            }
        }
        labels.iter().all(|label| {
            !label.is_empty()
                && label.len() <= 63
                && !label.starts_with('-')
                && !label.ends_with('-')
                && label.chars().all(|c| {
                    c.is_ascii_alphanumeric()
                        || c == '-'
                        || (options.allow_underscores && c == '_')
                })
        })
    }
}
