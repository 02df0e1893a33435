//! Unit tests for the error type

use axh_domain::Error;
use std::error::Error as _;
use std::io;

#[test]
fn test_error_constructors_display() {
    assert_eq!(
        Error::configuration("bad value").to_string(),
        "Configuration error: bad value"
    );
    assert_eq!(
        Error::invalid_argument("unsupported token 'abc'").to_string(),
        "Invalid argument: unsupported token 'abc'"
    );
}

#[test]
fn test_constructors_keep_the_source() {
    let err = Error::infrastructure_with_source(
        "Redis GET failed",
        io::Error::new(io::ErrorKind::ConnectionReset, "reset"),
    );
    assert_eq!(err.to_string(), "Infrastructure error: Redis GET failed");
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("reset"));

    let err = Error::configuration_with_source("bad file", io::Error::other("eof"));
    assert!(matches!(err, Error::Configuration { source: Some(_), .. }));

    assert!(Error::configuration("plain").source().is_none());
}

#[test]
fn test_network_error_with_source() {
    let err = Error::network_with_source("Failed to build HTTP client", io::Error::other("tls"));
    assert!(matches!(err, Error::Network { .. }));
    assert_eq!(err.source().map(ToString::to_string).as_deref(), Some("tls"));
}
