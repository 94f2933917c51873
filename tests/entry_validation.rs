//! Entry construction: hostname and address validation, identity.

use hostess::{Entry, Family, HostsError};

#[test]
fn valid_entries_build() {
    let e = Entry::new("api.example.test", "10.0.0.1").unwrap();
    assert!(e.enabled);
    assert_eq!(e.family(), Family::V4);

    let e = Entry::new("localhost", "::1").unwrap();
    assert_eq!(e.family(), Family::V6);

    Entry::new("my_host.lan", "192.168.1.10").unwrap();
}

#[test]
fn invalid_hostname_fails() {
    for bad in ["", "..", "bad..domain", "-lead.test", "trail-.test", "sp ace", "bang!", ".dot"] {
        let err = Entry::new(bad, "127.0.0.1").unwrap_err();
        assert!(
            matches!(err, HostsError::InvalidHostname { .. }),
            "{bad:?} gave {err:?}"
        );
    }
}

#[test]
fn overlong_hostname_fails() {
    let label = "a".repeat(64);
    assert!(matches!(
        Entry::new(&label, "127.0.0.1"),
        Err(HostsError::InvalidHostname { .. })
    ));
    let long = vec!["abc"; 70].join(".");
    assert!(matches!(
        Entry::new(&long, "127.0.0.1"),
        Err(HostsError::InvalidHostname { .. })
    ));
}

#[test]
fn invalid_address_fails() {
    for bad in ["", "localhost", "999.1.1.1", "1.2.3", "fe80::1%lo0", "::g"] {
        let err = Entry::new("foo.test", bad).unwrap_err();
        assert!(matches!(err, HostsError::InvalidAddress(_)), "{bad:?} gave {err:?}");
    }
}

#[test]
fn identity_is_lowercased_hostname_and_family() {
    let a = Entry::new("Foo.Test", "1.2.3.4").unwrap();
    let b = Entry::new("foo.test", "5.6.7.8").unwrap();
    let c = Entry::new("foo.test", "::1").unwrap();
    assert_eq!(a.key(), b.key());
    assert_ne!(a.key(), c.key());
    assert_eq!(a.hostname, "Foo.Test");
    assert!(a.matches("FOO.TEST"));
}

#[test]
fn display_shows_state() {
    let e = Entry::new("foo.test", "1.2.3.4").unwrap();
    assert_eq!(e.to_string(), "foo.test -> 1.2.3.4 (On)");
    assert_eq!(e.with_enabled(false).to_string(), "foo.test -> 1.2.3.4 (Off)");
}

#[test]
fn display_width_pads_hostname() {
    let e = Entry::new("a.test", "10.0.0.1").unwrap();
    assert_eq!(format!("{e:9}"), "a.test    -> 10.0.0.1 (On)");
}
