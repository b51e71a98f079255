//! Canonical label-key property tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use telemap_core::series::key::SeriesKey;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn supply_order_never_matters() {
    let declared = names(&["service", "node", "version"]);

    let a = SeriesKey::resolve(
        &declared,
        &[("service", "api"), ("node", "n1"), ("version", "2")],
    );
    let b = SeriesKey::resolve(
        &declared,
        &[("version", "2"), ("service", "api"), ("node", "n1")],
    );
    let c = SeriesKey::resolve(
        &declared,
        &[("node", "n1"), ("version", "2"), ("service", "api")],
    );

    assert_eq!(a, b);
    assert_eq!(b, c);
}

#[test]
fn differing_values_differ() {
    let declared = names(&["service", "node"]);
    let a = SeriesKey::resolve(&declared, &[("service", "api"), ("node", "n1")]);
    let b = SeriesKey::resolve(&declared, &[("service", "api"), ("node", "n2")]);
    assert_ne!(a, b);
}

#[test]
fn undeclared_labels_are_ignored() {
    let declared = names(&["service"]);
    let a = SeriesKey::resolve(&declared, &[("service", "api")]);
    let b = SeriesKey::resolve(&declared, &[("service", "api"), ("extra", "x")]);
    assert_eq!(a, b);
}

#[test]
fn omitted_is_not_empty_string() {
    let declared = names(&["service", "node"]);
    let omitted = SeriesKey::resolve(&declared, &[("service", "api")]);
    let empty = SeriesKey::resolve(&declared, &[("service", "api"), ("node", "")]);
    assert_ne!(omitted, empty);
}

#[test]
fn repeated_name_keeps_last_occurrence() {
    let declared = names(&["service"]);
    let dup = SeriesKey::resolve(&declared, &[("service", "api"), ("service", "worker")]);
    let last = SeriesKey::resolve(&declared, &[("service", "worker")]);
    assert_eq!(dup, last);
}

#[test]
fn separator_values_cannot_forge_boundaries() {
    let declared = names(&["a", "b"]);

    let k1 = SeriesKey::resolve(&declared, &[("a", "x|"), ("b", "y")]);
    let k2 = SeriesKey::resolve(&declared, &[("a", "x"), ("b", "|y")]);
    assert_ne!(k1, k2);

    let k3 = SeriesKey::resolve(&declared, &[("a", "x\\"), ("b", "y")]);
    let k4 = SeriesKey::resolve(&declared, &[("a", "x"), ("b", "\\y")]);
    assert_ne!(k3, k4);
}
