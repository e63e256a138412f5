//! Tests for port-role inference from network-file headers.

use rfcatalog::network::ports::{infer_divider_roles, infer_roles, PortRole};
use rfcatalog::products::{balun, coupler};
use rfcatalog::CatalogError;

#[test]
fn coupler_roles_follow_header_order() {
    let header = "! Directional Coupler\n! Port 1 Input\n! Port 2 Output\n! Port 3 Coupled";
    let map = infer_roles("C10-0218", header, &coupler::LAYOUT).unwrap();

    assert_eq!(map.get(PortRole::Input), Some(1));
    assert_eq!(map.get(PortRole::Output), Some(2));
    assert_eq!(map.get(PortRole::Coupled), Some(3));
}

#[test]
fn keyword_matching_is_case_insensitive() {
    let header = "! Coupler\n! PORT 3 COUPLED\n! port 1 INPUT\n! Port 2 OutPut";
    let map = infer_roles("C20-0218", header, &coupler::LAYOUT).unwrap();

    assert_eq!(map.get(PortRole::Coupled), Some(3));
    // "3" precedes "input" in the joined lines and wins on priority
    assert_eq!(map.get(PortRole::Input), Some(3));
}

#[test]
fn balun_with_zero_degree_output_listed_first() {
    let header = "! Balun\n! Port 1 Output 0\n! Port 2 Output 180\n! Port 3 Common";
    let map = infer_roles("BAL-0006", header, &balun::LAYOUT).unwrap();

    assert_eq!(map.get(PortRole::Common), Some(3));
    assert_eq!(map.get(PortRole::Output0), Some(1));
    assert_eq!(map.get(PortRole::Output180), Some(2));
}

#[test]
fn zero_keyword_matches_inside_180() {
    let header = "! Balun\n! Port 2 Output 180\n! Port 1 Output 0\n! Port 3 Common";
    let map = infer_roles("BAL-0026", header, &balun::LAYOUT).unwrap();

    assert_eq!(map.get(PortRole::Output180), Some(2));
    assert_eq!(map.get(PortRole::Output0), Some(2));
}

#[test]
fn marker_is_case_sensitive() {
    let header = "! balun\n! Port 1 Output 0\n! Port 3 Common";
    let err = infer_roles("BAL-0006", header, &balun::LAYOUT).unwrap_err();

    assert!(matches!(
        err,
        CatalogError::UnexpectedComponentType { expected: "Balun", .. }
    ));
}

#[test]
fn role_without_digit_stays_unresolved() {
    let header = "! Coupler\n! input output coupled";
    let map = infer_roles("C10-0218", header, &coupler::LAYOUT).unwrap();

    assert_eq!(map.get(PortRole::Input), None);
    let err = map.port(PortRole::Input).unwrap_err();
    assert!(matches!(
        err,
        CatalogError::UnresolvedPortRole { role: PortRole::Input, .. }
    ));
}

#[test]
fn divider_common_port_selects_outputs() {
    for (config, expected) in [
        ("Port 3 Common", (3, 1, 2)),
        ("Port 2 Common", (2, 1, 3)),
        ("Port 1 Common", (1, 2, 3)),
    ] {
        let header = format!("! Power Divider\n! Port Configuration\t{config}");
        let map = infer_divider_roles("PD-0020", &header).unwrap();
        assert_eq!(
            (
                map.port(PortRole::Common).unwrap(),
                map.port(PortRole::Output1).unwrap(),
                map.port(PortRole::Output2).unwrap()
            ),
            expected,
            "{config}"
        );
    }
}

#[test]
fn divider_uses_last_configuration_line() {
    let header = "! Power Divider\n! Port Configuration\tPort 1 Common\n! Port Configuration\tPort 3 Common";
    let map = infer_divider_roles("PD-0020", header).unwrap();
    assert_eq!(map.get(PortRole::Common), Some(3));
}

#[test]
fn divider_without_configuration_line_fails() {
    let err = infer_divider_roles("PD-0020", "! Power Divider\n! Port 3 Common").unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure { .. }));

    let err = infer_divider_roles("PD-0020", "! Power Divider\n! Port Configuration Port 3 Common").unwrap_err();
    assert!(matches!(err, CatalogError::ParseFailure { .. }));
}

#[test]
fn divider_requires_marker() {
    let err = infer_divider_roles("PD-0020", "! Coupler\n! Port Configuration\tPort 3 Common").unwrap_err();
    assert!(matches!(err, CatalogError::UnexpectedComponentType { .. }));
}

#[test]
fn divider_without_common_digit_leaves_roles_unresolved() {
    let map = infer_divider_roles("PD-0020", "! Power Divider\n! Port Configuration\tcommon").unwrap();
    assert_eq!(map.get(PortRole::Common), None);
    assert_eq!(map.get(PortRole::Output1), None);
}

#[test]
fn sentence_style_header_resolves_by_preceding_digits() {
    // the port number follows the role here, so each role picks up the
    // digits of the lines before it
    let header = "! Balun\n! Output 0 is on Port 1\n! Common is on Port 3\n! Output 180 is on Port 2";
    let map = infer_roles("BAL-0006", header, &balun::LAYOUT).unwrap();

    assert_eq!(map.get(PortRole::Common), Some(1));
    assert_eq!(map.get(PortRole::Output180), Some(3));
    assert_eq!(map.get(PortRole::Output0), None);
}
