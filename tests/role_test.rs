//! Tests for the closed role set and the wire codes of the status and
//! priority enums.

use campuspulse::insight::PriorityLevel;
use campuspulse::models::demand::DemandStatus;
use campuspulse::models::role::UserRole;

#[test]
fn test_role_code_roundtrip() {
    for role in UserRole::ALL {
        assert_eq!(UserRole::from_code(role.code()), Some(role));
    }
}

#[test]
fn test_unknown_role_code_rejected() {
    assert_eq!(UserRole::from_code("ADMIN"), None);
    assert_eq!(UserRole::from_code("student"), None);
    assert_eq!(UserRole::from_code(""), None);
}

#[test]
fn test_role_portal_labels() {
    assert_eq!(UserRole::Student.label(), "Student Representative");
    assert_eq!(UserRole::Authority.label(), "Campus Authority");
    assert_eq!(UserRole::Partner.label(), "Campus Partner");
}

#[test]
fn test_status_wire_codes() {
    let codes: Vec<String> = [
        DemandStatus::Pending,
        DemandStatus::InReview,
        DemandStatus::PartnerAssigned,
        DemandStatus::Completed,
    ]
    .iter()
    .map(|s| serde_json::to_string(s).unwrap())
    .collect();

    assert_eq!(
        codes,
        vec![
            "\"PENDING\"",
            "\"IN_REVIEW\"",
            "\"PARTNER_ASSIGNED\"",
            "\"COMPLETED\""
        ]
    );
}

#[test]
fn test_priority_wire_codes() {
    assert_eq!(serde_json::to_string(&PriorityLevel::Critical).unwrap(), "\"CRITICAL\"");
    assert_eq!(
        serde_json::from_str::<PriorityLevel>("\"MEDIUM\"").unwrap(),
        PriorityLevel::Medium
    );
}
