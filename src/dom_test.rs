use super::*;

// =============================================================
// Ready state
// =============================================================

#[test]
fn loading_document_defers_mount() {
    assert!(still_parsing("loading"));
}

#[test]
fn parsed_document_mounts_immediately() {
    assert!(!still_parsing("interactive"));
    assert!(!still_parsing("complete"));
}
