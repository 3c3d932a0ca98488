//! Unit tests for the credential record

use crate::domain::entities::Credential;
use crate::domain::value_objects::SubjectId;

#[test]
fn test_replace_hash_supersedes() {
    let subject = SubjectId::generate();
    let mut credential = Credential::new(subject.clone(), "first".to_string());
    let created = credential.updated_at;

    credential.replace_hash("second".to_string());

    assert_eq!(credential.subject_id, subject);
    assert_eq!(credential.refresh_hash, "second");
    assert!(credential.updated_at >= created);
}
