use roster_core::{
    init_logging, CountryAddRequest, PersonAddRequest, PersonService, PersonUpdateRequest,
    ServiceError,
};
use std::path::Path;
use uuid::Uuid;

fn read_logs(dir: &Path) -> String {
    log::logger().flush();
    std::fs::read_dir(dir)
        .expect("log dir should be readable")
        .filter_map(Result::ok)
        .filter(|entry| entry.path().is_file())
        .map(|entry| std::fs::read_to_string(entry.path()).unwrap_or_default())
        .collect()
}

#[test]
fn failed_writes_log_error_codes_without_record_contents() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    init_logging("debug", dir.path().to_str().expect("temp dir should be UTF-8"))
        .expect("logging should start");

    let persons = PersonService::in_memory_with_countries();
    persons
        .countries()
        .add(Some(CountryAddRequest::new("Atlantis")))
        .unwrap();
    let duplicate = persons
        .countries()
        .add(Some(CountryAddRequest::new("Atlantis")))
        .unwrap_err();
    assert!(matches!(duplicate, ServiceError::InvalidArgument(_)));

    let invalid_email = persons
        .add(Some(PersonAddRequest {
            name: Some("Zebulon".to_string()),
            email: Some("zebulon-at-nowhere".to_string()),
            ..PersonAddRequest::default()
        }))
        .unwrap_err();
    assert_eq!(invalid_email.code(), "invalid_email");

    let unknown = PersonUpdateRequest {
        name: Some("Quintessa".to_string()),
        email: Some("quintessa@example.com".to_string()),
        ..PersonUpdateRequest::new(Uuid::new_v4())
    };
    persons.update(Some(unknown)).unwrap_err();

    let logs = read_logs(dir.path());
    assert!(logs.contains("event=country_add module=service status=error error_code=duplicate_key"));
    assert!(logs.contains("rule=invalid_email"));
    assert!(logs.contains("event=person_update module=service status=error error_code=not_found"));
    for content in ["Atlantis", "Zebulon", "zebulon-at-nowhere", "Quintessa", "quintessa@"] {
        assert!(!logs.contains(content), "log leaked `{content}`");
    }
}
