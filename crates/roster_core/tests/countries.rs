use roster_core::{CountryAddRequest, CountryService, ServiceError};
use uuid::Uuid;

#[test]
fn add_missing_request_is_invalid_argument() {
    let service = CountryService::in_memory();

    let err = service.add(None).unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(_)));
    assert!(service.is_empty().unwrap());
}

#[test]
fn add_missing_or_blank_name_is_invalid_argument() {
    let service = CountryService::in_memory();

    for request in [
        CountryAddRequest::default(),
        CountryAddRequest::new(""),
        CountryAddRequest::new("   "),
    ] {
        let err = service.add(Some(request)).unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }
    assert_eq!(service.len().unwrap(), 0);
}

#[test]
fn add_duplicate_name_is_invalid_argument() {
    let service = CountryService::in_memory();
    service.add(Some(CountryAddRequest::new("Spain"))).unwrap();

    let err = service
        .add(Some(CountryAddRequest::new("Spain")))
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidArgument(message) if message.contains("Spain")));
    assert_eq!(service.len().unwrap(), 1);
}

#[test]
fn name_uniqueness_is_case_sensitive() {
    let service = CountryService::in_memory();
    service.add(Some(CountryAddRequest::new("Spain"))).unwrap();
    service.add(Some(CountryAddRequest::new("SPAIN"))).unwrap();

    assert_eq!(service.len().unwrap(), 2);
}

#[test]
fn add_into_empty_directory_then_list_returns_exactly_that_country() {
    let service = CountryService::in_memory();
    assert!(service.get_all().unwrap().is_empty());

    let added = service.add(Some(CountryAddRequest::new("Japan"))).unwrap();
    assert!(!added.id.is_nil());
    assert_eq!(added.name, "Japan");
    assert_eq!(service.get_all().unwrap(), vec![added]);
}

#[test]
fn list_returns_countries_in_insertion_order() {
    let service = CountryService::in_memory();
    let added: Vec<_> = ["USA", "Canada", "Mexico"]
        .into_iter()
        .map(|name| service.add(Some(CountryAddRequest::new(name))).unwrap())
        .collect();

    assert_eq!(service.get_all().unwrap(), added);
}

#[test]
fn get_by_id_returns_none_for_absent_or_unknown_id() {
    let service = CountryService::in_memory();
    service.add(Some(CountryAddRequest::new("Chile"))).unwrap();

    assert_eq!(service.get_by_id(None).unwrap(), None);
    assert_eq!(service.get_by_id(Some(Uuid::new_v4())).unwrap(), None);
}

#[test]
fn get_by_id_returns_matching_view() {
    let service = CountryService::in_memory();
    let added = service.add(Some(CountryAddRequest::new("Peru"))).unwrap();

    let found = service.get_by_id(Some(added.id)).unwrap();
    assert_eq!(found, Some(added));
}
