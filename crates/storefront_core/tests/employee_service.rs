use storefront_core::{
    EmployeeCreateRequest, EmployeeRepository, EmployeeResponse, EmployeeService,
    EmployeeUpdateRequest, InMemoryEmployeeRepository, ServiceError, Validator,
};

fn service() -> EmployeeService<InMemoryEmployeeRepository> {
    EmployeeService::new(InMemoryEmployeeRepository::new(), Validator::default())
}

fn john() -> EmployeeCreateRequest {
    EmployeeCreateRequest {
        name: "John Doe".to_string(),
        role: "Developer".to_string(),
        email: "john@example.com".to_string(),
        phone: "1234567890".to_string(),
        date_hired: "2025-01-01".to_string(),
    }
}

#[test]
fn create_returns_request_fields_with_assigned_id() {
    let service = service();

    let response = service.create(john()).unwrap();
    assert_eq!(
        response,
        EmployeeResponse {
            employee_id: "1".to_string(),
            name: "John Doe".to_string(),
            role: "Developer".to_string(),
            email: "john@example.com".to_string(),
            phone: "1234567890".to_string(),
            date_hired: "2025-01-01".to_string(),
        }
    );
}

#[test]
fn create_rejects_invalid_requests_without_touching_the_store() {
    let cases = [
        ("empty name", EmployeeCreateRequest { name: String::new(), ..john() }, "name"),
        ("blank role", EmployeeCreateRequest { role: "   ".to_string(), ..john() }, "role"),
        ("bad email", EmployeeCreateRequest { email: "john.example.com".to_string(), ..john() }, "email"),
        ("bad date", EmployeeCreateRequest { date_hired: "2025-02-30".to_string(), ..john() }, "date_hired"),
        ("long phone", EmployeeCreateRequest { phone: "1".repeat(21), ..john() }, "phone"),
    ];

    for (name, request, field) in cases {
        let service = service();
        let err = service.create(request).unwrap_err();
        match err {
            ServiceError::Validation(validation) => {
                assert!(validation.has_field(field), "{name}: {validation}")
            }
            other => panic!("{name}: unexpected error {other}"),
        }
        assert_eq!(service.repository().save_calls(), 0, "{name}");
    }
}

#[test]
fn create_passes_store_failures_through() {
    let service = service();
    service.repository().fail_with("database error");

    let err = service.create(john()).unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));
    assert_eq!(err.to_string(), "database error");
}

#[test]
fn find_by_id_round_trips_created_employee() {
    let service = service();
    let created = service.create(john()).unwrap();

    let found = service.find_by_id(&created.employee_id).unwrap();
    assert_eq!(found, created);
}

#[test]
fn find_by_id_unknown_or_malformed_id_is_not_found() {
    let service = service();

    for id in ["99", "abc", ""] {
        let err = service.find_by_id(id).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)), "id {id:?}: {err}");
    }
}

#[test]
fn update_replaces_record() {
    let service = service();
    let created = service.create(john()).unwrap();

    let updated = service
        .update(EmployeeUpdateRequest {
            employee_id: created.employee_id.clone(),
            name: "John Doe".to_string(),
            role: "Lead".to_string(),
            email: String::new(),
            phone: String::new(),
            date_hired: String::new(),
        })
        .unwrap();

    assert_eq!(updated.role, "Lead");
    assert_eq!(updated.email, "");
    assert_eq!(service.find_by_id(&created.employee_id).unwrap(), updated);
}

#[test]
fn update_missing_employee_is_not_found() {
    let service = service();

    let err = service
        .update(EmployeeUpdateRequest {
            employee_id: "7".to_string(),
            name: "Nobody".to_string(),
            role: "None".to_string(),
            ..EmployeeUpdateRequest::default()
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(ref message) if message == "employee not found: 7"));
}

#[test]
fn update_requires_identifier() {
    let service = service();

    let err = service
        .update(EmployeeUpdateRequest {
            name: "John".to_string(),
            role: "Dev".to_string(),
            ..EmployeeUpdateRequest::default()
        })
        .unwrap_err();
    assert!(matches!(err, ServiceError::Validation(ref v) if v.has_field("employee_id")));
    assert_eq!(service.repository().save_calls(), 0);
}

#[test]
fn delete_is_idempotent() {
    let service = service();
    let created = service.create(john()).unwrap();

    service.delete(&created.employee_id).unwrap();
    service.delete(&created.employee_id).unwrap();
    service.delete("not-an-id").unwrap();

    assert!(service.repository().find_all().unwrap().is_empty());
}

#[test]
fn find_all_on_empty_store_is_empty() {
    assert!(service().find_all().unwrap().is_empty());
}

#[test]
fn declared_text_limits_are_inclusive() {
    let cases: [(&str, usize, fn(&mut EmployeeCreateRequest, String)); 3] = [
        ("name", 100, |request, text| request.name = text),
        ("role", 100, |request, text| request.role = text),
        ("phone", 20, |request, text| request.phone = text),
    ];

    for (field, limit, set) in cases {
        let service = service();

        let mut at_limit = john();
        set(&mut at_limit, "a".repeat(limit));
        service.create(at_limit).unwrap();

        let mut over_limit = john();
        set(&mut over_limit, "a".repeat(limit + 1));
        match service.create(over_limit).unwrap_err() {
            ServiceError::Validation(err) => assert!(err.has_field(field), "{field}: {err}"),
            other => panic!("{field}: expected validation error, got {other}"),
        }
        assert_eq!(service.repository().save_calls(), 1);
    }
}
