use crate::{ApiError, parse_create_project};

#[test]
fn given_validation_failure_when_converted_then_status_is_400() {
    let error = parse_create_project(b"{}").unwrap_err();

    assert!(matches!(error, ApiError::Validation { .. }));
    assert_eq!(error.status_code(), 400);
}

#[test]
fn given_malformed_json_when_parsed_then_bad_request() {
    let error = parse_create_project(b"{not json").unwrap_err();

    assert!(matches!(error, ApiError::BadRequest { .. }));
    assert_eq!(error.status_code(), 400);
}

#[test]
fn given_validation_failure_when_serialized_then_body_lists_fields() {
    let error = parse_create_project(b"{\"storePrivateKey\": \"yes\"}").unwrap_err();

    let response = serde_json::to_value(error.into_response()).unwrap();

    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    let fields = response["error"]["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["path"], "name");
    assert_eq!(fields[0]["constraint"], "required");
    assert_eq!(fields[0]["message"], "name is required");
    assert_eq!(fields[1]["path"], "storePrivateKey");
    assert_eq!(fields[1]["constraint"], "isBoolean");
    assert_eq!(fields[1]["message"], "storePrivateKey must be a boolean value");
}

#[test]
fn given_empty_name_when_serialized_then_constraint_code_is_is_not_empty() {
    let error =
        parse_create_project(b"{\"name\": \"   \", \"storePrivateKey\": true}").unwrap_err();

    let response = serde_json::to_value(error.into_response()).unwrap();

    let fields = response["error"]["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields[0]["path"], "name");
    assert_eq!(fields[0]["constraint"], "isNotEmpty");
    assert_eq!(fields[0]["message"], "name should not be empty");
}

#[test]
fn given_bad_request_when_serialized_then_fields_are_omitted() {
    let error = parse_create_project(b"[[[").unwrap_err();

    let response = serde_json::to_value(error.into_response()).unwrap();

    assert_eq!(response["error"]["code"], "BAD_REQUEST");
    assert_eq!(response["error"].get("fields"), None);
}

#[test]
fn given_non_object_body_when_parsed_then_root_error() {
    let error = parse_create_project(b"\"just a string\"").unwrap_err();

    let ApiError::Validation { errors, .. } = error else {
        panic!("expected a validation error");
    };
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.iter().next().unwrap().path, "");
    assert_eq!(
        errors.iter().next().unwrap().message,
        "request body must be an object"
    );
}
