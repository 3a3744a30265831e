use super::*;
use serde_json::json;

// =============================================================
// Endpoint
// =============================================================

#[test]
fn endpoint_path_segments_match_backend_routes() {
    let segments: Vec<_> = Endpoint::ALL.iter().map(|e| e.as_str()).collect();
    assert_eq!(
        segments,
        ["ProductInfo", "RepairInstructions", "BillOfMaterials", "CADModel", "LicenseInfo", "SafetyInfo"]
    );
}

#[test]
fn endpoint_from_path_round_trips_and_rejects_unknown() {
    for endpoint in Endpoint::ALL {
        assert_eq!(Endpoint::from_path(endpoint.as_str()), Some(endpoint));
    }
    assert_eq!(Endpoint::from_path("productinfo"), None);
    assert_eq!(Endpoint::from_path("Pricing"), None);
}

#[test]
fn endpoint_display_uses_path_segment() {
    assert_eq!(Endpoint::CadModel.to_string(), "CADModel");
    assert_eq!(Endpoint::CadModel.label(), "CAD Model");
}

// =============================================================
// ProductInfo
// =============================================================

#[test]
fn product_info_parses_full_payload() {
    let body = json!({
        "id": 2,
        "name": "KUKA KR AGILUS",
        "category": "Industrial Robots",
        "description": "Compact six-axis robot",
        "payload": "10 kg",
        "reachRange": 1100,
        "applications": ["Assembly", "Packaging"],
        "license": "Commercial",
        "licenseDetails": "Per-unit"
    });
    let DetailResponse::ProductInfo(info) = DetailResponse::parse(Endpoint::ProductInfo, body).unwrap() else {
        panic!("expected product info");
    };
    assert_eq!(info.id.as_deref(), Some("2"));
    assert_eq!(info.reach_range.as_deref(), Some("1100"));
    assert_eq!(info.applications, ["Assembly", "Packaging"]);
    assert_eq!(info.license_details.as_deref(), Some("Per-unit"));
}

#[test]
fn product_info_missing_fields_default_to_none() {
    let parsed = DetailResponse::parse(Endpoint::ProductInfo, json!({ "name": "TALON", "payload": null })).unwrap();
    assert_eq!(
        parsed,
        DetailResponse::ProductInfo(ProductInfo { name: Some("TALON".to_owned()), ..ProductInfo::default() })
    );
}

#[test]
fn product_info_rejects_nested_object_in_text_field() {
    let err = DetailResponse::parse(Endpoint::ProductInfo, json!({ "name": { "first": "x" } }));
    assert!(err.is_err());
}

// =============================================================
// List replies
// =============================================================

#[test]
fn repair_instructions_accept_bare_array() {
    let parsed = DetailResponse::parse(Endpoint::RepairInstructions, json!(["Power off", "Open panel"])).unwrap();
    assert_eq!(
        parsed,
        DetailResponse::RepairInstructions(RepairInstructions {
            instructions: vec!["Power off".to_owned(), "Open panel".to_owned()],
        })
    );
}

#[test]
fn repair_instructions_accept_wrapped_object() {
    let parsed =
        DetailResponse::parse(Endpoint::RepairInstructions, json!({ "instructions": ["Step 1", null, 2] })).unwrap();
    assert_eq!(
        parsed,
        DetailResponse::RepairInstructions(RepairInstructions { instructions: vec!["Step 1".to_owned(), "2".to_owned()] })
    );
}

#[test]
fn bill_of_materials_wrapped_under_alternate_key() {
    let parsed = DetailResponse::parse(Endpoint::BillOfMaterials, json!({ "billOfMaterials": ["Steel"] })).unwrap();
    assert_eq!(parsed, DetailResponse::BillOfMaterials(BillOfMaterials { materials: vec!["Steel".to_owned()] }));
}

#[test]
fn bill_of_materials_object_without_list_is_empty() {
    let parsed = DetailResponse::parse(Endpoint::BillOfMaterials, json!({})).unwrap();
    assert_eq!(parsed, DetailResponse::BillOfMaterials(BillOfMaterials::default()));
}

#[test]
fn list_reply_rejects_scalar_body() {
    assert!(DetailResponse::parse(Endpoint::BillOfMaterials, json!("steel")).is_err());
}

// =============================================================
// CAD / License / Safety
// =============================================================

#[test]
fn cad_model_maps_camel_case_fields() {
    let body = json!({ "partNumber": "KR-6", "fileFormat": "STEP", "modelType": "Assembly", "weight": 54.5 });
    let DetailResponse::CadModel(cad) = DetailResponse::parse(Endpoint::CadModel, body).unwrap() else {
        panic!("expected cad model");
    };
    assert_eq!(cad.part_number.as_deref(), Some("KR-6"));
    assert_eq!(cad.file_format.as_deref(), Some("STEP"));
    assert_eq!(cad.model_type.as_deref(), Some("Assembly"));
    assert_eq!(cad.weight.as_deref(), Some("54.5"));
    assert_eq!(cad.color, None);
}

#[test]
fn license_info_parses() {
    let body = json!({ "id": 3, "license": "MIT", "licenseDetails": "Permissive" });
    let DetailResponse::LicenseInfo(info) = DetailResponse::parse(Endpoint::LicenseInfo, body).unwrap() else {
        panic!("expected license info");
    };
    assert_eq!(info.license.as_deref(), Some("MIT"));
    assert_eq!(info.license_details.as_deref(), Some("Permissive"));
    assert_eq!(info.name, None);
}

#[test]
fn safety_info_null_lists_are_empty() {
    let body = json!({ "safetyFeatures": ["E-stop"], "safetyInstructions": null });
    let parsed = DetailResponse::parse(Endpoint::SafetyInfo, body).unwrap();
    assert_eq!(
        parsed,
        DetailResponse::SafetyInfo(SafetyInfo { safety_features: vec!["E-stop".to_owned()], safety_instructions: vec![] })
    );
}

#[test]
fn response_reports_its_endpoint() {
    for endpoint in Endpoint::ALL {
        let body = match endpoint {
            Endpoint::RepairInstructions | Endpoint::BillOfMaterials => json!([]),
            _ => json!({}),
        };
        assert_eq!(DetailResponse::parse(endpoint, body).unwrap().endpoint(), endpoint);
    }
}
