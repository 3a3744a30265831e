use super::*;
use crate::net::types::{BillOfMaterials, Endpoint, RepairInstructions};

fn labels(model: &PanelModel) -> Vec<&'static str> {
    model.fields.iter().map(|f| f.label).collect()
}

fn value<'a>(model: &'a PanelModel, label: &str) -> Option<&'a str> {
    model.fields.iter().find(|f| f.label == label).map(|f| f.value.as_str())
}

fn text(s: &str) -> Option<String> {
    Some(s.to_owned())
}

// =============================================================
// ProductInfo
// =============================================================

#[test]
fn product_info_missing_required_fields_show_placeholder() {
    let model = panel_model(&DetailResponse::ProductInfo(ProductInfo::default()));
    assert_eq!(model.title, "Product Info");
    assert_eq!(value(&model, "Name"), Some(MISSING));
    assert_eq!(value(&model, "Category"), Some(MISSING));
    assert_eq!(value(&model, "Description"), Some(MISSING));
}

#[test]
fn product_info_omits_absent_optional_fields() {
    let info = ProductInfo { name: text("TALON"), ..ProductInfo::default() };
    let model = panel_model(&DetailResponse::ProductInfo(info));
    assert_eq!(labels(&model), ["ID", "Name", "Category", "Description", "License", "License Details"]);
    assert!(model.lists.is_empty());
}

#[test]
fn product_info_includes_optional_fields_when_present() {
    let info = ProductInfo {
        name: text("KUKA KR AGILUS"),
        category: text("Industrial Robots"),
        description: text("Compact"),
        payload: text("10 kg"),
        reach_range: text("1100 mm"),
        applications: vec!["Assembly".to_owned()],
        ..ProductInfo::default()
    };
    let model = panel_model(&DetailResponse::ProductInfo(info));
    assert_eq!(value(&model, "Name"), Some("KUKA KR AGILUS"));
    assert_eq!(value(&model, "Payload"), Some("10 kg"));
    assert_eq!(value(&model, "Reach Range"), Some("1100 mm"));
    assert_eq!(
        model.lists,
        vec![PanelList { heading: "Applications", ordered: false, items: vec!["Assembly".to_owned()] }]
    );
}

#[test]
fn blank_values_count_as_missing() {
    let info = ProductInfo { name: text("  "), payload: text(""), ..ProductInfo::default() };
    let model = panel_model(&DetailResponse::ProductInfo(info));
    assert_eq!(value(&model, "Name"), Some(MISSING));
    assert_eq!(value(&model, "Payload"), None);
}

// =============================================================
// List variants
// =============================================================

#[test]
fn repair_instructions_render_as_ordered_list() {
    let repair = RepairInstructions { instructions: vec!["Power off".to_owned(), "Replace fuse".to_owned()] };
    let model = panel_model(&DetailResponse::RepairInstructions(repair));
    assert_eq!(model.title, "Repair Instructions");
    assert!(model.fields.is_empty());
    assert_eq!(model.lists.len(), 1);
    assert!(model.lists[0].ordered);
    assert_eq!(model.lists[0].items, ["Power off", "Replace fuse"]);
}

#[test]
fn empty_bill_of_materials_has_no_list() {
    let model = panel_model(&DetailResponse::BillOfMaterials(BillOfMaterials::default()));
    assert!(model.lists.is_empty());
    assert!(model.is_empty());
}

#[test]
fn safety_info_skips_empty_list() {
    let safety = SafetyInfo { safety_features: vec![], safety_instructions: vec!["Keep clear".to_owned()] };
    let model = panel_model(&DetailResponse::SafetyInfo(safety));
    assert_eq!(model.lists.len(), 1);
    assert_eq!(model.lists[0].heading, "Safety Instructions");
}

// =============================================================
// Record variants
// =============================================================

#[test]
fn cad_model_shows_every_field_with_placeholders() {
    let cad = CadModel { part_number: text("KR-6"), ..CadModel::default() };
    let model = panel_model(&DetailResponse::CadModel(cad));
    assert_eq!(model.title, Endpoint::CadModel.label());
    assert_eq!(model.fields.len(), 11);
    assert_eq!(value(&model, "Part Number"), Some("KR-6"));
    assert_eq!(value(&model, "File Format"), Some(MISSING));
}

#[test]
fn license_info_shows_five_fields() {
    let license = LicenseInfo { license: text("Commercial"), ..LicenseInfo::default() };
    let model = panel_model(&DetailResponse::LicenseInfo(license));
    assert_eq!(labels(&model), ["ID", "Name", "Category", "License", "License Details"]);
    assert_eq!(value(&model, "License"), Some("Commercial"));
    assert_eq!(value(&model, "License Details"), Some(MISSING));
}
