//! Panel rendering one detail reply.
//!
//! DESIGN
//! ======
//! `panel_model` turns each response variant into labelled rows and lists,
//! one rule per variant. Required scalar fields show `N/A` when missing;
//! optional fields and empty lists are left out entirely.

#[cfg(test)]
#[path = "detail_panel_test.rs"]
mod detail_panel_test;

use leptos::prelude::*;

use crate::net::types::{CadModel, DetailResponse, LicenseInfo, ProductInfo, SafetyInfo};

/// Placeholder for a required field the backend left out.
pub const MISSING: &str = "N/A";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelList {
    pub heading: &'static str,
    pub ordered: bool,
    pub items: Vec<String>,
}

/// Display-ready content of a detail panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PanelModel {
    pub title: &'static str,
    pub fields: Vec<PanelField>,
    pub lists: Vec<PanelList>,
}

impl PanelModel {
    fn new(title: &'static str) -> Self {
        Self { title, fields: Vec::new(), lists: Vec::new() }
    }

    fn required(mut self, label: &'static str, value: Option<&String>) -> Self {
        let value = present(value).unwrap_or(MISSING).to_owned();
        self.fields.push(PanelField { label, value });
        self
    }

    fn optional(mut self, label: &'static str, value: Option<&String>) -> Self {
        if let Some(value) = present(value) {
            self.fields.push(PanelField { label, value: value.to_owned() });
        }
        self
    }

    fn list(mut self, heading: &'static str, ordered: bool, items: &[String]) -> Self {
        if !items.is_empty() {
            self.lists.push(PanelList { heading, ordered, items: items.to_vec() });
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.lists.is_empty()
    }
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.trim().is_empty())
}

/// Build the panel content for a reply.
pub fn panel_model(response: &DetailResponse) -> PanelModel {
    let title = response.endpoint().label();
    match response {
        DetailResponse::ProductInfo(info) => product_info(title, info),
        DetailResponse::RepairInstructions(repair) => {
            PanelModel::new(title).list("Instructions", true, &repair.instructions)
        }
        DetailResponse::BillOfMaterials(bom) => PanelModel::new(title).list("Materials", false, &bom.materials),
        DetailResponse::CadModel(cad) => cad_model(title, cad),
        DetailResponse::LicenseInfo(license) => license_info(title, license),
        DetailResponse::SafetyInfo(safety) => safety_info(title, safety),
    }
}

fn product_info(title: &'static str, info: &ProductInfo) -> PanelModel {
    PanelModel::new(title)
        .required("ID", info.id.as_ref())
        .required("Name", info.name.as_ref())
        .required("Category", info.category.as_ref())
        .required("Description", info.description.as_ref())
        .optional("Payload", info.payload.as_ref())
        .optional("Reach Range", info.reach_range.as_ref())
        .required("License", info.license.as_ref())
        .required("License Details", info.license_details.as_ref())
        .list("Applications", false, &info.applications)
}

fn cad_model(title: &'static str, cad: &CadModel) -> PanelModel {
    PanelModel::new(title)
        .required("ID", cad.id.as_ref())
        .required("Name", cad.name.as_ref())
        .required("Category", cad.category.as_ref())
        .required("Dimensions", cad.dimensions.as_ref())
        .required("Weight", cad.weight.as_ref())
        .required("Material", cad.material.as_ref())
        .required("Color", cad.color.as_ref())
        .required("Manufacturer", cad.manufacturer.as_ref())
        .required("Part Number", cad.part_number.as_ref())
        .required("File Format", cad.file_format.as_ref())
        .required("Model Type", cad.model_type.as_ref())
}

fn license_info(title: &'static str, license: &LicenseInfo) -> PanelModel {
    PanelModel::new(title)
        .required("ID", license.id.as_ref())
        .required("Name", license.name.as_ref())
        .required("Category", license.category.as_ref())
        .required("License", license.license.as_ref())
        .required("License Details", license.license_details.as_ref())
}

fn safety_info(title: &'static str, safety: &SafetyInfo) -> PanelModel {
    PanelModel::new(title)
        .list("Safety Features", false, &safety.safety_features)
        .list("Safety Instructions", true, &safety.safety_instructions)
}

/// Renders the current response slot.
#[component]
pub fn DetailPanel(response: DetailResponse) -> impl IntoView {
    let model = panel_model(&response);
    let empty = model.is_empty();

    view! {
        <section class="detail-panel">
            <h2 class="detail-panel__title">{model.title}</h2>
            <dl class="detail-panel__fields">
                {model
                    .fields
                    .into_iter()
                    .map(|field| {
                        view! {
                            <dt class="detail-panel__label">{field.label}</dt>
                            <dd class="detail-panel__value">{field.value}</dd>
                        }
                    })
                    .collect_view()}
            </dl>
            {model.lists.into_iter().map(render_list).collect_view()}
            <Show when=move || empty>
                <p class="detail-panel__empty">"No information available."</p>
            </Show>
        </section>
    }
}

fn render_list(list: PanelList) -> impl IntoView {
    let items = list.items.into_iter().map(|item| view! { <li>{item}</li> }).collect_view();
    let body = if list.ordered {
        view! { <ol class="detail-panel__items">{items}</ol> }.into_any()
    } else {
        view! { <ul class="detail-panel__items">{items}</ul> }.into_any()
    };

    view! {
        <div class="detail-panel__list">
            <h3>{list.heading}</h3>
            {body}
        </div>
    }
}
