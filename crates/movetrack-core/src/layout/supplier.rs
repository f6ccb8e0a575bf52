use movetrack_types::{FieldValue, SupplierData, SupplierProfile, SupplierSlot};
use serde::Serialize;

use super::humanize_key;

/// How a field value is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    Plain,
    /// Appends the unit: `12000 km`
    Kilometres,
}

impl FieldFormat {
    pub fn apply(self, value: &FieldValue) -> String {
        match self {
            FieldFormat::Plain => value.to_string(),
            FieldFormat::Kilometres => format!("{} km", value),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub key: &'static str,
    pub label: &'static str,
    pub format: FieldFormat,
}

const fn field(key: &'static str, label: &'static str) -> FieldDef {
    FieldDef {
        key,
        label,
        format: FieldFormat::Plain,
    }
}

const fn km(key: &'static str, label: &'static str) -> FieldDef {
    FieldDef {
        key,
        label,
        format: FieldFormat::Kilometres,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SectionDef {
    pub title: &'static str,
    /// Section is shown only when this field is present
    pub requires: Option<&'static str>,
    pub fields: &'static [FieldDef],
}

/// Layout of one supplier tab: an overview of all known fields, then curated sections
#[derive(Debug, Clone, Copy)]
pub struct SupplierLayout {
    pub slot: SupplierSlot,
    pub overview_title: &'static str,
    /// Known field keys in display order; labels are derived with [`humanize_key`]
    pub overview_fields: &'static [&'static str],
    pub sections: &'static [SectionDef],
}

static SUPPLIER1: SupplierLayout = SupplierLayout {
    slot: SupplierSlot::Supplier1,
    overview_title: "Administrative Data",
    overview_fields: &[
        "firstRegistrationDate",
        "clientAvailableStartDate",
        "inspectionDate",
        "startDate",
        "endDate",
        "createdDate",
        "modifiedDate",
        "parkingLocation",
        "parkingPlace",
    ],
    sections: &[
        SectionDef {
            title: "Important Dates",
            requires: None,
            fields: &[
                field("firstRegistrationDate", "First Registration"),
                field("clientAvailableStartDate", "Client Available"),
                field("inspectionDate", "Inspection Date"),
                field("startDate", "Start Date"),
                field("endDate", "End Date"),
                field("createdDate", "Created Date"),
                field("modifiedDate", "Modified Date"),
            ],
        },
        SectionDef {
            title: "Parking Information",
            requires: Some("parkingLocation"),
            fields: &[
                field("parkingLocation", "Location"),
                field("parkingPlace", "Parking Place"),
            ],
        },
    ],
};

static SUPPLIER2: SupplierLayout = SupplierLayout {
    slot: SupplierSlot::Supplier2,
    overview_title: "Vehicle Information",
    overview_fields: &[
        "make",
        "model",
        "color",
        "km",
        "type",
        "herkomst",
        "location",
        "address",
        "firstGateIn",
        "gateIn",
        "gateOut",
    ],
    sections: &[
        SectionDef {
            title: "Vehicle Details",
            requires: None,
            fields: &[
                field("make", "Make"),
                field("model", "Model"),
                field("color", "Color"),
                field("km", "Mileage (km)"),
                field("type", "Type"),
                field("herkomst", "Herkomst"),
            ],
        },
        SectionDef {
            title: "Location Information",
            requires: None,
            fields: &[
                field("location", "Current Location"),
                field("address", "Address"),
            ],
        },
        SectionDef {
            title: "Gate Information",
            requires: None,
            fields: &[
                field("firstGateIn", "First Gate In"),
                field("gateIn", "Gate In"),
                field("gateOut", "Gate Out"),
            ],
        },
    ],
};

static SUPPLIER3: SupplierLayout = SupplierLayout {
    slot: SupplierSlot::Supplier3,
    overview_title: "Transport Information",
    overview_fields: &[
        "status",
        "type",
        "statusDate",
        "subType",
        "createdAt",
        "updatedAt",
        "loadingTime",
        "unloadingTime",
    ],
    sections: &[
        SectionDef {
            title: "Transport Status",
            requires: None,
            fields: &[
                field("status", "Status"),
                field("type", "Type"),
                field("statusDate", "Status Date"),
                field("subType", "Sub Type"),
                field("createdAt", "Created At"),
                field("updatedAt", "Updated At"),
            ],
        },
        SectionDef {
            title: "Timing Information",
            requires: None,
            fields: &[
                field("loadingTime", "Loading Time"),
                field("unloadingTime", "Unloading Time"),
            ],
        },
    ],
};

static SUPPLIER4: SupplierLayout = SupplierLayout {
    slot: SupplierSlot::Supplier4,
    overview_title: "Inspection Details",
    overview_fields: &[
        "inspectionStatus",
        "inspectionDate",
        "inspectionMileage",
        "inspectionDossierId",
        "logDate",
        "version",
        "progressDirection",
        "originalStatus",
        "progressStatus",
        "locationAddress",
        "parkingSpace",
    ],
    sections: &[
        SectionDef {
            title: "Inspection Information",
            requires: None,
            fields: &[
                field("inspectionStatus", "Status"),
                field("inspectionDate", "Date"),
                km("inspectionMileage", "Mileage"),
                field("inspectionDossierId", "Dossier ID"),
                field("logDate", "Log Date"),
                field("version", "Version"),
                field("progressDirection", "Progress Direction"),
                field("originalStatus", "Original Status"),
                field("progressStatus", "Progress Status"),
            ],
        },
        SectionDef {
            title: "Location Details",
            requires: None,
            fields: &[
                field("locationAddress", "Address"),
                field("parkingSpace", "Parking Space"),
            ],
        },
    ],
};

pub fn layout_for(slot: SupplierSlot) -> &'static SupplierLayout {
    match slot {
        SupplierSlot::Supplier1 => &SUPPLIER1,
        SupplierSlot::Supplier2 => &SUPPLIER2,
        SupplierSlot::Supplier3 => &SUPPLIER3,
        SupplierSlot::Supplier4 => &SUPPLIER4,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRow {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    pub title: String,
    pub rows: Vec<FieldRow>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupplierTab {
    pub slot: SupplierSlot,
    pub label: String,
    pub sections: Vec<SectionView>,
}

impl SupplierLayout {
    /// Render a profile; absent fields produce no row, empty sections are dropped
    pub fn render(&self, profile: &SupplierProfile) -> SupplierTab {
        let mut sections = Vec::with_capacity(self.sections.len() + 1);

        let overview: Vec<FieldRow> = self
            .overview_fields
            .iter()
            .filter_map(|key| {
                profile.get(key).map(|value| FieldRow {
                    label: humanize_key(key),
                    value: value.to_string(),
                })
            })
            .collect();
        push_section(&mut sections, self.overview_title, overview);

        for section in self.sections {
            if let Some(required) = section.requires
                && !profile.contains(required)
            {
                continue;
            }

            let rows = section
                .fields
                .iter()
                .filter_map(|spec| {
                    profile.get(spec.key).map(|value| FieldRow {
                        label: spec.label.to_string(),
                        value: spec.format.apply(value),
                    })
                })
                .collect();
            push_section(&mut sections, section.title, rows);
        }

        SupplierTab {
            slot: self.slot,
            label: self.slot.label().to_string(),
            sections,
        }
    }
}

fn push_section(sections: &mut Vec<SectionView>, title: &str, rows: Vec<FieldRow>) {
    if !rows.is_empty() {
        sections.push(SectionView {
            title: title.to_string(),
            rows,
        });
    }
}

/// Tabbed supplier view, or the explicit "no data" state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SupplierView {
    NoData,
    Tabs {
        tabs: Vec<SupplierTab>,
        selected: usize,
    },
}

impl SupplierView {
    /// Build the view for the supplied data. Only present suppliers get a tab;
    /// the first of them is selected.
    pub fn build(data: Option<&SupplierData>) -> Self {
        let Some(data) = data else {
            return SupplierView::NoData;
        };

        let tabs: Vec<SupplierTab> = SupplierSlot::ALL
            .into_iter()
            .filter_map(|slot| data.get(slot).map(|profile| layout_for(slot).render(profile)))
            .collect();

        if tabs.is_empty() {
            SupplierView::NoData
        } else {
            SupplierView::Tabs { tabs, selected: 0 }
        }
    }

    pub fn tabs(&self) -> &[SupplierTab] {
        match self {
            SupplierView::NoData => &[],
            SupplierView::Tabs { tabs, .. } => tabs.as_slice(),
        }
    }

    pub fn selected(&self) -> Option<&SupplierTab> {
        match self {
            SupplierView::NoData => None,
            SupplierView::Tabs { tabs, selected } => tabs.get(*selected),
        }
    }

    /// Select a tab by supplier. Returns false (selection unchanged) when that supplier has no tab.
    pub fn select(&mut self, slot: SupplierSlot) -> bool {
        match self {
            SupplierView::NoData => false,
            SupplierView::Tabs { tabs, selected } => {
                match tabs.iter().position(|tab| tab.slot == slot) {
                    Some(index) => {
                        *selected = index;
                        true
                    }
                    None => false,
                }
            }
        }
    }
}
