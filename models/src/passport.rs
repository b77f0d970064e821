// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Definitions of the Digital Product Passport.
//!
//! Every field is optional on input. Missing values are replaced by their empty defaults so that
//! the scoring code never has to deal with absent data.

use serde::{Deserialize, Deserializer, Serialize, de::Error as _};

use crate::utils::null_as_default;

/// Identity of the product described by a passport.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ProductIdentity {
    #[serde(rename = "productId", deserialize_with = "null_as_default")]
    pub product_id: String,

    #[serde(rename = "gtin", deserialize_with = "null_as_default")]
    pub gtin: String,

    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub name: String,

    /// Free-text category, for example "Textiles > T-shirts".
    #[serde(rename = "category", deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(rename = "brand", deserialize_with = "null_as_default")]
    pub brand: String,

    #[serde(rename = "model", deserialize_with = "null_as_default")]
    pub model: String,
}

/// One entry of the material composition.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct MaterialEntry {
    /// Name of the material, in English or Polish.
    #[serde(rename = "material", deserialize_with = "null_as_default")]
    pub material: String,

    /// Share of the material in the product (0-100).
    #[serde(rename = "percentage", deserialize_with = "null_as_default")]
    pub percentage: f64,

    #[serde(rename = "certifications", deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
}

impl MaterialEntry {
    #[must_use]
    pub fn new(material: &str, percentage: f64, certifications: &[&str]) -> Self {
        Self {
            material: material.to_string(),
            percentage,
            certifications: certifications.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct EnvironmentalImpact {
    #[serde(rename = "carbonFootprint_kgCO2e", deserialize_with = "null_as_default")]
    pub carbon_footprint_kg_co2e: f64,

    #[serde(rename = "waterUsage_liters", deserialize_with = "null_as_default")]
    pub water_usage_liters: f64,

    #[serde(rename = "energy_kWh", deserialize_with = "null_as_default")]
    pub energy_kwh: f64,

    /// Declared recycled content (0-100).
    #[serde(rename = "recycledContentPercentage", deserialize_with = "null_as_default")]
    pub recycled_content_percentage: f64,

    #[serde(rename = "hazardousSubstances", deserialize_with = "null_as_default")]
    pub hazardous_substances: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Producer {
    #[serde(rename = "name", deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(rename = "address", deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(rename = "contact", deserialize_with = "null_as_default")]
    pub contact: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct ProductionSite {
    #[serde(rename = "country", deserialize_with = "null_as_default")]
    pub country: String,

    #[serde(rename = "facilityId", deserialize_with = "null_as_default")]
    pub facility_id: String,

    #[serde(rename = "processes", deserialize_with = "null_as_default")]
    pub processes: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Manufacturing {
    #[serde(rename = "producer", deserialize_with = "null_as_default")]
    pub producer: Producer,

    #[serde(rename = "productionSites", deserialize_with = "null_as_default")]
    pub production_sites: Vec<ProductionSite>,

    #[serde(rename = "manufacturingDate", deserialize_with = "null_as_default")]
    pub manufacturing_date: String,
}

/// How hard it is to repair the product.
///
/// Values other than the three known ones are kept as `Unknown` and scored like `Medium`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RepairDifficulty {
    #[serde(rename = "low")]
    Low,

    #[default]
    #[serde(rename = "medium")]
    Medium,

    #[serde(rename = "high")]
    High,

    #[serde(other, rename = "unknown")]
    Unknown,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Repairability {
    #[serde(rename = "repairDifficulty", deserialize_with = "null_as_default")]
    pub repair_difficulty: RepairDifficulty,

    #[serde(rename = "sparePartsAvailable", deserialize_with = "null_as_default")]
    pub spare_parts_available: bool,

    #[serde(rename = "repairGuidesURL", deserialize_with = "null_as_default")]
    pub repair_guides_url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct DurabilityAndCare {
    #[serde(rename = "expectedLifetime_cycles", deserialize_with = "null_as_default")]
    pub expected_lifetime_cycles: f64,

    #[serde(rename = "washInstructions", deserialize_with = "null_as_default")]
    pub wash_instructions: String,

    #[serde(rename = "repairability", deserialize_with = "null_as_default")]
    pub repairability: Repairability,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct TakeBackProgram {
    #[serde(rename = "programName", deserialize_with = "null_as_default")]
    pub program_name: String,

    #[serde(rename = "url", deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct EndOfLife {
    /// Share of the product that can be recycled (0-100).
    #[serde(rename = "recyclabilityPercentage", deserialize_with = "null_as_default")]
    pub recyclability_percentage: f64,

    #[serde(rename = "disassemblyInstructionsURL", deserialize_with = "null_as_default")]
    pub disassembly_instructions_url: String,

    #[serde(rename = "takeBackPrograms", deserialize_with = "null_as_default")]
    pub take_back_programs: Vec<TakeBackProgram>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SupplyChainStage {
    #[serde(rename = "stage", deserialize_with = "null_as_default")]
    pub stage: String,

    #[serde(rename = "supplier", deserialize_with = "null_as_default")]
    pub supplier: String,

    #[serde(rename = "country", deserialize_with = "null_as_default")]
    pub country: String,

    #[serde(rename = "certificate", skip_serializing_if = "Option::is_none")]
    pub certificate: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct SupplyChainTraceability {
    #[serde(rename = "chain", deserialize_with = "null_as_default")]
    pub chain: Vec<SupplyChainStage>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Metadata {
    #[serde(rename = "passportCreated", deserialize_with = "null_as_default")]
    pub passport_created: String,

    #[serde(rename = "passportLastUpdated", deserialize_with = "null_as_default")]
    pub passport_last_updated: String,

    #[serde(rename = "dataOwner", deserialize_with = "null_as_default")]
    pub data_owner: String,
}

/// The Digital Product Passport: sustainability and provenance record of a single product.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Passport {
    #[serde(rename = "version", deserialize_with = "null_as_default")]
    pub version: String,

    #[serde(rename = "product", deserialize_with = "null_as_default")]
    pub product: ProductIdentity,

    #[serde(rename = "materialComposition", deserialize_with = "null_as_default")]
    pub material_composition: Vec<MaterialEntry>,

    #[serde(rename = "environmentalImpact", deserialize_with = "null_as_default")]
    pub environmental_impact: EnvironmentalImpact,

    #[serde(rename = "manufacturing", deserialize_with = "null_as_default")]
    pub manufacturing: Manufacturing,

    #[serde(rename = "durabilityAndCare", deserialize_with = "null_as_default")]
    pub durability_and_care: DurabilityAndCare,

    #[serde(rename = "endOfLife", deserialize_with = "null_as_default")]
    pub end_of_life: EndOfLife,

    #[serde(rename = "supplyChainTraceability", deserialize_with = "null_as_default")]
    pub supply_chain_traceability: SupplyChainTraceability,

    #[serde(rename = "metadata", deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

/// Passport wrapped in a `productPassport` field.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct WrappedPassport {
    #[serde(rename = "productPassport")]
    pub product_passport: Passport,
}

/// Any of the shapes in which passports are published.
///
/// Passports come either bare, wrapped in a `productPassport` field, or additionally enveloped
/// in a `record` field (as served by the JSON storage scanned QR codes point to).
///
/// The shape is chosen by the keys present in the top-level object. A bare passport must carry
/// the `product` section, so that unrelated objects are rejected instead of read as empty
/// passports.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum PassportDocument {
    Record { record: WrappedPassport },
    Wrapped(WrappedPassport),
    Bare(Passport),
}

impl<'de> Deserialize<'de> for PassportDocument {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let mut object = serde_json::Map::<String, serde_json::Value>::deserialize(d)?;
        if let Some(record) = object.remove("record") {
            let record = WrappedPassport::deserialize(record)
                .map_err(|e| D::Error::custom(format!("invalid `record`: {e}")))?;
            return Ok(Self::Record { record });
        }
        if let Some(passport) = object.remove("productPassport") {
            let product_passport = Passport::deserialize(passport)
                .map_err(|e| D::Error::custom(format!("invalid `productPassport`: {e}")))?;
            return Ok(Self::Wrapped(WrappedPassport { product_passport }));
        }
        if !object.contains_key("product") {
            return Err(D::Error::custom(
                "not a product passport: expected `record`, `productPassport` or `product`",
            ));
        }
        Passport::deserialize(serde_json::Value::Object(object))
            .map(Self::Bare)
            .map_err(D::Error::custom)
    }
}

impl PassportDocument {
    /// Unwraps the passport regardless of the shape it came in.
    #[must_use]
    pub fn into_passport(self) -> Passport {
        match self {
            Self::Record { record } => record.product_passport,
            Self::Wrapped(wrapped) => wrapped.product_passport,
            Self::Bare(passport) => passport,
        }
    }
}

impl From<Passport> for PassportDocument {
    fn from(passport: Passport) -> Self {
        Self::Bare(passport)
    }
}
