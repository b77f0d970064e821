// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Product records as returned by the wardrobe backend and their conversion into passports.

use serde::{Deserialize, Serialize};

use crate::{
    passport::{
        DurabilityAndCare, EndOfLife, EnvironmentalImpact, Manufacturing, MaterialEntry, Metadata,
        Passport, Producer, ProductIdentity, ProductionSite, Repairability,
        SupplyChainTraceability,
    },
    utils::null_as_default,
};

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendProductInformation {
    #[serde(rename = "gtin", deserialize_with = "null_as_default")]
    pub gtin: String,

    #[serde(rename = "productName", deserialize_with = "null_as_default")]
    pub product_name: String,

    #[serde(rename = "category", deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(rename = "brand", deserialize_with = "null_as_default")]
    pub brand: String,

    #[serde(rename = "model", deserialize_with = "null_as_default")]
    pub model: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendMaterialComposition {
    #[serde(rename = "materialName", deserialize_with = "null_as_default")]
    pub material_name: String,

    #[serde(rename = "compositionPercentage", deserialize_with = "null_as_default")]
    pub composition_percentage: f64,

    #[serde(rename = "certifications", deserialize_with = "null_as_default")]
    pub certifications: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendEnvironmentImpact {
    #[serde(rename = "carbonFootprintKgCO2e", deserialize_with = "null_as_default")]
    pub carbon_footprint_kg_co2e: f64,

    #[serde(rename = "waterUsageLiters", deserialize_with = "null_as_default")]
    pub water_usage_liters: f64,

    #[serde(rename = "energyKwh", deserialize_with = "null_as_default")]
    pub energy_kwh: f64,

    #[serde(rename = "recycledContentPercentage", deserialize_with = "null_as_default")]
    pub recycled_content_percentage: f64,

    #[serde(rename = "hazardousSubstances", deserialize_with = "null_as_default")]
    pub hazardous_substances: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendProducer {
    #[serde(rename = "producerName", deserialize_with = "null_as_default")]
    pub producer_name: String,

    #[serde(rename = "address", deserialize_with = "null_as_default")]
    pub address: String,

    #[serde(rename = "contact", deserialize_with = "null_as_default")]
    pub contact: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendManufacturing {
    #[serde(rename = "producer", deserialize_with = "null_as_default")]
    pub producer: BackendProducer,

    #[serde(rename = "productionSites", deserialize_with = "null_as_default")]
    pub production_sites: Vec<ProductionSite>,

    #[serde(rename = "manufacturingDate", deserialize_with = "null_as_default")]
    pub manufacturing_date: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendDurabilityAndCare {
    #[serde(rename = "expectedLifetimeCycles", deserialize_with = "null_as_default")]
    pub expected_lifetime_cycles: f64,

    #[serde(rename = "washInstructions", deserialize_with = "null_as_default")]
    pub wash_instructions: String,

    #[serde(rename = "repairability", deserialize_with = "null_as_default")]
    pub repairability: Repairability,
}

/// Product as stored by the backend.
///
/// The layout carries the same information as the passport under different field names.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendProduct {
    #[serde(rename = "id", deserialize_with = "null_as_default")]
    pub id: String,

    #[serde(rename = "productInformation", deserialize_with = "null_as_default")]
    pub product_information: BackendProductInformation,

    #[serde(rename = "materialCompositions", deserialize_with = "null_as_default")]
    pub material_compositions: Vec<BackendMaterialComposition>,

    #[serde(rename = "productEnvironmentImpact", deserialize_with = "null_as_default")]
    pub product_environment_impact: BackendEnvironmentImpact,

    #[serde(rename = "manufacturing", deserialize_with = "null_as_default")]
    pub manufacturing: BackendManufacturing,

    #[serde(rename = "durabilityAndCare", deserialize_with = "null_as_default")]
    pub durability_and_care: BackendDurabilityAndCare,

    #[serde(rename = "endOfLife", deserialize_with = "null_as_default")]
    pub end_of_life: EndOfLife,

    #[serde(rename = "supplyChainTraceability", deserialize_with = "null_as_default")]
    pub supply_chain_traceability: SupplyChainTraceability,

    #[serde(rename = "metadata", deserialize_with = "null_as_default")]
    pub metadata: Metadata,
}

/// Response of the backend listing products of a wardrobe.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct BackendWardrobeItems {
    #[serde(rename = "products", deserialize_with = "null_as_default")]
    pub products: Vec<BackendProduct>,
}

impl BackendProduct {
    /// Converts the backend record into a passport.
    #[must_use]
    pub fn into_passport(self) -> Passport {
        let info = self.product_information;
        let impact = self.product_environment_impact;
        let manufacturing = self.manufacturing;
        let care = self.durability_and_care;

        Passport {
            version: String::new(),
            product: ProductIdentity {
                product_id: self.id,
                gtin: info.gtin,
                name: info.product_name,
                category: info.category,
                brand: info.brand,
                model: info.model,
            },
            material_composition: self
                .material_compositions
                .into_iter()
                .map(|m| MaterialEntry {
                    material: m.material_name,
                    percentage: m.composition_percentage,
                    certifications: m.certifications,
                })
                .collect(),
            environmental_impact: EnvironmentalImpact {
                carbon_footprint_kg_co2e: impact.carbon_footprint_kg_co2e,
                water_usage_liters: impact.water_usage_liters,
                energy_kwh: impact.energy_kwh,
                recycled_content_percentage: impact.recycled_content_percentage,
                hazardous_substances: impact.hazardous_substances,
            },
            manufacturing: Manufacturing {
                producer: Producer {
                    name: manufacturing.producer.producer_name,
                    address: manufacturing.producer.address,
                    contact: manufacturing.producer.contact,
                },
                production_sites: manufacturing.production_sites,
                manufacturing_date: manufacturing.manufacturing_date,
            },
            durability_and_care: DurabilityAndCare {
                expected_lifetime_cycles: care.expected_lifetime_cycles,
                wash_instructions: care.wash_instructions,
                repairability: care.repairability,
            },
            end_of_life: self.end_of_life,
            supply_chain_traceability: self.supply_chain_traceability,
            metadata: self.metadata,
        }
    }
}

impl From<BackendProduct> for Passport {
    fn from(product: BackendProduct) -> Self {
        product.into_passport()
    }
}
