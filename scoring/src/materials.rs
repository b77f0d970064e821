// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Classification of materials.
//!
//! Materials are recognized by keywords (English words and Polish word stems) found anywhere
//! in their lower-cased names.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use ecowardrobe_models::{passport::MaterialEntry, product::Material};

use crate::{errors::TableError, utils};

/// Version of the material table format understood by this crate.
pub const TABLE_VERSION: u32 = 1;

const NATURAL_KEYWORDS: &[&str] = &[
    "cotton", "bawełn", "wool", "wełn", "silk", "jedwab", "linen", "len", "hemp", "konop",
    "bamboo", "bambus", "alpaca", "alpaka", "merino", "leather", "skór", "cashmere", "kaszmir",
    "tencel", "lyocell", "viscose", "wiskoz", "modal", "rayon", "jute", "juta", "ramie",
];

const SYNTHETIC_KEYWORDS: &[&str] = &[
    "polyester",
    "poliester",
    "nylon",
    "poliamid",
    "elastan",
    "spandex",
    "lycra",
    "acrylic",
    "akryl",
    "polypropylene",
    "polipropylen",
];

const RECYCLED_CERTIFICATION_MARKERS: &[&str] = &["recycled", "rpet", "grs"];
const RECYCLED_NAME_MARKERS: &[&str] = &["recycled", "recykling"];
const ORGANIC_CERTIFICATION_MARKERS: &[&str] = &["organic", "gots", "organiczn"];
const ORGANIC_NAME_MARKERS: &[&str] = &["organic", "organiczn"];

/// Class assigned to a keyword in the material table.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeywordClass {
    #[serde(rename = "natural")]
    Natural,

    #[serde(rename = "synthetic")]
    Synthetic,
}

/// Outcome of classifying a material name.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    #[serde(rename = "natural")]
    Natural,

    #[serde(rename = "synthetic")]
    Synthetic,

    /// None of the keywords matched.
    #[serde(rename = "unknown")]
    Unknown,
}

/// Decides how materials of unknown kind count.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownMaterialPolicy {
    #[default]
    #[serde(rename = "synthetic")]
    Synthetic,

    #[serde(rename = "natural")]
    Natural,
}

impl UnknownMaterialPolicy {
    #[must_use]
    pub fn is_natural(self, kind: MaterialKind) -> bool {
        match kind {
            MaterialKind::Natural => true,
            MaterialKind::Synthetic => false,
            MaterialKind::Unknown => self == Self::Natural,
        }
    }
}

/// Serialized form of the material table.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MaterialTableData {
    #[serde(rename = "version")]
    pub version: u32,

    #[serde(rename = "keywords")]
    pub keywords: BTreeMap<String, KeywordClass>,
}

/// Versioned keyword table used to classify materials.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterialTable {
    version: u32,
    natural: Vec<String>,
    synthetic: Vec<String>,
}

impl MaterialTable {
    /// Constructs a new `MaterialTable` from keyword classes.
    ///
    /// # Errors
    ///
    /// Returns an error if the version is not supported or any keyword is empty.
    pub fn new(data: MaterialTableData) -> Result<Self, TableError> {
        if data.version != TABLE_VERSION {
            return Err(TableError::UnsupportedVersion {
                found: data.version,
                expected: TABLE_VERSION,
            });
        }
        if data.keywords.is_empty() {
            return Err(TableError::NoKeywords);
        }

        let mut natural = Vec::new();
        let mut synthetic = Vec::new();
        for (keyword, class) in data.keywords {
            let keyword = keyword.trim().to_lowercase();
            if keyword.is_empty() {
                return Err(TableError::EmptyKeyword);
            }
            match class {
                KeywordClass::Natural => natural.push(keyword),
                KeywordClass::Synthetic => synthetic.push(keyword),
            }
        }
        natural.sort();
        natural.dedup();
        synthetic.sort();
        synthetic.dedup();
        Ok(Self { version: data.version, natural, synthetic })
    }

    /// Parses a table from its YAML form.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or the table is invalid.
    pub fn from_yaml(contents: &str) -> Result<Self, TableError> {
        let data: MaterialTableData = serde_yaml::from_str(contents)?;
        Self::new(data)
    }

    #[must_use]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the serializable form of this table.
    #[must_use]
    pub fn to_data(&self) -> MaterialTableData {
        let natural = self.natural.iter().map(|k| (k.clone(), KeywordClass::Natural));
        let synthetic = self.synthetic.iter().map(|k| (k.clone(), KeywordClass::Synthetic));
        MaterialTableData { version: self.version, keywords: natural.chain(synthetic).collect() }
    }

    /// Classifies a material by its name.
    ///
    /// Synthetic keywords take precedence, so "Cotton/Polyester blend" is synthetic.
    #[must_use]
    pub fn classify(&self, name: &str) -> MaterialKind {
        let name = name.to_lowercase();
        if self.synthetic.iter().any(|k| name.contains(k.as_str())) {
            MaterialKind::Synthetic
        } else if self.natural.iter().any(|k| name.contains(k.as_str())) {
            MaterialKind::Natural
        } else {
            MaterialKind::Unknown
        }
    }
}

impl Default for MaterialTable {
    fn default() -> Self {
        let mut natural: Vec<String> = NATURAL_KEYWORDS.iter().map(ToString::to_string).collect();
        let mut synthetic: Vec<String> =
            SYNTHETIC_KEYWORDS.iter().map(ToString::to_string).collect();
        natural.sort();
        synthetic.sort();
        Self { version: TABLE_VERSION, natural, synthetic }
    }
}

fn contains_any(text: &str, markers: &[&str]) -> bool {
    let text = text.to_lowercase();
    markers.iter().any(|m| text.contains(m))
}

/// Checks if any of the certifications attests recycled origin.
#[must_use]
pub fn has_recycled_certification(certifications: &[String]) -> bool {
    certifications.iter().any(|c| contains_any(c, RECYCLED_CERTIFICATION_MARKERS))
}

/// Checks if the material is recycled, either by certification or by its name.
#[must_use]
pub fn is_recycled(name: &str, certifications: &[String]) -> bool {
    has_recycled_certification(certifications) || contains_any(name, RECYCLED_NAME_MARKERS)
}

/// Checks if the material is organic, either by certification or by its name.
#[must_use]
pub fn is_organic(name: &str, certifications: &[String]) -> bool {
    certifications.iter().any(|c| contains_any(c, ORGANIC_CERTIFICATION_MARKERS))
        || contains_any(name, ORGANIC_NAME_MARKERS)
}

/// Keyword table together with the policy for unrecognized materials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MaterialClassifier {
    table: MaterialTable,
    unknown: UnknownMaterialPolicy,
}

impl MaterialClassifier {
    #[must_use]
    pub fn new(table: MaterialTable, unknown: UnknownMaterialPolicy) -> Self {
        Self { table, unknown }
    }

    #[must_use]
    pub fn table(&self) -> &MaterialTable {
        &self.table
    }

    #[must_use]
    pub fn classify(&self, name: &str) -> MaterialKind {
        self.table.classify(name)
    }

    #[must_use]
    pub fn is_natural(&self, name: &str) -> bool {
        self.unknown.is_natural(self.table.classify(name))
    }

    /// Converts a passport composition entry into a classified material.
    #[must_use]
    pub fn material(&self, entry: &MaterialEntry) -> Material {
        Material {
            name: entry.material.clone(),
            percentage: utils::percentage(entry.percentage),
            is_natural: self.is_natural(&entry.material),
            is_recycled: is_recycled(&entry.material, &entry.certifications),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bilingual() {
        let table = MaterialTable::default();
        assert_eq!(table.classify("Organic Cotton"), MaterialKind::Natural);
        assert_eq!(table.classify("Bawełna organiczna"), MaterialKind::Natural);
        assert_eq!(table.classify("WEŁNA merino"), MaterialKind::Natural);
        assert_eq!(table.classify("Skóra naturalna"), MaterialKind::Natural);
        assert_eq!(table.classify("Poliamid"), MaterialKind::Synthetic);
        assert_eq!(table.classify("Elastane"), MaterialKind::Synthetic);
        assert_eq!(table.classify("Kevlar"), MaterialKind::Unknown);
    }

    #[test]
    fn test_synthetic_takes_precedence() {
        let table = MaterialTable::default();
        assert_eq!(table.classify("Cotton-polyester blend"), MaterialKind::Synthetic);
        assert_eq!(table.classify("Wool with lycra"), MaterialKind::Synthetic);
    }

    #[test]
    fn test_unknown_policy() {
        let table = MaterialTable::default();
        let closed = MaterialClassifier::new(table.clone(), UnknownMaterialPolicy::Synthetic);
        let open = MaterialClassifier::new(table, UnknownMaterialPolicy::Natural);
        assert!(!closed.is_natural("Kevlar"));
        assert!(open.is_natural("Kevlar"));
        assert!(!open.is_natural("Nylon"));
        assert!(closed.is_natural("Hemp"));
    }

    #[test]
    fn test_recycled_and_organic() {
        let none: Vec<String> = Vec::new();
        let grs = vec!["GRS".to_string()];
        let gots = vec!["GOTS".to_string()];

        assert!(is_recycled("Recycled Polyester", &none));
        assert!(is_recycled("Poliester z recyklingu", &none));
        assert!(is_recycled("Polyester", &grs));
        assert!(!is_recycled("Polyester", &gots));

        assert!(is_organic("Cotton", &gots));
        assert!(is_organic("Bawełna organiczna", &none));
        assert!(!is_organic("Cotton", &grs));
    }

    #[test]
    fn test_table_roundtrip_through_data() {
        let table = MaterialTable::default();
        let restored = MaterialTable::new(table.to_data());
        assert!(matches!(restored, Ok(ref t) if *t == table));
    }

    #[test]
    fn test_table_validation() {
        let data = MaterialTableData { version: 2, keywords: BTreeMap::new() };
        assert!(matches!(
            MaterialTable::new(data),
            Err(TableError::UnsupportedVersion { found: 2, expected: 1 })
        ));

        let data = MaterialTableData { version: 1, keywords: BTreeMap::new() };
        assert!(matches!(MaterialTable::new(data), Err(TableError::NoKeywords)));

        let mut keywords = BTreeMap::new();
        keywords.insert("  ".to_string(), KeywordClass::Natural);
        let data = MaterialTableData { version: 1, keywords };
        assert!(matches!(MaterialTable::new(data), Err(TableError::EmptyKeyword)));
    }
}
