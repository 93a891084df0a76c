use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::StructureConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub position: usize,
    pub title: String,
}

/// Label to items, kept in first-seen label order.
///
/// Serialized as a JSON object so consumers can index by label; the key
/// order of the object follows insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocks {
    entries: Vec<(String, Vec<String>)>,
}

impl Blocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items for `label`, creating an empty block at the end if absent.
    pub fn ensure(&mut self, label: &str) -> &mut Vec<String> {
        let index = match self.entries.iter().position(|(key, _)| key == label) {
            Some(index) => index,
            None => {
                self.entries.push((label.to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn get(&self, label: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == label)
            .map(|(_, items)| items.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(label, items)| (label.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.entries.iter().map(|(_, items)| items.len()).sum()
    }

    pub fn drop_empty(&mut self) {
        for (_, items) in &mut self.entries {
            items.retain(|item| !item.trim().is_empty());
        }
        self.entries.retain(|(_, items)| !items.is_empty());
    }
}

impl Serialize for Blocks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, items) in &self.entries {
            map.serialize_entry(label, items)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Blocks {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct BlocksVisitor;

        impl<'de> Visitor<'de> for BlocksVisitor {
            type Value = Blocks;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of label to item list")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Blocks, A::Error> {
                let mut blocks = Blocks::new();
                while let Some((label, items)) = access.next_entry::<String, Vec<String>>()? {
                    blocks.ensure(&label).extend(items);
                }
                Ok(blocks)
            }
        }

        deserializer.deserialize_map(BlocksVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub blocks: Blocks,
}

#[derive(Debug, Clone, Serialize)]
pub struct SectionIndexEntry {
    pub index: usize,
    pub title: String,
    pub filename: String,
    pub short_tip: String,
    pub block_labels: Vec<String>,
    pub item_count: usize,
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructurePaths {
    pub source_path: String,
    pub out_dir: String,
    pub sections_path: String,
    pub index_path: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LabelCount {
    pub label: String,
    pub sections: usize,
    pub items: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructureCounts {
    pub line_count: usize,
    pub heading_count: usize,
    pub section_count: usize,
    pub empty_section_count: usize,
    pub item_count: usize,
    pub labels: Vec<LabelCount>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StructureRunManifest {
    pub manifest_version: u32,
    pub run_id: String,
    pub generated_at: String,
    pub source_sha256: String,
    pub backend: String,
    pub config: StructureConfig,
    pub paths: StructurePaths,
    pub counts: StructureCounts,
    pub warnings: Vec<String>,
}
