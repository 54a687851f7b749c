use crate::case::snake_case;
use crate::RelationsResult;
use modfooter_model::RelationDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

/// Read-only lookup of relation descriptors by normalized content type.
///
/// Descriptor order is preserved. When two descriptors share a
/// `global_name` the first one wins and the later ones are reported
/// through [`RelationRegistry::duplicates`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RelationDescriptor>", into = "Vec<RelationDescriptor>")]
pub struct RelationRegistry {
    descriptors: Vec<RelationDescriptor>,
    index: HashMap<String, usize>,
    duplicates: Vec<String>,
}

impl RelationRegistry {
    /// Builds a registry from descriptors in their declared order.
    pub fn new(descriptors: Vec<RelationDescriptor>) -> Self {
        let mut index = HashMap::with_capacity(descriptors.len());
        let mut duplicates = Vec::new();

        for (pos, descriptor) in descriptors.iter().enumerate() {
            match index.entry(descriptor.global_name.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(pos);
                }
                Entry::Occupied(_) => {
                    warn!(
                        "Duplicate relation descriptor for {:?} at position {}, keeping the first",
                        descriptor.global_name, pos
                    );
                    duplicates.push(descriptor.global_name.clone());
                }
            }
        }

        debug!(
            "Built relation registry with {} descriptors ({} duplicates)",
            descriptors.len(),
            duplicates.len()
        );

        Self {
            descriptors,
            index,
            duplicates,
        }
    }

    /// Parses a JSON array of descriptors.
    pub fn from_json_str(json: &str) -> RelationsResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON array of descriptors from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> RelationsResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Looks up a descriptor by its normalized `global_name`.
    pub fn get(&self, global_name: &str) -> Option<&RelationDescriptor> {
        self.index.get(global_name).map(|&pos| &self.descriptors[pos])
    }

    /// Looks up a descriptor by raw content type (`BlogPost`, `blog-post`, ...).
    pub fn lookup(&self, content_type: &str) -> Option<&RelationDescriptor> {
        self.get(&snake_case(content_type))
    }

    /// Descriptors in declared order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &RelationDescriptor> {
        self.descriptors.iter()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Global names that appeared more than once, in order of the repeats.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

impl From<Vec<RelationDescriptor>> for RelationRegistry {
    fn from(descriptors: Vec<RelationDescriptor>) -> Self {
        Self::new(descriptors)
    }
}

impl From<RelationRegistry> for Vec<RelationDescriptor> {
    fn from(registry: RelationRegistry) -> Self {
        registry.descriptors
    }
}

impl FromIterator<RelationDescriptor> for RelationRegistry {
    fn from_iter<I: IntoIterator<Item = RelationDescriptor>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
