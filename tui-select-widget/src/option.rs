//! Option records and the ordered list the dropdown borrows

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// A selectable record: stable integer id plus display name
///
/// The name doubles as the committed value.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub id: u32,
    pub name: String,
}

impl SelectOption {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Two records in one list shared an id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("duplicate option id {0}")]
pub struct DuplicateOptionId(pub u32);

/// Ordered, read-only option sequence keyed by stable id
///
/// Index order is display order. The id index is kept alongside so hosts can
/// look records up by id without scanning.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<SelectOption>")]
pub struct OptionList {
    options: Vec<SelectOption>,
    by_id: HashMap<u32, usize>,
}

impl OptionList {
    /// Build a list, rejecting duplicate ids.
    pub fn new(options: Vec<SelectOption>) -> Result<Self, DuplicateOptionId> {
        let mut by_id = HashMap::with_capacity(options.len());
        for (index, option) in options.iter().enumerate() {
            if by_id.insert(option.id, index).is_some() {
                return Err(DuplicateOptionId(option.id));
            }
        }
        Ok(Self { options, by_id })
    }

    /// An empty list (the "still loading" case)
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SelectOption> {
        self.options.get(index)
    }

    /// Display name at `index`
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.get(index).map(|option| option.name.as_str())
    }

    /// Index of the record with this id
    pub fn position(&self, id: u32) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    pub fn by_id(&self, id: u32) -> Option<&SelectOption> {
        self.position(id).and_then(|index| self.get(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SelectOption> {
        self.options.iter()
    }
}

impl TryFrom<Vec<SelectOption>> for OptionList {
    type Error = DuplicateOptionId;

    fn try_from(options: Vec<SelectOption>) -> Result<Self, Self::Error> {
        Self::new(options)
    }
}

impl<'a> IntoIterator for &'a OptionList {
    type Item = &'a SelectOption;
    type IntoIter = std::slice::Iter<'a, SelectOption>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
