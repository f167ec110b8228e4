//! Ordered placeholder catalog

use crate::error::CatalogError;
use crate::grammar::is_tag_name;

use super::model::{Placeholder, PlaceholderId, PlaceholderMode};

/// Placeholders in catalog order, keyed by a never-reused id
///
/// Order matters: rendering folds over placeholders in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    placeholders: Vec<Placeholder>,
    next_id: u64,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from plain records, e.g. loaded by a storage layer
    ///
    /// Ids are kept as given; new ids continue after the largest one.
    pub fn from_placeholders(placeholders: Vec<Placeholder>) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for p in placeholders {
            validate_name(&p.name)?;
            if catalog.find_by_name(&p.name).is_some() {
                return Err(CatalogError::DuplicateName { name: p.name });
            }
            catalog.next_id = catalog.next_id.max(p.id.0 + 1);
            catalog.placeholders.push(p);
        }
        Ok(catalog)
    }

    /// Hand the records back as plain data
    pub fn into_placeholders(self) -> Vec<Placeholder> {
        self.placeholders
    }

    /// Add a placeholder at the end of the catalog
    pub fn add(
        &mut self,
        name: &str,
        content: &str,
        mode: PlaceholderMode,
        color: String,
    ) -> Result<&Placeholder, CatalogError> {
        validate_name(name)?;
        if self.find_by_name(name).is_some() {
            return Err(CatalogError::DuplicateName {
                name: name.to_string(),
            });
        }

        let id = PlaceholderId(self.next_id);
        self.next_id += 1;
        self.placeholders
            .push(Placeholder::new(id, name, color).with_content(content).with_mode(mode));
        log::debug!("catalog: added {} {:?}", id, name);

        let last = self.placeholders.len() - 1;
        Ok(&self.placeholders[last])
    }

    /// Get a placeholder by id
    pub fn get(&self, id: PlaceholderId) -> Option<&Placeholder> {
        self.placeholders.iter().find(|p| p.id == id)
    }

    /// Find a placeholder by name
    pub fn find_by_name(&self, name: &str) -> Option<&Placeholder> {
        self.placeholders.iter().find(|p| p.name == name)
    }

    /// Check if a placeholder with this name exists
    pub fn contains_name(&self, name: &str) -> bool {
        self.find_by_name(name).is_some()
    }

    /// Remove a placeholder by id, returning it
    pub fn remove(&mut self, id: PlaceholderId) -> Result<Placeholder, CatalogError> {
        let index = self.index_of(id)?;
        let removed = self.placeholders.remove(index);
        log::debug!("catalog: removed {} {:?}", id, removed.name);
        Ok(removed)
    }

    /// Remove a placeholder by name, if present
    pub fn remove_by_name(&mut self, name: &str) -> Option<Placeholder> {
        let id = self.find_by_name(name)?.id;
        self.remove(id).ok()
    }

    /// Change a placeholder's name
    ///
    /// Only the record changes; tags already placed in template text must be
    /// renamed separately (see [`crate::editor::rename_tag_occurrences`]).
    pub fn set_name(&mut self, id: PlaceholderId, name: &str) -> Result<(), CatalogError> {
        self.check_rename(id, name)?;
        self.get_mut(id)?.name = name.to_string();
        Ok(())
    }

    /// Check that `id` exists and could take `name` without a clash
    pub fn check_rename(&self, id: PlaceholderId, name: &str) -> Result<(), CatalogError> {
        validate_name(name)?;
        self.index_of(id)?;
        match self.find_by_name(name) {
            Some(other) if other.id != id => Err(CatalogError::DuplicateName {
                name: name.to_string(),
            }),
            _ => Ok(()),
        }
    }

    /// Change a placeholder's content
    pub fn set_content(&mut self, id: PlaceholderId, content: &str) -> Result<(), CatalogError> {
        self.get_mut(id)?.content = content.to_string();
        Ok(())
    }

    /// Change a placeholder's expansion mode
    pub fn set_mode(&mut self, id: PlaceholderId, mode: PlaceholderMode) -> Result<(), CatalogError> {
        self.get_mut(id)?.mode = mode;
        Ok(())
    }

    /// Change a placeholder's display color
    pub fn set_color(&mut self, id: PlaceholderId, color: String) -> Result<(), CatalogError> {
        self.get_mut(id)?.color = color;
        Ok(())
    }

    /// Iterate placeholders in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Placeholder> {
        self.placeholders.iter()
    }

    /// Placeholders as a slice, in catalog order
    pub fn as_slice(&self) -> &[Placeholder] {
        &self.placeholders
    }

    pub fn len(&self) -> usize {
        self.placeholders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placeholders.is_empty()
    }

    fn index_of(&self, id: PlaceholderId) -> Result<usize, CatalogError> {
        self.placeholders
            .iter()
            .position(|p| p.id == id)
            .ok_or(CatalogError::NotFound { id })
    }

    fn get_mut(&mut self, id: PlaceholderId) -> Result<&mut Placeholder, CatalogError> {
        let index = self.index_of(id)?;
        Ok(&mut self.placeholders[index])
    }
}

// Only names the tag scanner can find again may enter the catalog
fn validate_name(name: &str) -> Result<(), CatalogError> {
    if name.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    if !is_tag_name(name) {
        return Err(CatalogError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}
