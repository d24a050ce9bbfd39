#![deny(missing_docs)]

//! # Schema Registry
//!
//! Owns every named schema component of a document and resolves which of them
//! are *relaxed* types: components that hold an enumeration, directly or
//! through any chain of `$ref`s.
//!
//! Components live in an arena indexed by registration order. References are
//! resolved to arena indices, so cycle detection works on indices rather than
//! on names.

use crate::error::{AppError, AppResult};
use crate::oas::models::{ComponentDescriptor, FieldSchema, TypeNameEvent, TypeNameKind};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// A registered schema component.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaEntry {
    #[serde(rename = "ref")]
    reference: String,
    component_name: String,
    raw_type_name: String,
    #[serde(rename = "typeName")]
    generated_type_name: Option<String>,
    #[serde(skip)]
    properties: Option<IndexMap<String, FieldSchema>>,
    is_relaxed_type: bool,
    is_untyped: bool,
}

impl SchemaEntry {
    /// Reference id (primary key).
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Component kind the entry was registered under.
    pub fn component_name(&self) -> &str {
        &self.component_name
    }

    /// Name used inside the source document.
    pub fn raw_type_name(&self) -> &str {
        &self.raw_type_name
    }

    /// Name assigned in the generated output, once known.
    pub fn generated_type_name(&self) -> Option<&str> {
        self.generated_type_name.as_deref()
    }

    /// Field definitions.
    pub fn properties(&self) -> Option<&IndexMap<String, FieldSchema>> {
        self.properties.as_ref()
    }

    /// Whether the type needs the relaxed-types annotation.
    ///
    /// Only meaningful after [`SchemaRegistry::classify`].
    pub fn is_relaxed_type(&self) -> bool {
        self.is_relaxed_type
    }

    /// Reserved for unconstrained (`any`) components.
    pub fn is_untyped(&self) -> bool {
        self.is_untyped
    }
}

/// Outgoing edges of one field, extracted before recursing.
struct FieldLink {
    field: String,
    has_enum: bool,
    target: Option<String>,
    item_target: Option<String>,
}

impl FieldLink {
    fn new(field: &str, schema: &FieldSchema) -> Self {
        Self {
            field: field.to_string(),
            has_enum: schema.has_enum(),
            target: schema.reference.clone(),
            item_target: schema.item_reference().map(str::to_string),
        }
    }
}

/// Registry of schema components keyed by reference id.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    entries: Vec<SchemaEntry>,
    by_ref: HashMap<String, usize>,
    raw_to_generated: HashMap<String, String>,
    generated_to_raw: HashMap<String, String>,
    raw_to_ref: HashMap<String, String>,
    generated_types: IndexSet<String>,
    classified: bool,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a component and returns its reference id.
    ///
    /// A component without a `$ref` gets `#/customref/{kind}/{raw name}`.
    /// Registering an existing reference id replaces its data in place; a
    /// relaxed flag already set on it is kept.
    pub fn add_component(&mut self, component: ComponentDescriptor) -> String {
        let reference = match component.reference {
            Some(r) => r,
            None => {
                let synthesized = format!(
                    "#/customref/{}/{}",
                    component.component_name, component.raw_type_name
                );
                tracing::warn!(
                    component = %component.raw_type_name,
                    reference = %synthesized,
                    "$ref missing for component, synthesizing one"
                );
                synthesized
            }
        };

        let mut entry = SchemaEntry {
            reference: reference.clone(),
            component_name: component.component_name,
            generated_type_name: self.raw_to_generated.get(&component.raw_type_name).cloned(),
            raw_type_name: component.raw_type_name,
            properties: component.properties,
            is_relaxed_type: false,
            is_untyped: false,
        };

        self.raw_to_ref
            .insert(entry.raw_type_name.clone(), reference.clone());

        match self.by_ref.get(&reference) {
            Some(&idx) => {
                entry.is_relaxed_type = self.entries[idx].is_relaxed_type;
                self.entries[idx] = entry;
            }
            None => {
                self.by_ref.insert(reference.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
        self.classified = false;
        reference
    }

    /// Records a raw-name to generated-name assignment.
    pub fn add_type_name(&mut self, event: TypeNameEvent) {
        let raw = event
            .raw_type_name
            .unwrap_or_else(|| event.type_name.clone());
        self.raw_to_generated
            .insert(raw.clone(), event.type_name.clone());
        self.generated_to_raw.insert(event.type_name.clone(), raw);
        if event.schema_type == Some(TypeNameKind::TypeName) {
            self.generated_types.insert(event.type_name);
        }
    }

    /// Every generated type name seen so far, in discovery order.
    pub fn type_names(&self) -> &IndexSet<String> {
        &self.generated_types
    }

    /// Looks a component up by its generated type name.
    pub fn component_by_type_name(&self, type_name: &str) -> Option<&SchemaEntry> {
        let raw = self.generated_to_raw.get(type_name)?;
        let reference = self.raw_to_ref.get(raw)?;
        self.component_by_ref(reference)
    }

    /// Looks a component up by reference id.
    pub fn component_by_ref(&self, reference: &str) -> Option<&SchemaEntry> {
        self.by_ref.get(reference).map(|&idx| &self.entries[idx])
    }

    /// All components in registration order.
    pub fn entries(&self) -> impl Iterator<Item = &SchemaEntry> {
        self.entries.iter()
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once [`Self::classify`] has completed since the last registration.
    pub fn is_classified(&self) -> bool {
        self.classified
    }

    /// Resolves the relaxed flag of every component.
    ///
    /// Each component is the root of its own depth-first walk with a fresh
    /// visited set, so a node is expanded at most once per root. Flags are
    /// only ever raised, which makes repeated runs idempotent.
    pub fn classify(&mut self) -> AppResult<()> {
        for root in 0..self.entries.len() {
            let mut visited = HashSet::new();
            self.classify_node(root, &mut visited)?;
        }
        self.classified = true;
        Ok(())
    }

    fn classify_node(&mut self, idx: usize, visited: &mut HashSet<usize>) -> AppResult<()> {
        if !visited.insert(idx) {
            return Ok(());
        }

        // Names are assigned lazily by the parser, so re-resolve here.
        if let Some(generated) = self.raw_to_generated.get(&self.entries[idx].raw_type_name) {
            self.entries[idx].generated_type_name = Some(generated.clone());
        }

        let links: Vec<FieldLink> = match &self.entries[idx].properties {
            Some(props) => props.iter().map(|(k, v)| FieldLink::new(k, v)).collect(),
            None => return Ok(()),
        };

        for link in links {
            if link.has_enum {
                self.mark_relaxed(idx, &link.field, "is an enum");
            }
            for target in [&link.target, &link.item_target].into_iter().flatten() {
                let target_idx = self.resolve(idx, target)?;
                self.classify_node(target_idx, visited)?;
                if self.entries[target_idx].is_relaxed_type {
                    self.mark_relaxed(idx, &link.field, "references a relaxed type");
                }
            }
        }
        Ok(())
    }

    fn resolve(&self, from: usize, target: &str) -> AppResult<usize> {
        self.by_ref
            .get(target)
            .copied()
            .ok_or_else(|| AppError::UnresolvedReference {
                from: self.entries[from].reference.clone(),
                target: target.to_string(),
            })
    }

    fn mark_relaxed(&mut self, idx: usize, field: &str, reason: &str) {
        let entry = &mut self.entries[idx];
        if !entry.is_relaxed_type {
            tracing::debug!(
                field,
                component = %entry.reference,
                "property {}, marking component as a relaxed type",
                reason
            );
        }
        entry.is_relaxed_type = true;
    }
}
