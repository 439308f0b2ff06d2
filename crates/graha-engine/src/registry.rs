//! Per-session instance table.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use graha_core::ObjectKey;

use crate::catalog::DescriptorCatalog;
use crate::error::EngineError;
use crate::object::ResolvableObject;

/// Hands out at most one [`ResolvableObject`] per key for the lifetime of
/// the owning session.
///
/// Recursive lookups made while resolving return the same instance, so each
/// object is resolved at most once per session.
pub struct ObjectRegistry<'a> {
    catalog: &'a DescriptorCatalog,
    instances: RefCell<HashMap<ObjectKey, Rc<ResolvableObject<'a>>>>,
}

impl<'a> ObjectRegistry<'a> {
    pub(crate) fn new(catalog: &'a DescriptorCatalog) -> Self {
        Self {
            catalog,
            instances: RefCell::new(HashMap::new()),
        }
    }

    /// The instance for `key`, constructing and registering it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownObjectKey`] if the catalog has no
    /// descriptor for `key`.
    pub fn get(&self, key: ObjectKey) -> Result<Rc<ResolvableObject<'a>>, EngineError> {
        if let Some(object) = self.instances.borrow().get(&key) {
            return Ok(Rc::clone(object));
        }

        let descriptor = self
            .catalog
            .descriptor(key)
            .ok_or(EngineError::UnknownObjectKey(key))?;
        let object = Rc::new(ResolvableObject::new(
            descriptor,
            self.catalog.character_rule(descriptor),
        ));
        tracing::debug!(%key, "registered object");

        self.instances.borrow_mut().insert(key, Rc::clone(&object));
        Ok(object)
    }

    #[must_use]
    pub fn contains(&self, key: ObjectKey) -> bool {
        self.instances.borrow().contains_key(&key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.borrow().is_empty()
    }
}
