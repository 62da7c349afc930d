//! A settable value with an overridable default.
//!
//! `Property<T>` holds at most one explicit value and at most one convention.
//! Reads resolve to the explicit value when present, otherwise to the
//! convention. Once a value has been set, later conventions are recorded but
//! never observed.

use crate::utils::error::{PropertyError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a read of the property currently resolves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueSource {
    Explicit,
    Convention,
    Missing,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ValueSource::Explicit => "explicit",
            ValueSource::Convention => "convention",
            ValueSource::Missing => "missing",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property<T> {
    name: Option<String>,
    convention: Option<T>,
    explicit: Option<T>,
}

impl<T> Property<T> {
    pub fn new() -> Self {
        Self {
            name: None,
            convention: None,
            explicit: None,
        }
    }

    /// 建立帶名稱的屬性，名稱只用於錯誤訊息
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    pub fn with_convention(mut self, value: T) -> Self {
        self.convention(value);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Replaces the convention. Has no visible effect once a value is set.
    pub fn convention(&mut self, value: T) {
        self.convention = Some(value);
    }

    /// Sets the explicit value; last write wins.
    pub fn set(&mut self, value: T) {
        self.explicit = Some(value);
    }

    pub fn get(&self) -> Result<&T> {
        self.get_or_none().ok_or_else(|| PropertyError::NoValue {
            property: self.describe(),
        })
    }

    pub fn get_or_none(&self) -> Option<&T> {
        self.explicit.as_ref().or(self.convention.as_ref())
    }

    pub fn get_or_else(&self, default: T) -> T
    where
        T: Clone,
    {
        self.get_or_none().cloned().unwrap_or(default)
    }

    pub fn is_present(&self) -> bool {
        self.get_or_none().is_some()
    }

    pub fn value_source(&self) -> ValueSource {
        if self.explicit.is_some() {
            ValueSource::Explicit
        } else if self.convention.is_some() {
            ValueSource::Convention
        } else {
            ValueSource::Missing
        }
    }

    fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("property '{}'", name),
            None => "property".to_string(),
        }
    }
}

impl<T> Default for Property<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_is_used_while_unset() {
        let mut property = Property::new();
        property.convention(1);
        assert_eq!(*property.get().unwrap(), 1);
        assert_eq!(property.value_source(), ValueSource::Convention);
    }

    #[test]
    fn test_last_convention_wins() {
        let mut property = Property::new();
        property.convention("a");
        property.convention("b");
        assert_eq!(*property.get().unwrap(), "b");
    }

    #[test]
    fn test_set_overrides_convention() {
        let mut property = Property::new();
        property.convention("a");
        property.set("b");
        assert_eq!(*property.get().unwrap(), "b");
        assert_eq!(property.value_source(), ValueSource::Explicit);
    }

    #[test]
    fn test_explicit_value_shields_later_conventions() {
        let mut property = Property::new();
        property.convention("a");
        property.set("b");
        property.convention("c");
        assert_eq!(*property.get().unwrap(), "b");
    }

    #[test]
    fn test_set_without_convention() {
        let mut property = Property::new();
        property.set(42u32);
        assert_eq!(property.get_or_none(), Some(&42));
    }

    #[test]
    fn test_last_set_wins() {
        let mut property = Property::new();
        property.set("first");
        property.set("second");
        property.convention("ignored");
        assert_eq!(*property.get().unwrap(), "second");
    }

    #[test]
    fn test_empty_string_is_a_real_value() {
        let mut property = Property::new();
        property.convention("fallback".to_string());
        property.set(String::new());
        assert_eq!(property.get().unwrap(), "");
        assert_eq!(property.value_source(), ValueSource::Explicit);
    }

    #[test]
    fn test_get_on_fresh_property_fails() {
        let property: Property<String> = Property::new();
        assert!(!property.is_present());
        assert_eq!(property.value_source(), ValueSource::Missing);
        assert!(matches!(
            property.get(),
            Err(PropertyError::NoValue { property }) if property == "property"
        ));
    }

    #[test]
    fn test_named_property_appears_in_error() {
        let property: Property<String> = Property::named("greeting");
        assert_eq!(property.name(), Some("greeting"));
        let err = property.get().unwrap_err();
        assert!(err.to_string().contains("property 'greeting'"));
    }

    #[test]
    fn test_get_or_else() {
        let empty: Property<i32> = Property::default();
        assert_eq!(empty.get_or_else(7), 7);
        assert_eq!(empty.get_or_none(), None);

        let with_default = Property::new().with_convention(3);
        assert_eq!(with_default.get_or_else(7), 3);
    }
}
