//! Type-field factory: validators bound to a declared type.
//!
//! A field is declared either by name ([`type_field`]) or by a Rust type
//! ([`infer_field`]). The declared type decides which bounded rules the
//! validator accepts; it does not otherwise restrict the fluent methods.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use regex::Regex;
use thiserror::Error;

use crate::types::SupportedType;
use crate::value::{Function, Symbol, Value};

use super::validator::Validator;

/// Errors from declaring a field type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeFieldError {
    #[error("Unsupported type: {0}")]
    Unsupported(String),

    #[error("Cannot infer type name from {0}")]
    Uninferable(&'static str),
}

/// Create a validator for a field declared by type name.
///
/// The name is matched case-insensitively against the supported tags.
pub fn type_field(type_name: &str) -> Result<Validator, TypeFieldError> {
    let declared = type_name
        .to_lowercase()
        .parse::<SupportedType>()
        .map_err(|_| TypeFieldError::Unsupported(type_name.to_string()))?;

    tracing::trace!(declared = %declared, "Field declared");
    Ok(Validator::new(declared))
}

/// Create a validator for a field whose type is inferred from `T`.
///
/// Fails for types that carry no usable tag: the dynamic [`Value`] and
/// anything tagged `undefined` or `null`.
pub fn infer_field<T: TypeTag + ?Sized>() -> Result<Validator, TypeFieldError> {
    match T::type_tag() {
        Some(SupportedType::Undefined | SupportedType::Null) | None => {
            Err(TypeFieldError::Uninferable(std::any::type_name::<T>()))
        }
        Some(declared) => Ok(Validator::new(declared)),
    }
}

/// Rust types with a known semantic tag.
pub trait TypeTag {
    /// The tag, or `None` when the type is dynamic.
    fn type_tag() -> Option<SupportedType>;
}

macro_rules! type_tag {
    ($tag:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl TypeTag for $ty {
                fn type_tag() -> Option<SupportedType> {
                    Some($tag)
                }
            }
        )+
    };
}

type_tag!(SupportedType::String => String, str, char);
type_tag!(SupportedType::Number => i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
type_tag!(SupportedType::Boolean => bool);
type_tag!(SupportedType::Date => NaiveDate, NaiveDateTime);
type_tag!(SupportedType::RegExp => Regex);
type_tag!(SupportedType::Function => Function);
type_tag!(SupportedType::Symbol => Symbol);
type_tag!(SupportedType::Object => serde_json::Map<String, serde_json::Value>);
type_tag!(SupportedType::Undefined => ());

impl<Tz: TimeZone> TypeTag for DateTime<Tz> {
    fn type_tag() -> Option<SupportedType> {
        Some(SupportedType::Date)
    }
}

impl<T> TypeTag for Vec<T> {
    fn type_tag() -> Option<SupportedType> {
        Some(SupportedType::Array)
    }
}

impl<T> TypeTag for [T] {
    fn type_tag() -> Option<SupportedType> {
        Some(SupportedType::Array)
    }
}

impl<K, V, S> TypeTag for HashMap<K, V, S> {
    fn type_tag() -> Option<SupportedType> {
        Some(SupportedType::Map)
    }
}

impl<K, V> TypeTag for BTreeMap<K, V> {
    fn type_tag() -> Option<SupportedType> {
        Some(SupportedType::Map)
    }
}

impl<T, S> TypeTag for HashSet<T, S> {
    fn type_tag() -> Option<SupportedType> {
        Some(SupportedType::Set)
    }
}

impl<T> TypeTag for BTreeSet<T> {
    fn type_tag() -> Option<SupportedType> {
        Some(SupportedType::Set)
    }
}

impl<T: TypeTag + ?Sized> TypeTag for &T {
    fn type_tag() -> Option<SupportedType> {
        T::type_tag()
    }
}

impl TypeTag for Value {
    fn type_tag() -> Option<SupportedType> {
        None
    }
}
