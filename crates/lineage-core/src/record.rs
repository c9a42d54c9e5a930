//! Derivation records: logged edges from source identities to a target identity.
//!
//! A record is rendered to text exactly once, right before it is handed to a
//! [`ProvenanceLog`](crate::log::ProvenanceLog). There is no parsing contract
//! for the rendered form.
//!
//! # Examples
//!
//! ```
//! use lineage_core::{DerivationRecord, Identity, RecordSource};
//!
//! let record = DerivationRecord::new(Identity::from_u128(1), Identity::from_u128(2));
//! assert_eq!(
//!     record.to_string(),
//!     "(00000000-0000-0000-0000-000000000001, 00000000-0000-0000-0000-000000000002)"
//! );
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LogError;
use crate::identity::Identity;

/// Where a derived value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordSource {
    /// One input identity.
    Single(Identity),
    /// An ordered sequence of input identities.
    Sequence(Vec<Identity>),
    /// An element of a shaped collection.
    ArrayOrigin {
        container: Identity,
        shape: Vec<usize>,
        coordinate: Vec<usize>,
    },
}

impl RecordSource {
    /// Array-origin source for the element at `coordinate`.
    pub fn array_origin(container: Identity, shape: &[usize], coordinate: &[usize]) -> Self {
        Self::ArrayOrigin {
            container,
            shape: shape.to_vec(),
            coordinate: coordinate.to_vec(),
        }
    }

    /// Every identity embedded in this source, in order.
    pub fn identities(&self) -> Vec<Identity> {
        match self {
            Self::Single(id) => vec![*id],
            Self::Sequence(ids) => ids.clone(),
            Self::ArrayOrigin { container, .. } => vec![*container],
        }
    }
}

impl From<Identity> for RecordSource {
    fn from(id: Identity) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<Identity>> for RecordSource {
    fn from(ids: Vec<Identity>) -> Self {
        Self::Sequence(ids)
    }
}

impl From<&[Identity]> for RecordSource {
    fn from(ids: &[Identity]) -> Self {
        Self::Sequence(ids.to_vec())
    }
}

impl fmt::Display for RecordSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(id) => write!(f, "{id}"),
            Self::Sequence(ids) => {
                f.write_str("[")?;
                for (i, id) in ids.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{id}")?;
                }
                f.write_str("]")
            }
            Self::ArrayOrigin {
                container,
                shape,
                coordinate,
            } => {
                write!(f, "({container}, ")?;
                write_tuple(f, shape)?;
                f.write_str(", ")?;
                write_tuple(f, coordinate)?;
                f.write_str(")")
            }
        }
    }
}

/// Tuple rendering for shapes and coordinates: `(2, 2)`, `(3,)`, `()`.
fn write_tuple(f: &mut fmt::Formatter<'_>, items: &[usize]) -> fmt::Result {
    f.write_str("(")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    if items.len() == 1 {
        f.write_str(",")?;
    }
    f.write_str(")")
}

/// One logged derivation edge: `source` produced `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivationRecord {
    pub source: RecordSource,
    pub target: Identity,
}

impl DerivationRecord {
    pub fn new(source: impl Into<RecordSource>, target: Identity) -> Self {
        Self {
            source: source.into(),
            target,
        }
    }

    /// Render the record for a log sink in the requested format.
    pub fn render(&self, format: RecordFormat) -> Result<String, LogError> {
        match format {
            RecordFormat::Tuple => Ok(self.to_string()),
            RecordFormat::Json => {
                serde_json::to_string(self).map_err(|e| LogError::Serialization(e.to_string()))
            }
        }
    }
}

impl fmt::Display for DerivationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.source, self.target)
    }
}

/// Textual rendering used when writing records to a sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordFormat {
    /// `(source, target)` tuple rendering.
    #[default]
    Tuple,
    /// One JSON object per record: `{"source": ..., "target": ...}`.
    Json,
}

impl FromStr for RecordFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tuple" => Ok(Self::Tuple),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown record format '{other}' (expected tuple or json)")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u128) -> Identity {
        Identity::from_u128(n)
    }

    #[test]
    fn sequence_source_renders_as_list() {
        let record = DerivationRecord::new(vec![id(1), id(2)], id(3));
        let rendered = record.to_string();
        assert!(rendered.starts_with("([00000000-0000-0000-0000-000000000001, "));
        assert!(rendered.ends_with("0002], 00000000-0000-0000-0000-000000000003)"));
    }

    #[test]
    fn array_origin_renders_shape_and_coordinate_tuples() {
        let source = RecordSource::array_origin(id(9), &[2, 2], &[0, 1]);
        let record = DerivationRecord::new(source, id(10));
        assert_eq!(
            record.to_string(),
            "((00000000-0000-0000-0000-000000000009, (2, 2), (0, 1)), \
             00000000-0000-0000-0000-00000000000a)"
        );
    }

    #[test]
    fn one_dimensional_tuples_keep_trailing_comma() {
        let source = RecordSource::array_origin(id(1), &[3], &[2]);
        assert!(source.to_string().ends_with(", (3,), (2,))"));
    }

    #[test]
    fn json_rendering_is_structured() {
        let source = RecordSource::array_origin(id(1), &[3, 1], &[2, 0]);
        let record = DerivationRecord::new(source, id(2));
        let json: serde_json::Value =
            serde_json::from_str(&record.render(RecordFormat::Json).unwrap()).unwrap();
        assert_eq!(json["source"]["shape"], serde_json::json!([3, 1]));
        assert_eq!(json["source"]["coordinate"], serde_json::json!([2, 0]));
        assert_eq!(json["target"], "00000000-0000-0000-0000-000000000002");
    }

    #[test]
    fn record_format_parses_case_insensitively() {
        assert_eq!("JSON".parse::<RecordFormat>().unwrap(), RecordFormat::Json);
        assert_eq!(" tuple ".parse::<RecordFormat>().unwrap(), RecordFormat::Tuple);
        assert!("yaml".parse::<RecordFormat>().is_err());
    }
}
