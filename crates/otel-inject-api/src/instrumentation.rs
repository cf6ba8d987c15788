//! The Instrumentation custom resource
//!
//! Immutable configuration for one instrumentation setup: where telemetry
//! goes, how trace context propagates, how spans are sampled, which resource
//! attributes to stamp, and the per-language runtime images. A single
//! resource may carry configuration for several languages at once.
//!
//! The engine treats every value as opaque: sampler arguments, propagator
//! names, and endpoints are threaded through, never interpreted.

use crate::core::ObjectMeta;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A decoded Instrumentation resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Instrumentation {
    pub metadata: ObjectMeta,
    pub spec: InstrumentationSpec,
}

/// The configurable surface of an Instrumentation resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstrumentationSpec {
    pub exporter: Exporter,
    /// Ordered propagator names, joined with commas on injection.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub propagators: Vec<String>,
    pub sampler: Sampler,
    /// Resource attributes defined on the resource itself. Insertion order
    /// is irrelevant; consumers sort keys for determinism.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub resource_attributes: HashMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub java: Option<LanguageRuntimeSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodejs: Option<LanguageRuntimeSpec>,
}

/// Telemetry export target.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Exporter {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub endpoint: String,
}

/// Span sampling policy. The argument is optional and only meaningful to
/// the SDK consuming it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sampler {
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub sampler_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub argument: String,
}

/// Per-language runtime configuration: the image carrying that language's
/// instrumentation artifact.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageRuntimeSpec {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,
}
