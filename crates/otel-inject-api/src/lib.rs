//! Object model for the auto-instrumentation injection engine
//!
//! This crate holds the decoded records the engine consumes: a minimal view
//! of the Kubernetes pod/namespace objects handed to the admission webhook,
//! and the Instrumentation custom resource that drives injection.
//!
//! The types are deliberately schema-light. Validation, defaulting, and the
//! admission transport all live with the callers; here the objects are plain
//! data with Kubernetes camelCase JSON names so that payloads round-trip.

pub mod core;
pub mod instrumentation;

pub use crate::core::{
    Container, EmptyDirVolumeSource, EnvVar, Namespace, ObjectMeta, Pod, PodSpec, Volume,
    VolumeMount,
};
pub use crate::instrumentation::{
    Exporter, Instrumentation, InstrumentationSpec, LanguageRuntimeSpec, Sampler,
};
