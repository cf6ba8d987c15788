//! Instrumentation-injection engine
//!
//! Given a decoded Instrumentation resource and a candidate workload (a pod
//! plus its namespace), this crate deterministically rewrites the workload so
//! the application emits telemetry at runtime without code changes. It is the
//! mutating half of an auto-instrumentation admission webhook; the webhook
//! transport, CRD handling, and patch encoding live with the callers.
//!
//! # Merge policy
//!
//! Every configurable value follows one rule: a value the user already
//! defined wins. Reserved variables are skipped when present, and the
//! resource-attributes variable is merged — existing content is kept
//! byte-for-byte and only provably absent keys are appended.
//!
//! # Shape
//!
//! Data flows one way through pure, synchronous functions:
//! orchestrator ([`inject`]) → per-language wiring ([`sidecar`]) → SDK
//! configuration ([`sdk`]) → env injection and attribute merging ([`env`],
//! [`attrs`]). No state survives an invocation; the pod is an owned value
//! threaded through each step.
//!
//! # Example
//!
//! ```rust,ignore
//! use otel_inject_core::LanguageInstrumentations;
//!
//! let requests = LanguageInstrumentations {
//!     java: Some(&instrumentation),
//!     ..LanguageInstrumentations::default()
//! };
//! let mutated = requests.inject(&namespace, pod)?;
//! ```

pub mod annotations;
pub mod attrs;
pub mod constants;
pub mod env;
pub mod error;
pub mod inject;
pub mod language;
pub mod sdk;
pub mod sidecar;

pub use annotations::InjectionDirective;
pub use error::{InjectError, InjectResult};
pub use inject::LanguageInstrumentations;
pub use language::Language;
