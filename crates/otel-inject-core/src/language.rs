//! Supported instrumentation languages
//!
//! Per-language behavior is a closed set of variants resolved statically:
//! adding a language means adding a variant and letting the compiler point
//! at every match that needs a new arm.

use crate::constants;
use otel_inject_api::{InstrumentationSpec, LanguageRuntimeSpec};
use std::fmt;

/// A language runtime the engine knows how to wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Java,
    NodeJs,
}

impl Language {
    /// Every supported language, in the fixed order the orchestrator
    /// iterates them.
    pub const ALL: [Language; 2] = [Language::Java, Language::NodeJs];

    /// Lowercase identifier used in annotation keys and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Language::Java => "java",
            Language::NodeJs => "nodejs",
        }
    }

    /// The annotation requesting injection for this language.
    pub fn inject_annotation(self) -> &'static str {
        match self {
            Language::Java => constants::ANNOTATION_INJECT_JAVA,
            Language::NodeJs => constants::ANNOTATION_INJECT_NODEJS,
        }
    }

    /// Name of this language's staging init container. Unique per language
    /// so several languages can be layered onto one pod.
    pub fn init_container_name(self) -> &'static str {
        match self {
            Language::Java => "opentelemetry-auto-instrumentation-java",
            Language::NodeJs => "opentelemetry-auto-instrumentation-nodejs",
        }
    }

    /// The loader variable the target runtime reads at startup.
    pub fn loader_env(self) -> &'static str {
        match self {
            Language::Java => constants::ENV_JAVA_TOOL_OPTIONS,
            Language::NodeJs => constants::ENV_NODE_OPTIONS,
        }
    }

    /// The fixed loader argument pointing at the staged artifact.
    pub fn loader_argument(self) -> &'static str {
        match self {
            Language::Java => "-javaagent:/otel-auto-instrumentation/javaagent.jar",
            Language::NodeJs => "--require /otel-auto-instrumentation/autoinstrumentation.js",
        }
    }

    /// Command staging this language's artifact from its image into the
    /// shared volume.
    pub fn copy_command(self) -> Vec<String> {
        let command: &[&str] = match self {
            Language::Java => &["cp", "/javaagent.jar", "/otel-auto-instrumentation/javaagent.jar"],
            Language::NodeJs => &["cp", "-a", "/autoinstrumentation/.", "/otel-auto-instrumentation/"],
        };
        command.iter().map(|part| part.to_string()).collect()
    }

    /// This language's runtime record on an instrumentation spec, if
    /// configured.
    pub fn runtime(self, spec: &InstrumentationSpec) -> Option<&LanguageRuntimeSpec> {
        match self {
            Language::Java => spec.java.as_ref(),
            Language::NodeJs => spec.nodejs.as_ref(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
