//! Injection orchestration
//!
//! Collects the per-language instrumentation requests for a single pod and
//! applies each one in the fixed language order. Wiring is strictly
//! additive: no language rolls back another's mutations. Any language-level
//! configuration error fails the whole call — the admission decision is one
//! unit and no partial pod is returned.

use crate::error::InjectResult;
use crate::language::Language;
use crate::sidecar;
use otel_inject_api::{Instrumentation, Namespace, Pod};

/// The instrumentation requested for one pod, at most one resource per
/// supported language. Absent entries mean "not requested".
#[derive(Debug, Clone, Copy, Default)]
pub struct LanguageInstrumentations<'a> {
    pub java: Option<&'a Instrumentation>,
    pub nodejs: Option<&'a Instrumentation>,
}

impl<'a> LanguageInstrumentations<'a> {
    /// The request for one language, if any.
    pub fn get(&self, language: Language) -> Option<&'a Instrumentation> {
        match language {
            Language::Java => self.java,
            Language::NodeJs => self.nodejs,
        }
    }

    /// Whether no language is requested at all.
    pub fn is_empty(&self) -> bool {
        Language::ALL.iter().all(|language| self.get(*language).is_none())
    }

    /// Apply every requested language to the pod and return the mutated
    /// value.
    pub fn inject(&self, ns: &Namespace, mut pod: Pod) -> InjectResult<Pod> {
        for language in Language::ALL {
            if let Some(inst) = self.get(language) {
                tracing::debug!(
                    language = %language,
                    pod = %pod.metadata.name,
                    namespace = %ns.metadata.name,
                    "wiring auto-instrumentation"
                );
                sidecar::wire(language, inst, ns, &mut pod)?;
            }
        }
        Ok(pod)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants;
    use crate::error::InjectError;
    use otel_inject_api::{
        Container, Exporter, InstrumentationSpec, LanguageRuntimeSpec, ObjectMeta, PodSpec,
    };

    fn instrumentation(java: Option<&str>, nodejs: Option<&str>) -> Instrumentation {
        Instrumentation {
            metadata: ObjectMeta::default(),
            spec: InstrumentationSpec {
                exporter: Exporter {
                    endpoint: "https://collector:4317".to_string(),
                },
                java: java.map(|image| LanguageRuntimeSpec {
                    image: image.to_string(),
                }),
                nodejs: nodejs.map(|image| LanguageRuntimeSpec {
                    image: image.to_string(),
                }),
                ..InstrumentationSpec::default()
            },
        }
    }

    fn pod() -> Pod {
        Pod {
            spec: PodSpec {
                containers: vec![Container {
                    name: "app".to_string(),
                    ..Container::default()
                }],
                ..PodSpec::default()
            },
            ..Pod::default()
        }
    }

    #[test]
    fn test_empty_request_set_returns_pod_unchanged() {
        let requests = LanguageInstrumentations::default();
        assert!(requests.is_empty());
        let input = pod();
        let output = requests.inject(&Namespace::default(), input.clone()).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_two_languages_share_one_volume() {
        let inst = instrumentation(Some("java-img:1"), Some("node-img:1"));
        let requests = LanguageInstrumentations {
            java: Some(&inst),
            nodejs: Some(&inst),
        };

        let result = requests.inject(&Namespace::named("project1"), pod()).unwrap();

        let shared: Vec<_> = result
            .spec
            .volumes
            .iter()
            .filter(|volume| volume.name == constants::VOLUME_NAME)
            .collect();
        assert_eq!(shared.len(), 1);

        let init_names: Vec<&str> = result
            .spec
            .init_containers
            .iter()
            .map(|container| container.name.as_str())
            .collect();
        assert_eq!(
            init_names,
            vec![
                "opentelemetry-auto-instrumentation-java",
                "opentelemetry-auto-instrumentation-nodejs"
            ]
        );

        let app = &result.spec.containers[0];
        assert_eq!(app.volume_mounts.len(), 1);
        assert!(app.env.iter().any(|var| var.name == "JAVA_TOOL_OPTIONS"));
        assert!(app.env.iter().any(|var| var.name == "NODE_OPTIONS"));
        // The second language finds the SDK variables already present.
        let service_names: Vec<_> = app
            .env
            .iter()
            .filter(|var| var.name == "OTEL_SERVICE_NAME")
            .collect();
        assert_eq!(service_names.len(), 1);
    }

    #[test]
    fn test_language_error_fails_the_whole_call() {
        let valid = instrumentation(Some("java-img:1"), None);
        let broken = instrumentation(None, Some(""));
        let requests = LanguageInstrumentations {
            java: Some(&valid),
            nodejs: Some(&broken),
        };

        let err = requests.inject(&Namespace::default(), pod()).unwrap_err();
        assert_eq!(err, InjectError::missing_image(Language::NodeJs));
    }

    #[test]
    fn test_per_language_resources_can_differ() {
        let java_inst = instrumentation(Some("java-img:1"), None);
        let node_inst = instrumentation(None, Some("node-img:2"));
        let requests = LanguageInstrumentations {
            java: Some(&java_inst),
            nodejs: Some(&node_inst),
        };

        let result = requests.inject(&Namespace::default(), pod()).unwrap();
        assert_eq!(result.spec.init_containers[0].image, "java-img:1");
        assert_eq!(result.spec.init_containers[1].image, "node-img:2");
    }
}
