//! Injection directives from workload annotations
//!
//! Whether a pod gets instrumented, and with which Instrumentation resource,
//! is declared through annotations on the pod or its namespace. Resolving an
//! annotation into a directive is pure logic; looking up the named resource
//! stays with the caller.

use crate::constants;
use crate::language::Language;
use otel_inject_api::{ObjectMeta, Pod};

/// What an effective inject annotation asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InjectionDirective {
    /// Injection explicitly turned off.
    Disabled,
    /// Inject using the default instrumentation instance.
    Enabled,
    /// Inject using the named instrumentation instance.
    Instance(String),
}

/// Resolve the directive for one language, or `None` when neither the pod
/// nor the namespace carries the annotation.
pub fn directive(
    ns: &ObjectMeta,
    pod: &ObjectMeta,
    language: Language,
) -> Option<InjectionDirective> {
    let value = effective_annotation(ns, pod, language.inject_annotation())?;
    if value.eq_ignore_ascii_case("false") {
        Some(InjectionDirective::Disabled)
    } else if value.eq_ignore_ascii_case("true") {
        Some(InjectionDirective::Enabled)
    } else {
        Some(InjectionDirective::Instance(value.to_string()))
    }
}

/// The effective annotation value across pod and namespace metadata.
///
/// An empty pod value defers to the namespace. A pod value other than
/// "true" — an instance name or "false" — is final. A pod "true" defers to
/// a more specific namespace value, unless the namespace says "false", in
/// which case the pod's explicit opt-in wins.
pub fn effective_annotation<'a>(
    ns: &'a ObjectMeta,
    pod: &'a ObjectMeta,
    key: &str,
) -> Option<&'a str> {
    let pod_value = annotation(pod, key);
    let ns_value = annotation(ns, key);

    let pod_value = match pod_value {
        None => return ns_value,
        Some(value) => value,
    };
    if !pod_value.eq_ignore_ascii_case("true") {
        return Some(pod_value);
    }
    match ns_value {
        Some(value) if value.eq_ignore_ascii_case("false") => Some(pod_value),
        Some(value) => Some(value),
        None => Some(pod_value),
    }
}

/// Indexes of the containers a wiring pass targets: the subset named by the
/// container-names annotation, or every application container when unset.
pub fn target_container_indexes(pod: &Pod) -> Vec<usize> {
    let selection = annotation(&pod.metadata, constants::ANNOTATION_CONTAINER_NAMES);
    match selection {
        None => (0..pod.spec.containers.len()).collect(),
        Some(names) => {
            let wanted: Vec<&str> = names.split(',').map(str::trim).collect();
            pod.spec
                .containers
                .iter()
                .enumerate()
                .filter(|(_, container)| wanted.contains(&container.name.as_str()))
                .map(|(index, _)| index)
                .collect()
        }
    }
}

fn annotation<'a>(meta: &'a ObjectMeta, key: &str) -> Option<&'a str> {
    meta.annotations
        .get(key)
        .map(String::as_str)
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use otel_inject_api::Container;
    use std::collections::HashMap;

    fn meta(pairs: &[(&str, &str)]) -> ObjectMeta {
        ObjectMeta {
            annotations: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..ObjectMeta::default()
        }
    }

    const KEY: &str = "instrumentation.opentelemetry.io/inject-java";

    #[test]
    fn test_namespace_value_used_when_pod_silent() {
        let ns = meta(&[(KEY, "my-inst")]);
        let pod = meta(&[]);
        assert_eq!(effective_annotation(&ns, &pod, KEY), Some("my-inst"));
    }

    #[test]
    fn test_pod_instance_name_is_final() {
        let ns = meta(&[(KEY, "ns-inst")]);
        let pod = meta(&[(KEY, "pod-inst")]);
        assert_eq!(effective_annotation(&ns, &pod, KEY), Some("pod-inst"));
    }

    #[test]
    fn test_pod_false_is_final() {
        let ns = meta(&[(KEY, "true")]);
        let pod = meta(&[(KEY, "false")]);
        assert_eq!(effective_annotation(&ns, &pod, KEY), Some("false"));
    }

    #[test]
    fn test_pod_true_defers_to_namespace_instance() {
        let ns = meta(&[(KEY, "ns-inst")]);
        let pod = meta(&[(KEY, "true")]);
        assert_eq!(effective_annotation(&ns, &pod, KEY), Some("ns-inst"));
    }

    #[test]
    fn test_pod_true_beats_namespace_false() {
        let ns = meta(&[(KEY, "false")]);
        let pod = meta(&[(KEY, "true")]);
        assert_eq!(effective_annotation(&ns, &pod, KEY), Some("true"));
    }

    #[test]
    fn test_absent_everywhere_is_none() {
        assert_eq!(effective_annotation(&meta(&[]), &meta(&[]), KEY), None);
    }

    #[test]
    fn test_directive_parsing() {
        let pod_true = meta(&[(KEY, "true")]);
        let pod_false = meta(&[(KEY, "False")]);
        let pod_named = meta(&[(KEY, "my-inst")]);
        let empty = meta(&[]);

        assert_eq!(
            directive(&empty, &pod_true, Language::Java),
            Some(InjectionDirective::Enabled)
        );
        assert_eq!(
            directive(&empty, &pod_false, Language::Java),
            Some(InjectionDirective::Disabled)
        );
        assert_eq!(
            directive(&empty, &pod_named, Language::Java),
            Some(InjectionDirective::Instance("my-inst".to_string()))
        );
        assert_eq!(directive(&empty, &empty, Language::Java), None);
        assert_eq!(directive(&empty, &pod_true, Language::NodeJs), None);
    }

    fn pod_with_containers(names: &[&str], annotations: &[(&str, &str)]) -> Pod {
        Pod {
            metadata: meta(annotations),
            spec: otel_inject_api::PodSpec {
                containers: names
                    .iter()
                    .map(|name| Container {
                        name: name.to_string(),
                        ..Container::default()
                    })
                    .collect(),
                ..otel_inject_api::PodSpec::default()
            },
        }
    }

    #[test]
    fn test_all_containers_targeted_by_default() {
        let pod = pod_with_containers(&["app", "sidecar"], &[]);
        assert_eq!(target_container_indexes(&pod), vec![0, 1]);
    }

    #[test]
    fn test_container_names_annotation_narrows_targets() {
        let pod = pod_with_containers(
            &["app", "proxy", "worker"],
            &[(
                "instrumentation.opentelemetry.io/container-names",
                "app, worker",
            )],
        );
        assert_eq!(target_container_indexes(&pod), vec![0, 2]);
    }

    #[test]
    fn test_unknown_selection_targets_nothing() {
        let pod = pod_with_containers(
            &["app"],
            &[("instrumentation.opentelemetry.io/container-names", "other")],
        );
        assert_eq!(target_container_indexes(&pod), Vec::<usize>::new());
    }

    #[test]
    fn test_meta_helper_ignores_empty_values() {
        let ns = meta(&[(KEY, "ns-inst")]);
        let pod = ObjectMeta {
            annotations: HashMap::from([(KEY.to_string(), String::new())]),
            ..ObjectMeta::default()
        };
        assert_eq!(effective_annotation(&ns, &pod, KEY), Some("ns-inst"));
    }
}
