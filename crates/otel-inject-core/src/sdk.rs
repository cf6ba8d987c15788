//! Cross-language SDK configuration
//!
//! Populates the shared observability environment on one target container:
//! service name, exporter endpoint, resource attributes, propagators, and
//! sampler. Applying the same configuration twice is a no-op — on the second
//! pass every variable is already present and the skip rule takes over.

use crate::{constants, env};
use otel_inject_api::{InstrumentationSpec, Namespace, Pod};

/// Apply the common SDK configuration to the container at `index`.
///
/// The container's own name doubles as the default service name. Sampler
/// type and argument are gated together: when the type variable is already
/// present on the container, the argument is not injected either.
pub fn apply(spec: &InstrumentationSpec, ns: &Namespace, pod: &mut Pod, index: usize) {
    let pod_name = pod.metadata.name.clone();
    let container = &mut pod.spec.containers[index];
    let service_name = container.name.clone();

    env::ensure(container, constants::ENV_OTEL_SERVICE_NAME, &service_name);
    env::ensure(
        container,
        constants::ENV_OTEL_EXPORTER_OTLP_ENDPOINT,
        &spec.exporter.endpoint,
    );

    let candidates = resource_candidates(spec, &service_name, &ns.metadata.name, &pod_name);
    env::ensure_resource_attributes(container, &candidates);

    if !spec.propagators.is_empty() {
        env::ensure(
            container,
            constants::ENV_OTEL_PROPAGATORS,
            &spec.propagators.join(","),
        );
    }

    if !spec.sampler.sampler_type.is_empty() {
        let injected = env::ensure(
            container,
            constants::ENV_OTEL_TRACES_SAMPLER,
            &spec.sampler.sampler_type,
        );
        if injected && !spec.sampler.argument.is_empty() {
            env::ensure(
                container,
                constants::ENV_OTEL_TRACES_SAMPLER_ARG,
                &spec.sampler.argument,
            );
        }
    }
}

/// Resource-attribute candidates in precedence order: resource-defined
/// attributes sorted by key, then the workload-derived identity keys.
///
/// Pods created through a generated name have no name at admission time;
/// the pod-name candidate is omitted rather than emitted empty.
fn resource_candidates(
    spec: &InstrumentationSpec,
    container_name: &str,
    namespace_name: &str,
    pod_name: &str,
) -> Vec<(String, String)> {
    let mut configured: Vec<(&String, &String)> = spec.resource_attributes.iter().collect();
    configured.sort_by(|left, right| left.0.cmp(right.0));

    let mut candidates: Vec<(String, String)> = configured
        .into_iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    candidates.push((
        constants::ATTR_CONTAINER_NAME.to_string(),
        container_name.to_string(),
    ));
    candidates.push((
        constants::ATTR_NAMESPACE_NAME.to_string(),
        namespace_name.to_string(),
    ));
    if !pod_name.is_empty() {
        candidates.push((constants::ATTR_POD_NAME.to_string(), pod_name.to_string()));
    }
    candidates
}
