//! Reserved names shared across the engine
//!
//! Environment variable names, workload-derived resource-attribute keys, the
//! shared volume contract with the per-language init containers, and the
//! annotation keys that request injection. These are process-wide constants;
//! the init-container images are built against the same mount path.

/// Service name consumed by every language SDK.
pub const ENV_OTEL_SERVICE_NAME: &str = "OTEL_SERVICE_NAME";

/// OTLP export target.
pub const ENV_OTEL_EXPORTER_OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

/// Comma-separated `key=value` resource attributes. The only variable the
/// engine merges into rather than skips when already present.
pub const ENV_OTEL_RESOURCE_ATTRIBUTES: &str = "OTEL_RESOURCE_ATTRIBUTES";

/// Comma-separated propagator names.
pub const ENV_OTEL_PROPAGATORS: &str = "OTEL_PROPAGATORS";

/// Sampler policy name.
pub const ENV_OTEL_TRACES_SAMPLER: &str = "OTEL_TRACES_SAMPLER";

/// Sampler policy argument, only injected together with the sampler type.
pub const ENV_OTEL_TRACES_SAMPLER_ARG: &str = "OTEL_TRACES_SAMPLER_ARG";

/// JVM loader variable targeted by the Java wiring.
pub const ENV_JAVA_TOOL_OPTIONS: &str = "JAVA_TOOL_OPTIONS";

/// Node.js loader variable targeted by the NodeJS wiring.
pub const ENV_NODE_OPTIONS: &str = "NODE_OPTIONS";

/// Resource-attribute key for the target container name.
pub const ATTR_CONTAINER_NAME: &str = "k8s.container.name";

/// Resource-attribute key for the pod namespace.
pub const ATTR_NAMESPACE_NAME: &str = "k8s.namespace.name";

/// Resource-attribute key for the pod name.
pub const ATTR_POD_NAME: &str = "k8s.pod.name";

/// Name of the shared empty-dir volume, created once per pod and reused by
/// every language wired onto it.
pub const VOLUME_NAME: &str = "opentelemetry-auto-instrumentation";

/// Path where the shared volume is mounted in init and target containers.
pub const MOUNT_PATH: &str = "/otel-auto-instrumentation";

/// Pod/namespace annotation requesting Java injection.
pub const ANNOTATION_INJECT_JAVA: &str = "instrumentation.opentelemetry.io/inject-java";

/// Pod/namespace annotation requesting NodeJS injection.
pub const ANNOTATION_INJECT_NODEJS: &str = "instrumentation.opentelemetry.io/inject-nodejs";

/// Pod annotation narrowing which containers get wired; comma-separated
/// container names. Unset targets every application container.
pub const ANNOTATION_CONTAINER_NAMES: &str = "instrumentation.opentelemetry.io/container-names";
