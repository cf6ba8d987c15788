//! Environment-variable injection
//!
//! Every reserved variable follows the same rule: a name the user already
//! defined on the container is left untouched, whatever its value. The one
//! exception is `OTEL_RESOURCE_ATTRIBUTES`, which merges through
//! [`crate::attrs`] instead of skipping, so workload-derived attributes can
//! still land next to user-defined ones.

use crate::{attrs, constants};
use otel_inject_api::{Container, EnvVar};

/// Append `{name, value}` unless the name is already present.
///
/// Returns whether an entry was actually injected. Pre-existing entries keep
/// their order and value; new entries append at the end in request order.
pub fn ensure(container: &mut Container, name: &str, value: &str) -> bool {
    if find(container, name).is_some() {
        tracing::debug!(
            container = %container.name,
            name,
            "environment variable already defined, skipping injection"
        );
        return false;
    }
    container.env.push(EnvVar::new(name, value));
    true
}

/// Inject or merge the resource-attributes variable.
///
/// When the variable is absent the merged candidate list is appended as a
/// new entry; when present, its value is replaced in place with the merge
/// result, preserving the existing content as a prefix.
pub fn ensure_resource_attributes(container: &mut Container, candidates: &[(String, String)]) {
    match find(container, constants::ENV_OTEL_RESOURCE_ATTRIBUTES) {
        Some(index) => {
            let merged = attrs::merge(&container.env[index].value, candidates);
            container.env[index].value = merged;
        }
        None => {
            let merged = attrs::merge("", candidates);
            container
                .env
                .push(EnvVar::new(constants::ENV_OTEL_RESOURCE_ATTRIBUTES, merged));
        }
    }
}

fn find(container: &Container, name: &str) -> Option<usize> {
    container.env.iter().position(|var| var.name == name)
}
