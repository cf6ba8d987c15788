//! Per-language sidecar wiring
//!
//! One language's wiring attaches the shared artifact volume, an init
//! container staging that language's instrumentation artifact into it, and —
//! on every target container — the volume mount, the loader variable, and
//! the common SDK configuration. All languages share the one volume; init
//! containers and loader variables are per-language.

use crate::error::{InjectError, InjectResult};
use crate::language::Language;
use crate::{annotations, constants, env, sdk};
use otel_inject_api::{Container, Instrumentation, Namespace, Pod, PodSpec, Volume, VolumeMount};

/// Wire one language's instrumentation onto the pod.
///
/// Fails before touching the pod when the language's runtime configuration
/// carries no image, so an error never leaves half of this language's wiring
/// behind.
pub fn wire(
    language: Language,
    inst: &Instrumentation,
    ns: &Namespace,
    pod: &mut Pod,
) -> InjectResult<()> {
    let image = language
        .runtime(&inst.spec)
        .map(|runtime| runtime.image.clone())
        .filter(|image| !image.is_empty())
        .ok_or_else(|| InjectError::missing_image(language))?;

    ensure_shared_volume(&mut pod.spec);
    pod.spec.init_containers.push(init_container(language, &image));

    for index in annotations::target_container_indexes(pod) {
        let container = &mut pod.spec.containers[index];
        mount_shared_volume(container);
        env::ensure(container, language.loader_env(), language.loader_argument());
        sdk::apply(&inst.spec, ns, pod, index);
    }
    Ok(())
}

/// Create the shared empty-dir volume once; later languages reuse it.
fn ensure_shared_volume(spec: &mut PodSpec) {
    if spec
        .volumes
        .iter()
        .any(|volume| volume.name == constants::VOLUME_NAME)
    {
        return;
    }
    spec.volumes.push(Volume::empty_dir(constants::VOLUME_NAME));
}

/// Mount the shared volume on a target container, once per container even
/// when several languages target it.
fn mount_shared_volume(container: &mut Container) {
    if container
        .volume_mounts
        .iter()
        .any(|mount| mount.name == constants::VOLUME_NAME)
    {
        return;
    }
    container
        .volume_mounts
        .push(VolumeMount::new(constants::VOLUME_NAME, constants::MOUNT_PATH));
}

fn init_container(language: Language, image: &str) -> Container {
    Container {
        name: language.init_container_name().to_string(),
        image: image.to_string(),
        command: language.copy_command(),
        volume_mounts: vec![VolumeMount::new(
            constants::VOLUME_NAME,
            constants::MOUNT_PATH,
        )],
        ..Container::default()
    }
}
