use indexmap::IndexMap;
use tracing::debug;

use crate::error::{ThermometerError, ThermometerResult};
use crate::render::{FramePatch, RenderFrame, Renderer, frame_to_svg};

/// Retained-mode SVG backend.
///
/// Holds a set of named host containers, each of which can carry at most one
/// mounted scene. Patches are applied to the retained scene and markup is
/// produced on demand, so a container always serializes its latest state.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    containers: IndexMap<String, Option<RenderFrame>>,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an empty host container.
    #[must_use]
    pub fn with_container(mut self, container: impl Into<String>) -> Self {
        self.add_container(container);
        self
    }

    /// Registers an empty host container; an existing one is left as is.
    pub fn add_container(&mut self, container: impl Into<String>) {
        self.containers.entry(container.into()).or_insert(None);
    }

    #[must_use]
    pub fn has_container(&self, container: &str) -> bool {
        self.containers.contains_key(container)
    }

    #[must_use]
    pub fn is_mounted(&self, container: &str) -> bool {
        matches!(self.containers.get(container), Some(Some(_)))
    }

    /// Retained scene mounted in `container`, if any.
    #[must_use]
    pub fn frame(&self, container: &str) -> Option<&RenderFrame> {
        self.containers.get(container).and_then(Option::as_ref)
    }

    /// Current SVG markup of `container`, if a scene is mounted.
    #[must_use]
    pub fn svg_markup(&self, container: &str) -> Option<String> {
        self.frame(container).map(frame_to_svg)
    }

    /// Names of containers that currently host a scene, in registration order.
    pub fn mounted_containers(&self) -> impl Iterator<Item = &str> {
        self.containers
            .iter()
            .filter(|(_, frame)| frame.is_some())
            .map(|(name, _)| name.as_str())
    }

    fn slot_mut(&mut self, container: &str) -> ThermometerResult<&mut Option<RenderFrame>> {
        self.containers
            .get_mut(container)
            .ok_or_else(|| ThermometerError::ContainerNotFound {
                container: container.to_owned(),
            })
    }

    fn mounted_mut(&mut self, container: &str) -> ThermometerResult<&mut RenderFrame> {
        self.slot_mut(container)?
            .as_mut()
            .ok_or_else(|| ThermometerError::NotMounted {
                container: container.to_owned(),
            })
    }
}

impl Renderer for SvgRenderer {
    fn mount(&mut self, container: &str, frame: &RenderFrame) -> ThermometerResult<()> {
        frame.validate()?;
        let slot = self.slot_mut(container)?;
        if slot.is_some() {
            debug!(container, "replacing mounted svg surface");
        }
        *slot = Some(frame.clone());
        Ok(())
    }

    fn patch(&mut self, container: &str, patch: &FramePatch) -> ThermometerResult<()> {
        patch.validate()?;
        self.mounted_mut(container)?.apply_patch(patch);
        Ok(())
    }

    fn unmount(&mut self, container: &str) -> ThermometerResult<()> {
        let slot = self.slot_mut(container)?;
        if slot.take().is_none() {
            return Err(ThermometerError::NotMounted {
                container: container.to_owned(),
            });
        }
        Ok(())
    }
}
