use indexmap::IndexSet;

use crate::core::RedrawScope;
use crate::error::{ThermometerError, ThermometerResult};
use crate::render::{FramePatch, RenderFrame, Renderer};

/// No-op renderer used by tests and headless usage.
///
/// It still validates every frame and patch, and tracks which containers hold
/// a surface so lifecycle mistakes surface the same way they would on a real
/// backend. Any container name is accepted.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub mounted: IndexSet<String>,
    pub mount_count: usize,
    pub axis_patch_count: usize,
    pub mercury_patch_count: usize,
    pub last_tick_count: usize,
    pub last_mercury_y: Option<f64>,
}

impl NullRenderer {
    fn ensure_mounted(&self, container: &str) -> ThermometerResult<()> {
        if self.mounted.contains(container) {
            Ok(())
        } else {
            Err(ThermometerError::NotMounted {
                container: container.to_owned(),
            })
        }
    }
}

impl Renderer for NullRenderer {
    fn mount(&mut self, container: &str, frame: &RenderFrame) -> ThermometerResult<()> {
        frame.validate()?;
        self.mounted.insert(container.to_owned());
        self.mount_count += 1;
        self.last_tick_count = frame.axis.ticks.len();
        self.last_mercury_y = Some(frame.mercury.y);
        Ok(())
    }

    fn patch(&mut self, container: &str, patch: &FramePatch) -> ThermometerResult<()> {
        self.ensure_mounted(container)?;
        patch.validate()?;
        match patch {
            FramePatch::Mercury { mercury } => {
                self.last_mercury_y = Some(mercury.y);
            }
            FramePatch::Axis { axis, mercury, .. } => {
                self.last_tick_count = axis.ticks.len();
                self.last_mercury_y = Some(mercury.y);
            }
        }
        match patch.scope() {
            RedrawScope::Mercury => self.mercury_patch_count += 1,
            RedrawScope::Axis => self.axis_patch_count += 1,
        }
        Ok(())
    }

    fn unmount(&mut self, container: &str) -> ThermometerResult<()> {
        self.ensure_mounted(container)?;
        self.mounted.shift_remove(container);
        Ok(())
    }
}
