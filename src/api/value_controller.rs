use tracing::{debug, trace, warn};

use crate::core::{RedrawScope, ValueChange};
use crate::error::{ThermometerError, ThermometerResult};
use crate::render::Renderer;

use super::Thermometer;
use super::scene_builder::SceneBuilder;

impl<R: Renderer> Thermometer<R> {
    /// Moves the mercury to `value`.
    ///
    /// A value outside `[min, max]` also becomes the new min or max and
    /// triggers a full axis redraw; otherwise only the column is updated.
    pub fn set_current_value(&mut self, value: f64) -> ThermometerResult<RedrawScope> {
        self.apply_change(ValueChange::Current(value))
    }

    /// Sets the min value and redraws the axis. Must not exceed the current
    /// value.
    pub fn set_min_value(&mut self, value: f64) -> ThermometerResult<RedrawScope> {
        self.apply_change(ValueChange::Min(value))
    }

    /// Sets the max value and redraws the axis. Must not fall below the
    /// current value.
    pub fn set_max_value(&mut self, value: f64) -> ThermometerResult<RedrawScope> {
        self.apply_change(ValueChange::Max(value))
    }

    /// Applies `change`, recomputing the axis only when the change calls for
    /// it, and pushes the matching patch to the renderer.
    ///
    /// State is committed only after the renderer accepted the patch.
    pub fn apply_change(&mut self, change: ValueChange) -> ThermometerResult<RedrawScope> {
        let mounted = self.mounted.as_ref().ok_or(ThermometerError::NotRendered)?;

        let mut values = mounted.values;
        let scope = values.apply(change).inspect_err(|err| {
            warn!(?change, %err, "rejected value change");
        })?;

        let axis = match scope {
            RedrawScope::Mercury => mounted.axis.clone(),
            RedrawScope::Axis => self.calculator.compute(
                values.min(),
                values.max(),
                mounted.geometry.axis_pixel_range(),
            )?,
        };

        let patch = SceneBuilder::new(&self.config, mounted.geometry).patch(scope, values, &axis);
        self.renderer.patch(&mounted.container, &patch)?;

        match scope {
            RedrawScope::Mercury => trace!(current = values.current(), "moved mercury"),
            RedrawScope::Axis => debug!(
                current = values.current(),
                min = values.min(),
                max = values.max(),
                lo = axis.domain.0,
                hi = axis.domain.1,
                ticks = axis.tick_count(),
                "recomputed axis"
            ),
        }

        if let Some(mounted) = self.mounted.as_mut() {
            mounted.values = values;
            mounted.axis = axis;
        }
        Ok(scope)
    }
}
