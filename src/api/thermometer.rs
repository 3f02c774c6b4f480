use tracing::{debug, warn};

use crate::core::{AxisModel, AxisRangeCalculator, Geometry, ValueState};
use crate::error::{ThermometerError, ThermometerResult};
use crate::render::{RenderFrame, Renderer};

use super::ThermometerConfig;
use super::scene_builder::SceneBuilder;

/// State that exists only while a surface is mounted.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct Mounted {
    pub(super) container: String,
    pub(super) geometry: Geometry,
    pub(super) values: ValueState,
    pub(super) axis: AxisModel,
}

/// A thermometer gauge bound to one drawing backend.
///
/// `Thermometer` owns its configuration and value state and pushes frames or
/// patches to `R`. Configuration is fixed at construction; values change
/// through `set_current_value`, `set_min_value` and `set_max_value`.
pub struct Thermometer<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: ThermometerConfig,
    pub(super) calculator: AxisRangeCalculator,
    pub(super) mounted: Option<Mounted>,
}

impl<R: Renderer> Thermometer<R> {
    /// Creates an unrendered thermometer after validating `config`.
    pub fn new(renderer: R, config: ThermometerConfig) -> ThermometerResult<Self> {
        config.validate()?;
        let calculator = AxisRangeCalculator::new(config.axis)?;
        Ok(Self {
            renderer,
            config,
            calculator,
            mounted: None,
        })
    }

    /// Draws the thermometer into `container` with fresh values.
    ///
    /// Any surface already in `container` is replaced. Once the new surface
    /// is mounted, a surface this instance held in another container is
    /// released. On error the previous rendering stays as it was. A `current`
    /// outside `[min, max]` widens the bounds to include it.
    pub fn render(
        &mut self,
        container: &str,
        current: f64,
        min: f64,
        max: f64,
    ) -> ThermometerResult<()> {
        let values = ValueState::new(current, min, max).inspect_err(|err| {
            warn!(container, %err, "rejected render values");
        })?;
        let geometry = self.config.geometry()?;
        let axis = self
            .calculator
            .compute(values.min(), values.max(), geometry.axis_pixel_range())
            .inspect_err(|err| {
                warn!(container, %err, "rejected render bounds");
            })?;
        let frame = SceneBuilder::new(&self.config, geometry).frame(values, &axis);

        self.renderer.mount(container, &frame)?;
        if let Some(previous) = self.mounted.take() {
            if previous.container != container {
                if let Err(err) = self.renderer.unmount(&previous.container) {
                    warn!(
                        previous = %previous.container,
                        %err,
                        "failed to release previous surface"
                    );
                }
            }
        }

        debug!(
            container,
            current = values.current(),
            min = values.min(),
            max = values.max(),
            lo = axis.domain.0,
            hi = axis.domain.1,
            ticks = axis.tick_count(),
            "rendered thermometer"
        );
        self.mounted = Some(Mounted {
            container: container.to_owned(),
            geometry,
            values,
            axis,
        });
        Ok(())
    }

    /// Releases the mounted surface.
    pub fn destroy(&mut self) -> ThermometerResult<()> {
        let mounted = self.mounted.as_ref().ok_or(ThermometerError::NotRendered)?;
        self.renderer.unmount(&mounted.container)?;
        debug!(container = %mounted.container, "destroyed thermometer");
        self.mounted = None;
        Ok(())
    }

    /// Builds the full frame for the current state without drawing it.
    pub fn build_render_frame(&self) -> ThermometerResult<RenderFrame> {
        let mounted = self.mounted()?;
        Ok(SceneBuilder::new(&self.config, mounted.geometry).frame(mounted.values, &mounted.axis))
    }

    #[must_use]
    pub fn config(&self) -> &ThermometerConfig {
        &self.config
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.mounted.is_some()
    }

    /// Container the surface is mounted in.
    #[must_use]
    pub fn container(&self) -> Option<&str> {
        self.mounted.as_ref().map(|mounted| mounted.container.as_str())
    }

    #[must_use]
    pub fn values(&self) -> Option<ValueState> {
        self.mounted.as_ref().map(|mounted| mounted.values)
    }

    #[must_use]
    pub fn geometry(&self) -> Option<Geometry> {
        self.mounted.as_ref().map(|mounted| mounted.geometry)
    }

    #[must_use]
    pub fn axis(&self) -> Option<&AxisModel> {
        self.mounted.as_ref().map(|mounted| &mounted.axis)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    pub(super) fn mounted(&self) -> ThermometerResult<&Mounted> {
        self.mounted.as_ref().ok_or(ThermometerError::NotRendered)
    }
}
