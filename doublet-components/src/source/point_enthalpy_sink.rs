use serde::Deserialize;
use uom::si::{
    f64::{Length, MassRate, Power, Time, VolumeRate},
    length::meter,
    mass_rate::kilogram_per_second,
    time::second,
};

use doublet_core::{StepInterval, TimeWindow, TimeWindowError, UnitFraction};
use doublet_thermo::{model::EnthalpyModel, PropertyError, State};

/// The x, y, z coordinates of a point source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: Length,
    pub y: Length,
    pub z: Length,
}

impl Point {
    /// Creates a point from coordinates in meters.
    #[must_use]
    pub fn from_meters(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: Length::new::<meter>(x),
            y: Length::new::<meter>(y),
            z: Length::new::<meter>(z),
        }
    }
}

/// A point sink that exchanges heat energy at a constant mass flux rate,
/// active during a square pulse window.
///
/// The injected fluid's enthalpy is evaluated at the pressure and temperature
/// of the sample point through an [`EnthalpyModel`]. Within each time step
/// the configured mass rate is scaled by the fraction of the step interval
/// `(t - dt, t]` that overlaps the pulse window, so a window boundary falling
/// mid-step exchanges exactly the right total mass.
///
/// A positive `mass_rate` is an injection. The values returned by
/// [`residual`](Self::residual) and
/// [`pressure_jacobian`](Self::pressure_jacobian) are residual-side terms
/// (the negated source), matching the sign convention of the governing
/// equation's assembly.
///
/// Both evaluations are pure: the host calls them once per quadrature point
/// it supplies, in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointEnthalpySink<M> {
    mass_rate: MassRate,
    location: Point,
    window: TimeWindow,
    model: M,
}

impl<M> PointEnthalpySink<M> {
    /// Creates a sink with the given mass rate, location, pulse window, and
    /// fluid property model.
    #[must_use]
    pub fn new(mass_rate: MassRate, location: Point, window: TimeWindow, model: M) -> Self {
        Self {
            mass_rate,
            location,
            window,
            model,
        }
    }

    /// The point at which the source applies, for the host's assembly machinery.
    #[must_use]
    pub fn location(&self) -> Point {
        self.location
    }

    /// The configured pulse window.
    #[must_use]
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// The fraction of `step` during which the source is active.
    #[must_use]
    pub fn pulse_factor(&self, step: StepInterval) -> UnitFraction {
        self.window.overlap_fraction(step)
    }

    /// The residual contribution at one quadrature point,
    /// `factor · ṁ · h(p, T)`.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the fluid model cannot evaluate the
    /// enthalpy at the given state.
    pub fn residual<F>(
        &self,
        step: StepInterval,
        state: &State<F>,
    ) -> Result<Power, PropertyError>
    where
        M: EnthalpyModel<F>,
    {
        let factor = self.window.overlap_fraction(step);
        let h = self.model.enthalpy(state)?;
        Ok(self.mass_rate * h * factor.get())
    }

    /// The Jacobian contribution with respect to the coupled pressure
    /// variable at one quadrature point, `factor · ṁ · ∂h/∂p`.
    ///
    /// Derivatives with respect to every other variable are identically
    /// zero, including the step size itself: the pulse factor is treated as
    /// piecewise constant within the step.
    ///
    /// # Errors
    ///
    /// Returns a [`PropertyError`] if the fluid model cannot evaluate the
    /// enthalpy derivatives at the given state.
    pub fn pressure_jacobian<F>(
        &self,
        step: StepInterval,
        state: &State<F>,
    ) -> Result<VolumeRate, PropertyError>
    where
        M: EnthalpyModel<F>,
    {
        let factor = self.window.overlap_fraction(step);
        let gradients = self.model.enthalpy_gradients(state)?;
        Ok(self.mass_rate * gradients.dh_dp * factor.get())
    }
}

/// Declarative configuration for a [`PointEnthalpySink`].
///
/// Mirrors the host's parameter conventions: the mass flux is in kg/s with
/// positive meaning injection, the point is in meters, and the pulse window
/// defaults to starting at `0` and ending at `1e30` (effectively never).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointEnthalpySinkConfig {
    /// The mass flux at this point in kg/s (positive is flux in, negative is
    /// flux out).
    pub mass_flux: f64,
    /// The x, y, z coordinates of the point source, in meters.
    pub point: [f64; 3],
    /// The time at which the source will start, in seconds.
    #[serde(default)]
    pub start_time: f64,
    /// The time at which the source will end, in seconds.
    #[serde(default = "default_end_time")]
    pub end_time: f64,
}

fn default_end_time() -> f64 {
    1.0e30
}

impl PointEnthalpySinkConfig {
    /// Builds the sink around the given fluid property model.
    ///
    /// # Errors
    ///
    /// Returns a [`TimeWindowError`] naming both bounds if
    /// `end_time <= start_time`.
    pub fn build<M>(&self, model: M) -> Result<PointEnthalpySink<M>, TimeWindowError> {
        let window = TimeWindow::new(
            Time::new::<second>(self.start_time),
            Time::new::<second>(self.end_time),
        )?;
        let [x, y, z] = self.point;

        Ok(PointEnthalpySink::new(
            MassRate::new::<kilogram_per_second>(self.mass_flux),
            Point::from_meters(x, y, z),
            window,
            model,
        ))
    }
}
