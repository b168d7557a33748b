use rand::Rng;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum WeatherCondition {
    Clear,
    LightWind,
    ModerateWind,
    Turbulence,
    Rain,
}

impl From<WeatherCondition> for &'static str {
    fn from(value: WeatherCondition) -> Self {
        match value {
            WeatherCondition::Clear => "clear",
            WeatherCondition::LightWind => "light_wind",
            WeatherCondition::ModerateWind => "moderate_wind",
            WeatherCondition::Turbulence => "turbulence",
            WeatherCondition::Rain => "rain",
        }
    }
}

impl WeatherCondition {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// How much this condition amplifies the baseline heading drift.
    /// Applied to a derived rate each tick, never folded back into the
    /// stored baseline.
    pub fn drift_multiplier(&self) -> f64 {
        match self {
            WeatherCondition::Turbulence => 1.5,
            WeatherCondition::ModerateWind => 1.2,
            _ => 1.0,
        }
    }
}

/// Weather over the aircraft. Regenerated wholesale; individual fields are
/// never patched in place.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    condition: WeatherCondition,
    wind_direction: i32,
    wind_speed: i32,
    crosswind_component: f64,
    visibility: i32,
    temperature: i32,
}

impl WeatherReport {
    pub fn generate<R: Rng>(rng: &mut R, heading: f64) -> Self {
        let condition = match rng.gen_range(0..5) {
            0 => WeatherCondition::Clear,
            1 => WeatherCondition::LightWind,
            2 => WeatherCondition::ModerateWind,
            3 => WeatherCondition::Turbulence,
            _ => WeatherCondition::Rain,
        };

        let wind_direction = rng.gen_range(0..360);
        let wind_speed = rng.gen_range(5..=25);

        // Simplified crosswind: the wind component perpendicular to the
        // current track. A corrupt heading must not leak into the report.
        let heading = if heading.is_finite() { heading } else { 0.0 };
        let mut crosswind =
            wind_speed as f64 * (wind_direction as f64 - heading).abs().to_radians().sin();
        if !crosswind.is_finite() {
            crosswind = 0.0;
        }

        WeatherReport {
            condition,
            wind_direction,
            wind_speed,
            crosswind_component: crosswind,
            visibility: rng.gen_range(3..=10),
            temperature: rng.gen_range(32..=85),
        }
    }

    pub fn get_condition(&self) -> WeatherCondition {
        self.condition
    }

    pub fn get_wind_direction(&self) -> i32 {
        self.wind_direction
    }

    pub fn get_wind_speed(&self) -> i32 {
        self.wind_speed
    }

    pub fn get_crosswind_component(&self) -> f64 {
        self.crosswind_component
    }

    pub fn get_visibility(&self) -> i32 {
        self.visibility
    }

    pub fn get_temperature(&self) -> i32 {
        self.temperature
    }

    #[cfg(test)]
    pub(crate) fn with_condition(mut self, condition: WeatherCondition) -> Self {
        self.condition = condition;
        self
    }

    #[cfg(test)]
    pub(crate) fn with_crosswind(mut self, crosswind: f64) -> Self {
        self.crosswind_component = crosswind;
        self
    }
}
