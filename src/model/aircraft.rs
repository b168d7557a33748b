/// The aircraft families the game knows about. Each maps to a fixed
/// performance profile; anything unrecognised flies the single engine prop.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum AircraftCategory {
    SingleEngineProp,
    MultiEngineProp,
    CommercialJet,
    MilitaryJet,
    Seaplane,
    Helicopter,
}

impl From<&str> for AircraftCategory {
    fn from(value: &str) -> Self {
        match value.to_uppercase().as_str() {
            "SINGLE_ENGINE_PROPS" => AircraftCategory::SingleEngineProp,
            "MULTI_ENGINE_PROPS" => AircraftCategory::MultiEngineProp,
            "JETS_COMMERCIAL" => AircraftCategory::CommercialJet,
            "JETS_MILITARY" => AircraftCategory::MilitaryJet,
            "SEAPLANES_AMPHIBIANS" => AircraftCategory::Seaplane,
            "HELICOPTERS_ROTORCRAFT" => AircraftCategory::Helicopter,
            _ => AircraftCategory::SingleEngineProp,
        }
    }
}

impl From<AircraftCategory> for &'static str {
    fn from(value: AircraftCategory) -> Self {
        match value {
            AircraftCategory::SingleEngineProp => "single_engine_prop",
            AircraftCategory::MultiEngineProp => "multi_engine_prop",
            AircraftCategory::CommercialJet => "commercial_jet",
            AircraftCategory::MilitaryJet => "military_jet",
            AircraftCategory::Seaplane => "seaplane",
            AircraftCategory::Helicopter => "helicopter",
        }
    }
}

impl AircraftCategory {
    pub fn performance(&self) -> &'static Aircraft {
        match self {
            AircraftCategory::SingleEngineProp => &SINGLE_ENGINE_PROP,
            AircraftCategory::MultiEngineProp => &MULTI_ENGINE_PROP,
            AircraftCategory::CommercialJet => &COMMERCIAL_JET,
            AircraftCategory::MilitaryJet => &MILITARY_JET,
            AircraftCategory::Seaplane => &SEAPLANE,
            AircraftCategory::Helicopter => &HELICOPTER,
        }
    }
}

/// Performance profile for an aircraft category.
#[derive(Clone, Debug, PartialEq)]
pub struct Aircraft {
    name: &'static str,
    cruise_speed: i32,
    cruise_altitude: i32,
    fuel_burn_per_nm: f64,
    drift_sensitivity: f64,
}

impl Aircraft {
    pub fn get_name(&self) -> &str {
        self.name
    }

    pub fn get_cruise_speed(&self) -> i32 {
        self.cruise_speed
    }

    pub fn get_cruise_altitude(&self) -> i32 {
        self.cruise_altitude
    }

    pub fn get_fuel_burn_per_nm(&self) -> f64 {
        self.fuel_burn_per_nm
    }

    pub fn get_drift_sensitivity(&self) -> f64 {
        self.drift_sensitivity
    }
}

static SINGLE_ENGINE_PROP: Aircraft = Aircraft {
    name: "Single engine prop",
    cruise_speed: 120,
    cruise_altitude: 6500,
    fuel_burn_per_nm: 1.2,
    drift_sensitivity: 1.0,
};

static MULTI_ENGINE_PROP: Aircraft = Aircraft {
    name: "Multi engine prop",
    cruise_speed: 180,
    cruise_altitude: 12000,
    fuel_burn_per_nm: 2.5,
    drift_sensitivity: 0.8,
};

static COMMERCIAL_JET: Aircraft = Aircraft {
    name: "Commercial jet",
    cruise_speed: 450,
    cruise_altitude: 35000,
    fuel_burn_per_nm: 8.0,
    drift_sensitivity: 0.5,
};

static MILITARY_JET: Aircraft = Aircraft {
    name: "Military jet",
    cruise_speed: 500,
    cruise_altitude: 40000,
    fuel_burn_per_nm: 12.0,
    drift_sensitivity: 0.3,
};

static SEAPLANE: Aircraft = Aircraft {
    name: "Seaplane",
    cruise_speed: 140,
    cruise_altitude: 8000,
    fuel_burn_per_nm: 1.8,
    drift_sensitivity: 1.2,
};

static HELICOPTER: Aircraft = Aircraft {
    name: "Helicopter",
    cruise_speed: 100,
    cruise_altitude: 1500,
    fuel_burn_per_nm: 2.0,
    drift_sensitivity: 1.5,
};
