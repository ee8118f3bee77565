//! Traveller preferences: the intake form's model and presence checks.
//!
//! Collected once per session and held in memory; nothing here feeds the
//! filter engine or the map.

use thiserror::Error;

/// Kinds of experience the traveller is interested in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Experience {
    Beaches,
    Mountains,
    Cultural,
    Ecotourism,
    Gastronomy,
    Shopping,
}

impl Experience {
    pub const ALL: &[Experience] = &[
        Self::Beaches,
        Self::Mountains,
        Self::Cultural,
        Self::Ecotourism,
        Self::Gastronomy,
        Self::Shopping,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beaches => "Playas",
            Self::Mountains => "Montañas",
            Self::Cultural => "Turismo cultural",
            Self::Ecotourism => "Ecoturismo",
            Self::Gastronomy => "Gastronomía",
            Self::Shopping => "Compras locales",
        }
    }
}

/// Daily budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub const ALL: &[Budget] = &[Self::Low, Self::Medium, Self::High];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Menos de $50 USD",
            Self::Medium => "Entre $50 y $100 USD",
            Self::High => "Más de $100 USD",
        }
    }
}

/// Who the traveller is coming with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelType {
    Solo,
    Family,
    Group,
}

impl TravelType {
    pub const ALL: &[TravelType] = &[Self::Solo, Self::Family, Self::Group];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solo => "Solo/a",
            Self::Family => "En pareja o familia",
            Self::Group => "En grupo o amigos",
        }
    }
}

/// Transport modes the traveller plans to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Walk,
    Public,
    Car,
    Plane,
}

impl Transport {
    pub const ALL: &[Transport] = &[Self::Walk, Self::Public, Self::Car, Self::Plane];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Walk => "A pie",
            Self::Public => "Transporte público",
            Self::Car => "Vehículo alquilado/propio",
            Self::Plane => "Avión",
        }
    }
}

/// Travel dates as ISO `YYYY-MM-DD` strings, as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Validation failures, phrased for the form's error label.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum PreferencesError {
    #[error("Selecciona al menos una experiencia.")]
    NoExperience,
    #[error("Selecciona tu presupuesto.")]
    NoBudget,
    #[error("Selecciona tus fechas de viaje.")]
    NoDates,
    #[error("Selecciona con quién viajas.")]
    NoTravelType,
    #[error("Selecciona al menos un medio de transporte.")]
    NoTransport,
    #[error("Nivel de actividad fuera de rango: {0}")]
    ActivityOutOfRange(u8),
}

/// The collected preferences. Presence checks mirror the intake form:
/// every section except the recommendations flag is required.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub experiences: Vec<Experience>,
    pub budget: Option<Budget>,
    pub dates: DateRange,
    pub travel_type: Option<TravelType>,
    /// 1 = relaxed, 2 = intermediate, 3 = active.
    pub activity_level: u8,
    pub transport: Vec<Transport>,
    pub show_local_recommendations: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            experiences: Vec::new(),
            budget: None,
            dates: DateRange::default(),
            travel_type: None,
            activity_level: 1,
            transport: Vec::new(),
            show_local_recommendations: true,
        }
    }
}

impl Preferences {
    /// Check that every required section was filled in; reports the first
    /// missing one.
    pub fn validate(&self) -> Result<(), PreferencesError> {
        if self.experiences.is_empty() {
            return Err(PreferencesError::NoExperience);
        }
        if self.budget.is_none() {
            return Err(PreferencesError::NoBudget);
        }
        if self.dates.start.trim().is_empty() || self.dates.end.trim().is_empty() {
            return Err(PreferencesError::NoDates);
        }
        if self.travel_type.is_none() {
            return Err(PreferencesError::NoTravelType);
        }
        if self.transport.is_empty() {
            return Err(PreferencesError::NoTransport);
        }
        if !(1..=3).contains(&self.activity_level) {
            return Err(PreferencesError::ActivityOutOfRange(self.activity_level));
        }
        Ok(())
    }

    /// Toggle helpers for the multi-select sections.
    pub fn toggle_experience(&mut self, experience: Experience) {
        if let Some(pos) = self.experiences.iter().position(|e| *e == experience) {
            self.experiences.remove(pos);
        } else {
            self.experiences.push(experience);
        }
    }

    pub fn toggle_transport(&mut self, transport: Transport) {
        if let Some(pos) = self.transport.iter().position(|t| *t == transport) {
            self.transport.remove(pos);
        } else {
            self.transport.push(transport);
        }
    }
}
