//! Biometric derivations for the user profile.
//!
//! BMI, BMR (Mifflin-St Jeor) and the fitness tier used to select content
//! variants. These functions assume form-validated input (age 10-110,
//! weight 20-300 kg, height 100-250 cm) and apply no further validation.

use crate::types::{FitnessTier, Sex, UserProfile};

impl UserProfile {
    /// Body-mass index: weight (kg) over height (m) squared
    pub fn bmi(&self) -> f64 {
        let height_m = self.height_cm / 100.0;
        self.weight_kg / (height_m * height_m)
    }

    /// Basal metabolic rate in kcal/day, Mifflin-St Jeor equation.
    ///
    /// Informational display only; the schedule windows are time-based.
    pub fn bmr_kcal(&self) -> i32 {
        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * self.age_years as f64;
        let adjusted = match self.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        };
        adjusted.round() as i32
    }

    /// Derive the fitness tier from age and BMI.
    ///
    /// Rules apply strictly left to right; the first match wins:
    /// age < 18 or age > 60 or BMI > 30 → Light,
    /// then BMI > 25 or age > 50 → Moderate, otherwise Standard.
    pub fn fitness_tier(&self) -> FitnessTier {
        let bmi = self.bmi();
        if self.age_years < 18 || self.age_years > 60 || bmi > 30.0 {
            return FitnessTier::Light;
        }
        if bmi > 25.0 || self.age_years > 50 {
            return FitnessTier::Moderate;
        }
        FitnessTier::Standard
    }

    /// One-line personalised stats summary shown under the clock
    pub fn summary(&self) -> String {
        format!(
            "Age {}  •  {:.1} kg  •  {:.0} cm  •  BMI {:.1}  •  BMR ~{} kcal/day  •  {}",
            self.age_years,
            self.weight_kg,
            self.height_cm,
            self.bmi(),
            self.bmr_kcal(),
            self.fitness_tier().intensity_label()
        )
    }
}
