//! Templates shipped with the crate.

use crate::{error::Result, models::PlanTemplate};

const WORKOUT: &str = include_str!("../../templates/workout.json");
const NUTRITION: &str = include_str!("../../templates/nutrition.json");

/// Parse and check the built-in workout and nutrition templates.
pub fn templates() -> Result<Vec<PlanTemplate>> {
    [WORKOUT, NUTRITION]
        .into_iter()
        .map(PlanTemplate::from_json)
        .collect()
}
