mod projection;
mod simulator;
mod types;

pub use projection::{
    annuity_present_value, extra_contribution_future_value, monthly_return_rate,
    real_return_rate, run_projection,
};
pub use simulator::{AccumulationPlan, MAX_MONTHS, run_plan, simulate_accumulation};
pub use types::{AccumulationOutcome, GoalAssessment, Inputs, PlanResult, ProjectionRow};
