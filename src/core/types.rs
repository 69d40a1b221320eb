use serde::Serialize;

#[derive(Debug, Clone)]
pub struct Inputs {
    pub current_age: u32,
    pub candidate_retirement_ages: Vec<u32>,
    pub monthly_expense_today: f64,
    pub inflation_rate: f64,
    pub annual_return: f64,
    pub death_age: u32,
    pub extra_annual_contribution: f64,
    pub initial_assets: f64,
    pub monthly_investment: f64,
    pub example_retirement_age: u32,
}

/// One valid candidate retirement age. Rows are only produced when both
/// `invest_years` and `retirement_years` are positive.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionRow {
    pub retirement_age: u32,
    pub invest_years: u32,
    pub retirement_years: u32,
    pub adjusted_monthly_expense: f64,
    pub required_corpus: f64,
    pub required_monthly_contribution: f64,
}

/// Terminal state of the month-by-month accumulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "status")]
pub enum AccumulationOutcome {
    Reached {
        years: u32,
        months: u32,
        final_assets: f64,
    },
    NotReached {
        final_assets: f64,
    },
}

impl AccumulationOutcome {
    pub fn final_assets(&self) -> f64 {
        match *self {
            AccumulationOutcome::Reached { final_assets, .. } => final_assets,
            AccumulationOutcome::NotReached { final_assets } => final_assets,
        }
    }
}

/// Accumulation run against the example row's corpus.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAssessment {
    pub retirement_age: u32,
    pub target_assets: f64,
    pub outcome: AccumulationOutcome,
    pub projected_age_years: Option<u32>,
    pub projected_age_months: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanResult {
    pub rows: Vec<ProjectionRow>,
    pub goal: Option<GoalAssessment>,
}
