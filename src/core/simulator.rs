use super::projection::{monthly_return_rate, run_projection};
use super::types::{AccumulationOutcome, GoalAssessment, Inputs, PlanResult};

/// Hard simulation horizon: 100 years of months. Guarantees the loop
/// terminates even when the target is unreachable.
pub const MAX_MONTHS: u32 = 1200;

#[derive(Debug, Clone, Copy)]
pub struct AccumulationPlan {
    pub initial_assets: f64,
    pub monthly_investment: f64,
    pub extra_annual_contribution: f64,
    pub target_assets: f64,
    pub annual_return: f64,
}

/// Month-by-month forward simulation until `target_assets` is reached or the
/// horizon runs out. Each 12-month block starts with the annual top-up
/// (month 0 included), then the balance compounds for the month, then the
/// monthly investment lands. The ordering is load-bearing: the first year's
/// top-up earns a full year of growth.
pub fn simulate_accumulation(plan: AccumulationPlan) -> AccumulationOutcome {
    let monthly_return = monthly_return_rate(plan.annual_return);
    let mut assets = plan.initial_assets;
    let mut month: u32 = 0;

    while assets < plan.target_assets && month < MAX_MONTHS {
        if month % 12 == 0 {
            assets += plan.extra_annual_contribution;
        }
        assets *= 1.0 + monthly_return;
        assets += plan.monthly_investment;
        month += 1;
    }

    if assets >= plan.target_assets {
        AccumulationOutcome::Reached {
            years: month / 12,
            months: month % 12,
            final_assets: assets.round(),
        }
    } else {
        AccumulationOutcome::NotReached {
            final_assets: assets.round(),
        }
    }
}

/// Full run: projection table plus, when the example age has a row, an
/// accumulation run against that row's corpus. The corpus is rounded to the
/// whole unit before it becomes the target, matching the displayed figure.
pub fn run_plan(inputs: &Inputs) -> PlanResult {
    let rows = run_projection(inputs);
    let goal = rows
        .iter()
        .find(|row| row.retirement_age == inputs.example_retirement_age)
        .map(|row| {
            let target_assets = row.required_corpus.round();
            let outcome = simulate_accumulation(AccumulationPlan {
                initial_assets: inputs.initial_assets,
                monthly_investment: inputs.monthly_investment,
                extra_annual_contribution: inputs.extra_annual_contribution,
                target_assets,
                annual_return: inputs.annual_return,
            });
            let (projected_age_years, projected_age_months) = match outcome {
                AccumulationOutcome::Reached { years, months, .. } => {
                    (Some(inputs.current_age + years), Some(months))
                }
                AccumulationOutcome::NotReached { .. } => (None, None),
            };
            GoalAssessment {
                retirement_age: row.retirement_age,
                target_assets,
                outcome,
                projected_age_years,
                projected_age_months,
            }
        });

    PlanResult { rows, goal }
}
