use super::types::{Inputs, ProjectionRow};

/// Rates below this are treated as exactly zero when they appear as a
/// divisor, and the straight-line limit of the formula is used instead.
const RATE_EPSILON: f64 = 1e-12;

/// Growth net of inflation, used to discount retirement-era expenses.
pub fn real_return_rate(annual_return: f64, inflation_rate: f64) -> f64 {
    (1.0 + annual_return) / (1.0 + inflation_rate) - 1.0
}

/// Monthly compounding rate equivalent to the nominal annual return.
pub fn monthly_return_rate(annual_return: f64) -> f64 {
    (1.0 + annual_return).powf(1.0 / 12.0) - 1.0
}

/// Lump sum that funds `payment` per period for `periods` periods at `rate`.
/// At a zero rate the annuity degenerates to `payment * periods`.
pub fn annuity_present_value(payment: f64, rate: f64, periods: u32) -> f64 {
    if rate.abs() < RATE_EPSILON {
        return payment * periods as f64;
    }
    payment * (1.0 - (1.0 + rate).powi(-(periods as i32))) / rate
}

/// Future value at the retirement month of one start-of-year deposit per
/// investing year. The deposit at month `12*i` compounds for the remaining
/// `invest_years*12 - 12*i` months.
pub fn extra_contribution_future_value(
    extra_annual_contribution: f64,
    monthly_return: f64,
    invest_years: u32,
) -> f64 {
    let months = invest_years * 12;
    let mut total = 0.0;
    for i in 0..invest_years {
        let remaining = (months - 12 * i) as i32;
        total += extra_annual_contribution * (1.0 + monthly_return).powi(remaining);
    }
    total
}

/// Level monthly payment whose ordinary-annuity future value over `months`
/// equals `target`. Zero-rate limit: contributions do not compound, so the
/// factor is simply `months`.
fn level_monthly_payment(target: f64, monthly_return: f64, months: u32) -> f64 {
    let factor = if monthly_return.abs() < RATE_EPSILON {
        months as f64
    } else {
        ((1.0 + monthly_return).powi(months as i32) - 1.0) / monthly_return
    };
    target / factor
}

fn project_age(inputs: &Inputs, retirement_age: u32) -> Option<ProjectionRow> {
    if retirement_age <= inputs.current_age || retirement_age >= inputs.death_age {
        return None;
    }
    let invest_years = retirement_age - inputs.current_age;
    let retirement_years = inputs.death_age - retirement_age;

    let adjusted_monthly_expense = inputs.monthly_expense_today
        * (1.0 + inputs.inflation_rate).powi(invest_years as i32);
    let adjusted_annual_expense = adjusted_monthly_expense * 12.0;

    let real_return = real_return_rate(inputs.annual_return, inputs.inflation_rate);
    let required_corpus =
        annuity_present_value(adjusted_annual_expense, real_return, retirement_years);

    let monthly_return = monthly_return_rate(inputs.annual_return);
    let extra_future_value = extra_contribution_future_value(
        inputs.extra_annual_contribution,
        monthly_return,
        invest_years,
    );

    let residual = required_corpus - extra_future_value;
    let required_monthly_contribution = if residual < 0.0 {
        0.0
    } else {
        level_monthly_payment(residual, monthly_return, invest_years * 12)
    };

    Some(ProjectionRow {
        retirement_age,
        invest_years,
        retirement_years,
        adjusted_monthly_expense,
        required_corpus,
        required_monthly_contribution,
    })
}

/// One row per viable candidate retirement age, in the candidates' order.
pub fn run_projection(inputs: &Inputs) -> Vec<ProjectionRow> {
    inputs
        .candidate_retirement_ages
        .iter()
        .filter_map(|&age| project_age(inputs, age))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, proptest};

    fn assert_approx_tol(actual: f64, expected: f64, tol: f64) {
        assert!(
            (actual - expected).abs() <= tol,
            "expected {expected}, got {actual}, tolerance {tol}"
        );
    }

    fn default_inputs() -> Inputs {
        Inputs {
            current_age: 25,
            candidate_retirement_ages: (25..=65).step_by(5).collect(),
            monthly_expense_today: 80_000.0,
            inflation_rate: 0.02,
            annual_return: 0.08,
            death_age: 90,
            extra_annual_contribution: 100_000.0,
            initial_assets: 500_000.0,
            monthly_investment: 34_000.0,
            example_retirement_age: 45,
        }
    }

    #[test]
    fn real_return_matches_fisher_spread() {
        assert_approx_tol(real_return_rate(0.08, 0.02), 0.0588235294, 1e-9);
        assert_approx_tol(real_return_rate(0.05, 0.05), 0.0, 1e-12);
    }

    #[test]
    fn annuity_present_value_zero_rate_is_straight_line() {
        assert_approx_tol(annuity_present_value(1_000.0, 0.0, 25), 25_000.0, 1e-9);
    }

    #[test]
    fn annuity_present_value_is_below_undiscounted_total_at_positive_rate() {
        let pv = annuity_present_value(1_000.0, 0.05, 25);
        assert!(pv > 0.0);
        assert!(pv < 25_000.0);
    }

    #[test]
    fn level_payment_zero_rate_divides_evenly() {
        assert_approx_tol(level_monthly_payment(120_000.0, 0.0, 120), 1_000.0, 1e-9);
    }

    #[test]
    fn candidate_equal_to_current_age_is_skipped() {
        let inputs = default_inputs();
        let rows = run_projection(&inputs);
        // 25 is rejected (invest_years would be 0); 30..=65 survive.
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[0].retirement_age, 30);
        assert_eq!(rows.last().map(|r| r.retirement_age), Some(65));
    }

    #[test]
    fn candidate_at_or_past_death_age_is_skipped() {
        let mut inputs = default_inputs();
        inputs.candidate_retirement_ages = vec![88, 90, 95];
        let rows = run_projection(&inputs);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].retirement_age, 88);
    }

    #[test]
    fn horizons_follow_from_ages() {
        let inputs = default_inputs();
        for row in run_projection(&inputs) {
            assert_eq!(row.invest_years, row.retirement_age - inputs.current_age);
            assert_eq!(row.retirement_years, inputs.death_age - row.retirement_age);
            assert!(row.invest_years > 0);
            assert!(row.retirement_years > 0);
        }
    }

    #[test]
    fn default_scenario_age_65_row() {
        let inputs = default_inputs();
        let rows = run_projection(&inputs);
        let row = rows
            .iter()
            .find(|r| r.retirement_age == 65)
            .expect("row for 65");
        assert_eq!(row.invest_years, 40);
        assert_eq!(row.retirement_years, 25);
        assert_approx_tol(row.adjusted_monthly_expense, 176_643.0, 1.0);
        assert_approx_tol(row.required_corpus, 27_402_691.0, 1.0);
        // Forty years of annual top-ups alone out-compound the corpus.
        assert_eq!(row.required_monthly_contribution, 0.0);
    }

    #[test]
    fn default_scenario_age_45_row() {
        let inputs = default_inputs();
        let rows = run_projection(&inputs);
        let row = rows
            .iter()
            .find(|r| r.retirement_age == 45)
            .expect("row for 45");
        assert_approx_tol(row.adjusted_monthly_expense, 118_876.0, 1.0);
        assert_approx_tol(row.required_corpus, 22_398_570.0, 1.0);
        assert_approx_tol(row.required_monthly_contribution, 30_679.0, 1.0);
    }

    #[test]
    fn required_contribution_is_non_increasing_in_retirement_age() {
        let inputs = default_inputs();
        let rows = run_projection(&inputs);
        for pair in rows.windows(2) {
            assert!(
                pair[1].required_monthly_contribution
                    <= pair[0].required_monthly_contribution + 1e-9,
                "contribution rose between ages {} and {}",
                pair[0].retirement_age,
                pair[1].retirement_age
            );
        }
    }

    #[test]
    fn extra_future_value_counts_each_start_of_year_deposit() {
        let mr = monthly_return_rate(0.08);
        // Two deposits: month 0 compounds 24 months, month 12 compounds 12.
        let expected = 100.0 * (1.0 + mr).powi(24) + 100.0 * (1.0 + mr).powi(12);
        assert_approx_tol(extra_contribution_future_value(100.0, mr, 2), expected, 1e-9);
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_rows_are_finite_and_contributions_non_negative(
            current_age in 18u32..60,
            death_offset in 1u32..60,
            expense in 1u32..500_000,
            inflation_bp in 0u32..900,
            return_bp in 0u32..1500,
            extra in 0u32..1_000_000,
        ) {
            let death_age = current_age + death_offset;
            let inputs = Inputs {
                current_age,
                candidate_retirement_ages: (current_age..=death_age).collect(),
                monthly_expense_today: expense as f64,
                inflation_rate: inflation_bp as f64 / 10_000.0,
                annual_return: return_bp as f64 / 10_000.0,
                death_age,
                extra_annual_contribution: extra as f64,
                initial_assets: 0.0,
                monthly_investment: 0.0,
                example_retirement_age: current_age,
            };

            for row in run_projection(&inputs) {
                prop_assert!(row.retirement_age > current_age);
                prop_assert!(row.retirement_age < death_age);
                prop_assert!(row.adjusted_monthly_expense.is_finite());
                prop_assert!(row.required_corpus.is_finite());
                prop_assert!(row.required_monthly_contribution.is_finite());
                prop_assert!(row.required_monthly_contribution >= 0.0);
                prop_assert!(row.required_corpus >= 0.0);
            }
        }
    }
}
