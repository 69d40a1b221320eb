use colored::Colorize;
use tabled::{Table, builder::Builder, settings::Style};

use crate::cli::OutputFormat;
use crate::core::{AccumulationOutcome, GoalAssessment, Inputs, PlanResult, ProjectionRow};

/// Whole-unit currency with thousands separators, e.g. `22,398,570`.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let negative = rounded < 0.0;
    let digits = format!("{:.0}", rounded.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if negative {
        format!("-{out}")
    } else {
        out
    }
}

pub fn render_table(rows: &[ProjectionRow]) -> String {
    let mut builder = Builder::default();
    builder.push_record([
        "Retire age",
        "Invest yrs",
        "Retire yrs",
        "Monthly expense then",
        "Required corpus",
        "Monthly investment needed",
    ]);
    for row in rows {
        builder.push_record([
            row.retirement_age.to_string(),
            row.invest_years.to_string(),
            row.retirement_years.to_string(),
            format_currency(row.adjusted_monthly_expense),
            format_currency(row.required_corpus),
            format_currency(row.required_monthly_contribution),
        ]);
    }
    let mut table = Table::from(builder);
    table.with(Style::psql());
    table.to_string()
}

/// Narrative block for the accumulation estimate, one line per entry.
pub fn goal_lines(inputs: &Inputs, goal: Option<&GoalAssessment>) -> Vec<String> {
    let Some(goal) = goal else {
        return vec![format!(
            "No projection row for retirement age {}.",
            inputs.example_retirement_age
        )];
    };

    let mut lines = vec![format!(
        "Accumulation estimate for retiring at {} (target corpus {})",
        goal.retirement_age,
        format_currency(goal.target_assets)
    )];
    match goal.outcome {
        AccumulationOutcome::Reached {
            years,
            months,
            final_assets,
        } => {
            lines.push(format!(
                "Target reached in {years} years {months} months with estimated assets {}.",
                format_currency(final_assets)
            ));
            if let (Some(age_years), Some(age_months)) =
                (goal.projected_age_years, goal.projected_age_months)
            {
                lines.push(format!(
                    "Projected age at that point: {age_years} years {age_months} months."
                ));
            }
        }
        AccumulationOutcome::NotReached { final_assets } => {
            lines.push(format!(
                "Target not reached within 100 years; assets would grow to {}. \
                 Increase contributions or retire later.",
                format_currency(final_assets)
            ));
        }
    }
    lines
}

pub fn print_plan(inputs: &Inputs, result: &PlanResult, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).expect("plan result serializes");
            println!("{json}");
        }
        OutputFormat::Table => {
            println!("{}", render_table(&result.rows));
            println!();
            let lines = goal_lines(inputs, result.goal.as_ref());
            let mut lines = lines.into_iter();
            if let Some(headline) = lines.next() {
                let reached = matches!(
                    result.goal.map(|g| g.outcome),
                    Some(AccumulationOutcome::Reached { .. })
                );
                if reached {
                    println!("{}", headline.green().bold());
                } else {
                    println!("{}", headline.yellow().bold());
                }
            }
            for line in lines {
                println!("{line}");
            }
        }
    }
}
