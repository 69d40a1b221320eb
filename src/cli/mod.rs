use clap::{Parser, ValueEnum};

use crate::core::Inputs;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// Every flag defaults to the canonical scenario, so a bare invocation
/// reproduces the reference projection end to end.
#[derive(Parser, Debug)]
#[command(
    name = "nestegg",
    about = "Retirement corpus projection and savings-accumulation estimator"
)]
pub struct Cli {
    #[arg(long, default_value_t = 25)]
    current_age: u32,
    #[arg(long, default_value_t = 25, help = "First candidate retirement age")]
    retire_age_min: u32,
    #[arg(long, default_value_t = 65, help = "Last candidate retirement age")]
    retire_age_max: u32,
    #[arg(long, default_value_t = 5, help = "Step between candidate ages")]
    retire_age_step: u32,
    #[arg(
        long,
        default_value_t = 80000.0,
        help = "Monthly living expense in today's money"
    )]
    monthly_expense: f64,
    #[arg(
        long,
        default_value_t = 2.0,
        help = "Expected annual inflation in percent"
    )]
    inflation_rate: f64,
    #[arg(
        long,
        default_value_t = 8.0,
        help = "Expected nominal annual return in percent"
    )]
    annual_return: f64,
    #[arg(long, default_value_t = 90, help = "Age to fund through")]
    death_age: u32,
    #[arg(
        long,
        default_value_t = 100000.0,
        help = "Lump sum invested at the start of every year"
    )]
    extra_annual_contribution: f64,
    #[arg(long, default_value_t = 500000.0, help = "Assets already invested")]
    initial_assets: f64,
    #[arg(
        long,
        default_value_t = 34000.0,
        help = "Current monthly investment amount"
    )]
    monthly_investment: f64,
    #[arg(
        long,
        default_value_t = 45,
        help = "Retirement age whose corpus drives the time-to-target estimate"
    )]
    example_age: u32,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

pub fn build_inputs(cli: &Cli) -> Result<Inputs, String> {
    if cli.death_age <= cli.current_age {
        return Err("--death-age must be > --current-age".to_string());
    }

    if cli.retire_age_step == 0 {
        return Err("--retire-age-step must be > 0".to_string());
    }

    if cli.retire_age_max < cli.retire_age_min {
        return Err("--retire-age-max must be >= --retire-age-min".to_string());
    }

    if !cli.monthly_expense.is_finite() || cli.monthly_expense < 0.0 {
        return Err("--monthly-expense must be >= 0".to_string());
    }

    if !cli.inflation_rate.is_finite() || cli.inflation_rate <= -100.0 {
        return Err("--inflation-rate must be > -100".to_string());
    }

    if !cli.annual_return.is_finite() || cli.annual_return <= -100.0 {
        return Err("--annual-return must be > -100".to_string());
    }

    if !cli.extra_annual_contribution.is_finite() || cli.extra_annual_contribution < 0.0 {
        return Err("--extra-annual-contribution must be >= 0".to_string());
    }

    if !cli.initial_assets.is_finite() || cli.initial_assets < 0.0 {
        return Err("--initial-assets must be >= 0".to_string());
    }

    if !cli.monthly_investment.is_finite() || cli.monthly_investment < 0.0 {
        return Err("--monthly-investment must be >= 0".to_string());
    }

    let candidate_retirement_ages = (cli.retire_age_min..=cli.retire_age_max)
        .step_by(cli.retire_age_step as usize)
        .collect();

    Ok(Inputs {
        current_age: cli.current_age,
        candidate_retirement_ages,
        monthly_expense_today: cli.monthly_expense,
        inflation_rate: cli.inflation_rate / 100.0,
        annual_return: cli.annual_return / 100.0,
        death_age: cli.death_age,
        extra_annual_contribution: cli.extra_annual_contribution,
        initial_assets: cli.initial_assets,
        monthly_investment: cli.monthly_investment,
        example_retirement_age: cli.example_age,
    })
}
