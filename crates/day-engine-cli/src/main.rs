use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use day_engine::{
    compute_offset_with_options, round, truncate, DisplayPolicy, LeapDayPolicy, OffsetOptions,
    Rounding, TrackedDate, Unit,
};
use flexi_logger::Logger;

#[derive(Parser)]
#[command(name = "days", version, about = "Countdown and count-up offsets for tracked days")]
struct Cli {
    /// Log engine decisions to stderr (otherwise RUST_LOG, default warn)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the offset of a date from today (or --today) as JSON
    Offset {
        /// Target date (YYYY-MM-DD or RFC 3339)
        date: String,

        /// Treat the date as an annual anniversary
        #[arg(short, long)]
        repeats: bool,

        /// Unit for `count`: day, week, month or year
        #[arg(short, long, default_value = "day")]
        unit: Unit,

        /// Reference day instead of the current date
        #[arg(long)]
        today: Option<String>,

        /// IANA timezone for reading the current date
        #[arg(long)]
        timezone: Option<String>,

        /// Where Feb 29 anniversaries land in non-leap years
        #[arg(long, value_enum, default_value_t = LeapDay::Feb28)]
        leap_day: LeapDay,

        /// Decimal places for the displayed value
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        decimals: i32,

        /// Round the displayed value instead of truncating it
        #[arg(long)]
        round: bool,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Round a number half-up to DECIMALS places
    #[command(allow_negative_numbers = true)]
    Round { value: f64, decimals: i32 },
    /// Truncate a number toward zero at DECIMALS places
    #[command(allow_negative_numbers = true)]
    Truncate { value: f64, decimals: i32 },
}

#[derive(Clone, Copy, ValueEnum)]
enum LeapDay {
    Feb28,
    Mar1,
}

impl From<LeapDay> for LeapDayPolicy {
    fn from(value: LeapDay) -> Self {
        match value {
            LeapDay::Feb28 => LeapDayPolicy::Feb28,
            LeapDay::Mar1 => LeapDayPolicy::Mar1,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let logger = if cli.verbose {
        Logger::try_with_str("debug")
    } else {
        Logger::try_with_env_or_str("warn")
    };
    let _logger = logger
        .context("Failed to configure logging")?
        .log_to_stderr()
        .start()
        .context("Failed to start logging")?;

    match cli.command {
        Command::Offset {
            date,
            repeats,
            unit,
            today,
            timezone,
            leap_day,
            decimals,
            round,
            pretty,
        } => {
            let tracked = TrackedDate::new(date, repeats).with_unit(unit);
            let options = OffsetOptions {
                timezone,
                leap_day: leap_day.into(),
            };
            let result = compute_offset_with_options(&tracked, unit, today.as_deref(), &options)
                .with_context(|| format!("Failed to compute offset for '{}'", tracked.date))?;
            log::debug!("{} → {} days ({:?})", result.reference, result.days, result.direction);

            let mode = if round { Rounding::Round } else { Rounding::Truncate };
            let displayed = DisplayPolicy::new(decimals, mode).present(&result);

            let output = serde_json::json!({
                "result": result,
                "display": displayed,
            });
            let text = if pretty {
                serde_json::to_string_pretty(&output)
            } else {
                serde_json::to_string(&output)
            }
            .context("Failed to serialize result")?;
            println!("{text}");
        }
        Command::Round { value, decimals } => println!("{}", round(value, decimals)),
        Command::Truncate { value, decimals } => println!("{}", truncate(value, decimals)),
    }

    Ok(())
}
