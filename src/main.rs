use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;

use vitality_source::core::{
    compute_bmi, compute_sleep_hours, gauge_segments, parse_measurement, submit, ContactField,
    ContactRecord, SubmissionOutcome, TimeOfDay, GAUGE_CEILING,
};
use vitality_source::delivery::LocalAcknowledgement;
use vitality_source::logging;
use vitality_source::theme::{FilePreferenceStore, ThemeController};

const GAUGE_WIDTH: usize = 40;

#[derive(Parser)]
#[command(name = "vitality")]
#[command(author = "Vitality Source")]
#[command(version)]
#[command(about = "Vitality Source - health calculators and contact form", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, help = "Enable verbose output", global = true)]
    verbose: bool,

    #[arg(long, help = "Print results as JSON", global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Calculate body mass index")]
    Bmi {
        #[arg(long, allow_hyphen_values = true, help = "Height in centimeters")]
        height: String,

        #[arg(long, allow_hyphen_values = true, help = "Weight in kilograms")]
        weight: String,
    },

    #[command(about = "Calculate hours slept between two times")]
    Sleep {
        #[arg(long, help = "Bed time (HH:MM)")]
        bed: String,

        #[arg(long, help = "Wake time (HH:MM)")]
        wake: String,
    },

    #[command(about = "Validate and send a contact message")]
    Contact {
        #[arg(long, default_value = "", help = "Your name")]
        name: String,

        #[arg(long, default_value = "", help = "Your email address")]
        email: String,

        #[arg(long, default_value = "", help = "Your message")]
        message: String,
    },

    #[command(about = "Show or toggle the color theme")]
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    #[command(about = "Show the current theme")]
    Show,
    #[command(about = "Switch between light and dark")]
    Toggle,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose)?;
    logging::log_system_info();

    match cli.command {
        Commands::Bmi { height, weight } => run_bmi(&height, &weight, cli.json),
        Commands::Sleep { bed, wake } => run_sleep(&bed, &wake, cli.json),
        Commands::Contact {
            name,
            email,
            message,
        } => run_contact(ContactRecord::new(name, email, message), cli.json),
        Commands::Theme { action } => run_theme(action, cli.json),
    }
}

fn run_bmi(height: &str, weight: &str, json: bool) -> Result<()> {
    let result = parse_measurement(height, "height")
        .and_then(|h| parse_measurement(weight, "weight").map(|w| (h, w)))
        .and_then(|(h, w)| compute_bmi(h, w))
        .inspect_err(|e| logging::log_invalid_input("bmi", &e.to_string()))?;
    logging::log_calculation("bmi", result.value);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!("{} Your BMI: {}", "→".green(), format!("{:.1}", result.value).cyan().bold());
    println!("  {}", render_gauge(gauge_segments(&result)));
    if result.value > GAUGE_CEILING {
        println!(
            "  {} Above the gauge ceiling of {}",
            "ℹ".blue(),
            GAUGE_CEILING
        );
    }
    Ok(())
}

fn render_gauge((filled, _remaining): (f64, f64)) -> String {
    let cells = ((filled / GAUGE_CEILING) * GAUGE_WIDTH as f64).round() as usize;
    let cells = cells.min(GAUGE_WIDTH);
    format!(
        "[{}{}]",
        "█".repeat(cells).green(),
        "░".repeat(GAUGE_WIDTH - cells).dimmed()
    )
}

fn run_sleep(bed: &str, wake: &str, json: bool) -> Result<()> {
    let bed = bed
        .parse::<TimeOfDay>()
        .inspect_err(|e| logging::log_invalid_input("sleep", &e.to_string()))?;
    let wake = wake
        .parse::<TimeOfDay>()
        .inspect_err(|e| logging::log_invalid_input("sleep", &e.to_string()))?;

    let result = compute_sleep_hours(bed, wake);
    logging::log_calculation("sleep", result.hours);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!(
            "{} You sleep {} hours",
            "🌙".green(),
            format!("{:.1}", result.hours).cyan().bold()
        );
    }
    Ok(())
}

fn run_contact(record: ContactRecord, json: bool) -> Result<()> {
    let delivery = LocalAcknowledgement::default();
    match submit(&record, &delivery)? {
        SubmissionOutcome::Delivered => {
            if json {
                println!("{}", serde_json::json!({ "status": "submitted" }));
            } else {
                println!("{} Submitted!", "✓".green().bold());
            }
            Ok(())
        }
        SubmissionOutcome::Rejected(errors) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
            } else {
                for field in ContactField::ALL {
                    if let Some(message) = errors.get(field) {
                        eprintln!("  {} {}: {}", "•".red(), field.to_string().bold(), message);
                    }
                }
            }
            anyhow::bail!("Contact form has {} invalid field(s)", errors.len())
        }
    }
}

fn run_theme(action: ThemeAction, json: bool) -> Result<()> {
    let store = FilePreferenceStore::new().context("Failed to locate preference file")?;
    let mut controller = ThemeController::load(store);

    if matches!(action, ThemeAction::Toggle) {
        controller
            .toggle()
            .context("Failed to save theme preference")?;
    }

    let theme = controller.theme();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&serde_json::json!({
                "theme": theme,
                "palette": theme.palette(),
            }))?
        );
    } else {
        println!("{} Theme: {}", theme.glyph(), theme.to_string().cyan().bold());
        let palette = theme.palette();
        println!("  {} body {}  text {}", "→".blue(), palette.body, palette.text);
        println!(
            "  {} accent {}  background {}",
            "→".blue(),
            palette.accent,
            palette.background
        );
    }
    Ok(())
}
