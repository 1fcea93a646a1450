use ansi_term::Colour;
use chrono::Timelike;
use clap::{Parser, Subcommand};
use fastfit_core::*;
use std::io::{self, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

// Input ranges enforced by the setup form; the core assumes validated values.
const AGE_RANGE: RangeInclusive<u32> = 10..=110;
const WEIGHT_RANGE: RangeInclusive<f64> = 20.0..=300.0;
const HEIGHT_RANGE: RangeInclusive<f64> = 100.0..=250.0;

#[derive(Parser)]
#[command(name = "fastfit")]
#[command(about = "Fasting-day exercise schedule advisor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override data directory
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the recommendation for the current time (default)
    Now {
        /// Resolve a specific clock time (HH:MM, 24-hour) instead of now
        #[arg(long)]
        at: Option<String>,

        /// Override the profile time zone (IANA id)
        #[arg(long)]
        tz: Option<String>,
    },

    /// Refresh the recommendation once per minute
    Watch {
        /// Override the profile time zone (IANA id)
        #[arg(long)]
        tz: Option<String>,

        /// Stop after this many refreshes (for testing)
        #[arg(long)]
        ticks: Option<u32>,
    },

    /// Create or edit the user profile
    Setup {
        /// Age in years (10-110)
        #[arg(long)]
        age: Option<u32>,

        /// Weight in kilograms (20-300)
        #[arg(long)]
        weight: Option<f64>,

        /// Height in centimetres (100-250)
        #[arg(long)]
        height: Option<f64>,

        /// Sex (male or female)
        #[arg(long)]
        sex: Option<String>,

        /// IANA time zone id (e.g. Asia/Riyadh); "system" selects the system zone
        #[arg(long)]
        timezone: Option<String>,
    },

    /// Print the full daily schedule for the current tier
    Schedule,

    /// Show the stored profile and derived stats
    Profile,

    /// List IANA time zone ids, optionally filtered
    Timezones {
        /// Case-insensitive substring filter
        filter: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    fastfit_core::logging::init();

    let cli = Cli::parse();

    // Determine data directory
    let config = Config::load()?;
    let data_dir = cli.data_dir.unwrap_or_else(|| config.data.data_dir.clone());

    match cli.command {
        Some(Commands::Now { at, tz }) => cmd_now(&data_dir, at, tz),
        Some(Commands::Watch { tz, ticks }) => cmd_watch(&data_dir, tz, ticks, &config),
        Some(Commands::Setup {
            age,
            weight,
            height,
            sex,
            timezone,
        }) => cmd_setup(&data_dir, age, weight, height, sex, timezone),
        Some(Commands::Schedule) => cmd_schedule(&data_dir),
        Some(Commands::Profile) => cmd_profile(&data_dir),
        Some(Commands::Timezones { filter }) => cmd_timezones(filter),
        None => {
            // Default to "now" command
            cmd_now(&data_dir, None, None)
        }
    }
}

fn profile_path(data_dir: &Path) -> PathBuf {
    data_dir.join("profile.json")
}

/// Load the profile, refusing until the setup form has been completed
fn load_completed_profile(data_dir: &Path) -> Result<UserProfile> {
    let profile = UserProfile::load(&profile_path(data_dir))?;
    if !profile.setup_complete {
        eprintln!("No profile found. Run `fastfit setup` first.");
        return Err(Error::Profile("profile setup not completed".into()));
    }
    Ok(profile)
}

/// Fetch the built-in schedule, failing on catalog defects
fn load_schedule() -> Result<&'static Schedule> {
    let schedule = get_default_schedule();
    let errors = schedule.validate();
    if !errors.is_empty() {
        eprintln!("Schedule validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::ScheduleValidation("Invalid schedule".into()));
    }
    Ok(schedule)
}

fn cmd_now(data_dir: &Path, at: Option<String>, tz: Option<String>) -> Result<()> {
    let profile = load_completed_profile(data_dir)?;
    let schedule = load_schedule()?;

    let clock = resolve_clock(&profile, at.as_deref(), tz.as_deref())?;
    render_recommendation(&clock, &profile, schedule);
    Ok(())
}

fn cmd_watch(
    data_dir: &Path,
    tz: Option<String>,
    ticks: Option<u32>,
    config: &Config,
) -> Result<()> {
    // Profile existence is checked up front so a missing setup fails fast
    load_completed_profile(data_dir)?;
    let schedule = load_schedule()?;

    let mut rendered = 0u32;
    loop {
        // Re-read the profile each tick so an edit becomes visible on the
        // next refresh without restarting the watch
        let profile = load_completed_profile(data_dir)?;
        let clock = resolve_clock(&profile, None, tz.as_deref())?;
        render_recommendation(&clock, &profile, schedule);

        rendered += 1;
        if let Some(limit) = ticks {
            if rendered >= limit {
                break;
            }
        }

        std::thread::sleep(std::time::Duration::from_secs(next_refresh_delay_secs(
            config.clock.refresh_secs,
        )));
    }

    Ok(())
}

/// Seconds to sleep before the next refresh.
///
/// At the default one-minute cadence the sleep is aligned to the next minute
/// boundary so the displayed time never lags the wall clock.
fn next_refresh_delay_secs(refresh_secs: u64) -> u64 {
    if refresh_secs == 60 {
        let second = chrono::Local::now().second() as u64;
        (60 - second).max(1)
    } else {
        refresh_secs.max(1)
    }
}

fn cmd_setup(
    data_dir: &Path,
    age: Option<u32>,
    weight: Option<f64>,
    height: Option<f64>,
    sex: Option<String>,
    timezone: Option<String>,
) -> Result<()> {
    let path = profile_path(data_dir);
    let existing = UserProfile::load(&path)?;

    // Flags that are present skip their prompt; a fully-flagged invocation
    // is non-interactive
    let interactive =
        age.is_none() || weight.is_none() || height.is_none() || sex.is_none();

    let age_years = match age {
        Some(v) => validate_range("age", v, &AGE_RANGE)?,
        None => prompt_u32("Age (years)", existing.age_years, &AGE_RANGE)?,
    };

    let weight_kg = match weight {
        Some(v) => validate_range_f64("weight", v, &WEIGHT_RANGE)?,
        None => prompt_f64("Weight (kg)", existing.weight_kg, &WEIGHT_RANGE)?,
    };

    let height_cm = match height {
        Some(v) => validate_range_f64("height", v, &HEIGHT_RANGE)?,
        None => prompt_f64("Height (cm)", existing.height_cm, &HEIGHT_RANGE)?,
    };

    let sex = match sex {
        Some(v) => parse_sex(&v)?,
        None => prompt_sex(existing.sex)?,
    };

    let timezone = match timezone {
        Some(tz) => parse_timezone_arg(&tz)?,
        None if interactive => prompt_timezone(existing.timezone.as_deref())?,
        None => existing.timezone.clone(),
    };

    let profile = UserProfile {
        age_years,
        weight_kg,
        height_cm,
        sex,
        timezone,
        setup_complete: true,
    };
    profile.save(&path)?;

    println!("\n✓ Profile saved.");
    println!("  {}", profile.summary());
    Ok(())
}

fn cmd_schedule(data_dir: &Path) -> Result<()> {
    let profile = load_completed_profile(data_dir)?;
    let tier = profile.fitness_tier();
    let schedule = load_schedule()?;

    let clock = now_in(profile.timezone.as_deref())?;
    let current = resolve_slot(schedule, clock.minutes_since_midnight());

    println!("\nDaily schedule ({})", tier.intensity_label());
    println!("─────────────────────────────────────────");
    for slot in &schedule.slots {
        let content = slot.content_for(tier);
        let marker = if std::ptr::eq(slot, current) { "→" } else { " " };
        println!(
            "{} {:<20} {:<22} {}  [{}]",
            marker,
            slot.period,
            content.time_range,
            content.activity,
            content.status.badge_label()
        );
    }
    println!();
    Ok(())
}

fn cmd_profile(data_dir: &Path) -> Result<()> {
    let profile = load_completed_profile(data_dir)?;

    println!("\nStored profile:");
    println!("  Age:       {} years", profile.age_years);
    println!("  Weight:    {:.1} kg", profile.weight_kg);
    println!("  Height:    {:.0} cm", profile.height_cm);
    println!(
        "  Sex:       {}",
        match profile.sex {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    );
    println!(
        "  Time zone: {}",
        profile.timezone.as_deref().unwrap_or("system")
    );
    println!();
    println!("  {}", profile.summary());
    Ok(())
}

fn cmd_timezones(filter: Option<String>) -> Result<()> {
    let needle = filter.map(|f| f.to_lowercase());
    for tz in &chrono_tz::TZ_VARIANTS {
        let name = tz.name();
        if let Some(ref needle) = needle {
            if !name.to_lowercase().contains(needle) {
                continue;
            }
        }
        println!("{}", name);
    }
    Ok(())
}

/// Resolve the wall clock for a command: `--at` wins, then `--tz`, then the
/// profile's stored zone
fn resolve_clock(
    profile: &UserProfile,
    at: Option<&str>,
    tz: Option<&str>,
) -> Result<WallClock> {
    if let Some(at) = at {
        return parse_clock_arg(at);
    }
    let timezone = tz.or(profile.timezone.as_deref());
    now_in(timezone)
}

fn render_recommendation(clock: &WallClock, profile: &UserProfile, schedule: &Schedule) {
    let tier = profile.fitness_tier();
    let rec = recommend(schedule, clock.minutes_since_midnight(), tier);

    let (r, g, b) = rec.content.status.badge_color_rgb();
    let badge = Colour::White
        .on(Colour::RGB(r, g, b))
        .bold()
        .paint(format!(" {} ", rec.content.status.badge_label()));

    println!("\n╭─────────────────────────────────────────╮");
    println!("│  {}", rec.slot.period.to_uppercase());
    println!("╰─────────────────────────────────────────╯");
    println!();
    println!("  {}", clock.format_12h());
    println!("  {}", badge);
    println!();
    println!("  {}", rec.content.time_range);
    println!("  → {}", rec.content.activity);
    println!("  {}", rec.content.tip);
    println!();
    println!("  {}", profile.summary());
    println!();
}

// ── Argument parsing helpers ─────────────────────────────────────────────

fn parse_clock_arg(value: &str) -> Result<WallClock> {
    let (h, m) = value
        .split_once(':')
        .ok_or_else(|| Error::Other(format!("Invalid time '{}'; expected HH:MM", value)))?;

    let hour: u32 = h
        .trim()
        .parse()
        .map_err(|_| Error::Other(format!("Invalid hour in '{}'", value)))?;
    let minute: u32 = m
        .trim()
        .parse()
        .map_err(|_| Error::Other(format!("Invalid minute in '{}'", value)))?;

    if hour > 23 || minute > 59 {
        return Err(Error::Other(format!("Time '{}' out of range", value)));
    }

    Ok(WallClock::new(hour, minute))
}

fn parse_sex(value: &str) -> Result<Sex> {
    match value.to_lowercase().as_str() {
        "male" | "m" => Ok(Sex::Male),
        "female" | "f" => Ok(Sex::Female),
        other => Err(Error::Other(format!(
            "Unknown sex '{}'; expected male or female",
            other
        ))),
    }
}

fn parse_timezone_arg(value: &str) -> Result<Option<String>> {
    if value.eq_ignore_ascii_case("system") {
        return Ok(None);
    }
    fastfit_core::clock::parse_zone(value)?;
    Ok(Some(value.to_string()))
}

fn validate_range(label: &str, value: u32, range: &RangeInclusive<u32>) -> Result<u32> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(Error::Other(format!(
            "Invalid {} {}; expected {}-{}",
            label,
            value,
            range.start(),
            range.end()
        )))
    }
}

fn validate_range_f64(label: &str, value: f64, range: &RangeInclusive<f64>) -> Result<f64> {
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(Error::Other(format!(
            "Invalid {} {}; expected {}-{}",
            label,
            value,
            range.start(),
            range.end()
        )))
    }
}

// ── Interactive prompts (setup form) ─────────────────────────────────────

fn prompt_line(label: &str) -> Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

fn prompt_u32(label: &str, current: u32, range: &RangeInclusive<u32>) -> Result<u32> {
    loop {
        let input = prompt_line(&format!("{} [{}]", label, current))?;
        if input.is_empty() {
            return Ok(current);
        }
        match input.parse::<u32>() {
            Ok(v) if range.contains(&v) => return Ok(v),
            _ => println!(
                "Please enter a value between {} and {}.",
                range.start(),
                range.end()
            ),
        }
    }
}

fn prompt_f64(label: &str, current: f64, range: &RangeInclusive<f64>) -> Result<f64> {
    loop {
        let input = prompt_line(&format!("{} [{}]", label, current))?;
        if input.is_empty() {
            return Ok(current);
        }
        match input.parse::<f64>() {
            Ok(v) if range.contains(&v) => return Ok(v),
            _ => println!(
                "Please enter a value between {} and {}.",
                range.start(),
                range.end()
            ),
        }
    }
}

fn prompt_sex(current: Sex) -> Result<Sex> {
    let current_label = match current {
        Sex::Male => "male",
        Sex::Female => "female",
    };
    loop {
        let input = prompt_line(&format!("Sex (male/female) [{}]", current_label))?;
        if input.is_empty() {
            return Ok(current);
        }
        match parse_sex(&input) {
            Ok(sex) => return Ok(sex),
            Err(_) => println!("Please enter male or female."),
        }
    }
}

fn prompt_timezone(current: Option<&str>) -> Result<Option<String>> {
    let current_label = current.unwrap_or("system");
    loop {
        let input = prompt_line(&format!(
            "Time zone id, or 'system' [{}] (see `fastfit timezones`)",
            current_label
        ))?;
        if input.is_empty() {
            return Ok(current.map(|s| s.to_string()));
        }
        match parse_timezone_arg(&input) {
            Ok(tz) => return Ok(tz),
            Err(e) => println!("{}", e),
        }
    }
}
