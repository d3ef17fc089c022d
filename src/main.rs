use std::fs;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use serde::Serialize;

use agecalc::{
    age_between, generate_svg, logger, parse_birthdate, parse_date, BirthdateError, Labels, Lang,
    Theme,
};

#[derive(Parser, Debug)]
#[command(name = "agecalc", version)]
#[command(about = "Birthdate age calculator with English/Bengali output")]
struct Cli {
    /// Date of birth, YYYY-MM-DD
    birthdate: Option<String>,

    /// Reference date to measure against (defaults to the local date)
    #[arg(long, value_name = "YYYY-MM-DD")]
    today: Option<String>,

    /// Output language
    #[arg(long, value_enum, default_value_t = Lang::En)]
    lang: Lang,

    /// Card color scheme
    #[arg(long, value_enum, default_value_t = Theme::Light)]
    theme: Theme,

    /// Also write an SVG age card to this path
    #[arg(long, value_name = "PATH")]
    card: Option<PathBuf>,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Enable verbose output
    #[arg(long)]
    verbose: bool,
}

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);
    tracing::debug!("cli args: {cli:?}");

    let labels = cli.lang.labels();

    let today = match &cli.today {
        Some(raw) => parse_date(raw).unwrap_or_else(|err| reject(&labels, &err)),
        None => Local::now().date_naive(),
    };

    // An absent positional behaves like submitting an empty form.
    let raw_birthdate = cli.birthdate.as_deref().unwrap_or("");
    let birthdate =
        parse_birthdate(raw_birthdate, today).unwrap_or_else(|err| reject(&labels, &err));

    let age = age_between(birthdate, today);
    tracing::info!("age at {today} for birthdate {birthdate}: {age:?}");

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: true,
                data: age
            })?
        );
    } else {
        println!("{}", cli.lang.result_line(&age));
    }

    if let Some(path) = &cli.card {
        let card = generate_svg(&age, birthdate, cli.lang, cli.theme);
        fs::write(path, card)
            .with_context(|| format!("failed to write card to {}", path.display()))?;
        tracing::info!("card written to {}", path.display());
        if !cli.json {
            println!("Generated {} successfully.", path.display());
        }
    }

    Ok(())
}

/// Surfaces a rejected date the way the caller expects: localized alert on
/// stderr and the user-error exit code.
fn reject(labels: &Labels, err: &BirthdateError) -> ! {
    tracing::error!("rejected input: {err}");
    eprintln!("{}", labels.alert(err));
    process::exit(2);
}
