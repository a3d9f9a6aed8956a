use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::error::AppError;
use crate::models::{Calibration, Observations, PhResult};
use crate::ph::calculator::DetailedRow;

#[derive(Parser, Debug)]
#[command(author, version, about = "ISFET pH calculator (free and total scale) — optional JSON output", long_about = None)]
pub struct Args {
    #[arg(long)]
    pub json: bool,
    #[arg(long, help = "Print every intermediate quantity per row")]
    pub detailed: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with observations and calibration; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for observations (overrides --input)"
    )]
    observations_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for the sensor calibration (required with --observations-json)"
    )]
    calibration_json: Option<String>,
}

#[derive(serde::Deserialize)]
struct CmdInput {
    observations: Observations,
    #[serde(default)]
    calibration: Option<Calibration>,
}

fn parse_inline_inputs(
    observations_json: &str,
    calibration_json: Option<&String>,
) -> Result<(Observations, Calibration), AppError> {
    let observations: Observations = serde_json::from_str(observations_json)
        .map_err(|source| AppError::ParseObservationsJson { source })?;

    let calibration = match calibration_json {
        Some(s) => serde_json::from_str::<Calibration>(s)
            .map_err(|source| AppError::ParseCalibrationJson { source })?,
        None => return Err(AppError::MissingCalibration),
    };

    Ok((observations, calibration))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Observations, Calibration), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    let calibration = parsed.calibration.ok_or(AppError::MissingCalibration)?;
    Ok((parsed.observations, calibration))
}

pub fn parse_inputs(args: &Args) -> Result<(Observations, Calibration), AppError> {
    match (&args.observations_json, &args.input) {
        (Some(obs_json), _) => parse_inline_inputs(obs_json, args.calibration_json.as_ref()),
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)
        }
        (None, None) => Err(AppError::MissingInputData),
    }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let s =
        serde_json::to_string_pretty(value).map_err(|source| AppError::SerializeOutput { source })?;
    println!("{}", s);
    Ok(())
}

pub fn print_output(obs: &Observations, out: &PhResult, args: &Args) -> Result<(), AppError> {
    if args.json {
        return print_json(out);
    }

    println!(
        "{:<6} {:<8} {:<8} {:<8} {:<10} {:<10}",
        "Index", "Press", "Temp", "Salt", "pH_free", "pH_total"
    );
    println!("{}", "-".repeat(60));
    for (i, (sample, p)) in obs.samples().zip(out.rows()).enumerate() {
        println!(
            "{:<6} {:<8.1} {:<8.1} {:<8.1} {:<10.3} {:<10.3}",
            i, sample.pressure, sample.temperature, sample.salinity, p.ph_free, p.ph_total
        );
    }

    Ok(())
}

pub fn print_detailed(
    obs: &Observations,
    rows: &[DetailedRow],
    args: &Args,
) -> Result<(), AppError> {
    if args.json {
        return print_json(rows);
    }

    println!(
        "{:<6} {:<8} {:<8} {:<8} {:<9} {:<9} {:<10} {:<10} {:<10} {:<10}",
        "Index", "Press", "Temp", "Salt", "IonS", "KHSO4", "lgHCl_TP", "k0TP", "pH_free",
        "pH_total"
    );
    println!("{}", "-".repeat(97));
    for (i, (sample, r)) in obs.samples().zip(rows).enumerate() {
        println!(
            "{:<6} {:<8.1} {:<8.1} {:<8.1} {:<9.5} {:<9.5} {:<10.5} {:<10.6} {:<10.4} {:<10.4}",
            i,
            sample.pressure,
            sample.temperature,
            sample.salinity,
            r.ionic_strength,
            r.khso4_tps,
            r.log10_gamma_hcl_tp,
            r.k0tp,
            r.ph_free,
            r.ph_total
        );
    }

    Ok(())
}
