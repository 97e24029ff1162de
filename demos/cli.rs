//! Command-line interface for clean_quote
//!
//! Reads a JSON quote request, prints the priced quote as JSON on stdout and
//! a human summary on stderr. Optionally suggests a soil level from room
//! photographs.

use std::{env, path::PathBuf, process};

use serde::{Deserialize, Serialize};

use clean_quote::{
    aggregate, calc_room, image_loader, suggest_soil_level, ClassifierConfig, ContractParams,
    QuoteTotals, RoomInput, RoomResult, SoilGrade,
};

#[derive(Debug, Deserialize)]
struct QuoteRequest {
    #[serde(default)]
    contract: ContractParams,
    rooms: Vec<RoomInput>,
}

#[derive(Debug, Serialize)]
struct QuoteResponse {
    rooms: Vec<RoomResult>,
    totals: QuoteTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    soil_suggestion: Option<SoilGrade>,
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut request_path = None;
    let mut photo_paths: Vec<PathBuf> = Vec::new();
    let mut collecting_photos = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--suggest" => {
                collecting_photos = true;
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if collecting_photos {
                    photo_paths.push(PathBuf::from(arg));
                } else if request_path.is_none() {
                    request_path = Some(PathBuf::from(arg));
                } else {
                    eprintln!("Error: Multiple request files provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let request_path = match request_path {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let content = match std::fs::read_to_string(&request_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", request_path.display(), e);
            process::exit(1);
        }
    };
    let request: QuoteRequest = match serde_json::from_str(&content) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Error: Invalid quote request JSON: {}", e);
            process::exit(1);
        }
    };

    // Drop photos the decoder cannot handle before analysis starts
    let photo_paths: Vec<PathBuf> = photo_paths
        .into_iter()
        .filter(|path| {
            let supported = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(image_loader::is_supported_extension)
                .unwrap_or(false);
            if !supported {
                eprintln!("Skipping unsupported photo format: {}", path.display());
            }
            supported
        })
        .collect();

    // Soil suggestion is advisory; a failure never blocks the quote
    let soil_suggestion = if photo_paths.is_empty() {
        None
    } else {
        match suggest_soil_level(&photo_paths, &ClassifierConfig::default()) {
            Ok(grade) => Some(grade),
            Err(error) => {
                eprintln!("Soil suggestion failed: {}", error);
                if error.is_recoverable() {
                    eprintln!("Suggestion: {}", error.user_message());
                }
                None
            }
        }
    };

    let rooms: Vec<RoomResult> = request
        .rooms
        .iter()
        .map(|room| calc_room(room, &request.contract))
        .collect();
    let totals = aggregate(&rooms, request.contract.team_size);

    let response = QuoteResponse {
        rooms,
        totals,
        soil_suggestion,
    };

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    print_summary(&response);
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <request.json> [--suggest <photo>...]", program_name);
    eprintln!();
    eprintln!("Price a multi-room cleaning job from a JSON request.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --suggest <photo>...  Suggest a soil level from room photographs");
    eprintln!("  --help, -h            Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} quote.json", program_name);
    eprintln!("  {} quote.json --suggest room1.jpg room2.jpg", program_name);
}

fn print_summary(response: &QuoteResponse) {
    eprintln!();
    eprintln!("Quote Summary:");
    eprintln!("  Rooms: {}", response.rooms.len());
    eprintln!("  Net: {:.2}", response.totals.net);
    eprintln!("  VAT: {:.2}", response.totals.vat);
    eprintln!("  Gross: {:.2}", response.totals.gross);
    eprintln!("  Time: {:.0} min", response.totals.time_min);
    match response.totals.finish_hours {
        Some(hours) => eprintln!(
            "  Finish: {:.2} h (team of {})",
            hours, response.totals.team_size
        ),
        None => eprintln!("  Finish: –"),
    }
    if let Some(grade) = response.soil_suggestion {
        eprintln!("  Soil suggestion: {}", grade);
    }
}
