//! CLI Tool Example
//!
//! Extracts a class schedule from a spreadsheet range and prints it as JSON.
//!
//! Set `RUST_LOG=debug` to see which sheet and rectangle were read.

use std::io;
use std::process;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use xlsxsched::{
    DateFormat, EmptyCellPolicy, Extraction, ExtractorBuilder, Labels, OutputShape,
    ScheduleError,
};

fn main() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input.xlsx> <range> [options]", args[0]);
        eprintln!("\nOptions:");
        eprintln!("  --cells   Output display strings per column instead of records");
        eprintln!("  --ru      Use Russian labels (and dd.mm.yy dates with --cells)");
        eprintln!("\nExamples:");
        eprintln!("  {} schedule.xlsx D6:Z34", args[0]);
        eprintln!("  {} schedule.xlsx D6:Z34 --cells --ru", args[0]);
        process::exit(1);
    }

    let input_path = &args[1];
    let range = &args[2];

    let mut cells = false;
    let mut russian = false;
    for option in &args[3..] {
        match option.as_str() {
            "--cells" => cells = true,
            "--ru" => russian = true,
            _ => {
                eprintln!("Error: Unknown option: {}", option);
                process::exit(1);
            }
        }
    }

    match extract(input_path, range, cells, russian) {
        Ok(extraction) => {
            if let Err(e) = extraction.write_json(io::stdout().lock()) {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn extract(
    input_path: &str,
    range: &str,
    cells: bool,
    russian: bool,
) -> Result<Extraction, ScheduleError> {
    let mut builder = ExtractorBuilder::new();

    if russian {
        builder = builder.with_labels(Labels::russian());
    }
    if cells {
        builder = builder.with_output_shape(OutputShape::FlatCellList);
        if russian {
            builder = builder
                .with_empty_cell_policy(EmptyCellPolicy::self_study())
                .with_date_format(DateFormat::russian_short());
        }
    }

    builder.build()?.extract(input_path, range)
}
