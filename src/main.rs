use codescape::{analyze_directory, version, watch_and_export};
use log::{error, info, warn};
use std::path::Path;
use std::time::Instant;

fn main() -> std::io::Result<()> {
    // Initialize logger
    if std::env::var_os("RUST_LOG").is_none() {
        unsafe {
            std::env::set_var("RUST_LOG", "info");
        }
    }
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        error!("Not enough arguments provided");
        eprintln!(
            "Usage: {} <source_path> [output_path] [num_threads] [json|watch]",
            args[0]
        );
        eprintln!("Version: {}", version());
        return Ok(());
    }

    let source_path = Path::new(&args[1]);
    let output_path = if args.len() >= 3 {
        Path::new(&args[2])
    } else {
        Path::new("codescape.json")
    };

    let num_threads = if args.len() >= 4 {
        args[3].parse().unwrap_or_else(|_| {
            let cpu_count = num_cpus::get();
            warn!(
                "Invalid thread count provided, defaulting to {} CPUs",
                cpu_count
            );
            cpu_count
        })
    } else {
        let cpu_count = num_cpus::get();
        info!("Using default thread count: {}", cpu_count);
        cpu_count
    };

    let mode = if args.len() >= 5 { args[4].as_str() } else { "json" };

    info!("Codescape v{}", version());
    info!("Processing Java sources at: {:?}", source_path);
    info!("Using {} threads", num_threads);
    info!("Mode: {}", mode);

    let start_time = Instant::now();

    match mode {
        "json" => {
            analyze_directory(source_path, output_path, num_threads)?;
        }
        "watch" => {
            info!("Watching for changes, snapshot kept at {:?}", output_path);
            watch_and_export(source_path, output_path, num_threads)?;
        }
        _ => {
            warn!("Unsupported mode: {}. Using json instead.", mode);
            analyze_directory(source_path, output_path, num_threads)?;
        }
    }

    let elapsed = start_time.elapsed();
    info!("Extraction completed in {:.2?}", elapsed);
    info!("Output saved to: {:?}", output_path);

    Ok(())
}
