use std::fs;
use std::process;

use analizador::{Analyzer, Config, ScoringPolicy};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::from_args(std::env::args().collect()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            Config::print_help();
            process::exit(1);
        }
    };

    if config.show_help {
        Config::print_help();
        return;
    }

    let analyzer = match Analyzer::new(ScoringPolicy::default()) {
        Ok(a) => a.with_max_text_len(config.max_text_len),
        Err(e) => {
            eprintln!("Error inicializando analizador: {}", e);
            process::exit(1);
        }
    };

    // Obtener texto a analizar
    let text = if let Some(ref input_file) = config.input_file {
        match fs::read_to_string(input_file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error leyendo archivo '{}': {}", input_file, e);
                process::exit(1);
            }
        }
    } else if let Some(ref text) = config.text {
        text.clone()
    } else {
        eprintln!("Error: No se proporcionó texto para analizar.");
        eprintln!();
        Config::print_help();
        process::exit(1);
    };

    let report = match analyzer.analyze(&text) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error analizando texto: {}", e);
            process::exit(1);
        }
    };

    let result = if config.compact {
        serde_json::to_string(&report)
    } else {
        serde_json::to_string_pretty(&report)
    };
    let result = match result {
        Ok(json) => json,
        Err(e) => {
            eprintln!("Error serializando informe: {}", e);
            process::exit(1);
        }
    };

    // Escribir resultado
    if let Some(ref output_file) = config.output_file {
        if let Err(e) = fs::write(output_file, &result) {
            eprintln!("Error escribiendo archivo '{}': {}", output_file, e);
            process::exit(1);
        }
    } else {
        println!("{}", result);
    }
}
