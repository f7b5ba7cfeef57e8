use iso4217_gen::{codes, generate, EmissionConfig};
use log::debug;
use std::env;
use std::fs;
use std::io::{self, Write};

fn print_usage(program: &str) {
    println!("gen-iso4217 - generate the ISO 4217 numeric currency code header");
    println!();
    println!("Usage: {} [options]", program);
    println!();
    println!("Options:");
    println!("  --no-copyright   omit the license block");
    println!("  --no-guard       omit the include guard");
    println!("  --tab <str>      indent unit (default: four spaces)");
    println!("  -o <file>        write to <file> instead of standard output");
    println!("  --help           show this help");
    println!();
    println!("Examples:");
    println!("  {} > backend/iso4217.h", program);
    println!("  {} --no-copyright -o /tmp/iso4217.h", program);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut config = EmissionConfig::default();
    let mut output: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                return Ok(());
            }
            "--no-copyright" => config.emit_copyright = false,
            "--no-guard" => config.emit_header_guard = false,
            "--tab" => {
                i += 1;
                let tab = args
                    .get(i)
                    .ok_or("--tab requires an argument")?;
                config.indent = tab.clone();
            }
            "-o" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or("-o requires a file argument")?;
                output = Some(path.clone());
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!();
                print_usage(&args[0]);
                std::process::exit(2);
            }
        }
        i += 1;
    }

    let text = generate(codes::ISO4217_NUMERIC, &config)?;

    match output {
        Some(path) => {
            debug!("writing header to {}", path);
            fs::write(&path, text)?;
        }
        None => {
            io::stdout().write_all(text.as_bytes())?;
        }
    }

    Ok(())
}
