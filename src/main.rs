use std::{process, time::Instant};

use clap::Parser;
use huffman_compressor::{driver::compress_file, properties::Properties, store::{file_name, REPORT_EXTENSION}, Error, Result};

#[derive(Parser, Debug)]
#[command(about = "Compress a file with Huffman coding and report per-symbol codes and the total savings")]
struct Args {
    /// The file to compress
    source_name: String,
    /// The destination basename of the compressed files
    dest_name: String,
    /// Properties file with the compressor configuration
    #[arg(short, long = "properties")]
    properties: Option<String>,
    /// Alphabet unit: BYTE or CODEPOINT
    #[arg(short, long)]
    unit: Option<String>,
    /// Payload representation: PACKED or ASCII
    #[arg(long = "payload-format")]
    payload_format: Option<String>,
    /// Codebook serialization: JSON or BINCODE
    #[arg(long = "codebook-format")]
    codebook_format: Option<String>,
    /// Bits an uncompressed symbol is worth when computing the savings
    #[arg(long = "bits-per-symbol")]
    bits_per_symbol: Option<u32>,
    /// Write the stage timings to <dest_name>.stats
    #[arg(short, long = "stats", default_value_t = false)]
    stats: bool,
    /// Print the report, the stage timings and the tree
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn config(args: &Args) -> Result<Properties> {
    let mut props = match &args.properties {
        Some(path) => Properties::load(path).map_err(|e| match e {
            Error::Io(io) => Error::Config(format!("Could not read {}: {}", path, io)),
            other => other,
        })?,
        None => Properties::default(),
    };

    if let Some(unit) = &args.unit {
        props.unit = unit.parse()?;
    }
    if let Some(format) = &args.payload_format {
        props.payload_format = format.parse()?;
    }
    if let Some(format) = &args.codebook_format {
        props.codebook_format = format.parse()?;
    }
    if let Some(bits) = args.bits_per_symbol {
        if bits == 0 {
            return Err(Error::Config("bits-per-symbol must be positive".to_owned()));
        }
        props.bits_per_symbol = bits;
    }

    Ok(props)
}

fn run(args: &Args) -> Result<()> {
    let config = config(args)?;

    let comp_time = Instant::now();
    let summary = compress_file(&args.source_name, &args.dest_name, &config, args.stats)?;
    let comp_time = comp_time.elapsed().as_nanos();

    println!("compressed {} in {}ns", args.source_name, comp_time);
    println!(
        "{} symbols ({} distinct) -> {} bits, total savings {} bits, report in {}",
        summary.props.symbols,
        summary.props.distinct_symbols,
        summary.props.bits,
        summary.props.savings,
        file_name(&args.dest_name, REPORT_EXTENSION)
    );

    if args.verbose {
        print!("{}", summary.report);
        print!("{}", summary.stats);
        print!("{}", summary.tree);
    }

    Ok(())
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}
