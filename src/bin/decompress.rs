use std::{process, time::Instant};

use clap::Parser;
use huffman_compressor::driver::decompress_file;

#[derive(Parser, Debug)]
#[command(about = "Restore a file compressed by huffman_compressor from its basename")]
struct Args {
    /// The basename of the compressed files
    source_name: String,
    /// The file to write the restored content to
    dest_name: String,
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

    let decomp_time = Instant::now();
    match decompress_file(&args.source_name, &args.dest_name) {
        Ok(symbols) => {
            let decomp_time = decomp_time.elapsed().as_nanos();
            println!("decompressed {} symbols into {} in {}ns", symbols, args.dest_name, decomp_time);
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
