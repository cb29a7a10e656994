use std::env;
use std::fs;
use a6syx::{convert_to_program_dump, friendly_program_name, message_count, read_file, PATCH_COUNT};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        println!("usage: a6readdress infile number outfile");
        std::process::exit(1);
    }

    let number: usize = match args[2].parse() {
        Ok(n) if n < PATCH_COUNT => n,
        _ => {
            eprintln!("Patch number must be between 0 and {}", PATCH_COUNT - 1);
            std::process::exit(1);
        }
    };

    let buffer = match read_file(&args[1]) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if message_count(&buffer) > 1 {
        println!("More than one System Exclusive message found. Please split them first.");
        std::process::exit(1);
    }

    match convert_to_program_dump(&buffer, number) {
        Ok(dump) => {
            if let Err(e) = fs::write(&args[3], dump) {
                eprintln!("unable to write {}: {}", args[3], e);
                std::process::exit(1);
            }
            println!("Wrote {} as {}", args[3], friendly_program_name(number));
        },
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
