use std::env;
use a6syx::{
    classify, calculate_fingerprint, friendly_program_name, message_count, name_from_dump,
    number_from_dump, read_file, split_messages, Manufacturer, MessageKind, PATCH_COUNT,
};

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("usage: a6identify file");
        std::process::exit(1);
    }

    let buffer = match read_file(&args[1]) {
        Ok(buffer) => buffer,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let count = message_count(&buffer);
    for (index, message) in split_messages(&buffer).iter().enumerate() {
        println!("Message {} of {}", index + 1, count);
        identify(message);
        println!("Fingerprint: {}", calculate_fingerprint(message));
        println!();
    }
}

fn identify(message: &[u8]) {
    match classify(message) {
        MessageKind::SingleProgramDump => {
            let name = name_from_dump(message).unwrap_or_default();
            match number_from_dump(message) {
                Ok(number) if number < PATCH_COUNT => {
                    println!("Program dump: {} \"{}\"", friendly_program_name(number), name);
                },
                _ => println!("Program dump with unknown address: \"{}\"", name),
            }
        },
        MessageKind::DeviceInquiryReply => {
            println!("Andromeda A6 device inquiry reply, {} bytes", message.len());
        },
        MessageKind::Unknown => {
            match Manufacturer::from_message(message) {
                Some(manufacturer) => println!("Manufacturer: {}, {} bytes", manufacturer, message.len()),
                None => println!("Not an A6 message, {} bytes", message.len()),
            }
        },
    }
}
