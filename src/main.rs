use clap::{App, Arg, ErrorKind};
use lc3vm::Config;
use std::process;

fn main() {
    let matches = App::new("lc3vm")
        .arg(
            Arg::with_name("IMAGE")
                .help("The program image(s) to load, in load order.")
                .required(true)
                .multiple(true)
                .index(1),
        )
        .get_matches_safe()
        .unwrap_or_else(|e| match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => {
                println!("{}", e.message);
                process::exit(2);
            }
        });

    let image_paths = matches
        .values_of("IMAGE")
        .unwrap()
        .map(str::to_string)
        .collect();

    if let Err(e) = lc3vm::run(Config::new(image_paths)) {
        println!("{}", e);
        process::exit(1);
    }
}
