// src/bin/cli.rs
use colors_saved::cli::{self, Command};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    match cli::parse_args(std::env::args().skip(1))? {
        Command::Help => eprintln!("{}", cli::HELP),
        Command::Run(opts) => {
            let summary = cli::run(&opts)?;
            if opts.io.json_out.is_some() {
                eprintln!("Wrote {} color(s)", summary.records.len());
            }
        }
    }
    Ok(())
}
