// src/cli.rs
use std::{fs, path::{Path, PathBuf}};

use crate::{
    config::{
        consts::{DEFAULT_OUT_FILE, DEFAULT_SWATCH_FILE},
        options::AppOptions,
    },
    document::HtmlDocument,
    error::{Error, Result},
    extract::Summary,
    file,
    log,
    page::Page,
    palette::{Palette, Rgb},
    swatch,
};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Run(AppOptions),
    Help,
}

pub fn parse_args<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    let usage = |msg: &str| Error::Usage(msg.to_string());

    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--in" => opts.io.input = Some(PathBuf::from(args.next().ok_or_else(|| usage("Missing input file"))?)),
            "-o" | "--out" => opts.io.json_out = Some(file::resolve_out_path(
                &args.next().ok_or_else(|| usage("Missing output path"))?,
                DEFAULT_OUT_FILE,
            )?),
            "--page-out" => opts.io.page_out = Some(PathBuf::from(args.next().ok_or_else(|| usage("Missing value for --page-out"))?)),
            "--swatch" => opts.io.swatch_out = Some(file::resolve_out_path(
                &args.next().ok_or_else(|| usage("Missing value for --swatch"))?,
                DEFAULT_SWATCH_FILE,
            )?),
            "--text" => opts.io.text = Some(args.next().ok_or_else(|| usage("Missing value for --text"))?),
            "--table" => opts.extract.table_id = non_empty(args.next(), "--table")?,
            "--output" => opts.extract.output_id = non_empty(args.next(), "--output")?,
            "--strict" => opts.extract = opts.extract.strict(),
            "--pretty" => opts.extract.pretty = true,
            "--log" => log::set_path(args.next().ok_or_else(|| usage("Missing value for --log"))?),
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(Error::Usage(format!("Unknown arg: {a}"))),
        }
    }

    if opts.io.input.is_none() {
        return Err(usage("Specify the page with --in <file>"));
    }
    Ok(Command::Run(opts))
}

fn non_empty(v: Option<String>, flag: &str) -> Result<String> {
    match v {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(Error::Usage(format!("Missing value for {flag}"))),
    }
}

/// `--text` takes a file when one exists at that path, the literal text otherwise.
fn read_text_arg(arg: &str) -> Result<String> {
    let path = Path::new(arg);
    if path.is_file() {
        Ok(fs::read_to_string(path)?)
    } else {
        Ok(arg.to_string())
    }
}

/// Load the page, fire it once, then write whatever outputs were asked for.
pub fn run(opts: &AppOptions) -> Result<Summary> {
    let input = opts.io.input.as_ref().ok_or_else(|| Error::Usage("No input page".into()))?;
    logf!("CLI: input={}, table=#{}, output=#{}, policy={:?}",
        input.display(), opts.extract.table_id, opts.extract.output_id, opts.extract.row_policy);

    let doc = HtmlDocument::from_file(input)?;
    let mut page = Page::new(doc, opts.extract.clone());
    let summary = page
        .on_load()?
        .ok_or_else(|| Error::Usage("page was already loaded".into()))?;

    for (index, cells) in &summary.skipped {
        eprintln!("warning: row {index} has {cells} cell(s), skipped");
    }

    match &opts.io.json_out {
        Some(path) => { file::write_text(path, &summary.json)?; }
        None => println!("{}", summary.json),
    }

    if let Some(path) = &opts.io.page_out {
        file::write_text(path, page.document().html())?;
    }

    if opts.io.swatch_out.is_none() && opts.io.text.is_none() {
        return Ok(summary);
    }

    let palette = Palette::from_records(&summary.records)?;
    let colors: Vec<Rgb> = match &opts.io.text {
        Some(arg) => {
            let text = read_text_arg(arg)?;
            let found = palette.find_in_text(&text);
            for m in &found {
                eprintln!("{} -> {} {}", m.word, m.norm, m.color);
            }
            if found.is_empty() {
                logw!("text has no color words");
            }
            found.iter().map(|m| m.rgb).collect()
        }
        None => palette.colors(),
    };

    if let Some(path) = &opts.io.swatch_out {
        swatch::save_swatch(path, &colors)?;
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::RowPolicy;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_flags() {
        let cmd = parse_args(args(&["--in", "page.html", "--strict", "--pretty", "--table", "colors"])).unwrap();
        let Command::Run(opts) = cmd else { panic!("expected run") };
        assert_eq!(opts.io.input, Some(PathBuf::from("page.html")));
        assert_eq!(opts.extract.row_policy, RowPolicy::Fail);
        assert!(opts.extract.pretty);
        assert_eq!(opts.extract.table_id, "colors");
        assert_eq!(opts.extract.output_id, "output");
        assert_eq!(opts.io.json_out, None);
    }

    #[test]
    fn text_flag_is_kept_verbatim() {
        let cmd = parse_args(args(&["--in", "page.html", "--text", " dark-red sky "])).unwrap();
        let Command::Run(opts) = cmd else { panic!("expected run") };
        assert_eq!(opts.io.text.as_deref(), Some(" dark-red sky "));
        assert!(matches!(parse_args(args(&["--in", "p.html", "--text"])), Err(Error::Usage(_))));
    }

    #[test]
    fn text_arg_reads_existing_file() {
        let path = std::env::temp_dir().join("colors_cli_text_arg.txt");
        fs::write(&path, "red wine").unwrap();
        assert_eq!(read_text_arg(path.to_str().unwrap()).unwrap(), "red wine");
        assert_eq!(read_text_arg("just red").unwrap(), "just red");
    }

    #[test]
    fn input_is_required() {
        assert!(matches!(parse_args(args(&["--pretty"])), Err(Error::Usage(_))));
    }

    #[test]
    fn help_and_unknown() {
        assert_eq!(parse_args(args(&["-h"])).unwrap(), Command::Help);
        assert!(matches!(parse_args(args(&["--bogus"])), Err(Error::Usage(m)) if m.contains("--bogus")));
        assert!(matches!(parse_args(args(&["--in"])), Err(Error::Usage(_))));
    }
}
