use clap::Parser;
use csspreview_lib::options::PreviewOptions;
use csspreview_lib::preview_generate::css_preview;
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;

/// Exit status for bad usage and for `--help`.
const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser, Debug)]
#[command(name = "csspreview")]
#[command(about = "Generate an HTML page previewing every selector of a CSS file")]
struct Args {
    /// CSS stylesheet file name.
    css_file: String,

    /// HTML preview file name (default: standard output).
    #[arg(short, long = "output-file", value_name = "OUTPUT")]
    output_file: Option<PathBuf>,

    /// Print every rule and selector while generating.
    #[arg(short, long)]
    verbose: bool,

    /// Do not wrap fixed/absolute/sticky elements in an iframe (short form: -nf).
    #[arg(long = "no-frames")]
    no_frames: bool,
}

/// clap only takes single-character short flags, so `-nf` is spelled out first.
fn expand_short_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            if arg == "-nf" {
                OsString::from("--no-frames")
            } else {
                arg
            }
        })
        .collect()
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn write_output(html: &str, output_file: Option<&Path>) -> csspreview_lib::Result<()> {
    match output_file {
        Some(path) => fs::write(path, html)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn main() {
    // parse the args given in terminal
    let args = match Args::try_parse_from(expand_short_flags(std::env::args_os())) {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            process::exit(USAGE_EXIT_CODE);
        }
    };

    init_logger(args.verbose);
    log::info!("Generating HTML preview. Please wait...");

    let options = PreviewOptions::new(args.css_file.as_str()).with_frames(!args.no_frames);

    let html = match css_preview::generate_from_file(&args.css_file, &options) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error generating preview: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = write_output(&html, args.output_file.as_deref()) {
        eprintln!("{}", e);
        process::exit(1);
    }

    if let Some(path) = &args.output_file {
        log::info!("Wrote HTML to {}.", path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(expand_short_flags(argv.iter().map(OsString::from)))
    }

    #[test]
    fn test_all_flags() {
        let args = parse(&["csspreview", "style.css", "-o", "out.html", "-v", "-nf"]).unwrap();
        assert_eq!(args.css_file, "style.css");
        assert_eq!(args.output_file, Some(PathBuf::from("out.html")));
        assert!(args.verbose);
        assert!(args.no_frames);
    }

    #[test]
    fn test_long_flags() {
        let args = parse(&[
            "csspreview",
            "--output-file",
            "out.html",
            "--verbose",
            "--no-frames",
            "style.css",
        ])
        .unwrap();
        assert_eq!(args.output_file, Some(PathBuf::from("out.html")));
        assert!(args.verbose && args.no_frames);
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["csspreview", "style.css"]).unwrap();
        assert_eq!(args.output_file, None);
        assert!(!args.verbose);
        assert!(!args.no_frames);
    }

    #[test]
    fn test_missing_stylesheet_is_an_error() {
        let err = parse(&["csspreview"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_help_is_reported_as_error() {
        let err = parse(&["csspreview", "-h"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.html");
        write_output("<p>hi</p>", Some(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>hi</p>");
    }

    #[test]
    fn test_write_output_to_missing_directory_fails() {
        let err = write_output("x", Some(Path::new("/definitely/not/here/out.html"))).unwrap_err();
        assert!(matches!(err, csspreview_lib::Error::Write(_)));
    }
}
