// webfont-kit/src/bin/webfont-dl.rs
//
// Copyright © 2018 The Pathfinder Project Developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Downloads the fonts used by a web page.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Duration;
use webfont_kit::category::Categories;
use webfont_kit::collector;
use webfont_kit::download;
use webfont_kit::fetcher::{self, FetchOptions, DEFAULT_USER_AGENT};
use webfont_kit::fetchers::HttpFetcher;
use webfont_kit::set;
use webfont_kit::transcode::{self, Conversion, Woff2Transcoder};

static EXAMPLES: &str = "Examples:
  webfont-dl https://example.com
  webfont-dl https://example.com --serif --output ./fonts
  webfont-dl https://example.com --sans-serif --monospace
  webfont-dl https://example.com --all --list-only";

fn get_args() -> ArgMatches {
    let url_arg = Arg::new("URL")
        .help("URL of the webpage to analyze")
        .required(true)
        .index(1);
    let output_arg = Arg::new("output")
        .help("Output directory for downloaded fonts (default: ./<domain-name>)")
        .short('o')
        .long("output")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf));
    let serif_arg = Arg::new("serif")
        .help("Download serif fonts")
        .long("serif")
        .action(ArgAction::SetTrue);
    let sans_serif_arg = Arg::new("sans-serif")
        .help("Download sans-serif fonts")
        .long("sans-serif")
        .action(ArgAction::SetTrue);
    let monospace_arg = Arg::new("monospace")
        .help("Download monospace fonts")
        .long("monospace")
        .action(ArgAction::SetTrue);
    let all_arg = Arg::new("all")
        .help("Download all fonts (including unknown category)")
        .long("all")
        .action(ArgAction::SetTrue);
    let list_only_arg = Arg::new("list-only")
        .help("List fonts without downloading")
        .long("list-only")
        .action(ArgAction::SetTrue);
    let ttf_arg = Arg::new("ttf")
        .help("Convert downloaded fonts to TTF format (macOS compatible)")
        .long("ttf")
        .action(ArgAction::SetTrue);
    let verbose_arg = Arg::new("verbose")
        .help("Verbose output")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue);
    let timeout_arg = Arg::new("timeout")
        .help("HTTP request timeout in seconds")
        .long("timeout")
        .value_name("SECONDS")
        .value_parser(value_parser!(f64))
        .default_value("30");
    let user_agent_arg = Arg::new("user-agent")
        .help("User-Agent header for requests")
        .long("user-agent")
        .value_name("STRING")
        .default_value(DEFAULT_USER_AGENT);
    Command::new("webfont-dl")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Download fonts used by a webpage")
        .after_help(EXAMPLES)
        .arg(url_arg)
        .arg(output_arg)
        .arg(serif_arg)
        .arg(sans_serif_arg)
        .arg(monospace_arg)
        .arg(all_arg)
        .arg(list_only_arg)
        .arg(ttf_arg)
        .arg(verbose_arg)
        .arg(timeout_arg)
        .arg(user_agent_arg)
        .get_matches()
}

// No selection, or `--all`, keeps every category.
fn selected_categories(matches: &ArgMatches) -> Categories {
    if matches.get_flag("all") {
        return Categories::all();
    }
    let mut categories = Categories::empty();
    categories.set(Categories::SERIF, matches.get_flag("serif"));
    categories.set(Categories::SANS_SERIF, matches.get_flag("sans-serif"));
    categories.set(Categories::MONOSPACE, matches.get_flag("monospace"));
    categories
}

fn fetch_options(matches: &ArgMatches) -> Result<FetchOptions, String> {
    let seconds = matches.get_one::<f64>("timeout").copied().unwrap_or(30.0);
    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("invalid timeout: {}", seconds));
    }
    let mut options = FetchOptions::new();
    options.timeout(Duration::from_secs_f64(seconds));
    if let Some(user_agent) = matches.get_one::<String>("user-agent") {
        options.user_agent(user_agent.as_str());
    }
    Ok(options)
}

fn run(matches: &ArgMatches) -> i32 {
    let verbose = matches.get_flag("verbose");
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let raw_url = matches.get_one::<String>("URL").map(String::as_str).unwrap_or("");
    let page_url = match fetcher::parse_url(raw_url) {
        Ok(page_url) => page_url,
        Err(error) => {
            eprintln!("Error: {}", error);
            return 1;
        }
    };
    let output_dir = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| download::default_output_dir(&page_url));
    let options = match fetch_options(matches) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            return 1;
        }
    };
    let fetcher = match HttpFetcher::with_options(&options) {
        Ok(fetcher) => fetcher,
        Err(error) => {
            eprintln!("Error: {}", error);
            return 1;
        }
    };

    let mut progress = |message: &str| {
        if verbose {
            eprintln!("{} {}", "[*]".dimmed(), message);
        }
    };
    let fonts = match collector::collect_fonts(&page_url, &fetcher, &mut progress) {
        Ok(fonts) => fonts,
        Err(error) => {
            eprintln!("Error fetching page: {}", error);
            return 1;
        }
    };
    let fonts = set::filter(set::deduplicate(fonts), selected_categories(matches));
    if fonts.is_empty() {
        println!("No fonts found matching the specified criteria.");
        return 0;
    }

    println!("\nFound {} font(s):\n", fonts.len());
    for font in &fonts {
        let label = format!("{:<14}", format!("[{}]", font.category()));
        println!(
            "  {} {} ({}, {})",
            label.cyan(),
            font.family().bold(),
            font.weight(),
            font.style()
        );
        if verbose {
            println!("               URL: {}", font.url());
        }
    }
    if matches.get_flag("list-only") {
        return 0;
    }

    let results = match download::download_all(&fetcher, &fonts, &output_dir) {
        Ok(results) => results,
        Err(error) => {
            eprintln!("Error creating {}: {}", output_dir.display(), error);
            return 1;
        }
    };
    let shown_dir = fs::canonicalize(&output_dir).unwrap_or_else(|_| output_dir.clone());
    println!("\nDownloading to: {}\n", shown_dir.display());

    let mut downloaded = vec![];
    for result in results {
        let (font, outcome) = result.into_parts();
        match outcome {
            Ok(path) => {
                let name = path.file_name().unwrap_or_default().to_string_lossy();
                println!("  {}: {}", "OK".green(), name);
                downloaded.push(path);
            }
            Err(error) => {
                eprintln!("  {}: {} - {}", "FAILED".red(), font.family(), error);
            }
        }
    }
    println!("\nDownloaded {}/{} font(s).", downloaded.len(), fonts.len());

    if matches.get_flag("ttf") && !downloaded.is_empty() {
        println!("\nConverting to TTF...");
        let conversions = transcode::convert_downloads(&downloaded, &Woff2Transcoder);
        for conversion in &conversions {
            match *conversion {
                Conversion::Converted { ref to, .. } => {
                    let name = to.file_name().unwrap_or_default().to_string_lossy();
                    println!("  {}: {}", "OK".green(), name);
                }
                Conversion::Skipped(ref path) => {
                    let name = path.file_name().unwrap_or_default().to_string_lossy();
                    println!("  {}: {} (not woff2)", "SKIP".yellow(), name);
                }
                Conversion::Failed(ref path, ref error) => {
                    let name = path.file_name().unwrap_or_default().to_string_lossy();
                    eprintln!("  {}: {} ({})", "FAILED".red(), name, error);
                }
            }
        }
        let converted = conversions.iter().filter(|c| c.is_converted()).count();
        println!("\nConverted {} font(s) to TTF.", converted);
    }

    if downloaded.len() == fonts.len() {
        0
    } else {
        1
    }
}

fn main() {
    let matches = get_args();
    process::exit(run(&matches));
}
