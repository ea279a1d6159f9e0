use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::io::{self, Write};
use std::net::IpAddr;
use std::path::PathBuf;

use fakeroute_targets::config::Settings;
use fakeroute_targets::config_loader;
use fakeroute_targets::ip::classify_addr;
use fakeroute_targets::targets::{discover_targets, LogSink, TargetIndex};

/// Locate and index fakeroute target files
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML settings file listing candidate target directories
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Candidate target directory; repeat to build the list in priority order
    #[arg(short = 'd', long = "target-dir")]
    target_dirs: Vec<PathBuf>,

    /// Print the target file for this destination address only
    #[arg(short, long)]
    lookup: Option<String>,

    /// Print the index as JSON
    #[arg(long, conflicts_with = "lookup")]
    json: bool,

    /// List IPv4 targets in octet-string order instead of key order
    #[arg(long, conflicts_with = "json")]
    sorted: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    let settings = load_settings(&args)?;
    let (root, index) = discover_targets(&settings.target_dirs, LogSink)?;
    info!("Indexed {} target(s) from {:?}", index.len(), root);

    if let Some(address) = &args.lookup {
        let addr = classify_addr(address)?;
        return print_lookup(&mut io::stdout().lock(), &index, &addr);
    }

    if index.is_empty() {
        warn!("No target files found in {:?}", root);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&index).wrap_err("Failed to serialize target index")?;
        println!("{}", json);
    } else {
        print_index(&mut io::stdout().lock(), &index, args.sorted)?;
    }

    Ok(())
}

/// Settings precedence: `--target-dir` flags, then `--settings`, then defaults
fn load_settings(args: &Args) -> Result<Settings> {
    if !args.target_dirs.is_empty() {
        return Ok(Settings::with_target_dirs(args.target_dirs.iter().cloned()));
    }
    match &args.settings {
        Some(path) => config_loader::load_settings(path),
        None => Ok(Settings::default()),
    }
}

fn print_lookup<W: Write>(out: &mut W, index: &TargetIndex, addr: &IpAddr) -> Result<()> {
    let path = index
        .lookup(addr)
        .ok_or_else(|| eyre!("No target file for {}", addr))?;
    writeln!(out, "{}", path.display())?;
    Ok(())
}

/// One `v4 <addr> <path>` / `v6 <addr> <path>` line per target
fn print_index<W: Write>(out: &mut W, index: &TargetIndex, sorted: bool) -> Result<()> {
    let ipv4: Vec<String> = if sorted {
        index.sorted_ipv4_addresses()?
    } else {
        index.ipv4().keys().cloned().collect()
    };
    for address in &ipv4 {
        writeln!(out, "v4 {} {}", address, index.ipv4()[address].display())?;
    }
    for (address, path) in index.ipv6() {
        writeln!(out, "v6 {} {}", address, path.display())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fakeroute_targets::targets::{index_targets, Diagnostic};
    use std::fs;
    use tempfile::TempDir;

    fn index_of(names: &[&str]) -> (TempDir, TargetIndex) {
        let temp = TempDir::new().unwrap();
        for name in names {
            fs::write(temp.path().join(name), b"").unwrap();
        }
        let index = index_targets(temp.path(), Vec::<Diagnostic>::new()).unwrap();
        (temp, index)
    }

    fn lines(output: Vec<u8>) -> Vec<String> {
        String::from_utf8(output).unwrap().lines().map(String::from).collect()
    }

    #[test]
    fn test_print_index_prefixes_versions() {
        let (temp, index) = index_of(&["10.0.0.1-lb", "::1-double"]);
        let mut output = Vec::new();

        print_index(&mut output, &index, false).unwrap();

        assert_eq!(
            lines(output),
            vec![
                format!("v4 10.0.0.1 {}", temp.path().join("10.0.0.1-lb").display()),
                format!("v6 ::1 {}", temp.path().join("::1-double").display()),
            ]
        );
    }

    #[test]
    fn test_print_index_sorted_uses_octet_strings() {
        let (_temp, index) = index_of(&["9.0.0.1-a", "10.0.0.1-b", "1.1.1.2-c", "1.1.1.10-d"]);
        let mut output = Vec::new();

        print_index(&mut output, &index, true).unwrap();

        let addresses: Vec<String> = lines(output)
            .iter()
            .map(|line| line.split(' ').nth(1).unwrap().to_string())
            .collect();
        assert_eq!(addresses, vec!["1.1.1.10", "1.1.1.2", "10.0.0.1", "9.0.0.1"]);
    }

    #[test]
    fn test_print_lookup_hit_and_miss() {
        let (temp, index) = index_of(&["127.1.1.2-lb"]);

        let mut output = Vec::new();
        let hit: IpAddr = "127.1.1.2".parse().unwrap();
        print_lookup(&mut output, &index, &hit).unwrap();
        assert_eq!(
            lines(output),
            vec![temp.path().join("127.1.1.2-lb").display().to_string()]
        );

        let mut output = Vec::new();
        let miss: IpAddr = "127.1.1.9".parse().unwrap();
        let err = print_lookup(&mut output, &index, &miss).unwrap_err();
        assert_eq!(err.to_string(), "No target file for 127.1.1.9");
        assert!(output.is_empty());
    }

    #[test]
    fn test_cli_parsing() {
        let args = Args::parse_from(&["fakeroute-targets"]);

        assert!(args.settings.is_none());
        assert!(args.target_dirs.is_empty());
        assert_eq!(args.log_level, "info");
        assert_eq!(load_settings(&args).unwrap(), Settings::default());
    }

    #[test]
    fn test_target_dirs_override_settings() {
        let args = Args::parse_from(&[
            "fakeroute-targets",
            "--settings", "fakeroute.yaml",
            "-d", "/srv/targets",
            "--target-dir", "./targets",
        ]);

        let settings = load_settings(&args).unwrap();
        assert_eq!(
            settings.target_dirs,
            vec![PathBuf::from("/srv/targets"), PathBuf::from("./targets")]
        );
    }

    #[test]
    fn test_lookup_conflicts_with_json() {
        let result = Args::try_parse_from(&[
            "fakeroute-targets",
            "--lookup", "::1",
            "--json",
        ]);
        assert!(result.is_err());
    }
}
