// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gphconv-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gphconv and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Gphconv CLI entrypoint.
//!
//! `gphconv graphml` converts the graphml dialect to weighted gph; `gphconv snap` converts a SNAP
//! edge list to gph with random coordinates and edge weights. Output goes to stdout unless a
//! file is given. Logs go to stderr.

use std::error::Error;
use std::io::IsTerminal;
use std::path::Path;
use std::str::FromStr;

use gphconv::convert::{convert_graphml, convert_snap, GraphmlOptions};
use gphconv::format::SnapOptions;
use gphconv::store::{write_atomic, InputSource, OutputTarget, WriteDurability};
use tracing::{info, Level};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} graphml <input|-> [-o|--output <path>] [-dnw|--default-node-weight <int>] [-dew|--default-edge-weight <int>]\n  {program} snap <input|-> [-o|--output <path> | --beside-input] [--max-edge-weight <int>] [-mew|--min-edge-weight <int>] [-s|--seed <int>] [-c|--max-coordinate <int>]\n\nCommon options: [--report <path>] [--durable-writes] [-v|--verbose]\n\nInput '-' reads stdin. Output defaults to stdout.\n--beside-input writes <input>.gph next to the input file (extension replaced).\n--report writes a JSON summary of the conversion, including dropped attribute tokens.\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\n\nDefaults: node/edge weight 1, edge weights 1..=99, coordinates 1..=500, seed from OS entropy."
    );
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum Command {
    #[default]
    Graphml,
    Snap,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    help: bool,
    command: Command,
    input: String,
    output: Option<String>,
    beside_input: bool,
    default_node_weight: Option<i64>,
    default_edge_weight: Option<i64>,
    min_edge_weight: Option<i64>,
    max_edge_weight: Option<i64>,
    max_coordinate: Option<i64>,
    seed: Option<u64>,
    report: Option<String>,
    durable_writes: bool,
    verbose: bool,
}

impl CliOptions {
    fn graphml_options(&self) -> GraphmlOptions {
        let defaults = GraphmlOptions::default();
        GraphmlOptions {
            default_node_weight: self
                .default_node_weight
                .unwrap_or(defaults.default_node_weight),
            default_edge_weight: self
                .default_edge_weight
                .unwrap_or(defaults.default_edge_weight),
        }
    }

    fn snap_options(&self) -> SnapOptions {
        let defaults = SnapOptions::default();
        SnapOptions {
            min_edge_weight: self.min_edge_weight.unwrap_or(defaults.min_edge_weight),
            max_edge_weight: self.max_edge_weight.unwrap_or(defaults.max_edge_weight),
            max_coordinate: self.max_coordinate.unwrap_or(defaults.max_coordinate),
            seed: self.seed,
        }
    }

    fn durability(&self) -> WriteDurability {
        if self.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        }
    }

    fn output_target(&self, input: &InputSource) -> OutputTarget {
        match (&self.output, self.beside_input) {
            (Some(path), _) => OutputTarget::File(path.into()),
            (None, true) => input
                .gph_sibling()
                .map(OutputTarget::File)
                .unwrap_or_default(),
            (None, false) => OutputTarget::Stdout,
        }
    }
}

fn set_once<T>(slot: &mut Option<T>, value: T) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(value);
    Ok(())
}

fn next_value<T: FromStr>(args: &mut impl Iterator<Item = String>) -> Result<T, ()> {
    let raw = args.next().ok_or(())?;
    raw.parse().map_err(|_| ())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    let command = match args.next().as_deref() {
        Some("graphml") => Command::Graphml,
        Some("snap") => Command::Snap,
        Some("-h" | "--help") => {
            options.help = true;
            return Ok(options);
        }
        _ => return Err(()),
    };
    options.command = command;

    let mut input = None;
    let graphml = options.command == Command::Graphml;
    let snap = options.command == Command::Snap;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => options.help = true,
            "-o" | "--output" => {
                let path = args.next().ok_or(())?;
                set_once(&mut options.output, path)?;
            }
            "--report" => {
                let path = args.next().ok_or(())?;
                set_once(&mut options.report, path)?;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            "-v" | "--verbose" => {
                if options.verbose {
                    return Err(());
                }
                options.verbose = true;
            }
            "-dnw" | "--default-node-weight" if graphml => {
                set_once(&mut options.default_node_weight, next_value(&mut args)?)?;
            }
            "-dew" | "--default-edge-weight" if graphml => {
                set_once(&mut options.default_edge_weight, next_value(&mut args)?)?;
            }
            "--beside-input" if snap => {
                if options.beside_input {
                    return Err(());
                }
                options.beside_input = true;
            }
            "--max-edge-weight" if snap => {
                set_once(&mut options.max_edge_weight, next_value(&mut args)?)?;
            }
            "-mew" | "--min-edge-weight" if snap => {
                set_once(&mut options.min_edge_weight, next_value(&mut args)?)?;
            }
            "-s" | "--seed" if snap => {
                set_once(&mut options.seed, next_value(&mut args)?)?;
            }
            "-c" | "--max-coordinate" if snap => {
                set_once(&mut options.max_coordinate, next_value(&mut args)?)?;
            }
            // `-` alone names stdin, not a flag.
            "-" => set_once(&mut input, arg)?,
            _ if arg.starts_with('-') => return Err(()),
            _ => set_once(&mut input, arg)?,
        }
    }

    if options.help {
        return Ok(options);
    }

    options.input = input.ok_or(())?;

    if options.beside_input {
        match InputSource::parse(&options.input).gph_sibling() {
            // A `.gph` input would be its own sibling.
            Some(sibling)
                if options.output.is_none()
                    && sibling.as_path() != Path::new(&options.input) => {}
            _ => return Err(()),
        }
    }

    Ok(options)
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn run(options: &CliOptions) -> Result<(), Box<dyn Error>> {
    let input = InputSource::parse(&options.input);
    let output = options.output_target(&input);
    let durability = options.durability();

    let text = input.read_to_string()?;
    let conversion = match options.command {
        Command::Graphml => convert_graphml(&text, &options.graphml_options())?,
        Command::Snap => convert_snap(&text, &options.snap_options())?,
    };
    conversion.report.log();

    output.write(conversion.gph.as_bytes(), durability)?;
    if options.beside_input {
        info!("the output gph file is in {output}");
    }

    if let Some(report_path) = &options.report {
        let mut json = conversion.report.to_json()?;
        json.push('\n');
        write_atomic(Path::new(report_path), json.as_bytes(), durability)?;
    }

    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "gphconv".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    if options.help {
        print_usage(&program);
        return;
    }

    init_tracing(options.verbose);

    if let Err(err) = run(&options) {
        eprintln!("gphconv: {err}");
        std::process::exit(1);
    }
}
