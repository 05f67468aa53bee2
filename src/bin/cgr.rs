//! Command-line collaborator: loads a contact plan in the textual exchange
//! format, runs one of the four routing operations, and prints the result
//! as JSON or text (spec §6).
//!
//! Argument parsing is manual `env::args()` scanning, matching the
//! teacher crate's own `main.rs` style rather than reaching for a CLI
//! parsing crate the rest of the corpus does not otherwise use.

use std::env;
use std::process::ExitCode;

use cgr::neighbor_index::NeighborIndex;
use cgr::output::{render_json_multi, render_json_single, render_text_multi, render_text_single, Format};
use cgr::query::{Query, Routes};
use cgr::{best_route, k_routes_by_consumption, k_routes_by_deviation};

struct Args {
    contacts_path: String,
    src: i64,
    dst: i64,
    t0: f64,
    bundle_bytes: f64,
    expiry: f64,
    k: Option<usize>,
    k_yen: Option<usize>,
    pretty: bool,
    format: Format,
}

fn usage(prog: &str) {
    eprintln!(
        "Usage: {prog} --contacts <path> --src N --dst N --t0 <sec> --bytes <B> \
         [--expiry <sec>] [--k <int>] [--k-yen <int>] [--pretty] [--format json|text]"
    );
}

fn parse_nonneg_f64(prog: &str, flag: &str, raw: &str) -> Result<f64, ExitCode> {
    match raw.parse::<f64>() {
        Ok(v) if v >= 0.0 => Ok(v),
        _ => {
            eprintln!("error: {flag} requires a non-negative number, got '{raw}'");
            usage(prog);
            Err(ExitCode::from(2))
        }
    }
}

fn parse_nonneg_usize(prog: &str, flag: &str, raw: &str) -> Result<usize, ExitCode> {
    match raw.parse::<usize>() {
        Ok(v) => Ok(v),
        _ => {
            eprintln!("error: {flag} requires a non-negative integer, got '{raw}'");
            usage(prog);
            Err(ExitCode::from(2))
        }
    }
}

fn parse_args() -> Result<Args, ExitCode> {
    let argv: Vec<String> = env::args().collect();
    let prog = argv.first().cloned().unwrap_or_else(|| "cgr".to_string());

    let mut contacts_path: Option<String> = None;
    let mut src: Option<i64> = None;
    let mut dst: Option<i64> = None;
    let mut t0: Option<f64> = None;
    let mut bundle_bytes: Option<f64> = None;
    let mut expiry: f64 = 0.0;
    let mut k: Option<usize> = None;
    let mut k_yen: Option<usize> = None;
    let mut pretty = false;
    let mut format = Format::Json;

    let mut i = 1;
    while i < argv.len() {
        let flag = argv[i].as_str();
        macro_rules! next_value {
            () => {{
                i += 1;
                match argv.get(i) {
                    Some(v) => v.clone(),
                    None => {
                        eprintln!("error: {flag} requires a value");
                        usage(&prog);
                        return Err(ExitCode::from(2));
                    }
                }
            }};
        }

        match flag {
            "--contacts" => contacts_path = Some(next_value!()),
            "--src" => {
                let v = next_value!();
                src = Some(v.parse().map_err(|_| {
                    eprintln!("error: --src requires an integer, got '{v}'");
                    usage(&prog);
                    ExitCode::from(2)
                })?);
            }
            "--dst" => {
                let v = next_value!();
                dst = Some(v.parse().map_err(|_| {
                    eprintln!("error: --dst requires an integer, got '{v}'");
                    usage(&prog);
                    ExitCode::from(2)
                })?);
            }
            "--t0" => {
                let v = next_value!();
                t0 = Some(parse_nonneg_f64(&prog, "--t0", &v)?);
            }
            "--bytes" => {
                let v = next_value!();
                bundle_bytes = Some(parse_nonneg_f64(&prog, "--bytes", &v)?);
            }
            "--expiry" => {
                let v = next_value!();
                expiry = parse_nonneg_f64(&prog, "--expiry", &v)?;
            }
            "--k" => {
                let v = next_value!();
                k = Some(parse_nonneg_usize(&prog, "--k", &v)?);
            }
            "--k-yen" => {
                let v = next_value!();
                k_yen = Some(parse_nonneg_usize(&prog, "--k-yen", &v)?);
            }
            "--pretty" => pretty = true,
            "--format" => {
                let v = next_value!();
                format = match v.as_str() {
                    "json" => Format::Json,
                    "text" => Format::Text,
                    _ => {
                        eprintln!("error: --format must be 'json' or 'text', got '{v}'");
                        usage(&prog);
                        return Err(ExitCode::from(2));
                    }
                };
            }
            other => {
                eprintln!("error: unrecognized flag '{other}'");
                usage(&prog);
                return Err(ExitCode::from(2));
            }
        }
        i += 1;
    }

    let (contacts_path, src, dst, t0, bundle_bytes) =
        match (contacts_path, src, dst, t0, bundle_bytes) {
            (Some(p), Some(s), Some(d), Some(t), Some(b)) => (p, s, d, t, b),
            _ => {
                eprintln!("error: --contacts, --src, --dst, --t0, and --bytes are all required");
                usage(&prog);
                return Err(ExitCode::from(2));
            }
        };

    Ok(Args { contacts_path, src, dst, t0, bundle_bytes, expiry, k, k_yen, pretty, format })
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(a) => a,
        Err(code) => return code,
    };

    let contacts = match cgr::loader::load_contacts(&args.contacts_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(1);
        }
    };

    let index = NeighborIndex::build(&contacts);
    let query = Query {
        src: args.src,
        dst: args.dst,
        t0: args.t0,
        bundle_bytes: args.bundle_bytes,
        expiry: args.expiry,
    };

    // --k-yen takes precedence over --k when both are given (spec §6).
    if let Some(k) = args.k_yen {
        let routes = k_routes_by_deviation(&contacts, &index, &query, k);
        print_multi(&routes, &args);
    } else if let Some(k) = args.k {
        let routes = k_routes_by_consumption(&contacts, &index, &query, k);
        print_multi(&routes, &args);
    } else {
        let route = best_route(&contacts, &index, &query);
        match args.format {
            Format::Json => println!("{}", render_json_single(&route, args.t0, args.pretty)),
            Format::Text => print!("{}", render_text_single(&route, args.t0)),
        }
    }

    ExitCode::SUCCESS
}

fn print_multi(routes: &Routes, args: &Args) {
    match args.format {
        Format::Json => println!("{}", render_json_multi(routes, args.t0, args.pretty)),
        Format::Text => print!("{}", render_text_multi(routes, args.t0)),
    }
}
