//! gridplan entry point — CLI wiring for one-shot plans and the API server.

use std::path::Path;
use std::process;

use gridplan::io::export::export_csv;
use gridplan::plan::{self, Payload};

/// Parsed CLI arguments.
struct CliArgs {
    payload_path: Option<String>,
    plan_out: Option<String>,
    #[cfg(feature = "api")]
    config_path: Option<String>,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: Option<u16>,
    #[cfg(feature = "api")]
    listen: Option<String>,
}

fn print_help() {
    eprintln!("gridplan — merit-order production-plan calculator");
    eprintln!();
    eprintln!("Usage: gridplan [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --payload <path>         Compute a plan for a JSON payload file");
    eprintln!("  --plan-out <path>        Export the computed plan to CSV");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve                  Start the API server");
        eprintln!("  --config <path>          Load server settings from a TOML file");
        eprintln!("  --port <u16>             Override the configured port");
        eprintln!("  --listen <url>           Subscribe to a server's notification feed");
    }
    eprintln!("  --help                   Show this help message");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        payload_path: None,
        plan_out: None,
        #[cfg(feature = "api")]
        config_path: None,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: None,
        #[cfg(feature = "api")]
        listen: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--payload" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --payload requires a path argument");
                    process::exit(1);
                }
                cli.payload_path = Some(args[i].clone());
            }
            "--plan-out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --plan-out requires a path argument");
                    process::exit(1);
                }
                cli.plan_out = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--config" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --config requires a path argument");
                    process::exit(1);
                }
                cli.config_path = Some(args[i].clone());
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --port requires a u16 argument");
                    process::exit(1);
                }
                if let Ok(p) = args[i].parse::<u16>() {
                    cli.port = Some(p);
                } else {
                    eprintln!("error: --port value \"{}\" is not a valid u16", args[i]);
                    process::exit(1);
                }
            }
            #[cfg(feature = "api")]
            "--listen" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --listen requires a URL argument");
                    process::exit(1);
                }
                cli.listen = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

/// Computes and prints a plan for one payload file.
fn run_once(path: &str, plan_out: Option<&str>) {
    let data = match std::fs::read_to_string(Path::new(path)) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("error: cannot read \"{path}\": {e}");
            process::exit(1);
        }
    };
    let payload: Payload = match serde_json::from_str(&data) {
        Ok(payload) => payload,
        Err(e) => {
            eprintln!("error: invalid payload JSON: {e}");
            process::exit(1);
        }
    };

    let report = match plan::compute_plan(&payload) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    };

    let productions = report.to_productions();
    match serde_json::to_string_pretty(&productions) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("error: cannot serialize plan: {e}");
            process::exit(1);
        }
    }

    if report.delta_mw().abs() > 1e-6 {
        eprintln!(
            "warning: achieved {:.1} MW of {:.1} MW requested",
            report.achieved_mw, report.requested_mw
        );
    }

    if let Some(out) = plan_out {
        if let Err(e) = export_csv(&report, Path::new(out)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Plan written to {out}");
    }
}

#[cfg(feature = "api")]
fn run_server(cli: &CliArgs) {
    use std::net::{IpAddr, SocketAddr};
    use std::sync::Arc;

    use gridplan::config::ServerConfig;

    let config = if let Some(ref path) = cli.config_path {
        match ServerConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ServerConfig::default()
    };

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    // validate() already checked the bind address parses.
    let ip: IpAddr = match config.server.bind.parse() {
        Ok(ip) => ip,
        Err(e) => {
            eprintln!("error: invalid bind address \"{}\": {e}", config.server.bind);
            process::exit(1);
        }
    };
    let port = cli.port.unwrap_or(config.server.port);
    let addr = SocketAddr::from((ip, port));

    let state = Arc::new(gridplan::api::AppState::new(
        config.broadcast.channel_capacity,
    ));
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    rt.block_on(gridplan::api::serve(state, addr));
}

/// Connects to a running server and prints every notification it broadcasts.
#[cfg(feature = "api")]
fn run_listener(url: &str) {
    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(gridplan::api::listen::run(url)) {
        eprintln!("error: cannot subscribe to \"{url}\": {e}");
        process::exit(1);
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = parse_args();

    #[cfg(feature = "api")]
    if cli.serve {
        run_server(&cli);
        return;
    }

    #[cfg(feature = "api")]
    if let Some(ref url) = cli.listen {
        run_listener(url);
        return;
    }

    let Some(ref path) = cli.payload_path else {
        eprintln!("error: --payload <path> is required");
        print_help();
        process::exit(1);
    };
    run_once(path, cli.plan_out.as_deref());
}
