use std::io::{self, BufRead, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use careplan::client::{FixturePlanService, HttpPlanService, PlanService};
use careplan::config;
use careplan::session::PlannerSession;
use careplan::view::{self, DisplayMode};

#[derive(Parser)]
#[command(name = "careplan")]
#[command(about = "Treatment plan intake client", version)]
struct Cli {
    /// Base address of the treatment-planning service
    #[arg(long, default_value = config::DEFAULT_BASE_URL)]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = config::DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Generate plans locally without contacting the service
    #[arg(long)]
    offline: bool,

    /// Plain output: no headers, busy, or error decoration
    #[arg(long)]
    minimal: bool,

    /// Probe the service and exit
    #[arg(long)]
    health_check: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    let cli = Cli::parse();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let service: Box<dyn PlanService> = if cli.offline {
        tracing::info!("offline mode: plans are synthesized locally");
        Box::new(FixturePlanService::new())
    } else {
        Box::new(HttpPlanService::new(&cli.base_url, cli.timeout_secs))
    };

    if cli.health_check {
        match service.health_check() {
            Ok(message) => println!("{message}"),
            Err(e) => {
                eprintln!("{}", e.user_message());
                std::process::exit(1);
            }
        }
        return;
    }

    let mode = if cli.minimal {
        DisplayMode::Minimal
    } else {
        DisplayMode::Rich
    };
    let mut session = PlannerSession::new(service);

    print_help();
    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (command, rest) = split_command(line);
        match command {
            "symptom" => entry_command(rest, &mut session, Entry::Symptom),
            "allergy" => entry_command(rest, &mut session, Entry::Allergy),
            "age" => session.form_mut().set_age(rest),
            "mobility" => session.form_mut().set_mobility_issues(rest),
            "location" => session.form_mut().set_location(rest),
            "show" => print!("{}", view::render_form(session.form(), mode)),
            "submit" => {
                if mode == DisplayMode::Rich {
                    println!("{}", view::BUSY_MESSAGE);
                }
                session.submit();
                print!("{}", view::render(&session, mode));
            }
            "plan" => print!("{}", view::render(&session, mode)),
            "reset" => session.reset(),
            "help" => print_help(),
            "quit" | "exit" => break,
            _ => println!("Unknown command; type 'help' for the command list"),
        }
    }
}

enum Entry {
    Symptom,
    Allergy,
}

fn entry_command(rest: &str, session: &mut PlannerSession, entry: Entry) {
    let name = match entry {
        Entry::Symptom => "symptom",
        Entry::Allergy => "allergy",
    };
    match split_command(rest) {
        ("add", text) => {
            // Blank input is silently ignored by the form.
            let _ = match entry {
                Entry::Symptom => session.form_mut().add_symptom(text),
                Entry::Allergy => session.form_mut().add_allergy(text),
            };
        }
        ("remove", id) => match id.parse() {
            Ok(id) => match entry {
                Entry::Symptom => session.form_mut().remove_symptom(id),
                Entry::Allergy => session.form_mut().remove_allergy(id),
            },
            Err(_) => println!("Usage: {name} remove <id>"),
        },
        _ => println!("Usage: {name} add <text> | {name} remove <id>"),
    }
}

fn split_command(line: &str) -> (&str, &str) {
    match line.split_once(' ') {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  symptom add <text>     add a symptom");
    println!("  symptom remove <id>    remove a symptom by id");
    println!("  allergy add <text>     add an allergy");
    println!("  allergy remove <id>    remove an allergy by id");
    println!("  age <value>            set age");
    println!("  mobility <text>        describe mobility issues");
    println!("  location <text>        set location");
    println!("  show                   show the current form");
    println!("  submit                 request a treatment plan");
    println!("  plan                   show the last result");
    println!("  reset                  discard the current plan");
    println!("  quit                   exit");
}
