//! Interactive terminal search over the advocates API
//!
//! Commands: `search <text>`, `city <name>`, `degree <code>`, `reset`,
//! `retry`, `seed`, `help`, `quit`. An argument-less `search`, `city` or
//! `degree` clears that filter.

use advocate_directory::config::Settings;
use advocate_directory::core::{filter_options, results_summary};
use advocate_directory::logging;
use advocate_directory::{
    Advocate, AdvocateFetcher, ControllerSnapshot, FilterState, HttpAdvocateClient,
    SearchDataController, SearchOptions,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Search(String),
    City(String),
    Degree(String),
    Reset,
    Retry,
    Seed,
    Help,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim().to_string()),
            None => (line, String::new()),
        };

        match name.to_lowercase().as_str() {
            "search" | "s" => Some(Command::Search(arg)),
            "city" | "c" => Some(Command::City(arg)),
            "degree" | "d" => Some(Command::Degree(arg)),
            "reset" => Some(Command::Reset),
            "retry" | "r" => Some(Command::Retry),
            "seed" => Some(Command::Seed),
            "help" | "?" => Some(Command::Help),
            "quit" | "exit" | "q" => Some(Command::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "commands: search <text> | city <name> | degree <code> | reset | retry | seed | quit";

fn render_table(advocates: &[Advocate]) -> String {
    let mut out = format!(
        "{:<12} {:<12} {:<16} {:<6} {:>5}  {:<12} {}\n",
        "First", "Last", "City", "Degree", "Years", "Phone", "Specialties"
    );
    for a in advocates {
        out.push_str(&format!(
            "{:<12} {:<12} {:<16} {:<6} {:>5}  {:<12} {}\n",
            a.first_name,
            a.last_name,
            a.city,
            a.degree,
            a.years_of_experience,
            a.phone_number,
            a.specialties.join("; ")
        ));
    }
    out
}

fn render(snapshot: &ControllerSnapshot, filters: &FilterState) -> String {
    if snapshot.loading.is_loading {
        return "Loading advocates...".to_string();
    }

    if let Some(error) = &snapshot.loading.error {
        return format!("Unable to load advocates: {}\n(type `retry` to try again)", error);
    }

    let mut out = results_summary(snapshot.advocates.len(), filters);
    out.push('\n');

    if snapshot.advocates.is_empty() {
        out.push_str("No advocates found. Try adjusting your search or `reset`.");
    } else {
        let options = filter_options(&snapshot.advocates);
        out.push_str(&render_table(&snapshot.advocates));
        out.push_str(&format!(
            "cities: {}\ndegrees: {}",
            options.cities.join(", "),
            options.degrees.join(", ")
        ));
    }

    out
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let settings = Settings::load()?;
    logging::init_cli_logger(&settings.logging);

    let client = Arc::new(HttpAdvocateClient::new(
        settings.client.base_url.clone(),
        settings.client.http_timeout(),
    )?);
    let fetcher: Arc<dyn AdvocateFetcher> = client.clone();

    let controller = SearchDataController::new(
        fetcher,
        SearchOptions::default()
            .with_debounce(settings.client.debounce())
            .with_request_timeout(settings.client.request_timeout()),
    );

    let mut updates = controller.subscribe();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}", HELP);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                println!("{}", render(&snapshot, &controller.filters()));
            }
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                match Command::parse(&line) {
                    Some(Command::Search(text)) => controller.set_search(text),
                    Some(Command::City(city)) => controller.set_city(city),
                    Some(Command::Degree(degree)) => controller.set_degree(degree),
                    Some(Command::Reset) => controller.reset(),
                    Some(Command::Retry) => controller.retry(),
                    Some(Command::Seed) => {
                        match client.seed().await {
                            Ok(seeded) => println!("{}", seeded.message),
                            Err(e) => println!("Seed failed: {}", e),
                        }
                        controller.refetch();
                    }
                    Some(Command::Help) => println!("{}", HELP),
                    Some(Command::Quit) => break,
                    None => println!("unknown command: {}\n{}", line.trim(), HELP),
                }
            }
        }
    }

    controller.dispose();
    Ok(())
}
