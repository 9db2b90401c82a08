// src/bin/showdown_dev_cli.rs

use clap::Parser;

use poker_showdown::api::{CategoryDto, VerdictDto};
use poker_showdown::eval::{classify, compare, matching_categories};
use poker_showdown::scenarios::{canonical_hands, canonical_matchups, find_matchup, Matchup};

/// Dev-CLI: прогоняет эталонные руки и матчапы и печатает вердикты.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct CliConfig {
    /// Имя матчапа (можно несколько раз). По умолчанию — все.
    #[arg(short, long)]
    scenario: Vec<String>,

    /// Показать имена матчапов и выйти.
    #[arg(long)]
    list: bool,

    /// Уровень логов Debug вместо Info.
    #[arg(short, long)]
    verbose: bool,

    /// Печатать DTO вердиктов в JSON.
    #[arg(long)]
    json: bool,
}

fn init_logger(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    if let Err(err) = simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("logger init failed: {err}");
    }
}

fn main() {
    let cfg = CliConfig::parse();
    init_logger(cfg.verbose);

    if cfg.list {
        for m in canonical_matchups() {
            println!("{}", m.name);
        }
        return;
    }

    log::info!("showdown_dev_cli: эталонные руки");
    for named in canonical_hands() {
        let category = classify(&named.hand);
        log::debug!(
            "{:<16} [{}] совпадения: {:?}",
            named.name,
            named.hand,
            matching_categories(&named.hand)
        );
        if cfg.json {
            print_json(&CategoryDto::from(category));
        } else {
            println!("{:<16} [{}] -> {}", named.name, named.hand, category);
        }
        if category != named.expected {
            log::warn!(
                "{}: ожидали {}, получили {}",
                named.name,
                named.expected,
                category
            );
        }
    }

    let matchups = match select_matchups(&cfg.scenario) {
        Ok(m) => m,
        Err(unknown) => {
            log::error!("неизвестный матчап: {unknown} (см. --list)");
            std::process::exit(2);
        }
    };

    log::info!("showdown_dev_cli: {} матчапов", matchups.len());
    let mut failures = 0usize;
    for m in &matchups {
        let verdict = compare(&m.hand_a.hand, &m.hand_b.hand);
        let ok = verdict == m.expected;
        if !ok {
            failures += 1;
        }
        if cfg.json {
            print_json(&VerdictDto::from(verdict));
        } else {
            println!(
                "{}: {} | [{}] vs [{}] -> {}",
                if ok { "SUCCESS" } else { "FAILURE" },
                m.name,
                m.hand_a.hand,
                m.hand_b.hand,
                verdict
            );
        }
        if !ok {
            log::warn!("{}: ожидали \"{}\"", m.name, m.expected);
        }
    }

    if failures > 0 {
        log::error!("{failures} из {} матчапов не сошлись", matchups.len());
        std::process::exit(1);
    }
    log::info!("все матчапы сошлись");
}

/// Все матчапы, либо только перечисленные. `Err` — первое неизвестное имя.
fn select_matchups(names: &[String]) -> Result<Vec<Matchup>, String> {
    if names.is_empty() {
        return Ok(canonical_matchups());
    }
    names
        .iter()
        .map(|name| find_matchup(name).ok_or_else(|| name.clone()))
        .collect()
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string(value) {
        Ok(s) => println!("{s}"),
        Err(err) => log::error!("serialize failed: {err}"),
    }
}
