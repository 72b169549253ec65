//! Clangen Headless Simulation Harness
//!
//! Generates a clan, runs it for a number of moons and checks the model's
//! invariants along the way. Runs entirely in-process with no UI.
//!
//! Usage:
//!   cargo run -p clangen-simtest
//!   cargo run -p clangen-simtest -- --verbose
//!   cargo run -p clangen-simtest -- path/to/clan_config.json

use std::collections::HashMap;

use clangen_core::persistence::{export_json, import_json};
use clangen_core::prelude::*;
use clangen_logic::aging::AgeStage;
use clangen_logic::clan_config::{validate_config, ClanConfig};
use clangen_logic::collections::{add_range, chunk};
use clangen_logic::experience::ExpLevel;
use clangen_logic::random::{choose_random, inverse_chance_roll, percentage_roll};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ── Default clan config (same JSON a player would edit) ─────────────────
const DEFAULT_CONFIG_JSON: &str = include_str!("../../../data/clan_config.json");

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose");
    let config_path = std::env::args().skip(1).find(|a| !a.starts_with("--"));

    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter)).init();

    println!("=== Clangen Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. Config parsing and validation
    let config = match load_config(config_path.as_deref(), &mut results) {
        Some(config) => config,
        None => finish(results, verbose),
    };

    let seed = config.seed.unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);
    log::info!("Using seed {}", seed);

    // 2. Clan generation
    let mut sim = match generate_clan(&config, &mut rng) {
        Ok(sim) => sim,
        Err(e) => {
            results.push(TestResult {
                name: "generate_clan".into(),
                passed: false,
                detail: e.to_string(),
            });
            finish(results, verbose)
        }
    };
    results.extend(validate_generation(&sim, &config, verbose));

    // 3. Moon loop
    results.extend(run_moons(&mut sim, &config, &mut rng, verbose));

    // 4. Save files
    results.extend(validate_save_files(&sim, verbose));

    // 5. Groups
    results.extend(validate_groups(&mut sim, &config, verbose));

    // 6. Pure utilities
    results.extend(validate_utilities(&mut rng, verbose));

    finish(results, verbose)
}

fn finish(results: Vec<TestResult>, verbose: bool) -> ! {
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    std::process::exit(if failed > 0 { 1 } else { 0 });
}

// ── 1. Config ───────────────────────────────────────────────────────────

fn load_config(path: Option<&str>, results: &mut Vec<TestResult>) -> Option<ClanConfig> {
    println!("--- Clan Config ---");

    let json = match path {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                results.push(TestResult {
                    name: "config_read".into(),
                    passed: false,
                    detail: format!("{}: {}", path, e),
                });
                return None;
            }
        },
        None => DEFAULT_CONFIG_JSON.to_string(),
    };

    let config: ClanConfig = match serde_json::from_str(&json) {
        Ok(c) => c,
        Err(e) => {
            results.push(TestResult {
                name: "config_parse".into(),
                passed: false,
                detail: format!("JSON parse error: {}", e),
            });
            return None;
        }
    };

    let errors = validate_config(&config);
    results.push(TestResult {
        name: "config_valid".into(),
        passed: errors.is_empty(),
        detail: if errors.is_empty() {
            format!("{}Clan, {} starting cats", config.clan_prefix, config.starting_population())
        } else {
            errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        },
    });

    errors.is_empty().then_some(config)
}

// ── 2. Generation ───────────────────────────────────────────────────────

fn validate_generation(sim: &ClanSimulation, config: &ClanConfig, verbose: bool) -> Vec<TestResult> {
    println!("--- Clan Generation ---");
    let mut results = Vec::new();

    let population = sim.clan_members().len() as u32;
    results.push(TestResult {
        name: "gen_population".into(),
        passed: population == config.starting_population(),
        detail: format!("{} cats (expected {})", population, config.starting_population()),
    });

    let leaders = sim
        .clan_cats()
        .filter(|c| c.status() == CatStatus::Leader)
        .count();
    results.push(TestResult {
        name: "gen_single_leader".into(),
        passed: leaders == 1,
        detail: format!("{} leader(s)", leaders),
    });

    let all_registered = sim.clan_members().iter().all(|id| sim.registry.contains(id));
    results.push(TestResult {
        name: "gen_members_registered".into(),
        passed: all_registered,
        detail: "every clan member is in the registry".into(),
    });

    let mismatched: Vec<String> = sim
        .registry
        .iter()
        .filter(|c| c.age() != AgeStage::from_moons(c.moons()))
        .map(Cat::full_name)
        .collect();
    results.push(TestResult {
        name: "gen_age_stages".into(),
        passed: mismatched.is_empty(),
        detail: format!("{} cats with stale age stage", mismatched.len()),
    });

    let young_elders = sim
        .clan_cats()
        .filter(|c| c.status() == CatStatus::Elder && !c.age().is_senior())
        .count();
    results.push(TestResult {
        name: "gen_elders_senior".into(),
        passed: young_elders == 0,
        detail: format!("{} elder(s) below senior age", young_elders),
    });

    let bad_levels = sim
        .registry
        .iter()
        .filter(|c| c.experience_level() != ExpLevel::from_experience(c.experience()))
        .count();
    results.push(TestResult {
        name: "gen_experience_levels".into(),
        passed: bad_levels == 0,
        detail: format!("{} cats with stale experience level", bad_levels),
    });

    if verbose {
        for cat in sim.clan_cats() {
            println!(
                "    {:<16} {:<14} {:>3} moons  {:?}",
                cat.full_name(),
                cat.status(),
                cat.moons(),
                cat.experience_level()
            );
        }
    }

    results
}

// ── 3. Moon Loop ────────────────────────────────────────────────────────

fn run_moons(
    sim: &mut ClanSimulation,
    config: &ClanConfig,
    rng: &mut StdRng,
    verbose: bool,
) -> Vec<TestResult> {
    println!("--- Moon Loop ({} moons) ---", config.moons_to_simulate);
    let mut results = Vec::new();

    let start_moons: HashMap<CatId, i32> = sim
        .clan_cats()
        .map(|c| (c.id().clone(), c.moons()))
        .collect();
    let mut deaths = Vec::new();

    for _ in 0..config.moons_to_simulate {
        let report = sim.advance_moon();

        let elders: Vec<CatId> = sim
            .clan_cats()
            .filter(|c| c.status() == CatStatus::Elder)
            .map(|c| c.id().clone())
            .collect();
        for id in elders {
            if !percentage_roll(config.elder_death_chance, rng) {
                continue;
            }
            match sim.kill_cat(&id) {
                Ok(_) => deaths.push(id),
                Err(e) => results.push(TestResult {
                    name: "moon_kill_elder".into(),
                    passed: false,
                    detail: e.to_string(),
                }),
            }
        }

        if verbose {
            println!("    moon {:>3}: {} aged, {} dead so far", report.moon, report.aged, deaths.len());
        }
    }

    results.push(TestResult {
        name: "moon_counter".into(),
        passed: sim.moon == config.moons_to_simulate,
        detail: format!("moon {}", sim.moon),
    });

    let aged_correctly = start_moons.iter().all(|(id, start)| {
        sim.registry.get(id).is_some_and(|cat| {
            // The dead stop aging, so only check the living
            cat.is_dead() || cat.moons() == start + config.moons_to_simulate as i32
        })
    });
    results.push(TestResult {
        name: "moon_aging".into(),
        passed: aged_correctly,
        detail: format!("living cats aged {} moons", config.moons_to_simulate),
    });

    let kits_unpromoted = sim
        .clan_cats()
        .filter(|c| c.status() == CatStatus::Kitten)
        .count()
        == config.kits as usize;
    results.push(TestResult {
        name: "moon_no_auto_promotion".into(),
        passed: kits_unpromoted,
        detail: "aging changes age stage, never status".into(),
    });

    let dead_in_clan = sim
        .clan_members()
        .iter()
        .filter_map(|id| sim.registry.get(id))
        .filter(|c| c.is_dead())
        .count();
    results.push(TestResult {
        name: "moon_dead_leave_clan".into(),
        passed: dead_in_clan == 0,
        detail: format!("{} dead cats still in the clan", dead_in_clan),
    });

    let afterlife_holds_dead = match sim.afterlife() {
        Some(afterlife) => deaths.iter().all(|id| afterlife.contains(id)),
        None => deaths.is_empty(),
    };
    results.push(TestResult {
        name: "moon_afterlife_membership".into(),
        passed: afterlife_holds_dead,
        detail: format!("{} elder death(s) recorded", deaths.len()),
    });

    results
}

// ── 4. Save Files ───────────────────────────────────────────────────────

fn validate_save_files(sim: &ClanSimulation, _verbose: bool) -> Vec<TestResult> {
    println!("--- Save Files ---");
    let mut results = Vec::new();

    let mut buffer = Vec::new();
    let binary = sim
        .save(&mut buffer)
        .and_then(|_| ClanSimulation::load(&buffer[..]));
    results.push(match binary {
        Ok(loaded) => TestResult {
            name: "save_binary_roundtrip".into(),
            passed: same_clan(sim, &loaded),
            detail: format!("{} bytes", buffer.len()),
        },
        Err(e) => TestResult {
            name: "save_binary_roundtrip".into(),
            passed: false,
            detail: e.to_string(),
        },
    });

    let json = export_json(sim).and_then(|json| import_json(&json).map(|loaded| (json.len(), loaded)));
    results.push(match json {
        Ok((len, loaded)) => TestResult {
            name: "save_json_roundtrip".into(),
            passed: same_clan(sim, &loaded),
            detail: format!("{} bytes of JSON", len),
        },
        Err(e) => TestResult {
            name: "save_json_roundtrip".into(),
            passed: false,
            detail: e.to_string(),
        },
    });

    results
}

fn same_clan(a: &ClanSimulation, b: &ClanSimulation) -> bool {
    a.moon == b.moon
        && a.clan_prefix == b.clan_prefix
        && a.clan_members() == b.clan_members()
        && a.groups == b.groups
        && a.registry.len() == b.registry.len()
        && a.registry.iter().all(|cat| {
            b.registry.get(cat.id()).is_some_and(|other| {
                other.full_name() == cat.full_name()
                    && other.moons() == cat.moons()
                    && other.is_dead() == cat.is_dead()
            })
        })
}

// ── 5. Groups ───────────────────────────────────────────────────────────

fn validate_groups(sim: &mut ClanSimulation, config: &ClanConfig, _verbose: bool) -> Vec<TestResult> {
    println!("--- Groups ---");
    let mut results = Vec::new();

    let names: Vec<String> = sim.other_clans().map(|c| c.name()).collect();
    let expected: Vec<String> = config
        .rival_prefixes
        .iter()
        .map(|p| format!("{}Clan", p.trim()))
        .collect();
    results.push(TestResult {
        name: "groups_rival_names".into(),
        passed: names == expected,
        detail: names.join(", "),
    });

    let afterlife_name = sim.afterlife().map(|a| a.name()).unwrap_or_default();
    results.push(TestResult {
        name: "groups_afterlife_name".into(),
        passed: afterlife_name == config.afterlife_name.trim(),
        detail: afterlife_name,
    });

    // An outsider's status change is accepted silently
    let outsider = sim
        .clan_cats()
        .find(|c| c.status() == CatStatus::Warrior)
        .map(|c| c.id().clone());
    if let Some(id) = outsider {
        let sent = sim.send_outside(&id).is_ok();
        let changed = sim.change_status(&id, CatStatus::Loner);
        results.push(TestResult {
            name: "groups_outsider_status_change".into(),
            passed: sent && changed == Ok(CatStatus::Warrior),
            detail: format!("{:?}", changed),
        });
    }

    // A rival clan has no rule for status changes yet and says so
    let rival_deputy = sim.other_clans().find_map(|c| c.deputy.clone());
    if let Some(id) = rival_deputy {
        let changed = sim.change_status(&id, CatStatus::Leader);
        results.push(TestResult {
            name: "groups_rival_status_change_reported".into(),
            passed: matches!(changed, Err(SimulationError::Group(GroupError::NotImplemented { .. }))),
            detail: format!("{:?}", changed),
        });
    }

    results
}

// ── 6. Utilities ────────────────────────────────────────────────────────

fn validate_utilities(rng: &mut StdRng, _verbose: bool) -> Vec<TestResult> {
    println!("--- Utilities ---");
    let mut results = Vec::new();

    results.push(TestResult {
        name: "util_inverse_chance_certain".into(),
        passed: (0..100).all(|_| inverse_chance_roll(1, rng)),
        detail: "1-in-1 always succeeds".into(),
    });

    results.push(TestResult {
        name: "util_percentage_bounds".into(),
        passed: (0..100).all(|_| percentage_roll(100, rng) && !percentage_roll(0, rng)),
        detail: "100% always, 0% never".into(),
    });

    let empty: [u8; 0] = [];
    results.push(TestResult {
        name: "util_choose_random_empty".into(),
        passed: choose_random(&empty, rng).is_err(),
        detail: "empty selection is an error".into(),
    });

    let chunks: Vec<Vec<i32>> = chunk(1..=5, 2)
        .map(|chunks| chunks.collect())
        .unwrap_or_default();
    results.push(TestResult {
        name: "util_chunk".into(),
        passed: chunks == vec![vec![1, 2], vec![3, 4], vec![5]],
        detail: format!("{:?}", chunks),
    });

    let mut target: HashMap<&str, i32> = HashMap::from([("a", 1)]);
    let merged = add_range(&mut target, Some([("a", 2), ("b", 3)]));
    results.push(TestResult {
        name: "util_add_range".into(),
        passed: merged.is_ok() && target.get("a") == Some(&2) && target.get("b") == Some(&3),
        detail: format!("{:?}", target),
    });

    results
}
