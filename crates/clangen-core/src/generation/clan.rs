//! Clan generation: the home clan, its surrounding groups and rival clans

use std::ops::RangeInclusive;

use clangen_logic::clan_config::{validate_config, ClanConfig};
use clangen_logic::random::choose_random;
use rand::Rng;

use crate::components::{Cat, CatOptions, CatSex, CatStatus, Relationship};
use crate::engine::ClanSimulation;
use crate::error::GenerationError;
use crate::groups::{Afterlife, GroupBehavior, OtherClan, Outsiders};
use crate::ids::CatId;
use crate::registry::CatRegistry;

/// Warriors each rival clan starts with besides its leader, deputy and medicine cat.
const RIVAL_WARRIORS: usize = 3;

/// Generate a complete starting clan from `config`.
pub fn generate_clan(config: &ClanConfig, rng: &mut impl Rng) -> Result<ClanSimulation, GenerationError> {
    let errors = validate_config(config);
    if !errors.is_empty() {
        return Err(GenerationError::InvalidConfig(errors));
    }

    let mut sim = ClanSimulation::new(config.clan_prefix.trim());

    let mut leader = random_cat(CatStatus::Leader, 36..=90, 150..=280, rng);
    leader.set_lives(config.leader_lives);
    sim.add_clan_cat(leader);
    sim.add_clan_cat(random_cat(CatStatus::Deputy, 24..=80, 120..=240, rng));
    sim.add_clan_cat(random_cat(CatStatus::MedicineCat, 24..=100, 100..=240, rng));

    let warriors: Vec<CatId> = (0..config.warriors)
        .map(|_| sim.add_clan_cat(random_cat(CatStatus::Warrior, 12..=95, 20..=200, rng)))
        .collect();

    for _ in 0..config.apprentices {
        let mentor = choose_random(&warriors, rng)?.clone();
        let mut apprentice = random_cat(CatStatus::Apprentice, 6..=11, 0..=50, rng);
        apprentice.mentor = Some(mentor.clone());
        let apprentice_id = sim.add_clan_cat(apprentice);
        if let Some(mentor) = sim.registry.get_mut(&mentor) {
            mentor.apprentices.push(apprentice_id);
        }
    }

    for _ in 0..config.kits {
        let first = choose_random(&warriors, rng)?.clone();
        let second = choose_random(&warriors, rng)?.clone();
        let mut parents = vec![first];
        if !parents.contains(&second) {
            parents.push(second);
        }
        spawn_kit(&mut sim, parents, rng);
    }

    for _ in 0..config.elders {
        sim.add_clan_cat(random_cat(CatStatus::Elder, 120..=160, 150..=320, rng));
    }

    let afterlife = Afterlife::from_live_state("afterlife", &sim.registry, config.afterlife_name.trim());
    sim.add_group(afterlife);
    let outsiders = Outsiders::from_live_state("outsiders", &sim.registry, config.outsiders_name.trim());
    sim.add_group(outsiders);

    for prefix in &config.rival_prefixes {
        let rival = generate_rival_clan(&mut sim.registry, prefix.trim(), rng);
        sim.add_group(rival);
    }

    log::info!(
        "Generated {} with {} cats and {} rival clans",
        sim.clan_name(),
        sim.clan_members().len(),
        config.rival_prefixes.len()
    );
    Ok(sim)
}

/// Generate a rival clan. Its cats go into `registry`, flagged as outside.
pub fn generate_rival_clan(registry: &mut CatRegistry, prefix: &str, rng: &mut impl Rng) -> OtherClan {
    let mut leader = random_cat(CatStatus::Leader, 36..=90, 150..=280, rng);
    // Rival leaders are somewhere into their nine lives
    leader.set_lives(9 - rng.gen_range(0..5));
    let leader = register_outside(registry, leader);
    let deputy = register_outside(registry, random_cat(CatStatus::Deputy, 24..=80, 120..=240, rng));
    let medicine_cat = register_outside(
        registry,
        random_cat(CatStatus::MedicineCat, 24..=100, 100..=240, rng),
    );
    let warriors: Vec<CatId> = (0..RIVAL_WARRIORS)
        .map(|_| register_outside(registry, random_cat(CatStatus::Warrior, 12..=95, 20..=200, rng)))
        .collect();

    let id = format!("clan_{}", prefix.to_lowercase());
    let mut clan = OtherClan::from_live_state(
        id,
        registry,
        prefix,
        Some(leader),
        Some(deputy),
        vec![medicine_cat],
    );
    for warrior in warriors {
        clan.add_member(warrior);
    }
    clan
}

fn register_outside(registry: &mut CatRegistry, mut cat: Cat) -> CatId {
    cat.outside = true;
    registry.insert(cat)
}

fn spawn_kit(sim: &mut ClanSimulation, parents: Vec<CatId>, rng: &mut impl Rng) -> CatId {
    let mut kit = Cat::new(
        CatOptions::new()
            .with_status(CatStatus::Kitten)
            .with_moons(rng.gen_range(1..=5))
            .with_sex(random_sex(rng))
            .with_bio_parents(parents.clone()),
        rng,
    );
    let own_id = kit.id().clone();
    for parent in &parents {
        kit.relationships
            .insert(parent.clone(), Relationship::family(own_id.clone(), parent.clone()));
    }
    let kit_id = sim.add_clan_cat(kit);

    for parent in &parents {
        if let Some(cat) = sim.registry.get_mut(parent) {
            cat.relationships
                .insert(kit_id.clone(), Relationship::family(parent.clone(), kit_id.clone()));
        }
    }
    kit_id
}

fn random_cat(
    status: CatStatus,
    moons: RangeInclusive<i32>,
    experience: RangeInclusive<i32>,
    rng: &mut impl Rng,
) -> Cat {
    let options = CatOptions::new()
        .with_status(status)
        .with_moons(rng.gen_range(moons))
        .with_sex(random_sex(rng))
        .with_experience(rng.gen_range(experience));
    Cat::new(options, rng)
}

fn random_sex(rng: &mut impl Rng) -> CatSex {
    if rng.gen_bool(0.5) {
        CatSex::Male
    } else {
        CatSex::Female
    }
}
