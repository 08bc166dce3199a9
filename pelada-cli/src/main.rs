//! Pelada CLI — draw teams from a roster file.
//!
//! Commands:
//! - `draw` — split the roster into teams with a chosen strategy
//! - `roster` — list players and groups, flag membership problems
//! - `strategies` — list the available strategies

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use pelada_core::config::MatchConfig;
use pelada_core::domain::{Skill, Team};
use pelada_core::{PartitionSummary, Roster, Strategy};

#[derive(Parser)]
#[command(name = "pelada", about = "Pelada CLI — split a roster into fair teams")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Split the roster into teams.
    Draw {
        /// Match file (TOML) with players, groups and an optional [draw] section.
        #[arg(long, default_value = "pelada.toml")]
        roster: PathBuf,

        /// Number of teams. Overrides [draw].teams.
        #[arg(long, allow_negative_numbers = true)]
        teams: Option<i64>,

        /// Strategy: random, balanced_by_skill, mix_groups, separate_groups.
        #[arg(long)]
        strategy: Option<Strategy>,

        /// Seed for reproducible random draws. Overrides [draw].seed.
        #[arg(long)]
        seed: Option<u32>,

        /// Print teams as JSON instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List players and groups and report membership problems.
    Roster {
        /// Match file (TOML).
        #[arg(long, default_value = "pelada.toml")]
        roster: PathBuf,
    },
    /// List the available strategies.
    Strategies,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Draw {
            roster,
            teams,
            strategy,
            seed,
            json,
        } => run_draw(&roster, teams, strategy, seed, json),
        Commands::Roster { roster } => run_roster(&roster),
        Commands::Strategies => {
            run_strategies();
            Ok(())
        }
    }
}

fn load(path: &Path) -> Result<MatchConfig> {
    let cfg = MatchConfig::from_file(path)
        .with_context(|| format!("loading match file {}", path.display()))?;
    debug!(
        players = cfg.roster.players.len(),
        groups = cfg.roster.groups.len(),
        "match file loaded"
    );
    Ok(cfg)
}

fn run_draw(
    path: &Path,
    teams: Option<i64>,
    strategy: Option<Strategy>,
    seed: Option<u32>,
    json: bool,
) -> Result<()> {
    let cfg = prepare_draw(load(path)?, teams, strategy, seed);

    let team_count = cfg.draw.team_count()?;
    let strategy = cfg.draw.strategy;

    if strategy == Strategy::SeparateGroups {
        warn_membership(&cfg.roster);
        if cfg.roster.groups.is_empty() {
            warn!("separate_groups with no groups defined: plain round-robin");
        }
    }

    let mut rng = cfg.draw.rng();
    let teams = cfg.roster.partition(team_count, strategy, &mut rng)?;
    let summary = PartitionSummary::of(&teams);

    if json {
        let out = draw_json(&cfg, &teams, &summary);
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print_teams(&cfg, &teams, &summary);
    }

    Ok(())
}

/// Apply command-line overrides and refresh each player's group list, so
/// both output formats agree on membership.
fn prepare_draw(
    mut cfg: MatchConfig,
    teams: Option<i64>,
    strategy: Option<Strategy>,
    seed: Option<u32>,
) -> MatchConfig {
    cfg.draw.apply_overrides(teams, strategy, seed);
    cfg.roster.sync_memberships();
    cfg
}

/// Seed worth reporting: only shuffling strategies consume it.
fn reported_seed(cfg: &MatchConfig) -> Option<u32> {
    cfg.draw
        .strategy
        .uses_randomness()
        .then_some(cfg.draw.seed)
        .flatten()
}

fn draw_json(cfg: &MatchConfig, teams: &[Team<'_>], summary: &PartitionSummary) -> serde_json::Value {
    serde_json::json!({
        "strategy": cfg.draw.strategy,
        "seed": reported_seed(cfg),
        "teams": teams,
        "summary": summary,
    })
}

fn run_roster(path: &Path) -> Result<()> {
    let mut cfg = load(path)?;
    cfg.roster.sync_memberships();
    let roster = &cfg.roster;

    if roster.players.is_empty() {
        bail!("no players in {}", path.display());
    }

    println!("Players: {}", roster.players.len());
    println!("{:<12} {:<20} {:<8} {}", "Id", "Name", "Skill", "Groups");
    println!("{}", "-".repeat(56));
    for p in &roster.players {
        let groups: Vec<&str> = p.groups.iter().map(|g| g.as_str()).collect();
        println!(
            "{:<12} {:<20} {:<8} {}",
            p.id.as_str(),
            p.name,
            p.skill,
            groups.join(", ")
        );
    }

    let by_skill: Vec<String> = Skill::ALL
        .iter()
        .rev()
        .map(|s| {
            let n = roster.players.iter().filter(|p| p.skill == *s).count();
            format!("{s}: {n}")
        })
        .collect();
    println!();
    println!("Skill mix: {}", by_skill.join(", "));

    if !roster.groups.is_empty() {
        println!();
        println!("Groups: {}", roster.groups.len());
        for g in &roster.groups {
            println!("  {} {} ({}): {} member(s)", g.color, g.name, g.id, g.members.len());
        }
    }

    let problems = warn_membership(roster);
    if problems == 0 {
        println!();
        println!("No membership problems.");
    }

    Ok(())
}

/// Log overlapping and unknown group members. Returns how many were found.
fn warn_membership(roster: &Roster) -> usize {
    let overlap = roster.overlapping_members();
    for (player, groups) in &overlap {
        let names: Vec<&str> = groups.iter().map(|g| g.as_str()).collect();
        warn!(
            %player,
            groups = %names.join(", "),
            "player is in several groups and will be placed once per group"
        );
    }

    let unknown = roster.unknown_members();
    for (group, player) in &unknown {
        warn!(%group, %player, "group lists a player who is not on the roster");
    }

    overlap.len() + unknown.len()
}

fn run_strategies() {
    for s in Strategy::ALL {
        let marker = if s == Strategy::default() { " (default)" } else { "" };
        println!("{:<18} {}{marker}", s.name(), s.description());
    }
}

fn print_teams(cfg: &MatchConfig, teams: &[Team<'_>], summary: &PartitionSummary) {
    let roster = &cfg.roster;
    println!();
    println!("=== {} teams ({}) ===", teams.len(), cfg.draw.strategy);
    if let Some(seed) = reported_seed(cfg) {
        println!("Seed: {seed}");
    }
    for (team, stats) in teams.iter().zip(&summary.teams) {
        let avg = stats
            .average_skill
            .map(|a| format!("{a:.1}"))
            .unwrap_or_else(|| "-".into());
        println!();
        println!("Team {}  [{} players, skill {avg}]", team.id, team.len());
        for p in &team.players {
            let badges: Vec<&str> = roster
                .groups_of(&p.id)
                .into_iter()
                .map(|g| g.name.as_str())
                .collect();
            if badges.is_empty() {
                println!("  {:<20} {}", p.name, p.skill);
            } else {
                println!("  {:<20} {:<8} [{}]", p.name, p.skill, badges.join(", "));
            }
        }
    }
    println!();
    println!(
        "Size spread: {}  Skill spread: {}",
        summary.size_spread, summary.skill_spread
    );
    println!();
}
