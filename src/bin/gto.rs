use std::cmp::Ordering;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rs_gto::core::{GtoError, parse_board};
use rs_gto::holdem::{
    blocked_combos, blockers_remove, compare_hands, evaluate, parse_range, range_from_top_pct,
    range_grid, Range,
};
use rs_gto::math::{
    break_even_pct, bluff_ratio, effective_stack, implied_odds, mdf, pot_odds, spr,
};
use rs_gto::postflop::{
    HandStrength, Position, Street, analyze_board, cbet_recommendation, street_strategy,
};
use rs_gto::preflop::{RangeTableCache, Situation, TableSize};
use tracing::event;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "gto")]
#[command(about = "Hand evaluation, range math and preflop charts")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Best five card hand from hole cards and a board
    Eval {
        /// Hole cards, e.g. AhKh
        hole: String,
        /// Board cards, e.g. "Qh Jh Th"
        #[arg(default_value = "")]
        board: String,
    },
    /// Compare two hands on the same board
    Compare {
        hero: String,
        villain: String,
        board: String,
    },
    /// Expand a range expression
    Range {
        /// Range expression, e.g. "TT+,AJs+,KQo"
        expr: String,
        /// Draw the 13x13 chart
        #[arg(short, long)]
        grid: bool,
    },
    /// The strongest hands making up a share of all combinations
    Top {
        /// Percentage in (0, 100]
        pct: f64,
        #[arg(short, long)]
        grid: bool,
    },
    /// Remove hands blocked by known cards
    Blockers {
        /// Range expression
        expr: String,
        /// Dead cards, e.g. AsKd
        dead: String,
    },
    /// Look up a preflop chart
    Preflop {
        /// Hand class or two cards, e.g. AKs or AhKh
        hand: String,
        /// Hero position, e.g. BTN
        position: String,
        /// RFI, vs_RFI or vs_3bet
        #[arg(short, long, default_value = "RFI")]
        situation: Situation,
        /// Villain position for vs_RFI and vs_3bet
        #[arg(long)]
        vs: Option<String>,
        #[arg(short, long = "table", default_value = "6max")]
        table_size: TableSize,
        /// Directory holding ranges_6max.json and ranges_9max.json
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read a board and suggest a c-bet or a street plan
    Postflop {
        /// Three to five board cards, e.g. Ks7d2c
        board: String,
        /// IP or OOP
        #[arg(short, long, default_value = "IP")]
        position: Position,
        /// nuts, very_strong, strong, medium, draw, bluff or weak
        #[arg(short, long)]
        strength: Option<HandStrength>,
        #[arg(long, default_value_t = 10.0)]
        pot: f64,
        /// Effective stack behind
        #[arg(long, default_value_t = 100.0)]
        stack: f64,
        /// Defaults to the street the board is on
        #[arg(long)]
        street: Option<Street>,
        /// More than one opponent
        #[arg(long)]
        multiway: bool,
        /// Print the board texture as JSON
        #[arg(long)]
        json: bool,
    },
    /// Pot odds and related numbers for a bet
    Odds {
        pot: f64,
        bet: f64,
        /// Stacks behind; the second largest is effective
        #[arg(long, num_args = 1..)]
        stacks: Vec<f64>,
        /// Expected winnings on later streets
        #[arg(long)]
        future: Option<f64>,
    },
}

fn print_range(range: &Range, grid: bool, title: &str) {
    if grid {
        println!("{}", range_grid(range, title));
    } else {
        println!("{range}");
        println!("{} combos ({:.1}%)", range.total_combos(), range.pct());
    }
}

fn run(cli: Cli) -> Result<(), GtoError> {
    match cli.command {
        Commands::Eval { hole, board } => {
            let result = evaluate(&parse_board(&hole)?, &parse_board(&board)?)?;
            let cards: Vec<String> = result.cards.iter().map(|c| c.to_string()).collect();
            println!("{result} [{}]", cards.join(" "));
            println!("Kickers: {:?}", result.kickers);
        }
        Commands::Compare {
            hero,
            villain,
            board,
        } => {
            let board = parse_board(&board)?;
            let outcome = compare_hands(&parse_board(&hero)?, &parse_board(&villain)?, &board)?;
            match outcome {
                Ordering::Greater => println!("Hero wins"),
                Ordering::Less => println!("Villain wins"),
                Ordering::Equal => println!("Split pot"),
            }
        }
        Commands::Range { expr, grid } => {
            print_range(&parse_range(&expr), grid, &expr);
        }
        Commands::Top { pct, grid } => {
            print_range(&range_from_top_pct(pct)?, grid, &format!("Top {pct}%"));
        }
        Commands::Blockers { expr, dead } => {
            let dead = parse_board(&dead)?;
            let range = parse_range(&expr);
            for hand in &range {
                let blocked = blocked_combos(hand, dead.iter().copied());
                if blocked > 0 {
                    println!("{hand}: {blocked} combos blocked");
                }
            }
            let kept = blockers_remove(range.as_slice(), dead);
            println!("{kept}");
            println!(
                "{} of {} combos left",
                kept.total_combos(),
                range.total_combos()
            );
        }
        Commands::Preflop {
            hand,
            position,
            situation,
            vs,
            table_size,
            data_dir,
            json,
        } => {
            let mut cache = RangeTableCache::new(data_dir);
            let decision =
                cache
                    .get(table_size)?
                    .action(&hand, &position, situation, vs.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&decision)?);
            } else {
                println!("{decision}");
            }
        }
        Commands::Postflop {
            board,
            position,
            strength,
            pot,
            stack,
            street,
            multiway,
            json,
        } => {
            let cards = parse_board(&board)?;
            let texture = analyze_board(&cards)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&texture)?);
                return Ok(());
            }
            println!("{texture}");
            if !texture.draws.is_empty() {
                println!("Draws: {}", texture.draws.join(", "));
            }
            let ratio = spr(stack, pot)?;
            println!("{ratio}: {}", ratio.zone.guidance());
            let street = street
                .or_else(|| Street::from_board_len(cards.len()))
                .unwrap_or(Street::Flop);
            match strength {
                Some(strength) => {
                    let plan = street_strategy(strength, &texture, pot, stack, position, street);
                    println!("{plan}");
                }
                None => {
                    let advice = cbet_recommendation(&texture, position, ratio.ratio, multiway);
                    println!("{advice}");
                }
            }
        }
        Commands::Odds {
            pot,
            bet,
            stacks,
            future,
        } => {
            println!("Pot odds: {:.1}%", pot_odds(pot, bet)? * 100.0);
            if let Some(future) = future {
                println!("Implied odds: {:.1}%", implied_odds(pot, bet, future)? * 100.0);
            }
            println!("MDF: {:.1}%", mdf(bet, pot)? * 100.0);
            println!("Bluff break even: {:.1}%", break_even_pct(pot, bet)? * 100.0);
            println!("Bluffs in a polarized range: {:.1}%", bluff_ratio(bet, pot)? * 100.0);
            if !stacks.is_empty() {
                let effective = effective_stack(&stacks)?;
                // SPR after the bet is called.
                println!("Effective stack: {effective}");
                println!("{}", spr((effective - bet).max(0.0), pot + 2.0 * bet)?);
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        event!(tracing::Level::DEBUG, error = ?e, "Command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
