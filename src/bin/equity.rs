use clap::Parser;
use poker_equity::holdem::{AnalyzerBuilder, DEFAULT_TRIALS, GameState};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(name = "equity")]
#[command(about = "Estimate the equity of a Texas Hold'em hand and recommend an action")]
struct Cli {
    /// Hero hole cards, for example AhAd
    #[arg(long)]
    hole: String,

    /// Community cards dealt so far, for example Ac2d9s
    #[arg(long, default_value = "")]
    board: String,

    /// Number of opponents still in the hand
    #[arg(short, long, default_value_t = 1)]
    opponents: usize,

    /// Monte Carlo trials to run
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Seed for a repeatable run
    #[arg(short, long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 0.0)]
    pot: f64,

    #[arg(long, default_value_t = 0.0)]
    to_call: f64,

    /// Chips behind, used for implied odds
    #[arg(long, default_value_t = 0.0)]
    stack: f64,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let game_state = match GameState::from_strs(&cli.hole, &cli.board, cli.opponents) {
        Ok(gs) => gs.pot_size(cli.pot).bet_to_call(cli.to_call).stack_size(cli.stack),
        Err(e) => {
            eprintln!("Error parsing cards: {e}");
            std::process::exit(1);
        }
    };

    let mut builder = AnalyzerBuilder::default().trials(cli.trials);
    if let Some(seed) = cli.seed {
        builder = builder.seed(seed);
    }

    match builder.build().and_then(|mut a| a.analyze(&game_state)) {
        Ok(analysis) => {
            println!("Hand: {} ({:?})", analysis.hand_type, analysis.street);
            println!(
                "Win: {:.2}%  Tie: {:.2}%  Loss: {:.2}%",
                analysis.win_probability, analysis.tie_probability, analysis.loss_probability
            );
            println!("Equity: {:.2}% over {} trials", analysis.equity, analysis.trials);
            println!(
                "Pot odds: {:.3}  Implied odds: {:.3}  EV: {:.2}",
                analysis.pot_odds, analysis.implied_odds, analysis.expected_value
            );
            println!("Board: {:?}", analysis.board_texture);
            println!(
                "Action: {} (confidence {})",
                analysis.action, analysis.confidence
            );
            println!();
            for reason in &analysis.reasoning {
                println!("- {reason}");
            }
        }
        Err(e) => {
            eprintln!("Error analyzing hand: {e}");
            std::process::exit(1);
        }
    }
}
