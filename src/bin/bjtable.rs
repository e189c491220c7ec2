//! Interactive blackjack at the terminal.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjtable::{
    Action, Card, Game, GameOptions, GameState, Rating, Statistics, TableView, check_bet,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bjtable", about = "Play blackjack against the dealer")]
struct Args {
    /// Number of decks in the shoe
    #[arg(long, default_value_t = 6)]
    decks: u8,

    /// Chips to start with
    #[arg(long, default_value_t = 1000)]
    balance: usize,

    /// Rebuild the shoe when fewer than this many cards remain
    #[arg(long, default_value_t = 10)]
    reshuffle_threshold: usize,

    /// Shuffle seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_starting_balance(args.balance)
        .with_reshuffle_threshold(args.reshuffle_threshold);
    let mut game = Game::new(options, seed);

    println!("\n{}", "=".repeat(50));
    println!("          ♠ BLACKJACK ♠");
    println!("{}", "=".repeat(50));

    loop {
        let Some(bet) = prompt_bet(game.balance()) else {
            break;
        };
        if let Err(err) = game.place_bet(bet) {
            println!("❌ {err}");
            continue;
        }
        if let Err(err) = game.start_round() {
            println!("❌ {err}");
            break;
        }
        print_table(&game.view());

        match game.peek() {
            Ok(None) => play_player_turn(&mut game),
            Ok(Some(_)) => {}
            Err(err) => println!("❌ {err}"),
        }

        if game.state() == GameState::DealerTurn {
            if let Err(err) = game.dealer_play() {
                println!("❌ {err}");
            }
        }

        if let Some(result) = game.result().copied() {
            print_table(&game.view());
            let mark = if result.multiplier().is_win() || result.net == 0 {
                "✓"
            } else {
                "✗"
            };
            println!("{mark} {}", result.outcome.message());
            if result.payout > 0 {
                println!("  Paid ${}", result.payout);
            }
        }

        if game.clear_round().is_err() {
            break;
        }

        if game.is_bankrupt() {
            println!("\n✗ Game Over! You're out of chips.");
            break;
        }
        if !matches!(prompt_line("\nPlay another round? (y/n) ").as_str(), "y" | "yes") {
            break;
        }
    }

    print_statistics(&game.statistics());
    println!("Thanks for playing!");
}

fn play_player_turn(game: &mut Game) {
    while game.state() == GameState::PlayerTurn {
        let prompt = if game.can_double() {
            "\n(H)it, (S)tand, or (D)ouble Down? "
        } else {
            "\n(H)it or (S)tand? "
        };
        let input = prompt_line(prompt);
        if input.is_empty() {
            // stdin closed; stand rather than spin.
            if let Err(err) = game.stand() {
                println!("❌ {err}");
            }
            return;
        }

        let action = match input.parse::<Action>() {
            Ok(action) => action,
            Err(err) => {
                println!("❌ {err}");
                continue;
            }
        };

        match game.act(action) {
            Ok(true) if action == Action::Double => {
                println!("✓ Doubled down! New bet: ${}", game.current_bet());
                print_table(&game.view());
            }
            Ok(true) => {
                if game.state() == GameState::PlayerTurn {
                    print_table(&game.view());
                }
            }
            Ok(false) => println!("✗ You busted!"),
            Err(err) => println!("❌ {err}"),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

/// Asks until a valid bet is entered. `None` once stdin is closed.
fn prompt_bet(balance: usize) -> Option<usize> {
    loop {
        println!("\n💰 Balance: ${balance}");
        let input = prompt_line("Place your bet: $");
        if input.is_empty() {
            return None;
        }
        match input.parse::<usize>() {
            Ok(bet) => match check_bet(balance, bet) {
                Ok(()) => return Some(bet),
                Err(err) => println!("❌ Invalid bet ({err}). Try again."),
            },
            Err(_) => println!("❌ Please enter a valid number."),
        }
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let code = if card.suit.is_red() { "31" } else { "34" };
    colorize(&card.to_string(), code)
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(no cards)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(", ")
}

fn print_table(view: &TableView) {
    println!("\n{}", "=".repeat(50));
    if view.dealer_hole_hidden {
        println!(
            "DEALER'S HAND: {}, ?? (one card hidden, showing {})",
            format_cards(&view.dealer_cards),
            view.dealer_value
        );
    } else {
        println!(
            "DEALER'S HAND: {} → Value: {}",
            format_cards(&view.dealer_cards),
            view.dealer_value
        );
    }
    println!(
        "YOUR HAND:    {} → Value: {}",
        format_cards(&view.player_cards),
        view.player_value
    );
    println!("{}", "=".repeat(50));
    println!(
        "Balance: ${} | Bet: ${} | Shoe: {} cards",
        view.balance, view.current_bet, view.cards_remaining
    );
}

fn print_statistics(stats: &Statistics) {
    let Some(rating) = stats.rating() else {
        println!("No hands played.");
        return;
    };

    let profit = stats.net_profit();
    let rule = "=".repeat(60);

    println!("\n{rule}");
    println!("{:^60}", "📊 GAME STATISTICS & ANALYSIS");
    println!("{rule}");

    println!("\n💰 FINANCIAL SUMMARY:");
    println!("  Starting Balance:     ${}", stats.starting_balance);
    println!("  Final Balance:        ${}", stats.balance);
    println!("  Total Wagered:        ${}", stats.total_wagered);
    if profit >= 0 {
        println!("  Net Profit:           🟢 +${profit}");
        println!("  Return on Investment: 🟢 +{:.2}%", stats.roi());
    } else {
        println!("  Net Loss:             🔴 ${profit}");
        println!("  Return on Investment: 🔴 {:.2}%", stats.roi());
    }

    println!("\n🎮 GAMEPLAY STATISTICS:");
    println!("  Total Hands Played:   {}", stats.hands());
    for (label, count) in [
        ("Wins:", stats.wins),
        ("Losses:", stats.losses),
        ("Pushes (Ties):", stats.pushes),
    ] {
        println!(
            "  {label:<21} {count} ({:.1}%)",
            stats.percent_of_hands(count)
        );
    }

    println!("\n⭐ SPECIAL EVENTS:");
    println!(
        "  Blackjacks:           {} ({:.1}% of hands)",
        stats.blackjacks,
        stats.percent_of_hands(stats.blackjacks)
    );
    println!(
        "  Busts:                {} ({:.1}% of hands)",
        stats.busts,
        stats.percent_of_hands(stats.busts)
    );

    println!("\n📈 BETTING ANALYSIS:");
    println!("  Average Bet:          ${:.2}", stats.average_bet());
    println!("  Average Win Payout:   ${:.2}", stats.average_win());
    println!("  Win/Loss Ratio:       {}:{}", stats.wins, stats.losses);
    if let Some(edge) = stats.house_edge() {
        println!("  Effective House Edge: {edge:.2}%");
    }

    println!("\n{rule}");
    println!("\n🎯 PERFORMANCE EVALUATION:");
    let verdict = match rating {
        Rating::Exceptional => "⭐⭐⭐ Exceptional! You beat the house!",
        Rating::Great => "⭐⭐ Great performance! Close to break-even.",
        Rating::Good => "⭐ Good effort! You're near average.",
        Rating::HouseWins => "💡 The house always wins. Better luck next time!",
    };
    println!("  {verdict}");
    println!("{rule}\n");
}
