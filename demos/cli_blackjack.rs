//! CLI blackjack example.
//!
//! Plays against the remote deck service by default. Pass `--offline` to
//! deal from an in-process deck instead. Set `RUST_LOG=bjdeck=debug` to
//! watch the deck traffic.

use std::io::{self, Write};

use bjdeck::{
    Card, CardSupply, Game, GameState, Hand, HttpSupply, LocalSupply, Phase, Rank, Suit,
    SupplyOptions, Winner,
};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = match SupplyOptions::from_env() {
        Ok(options) => options,
        Err(err) => {
            println!("Configuration error: {err}");
            return;
        }
    };

    println!("Blackjack CLI example (type 'q' to quit)");

    if std::env::args().any(|arg| arg == "--offline") {
        play(Game::new(LocalSupply::from_options(&options))).await;
    } else {
        match HttpSupply::new(&options) {
            Ok(supply) => play(Game::new(supply)).await,
            Err(err) => println!("Cannot reach the deck service: {err}"),
        }
    }
}

async fn play<S: CardSupply>(mut game: Game<S>) {
    loop {
        match prompt_line("Deal a new round? (y/n): ").as_str() {
            "y" | "yes" | "" => {}
            _ => {
                println!("Goodbye.");
                return;
            }
        }

        if let Err(err) = game.start_game().await {
            println!("Deal error: {err}");
            continue;
        }

        while game.state().phase() == Phase::Playing {
            print_table(game.state());
            match prompt_line("[h]it, [s]tand or [q]uit: ").as_str() {
                "h" | "hit" => match game.hit().await {
                    Ok(card) => println!("You drew {}", format_card(&card)),
                    Err(err) => println!("Hit error: {err}"),
                },
                "s" | "stand" => {
                    if let Err(err) = game.stand() {
                        println!("Stand error: {err}");
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(game.state());
        match game.winner() {
            Some(Winner::Player) => println!("You win!"),
            Some(Winner::House) => println!("House wins."),
            Some(Winner::Tie) => println!("Push."),
            None => {}
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!();
    println!(
        "House:  {} ({})",
        format_hand(state.house_hand()),
        state.house_score()
    );
    println!(
        "You:    {} ({})",
        format_hand(state.player_hand()),
        state.player_score()
    );
    println!("Deck:   {} cards left", state.remaining());
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };

    let rank = match card.rank {
        Rank::Ten => "10".to_string(),
        other => other.token().to_string(),
    };
    let is_face = matches!(card.rank, Rank::Ace | Rank::Jack | Rank::Queen | Rank::King);

    let colored_rank = if is_face {
        colorize(&rank, color_code)
    } else {
        rank
    };
    let colored_suit = colorize(&card.suit.letter().to_string(), color_code);
    format!("{colored_rank}{colored_suit}")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}
