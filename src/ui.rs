//! Console display helpers: greeting, board rendering and announcements.

use crate::board::Board;

/// Greeting banner with the input format, shown once at startup.
pub fn greet() {
    println!("-------------------");
    println!("  Welcome to the  ");
    println!("  Sea Battle game  ");
    println!("-------------------");
    println!(" input format: x y ");
    println!("  x - row number  ");
    println!("  y - col number ");
}

pub fn separator() {
    println!("{}", "-".repeat(20));
}

/// Print two boards side by side. Ships are requested for both sides; a
/// concealed board substitutes the neutral water symbol on its own.
pub fn print_boards(left_name: &str, left: &Board, right_name: &str, right: &Board) {
    println!("{left_name} board:\t\t\t\t{right_name} board:");
    for (l, r) in left.render(true).iter().zip(right.render(true).iter()) {
        println!("{l}\t\t{r}");
    }
}

pub fn announce_winner(name: &str) {
    println!("{name} wins!");
}
