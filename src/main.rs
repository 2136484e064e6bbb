use guess_the_number::{Game, play};
use std::io;

fn main() {
    println!("Hello, World! Welcome to 'Try to guess the number' !");

    let mut game = Game::new();
    let stdin = io::stdin();
    let stdout = io::stdout();

    if let Err(err) = play(&mut game, &mut stdin.lock(), &mut stdout.lock()) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
