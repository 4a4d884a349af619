use std::io::{self, IsTerminal};
use tictactoe_rs::console::{controller, RenderOptions};

fn main() -> io::Result<()> {
    let stdout = io::stdout();

    let mut opts = RenderOptions::default();
    if !stdout.is_terminal() {
        // keep piped transcripts free of escape sequences
        opts.clear_screen = false;
    }

    let mut input = io::stdin().lock();
    let mut output = stdout.lock();
    controller::run(&mut input, &mut output, opts)?;
    Ok(())
}
