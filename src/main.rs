use cardforge::cli::Cli;

fn main() {
    Cli::run();
}
