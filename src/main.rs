use std::process::ExitCode;

fn main() -> ExitCode {
    qlhier::cli::run()
}
