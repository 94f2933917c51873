use std::process::ExitCode;

fn main() -> ExitCode {
    match hostess::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
