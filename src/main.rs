use std::process::ExitCode;

fn main() -> ExitCode {
    match reformat_labels::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
