use std::process::ExitCode;

use padding::PaddingError;

fn main() -> ExitCode {
    let result = padding::cli::parse_from(std::env::args_os()).and_then(padding::cli::run);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = err.exit_code();
            match err {
                PaddingError::Usage { usage } => println!("{}", usage),
                other => eprintln!("{:?}", miette::Report::new(other)),
            }
            ExitCode::from(code)
        }
    }
}
