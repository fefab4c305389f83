use calcexpr::calculate;
use std::process::ExitCode;

fn main() -> ExitCode {
    pretty_env_logger::init();

    let expression = std::env::args().skip(1).collect::<Vec<_>>().join(" ");
    if expression.trim().is_empty() {
        eprintln!("usage: calculate <expression>");
        return ExitCode::FAILURE;
    }

    match calculate(&expression) {
        Ok(result) => {
            println!("{} = {}", expression, result);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
