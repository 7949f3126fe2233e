use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    lc3script::run()
}
