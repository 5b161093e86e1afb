use rawpulse::context::Environment;
use rawpulse::status::ExitStatus;

/// Entry point - returns ExitStatus directly, which implements
/// std::process::Termination.
fn main() -> ExitStatus {
    let args: Vec<String> = std::env::args().collect();
    let env = Environment::init();

    rawpulse::core::run(args, env)
}
