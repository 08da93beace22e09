use big_buffer_write::{config::Config, context::Context, run};

fn main() {
    let config = match Config::from_args(std::env::args()) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };
    let mut context = Context::production();
    if let Err(error) = run(&mut context, &config) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}
