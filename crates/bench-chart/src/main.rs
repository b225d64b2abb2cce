// File: crates/bench-chart/src/main.rs
// Summary: Entry point; exits 1 with the usage line on a bad argument count.

use bench_chart::{logging::setup_logger, Args, ChartRenderer};

fn main() -> anyhow::Result<()> {
    let _guard = setup_logger();

    let args = match Args::try_from_argv(std::env::args_os()) {
        Ok(args) => args,
        Err(usage) => {
            println!("{usage}");
            std::process::exit(1);
        }
    };

    ChartRenderer::default().render(&args.into_request())?;
    Ok(())
}
