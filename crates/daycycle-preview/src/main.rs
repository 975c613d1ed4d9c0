use std::process;

use daycycle_presets::defaults::BUILTIN_PRESET_NAMES;
use daycycle_preview::cli::{self, Options, USAGE};
use daycycle_preview::report;
use daycycle_preview::sampler::DaySampler;
use daycycle_preview::PreviewError;

fn run(options: &Options) -> Result<(), PreviewError> {
    if options.list {
        for name in BUILTIN_PRESET_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let (preset, settings) = cli::load_inputs(options)?;
    let report = DaySampler::new(options.samples).run(&preset, &settings)?;

    println!("\n## Day/Night Preview\n");
    println!("{}", report::format_markdown(&report));

    if let Some(ref path) = options.output {
        report::save_report(path, &report)?;
        log::info!("Saved report to {}", path.display());
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match cli::parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            process::exit(2);
        }
    };

    if options.help {
        eprintln!("{USAGE}");
        process::exit(0);
    }

    if let Err(e) = run(&options) {
        log::error!("{e}");
        process::exit(1);
    }
}
