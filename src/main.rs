use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use wavscrub::audio_clean::pipeline::{denoise_file, downmix_mono, DenoiseOptions};
use wavscrub::error::Result;
use wavscrub::plot::plot_comparison;
use wavscrub::wav_io::read_waveform;

/// Bandpass noise reduction for WAV audio
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Noisy input WAV file
    input: PathBuf,

    /// Cleaned output WAV file (mono, 16-bit PCM)
    output: PathBuf,

    /// Passband lower edge in Hz
    #[arg(long, default_value_t = 800.0)]
    low: f64,

    /// Passband upper edge in Hz
    #[arg(long, default_value_t = 1200.0)]
    high: f64,

    /// Filter order (steeper rolloff, more ringing)
    #[arg(long, default_value_t = 5)]
    order: usize,

    /// Comparison plot output path (PNG)
    #[arg(long, default_value = "denoise_comparison.png")]
    plot: PathBuf,

    /// Skip rendering the comparison plot
    #[arg(long)]
    no_plot: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let options = DenoiseOptions {
        low_hz: args.low,
        high_hz: args.high,
        order: args.order,
    };

    let result = denoise_file(&args.input, &args.output, &options)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !args.no_plot {
        // Two independent reads so the plot reflects exactly what is
        // on disk, not in-memory intermediates.
        let original = read_waveform(&args.input)?;
        let filtered = read_waveform(&args.output)?;
        log::info!("Input sampling rate: {} Hz", original.sample_rate);
        log::info!("Output sampling rate: {} Hz", filtered.sample_rate);

        plot_comparison(&downmix_mono(&original), &filtered.samples, &args.plot)?;
        log::info!("Wrote comparison plot to {}", args.plot.display());
    }

    Ok(())
}
