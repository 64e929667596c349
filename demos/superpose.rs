use clap::Parser;
use superposition::{SamplingConfig, WaveSuperposer};

/// Superpose two simple harmonic oscillations and report the dominant
/// frequency of the result.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Level of the first oscillator in dB
    #[arg(long, default_value_t = 60.0, allow_negative_numbers = true)]
    db1: f64,
    /// Level of the second oscillator in dB
    #[arg(long, default_value_t = 80.0, allow_negative_numbers = true)]
    db2: f64,
    /// Angular frequency of the first oscillator in rad/s
    #[arg(long, default_value_t = 100.0, allow_negative_numbers = true)]
    w1: f64,
    /// Angular frequency of the second oscillator in rad/s
    #[arg(long, default_value_t = 200.0, allow_negative_numbers = true)]
    w2: f64,
    /// Phase of the first oscillator in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    phi1: f64,
    /// Phase of the second oscillator in radians
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    phi2: f64,
    /// Number of points on the time axis
    #[arg(long, default_value_t = superposition::sampling::DEFAULT_SAMPLE_COUNT)]
    samples: usize,
    /// Length of the time window in seconds
    #[arg(long, default_value_t = superposition::sampling::DEFAULT_DURATION_SECONDS)]
    duration: f64,
    /// Print `time amplitude` pairs of the waveform, one per line
    #[arg(long)]
    dump: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let sampling = SamplingConfig::new(args.samples, args.duration)?;
    let superposer = WaveSuperposer::new(args.db1, args.db2, args.w1, args.w2)
        .with_phases(args.phi1, args.phi2)
        .with_sampling(sampling);
    log::info!(
        "{} samples over {} s ({} Hz)",
        sampling.sample_count(),
        sampling.duration_seconds(),
        sampling.sample_rate()
    );

    let waveform = superposer.sampled_waveform();
    if args.dump {
        for (t, x) in waveform.iter() {
            println!("{} {}", t, x);
        }
    }

    let peak = superposer.dominant_component(&waveform.samples)?;
    println!("dB: {}", peak.amplitude_db);
    println!("Dominant frequency: {} Hz", peak.frequency);
    Ok(())
}
