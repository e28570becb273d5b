//! Simulate amplicon reads

/* mod declaration */
pub mod config;
pub mod description;
pub mod emit;
pub mod sampler;
pub mod snp;

/* standard use */

/* crate use */
use anyhow::Result;
use rand::RngCore;
use rand::SeedableRng;

/* local use */
use crate::amplicons::Amplicons;
use crate::cli;
use crate::error::Variant;
use crate::model;
use crate::references::{CoordinateLookup, Genome};
use crate::variant::Definitions;

/* reexport for easiest use */
pub use config::Config;
pub use emit::{EmitReads, Emitter, Technology};
pub use sampler::{Sampler, Window};

/// main simulate function
pub fn simulate(params: cli::simulate::Command) -> Result<()> {
    let config = Config::from_command(&params)?;

    let seed = if let Some(seed) = config.seed {
        seed
    } else {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)?
            .as_secs()
    };
    log::info!("Random seed {}", seed);
    let mut main_rng = rand::rngs::StdRng::seed_from_u64(seed);

    log::info!("Start read reference");
    let reference = Genome::from_path(&params.reference_path)?;
    log::info!("End read reference");

    let (mut genome, lookup, description) = if let Some(name) = &params.variant_name {
        log::info!("Start apply variant {}", name);
        let path = params
            .variant_definitions
            .as_ref()
            .ok_or(Variant::MissingDefinitions)?;
        let definitions = Definitions::from_dir(path)?;
        let (genome, lookup) = definitions.get(name)?.apply(&reference)?;
        log::info!("End apply variant {}", name);

        (genome, lookup, name.clone())
    } else {
        let lookup = CoordinateLookup::identity(&reference);

        (reference, lookup, "Reference".to_string())
    };

    log::info!("Start read primer definition");
    let amplicons = Amplicons::from_path(&params.primer_definition)?;
    log::info!("End read primer definition, {} amplicons", amplicons.len());

    let windows = resolve_amplicons(&config, &amplicons, &lookup)?;

    if config.snps > 0 {
        log::info!("Start add {} snps", config.snps);
        snp::add_snps(&mut genome, config.snps, &mut main_rng)?;
        log::info!("End add snps");
    }

    let sampler = Sampler::new(
        &genome,
        model::Length::new(config.read_length as f64, config.read_stddev)?,
        model::Error::new(config.error_rate),
    );

    for replicate in 0..config.repeats {
        let stem = config.stem(&params.output, replicate);
        let mut rng = rand::rngs::StdRng::seed_from_u64(main_rng.next_u64());

        if params.write_fasta {
            log::info!("Write {}.fasta", stem);
            genome.write_fasta(
                std::fs::File::create(format!("{}.fasta", stem))?,
                &description,
            )?;
        }

        log::info!("Start write {} reads of replicate {}", config.technology, replicate);
        let mut emitter = Emitter::create(config.technology, &stem)?;
        emit_replicate(&mut emitter, &windows, &sampler, config.pairs(), &mut rng)?;
        log::info!("End write reads of replicate {}", replicate);
    }

    Ok(())
}

/// Check amplicon span and find amplicon position in working sequence, fail before any output is write
pub fn resolve_amplicons<'a>(
    config: &Config,
    amplicons: &'a Amplicons,
    lookup: &CoordinateLookup,
) -> Result<Vec<Window<'a>>> {
    amplicons
        .iter()
        .map(|amplicon| -> Result<Window<'a>> {
            config.check_amplicon(amplicon)?;

            let window = Window::resolve(amplicon, lookup)?;
            log::debug!(
                "Amplicon {} {}-{} is at {}-{}",
                amplicon.name,
                amplicon.start,
                amplicon.end,
                window.start,
                window.end
            );

            Ok(window)
        })
        .collect()
}

/// Write reads of every amplicon for one replicate
pub fn emit_replicate<E, R>(
    emitter: &mut E,
    windows: &[Window],
    sampler: &Sampler,
    pairs: usize,
    rng: &mut R,
) -> Result<()>
where
    E: EmitReads,
    R: rand::Rng,
{
    for window in windows {
        emitter.emit_amplicon(window, sampler, pairs, rng)?;
    }

    emitter.flush()
}

#[cfg(test)]
mod t {
    use super::*;

    use crate::amplicons::Amplicon;

    fn init() {
        let _ = env_logger::builder()
            .filter_level(log::LevelFilter::Trace)
            .is_test(true)
            .try_init();
    }

    fn config(depth: u64) -> Config {
        Config::new(250, 0.0, depth, 0.0, 0, 1, Technology::Illumina, Some(42)).unwrap()
    }

    fn amplicons() -> Amplicons {
        Amplicons(vec![
            Amplicon {
                name: "amp1".to_string(),
                start: 1,
                end: 300,
            },
            Amplicon {
                name: "amp2".to_string(),
                start: 201,
                end: 600,
            },
        ])
    }

    #[test]
    fn resolve() {
        init();

        let genome = Genome::new("ref".to_string(), vec![b'A'; 1000]);
        let amplicons = amplicons();

        let windows =
            resolve_amplicons(&config(4), &amplicons, &CoordinateLookup::identity(&genome))
                .unwrap();

        assert_eq!(windows.len(), 2);
        assert_eq!((windows[1].start, windows[1].end), (200, 599));
    }

    #[test]
    fn resolve_reject_span() {
        init();

        let genome = Genome::new("ref".to_string(), vec![b'A'; 1000]);
        let mut amplicons = amplicons();
        amplicons.0[1].end = 800;

        assert!(
            resolve_amplicons(&config(4), &amplicons, &CoordinateLookup::identity(&genome))
                .is_err()
        );
    }

    #[test]
    fn resolve_reject_missing() {
        init();

        let genome = Genome::new("ref".to_string(), vec![b'A'; 500]);

        assert!(
            resolve_amplicons(&config(4), &amplicons(), &CoordinateLookup::identity(&genome))
                .is_err()
        );
    }
}
