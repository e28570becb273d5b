//! All stuff relate to command line

/* module declaration */
pub mod simulate;

/// An amplicon read generator, produce fastq of a reference or of a variant
#[derive(clap::Parser, std::fmt::Debug)]
#[clap(name = "ampsim", version = "0.1")]
pub struct Command {
    /// Subcommand call
    #[clap(subcommand)]
    pub subcmd: SubCommand,

    /// Verbosity level also control by environment variable AMPSIM_LOG if flag is set AMPSIM_LOG value is ignored
    #[clap(short = 'v', long = "verbosity", parse(from_occurrences))]
    pub verbosity: i8,
}

#[derive(clap::Subcommand, Debug)]
pub enum SubCommand {
    Simulate(simulate::Command),
}

/// Convert verbosity level (number of v) is log::Level
pub fn i82level(level: i8) -> Option<log::Level> {
    match level {
        std::i8::MIN..=0 => None,
        1 => Some(log::Level::Error),
        2 => Some(log::Level::Warn),
        3 => Some(log::Level::Info),
        4 => Some(log::Level::Debug),
        5..=std::i8::MAX => Some(log::Level::Trace),
    }
}

#[cfg(test)]
mod t {
    use super::*;

    use clap::Parser as _;

    #[test]
    fn loglevel() {
        assert_eq!(i82level(i8::MIN), None);
        assert_eq!(i82level(-3), None);
        assert_eq!(i82level(1), Some(log::Level::Error));
        assert_eq!(i82level(2), Some(log::Level::Warn));
        assert_eq!(i82level(3), Some(log::Level::Info));
        assert_eq!(i82level(4), Some(log::Level::Debug));
        assert_eq!(i82level(5), Some(log::Level::Trace));
        assert_eq!(i82level(i8::MAX), Some(log::Level::Trace));
    }

    #[test]
    fn parse_verbosity() {
        let params = Command::try_parse_from([
            "ampsim",
            "-vvv",
            "simulate",
            "--reference",
            "ref.fasta",
            "--primer_definition",
            "scheme.json",
            "--output",
            "out",
        ])
        .unwrap();

        assert_eq!(params.verbosity, 3);
        assert!(matches!(params.subcmd, SubCommand::Simulate(_)));
    }
}
