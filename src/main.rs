//! Command-line front end: runs one search over [`WavySurface`] and
//! reports the result.

use std::ffi::OsString;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use log::{debug, info};

use u_landscape::driver::{run_search, SearchParams};
use u_landscape::export::write_csv;
use u_landscape::objective::surface_grid;
use u_landscape::random::rng_from_seed;
use u_landscape::sa::SamplingDomain;
use u_landscape::{ConfigError, SearchBounds, WavySurface};

const USAGE: &str = "Usage: u-landscape <step_size> <xmin> <xmax> <ymin> <ymax> <searchType> <num_restarts> <max_temp>
Valid Search Types: HC, RR, SA
For data that is not required for the chosen search type please enter 0 as a placeholder.";

/// Lattice spacing of the exported surface grid.
const SURFACE_SPACING: f64 = 0.1;

#[derive(Parser, Debug)]
#[command(name = "u-landscape", version, about = "Local search over a 2D surface")]
struct Cli {
    #[arg(allow_negative_numbers = true)]
    step_size: f64,
    #[arg(allow_negative_numbers = true)]
    xmin: f64,
    #[arg(allow_negative_numbers = true)]
    xmax: f64,
    #[arg(allow_negative_numbers = true)]
    ymin: f64,
    #[arg(allow_negative_numbers = true)]
    ymax: f64,

    /// One of HC, RR, SA.
    search_type: String,

    num_restarts: usize,

    #[arg(allow_negative_numbers = true)]
    max_temp: f64,

    /// Fix the random seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Region simulated annealing samples from.
    #[arg(long, value_enum, default_value_t = SaDomainArg::Fixed)]
    sa_domain: SaDomainArg,

    /// Write the search path as CSV.
    #[arg(long)]
    path_out: Option<PathBuf>,

    /// Write the surface over the bounds as CSV.
    #[arg(long)]
    surface_out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SaDomainArg {
    /// The square [-2.5, 2.5]^2.
    Fixed,
    /// The bounds given on the command line.
    Bounds,
}

impl From<SaDomainArg> for SamplingDomain {
    fn from(arg: SaDomainArg) -> Self {
        match arg {
            SaDomainArg::Fixed => SamplingDomain::default(),
            SaDomainArg::Bounds => SamplingDomain::Bounds,
        }
    }
}

impl Cli {
    /// Parses an explicit argv (program name first).
    fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args)
    }

    fn bounds(&self) -> SearchBounds {
        SearchBounds::new(self.xmin, self.xmax, self.ymin, self.ymax)
    }

    /// Maps the arguments onto driver parameters; rejects unknown search types.
    fn search_params(&self) -> Result<SearchParams, ConfigError> {
        Ok(SearchParams {
            kind: self.search_type.parse()?,
            step_size: self.step_size,
            bounds: self.bounds(),
            num_restarts: self.num_restarts,
            max_temperature: self.max_temp,
            sa_domain: self.sa_domain.into(),
        })
    }
}

/// Exit status for a failed parse; `None` when clap printed help or version.
fn argument_error_status(err: &clap::Error) -> Option<i32> {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => None,
        _ => Some(1),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = match Cli::parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => match argument_error_status(&err) {
            None => err.exit(),
            Some(status) => {
                debug!("argument error: {err}");
                eprintln!("{USAGE}");
                process::exit(status);
            }
        },
    };

    let params = cli.search_params()?;
    let kind = params.kind;
    let bounds = params.bounds;

    let mut rng = rng_from_seed(cli.seed);
    let outcome = run_search(&WavySurface, &params, &mut rng)?;
    info!("{kind} search visited {} positions", outcome.path.len());

    if let Some(min) = outcome.minimum {
        println!("Minimum:\nx = {}\ny = {}\nz = {}", min.x, min.y, min.z);
    }

    if let Some(path) = &cli.path_out {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_csv(&outcome.path, BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    if let Some(path) = &cli.surface_out {
        let grid = surface_grid(&WavySurface, &bounds, SURFACE_SPACING)?;
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_csv(&grid.samples, BufWriter::new(file))
            .with_context(|| format!("writing {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use u_landscape::driver::SearchKind;
    use u_landscape::random::create_rng;

    fn argv(args: &[&str]) -> Vec<String> {
        std::iter::once("u-landscape")
            .chain(args.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_too_few_arguments() {
        let err = Cli::parse_args(argv(&["0.1", "-1", "1", "-1", "1", "HC", "0"])).unwrap_err();
        assert_eq!(argument_error_status(&err), Some(1));
    }

    #[test]
    fn test_too_many_arguments() {
        let err = Cli::parse_args(argv(&["0.1", "-1", "1", "-1", "1", "HC", "0", "0", "7"]))
            .unwrap_err();
        assert_eq!(argument_error_status(&err), Some(1));
    }

    #[test]
    fn test_no_arguments() {
        let err = Cli::parse_args(argv(&[])).unwrap_err();
        assert_eq!(argument_error_status(&err), Some(1));
    }

    #[test]
    fn test_non_numeric_value() {
        let err = Cli::parse_args(argv(&["step", "-1", "1", "-1", "1", "HC", "0", "0"]))
            .unwrap_err();
        assert_eq!(argument_error_status(&err), Some(1));

        let err = Cli::parse_args(argv(&["0.1", "-1", "1", "-1", "1", "RR", "ten", "0"]))
            .unwrap_err();
        assert_eq!(argument_error_status(&err), Some(1));
    }

    #[test]
    fn test_help_is_not_an_error_status() {
        let err = Cli::parse_args(argv(&["--help"])).unwrap_err();
        assert_eq!(argument_error_status(&err), None);
    }

    #[test]
    fn test_negative_bounds() {
        let cli = Cli::parse_args(argv(&["0.1", "-2.5", "-0.5", "-3", "-1", "HC", "0", "0"]))
            .unwrap();
        assert_eq!(cli.bounds(), SearchBounds::new(-2.5, -0.5, -3.0, -1.0));
    }

    #[test]
    fn test_unknown_search_type() {
        let cli = Cli::parse_args(argv(&["0.1", "-1", "1", "-1", "1", "XX", "0", "0"])).unwrap();
        assert_eq!(
            cli.search_params().unwrap_err(),
            ConfigError::UnknownSearchKind("XX".into())
        );
    }

    #[test]
    fn test_placeholder_invocations_run() {
        let cases = [
            (["0.1", "-1", "0.8", "-1", "0.6", "HC", "0", "0"], SearchKind::HillClimb),
            (["0.1", "-2.5", "2.5", "-2.5", "2.5", "RR", "5", "0"], SearchKind::RandomRestart),
            (["0", "-2.5", "2.5", "-2.5", "2.5", "SA", "0", "1"], SearchKind::SimulatedAnnealing),
        ];
        for (args, kind) in cases {
            let cli = Cli::parse_args(argv(&args)).unwrap();
            let params = cli.search_params().unwrap();
            assert_eq!(params.kind, kind);
            let outcome = run_search(&WavySurface, &params, &mut create_rng(3)).unwrap();
            assert!(!outcome.path.is_empty());
        }
    }

    #[test]
    fn test_optional_flags() {
        let cli = Cli::parse_args(argv(&[
            "0.1", "-1", "1", "-1", "1", "SA", "0", "5", "--seed", "42", "--sa-domain", "bounds",
        ]))
        .unwrap();
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.search_params().unwrap().sa_domain, SamplingDomain::Bounds);
    }

    #[test]
    fn test_overflowing_bounds_are_config_errors() {
        let cli = Cli::parse_args(argv(&["0.1", "-1e308", "1e308", "0", "1", "RR", "1", "0"]))
            .unwrap();
        let params = cli.search_params().unwrap();
        let err = run_search(&WavySurface, &params, &mut create_rng(1)).unwrap_err();
        assert_eq!(err, ConfigError::UnboundedSpan { axis: 'x' });
    }
}
