use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use tchisla::report::{format_levels, format_solution, format_summary};
use tchisla::solver::DEFAULT_MAX_CLOSURE_DEPTH;
use tchisla::{Expression, Solution, Solver, SolverConfig, parse_targets, validate_base_digit};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Tchisla - build numbers from as few copies of one digit as possible
#[derive(Parser, Debug)]
#[command(name = "tchisla")]
#[command(about = "Find the shortest expressions that build each target from a single digit")]
#[command(version)]
pub struct CliArgs {
    /// Base digit (1-9)
    pub digit: u8,

    /// Comma separated target integers, e.g. "5,0"
    #[arg(allow_hyphen_values = true)]
    pub targets: String,

    /// Longest chain of unary operators applied within one level
    #[arg(long, default_value_t = DEFAULT_MAX_CLOSURE_DEPTH)]
    pub max_depth: usize,

    /// Give up after this many digits instead of searching forever
    #[arg(long)]
    pub max_level: Option<usize>,

    /// Evaluate combinations on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Print every value found at every level
    #[arg(long)]
    pub levels: bool,

    /// Print how many values each level produced
    #[arg(long)]
    pub summary: bool,

    /// Re-evaluate each solution path and fail on a mismatch
    #[arg(long)]
    pub verify: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub digit: u8,
    pub targets: Vec<i64>,
    pub solver: SolverConfig,
    pub levels: bool,
    pub summary: bool,
    pub verify: bool,
    pub log_level: LogLevel,
}

impl CliArgs {
    fn into_config(self) -> Result<CliConfig> {
        validate_base_digit(self.digit).context("Invalid base digit")?;
        let targets = parse_targets(&self.targets).context("Invalid target list")?;

        Ok(CliConfig {
            digit: self.digit,
            targets,
            solver: SolverConfig {
                max_closure_depth: self.max_depth,
                max_level: self.max_level,
                parallel: !self.sequential,
            },
            levels: self.levels,
            summary: self.summary,
            verify: self.verify,
            log_level: self.log_level,
        })
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    CliArgs::parse().into_config()
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Check that a solution's path evaluates to its target with the claimed digit count
pub fn verify_solution(solution: &Solution) -> Result<()> {
    let expr = Expression::parse(&solution.path)
        .with_context(|| format!("Cannot parse path '{}'", solution.path))?;
    let value = expr
        .evaluate()
        .with_context(|| format!("Cannot evaluate path '{}'", solution.path))?;

    if value != solution.target {
        bail!(
            "Path '{}' evaluates to {}, not {}",
            solution.path,
            value,
            solution.target
        );
    }
    if expr.uses() != solution.uses {
        bail!(
            "Path '{}' uses {} digits, not {}",
            solution.path,
            expr.uses(),
            solution.uses
        );
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    if config.solver.max_level.is_none() {
        warn!("No --max-level given; an unreachable target will search forever");
    }

    let solver = Solver::new(config.digit, config.solver)?;
    info!(
        "Searching for {:?} using the digit {}",
        config.targets, config.digit
    );

    let calculation = solver.calculate(&config.targets)?;

    if config.levels {
        print!("{}", format_levels(&calculation.store));
    }
    if config.summary {
        println!("{}", format_summary(&calculation.store));
    }

    for solution in &calculation.solutions {
        if config.verify {
            verify_solution(solution)?;
        }
        println!("{}", format_solution(solution));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(digit: u8, targets: &str) -> CliArgs {
        CliArgs {
            digit,
            targets: targets.to_string(),
            max_depth: DEFAULT_MAX_CLOSURE_DEPTH,
            max_level: None,
            sequential: false,
            levels: false,
            summary: false,
            verify: false,
            log_level: LogLevel::Warn,
        }
    }

    #[test]
    fn test_into_config() {
        let result = args(4, "5,0").into_config();
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert_eq!(config.digit, 4);
            assert_eq!(config.targets, vec![5, 0]);
            assert_eq!(config.solver, SolverConfig::default());
        }
    }

    #[test]
    fn test_into_config_sequential_with_limit() {
        let mut cli = args(7, "-3");
        cli.sequential = true;
        cli.max_level = Some(3);
        cli.max_depth = 2;

        let result = cli.into_config();
        assert!(result.is_ok());
        if let Ok(config) = result {
            assert_eq!(config.targets, vec![-3]);
            assert!(!config.solver.parallel);
            assert_eq!(config.solver.max_level, Some(3));
            assert_eq!(config.solver.max_closure_depth, 2);
        }
    }

    #[test]
    fn test_into_config_rejects_bad_input() {
        assert!(args(0, "5").into_config().is_err());
        assert!(args(4, "").into_config().is_err());
        assert!(args(4, "5,five").into_config().is_err());
    }

    #[test]
    fn test_cli_args_parsing() {
        let result = CliArgs::try_parse_from(["tchisla", "4", "5,0", "--max-level", "6", "--verify"]);
        assert!(result.is_ok());
        if let Ok(cli) = result {
            assert_eq!(cli.digit, 4);
            assert_eq!(cli.targets, "5,0");
            assert_eq!(cli.max_level, Some(6));
            assert!(cli.verify);
            assert!(matches!(cli.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_verify_solution() {
        let good = Solution {
            target: 5,
            path: "(4+(4/4))".to_string(),
            uses: 3,
        };
        assert!(verify_solution(&good).is_ok());

        let wrong_value = Solution {
            target: 6,
            ..good.clone()
        };
        assert!(verify_solution(&wrong_value).is_err());

        let wrong_uses = Solution { uses: 2, ..good };
        assert!(verify_solution(&wrong_uses).is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
