use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use common::ChartType;
use std::path::PathBuf;

pub mod commands;

use commands::{render, sample};

#[derive(Parser)]
#[command(name = "capacity-dashboard")]
#[command(about = "Render workforce-capacity performance charts")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SampleFormat {
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a chart into a standalone HTML page
    ///
    /// The input is an ordered array of data points in JSON or YAML
    /// (chosen by file extension, JSON otherwise). `bar` and `line` read
    /// indexCompletion/indexedCapacity/actualCapacity, `combo` reads
    /// indexFGCompletion/capacityAt100/capacityWithAbs/percentage.
    Render {
        /// Path to the data file
        #[arg(short, long)]
        input: PathBuf,

        /// Chart variant
        #[arg(short = 't', long = "type", default_value_t = ChartType::Bar)]
        chart_type: ChartType,

        /// Card title
        #[arg(long, env = "CHART_TITLE", default_value = "Performance")]
        title: String,

        /// Hide the legend (bar and line only)
        #[arg(long)]
        no_legend: bool,

        /// YAML or JSON theme overriding the default palette
        #[arg(long, env = "CHART_THEME")]
        theme: Option<PathBuf>,

        /// Output HTML file, stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the sample capacity report
    Sample {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = SampleFormat::Json)]
        format: SampleFormat,
    },
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Render {
                input,
                chart_type,
                title,
                no_legend,
                theme,
                output,
            } => {
                render(
                    &input,
                    chart_type,
                    &title,
                    !no_legend,
                    theme.as_deref(),
                    output.as_deref(),
                )?;
            }
            Commands::Sample { format } => {
                sample(format)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_defaults() {
        let cli =
            Cli::try_parse_from(["capacity-dashboard", "render", "--input", "data.json"]).unwrap();

        match cli.command {
            Commands::Render { chart_type, no_legend, output, .. } => {
                assert_eq!(chart_type, ChartType::Bar);
                assert!(!no_legend);
                assert!(output.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_render_type_flag() {
        let cli = Cli::try_parse_from([
            "capacity-dashboard", "render", "-i", "data.yaml", "--type", "combo", "--no-legend",
        ])
        .unwrap();

        match cli.command {
            Commands::Render { chart_type, no_legend, .. } => {
                assert_eq!(chart_type, ChartType::Combo);
                assert!(no_legend);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(
            Cli::try_parse_from(["capacity-dashboard", "render", "-i", "d.json", "-t", "pie"])
                .is_err()
        );
    }
}
