use anyhow::Result;
use common::sample::mock_chart_data;
use tracing::debug;

use crate::cli::SampleFormat;

pub fn sample(format: SampleFormat) -> Result<()> {
    let data = mock_chart_data();
    debug!("Printing {} sample points as {:?}", data.len(), format);

    let text = match format {
        SampleFormat::Json => serde_json::to_string_pretty(&data)? + "\n",
        SampleFormat::Yaml => serde_yaml::to_string(&data)?,
    };
    print!("{}", text);

    Ok(())
}
