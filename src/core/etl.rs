use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives a [`Pipeline`] through extract, transform and load.
pub struct ReportEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ReportEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    #[cfg(test)]
    pub(crate) fn pipeline(&self) -> &P {
        &self.pipeline
    }

    /// Runs all three phases and returns the written path. Nothing is written
    /// unless extract and transform both succeed.
    pub fn run(&self) -> Result<String> {
        tracing::info!("Reading client record");
        let record = self.pipeline.extract()?;
        tracing::info!("Read record for '{}'", record.info.name);

        tracing::info!("Rendering client sheet");
        let report = self.pipeline.transform(record)?;
        tracing::info!("Rendered {} ({} bytes)", report.file_name, report.html.len());

        tracing::info!("Writing client sheet");
        let output_path = self.pipeline.load(report)?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
